//! # Contactz Architecture
//!
//! Contactz is a small address book: names, phone numbers and birthdays, kept in
//! memory while it runs and saved to disk after every change. The library is
//! UI-agnostic; the `contactz` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot subcommands and the interactive shell           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the in-memory AddressBook             │
//! │  - Loads once, saves after each change                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! │  - Bad input becomes messages, never panics or exits        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (book.rs, model/)          Storage (store/)         │
//! │  - AddressBook, Record             - BookStore trait        │
//! │  - Name, Phone, Birthday           - FileStore, InMemory    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation
//!
//! Field values are validated when they are built. A `Phone` is always ten
//! digits, a `Birthday` is always a real date and a `Name` is never empty, so
//! the rest of the code never re-checks them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`book`]: The keyed collection of records, pagination and search
//! - [`model`]: `Record` and the validated field types
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the interactive shell and printing for the binary (not part of the lib API)

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
