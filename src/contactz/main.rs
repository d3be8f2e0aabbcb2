//! # Contactz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Run without a subcommand (or with `shell`) for the interactive assistant;
//! every other subcommand runs once and exits. Either way the address book is
//! saved after each change.
//!
//! The data directory is `--data-dir`, else `$CONTACTZ_HOME`, else the
//! platform data directory. Logging goes to stderr; raise it with `-v` or
//! `RUST_LOG`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
