//! # CLI Layer
//!
//! This module is **one possible UI client** for contactz, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin for the shell)
//! - Uses `std::process::exit` (via `main.rs`)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main entry (called by `main.rs`)
//! - `init_context()`: Resolves the data directory and opens the API
//! - `dispatch()`: Runs one parsed command, shared by one-shot mode and the shell
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::print::{print_contacts, print_messages, print_pages};
use super::setup::{Cli, Commands};
use super::shell;
use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;
use contactz::api::{CmdResult, ConfigAction, ContactzApi};
use contactz::config::KEYS;
use contactz::error::{ContactzError, Result};
use contactz::model::BIRTHDAY_FORMAT;
use contactz::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

const HOME_ENV: &str = "CONTACTZ_HOME";
const CLI_DATE_FORMAT: &str = "%d-%m-%Y";

pub(super) struct AppContext {
    pub(super) api: ContactzApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Shell) | None => shell::run(&mut ctx),
        Some(command) => dispatch(&mut ctx, command),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();

    // -v only ever raises what RUST_LOG already allows
    let filter = match verbosity_level(verbosity) {
        Some(level) if filter.max_level_hint().map_or(true, |max| max < level) => {
            filter.add_directive(level.into())
        }
        _ => filter,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn verbosity_level(verbosity: u8) -> Option<tracing::Level> {
    match verbosity {
        0 => None,
        1 => Some(tracing::Level::INFO),
        2 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    tracing::debug!(path = %data_dir.display(), "using data directory");

    let api = ContactzApi::open(FileStore::new(&data_dir), data_dir);
    if let Some(e) = api.load_error() {
        eprintln!(
            "{}",
            format!("Warning: could not read the address book, starting empty: {}", e).yellow()
        );
    }

    Ok(AppContext { api })
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "contactz", "contactz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ContactzError::Config(format!(
                "could not determine a data directory, set {} or pass --data-dir",
                HOME_ENV
            ))
        })
}

/// Accepts `DD-MM-YYYY` as well as the stored `YYYY-MM-DD` form.
fn normalize_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, CLI_DATE_FORMAT) {
        Ok(date) => date.format(BIRTHDAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

pub(super) fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Add {
            name,
            phones,
            birthday,
        } => handle_add(ctx, &name, &phones, birthday),
        Commands::Change {
            name,
            old_phone,
            new_phone,
        } => report(ctx.api.change_phone(&name, &old_phone, &new_phone)?),
        Commands::Phone { name } => report(ctx.api.phones(&name)?),
        Commands::AddPhone { name, phone } => report(ctx.api.add_phone(&name, &phone)?),
        Commands::RemovePhone { name, phone } => report(ctx.api.remove_phone(&name, &phone)?),
        Commands::Birthday { name, date, clear } => handle_birthday(ctx, &name, date, clear),
        Commands::Show { page, page_size } => handle_show(ctx, page, page_size),
        Commands::Search { query } => handle_search(ctx, &query),
        Commands::Delete { name } => report(ctx.api.delete_contact(&name)?),
        Commands::Config { key, value } => handle_config(ctx, key, value),
        Commands::Shell => {
            println!("{}", "Already in the interactive shell".dimmed());
            Ok(())
        }
    }
}

fn report(result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: &str,
    phones: &[String],
    birthday: Option<String>,
) -> Result<()> {
    let birthday = birthday.as_deref().map(normalize_date);
    report(ctx.api.add_contact(name, phones, birthday.as_deref())?)
}

fn handle_birthday(
    ctx: &mut AppContext,
    name: &str,
    date: Option<String>,
    clear: bool,
) -> Result<()> {
    let date = if clear {
        None
    } else {
        date.as_deref().map(normalize_date)
    };
    report(ctx.api.set_birthday(name, date.as_deref())?)
}

fn handle_show(ctx: &mut AppContext, page: Option<usize>, page_size: Option<usize>) -> Result<()> {
    let result = ctx.api.show(page, page_size)?;
    print_pages(&result.pages);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search(query)?;
    print_contacts(&result.listed_contacts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in KEYS {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
