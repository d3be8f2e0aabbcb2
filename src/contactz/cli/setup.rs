use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactz", bin_name = "contactz", version)]
#[command(about = "Command-line address book for phone numbers and birthdays", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding address_book.json and config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging on stderr (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a contact with one or more phone numbers
    Add {
        name: String,

        /// Ten-digit phone numbers
        #[arg(required = true, num_args = 1..)]
        phones: Vec<String>,

        /// Birthday as YYYY-MM-DD or DD-MM-YYYY
        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// Replace one of a contact's phone numbers
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact's phone numbers
    Phone { name: String },

    /// Add a phone number to an existing contact
    AddPhone { name: String, phone: String },

    /// Remove a phone number from a contact
    RemovePhone { name: String, phone: String },

    /// Set or clear a contact's birthday
    Birthday {
        name: String,

        /// YYYY-MM-DD or DD-MM-YYYY
        #[arg(required_unless_present = "clear")]
        date: Option<String>,

        /// Remove the stored birthday
        #[arg(long, conflicts_with = "date")]
        clear: bool,
    },

    /// List contacts, page by page
    #[command(visible_aliases = ["show-all", "ls"])]
    Show {
        /// Only print this page (1-based)
        #[arg(short, long)]
        page: Option<usize>,

        /// Contacts per page (defaults to the page-size setting)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Find contacts whose name or phone contains QUERY
    Search { query: String },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Get or set configuration values
    Config {
        /// Configuration key (e.g., page-size)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },

    /// Interactive assistant (the default)
    Shell,
}

/// One line typed into the interactive shell: a subcommand without the binary name.
#[derive(Parser, Debug)]
#[command(
    name = "contactz",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}
