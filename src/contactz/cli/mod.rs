mod commands;
mod print;
pub mod setup;
mod shell;

pub use commands::run;
