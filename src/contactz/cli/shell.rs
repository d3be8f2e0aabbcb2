//! Interactive assistant: reads one command per line until `exit`, `close`,
//! `good bye` or end of input. Lines use the same subcommands as the one-shot CLI.

use super::commands::{dispatch, AppContext};
use super::print::print_messages;
use super::setup::{Commands, ShellLine};
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use contactz::api::CmdMessage;
use contactz::error::Result;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter a command: ";

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Blank,
    Greeting,
    Exit,
    Command(Commands),
    Invalid(String),
}

pub(super) fn run(ctx: &mut AppContext) -> Result<()> {
    println!("Welcome to the assistant bot!");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };

        match interpret(&line?) {
            Input::Blank => {}
            Input::Greeting => println!("How can I help you?"),
            Input::Exit => break,
            Input::Command(command) => {
                if let Err(e) = dispatch(ctx, command) {
                    tracing::error!(error = %e, "command failed");
                    print_messages(&[CmdMessage::error(format!("Error: {}", e))]);
                }
            }
            Input::Invalid(message) => println!("{}", message.red()),
        }
    }

    println!("Good bye!");
    Ok(())
}

fn interpret(line: &str) -> Input {
    let mut words: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = words.first() else {
        return Input::Blank;
    };

    let first = first.to_lowercase();
    match (first.as_str(), words.len()) {
        ("hello", 1) => return Input::Greeting,
        ("close" | "exit", 1) => return Input::Exit,
        ("good", 2) if words[1].eq_ignore_ascii_case("bye") => return Input::Exit,
        ("show", _) if words.get(1).is_some_and(|w| w.eq_ignore_ascii_case("all")) => {
            words.remove(1);
        }
        _ => {}
    }

    let mut args: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    args[0] = first;
    match ShellLine::try_parse_from(args) {
        Ok(line) => Input::Command(line.command),
        Err(e) => Input::Invalid(describe_parse_error(&e)),
    }
}

fn describe_parse_error(err: &clap::Error) -> String {
    match err.kind() {
        ErrorKind::InvalidSubcommand | ErrorKind::MissingSubcommand => {
            "Command not recognized.".to_string()
        }
        ErrorKind::MissingRequiredArgument | ErrorKind::TooFewValues => "Missing input".to_string(),
        _ => err.to_string().trim_end().to_string(),
    }
}
