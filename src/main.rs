use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use goofy::cli::{Cli, CommandOutput, EXIT_USAGE, render_help};
use goofy::error::GoofyError;
use miette::Diagnostic;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };
    let json = cli.json;

    match run(cli) {
        Ok(Reply::Stdout(output)) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Ok(Reply::Stderr(output)) => {
            eprintln!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            report(&error, json);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

enum Reply {
    Stdout(String),
    Stderr(String),
}

fn run(cli: Cli) -> Result<Reply, GoofyError> {
    match goofy::cli::run(cli)? {
        CommandOutput::Help(help) => Ok(Reply::Stderr(help)),
        CommandOutput::Text(id) => Ok(Reply::Stdout(id)),
        CommandOutput::Json(digest) => serde_json::to_string_pretty(&digest)
            .map(Reply::Stdout)
            .map_err(|source| GoofyError::ResponseSerialization { source }),
    }
}

fn report(error: &GoofyError, json: bool) {
    if json {
        let serialized = serde_json::to_string_pretty(&error.to_error_response())
            .unwrap_or_else(|_| {
                "{\"error\":{\"type\":\"serialization_error\",\"message\":\"Failed to serialize error response\"}}"
                    .to_string()
            });
        eprintln!("{serialized}");
        return;
    }

    eprintln!("Error: {error}");
    if let Some(help) = error.help() {
        eprintln!("Hint: {help}");
    }
    if error.is_usage() {
        eprintln!();
        eprintln!("{}", render_help());
    }
}
