use clap::{ArgAction, CommandFactory, Parser};

use crate::error::GoofyError;
use crate::identifier::{Digest, IdFormat, Identifier};

pub mod input;

pub const EXIT_USAGE: u8 = 1;

const AFTER_HELP: &str = "\
Examples:
  goofy \"hello world!\"           # outputs: 25 91 44
  goofy --plain \"hello world!\"   # outputs: 259144
  echo \"hello world!\" | goofy -  # outputs: 25 91 44

Exit codes:
  0 - success
  1 - invalid usage";

#[derive(Debug, Parser)]
#[command(name = "goofy", version)]
#[command(about = "Generate a 6-digit hash ID from a string")]
#[command(
    long_about = "Generate a short, memorable 6-digit ID from a string. Only the first 32 UTF-8 bytes are hashed; collisions are expected."
)]
#[command(disable_help_flag = true, after_help = AFTER_HELP)]
pub struct Cli {
    #[arg(long, help = "Output as plain 6-digit string instead of \"XX XX XX\"")]
    pub plain: bool,
    #[arg(long, help = "Emit structured JSON output")]
    pub json: bool,
    #[arg(short = 'h', long, action = ArgAction::SetTrue, help = "Show help")]
    pub help: bool,
    #[arg(value_name = "TEXT", help = "Text to hash; '-' reads it from stdin")]
    pub text: Option<String>,
}

#[derive(Debug)]
pub enum CommandOutput {
    Help(String),
    Text(String),
    Json(Digest),
}

impl Cli {
    pub fn format(&self) -> IdFormat {
        if self.plain {
            IdFormat::Plain
        } else {
            IdFormat::Spaced
        }
    }
}

pub fn render_help() -> String {
    Cli::command().render_help().to_string()
}

pub fn run(cli: Cli) -> Result<CommandOutput, GoofyError> {
    if cli.help {
        return Ok(CommandOutput::Help(render_help()));
    }

    let format = cli.format();
    let text = match cli.text.as_deref() {
        None => return Err(GoofyError::MissingText),
        Some("-") => input::read_text(std::io::stdin().lock())?,
        Some(text) => text.to_string(),
    };

    if cli.json {
        return Ok(CommandOutput::Json(Digest::of(&text)));
    }
    Ok(CommandOutput::Text(Identifier::from_text(&text).render(format)))
}
