//! Interactive command line parsing
//!
//! Each input line becomes one [`Command`]. Editing commands map directly to
//! an [`EditorMessage`]; the rest are handled by the terminal front-end.

use glyph_engine::BitOrder;
use glyph_engine_edit::EditorMessage;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(EditorMessage),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' needs an argument: {argument}")]
    MissingArgument { command: String, argument: &'static str },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("'{0}' is not a bit order")]
    InvalidBitOrder(String),
}

/// Parse one input line, `Ok(None)` for blank lines
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    let command = match name.to_ascii_lowercase().as_str() {
        "toggle" | "t" => {
            let x = number_arg(name, args.next(), "X")?;
            let y = number_arg(name, args.next(), "Y")?;
            Command::Edit(EditorMessage::ToggleCell { x, y })
        }
        "click" => {
            let px = number_arg(name, args.next(), "PX")?;
            let py = number_arg(name, args.next(), "PY")?;
            Command::Edit(EditorMessage::Click { px, py })
        }
        "rotate" | "r" => Command::Edit(EditorMessage::RotateRight),
        "clear" | "c" => Command::Edit(EditorMessage::Clear),
        "copy" => Command::Edit(EditorMessage::CopyToClipboard),
        "paste" => Command::Edit(EditorMessage::PasteFromClipboard),
        "text" => {
            if rest.is_empty() {
                return Err(missing(name, "TEXT"));
            }
            Command::Edit(EditorMessage::SetText(rest.to_string()))
        }
        "load" => Command::Edit(EditorMessage::LoadFromText),
        "order" => {
            let value = args.next().ok_or_else(|| missing(name, "lsb|msb"))?;
            Command::Edit(EditorMessage::SetBitOrder(parse_bit_order(value)?))
        }
        "show" | "s" => Command::Show,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(name.to_string())),
    };
    Ok(Some(command))
}

pub fn parse_bit_order(value: &str) -> Result<BitOrder, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "lsb" | "lsb-top" => Ok(BitOrder::LsbTop),
        "msb" | "msb-top" => Ok(BitOrder::MsbTop),
        _ => Err(CommandError::InvalidBitOrder(value.to_string())),
    }
}

fn number_arg<T: std::str::FromStr>(command: &str, arg: Option<&str>, argument: &'static str) -> Result<T, CommandError> {
    let arg = arg.ok_or_else(|| missing(command, argument))?;
    arg.parse().map_err(|_| CommandError::InvalidNumber(arg.to_string()))
}

fn missing(command: &str, argument: &'static str) -> CommandError {
    CommandError::MissingArgument {
        command: command.to_string(),
        argument,
    }
}
