use std::io::{self, BufRead, Write};

use glyph_engine_edit::{GlyphClipboard, GlyphEditState, Notification};

use crate::commands::{parse_command, Command, CommandError};
use crate::fl;
use crate::ui::render::render_grid;
use crate::Options;

const PROMPT: &str = "> ";

/// Line based front-end driving a [`GlyphEditState`]
pub struct TerminalEditor<C: GlyphClipboard> {
    state: GlyphEditState,
    clipboard: C,
    options: Options,
}

impl<C: GlyphClipboard> TerminalEditor<C> {
    pub fn new(options: Options, clipboard: C) -> Self {
        let mut state = GlyphEditState::with_bit_order(options.bit_order);
        state.set_column_label(fl!("column-label"));
        Self { state, clipboard, options }
    }

    pub fn state(&self) -> &GlyphEditState {
        &self.state
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        self.draw(output)?;
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut quit_warned = false;
        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => {
                    if !self.state.is_dirty() || quit_warned {
                        break;
                    }
                    // a second quit leaves anyway
                    quit_warned = true;
                    writeln!(output, "{}", fl!("quit-not-copied"))?;
                }
                Ok(Some(Command::Show)) => self.draw(output)?,
                Ok(Some(Command::Help)) => writeln!(output, "{}", fl!("help-text"))?,
                Ok(Some(Command::Edit(message))) => {
                    log::debug!("Editor message {message:?}");
                    let response = self.state.update_with_cell_size(message, &mut self.clipboard, self.options.cell_size);
                    if let Some(notification) = &response.notification {
                        writeln!(output, "{}", notification_text(notification))?;
                    }
                    if response.redraw {
                        self.draw(output)?;
                    }
                }
                Err(err) => {
                    log::debug!("Rejected command '{line}': {err}");
                    writeln!(output, "{}", command_error_text(&err))?;
                }
            }
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }
        writeln!(output)?;

        self.options.bit_order = self.state.bit_order();
        Ok(())
    }

    fn draw<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", fl!("title"))?;
        write!(output, "{}", render_grid(self.state.grid(), self.options.on_char, self.options.off_char))?;
        writeln!(output, "{}", fl!("bit-order-label", order = self.state.bit_order().to_string()))?;
        writeln!(output)?;
        writeln!(output, "{}", self.state.text())?;
        Ok(())
    }
}

fn notification_text(notification: &Notification) -> String {
    let title = if notification.is_error() {
        fl!("notify-title-error")
    } else {
        fl!("notify-title-info")
    };
    let message = match notification {
        Notification::Copied => fl!("notify-copied"),
        Notification::CopyFailed(err) => fl!("notify-copy-failed", error = err.to_string()),
        Notification::PasteFailed(err) => fl!("notify-paste-failed", error = err.to_string()),
        Notification::InvalidText(err) => fl!("notify-invalid-text", error = err.to_string()),
    };
    format!("[{title}] {message}")
}

fn command_error_text(err: &CommandError) -> String {
    match err {
        CommandError::Unknown(command) => fl!("error-unknown-command", command = command.clone()),
        CommandError::MissingArgument { command, argument } => {
            fl!("error-missing-argument", command = command.clone(), argument = argument.to_string())
        }
        CommandError::InvalidNumber(value) => fl!("error-invalid-number", value = value.clone()),
        CommandError::InvalidBitOrder(value) => fl!("error-invalid-bit-order", value = value.clone()),
    }
}
