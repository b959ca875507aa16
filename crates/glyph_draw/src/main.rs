#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate, clippy::missing_errors_doc)]

use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use glyph_engine::{column_report, decode, encode, format_literal, parse_literal, BitOrder};
use glyph_engine_edit::{GlyphClipboard, MemoryClipboard, SystemClipboard};
use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use semver::Version;

mod commands;
mod options;
mod ui;

pub use options::Options;
use ui::{render_grid, TerminalEditor};

lazy_static! {
    pub static ref VERSION: Version = Version::parse(env!("CARGO_PKG_VERSION")).unwrap();
}

#[derive(rust_embed::RustEmbed)]
#[folder = "i18n"]
struct Localizations;

static LANGUAGE_LOADER: Lazy<i18n_embed::fluent::FluentLanguageLoader> = Lazy::new(|| {
    let loader = i18n_embed::fluent::fluent_language_loader!();
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    let _result = i18n_embed::select(&loader, &Localizations, &requested_languages);
    loader
});

#[macro_export]
macro_rules! fl {
    ($message_id:literal) => {{
        i18n_embed_fl::fl!($crate::LANGUAGE_LOADER, $message_id)
    }};
    ($message_id:literal, $($args:expr),* $(,)?) => {{
        i18n_embed_fl::fl!($crate::LANGUAGE_LOADER, $message_id, $($args),*)
    }};
}

#[derive(Parser, Debug)]
#[command(version, about = i18n_embed_fl::fl!(crate::LANGUAGE_LOADER, "app-about"), long_about = None)]
pub struct Args {
    #[arg(long, value_enum, help = i18n_embed_fl::fl!(crate::LANGUAGE_LOADER, "arg-bit-order-help"))]
    bit_order: Option<BitOrderArg>,

    #[arg(long, help = i18n_embed_fl::fl!(crate::LANGUAGE_LOADER, "arg-no-clipboard-help"))]
    no_clipboard: bool,

    #[arg(long, value_name = "PIXELS", help = i18n_embed_fl::fl!(crate::LANGUAGE_LOADER, "arg-cell-size-help"))]
    cell_size: Option<i32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = i18n_embed_fl::fl!(crate::LANGUAGE_LOADER, "cmd-edit-about"))]
    Edit,

    #[command(about = i18n_embed_fl::fl!(crate::LANGUAGE_LOADER, "cmd-show-about"))]
    Show {
        #[arg(value_name = "LITERAL", help = i18n_embed_fl::fl!(crate::LANGUAGE_LOADER, "arg-literal-help"))]
        literal: String,
    },

    #[command(about = i18n_embed_fl::fl!(crate::LANGUAGE_LOADER, "cmd-rotate-about"))]
    Rotate {
        #[arg(value_name = "LITERAL", help = i18n_embed_fl::fl!(crate::LANGUAGE_LOADER, "arg-literal-help"))]
        literal: String,

        #[arg(long, default_value_t = 1, help = i18n_embed_fl::fl!(crate::LANGUAGE_LOADER, "arg-times-help"))]
        times: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BitOrderArg {
    LsbTop,
    MsbTop,
}

impl From<BitOrderArg> for BitOrder {
    fn from(arg: BitOrderArg) -> Self {
        match arg {
            BitOrderArg::LsbTop => BitOrder::LsbTop,
            BitOrderArg::MsbTop => BitOrder::MsbTop,
        }
    }
}

fn start_logger() -> Option<LoggerHandle> {
    let Some(log_dir) = Options::get_log_dir() else {
        eprintln!("Failed to create log file");
        return None;
    };
    let result = Logger::try_with_env_or_str("info, i18n_embed=error").and_then(|logger| {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("glyph_draw").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .create_symlink(log_dir.join("glyph_draw.log"))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
    });
    match result {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn main() {
    let args = Args::parse();
    let _logger = start_logger();

    log::info!("Starting glyph_draw {}", *VERSION);

    let mut options = Options::load_options();
    if let Some(order) = args.bit_order {
        options.bit_order = order.into();
    }
    if let Some(cell_size) = args.cell_size {
        options.cell_size = cell_size;
    }
    if args.no_clipboard {
        options.use_system_clipboard = false;
    }

    let result = match args.command {
        Some(Command::Show { literal }) => show_literal(&literal, &options, &mut io::stdout().lock()),
        Some(Command::Rotate { literal, times }) => rotate_literal(&literal, times, &options, &mut io::stdout().lock()),
        Some(Command::Edit) | None => run_editor(options),
    };

    if let Err(err) = result {
        log::error!("{err:#}");
        eprintln!("{err:#}");
        std::process::exit(1);
    }
    log::info!("Shutting down.");
}

fn show_literal<W: Write>(literal: &str, options: &Options, output: &mut W) -> anyhow::Result<()> {
    let bytes = parse_literal(literal).context("Invalid byte array")?;
    let grid = decode(&bytes, options.bit_order)?;
    write!(output, "{}", render_grid(&grid, options.on_char, options.off_char))?;
    writeln!(output)?;
    writeln!(output, "{}", column_report(&bytes, &fl!("column-label")))?;
    Ok(())
}

fn rotate_literal<W: Write>(literal: &str, times: usize, options: &Options, output: &mut W) -> anyhow::Result<()> {
    let bytes = parse_literal(literal).context("Invalid byte array")?;
    let grid = decode(&bytes, options.bit_order)?.rotated(times);
    write!(output, "{}", render_grid(&grid, options.on_char, options.off_char))?;
    writeln!(output)?;
    writeln!(output, "{}", format_literal(&encode(&grid, options.bit_order)))?;
    Ok(())
}

fn open_clipboard(options: &Options) -> Box<dyn GlyphClipboard> {
    if !options.use_system_clipboard {
        return Box::new(MemoryClipboard::new());
    }
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(err) => {
            log::warn!("{err}");
            println!("{}", fl!("clipboard-unavailable", error = err.to_string()));
            Box::new(MemoryClipboard::new())
        }
    }
}

fn run_editor(options: Options) -> anyhow::Result<()> {
    let initial_order = options.bit_order;
    let clipboard = open_clipboard(&options);
    let mut editor = TerminalEditor::new(options, clipboard);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    editor.run(stdin.lock(), &mut stdout).context("Terminal I/O failed")?;
    stdout.flush()?;

    // only the bit order is remembered, command line overrides are not
    let bit_order = editor.options().bit_order;
    if bit_order != initial_order {
        let mut stored = Options::load_options();
        stored.bit_order = bit_order;
        stored.store_options();
    }
    Ok(())
}
