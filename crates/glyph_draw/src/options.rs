use std::{fs, path::PathBuf};

use glyph_engine::BitOrder;
use glyph_engine_edit::DEFAULT_CELL_SIZE;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// =============================================================================
// Project directory constants
// =============================================================================

const PROJECT_QUALIFIER: &str = "com";
const PROJECT_ORGANIZATION: &str = "GitHub";
const PROJECT_APPLICATION: &str = "glyph_draw";

/// Lazily initialized project directories (computed once on first access)
static PROJECT_DIRS: Lazy<Option<directories::ProjectDirs>> =
    Lazy::new(|| directories::ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION));

/// Editor options, persisted in `options.toml`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Options {
    /// Row to bit mapping for export and import
    #[serde(default)]
    pub bit_order: BitOrder,

    /// Canvas cell size in pixels for click mapping
    #[serde(default = "default_cell_size")]
    pub cell_size: i32,

    #[serde(default = "default_on_char")]
    pub on_char: char,

    #[serde(default = "default_off_char")]
    pub off_char: char,

    /// Fall back to an in-memory clipboard when false
    #[serde(default = "default_true")]
    pub use_system_clipboard: bool,
}

fn default_cell_size() -> i32 {
    DEFAULT_CELL_SIZE
}

fn default_on_char() -> char {
    '█'
}

fn default_off_char() -> char {
    '·'
}

fn default_true() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bit_order: BitOrder::default(),
            cell_size: default_cell_size(),
            on_char: default_on_char(),
            off_char: default_off_char(),
            use_system_clipboard: true,
        }
    }
}

impl Options {
    pub const FILE_NAME: &'static str = "options.toml";

    pub fn load_options() -> Self {
        let Some(config_dir) = Self::get_config_dir() else {
            return Self::default();
        };
        if !config_dir.exists() && fs::create_dir_all(&config_dir).is_err() {
            log::error!("Can't create configuration directory {:?}", config_dir);
            return Self::default();
        }
        let options_file = config_dir.join(Self::FILE_NAME);
        if options_file.exists() {
            match fs::read_to_string(&options_file) {
                Ok(txt) => return Self::from_toml(&txt),
                Err(err) => log::error!("Error reading options file: {}", err),
            }
        }
        Self::default()
    }

    /// Parse options, falling back to defaults for a broken file
    pub fn from_toml(txt: &str) -> Self {
        match toml::from_str(txt) {
            Ok(options) => options,
            Err(err) => {
                log::warn!("Ignoring invalid options file: {}", err);
                Self::default()
            }
        }
    }

    pub fn store_options(&self) {
        let Some(config_dir) = Self::get_config_dir() else {
            return;
        };
        match toml::to_string(self) {
            Ok(text) => {
                if let Err(err) = fs::write(config_dir.join(Self::FILE_NAME), text) {
                    log::error!("Error writing options file: {}", err);
                }
            }
            Err(err) => log::error!("Error writing options file: {}", err),
        }
    }

    /// Returns the configuration directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        PROJECT_DIRS.as_ref().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the log directory path, creating it if needed
    pub fn get_log_dir() -> Option<PathBuf> {
        let dir = Self::get_config_dir()?;
        if !dir.exists() {
            fs::create_dir_all(&dir).ok()?;
        }
        Some(dir)
    }
}
