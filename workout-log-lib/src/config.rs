//src/config.rs
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;
use tracing::warn;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_CONFIG_DIR: &str = "workout-log";
const CONFIG_ENV_VAR: &str = "WORKOUT_LOG_CONFIG_DIR"; // Environment variable name

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not determine configuration directory.")]
    CannotDetermineConfigDir,
    #[error("I/O error accessing config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file (TOML): {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize config data (TOML): {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

// Named colors accepted in the theme section besides #RRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum StandardColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkGrey,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    Grey,
}

// Helper to parse a string into our StandardColor enum
pub fn parse_color(color_str: &str) -> Result<StandardColor, Error> {
    for color in StandardColor::iter() {
        if format!("{:?}", color).eq_ignore_ascii_case(color_str) {
            return Ok(color);
        }
    }
    Err(Error::InvalidColor(color_str.to_string()))
}

/// A concrete colour the renderer can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Rgb(u8, u8, u8),
    Named(StandardColor),
}

impl ThemeColor {
    /// Parses `#RRGGBB` (leading `#` optional) or a `StandardColor` name.
    /// # Errors
    /// Returns `Error::InvalidColor` for anything else.
    pub fn parse(value: &str) -> Result<Self, Error> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .map_err(|_| Error::InvalidColor(value.to_string()))
            };
            return Ok(Self::Rgb(channel(0)?, channel(2)?, channel(4)?));
        }
        parse_color(trimmed)
            .map(Self::Named)
            .map_err(|_| Error::InvalidColor(value.to_string()))
    }
}

/// Concrete colours for every themed surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: ThemeColor,
    pub secondary_bg: ThemeColor,
    pub text: ThemeColor,
    pub hint: ThemeColor,
    pub button: ThemeColor,
    pub button_text: ThemeColor,
    pub destructive: ThemeColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bg: ThemeColor::Rgb(0x0B, 0x0F, 0x14),
            secondary_bg: ThemeColor::Rgb(0x11, 0x18, 0x27),
            text: ThemeColor::Rgb(0xE5, 0xE7, 0xEB),
            hint: ThemeColor::Rgb(0x9C, 0xA3, 0xAF),
            button: ThemeColor::Rgb(0x3B, 0x82, 0xF6),
            button_text: ThemeColor::Rgb(0xFF, 0xFF, 0xFF),
            destructive: ThemeColor::Rgb(0xEF, 0x44, 0x44),
        }
    }
}

/// Host theme parameters, all optional. Read-only input: only the config
/// file and the host environment fill it in.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)] // Ensure defaults are used if fields are missing
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destructive_color: Option<String>,
}

impl Theme {
    /// Overrides fields with host-provided theme parameters.
    /// `lookup` is usually `|k| std::env::var(k).ok()`.
    pub fn apply_host_params(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let fields: [(&str, &mut Option<String>); 6] = [
            ("TG_THEME_BG_COLOR", &mut self.bg_color),
            ("TG_THEME_SECONDARY_BG_COLOR", &mut self.secondary_bg_color),
            ("TG_THEME_TEXT_COLOR", &mut self.text_color),
            ("TG_THEME_HINT_COLOR", &mut self.hint_color),
            ("TG_THEME_BUTTON_COLOR", &mut self.button_color),
            ("TG_THEME_BUTTON_TEXT_COLOR", &mut self.button_text_color),
        ];
        for (key, slot) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *slot = Some(value);
            }
        }
    }

    /// Resolves every field to a colour, using the default palette for
    /// missing or unparsable values.
    pub fn resolve(&self) -> Palette {
        let defaults = Palette::default();
        let pick = |name: &str, value: &Option<String>, fallback: ThemeColor| match value {
            None => fallback,
            Some(raw) => ThemeColor::parse(raw).unwrap_or_else(|e| {
                warn!(field = name, error = %e, "ignoring theme value");
                fallback
            }),
        };
        Palette {
            bg: pick("bg_color", &self.bg_color, defaults.bg),
            secondary_bg: pick(
                "secondary_bg_color",
                &self.secondary_bg_color,
                defaults.secondary_bg,
            ),
            text: pick("text_color", &self.text_color, defaults.text),
            hint: pick("hint_color", &self.hint_color, defaults.hint),
            button: pick("button_color", &self.button_color, defaults.button),
            button_text: pick(
                "button_text_color",
                &self.button_text_color,
                defaults.button_text,
            ),
            destructive: pick(
                "destructive_color",
                &self.destructive_color,
                defaults.destructive,
            ),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)] // Ensure defaults are used if fields are missing
pub struct Config {
    pub default_reps: u32,
    pub time_format: String,
    pub quick_exercises: Vec<String>,

    // Theming
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_reps: 10,
            time_format: "%H:%M".to_string(),
            quick_exercises: [
                "Bench Press",
                "Squat",
                "Deadlift",
                "Pull-up",
                "Shoulder Press",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            theme: Theme::default(),
        }
    }
}

/// Determines the path to the configuration file.
/// Exposed at crate root as `get_config_path_util`
/// # Errors
/// Returns `Error` if no config directory can be found or created.
pub fn get_config_path() -> Result<PathBuf, Error> {
    let config_dir_override = std::env::var(CONFIG_ENV_VAR).ok();

    let config_dir_path = if let Some(path_str) = config_dir_override {
        let path = PathBuf::from(path_str);
        if !path.is_dir() {
            warn!(
                "{} points to '{}', which is not a directory. Trying to create it.",
                CONFIG_ENV_VAR,
                path.display()
            );
            fs::create_dir_all(&path)?;
        }
        path
    } else {
        let base_config_dir = dirs::config_dir().ok_or(Error::CannotDetermineConfigDir)?;
        base_config_dir.join(APP_CONFIG_DIR)
    };

    if !config_dir_path.exists() {
        fs::create_dir_all(&config_dir_path)?;
    }

    Ok(config_dir_path.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from the TOML file at the given path, writing
/// the defaults out first if the file does not exist.
/// # Errors
/// Returns `Error` on I/O or TOML failures.
pub fn load(config_path: &Path) -> Result<Config, Error> {
    if config_path.exists() {
        let config_content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    } else {
        let default_config = Config::default();
        save(config_path, &default_config)?;
        Ok(default_config)
    }
}

/// Saves the configuration to the TOML file.
/// # Errors
/// Returns `Error` on I/O or TOML failures.
pub fn save(config_path: &Path, config: &Config) -> Result<(), Error> {
    if let Some(parent_dir) = config_path.parent() {
        if !parent_dir.exists() {
            fs::create_dir_all(parent_dir)?;
        }
    }
    let config_content = toml::to_string_pretty(config)?;
    fs::write(config_path, config_content)?;
    Ok(())
}
