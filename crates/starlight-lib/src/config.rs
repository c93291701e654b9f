//! Tool configuration: TOML-based, platform-aware paths.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::protocol::{BRIGHTNESS_MAX, DEVICE_NAME, WRITE_CHARACTERISTIC_UUID};

/// Header comment prepended to saved config files.
const CONFIG_HEADER: &str =
    "# starlight configuration. Unknown keys are dropped when the file is rewritten.\n\n";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Advertised name fragment used to pick the controller during a scan.
    #[serde(default = "default_device_name")]
    pub device_name: String,

    /// GATT characteristic that accepts frames.
    #[serde(default = "default_write_characteristic")]
    pub write_characteristic: String,

    /// Brightness sent after `rgb`/`color` when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_brightness: Option<i32>,

    /// Delay between color-test steps, in milliseconds.
    #[serde(default = "default_test_step_ms")]
    pub test_step_ms: u64,
}

fn default_device_name() -> String {
    DEVICE_NAME.into()
}
fn default_write_characteristic() -> String {
    WRITE_CHARACTERISTIC_UUID.into()
}
fn default_test_step_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Config {
            device_name: default_device_name(),
            write_characteristic: default_write_characteristic(),
            default_brightness: None,
            test_step_ms: default_test_step_ms(),
        }
    }
}

/// Validation errors that [`Config::validate`] can return.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `device_name` is empty or whitespace-only.
    EmptyDeviceName,
    /// `write_characteristic` is not a UUID.
    InvalidCharacteristic(String),
    /// `default_brightness` is outside 0-1000.
    BrightnessOutOfRange(i32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyDeviceName => write!(f, "Device name cannot be empty"),
            ValidationError::InvalidCharacteristic(e) => {
                write!(f, "Invalid write characteristic: {e}")
            }
            ValidationError::BrightnessOutOfRange(b) => {
                write!(f, "Default brightness {b} is out of range (0-{BRIGHTNESS_MAX})")
            }
        }
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("starlight"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// Default-location config. Parse problems are logged, never fatal.
    pub fn load() -> Self {
        let (config, warnings) = Self::load_with_warnings();
        warnings.iter().for_each(|w| log::warn!("{w}"));
        config
    }

    /// Write `self` to `path`, creating parent directories as needed.
    ///
    /// The file is staged next to its target and renamed into place, so a
    /// reader never sees a half-written config.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let body = toml::to_string_pretty(self).map_err(std::io::Error::other)?;
        let staged = path.with_extension("toml.tmp");
        std::fs::write(&staged, format!("{CONFIG_HEADER}{body}"))?;
        std::fs::rename(&staged, path).inspect_err(|_| {
            let _ = std::fs::remove_file(&staged);
        })
    }

    /// Write `self` to [`Config::path`].
    pub fn save(&self) -> std::io::Result<()> {
        let path = Self::path().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no config directory on this platform",
            )
        })?;
        self.save_to(&path)
    }

    /// Read `path`. A missing file yields defaults silently; a malformed one
    /// yields defaults plus one warning naming the file.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        let Ok(text) = std::fs::read_to_string(path) else {
            return (Self::default(), vec![]);
        };
        toml::from_str(&text).map_or_else(
            |e| {
                let warning = format!(
                    "config parse error ({}), using defaults: {e}",
                    path.display()
                );
                (Self::default(), vec![warning])
            },
            |config| (config, vec![]),
        )
    }

    /// [`Config::load_from`] on the default location.
    pub fn load_with_warnings() -> (Self, Vec<String>) {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => (Self::default(), vec![]),
        }
    }

    /// Validate the entire config, collecting all errors.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.device_name.trim().is_empty() {
            errors.push(ValidationError::EmptyDeviceName);
        }

        if let Err(e) = uuid::Uuid::parse_str(self.write_characteristic.trim()) {
            errors.push(ValidationError::InvalidCharacteristic(e.to_string()));
        }

        if let Some(b) = self.default_brightness
            && !(0..=BRIGHTNESS_MAX).contains(&b)
        {
            errors.push(ValidationError::BrightnessOutOfRange(b));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
