//! Application configuration — TOML-based, platform-aware paths.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NucLedError, Result};

/// Header comment prepended to saved config files.
const CONFIG_HEADER: &str = "# NucLed configuration.\n\n";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the acpi_call kernel module's call entry.
    #[serde(default = "default_acpi_call_path")]
    pub acpi_call_path: String,

    /// ACPI method implementing the LED WMI interface. Boards route the
    /// WMI GUID to different method names; override when needed.
    #[serde(default = "default_wmi_method")]
    pub wmi_method: String,

    /// Per-call deadline in milliseconds. Expiry counts as a failed call.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_acpi_call_path() -> String {
    "/proc/acpi/call".into()
}

fn default_wmi_method() -> String {
    "\\_SB.WMTF.WMAA".into()
}

fn default_timeout_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Config {
            acpi_call_path: default_acpi_call_path(),
            wmi_method: default_wmi_method(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Config {
    /// Default config file path: `<config_dir>/nucled/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nucled").join("config.toml"))
    }

    /// Load from the default path. A missing file yields the defaults;
    /// an unreadable or invalid file is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&text)
            .map_err(|e| NucLedError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Write to the default path, creating parent directories.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| NucLedError::Config("no config directory on this platform".into()))?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let body = toml::to_string_pretty(self)
            .map_err(|e| NucLedError::Config(format!("serialize: {e}")))?;
        std::fs::write(path, format!("{CONFIG_HEADER}{body}"))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.acpi_call_path.is_empty() {
            return Err(NucLedError::Config("acpi_call_path must not be empty".into()));
        }
        if !self.wmi_method.starts_with('\\') {
            return Err(NucLedError::Config(format!(
                "wmi_method `{}` is not an absolute ACPI path",
                self.wmi_method
            )));
        }
        if self.timeout_ms == 0 {
            return Err(NucLedError::Config("timeout_ms must be nonzero".into()));
        }
        Ok(())
    }
}
