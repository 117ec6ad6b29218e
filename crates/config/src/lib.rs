//! Configuration for the vesta board core.
//!
//! Configuration is written in TOML. Every section and field is optional:
//!
//! ```toml
//! # Filter panel "view more" sizing
//! [disclosure]
//! baseline = 5
//! step = 5
//!
//! # tracing-subscriber directive, overridden by VESTA_LOG
//! [log]
//! filter = "vesta=info"
//! ```
//!
//! # Configuration Files
//!
//! [`default_config_path`] resolves `$XDG_CONFIG_HOME/vesta/config.toml`
//! (or the platform config directory). A missing default file is not an
//! error; callers fall back to [`Config::default`].

pub mod error;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use vesta_filters::DisclosureConfig;

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Filter panel disclosure sizing.
	pub disclosure: DisclosureConfig,
	pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
	pub filter: String,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			filter: "vesta=info".to_owned(),
		}
	}
}

impl Config {
	/// Parse a TOML string into a validated [`Config`].
	pub fn from_toml(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::from_toml(&content)
	}

	/// Load `path` if it exists, otherwise defaults.
	pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		if path.exists() { Self::load(path) } else { Ok(Self::default()) }
	}

	fn validate(&self) -> Result<()> {
		if self.disclosure.baseline == 0 {
			return Err(ConfigError::Invalid("disclosure.baseline must be at least 1".into()));
		}
		if self.disclosure.step == 0 {
			return Err(ConfigError::Invalid("disclosure.step must be at least 1".into()));
		}
		if self.log.filter.trim().is_empty() {
			return Err(ConfigError::Invalid("log.filter must not be empty".into()));
		}
		Ok(())
	}
}

/// `vesta/config.toml` under the user's config directory.
pub fn default_config_path() -> Option<PathBuf> {
	std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.filter(|dir| dir.is_absolute())
		.or_else(dirs::config_dir)
		.map(|dir| dir.join("vesta").join("config.toml"))
}
