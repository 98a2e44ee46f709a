//! TOML configuration for the probe.
//!
//! ```toml
//! log_level = "debug"
//!
//! [resistance]
//! enabled = true
//! script_context = true
//! privileged_caller = false
//! ```
//!
//! Every field has a default, so a partial file (or no file at all) is valid.

use std::path::{Path, PathBuf};

use rfp_core::CallerContext;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level probe configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Simulated caller for `view` when neither `--resist` nor `--no-resist`
    /// is given.
    #[serde(default)]
    pub resistance: ResistanceConfig,
}

/// The simulated caller context.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResistanceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub script_context: bool,
    #[serde(default)]
    pub privileged_caller: bool,
}

impl ResistanceConfig {
    /// The policy this configuration describes.
    pub fn caller_context(&self) -> CallerContext {
        CallerContext {
            resist_fingerprinting_enabled: self.enabled,
            has_script_context: self.script_context,
            is_privileged_caller: self.privileged_caller,
        }
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            resistance: ResistanceConfig::default(),
        }
    }
}

impl Default for ResistanceConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            script_context: default_true(),
            privileged_caller: false,
        }
    }
}

/// Where a loaded [`ProbeConfig`] came from.
///
/// Config is read before logging is set up, so the caller reports this once
/// the subscriber is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// No path was given.
    Defaults,
    /// The path was given but does not exist; defaults apply.
    Missing,
    /// The file was read and parsed.
    File,
}

/// Loads the probe configuration from `path`.
///
/// `None`, or a path that does not exist, yields [`ProbeConfig::default`].
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: Option<&Path>) -> Result<(ProbeConfig, ConfigSource), ConfigError> {
    let Some(path) = path else {
        return Ok((ProbeConfig::default(), ConfigSource::Defaults));
    };

    match std::fs::read_to_string(path) {
        Ok(content) => Ok((toml::from_str(&content)?, ConfigSource::File)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Ok((ProbeConfig::default(), ConfigSource::Missing))
        }
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
