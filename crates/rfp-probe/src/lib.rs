//! rfp-probe library crate.
//!
//! Everything the `rfp-probe` binary does apart from argument parsing and
//! logging setup lives here so it can be tested without spawning a process.
//!
//! ```text
//! rfp-probe
//!   ├── config/  ProbeConfig loaded from an optional TOML file
//!   └── render/  JSON / TOML output for views, lookups, and the table dump
//! ```

pub mod config;
pub mod render;

pub use config::{load_config, ConfigError, ConfigSource, ProbeConfig, ResistanceConfig};
pub use render::{render_lookup, render_table, render_view, OutputFormat, ProbeError};
