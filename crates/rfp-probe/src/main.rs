//! rfp-probe: inspect the consensus key table and resistant keyboard views.
//!
//! # Usage
//!
//! ```text
//! rfp-probe [--config PATH] <COMMAND>
//!
//! Commands:
//!   view    Show what a script observes for a described key event
//!   table   Dump the consensus table
//!   lookup  Show the consensus answer for key identifiers
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable           | Description                              |
//! |--------------------|------------------------------------------|
//! | `RFP_PROBE_CONFIG` | Path to the TOML config file             |
//! | `RUST_LOG`         | Log filter; overrides `log_level`        |

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rfp_core::{ConsensusTable, EventMessage, Modifiers, RawKeyboardEvent, ResistancePolicy};
use rfp_probe::{
    load_config, render_lookup, render_table, render_view, ConfigSource, OutputFormat, ProbeConfig,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Fingerprint-resistant keyboard event probe.
#[derive(Debug, Parser)]
#[command(
    name = "rfp-probe",
    about = "Inspect consensus key mappings and fingerprint-resistant keyboard events",
    version
)]
struct Cli {
    /// Path to a TOML config file; a missing file means defaults.
    #[arg(long, global = true, env = "RFP_PROBE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the initialization dictionary a script would observe.
    View(ViewArgs),
    /// Dump every consensus entry, sorted by key identifier.
    Table {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Show the consensus (or fallback) answer for each key identifier.
    Lookup {
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

/// A key event as the platform would report it.
#[derive(Debug, Args)]
struct ViewArgs {
    /// Key identifier (`KeyboardEvent.key`).
    #[arg(long)]
    key: String,

    #[arg(
        long = "type",
        default_value = "keydown",
        value_parser = ["keydown", "keyup", "keypress"]
    )]
    event_type: String,

    /// True physical `code`.
    #[arg(long, default_value = "")]
    code: String,

    #[arg(long, default_value_t = 0)]
    key_code: u32,

    #[arg(long, default_value_t = 0)]
    char_code: u32,

    /// 0 = standard, 1 = left, 2 = right, 3 = numpad.
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=3))]
    location: u32,

    #[arg(long)]
    ctrl: bool,
    #[arg(long)]
    alt: bool,
    #[arg(long)]
    shift: bool,
    #[arg(long)]
    meta: bool,
    #[arg(long)]
    repeat: bool,

    /// Force resistance on, ignoring the configured caller.
    #[arg(long, conflicts_with = "no_resist")]
    resist: bool,

    /// Force resistance off, ignoring the configured caller.
    #[arg(long)]
    no_resist: bool,
}

impl ViewArgs {
    fn to_event(&self) -> RawKeyboardEvent {
        let modifiers = Modifiers::NONE
            .with(Modifiers::CTRL, self.ctrl)
            .with(Modifiers::ALT, self.alt)
            .with(Modifiers::SHIFT, self.shift)
            .with(Modifiers::META, self.meta);

        RawKeyboardEvent::new(EventMessage::from_type(&self.event_type), self.key.as_str())
            .with_code(self.code.as_str())
            .with_key_code(self.key_code)
            .with_char_code(self.char_code)
            .with_location(self.location)
            .with_modifiers(modifiers)
            .with_repeat(self.repeat)
    }

    /// `--resist`/`--no-resist` win over the configured caller.
    fn resisting(&self, config: &ProbeConfig) -> bool {
        if self.resist {
            true
        } else if self.no_resist {
            false
        } else {
            config.resistance.caller_context().resist_fingerprinting()
        }
    }
}

// ── Command dispatch ──────────────────────────────────────────────────────────

/// Runs `command` and returns the text to print.
fn run(command: &Command, config: &ProbeConfig) -> anyhow::Result<String> {
    let table = ConsensusTable::global();
    match command {
        Command::View(args) => {
            let resisting = args.resisting(config);
            debug!(key = %args.key, resisting, "rendering view");
            render_view(&args.to_event(), table, &resisting).context("failed to render view")
        }
        Command::Table { format } => {
            render_table(table, *format).context("failed to render consensus table")
        }
        Command::Lookup { keys } => {
            render_lookup(table, keys.as_slice()).context("failed to render lookup")
        }
    }
}

/// What to log about the config once logging is up.
fn config_source_message(source: ConfigSource) -> &'static str {
    match source {
        ConfigSource::Defaults => "no config file given; using defaults",
        ConfigSource::Missing => "config file not found; using defaults",
        ConfigSource::File => "loaded config file",
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, source) = load_config(cli.config.as_deref())
        .with_context(|| format!("failed to load config from {:?}", cli.config))?;

    // RUST_LOG wins; otherwise the configured level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    debug!(path = ?cli.config, "{}", config_source_message(source));
    info!(command = ?cli.command, "rfp-probe starting");
    let output = run(&cli.command, &config)?;
    println!("{output}");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
