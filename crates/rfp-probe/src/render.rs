//! Text output for the probe's subcommands.

use rfp_core::{
    CodeName, ConsensusTable, RawKeyboardEvent, ResistancePolicy, ResistantKeyboardView,
};
use serde::Serialize;
use thiserror::Error;

/// Error type for rendering probe output.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Output format for the table dump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

/// One consensus entry in a table dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub key: String,
    pub code: CodeName,
    pub key_code: u32,
    pub requires_shift: bool,
    pub requires_altgr: bool,
}

/// TOML needs a table at the top level.
#[derive(Serialize)]
struct TableDump<'a> {
    entries: &'a [TableRow],
}

/// The resisted answer for one key identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRow {
    pub key: String,
    pub code: CodeName,
    pub key_code: u32,
    pub requires_shift: bool,
    pub requires_altgr: bool,
    /// `true` if the identifier is unmapped and the fallback answer applies.
    pub fallback: bool,
}

/// Every table entry, sorted by key identifier.
pub fn table_rows(table: &ConsensusTable) -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = table
        .iter()
        .map(|(key, e)| TableRow {
            key: key.to_string(),
            code: e.code,
            key_code: e.key_code,
            requires_shift: e.requires_shift,
            requires_altgr: e.requires_altgr,
        })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));
    rows
}

/// Renders the whole table in `format`.
pub fn render_table(table: &ConsensusTable, format: OutputFormat) -> Result<String, ProbeError> {
    let rows = table_rows(table);
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
        OutputFormat::Toml => toml::to_string_pretty(&TableDump { entries: &rows })?,
    })
}

/// The consensus answer for `key`, or the fallback answer if it is unmapped.
pub fn lookup_row(table: &ConsensusTable, key: &str) -> LookupRow {
    LookupRow {
        key: key.to_string(),
        code: table.code_or_fallback(key),
        key_code: table.key_code_or_fallback(key),
        requires_shift: table.requires_shift(key),
        requires_altgr: table.requires_altgr(key),
        fallback: !table.contains(key),
    }
}

/// Renders [`lookup_row`] for each of `keys` as a JSON array.
pub fn render_lookup<S: AsRef<str>>(
    table: &ConsensusTable,
    keys: &[S],
) -> Result<String, ProbeError> {
    let rows: Vec<LookupRow> = keys.iter().map(|k| lookup_row(table, k.as_ref())).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Renders what a script would observe for `event` under `policy`.
pub fn render_view<P: ResistancePolicy + ?Sized>(
    event: &RawKeyboardEvent,
    table: &ConsensusTable,
    policy: &P,
) -> Result<String, ProbeError> {
    let init = ResistantKeyboardView::new(event, table, policy).init_dict();
    Ok(serde_json::to_string_pretty(&init)?)
}
