//! Command implementations
//!
//! Each command returns the text to print, so the binary only does argument
//! parsing and I/O on stdout.

use crate::config::CraftConfig;
use crate::error::{CliError, CliResult};
use craft_diff::DocumentDiff;
use craft_format::{format_content_with, FieldOrder, Formatter};
use craft_view::{render_text, render_view, DiffViewMode, ViewRequest};
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Arguments of `craft diff`
#[derive(Debug, Clone, Default)]
pub struct DiffArgs {
    /// Current draft
    pub original: PathBuf,
    /// Proposed draft
    pub revised: PathBuf,
    /// View mode; config default when `None`
    pub mode: Option<DiffViewMode>,
    /// Drafts are table JSON
    pub table: bool,
    /// Table section type used for field order
    pub section_type: Option<String>,
    /// Print segments and summary as JSON
    pub json: bool,
}

/// Arguments of `craft format`
#[derive(Debug, Clone, Default)]
pub struct FormatArgs {
    /// Draft to format
    pub path: PathBuf,
    /// Draft is table JSON
    pub table: bool,
    /// Table section type used for field order
    pub section_type: Option<String>,
    /// Explicit field order, overrides the section type
    pub field_order: Option<FieldOrder>,
}

/// Parse an optional `--mode` value
///
/// # Errors
/// Returns [`CliError::ViewMode`] if the value names no view mode
pub fn parse_mode(value: Option<&str>) -> CliResult<Option<DiffViewMode>> {
    Ok(value.map(str::parse::<DiffViewMode>).transpose()?)
}

fn read_draft(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Field order for a table section, resolving with fallback
fn section_field_order(config: &CraftConfig, section_type: Option<&str>) -> Option<FieldOrder> {
    let registry = config.table_registry();
    let section_type = section_type.unwrap_or(craft_format::tables::DEFAULT_SECTION_TYPE);
    registry.resolve(section_type).map(|table| table.field_order())
}

fn table_formatter(config: &CraftConfig, field_order: Option<FieldOrder>) -> Formatter {
    let formatter = Formatter::new().with_indent(config.indent);
    match field_order {
        Some(order) => formatter.with_field_order(order),
        None => formatter,
    }
}

/// `craft diff`: compare two drafts
///
/// Table drafts are formatted before diffing so that the line diff matches
/// what is displayed.
///
/// # Errors
/// Returns error if a draft cannot be read or JSON output fails
pub fn diff(config: &CraftConfig, args: &DiffArgs) -> CliResult<String> {
    let mut current = read_draft(&args.original)?;
    let mut proposed = read_draft(&args.revised)?;

    let field_order = if args.table {
        section_field_order(config, args.section_type.as_deref())
    } else {
        None
    };
    if args.table {
        let formatter = table_formatter(config, field_order.clone());
        current = format_content_with(&current, true, &formatter);
        proposed = format_content_with(&proposed, true, &formatter);
    }

    let document_diff = DocumentDiff::compute(&current, &proposed);
    tracing::info!(summary = %document_diff.diff_summary, "diffed drafts");

    if args.json {
        return Ok(serde_json::to_string_pretty(&document_diff)?);
    }

    let mode = args.mode.unwrap_or(config.view_mode);
    let mut request = ViewRequest::new(&current, &proposed, mode)
        .with_indent(config.indent)
        .with_segments(&document_diff.diff_segments);
    if args.table {
        request = request.table(field_order);
    }

    let mut out = render_text(&render_view(&request));
    let _ = writeln!(out, "\n{}", document_diff.diff_summary);
    Ok(out)
}

/// `craft format`: format one draft for display
///
/// # Errors
/// Returns error if the draft cannot be read
pub fn format(config: &CraftConfig, args: &FormatArgs) -> CliResult<String> {
    let content = read_draft(&args.path)?;

    let field_order = match (&args.field_order, args.table) {
        (Some(order), _) => Some(order.clone()),
        (None, true) => section_field_order(config, args.section_type.as_deref()),
        (None, false) => None,
    };

    let formatter = table_formatter(config, field_order);
    Ok(format_content_with(&content, args.table, &formatter))
}

/// `craft summary`: word counts only
///
/// # Errors
/// Returns error if a draft cannot be read
pub fn summary(original: &Path, revised: &Path) -> CliResult<String> {
    let current = read_draft(original)?;
    let proposed = read_draft(revised)?;
    Ok(DocumentDiff::compute(&current, &proposed).diff_summary.to_string())
}
