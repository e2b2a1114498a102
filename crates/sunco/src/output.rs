//! Output formatting: table, JSON, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use sunco_api::integration_types::Integration;

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    Ok(match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    })
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses `detail_fn`, since single-item views are not tabular.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    Ok(match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => serde_json::to_string_pretty(data)?,
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Plain => id_fn(data),
    })
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

// ── Integration views ────────────────────────────────────────────────

#[derive(Tabled)]
pub struct IntegrationRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Webhooks")]
    pub webhooks: usize,
    #[tabled(rename = "Targets")]
    pub targets: String,
}

impl From<&Integration> for IntegrationRow {
    fn from(i: &Integration) -> Self {
        Self {
            id: i.id.clone(),
            name: i.display_name.clone(),
            status: i.status.clone(),
            webhooks: i.webhooks.len(),
            targets: i
                .webhooks
                .iter()
                .map(|w| w.target.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Multi-line detail view. Webhook secrets are shown since the owner needs
/// them to verify payload signatures.
pub fn integration_detail(i: &Integration) -> String {
    let mut lines = vec![
        format!("ID:       {}", i.id),
        format!("Name:     {}", i.display_name),
        format!("Status:   {}", i.status),
    ];
    for w in &i.webhooks {
        lines.push(String::new());
        lines.push(format!("Webhook:  {} (version {})", w.id, w.version));
        lines.push(format!("  Target:   {}", w.target));
        lines.push(format!("  Triggers: {}", w.triggers.join(", ")));
        lines.push(format!("  Secret:   {}", w.secret));
    }
    lines.join("\n")
}
