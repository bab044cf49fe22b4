use crate::host::ModelElement;
use crate::selection::SelectionSource;
use crate::session::Outcome;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;

pub struct OutcomeSummary {
    pub prefix: String,
    pub message: String,
}

impl OutcomeSummary {
    pub fn format(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::NoElements => Self {
                prefix: "✗".red().to_string(),
                message: "No active or visible elements".to_string(),
            },
            Outcome::Cancelled { restored } => Self {
                prefix: "•".yellow().to_string(),
                message: format!(
                    "Search cancelled, {} element(s) restored",
                    restored.len().yellow()
                ),
            },
            Outcome::Done {
                source,
                candidates,
                matched,
            } if !matched.is_empty() => Self {
                prefix: "✓".green().to_string(),
                message: format!(
                    "{} of {} {} element(s) activated",
                    matched.len().green(),
                    candidates,
                    source_label(*source)
                ),
            },
            Outcome::Done {
                source, candidates, ..
            } => Self {
                prefix: "•".yellow().to_string(),
                message: format!(
                    "No matching names among {} {} element(s)",
                    candidates,
                    source_label(*source)
                ),
            },
        }
    }
}

fn source_label(source: SelectionSource) -> &'static str {
    match source {
        SelectionSource::Active => "active",
        SelectionSource::Visible => "visible",
    }
}

/// 要素一覧のテーブル
pub fn element_table(elements: &[ModelElement]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Active", "Visible"]);

    for element in elements {
        table.add_row(vec![
            element.id.get().to_string(),
            element.name.clone(),
            mark(element.active).to_string(),
            mark(element.visible).to_string(),
        ]);
    }
    table
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "✓"
    } else {
        "-"
    }
}
