use crate::core::{BatchReport, OutputFormat, Result};

pub fn render(report: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn render_text(report: &BatchReport) -> String {
    report
        .entries
        .iter()
        .map(|entry| match (&entry.outcome, &entry.error) {
            (Some(outcome), _) => format!("#{} {}: {}", entry.index, entry.operation.name(), outcome),
            (None, Some(error)) => {
                format!("#{} {}: error: {}", entry.index, entry.operation.name(), error)
            }
            (None, None) => format!("#{} {}: (no result)", entry.index, entry.operation.name()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
