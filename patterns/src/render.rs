//! Human-readable and JSON rendering of a [`DemoReport`].

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::demo::DemoReport;

/// Output format for the `patterns` binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

pub fn write_report<W: Write>(out: &mut W, report: &DemoReport, format: Format) -> Result<()> {
    match format {
        Format::Text => write_text(out, report),
        Format::Json => write_json(out, report),
    }
}

/// One header per section, sections separated by a blank line.
fn write_text<W: Write>(out: &mut W, report: &DemoReport) -> Result<()> {
    let mut blocks: Vec<Vec<String>> = Vec::new();

    if let Some(strategy) = &report.strategy {
        blocks.push(vec![
            "Strategy pattern:".to_string(),
            format!("Original array: {:?}", strategy.input),
            format!("Sorted array: {:?}", strategy.sorted),
        ]);
    }
    if let Some(outcomes) = &report.chain {
        let mut block = vec!["Chain of responsibility pattern:".to_string()];
        block.extend(outcomes.iter().map(ToString::to_string));
        blocks.push(block);
    }
    if let Some(items) = &report.iterator {
        let mut block = vec!["Iterator pattern:".to_string()];
        block.extend(items.iter().cloned());
        blocks.push(block);
    }

    let rendered = blocks
        .iter()
        .map(|block| block.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    writeln!(out, "{}", rendered).context("write text report")?;
    Ok(())
}

/// Pretty-printed JSON with trailing newline.
fn write_json<W: Write>(out: &mut W, report: &DemoReport) -> Result<()> {
    let mut payload = serde_json::to_string_pretty(report).context("serialize report json")?;
    payload.push('\n');
    out.write_all(payload.as_bytes()).context("write json report")?;
    Ok(())
}
