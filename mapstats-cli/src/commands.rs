//! Command implementations behind the `mapstats` subcommands.
//! Each returns what should go to stdout; `main` decides where it lands.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use log::info;
use mapstats_core::report::{self, export_csv, export_ids, render_html};
use mapstats_core::{
    dump_objects, load_summaries, BatchReport, GamemodeVerdict, MapFilter, MapProcessor,
    MapStatsConfig,
};
use std::path::Path;
use std::str::FromStr;

/// Result of classifying a single map
pub struct ClassifyOutput {
    pub json: String,
    /// Present when an explanation was requested
    pub verdicts: Option<Vec<GamemodeVerdict>>,
}

pub fn classify(
    processor: &MapProcessor,
    input: &Path,
    explain: bool,
    dump_dir: Option<&Path>,
    profile: bool,
) -> Result<ClassifyOutput> {
    let processed = processor.process_file_capture(input, profile)?;

    if let Some(dir) = dump_dir {
        let path = dump_objects(&processed.sanitized, dir)?;
        info!("💾 Objects written to {}", path.display());
    }

    let verdicts = explain.then(|| processor.classifier().explain(&processed.sanitized));

    Ok(ClassifyOutput {
        json: processed.summary.to_json_pretty()?,
        verdicts,
    })
}

pub fn classify_dir(processor: &MapProcessor, input: &Path, output: &Path) -> Result<BatchReport> {
    if !input.is_dir() {
        bail!("{} is not a directory", input.display());
    }
    processor.process_directory(input, output)
}

/// Render the HTML index and write it to `output`. Returns the number of maps.
pub fn report(config: &MapStatsConfig, summaries: &Path, output: &Path) -> Result<usize> {
    let entries = load_summaries(summaries)?;
    let html = render_html(&entries, &config.report, Utc::now())?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(output, html).with_context(|| format!("failed to write {}", output.display()))?;
    info!("💾 Index with {} maps saved to {}", entries.len(), output.display());
    Ok(entries.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Ids,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "ids" => Ok(ExportFormat::Ids),
            other => bail!("unknown export format '{other}', expected csv or ids"),
        }
    }
}

pub fn export(
    summaries: &Path,
    format: ExportFormat,
    filter: MapFilter,
    search: Option<&str>,
) -> Result<String> {
    let entries = load_summaries(summaries)?;
    let selected = report::select(&entries, filter, search);
    info!("📤 Exporting {} of {} maps", selected.len(), entries.len());

    Ok(match format {
        ExportFormat::Csv => export_csv(&selected),
        ExportFormat::Ids => export_ids(&selected),
    })
}
