use crate::classifier::MapClassifier;
use crate::config::MapStatsConfig;
use crate::reader::MapRecordReader;
use crate::types::*;
use anyhow::{Context, Result};
use log::{info, warn};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Intermediate outputs of one map run, kept for debugging
#[derive(Debug, Clone)]
pub struct ProcessedMap {
    /// Record after image placements were removed
    pub sanitized: MapRecord,
    pub summary: MapSummary,
}

/// Steps of a single map run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Read,
    Sanitize,
    Classify,
}

impl PipelineStep {
    pub fn label(&self) -> &'static str {
        match self {
            PipelineStep::Read => "read",
            PipelineStep::Sanitize => "sanitize",
            PipelineStep::Classify => "classify",
        }
    }
}

/// Wall-clock timings of the steps of one map run. A disabled profiler runs
/// the steps without reading the clock.
#[derive(Debug, Default)]
pub struct StepProfiler {
    timings: Option<Vec<(PipelineStep, Duration)>>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            timings: enabled.then(Vec::new),
        }
    }

    pub fn time_step<R>(&mut self, step: PipelineStep, run: impl FnOnce() -> R) -> R {
        let Some(timings) = self.timings.as_mut() else {
            return run();
        };
        let start = Instant::now();
        let result = run();
        timings.push((step, start.elapsed()));
        result
    }

    pub fn timings(&self) -> &[(PipelineStep, Duration)] {
        self.timings.as_deref().unwrap_or_default()
    }

    pub fn total(&self) -> Duration {
        self.timings().iter().map(|(_, elapsed)| *elapsed).sum()
    }

    /// One line per map, e.g. `"Arena": read 120µs, sanitize 8µs, classify 15µs (143µs)`
    pub fn log_summary(&self, title: &str) {
        let timings = self.timings();
        if timings.is_empty() {
            return;
        }
        let steps: Vec<String> = timings
            .iter()
            .map(|(step, elapsed)| format!("{} {}µs", step.label(), elapsed.as_micros()))
            .collect();
        info!(
            "⏱️  \"{title}\": {} ({}µs)",
            steps.join(", "),
            self.total().as_micros()
        );
    }
}

/// Outcome of classifying a directory of maps
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Summary files written, sorted by input file name
    pub written: Vec<PathBuf>,
    /// Inputs that could not be classified, with the error chain
    pub failures: Vec<(PathBuf, String)>,
    pub elapsed: Duration,
}

pub struct MapProcessor {
    reader: MapRecordReader,
    classifier: MapClassifier,
}

impl Default for MapProcessor {
    fn default() -> Self {
        Self::new(&MapStatsConfig::default())
    }
}

impl MapProcessor {
    pub fn new(config: &MapStatsConfig) -> Self {
        Self {
            reader: MapRecordReader::new(config.reader.clone()),
            classifier: MapClassifier::new(config),
        }
    }

    pub fn classifier(&self) -> &MapClassifier {
        &self.classifier
    }

    /// Map text in, classification out
    pub fn process_str(&self, raw: &str) -> Result<MapSummary> {
        let record = self.reader.read_str(raw)?;
        Ok(self.classifier.classify(record))
    }

    pub fn process_file(&self, input: &Path) -> Result<MapSummary> {
        Ok(self.process_file_capture(input, false)?.summary)
    }

    /// Run the pipeline on one file and keep the sanitized record around
    pub fn process_file_capture(&self, input: &Path, profile: bool) -> Result<ProcessedMap> {
        let mut profiler = StepProfiler::new(profile);

        let record = profiler
            .time_step(PipelineStep::Read, || self.reader.read_file(input))
            .with_context(|| format!("failed to read map {}", input.display()))?;
        let sanitized = profiler.time_step(PipelineStep::Sanitize, || {
            self.classifier.sanitize(record)
        });
        let summary = profiler.time_step(PipelineStep::Classify, || {
            self.classifier.classify_sanitized(&sanitized)
        });

        profiler.log_summary(&summary.title);
        Ok(ProcessedMap { sanitized, summary })
    }

    /// Classify every map file in `input_dir`, writing one summary per map
    /// into `output_dir`. Per-map failures are collected, not fatal.
    pub fn process_directory(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
        let start = Instant::now();
        let inputs = list_map_files(input_dir)?;
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("failed to create {}", output_dir.display()))?;
        info!("📂 Classifying {} maps from {}", inputs.len(), input_dir.display());

        let results: Vec<(PathBuf, Result<MapSummary>)> = inputs
            .par_iter()
            .map(|path| (path.clone(), self.process_file(path)))
            .collect();

        let mut report = BatchReport::default();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for (input, result) in results {
            let summary = match result {
                Ok(summary) => summary,
                Err(e) => {
                    warn!("❌ {}: {e:#}", input.display());
                    report.failures.push((input, format!("{e:#}")));
                    continue;
                }
            };

            let file_name = summary.file_name().unwrap_or_else(|| fallback_file_name(&input));
            let overwrites = seen.insert(file_name.clone(), input.clone());
            if let Some(previous) = &overwrites {
                warn!(
                    "⚠️  {} and {} share output {}; keeping the latter",
                    previous.display(),
                    input.display(),
                    file_name
                );
            }

            let output = output_dir.join(&file_name);
            match summary.save_to_json(&output) {
                // An overwritten file is already listed once
                Ok(()) if overwrites.is_none() => report.written.push(output),
                Ok(()) => {}
                Err(e) => report.failures.push((input, format!("{e:#}"))),
            }
        }

        report.elapsed = start.elapsed();
        info!(
            "✅ {} summaries written, {} failures in {:.3}s",
            report.written.len(),
            report.failures.len(),
            report.elapsed.as_secs_f64()
        );
        Ok(report)
    }
}

/// Write a sanitized object collection as JSON for inspection.
/// The file is named after the map title with spaces replaced by underscores.
pub fn dump_objects(record: &MapRecord, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(format!("{}-objects.json", record.title.replace(' ', "_")));
    let json = serde_json::to_string(&record.objects)?;
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn list_map_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if path.is_file() && !hidden {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn fallback_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("map");
    format!("{stem}.json")
}
