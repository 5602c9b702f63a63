use crate::types::*;
use anyhow::{Context, Result};
use std::path::Path;

impl MapSummary {
    /// Attach the map's title and id to its classification
    pub fn new(record: &MapRecord, gamemodes: GamemodeSupport) -> Self {
        Self {
            gamemodes,
            title: record.title.clone(),
            id: record.map_id,
        }
    }

    /// Canonical output: pretty JSON with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize map summary")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse map summary")
    }

    pub fn save_to_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// File name used when summaries are written one per map
    pub fn file_name(&self) -> Option<String> {
        self.id.value().map(|id| format!("{id}.json"))
    }
}
