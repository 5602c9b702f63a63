use crate::config::MapStatsConfig;
use crate::rules::{GamemodeVerdict, RuleEngine};
use crate::sanitizer::ObjectSanitizer;
use crate::types::*;
use log::info;

/// Sanitize, then classify: the core of the per-map pipeline.
pub struct MapClassifier {
    sanitizer: ObjectSanitizer,
    engine: RuleEngine,
}

impl Default for MapClassifier {
    fn default() -> Self {
        Self::new(&MapStatsConfig::default())
    }
}

impl MapClassifier {
    pub fn new(config: &MapStatsConfig) -> Self {
        Self {
            sanitizer: ObjectSanitizer::new(&config.sanitizer),
            engine: RuleEngine::new(),
        }
    }

    pub fn sanitize(&self, record: MapRecord) -> MapRecord {
        self.sanitizer.sanitize(record)
    }

    /// Classify an already sanitized record
    pub fn classify_sanitized(&self, record: &MapRecord) -> MapSummary {
        let gamemodes = self.engine.classify(record);
        info!(
            "📋 Classified \"{}\" ({}) from {} objects",
            record.title,
            record.map_id,
            record.objects.len()
        );
        MapSummary::new(record, gamemodes)
    }

    pub fn classify(&self, record: MapRecord) -> MapSummary {
        let sanitized = self.sanitize(record);
        self.classify_sanitized(&sanitized)
    }

    /// Verdicts for a sanitized record, with the fixtures each mode lacks
    pub fn explain(&self, record: &MapRecord) -> Vec<GamemodeVerdict> {
        self.engine.explain(record)
    }
}
