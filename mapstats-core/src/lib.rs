// Mapstats Core Library
//
// Decides which gamemodes a community map supports from the fixtures placed
// in it, and builds the aggregate index over many classified maps.

pub mod types;
pub mod error;
pub mod config;
pub mod reader;
pub mod sanitizer;
pub mod rules;
pub mod classifier;
pub mod emitter;
pub mod processor;
pub mod report;

// Re-export main types and functions for easy use
pub use types::*;
pub use error::MapReadError;
pub use config::MapStatsConfig;
pub use reader::MapRecordReader;
pub use sanitizer::ObjectSanitizer;
pub use rules::{Gamemode, GamemodeVerdict, RuleEngine};
pub use classifier::MapClassifier;
pub use processor::{dump_objects, BatchReport, MapProcessor, ProcessedMap};
pub use report::{load_summaries, MapFilter, ReportEntry};
