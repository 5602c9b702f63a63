use thiserror::Error;

/// Number of lines a map description must carry
pub const MAP_LINE_COUNT: usize = 5;

/// Failures while turning raw map text into a `MapRecord`
#[derive(Debug, Error)]
pub enum MapReadError {
    #[error("failed to read map file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON on line {line} ({field}): {source}")]
    InvalidJson {
        line: usize,
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("map description has {found} lines, expected {MAP_LINE_COUNT}")]
    MissingLines { found: usize },

    #[error("map id {raw:?} is not a number")]
    InvalidMapId { raw: String },
}
