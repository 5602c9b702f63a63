// Map record reader
//
// The authoring tool writes one map as five lines:
//   0: title (verbatim)
//   1: "1" when the map is a climb map
//   2: numeric workshop id
//   3: JSON object collection
//   4: JSON image collection

use crate::config::ReaderConfig;
use crate::error::{MapReadError, MAP_LINE_COUNT};
use crate::types::*;
use log::{debug, warn};
use std::path::Path;

const TITLE_LINE: usize = 0;
const CLIMB_LINE: usize = 1;
const ID_LINE: usize = 2;
const OBJECTS_LINE: usize = 3;
const IMAGES_LINE: usize = 4;

pub struct MapRecordReader {
    config: ReaderConfig,
}

impl Default for MapRecordReader {
    fn default() -> Self {
        Self::new(ReaderConfig::default())
    }
}

impl MapRecordReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn read_file(&self, path: &Path) -> Result<MapRecord, MapReadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| MapReadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.read_str(&raw)
    }

    pub fn read_str(&self, raw: &str) -> Result<MapRecord, MapReadError> {
        let lines = self.split_lines(raw);
        debug!("📄 Map description has {} lines", lines.len());

        if lines.len() < MAP_LINE_COUNT {
            if self.config.strict {
                return Err(MapReadError::MissingLines { found: lines.len() });
            }
            warn!(
                "⚠️  Map description has {} lines, expected {}; missing fields left empty",
                lines.len(),
                MAP_LINE_COUNT
            );
        }

        let title = lines.get(TITLE_LINE).copied().unwrap_or_default().to_string();
        let is_climb = lines.get(CLIMB_LINE).is_some_and(|line| *line == "1");

        let raw_id = lines.get(ID_LINE).copied().unwrap_or_default();
        let map_id = MapId::parse(raw_id);
        if !map_id.is_valid() {
            if self.config.strict {
                return Err(MapReadError::InvalidMapId {
                    raw: raw_id.to_string(),
                });
            }
            warn!("⚠️  Map id {raw_id:?} of \"{title}\" is not a number");
        }

        let objects: MapObjects = parse_json_line(&lines, OBJECTS_LINE, "objects")?;
        let images: MapImages = parse_json_line(&lines, IMAGES_LINE, "images")?;

        Ok(MapRecord {
            title,
            is_climb,
            map_id,
            objects,
            images,
        })
    }

    /// Split on the configured separator, then on bare newlines, stripping any
    /// leftover carriage return.
    fn split_lines<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        let separator = if self.config.line_separator.is_empty() {
            "\n"
        } else {
            self.config.line_separator.as_str()
        };

        raw.split(separator)
            .flat_map(|chunk| chunk.split('\n'))
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }
}

fn parse_json_line<T>(lines: &[&str], index: usize, field: &'static str) -> Result<T, MapReadError>
where
    T: serde::de::DeserializeOwned + Default,
{
    match lines.get(index) {
        Some(line) => serde_json::from_str(line).map_err(|source| MapReadError::InvalidJson {
            line: index,
            field,
            source,
        }),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OBJECTS: &str = r#"{"1":{"ID":"1","X":"10","Y":"20","Name":"Player Spawn","Team":"0"},"2":{"ID":"2","Name":"logo.png"}}"#;

    fn reader() -> MapRecordReader {
        MapRecordReader::default()
    }

    #[test]
    fn test_reads_crlf_description() {
        let raw = format!("My \"Map\"\r\n1\r\n123456\r\n{OBJECTS}\r\n{{\"a\":\"b\"}}");
        let record = reader().read_str(&raw).unwrap();
        assert_eq!(record.title, "My \"Map\"");
        assert!(record.is_climb);
        assert_eq!(record.map_id, MapId::Valid(123456));
        assert_eq!(record.objects.len(), 2);
        assert_eq!(record.objects["1"].tag_name(), Some("Player Spawn"));
        assert_eq!(record.objects["1"].team, Some(serde_json::json!("0")));
        assert_eq!(record.images.len(), 1);
    }

    #[test]
    fn test_reads_lf_description() {
        let raw = format!("Map\n0\n42\n{OBJECTS}\n{{}}\n");
        let record = reader().read_str(&raw).unwrap();
        assert!(!record.is_climb);
        assert_eq!(record.map_id, MapId::Valid(42));
        assert_eq!(record.objects.len(), 2);
    }

    #[test]
    fn test_climb_flag_requires_exact_token() {
        for flag in ["true", "01", " 1", "yes", ""] {
            let raw = format!("Map\r\n{flag}\r\n1\r\n{{}}\r\n{{}}");
            assert!(!reader().read_str(&raw).unwrap().is_climb, "flag {flag:?}");
        }
    }

    #[test]
    fn test_non_numeric_id_is_sentinel() {
        let raw = "Map\r\n0\r\nabc\r\n{}\r\n{}";
        let record = reader().read_str(raw).unwrap();
        assert_eq!(record.map_id, MapId::NotANumber);
    }

    #[test]
    fn test_missing_lines_default_to_empty() {
        let record = reader().read_str("Only a title").unwrap();
        assert_eq!(record.title, "Only a title");
        assert!(!record.is_climb);
        assert_eq!(record.map_id, MapId::NotANumber);
        assert!(record.objects.is_empty());
        assert!(record.images.is_empty());
    }

    #[test]
    fn test_malformed_objects_json_fails() {
        let raw = "Map\r\n0\r\n1\r\n{not json\r\n{}";
        match reader().read_str(raw) {
            Err(MapReadError::InvalidJson { line, field, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(field, "objects");
            }
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_images_json_fails() {
        let raw = "Map\r\n0\r\n1\r\n{}\r\n[1,";
        assert!(matches!(
            reader().read_str(raw),
            Err(MapReadError::InvalidJson { line: 4, .. })
        ));
    }

    #[test]
    fn test_strict_mode_rejects_missing_lines_and_bad_id() {
        let strict = MapRecordReader::new(ReaderConfig {
            strict: true,
            ..ReaderConfig::default()
        });
        assert!(matches!(
            strict.read_str("Map\r\n0"),
            Err(MapReadError::MissingLines { found: 2 })
        ));
        assert!(matches!(
            strict.read_str("Map\r\n0\r\nx1\r\n{}\r\n{}"),
            Err(MapReadError::InvalidMapId { .. })
        ));
    }

    #[test]
    fn test_object_without_name_is_accepted() {
        let raw = "Map\r\n0\r\n1\r\n{\"k\":{\"ID\":\"k\",\"Depth\":\"3\"}}\r\n{}";
        let record = reader().read_str(raw).unwrap();
        assert_eq!(record.objects["k"].tag_name(), None);
    }

    #[test]
    fn test_unknown_object_attributes_are_kept() {
        let raw = "Map\r\n0\r\n1\r\n{\"k\":{\"Name\":\"Config\",\"Gravity\":\"2\"}}\r\n{}";
        let record = reader().read_str(raw).unwrap();
        assert_eq!(
            record.objects["k"].extra.get("Gravity"),
            Some(&serde_json::Value::String("2".to_string()))
        );
    }

    #[test]
    fn test_non_string_attributes_are_accepted() {
        let raw = "Map\r\n0\r\n1\r\n{\"a\":{\"Name\":\"Player Spawn\",\"X\":32,\"Depth\":0,\"Poly\":[1,2],\"ObjIsTile\":false}}\r\n{}";
        let record = reader().read_str(raw).unwrap();
        let object = &record.objects["a"];
        assert_eq!(object.tag_name(), Some("Player Spawn"));
        assert_eq!(object.x, Some(serde_json::json!(32)));
        assert_eq!(object.poly, Some(serde_json::json!([1, 2])));

        let summary = crate::MapClassifier::default().classify(record);
        assert!(summary.gamemodes.deathmatch);
    }

    #[test]
    fn test_id_forms_outside_unsigned_integers_are_sentinel() {
        for raw_id in ["", "-5", "1.0", "12abc"] {
            let raw = format!("Map\r\n0\r\n{raw_id}\r\n{{}}\r\n{{}}");
            assert_eq!(reader().read_str(&raw).unwrap().map_id, MapId::NotANumber, "{raw_id:?}");
        }
        let padded = reader().read_str("Map\r\n0\r\n 42 \r\n{}\r\n{}").unwrap();
        assert_eq!(padded.map_id, MapId::Valid(42));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = reader().read_file(Path::new("/nonexistent/map.txt"));
        assert!(matches!(result, Err(MapReadError::Io { .. })));
    }
}
