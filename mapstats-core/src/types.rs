use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

// ===== MAP INPUT TYPES =====
// Shapes written by the map authoring tool. Only `Name` takes part in
// classification; other attributes are kept as whatever JSON they hold.

/// One placed object inside a map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapObject {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "X", default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Value>,
    #[serde(rename = "Y", default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Value>,
    /// Tag name, e.g. "USC Spawn". Objects without one match no rule.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "ObjIndexID", default, skip_serializing_if = "Option::is_none")]
    pub obj_index_id: Option<Value>,
    #[serde(rename = "ObjIsTile", default, skip_serializing_if = "Option::is_none")]
    pub obj_is_tile: Option<Value>,
    #[serde(rename = "Depth", default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<Value>,
    #[serde(rename = "LogicID", default, skip_serializing_if = "Option::is_none")]
    pub logic_id: Option<Value>,
    #[serde(rename = "Poly", default, skip_serializing_if = "Option::is_none")]
    pub poly: Option<Value>,
    #[serde(rename = "Team", default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Value>,
    #[serde(rename = "ObjRotate", default, skip_serializing_if = "Option::is_none")]
    pub obj_rotate: Option<Value>,
    /// Attributes the classifier does not know about (config objects carry extra keys)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl MapObject {
    /// Convenience constructor used by tests and fixtures
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn tag_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Object collection keyed by the map's local object key.
/// Key order carries no meaning; a BTreeMap keeps debug dumps deterministic.
pub type MapObjects = BTreeMap<String, MapObject>;

/// Image collection, opaque to classification.
pub type MapImages = BTreeMap<String, Value>;

/// Numeric workshop id of a map, or the not-a-number sentinel when the id
/// line could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MapId {
    Valid(u64),
    NotANumber,
}

impl MapId {
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse::<u64>()
            .map(MapId::Valid)
            .unwrap_or(MapId::NotANumber)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, MapId::Valid(_))
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            MapId::Valid(id) => Some(*id),
            MapId::NotANumber => None,
        }
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapId::Valid(id) => write!(f, "{id}"),
            MapId::NotANumber => write!(f, "NaN"),
        }
    }
}

// NaN has no JSON representation; it is written as null.
impl Serialize for MapId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MapId::Valid(id) => serializer.serialize_u64(*id),
            MapId::NotANumber => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for MapId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<serde_json::Number>::deserialize(deserializer)?;
        Ok(value
            .and_then(|n| n.as_u64())
            .map(MapId::Valid)
            .unwrap_or(MapId::NotANumber))
    }
}

/// One map as read from its five-line description.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRecord {
    pub title: String,
    /// Declared by the authoring tool, independent of placed objects
    pub is_climb: bool,
    pub map_id: MapId,
    pub objects: MapObjects,
    pub images: MapImages,
}

impl MapRecord {
    pub fn new(title: &str, is_climb: bool, map_id: MapId, objects: MapObjects) -> Self {
        Self {
            title: title.to_string(),
            is_climb,
            map_id,
            objects,
            images: MapImages::new(),
        }
    }
}

// ===== CLASSIFICATION OUTPUT TYPES =====

/// Survival eligibility tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurvivalSupport {
    pub minimal: bool,
    pub classic: bool,
    pub hardcore: bool,
    pub beacon: bool,
}

/// Which gamemodes a map supports. Field order is the output schema order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamemodeSupport {
    pub climb: bool,
    pub survival: SurvivalSupport,
    pub deathmatch: bool,
    pub team_deathmatch: bool,
    pub weapon_deal: bool,
    pub zombrains: bool,
    pub take_over: bool,
    pub capture_the_flag: bool,
}

/// The canonical per-map record written by the emitter and read back by the
/// report builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSummary {
    #[serde(flatten)]
    pub gamemodes: GamemodeSupport,
    pub title: String,
    pub id: MapId,
}
