use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

// Default value functions for serde
fn default_line_separator() -> String {
    "\r\n".to_string()
}

fn default_image_suffix() -> String {
    ".png".to_string()
}

fn default_page_title() -> String {
    "Supported Gamemodes".to_string()
}

fn default_workshop_item_url() -> String {
    "https://steamcommunity.com/sharedfiles/filedetails/?id=".to_string()
}

fn default_stylesheets() -> Vec<String> {
    vec!["./pure.css".to_string(), "./style.css".to_string()]
}

fn default_script() -> Option<String> {
    Some("./script.js".to_string())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapStatsConfig {
    #[serde(default)]
    pub reader: ReaderConfig,
    #[serde(default)]
    pub sanitizer: SanitizerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Fail on missing lines or a non-numeric map id instead of defaulting
    #[serde(default)]
    pub strict: bool,
    /// Separator written by the authoring tool. A bare "\n" is always accepted
    /// and a trailing "\r" is stripped from every line.
    #[serde(default = "default_line_separator")]
    pub line_separator: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            strict: false,
            line_separator: default_line_separator(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizerConfig {
    /// Objects whose tag name ends with this suffix are image placements
    #[serde(default = "default_image_suffix")]
    pub image_suffix: String,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            image_suffix: default_image_suffix(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_page_title")]
    pub page_title: String,
    /// Prefix joined with the map id to link each row to its workshop page
    #[serde(default = "default_workshop_item_url")]
    pub workshop_item_url: String,
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<String>,
    /// Client-side filter script; not shipped by this tool
    #[serde(default = "default_script")]
    pub script: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_title: default_page_title(),
            workshop_item_url: default_workshop_item_url(),
            stylesheets: default_stylesheets(),
            script: default_script(),
        }
    }
}

impl MapStatsConfig {
    /// Load config from a YAML file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {path}"))?;
        Self::from_yaml(&content).with_context(|| format!("failed to parse config {path}"))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: MapStatsConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                warn!("⚠️  Failed to load config from {p}, using defaults: {e:#}");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
