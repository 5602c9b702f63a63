//! Aggregate report over many map summaries
//!
//! Reads the per-map JSON records written by the classifier and turns them
//! into an HTML index and exportable lists.
//!
//! ## Architecture
//!
//! ```text
//! <summary dir>/*.json
//!     ↓
//! load_summaries → Vec<ReportEntry>   (adds the hosting flag)
//!     ↓
//! MapFilter + search
//!     ↓
//! render_html | export_csv | export_ids
//! ```

pub mod export;
pub mod html;

pub use export::{export_csv, export_ids};
pub use html::render_html;

use crate::types::*;
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// A summary plus the presentation-level "good for hosting" flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub summary: MapSummary,
    pub hosting: bool,
}

impl ReportEntry {
    pub fn new(summary: MapSummary) -> Self {
        let hosting = is_good_for_hosting(&summary.gamemodes);
        Self { summary, hosting }
    }
}

/// A map is good for a hosted rotation when it is a climb map, or when it
/// runs every other mode (beacon and minimal survival are not required).
pub fn is_good_for_hosting(gamemodes: &GamemodeSupport) -> bool {
    gamemodes.climb
        || (gamemodes.deathmatch
            && gamemodes.team_deathmatch
            && gamemodes.capture_the_flag
            && gamemodes.survival.classic
            && gamemodes.survival.hardcore
            && gamemodes.zombrains
            && gamemodes.take_over
            && gamemodes.weapon_deal)
}

/// Read every `*.json` summary in a directory. Files that fail to parse are
/// logged and skipped. Entries are ordered by id, then title.
pub fn load_summaries(dir: &Path) -> Result<Vec<ReportEntry>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;

    let mut maps = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let loaded = std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|content| MapSummary::from_json(&content));
        match loaded {
            Ok(summary) => maps.push(ReportEntry::new(summary)),
            Err(e) => warn!("⚠️  Skipping {}: {e:#}", path.display()),
        }
    }

    maps.sort_by(|a, b| {
        a.summary
            .id
            .cmp(&b.summary.id)
            .then_with(|| a.summary.title.cmp(&b.summary.title))
    });
    debug!("📚 Loaded {} summaries from {}", maps.len(), dir.display());
    Ok(maps)
}

/// Gamemode filters offered by the index page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MapFilter {
    #[default]
    All,
    Deathmatch,
    TeamDeathmatch,
    CaptureTheFlag,
    /// Classic survival
    Survival,
    Zombrains,
    TakeOver,
    Climb,
    HostingAll,
    HostingNoClimb,
}

impl MapFilter {
    pub const NAMES: [&'static str; 10] = [
        "all",
        "dm",
        "tdm",
        "ctf",
        "surv",
        "zomb",
        "take_over",
        "climb",
        "hosting_all",
        "hosting_no_climb",
    ];

    pub fn matches(&self, entry: &ReportEntry) -> bool {
        let g = &entry.summary.gamemodes;
        match self {
            MapFilter::All => true,
            MapFilter::Deathmatch => g.deathmatch,
            MapFilter::TeamDeathmatch => g.team_deathmatch,
            MapFilter::CaptureTheFlag => g.capture_the_flag,
            MapFilter::Survival => g.survival.classic,
            MapFilter::Zombrains => g.zombrains,
            MapFilter::TakeOver => g.take_over,
            MapFilter::Climb => g.climb,
            MapFilter::HostingAll => entry.hosting,
            MapFilter::HostingNoClimb => entry.hosting && !g.climb,
        }
    }
}

impl FromStr for MapFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "all" => MapFilter::All,
            "dm" => MapFilter::Deathmatch,
            "tdm" => MapFilter::TeamDeathmatch,
            "ctf" => MapFilter::CaptureTheFlag,
            "surv" => MapFilter::Survival,
            "zomb" => MapFilter::Zombrains,
            "take_over" => MapFilter::TakeOver,
            "climb" => MapFilter::Climb,
            "hosting_all" => MapFilter::HostingAll,
            "hosting_no_climb" => MapFilter::HostingNoClimb,
            other => anyhow::bail!(
                "unknown filter '{other}', expected one of: {}",
                Self::NAMES.join(", ")
            ),
        })
    }
}

/// Case-insensitive substring match on the map id or title.
/// An empty search matches everything.
pub fn matches_search(entry: &ReportEntry, search: &str) -> bool {
    let needle = search.to_lowercase();
    entry.summary.id.to_string().contains(&needle)
        || entry.summary.title.to_lowercase().contains(&needle)
}

/// Entries passing both the gamemode filter and the search term
pub fn select<'a>(
    entries: &'a [ReportEntry],
    filter: MapFilter,
    search: Option<&str>,
) -> Vec<&'a ReportEntry> {
    entries
        .iter()
        .filter(|e| filter.matches(e))
        .filter(|e| search.map_or(true, |s| matches_search(e, s)))
        .collect()
}
