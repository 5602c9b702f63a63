use super::tags::*;
use crate::types::MapObjects;
use std::collections::HashSet;
use std::fmt;

/// Distinct tag names present in a map. Built in a single pass over the
/// object collection; counts and order are discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet<'a> {
    tags: HashSet<&'a str>,
}

impl<'a> TagSet<'a> {
    pub fn from_objects(objects: &'a MapObjects) -> Self {
        Self {
            tags: objects.values().filter_map(|o| o.tag_name()).collect(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for TagSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

/// Everything a requirement may look at
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    pub tags: TagSet<'a>,
    pub is_climb: bool,
}

/// Boolean formula over tag presence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Tag(&'static str),
    /// The record-level climb flag declared by the authoring tool
    ClimbMap,
    All(&'static [Requirement]),
    Any(&'static [Requirement]),
}

/// A leaf of a requirement that the map does not satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unmet {
    Tag(&'static str),
    ClimbMap,
}

impl fmt::Display for Unmet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unmet::Tag(tag) => write!(f, "\"{tag}\""),
            Unmet::ClimbMap => write!(f, "climb map flag"),
        }
    }
}

impl Requirement {
    pub fn is_met(&self, ctx: &RuleContext) -> bool {
        match self {
            Requirement::Tag(tag) => ctx.tags.contains(tag),
            Requirement::ClimbMap => ctx.is_climb,
            Requirement::All(parts) => parts.iter().all(|r| r.is_met(ctx)),
            Requirement::Any(parts) => parts.iter().any(|r| r.is_met(ctx)),
        }
    }

    /// Every unsatisfied leaf below an unsatisfied node, deduplicated, in
    /// rule order. Empty when the requirement is met.
    pub fn unmet(&self, ctx: &RuleContext) -> Vec<Unmet> {
        let mut out = Vec::new();
        self.collect_unmet(ctx, &mut out);
        out
    }

    fn collect_unmet(&self, ctx: &RuleContext, out: &mut Vec<Unmet>) {
        if self.is_met(ctx) {
            return;
        }
        match self {
            Requirement::Tag(tag) => push_unique(out, Unmet::Tag(*tag)),
            Requirement::ClimbMap => push_unique(out, Unmet::ClimbMap),
            Requirement::All(parts) | Requirement::Any(parts) => {
                for part in *parts {
                    part.collect_unmet(ctx, out);
                }
            }
        }
    }
}

fn push_unique(out: &mut Vec<Unmet>, item: Unmet) {
    if !out.contains(&item) {
        out.push(item);
    }
}

// ===== RULE TABLE =====

pub const DEATHMATCH: Requirement = Requirement::Tag(PLAYER_SPAWN);

pub const TEAM_DEATHMATCH: Requirement = Requirement::All(&[
    Requirement::Tag(USC_SPAWN),
    Requirement::Tag(THE_MAN_SPAWN),
    Requirement::Tag(TDM_FLAG),
]);

pub const CAPTURE_THE_FLAG: Requirement = Requirement::All(&[
    Requirement::Tag(USC_SPAWN),
    Requirement::Tag(THE_MAN_SPAWN),
    Requirement::Tag(USC_CTF_FLAG),
    Requirement::Tag(THE_MAN_CTF_FLAG),
    Requirement::Tag(USC_RESUPPLY),
    Requirement::Tag(THE_MAN_RESUPPLY),
    Requirement::Tag(USC_GENERATOR),
    Requirement::Tag(THE_MAN_GENERATOR),
    Requirement::Tag(USC_TURRET),
    Requirement::Tag(THE_MAN_TURRET),
]);

pub const ZOMBRAINS: Requirement = Requirement::All(&[
    Requirement::Any(&[
        Requirement::Tag(PLAYER_SPAWN),
        Requirement::All(&[
            Requirement::Tag(USC_SPAWN),
            Requirement::Tag(ZOMBIE_SPAWN_ZOMBRAINS),
        ]),
    ]),
    Requirement::Tag(HELICOPTER_SPAWN_ZOMBRAINS),
    Requirement::Tag(WEAPON_PRINTER_ZOMBRAINS),
]);

pub const TAKE_OVER: Requirement = Requirement::All(&[
    Requirement::Any(&[Requirement::Tag(TAKEOVER_FLAG), Requirement::Tag(TDM_FLAG)]),
    Requirement::Tag(USC_SPAWN),
    Requirement::Tag(THE_MAN_SPAWN),
]);

pub const CLIMB: Requirement =
    Requirement::All(&[Requirement::ClimbMap, Requirement::Tag(CLIMB_FLAG)]);

// Survival tiers build on each other: classic reuses minimal, hardcore
// reuses classic.
pub const SURVIVAL_MINIMAL: Requirement = Requirement::All(&[
    Requirement::Any(&[
        Requirement::Tag(PLAYER_SPAWN),
        Requirement::Tag(ENEMY_SPAWN_SURVIVAL),
    ]),
    Requirement::Tag(USC_SPAWN),
]);

pub const SURVIVAL_CLASSIC: Requirement =
    Requirement::All(&[SURVIVAL_MINIMAL, Requirement::Tag(CHEST_SPAWN_SURVIVAL)]);

pub const SURVIVAL_HARDCORE: Requirement = Requirement::All(&[
    SURVIVAL_CLASSIC,
    Requirement::Tag(BAR_SPAWN_SURVIVAL),
    Requirement::Tag(OBJECTIVE_SPAWN_SURVIVAL),
]);

// A bar spawn stands in for a missing beacon spawn
pub const SURVIVAL_BEACON: Requirement = Requirement::Any(&[
    Requirement::Tag(BAR_SPAWN_SURVIVAL),
    Requirement::Tag(BEACON_SPAWN_SURVIVAL),
]);
