use super::requirement::*;
use crate::types::*;
use log::{debug, log_enabled, Level};
use std::fmt;

/// Every gamemode the engine decides on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gamemode {
    Deathmatch,
    WeaponDeal,
    TeamDeathmatch,
    CaptureTheFlag,
    Zombrains,
    TakeOver,
    Climb,
    SurvivalMinimal,
    SurvivalClassic,
    SurvivalHardcore,
    SurvivalBeacon,
}

impl Gamemode {
    pub const ALL: [Gamemode; 11] = [
        Gamemode::Climb,
        Gamemode::SurvivalMinimal,
        Gamemode::SurvivalClassic,
        Gamemode::SurvivalHardcore,
        Gamemode::SurvivalBeacon,
        Gamemode::Deathmatch,
        Gamemode::TeamDeathmatch,
        Gamemode::WeaponDeal,
        Gamemode::Zombrains,
        Gamemode::TakeOver,
        Gamemode::CaptureTheFlag,
    ];

    /// Name used in the output schema
    pub fn name(&self) -> &'static str {
        match self {
            Gamemode::Deathmatch => "deathmatch",
            Gamemode::WeaponDeal => "weaponDeal",
            Gamemode::TeamDeathmatch => "teamDeathmatch",
            Gamemode::CaptureTheFlag => "captureTheFlag",
            Gamemode::Zombrains => "zombrains",
            Gamemode::TakeOver => "takeOver",
            Gamemode::Climb => "climb",
            Gamemode::SurvivalMinimal => "survival.minimal",
            Gamemode::SurvivalClassic => "survival.classic",
            Gamemode::SurvivalHardcore => "survival.hardcore",
            Gamemode::SurvivalBeacon => "survival.beacon",
        }
    }

    /// Weapon deal has no fixtures of its own and runs wherever deathmatch does.
    pub fn requirement(&self) -> Requirement {
        match self {
            Gamemode::Deathmatch | Gamemode::WeaponDeal => DEATHMATCH,
            Gamemode::TeamDeathmatch => TEAM_DEATHMATCH,
            Gamemode::CaptureTheFlag => CAPTURE_THE_FLAG,
            Gamemode::Zombrains => ZOMBRAINS,
            Gamemode::TakeOver => TAKE_OVER,
            Gamemode::Climb => CLIMB,
            Gamemode::SurvivalMinimal => SURVIVAL_MINIMAL,
            Gamemode::SurvivalClassic => SURVIVAL_CLASSIC,
            Gamemode::SurvivalHardcore => SURVIVAL_HARDCORE,
            Gamemode::SurvivalBeacon => SURVIVAL_BEACON,
        }
    }

    pub fn is_supported(&self, support: &GamemodeSupport) -> bool {
        match self {
            Gamemode::Deathmatch => support.deathmatch,
            Gamemode::WeaponDeal => support.weapon_deal,
            Gamemode::TeamDeathmatch => support.team_deathmatch,
            Gamemode::CaptureTheFlag => support.capture_the_flag,
            Gamemode::Zombrains => support.zombrains,
            Gamemode::TakeOver => support.take_over,
            Gamemode::Climb => support.climb,
            Gamemode::SurvivalMinimal => support.survival.minimal,
            Gamemode::SurvivalClassic => support.survival.classic,
            Gamemode::SurvivalHardcore => support.survival.hardcore,
            Gamemode::SurvivalBeacon => support.survival.beacon,
        }
    }
}

impl fmt::Display for Gamemode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a gamemode was (not) granted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamemodeVerdict {
    pub gamemode: Gamemode,
    pub supported: bool,
    pub unmet: Vec<Unmet>,
}

impl fmt::Display for GamemodeVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.supported {
            return write!(f, "✅ {}", self.gamemode);
        }
        let missing: Vec<String> = self.unmet.iter().map(Unmet::to_string).collect();
        write!(f, "❌ {} (missing {})", self.gamemode, missing.join(", "))
    }
}

/// Decides which gamemodes a sanitized map supports.
///
/// The object collection is scanned once into a `TagSet`; each gamemode is
/// then a lookup-only evaluation of its requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn context<'a>(&self, record: &'a MapRecord) -> RuleContext<'a> {
        RuleContext {
            tags: TagSet::from_objects(&record.objects),
            is_climb: record.is_climb,
        }
    }

    pub fn classify(&self, record: &MapRecord) -> GamemodeSupport {
        let ctx = self.context(record);
        debug!(
            "⚙️  Evaluating gamemode rules for \"{}\" ({} distinct tags)",
            record.title,
            ctx.tags.len()
        );

        let support = self.evaluate(&ctx);

        if log_enabled!(Level::Debug) {
            for verdict in self.verdicts(&ctx) {
                debug!("   {verdict}");
            }
        }

        support
    }

    pub fn evaluate(&self, ctx: &RuleContext) -> GamemodeSupport {
        let deathmatch = DEATHMATCH.is_met(ctx);

        GamemodeSupport {
            climb: CLIMB.is_met(ctx),
            survival: SurvivalSupport {
                minimal: SURVIVAL_MINIMAL.is_met(ctx),
                classic: SURVIVAL_CLASSIC.is_met(ctx),
                hardcore: SURVIVAL_HARDCORE.is_met(ctx),
                beacon: SURVIVAL_BEACON.is_met(ctx),
            },
            deathmatch,
            team_deathmatch: TEAM_DEATHMATCH.is_met(ctx),
            weapon_deal: deathmatch,
            zombrains: ZOMBRAINS.is_met(ctx),
            take_over: TAKE_OVER.is_met(ctx),
            capture_the_flag: CAPTURE_THE_FLAG.is_met(ctx),
        }
    }

    /// Per-gamemode outcome with the fixtures each unsupported mode lacks
    pub fn explain(&self, record: &MapRecord) -> Vec<GamemodeVerdict> {
        self.verdicts(&self.context(record))
    }

    fn verdicts(&self, ctx: &RuleContext) -> Vec<GamemodeVerdict> {
        Gamemode::ALL
            .iter()
            .map(|gamemode| {
                let unmet = gamemode.requirement().unmet(ctx);
                GamemodeVerdict {
                    gamemode: *gamemode,
                    supported: unmet.is_empty(),
                    unmet,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::tags::*;

    fn record(names: &[&str], is_climb: bool) -> MapRecord {
        let objects = names
            .iter()
            .enumerate()
            .map(|(i, name)| (format!("obj{i}"), MapObject::named(name)))
            .collect();
        MapRecord::new("Test map", is_climb, MapId::Valid(1), objects)
    }

    fn classify(names: &[&str], is_climb: bool) -> GamemodeSupport {
        RuleEngine::new().classify(&record(names, is_climb))
    }

    #[test]
    fn test_player_spawn_only() {
        let support = classify(&[PLAYER_SPAWN], false);
        assert_eq!(
            support,
            GamemodeSupport {
                deathmatch: true,
                weapon_deal: true,
                ..GamemodeSupport::default()
            }
        );
        assert!(!support.survival.minimal);
    }

    #[test]
    fn test_team_spawns_with_tdm_flag() {
        let support = classify(&[USC_SPAWN, THE_MAN_SPAWN, TDM_FLAG], false);
        assert!(support.team_deathmatch);
        assert!(support.take_over);
        assert!(!support.deathmatch);
        assert!(!support.weapon_deal);
        assert!(!support.capture_the_flag);
    }

    #[test]
    fn test_takeover_flag_without_tdm_flag() {
        let support = classify(&[USC_SPAWN, THE_MAN_SPAWN, TAKEOVER_FLAG], false);
        assert!(support.take_over);
        assert!(!support.team_deathmatch);
    }

    #[test]
    fn test_climb_needs_flag_and_object() {
        assert!(classify(&[CLIMB_FLAG], true).climb);
        assert!(!classify(&[CLIMB_FLAG], false).climb);
        assert!(!classify(&[], true).climb);
    }

    #[test]
    fn test_full_survival_set() {
        let support = classify(
            &[
                USC_SPAWN,
                ENEMY_SPAWN_SURVIVAL,
                CHEST_SPAWN_SURVIVAL,
                BAR_SPAWN_SURVIVAL,
                OBJECTIVE_SPAWN_SURVIVAL,
            ],
            false,
        );
        assert_eq!(
            support.survival,
            SurvivalSupport {
                minimal: true,
                classic: true,
                hardcore: true,
                beacon: true,
            }
        );
    }

    #[test]
    fn test_beacon_tier_is_independent() {
        let support = classify(&[BEACON_SPAWN_SURVIVAL], false);
        assert!(support.survival.beacon);
        assert!(!support.survival.minimal);
    }

    #[test]
    fn test_hardcore_requires_chest_through_classic() {
        let support = classify(
            &[PLAYER_SPAWN, USC_SPAWN, BAR_SPAWN_SURVIVAL, OBJECTIVE_SPAWN_SURVIVAL],
            false,
        );
        assert!(support.survival.minimal);
        assert!(!support.survival.classic);
        assert!(!support.survival.hardcore);
    }

    #[test]
    fn test_capture_the_flag_needs_all_ten() {
        let all = [
            USC_SPAWN,
            THE_MAN_SPAWN,
            USC_CTF_FLAG,
            THE_MAN_CTF_FLAG,
            USC_RESUPPLY,
            THE_MAN_RESUPPLY,
            USC_GENERATOR,
            THE_MAN_GENERATOR,
            USC_TURRET,
            THE_MAN_TURRET,
        ];
        assert!(classify(&all, false).capture_the_flag);
        for skip in 0..all.len() {
            let partial: Vec<&str> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, t)| *t)
                .collect();
            assert!(!classify(&partial, false).capture_the_flag, "without {}", all[skip]);
        }
    }

    #[test]
    fn test_zombrains_branches() {
        let extras = [HELICOPTER_SPAWN_ZOMBRAINS, WEAPON_PRINTER_ZOMBRAINS];
        let with = |base: &[&'static str]| {
            let mut names = base.to_vec();
            names.extend_from_slice(&extras);
            classify(&names, false).zombrains
        };
        assert!(with(&[PLAYER_SPAWN]));
        assert!(with(&[USC_SPAWN, ZOMBIE_SPAWN_ZOMBRAINS]));
        assert!(!with(&[USC_SPAWN]));
        assert!(!with(&[ZOMBIE_SPAWN_ZOMBRAINS]));
        assert!(!classify(&[PLAYER_SPAWN, HELICOPTER_SPAWN_ZOMBRAINS], false).zombrains);
    }

    #[test]
    fn test_unknown_and_unnamed_objects_are_ignored() {
        let mut record = record(&["Some Future Fixture"], false);
        record.objects.insert("blank".into(), MapObject::default());
        assert_eq!(RuleEngine::new().classify(&record), GamemodeSupport::default());
    }

    #[test]
    fn test_explain_matches_classification() {
        let record = record(&[PLAYER_SPAWN, USC_SPAWN, TDM_FLAG], false);
        let engine = RuleEngine::new();
        let support = engine.classify(&record);
        let verdicts = engine.explain(&record);
        assert_eq!(verdicts.len(), Gamemode::ALL.len());
        for verdict in &verdicts {
            assert_eq!(verdict.supported, verdict.gamemode.is_supported(&support));
        }
        let tdm = verdicts
            .iter()
            .find(|v| v.gamemode == Gamemode::TeamDeathmatch)
            .unwrap();
        assert_eq!(tdm.unmet, vec![Unmet::Tag(THE_MAN_SPAWN)]);
        assert_eq!(tdm.to_string(), "❌ teamDeathmatch (missing \"THE MAN Spawn\")");
    }
}
