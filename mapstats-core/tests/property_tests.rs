//! Property-based tests for the gamemode rules
//!
//! Object collections are generated from the fixture vocabulary plus unknown
//! tags and image placements, and the classifier is checked against the
//! invariants every map must satisfy.

use mapstats_core::rules::tags::*;
use mapstats_core::{MapClassifier, MapId, MapObject, MapObjects, MapRecord, ObjectSanitizer};
use proptest::prelude::*;

const VOCABULARY: [&str; 23] = [
    PLAYER_SPAWN,
    USC_SPAWN,
    THE_MAN_SPAWN,
    TDM_FLAG,
    TAKEOVER_FLAG,
    USC_CTF_FLAG,
    THE_MAN_CTF_FLAG,
    USC_RESUPPLY,
    THE_MAN_RESUPPLY,
    USC_GENERATOR,
    THE_MAN_GENERATOR,
    USC_TURRET,
    THE_MAN_TURRET,
    ENEMY_SPAWN_SURVIVAL,
    CHEST_SPAWN_SURVIVAL,
    BAR_SPAWN_SURVIVAL,
    OBJECTIVE_SPAWN_SURVIVAL,
    BEACON_SPAWN_SURVIVAL,
    ZOMBIE_SPAWN_ZOMBRAINS,
    HELICOPTER_SPAWN_ZOMBRAINS,
    WEAPON_PRINTER_ZOMBRAINS,
    CLIMB_FLAG,
    "Unknown Fixture",
];

// Strategy for one tag name: a known fixture, an image, or nothing at all
fn tag_name() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        6 => prop::sample::select(VOCABULARY.to_vec()).prop_map(|t| Some(t.to_string())),
        2 => "[a-z]{1,8}\\.png".prop_map(Some),
        1 => prop::sample::select(VOCABULARY.to_vec()).prop_map(|t| Some(format!("{t}.png"))),
        1 => Just(None::<String>),
    ]
}

fn tag_names() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(tag_name(), 0..30)
}

fn record_from(names: &[Option<String>], is_climb: bool, key_offset: usize) -> MapRecord {
    let objects: MapObjects = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let object = MapObject {
                name: name.clone(),
                ..MapObject::default()
            };
            (format!("k{:04}", i + key_offset), object)
        })
        .collect();
    MapRecord::new("Generated", is_climb, MapId::Valid(1), objects)
}

proptest! {
    #[test]
    fn weapon_deal_always_equals_deathmatch(names in tag_names(), is_climb in any::<bool>()) {
        let summary = MapClassifier::default().classify(record_from(&names, is_climb, 0));
        prop_assert_eq!(summary.gamemodes.weapon_deal, summary.gamemodes.deathmatch);
    }

    #[test]
    fn survival_tiers_are_nested(names in tag_names()) {
        let survival = MapClassifier::default().classify(record_from(&names, false, 0)).gamemodes.survival;
        prop_assert!(!survival.hardcore || survival.classic);
        prop_assert!(!survival.classic || survival.minimal);
    }

    #[test]
    fn order_of_objects_does_not_matter(names in tag_names(), is_climb in any::<bool>()) {
        let classifier = MapClassifier::default();
        let forward = classifier.classify(record_from(&names, is_climb, 0));

        let mut reversed = names.clone();
        reversed.reverse();
        let backward = classifier.classify(record_from(&reversed, is_climb, 500));

        prop_assert_eq!(forward.gamemodes, backward.gamemodes);
    }

    #[test]
    fn duplicates_do_not_matter(names in tag_names(), is_climb in any::<bool>()) {
        let classifier = MapClassifier::default();
        let single = classifier.classify(record_from(&names, is_climb, 0));

        let mut doubled = names.clone();
        doubled.extend(names.iter().cloned());
        let double = classifier.classify(record_from(&doubled, is_climb, 0));

        prop_assert_eq!(single.gamemodes, double.gamemodes);
    }

    #[test]
    fn classification_is_idempotent(names in tag_names(), is_climb in any::<bool>()) {
        let classifier = MapClassifier::default();
        let sanitized = classifier.sanitize(record_from(&names, is_climb, 0));
        let first = classifier.classify_sanitized(&sanitized).to_json_pretty().unwrap();
        let second = classifier.classify_sanitized(&sanitized).to_json_pretty().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sanitize_removes_exactly_the_images(names in tag_names()) {
        let sanitizer = ObjectSanitizer::default();
        let record = record_from(&names, false, 0);
        let once = sanitizer.sanitize(record.clone());

        for (key, object) in &record.objects {
            let is_image = object.tag_name().is_some_and(|n| n.ends_with(".png"));
            prop_assert_eq!(once.objects.contains_key(key), !is_image);
        }
        prop_assert_eq!(sanitizer.sanitize(once.clone()), once);
    }
}
