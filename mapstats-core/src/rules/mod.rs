// Gamemode rules - delegates to semantic sub-modules
// - tags.rs: fixture tag names the rules look for
// - requirement.rs: tag set, requirement formulas and the rule table
// - engine.rs: RuleEngine and the Gamemode enumeration

pub mod engine;
pub mod requirement;
pub mod tags;

pub use engine::*;
pub use requirement::{Requirement, RuleContext, TagSet, Unmet};
