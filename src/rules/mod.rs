//! Static game-rules definitions and the ruleset lookup store

pub mod defs;
pub mod loader;
pub mod ruleset;

pub use defs::{
    ExperienceLevelDef, ItemDef, ItemSlot, RatingModifier, RealmDef, SkillDef,
    SkillValue, SpellDef, UnitDef,
};
pub use loader::{load_ruleset, parse_ruleset};
pub use ruleset::{KeySkills, Ruleset};
