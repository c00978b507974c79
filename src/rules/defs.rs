//! Static game-rules definitions
//!
//! Plain data resolved by identifier through the [`Ruleset`](super::Ruleset).
//! The engine never invents defaults for these; a missing definition is a
//! configuration error.

use serde::{Deserialize, Serialize};

use crate::core::types::{ItemId, RealmId, SkillId, SpellId, UnitDefId};

/// How a skill feeds into a unit's combat rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatingModifier {
    /// Each point of the skill adds `per_point` to the rating total.
    ///
    /// With `diminishing_after = Some(t)`, points up to `t` count at the
    /// full rate; each point beyond contributes one less than the point
    /// before it, never below 1.
    Additive {
        per_point: i32,
        #[serde(default)]
        diminishing_after: Option<i32>,
    },
    /// The skill's presence scales the whole rating by `factor`.
    Multiplicative { factor: f64 },
}

/// A skill definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDef {
    pub id: SkillId,
    pub name: String,
    /// How this skill is weighed by the rating calculator; `None` means
    /// the skill is invisible to ratings (purely functional skills).
    #[serde(default)]
    pub rating: Option<RatingModifier>,
}

/// A (skill, value) pair as carried by unit kinds, items, and levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillValue {
    pub skill: SkillId,
    pub value: i32,
}

impl SkillValue {
    pub fn new(skill: SkillId, value: i32) -> Self {
        Self { skill, value }
    }
}

/// A unit kind definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDef {
    pub id: UnitDefId,
    pub name: String,
    pub skills: Vec<SkillValue>,
    pub figures: i32,
    pub hit_points_per_figure: i32,
    /// Number of passenger units this kind can carry; nonzero makes it a
    /// transport for classification purposes.
    #[serde(default)]
    pub transport_capacity: u32,
    /// Shots available to a ranged attacker at combat start
    #[serde(default)]
    pub ranged_ammo: i32,
    pub production_cost: i32,
    #[serde(default)]
    pub upkeep_gold: i32,
    #[serde(default)]
    pub upkeep_mana: i32,
}

impl UnitDef {
    pub fn max_hit_points(&self) -> i32 {
        self.figures * self.hit_points_per_figure
    }
}

/// A spell definition (only the parts the strategic AI consumes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellDef {
    pub id: SpellId,
    pub name: String,
    #[serde(default)]
    pub realm: Option<RealmId>,
    pub casting_cost: i32,
    /// Unit kind this spell places on the map, if it is a summoning spell
    #[serde(default)]
    pub summons: Option<UnitDefId>,
}

/// Equipment slot on a hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSlot {
    Weapon,
    Armor,
    Trinket,
}

/// A hero item definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: String,
    pub slot: ItemSlot,
    /// Crafting tier; compared against the config's quality threshold when
    /// deciding whether an equipped item is worth replacing.
    pub quality: i32,
    pub bonuses: Vec<SkillValue>,
}

/// One rung of the experience ladder
///
/// The ladder is ordered by `required_experience`; the last rung is the
/// level assumed by potential-rating evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceLevelDef {
    pub required_experience: i32,
    pub bonuses: Vec<SkillValue>,
}

/// A spell realm definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealmDef {
    pub id: RealmId,
    pub name: String,
    /// Signed alignment weight; one book pick in this realm shifts the
    /// holder's alignment by this much.
    pub alignment: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_modifier_toml_round_trip() {
        let additive = RatingModifier::Additive {
            per_point: 2,
            diminishing_after: Some(5),
        };
        let text = toml::to_string(&additive).unwrap();
        let back: RatingModifier = toml::from_str(&text).unwrap();
        assert_eq!(back, additive);
    }

    #[test]
    fn test_unit_def_max_hit_points() {
        let def = UnitDef {
            id: UnitDefId(1),
            name: "Swordsmen".to_string(),
            skills: vec![],
            figures: 6,
            hit_points_per_figure: 1,
            transport_capacity: 0,
            ranged_ammo: 0,
            production_cost: 30,
            upkeep_gold: 1,
            upkeep_mana: 0,
        };
        assert_eq!(def.max_hit_points(), 6);
    }
}
