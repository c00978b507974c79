//! Resolved unit profiles
//!
//! A profile is the flattened skill picture the rating calculator works
//! from. Two resolutions exist: the unit exactly as it stands, and an
//! idealized copy used for potential ratings. Building the idealized form
//! as a fresh value (rather than temporarily editing the real unit) means
//! no restore step can ever be missed.

use ahash::AHashMap;

use crate::core::config::AiConfig;
use crate::core::error::Result;
use crate::core::types::{ItemId, SkillId};
use crate::rules::defs::{ItemSlot, SkillValue};
use crate::rules::ruleset::Ruleset;
use crate::world::snapshot::{KnownWizard, Unit};

/// What a unit can do, derived from its resolved skills and kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub melee: bool,
    pub ranged: bool,
    pub found_outpost: bool,
    pub build_road: bool,
    pub meld_node: bool,
    pub purify: bool,
    pub caster: bool,
    pub transport_capacity: u32,
}

impl Capabilities {
    /// True if the unit can deal damage in combat at all
    pub fn is_combatant(&self) -> bool {
        self.melee || self.ranged
    }
}

/// A unit's flattened skill set plus condition, ready for rating
#[derive(Debug, Clone)]
pub struct UnitProfile {
    pub skills: AHashMap<SkillId, i32>,
    pub hp_fraction: f64,
    pub caps: Capabilities,
}

impl UnitProfile {
    pub fn skill_value(&self, skill: SkillId) -> i32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }
}

fn merge(skills: &mut AHashMap<SkillId, i32>, bonus: &SkillValue) {
    *skills.entry(bonus.skill).or_insert(0) += bonus.value;
}

fn capabilities(
    skills: &AHashMap<SkillId, i32>,
    transport_capacity: u32,
    rules: &Ruleset,
) -> Capabilities {
    let key = rules.key_skills();
    let has = |id: SkillId| skills.get(&id).copied().unwrap_or(0) > 0;
    Capabilities {
        melee: has(key.melee_attack),
        ranged: has(key.ranged_attack),
        found_outpost: has(key.create_outpost),
        build_road: has(key.build_road),
        meld_node: has(key.meld_node),
        purify: has(key.purify),
        caster: has(key.caster),
        transport_capacity,
    }
}

fn resolve(
    unit: &Unit,
    rules: &Ruleset,
    experience: i32,
    equipment: &[ItemId],
    hp_fraction: f64,
) -> Result<UnitProfile> {
    let def = rules.unit(unit.unit_def)?;

    let mut skills = AHashMap::new();
    for sv in &def.skills {
        merge(&mut skills, sv);
    }
    if let Some(level) = rules.experience_level_for(experience) {
        for sv in &level.bonuses {
            merge(&mut skills, sv);
        }
    }
    for &item_id in equipment {
        let item = rules.item(item_id)?;
        for sv in &item.bonuses {
            merge(&mut skills, sv);
        }
    }
    for sv in &unit.enchant_skills {
        merge(&mut skills, sv);
    }

    let caps = capabilities(&skills, def.transport_capacity, rules);
    Ok(UnitProfile {
        skills,
        hp_fraction,
        caps,
    })
}

/// Resolve the unit exactly as it stands
pub fn resolve_current(unit: &Unit, rules: &Ruleset) -> Result<UnitProfile> {
    resolve(
        unit,
        rules,
        unit.experience,
        &unit.equipment,
        unit.hp_fraction(rules)?,
    )
}

/// Resolve an idealized copy: healed, at the top of the experience ladder,
/// with sub-threshold items swapped for the best obtainable per slot
pub fn resolve_potential(
    unit: &Unit,
    wizard: &KnownWizard,
    rules: &Ruleset,
    config: &AiConfig,
) -> Result<UnitProfile> {
    let max_experience = rules
        .max_experience_level()
        .map(|l| l.required_experience)
        .unwrap_or(unit.experience);

    let mut equipment = Vec::with_capacity(unit.equipment.len());
    for &item_id in &unit.equipment {
        let item = rules.item(item_id)?;
        if item.quality < config.item_quality_threshold {
            equipment.push(
                best_obtainable(item.slot, item.quality, &wizard.available_items, rules)?
                    .unwrap_or(item_id),
            );
        } else {
            equipment.push(item_id);
        }
    }

    resolve(unit, rules, max_experience, &equipment, 1.0)
}

/// Highest-quality vault item for a slot that beats `at_least`, if any
fn best_obtainable(
    slot: ItemSlot,
    at_least: i32,
    vault: &[ItemId],
    rules: &Ruleset,
) -> Result<Option<ItemId>> {
    let mut best: Option<(i32, ItemId)> = None;
    for &id in vault {
        let item = rules.item(id)?;
        if item.slot != slot || item.quality <= at_least {
            continue;
        }
        if best.map_or(true, |(q, _)| item.quality > q) {
            best = Some((item.quality, id));
        }
    }
    Ok(best.map(|(_, id)| id))
}
