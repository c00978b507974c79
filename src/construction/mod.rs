//! Construction advisor
//!
//! Ranks what a player could add to its armies this turn, either built in
//! a city or summoned. The movement pipeline reads this to know what
//! reinforcements are coming; the city-build layer reads it to pick what
//! to start next.

use serde::{Deserialize, Serialize};

use crate::core::config::AiConfig;
use crate::core::error::Result;
use crate::core::types::{MapCoord, PlayerId, SpellId, UnitDefId, UnitId};
use crate::rating::calculator::rate_unit;
use crate::rules::ruleset::Ruleset;
use crate::world::interfaces::ProductionOracle;
use crate::world::snapshot::{KnownWizard, KnownWorld, Unit};

/// Where a candidate unit would come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructionSource {
    /// Built by the city at this location
    City(MapCoord),
    /// Placed by casting this spell
    Summon(SpellId),
}

/// One unit the player could add, with its worth and cost verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructableOption {
    pub unit: UnitDefId,
    pub source: ConstructionSource,
    pub average_rating: i32,
    pub affordable: bool,
}

impl ConstructableOption {
    pub fn built_at(&self) -> Option<MapCoord> {
        match self.source {
            ConstructionSource::City(loc) => Some(loc),
            ConstructionSource::Summon(_) => None,
        }
    }

    pub fn summoned_by(&self) -> Option<SpellId> {
        match self.source {
            ConstructionSource::City(_) => None,
            ConstructionSource::Summon(id) => Some(id),
        }
    }
}

/// Rate a factory-fresh unit of a kind for this player
fn pristine_rating(
    def_id: UnitDefId,
    wizard: &KnownWizard,
    rules: &Ruleset,
    config: &AiConfig,
) -> Result<i32> {
    let phantom = Unit {
        id: UnitId::new(),
        owner: wizard.player,
        location: MapCoord::new(0, 0, 0),
        unit_def: def_id,
        damage_taken: 0,
        experience: 0,
        equipment: Vec::new(),
        enchant_skills: Vec::new(),
        movement_left: 0,
        cargo: Vec::new(),
    };
    Ok(rate_unit(&phantom, wizard, rules, config)?.average)
}

/// Every unit this player could build or summon, best first
///
/// Affordable options sort ahead of unaffordable ones, then by rating;
/// an empty result just means nothing is on offer, which is normal for
/// raider and monster factions.
pub fn constructable_units(
    world: &KnownWorld,
    player: PlayerId,
    rules: &Ruleset,
    oracle: &dyn ProductionOracle,
    config: &AiConfig,
) -> Result<Vec<ConstructableOption>> {
    let wizard = world.wizard(player)?;
    let mut options = Vec::new();

    for city in world.cities_of(player) {
        for &def_id in &city.constructable_units {
            options.push(ConstructableOption {
                unit: def_id,
                source: ConstructionSource::City(city.location),
                average_rating: pristine_rating(def_id, wizard, rules, config)?,
                affordable: oracle.can_sustain_unit(player, def_id),
            });
        }
    }

    for &spell_id in &wizard.summon_spells {
        let spell = rules.spell(spell_id)?;
        let Some(def_id) = spell.summons else {
            continue;
        };
        options.push(ConstructableOption {
            unit: def_id,
            source: ConstructionSource::Summon(spell_id),
            average_rating: pristine_rating(def_id, wizard, rules, config)?,
            affordable: oracle.can_sustain_summon(player, spell_id),
        });
    }

    options.sort_by(|a, b| {
        b.affordable
            .cmp(&a.affordable)
            .then_with(|| b.average_rating.cmp(&a.average_rating))
            .then_with(|| a.unit.cmp(&b.unit))
    });

    tracing::debug!(
        "construction advisor for {:?}: {} options, best {:?}",
        player,
        options.len(),
        options.first().map(|o| (o.unit, o.average_rating))
    );

    Ok(options)
}
