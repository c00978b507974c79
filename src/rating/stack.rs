//! Rated units grouped into per-location, per-category stacks

use crate::core::config::AiConfig;
use crate::core::error::Result;
use crate::core::types::{MapCoord, PlayerId, UnitId};
use crate::rules::ruleset::Ruleset;
use crate::world::snapshot::{KnownWorld, Unit};

use super::calculator::rate_unit;
use super::classify::{classify, UnitCategory};
use super::profile::resolve_current;

/// One unit with its category and ratings for this turn
#[derive(Debug, Clone, Copy)]
pub struct RatedUnit {
    pub unit: UnitId,
    pub category: UnitCategory,
    pub current: i32,
    pub average: i32,
}

/// Units sharing one location and one category
///
/// Invariant: every member has this stack's location and category, so a
/// settler is never summed into an attack rating.
#[derive(Debug, Clone)]
pub struct RatedStack {
    pub location: MapCoord,
    pub category: UnitCategory,
    units: Vec<RatedUnit>,
}

impl RatedStack {
    pub fn new(location: MapCoord, category: UnitCategory) -> Self {
        Self {
            location,
            category,
            units: Vec::new(),
        }
    }

    pub fn push(&mut self, unit: RatedUnit) {
        debug_assert_eq!(unit.category, self.category);
        self.units.push(unit);
    }

    pub fn units(&self) -> &[RatedUnit] {
        &self.units
    }

    pub fn unit_ids(&self) -> Vec<UnitId> {
        self.units.iter().map(|u| u.unit).collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Summed average rating, the "can we win this fight" number
    pub fn total_average_rating(&self) -> i32 {
        self.units.iter().map(|u| u.average).sum()
    }

    pub fn total_current_rating(&self) -> i32 {
        self.units.iter().map(|u| u.current).sum()
    }
}

/// Rate and classify one snapshot unit
pub fn rate_and_classify(
    unit: &Unit,
    world: &KnownWorld,
    rules: &Ruleset,
    config: &AiConfig,
) -> Result<RatedUnit> {
    let wizard = world.wizard(unit.owner)?;
    let rating = rate_unit(unit, wizard, rules, config)?;
    let profile = resolve_current(unit, rules)?;
    Ok(RatedUnit {
        unit: unit.id,
        category: classify(&profile.caps),
        current: rating.current,
        average: rating.average,
    })
}

/// Group a player's units at one location into per-category stacks
pub fn stacks_at(
    world: &KnownWorld,
    player: PlayerId,
    location: MapCoord,
    rules: &Ruleset,
    config: &AiConfig,
) -> Result<Vec<RatedStack>> {
    let mut stacks: Vec<RatedStack> = Vec::new();
    for unit in world.units_at(location).filter(|u| u.owner == player) {
        let rated = rate_and_classify(unit, world, rules, config)?;
        match stacks.iter_mut().find(|s| s.category == rated.category) {
            Some(stack) => stack.push(rated),
            None => {
                let mut stack = RatedStack::new(location, rated.category);
                stack.push(rated);
                stacks.push(stack);
            }
        }
    }
    Ok(stacks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(category: UnitCategory, current: i32, average: i32) -> RatedUnit {
        RatedUnit {
            unit: UnitId::new(),
            category,
            current,
            average,
        }
    }

    #[test]
    fn test_stack_totals() {
        let mut stack = RatedStack::new(MapCoord::new(0, 1, 1), UnitCategory::Combat);
        stack.push(rated(UnitCategory::Combat, 10, 12));
        stack.push(rated(UnitCategory::Combat, 5, 9));
        assert_eq!(stack.total_current_rating(), 15);
        assert_eq!(stack.total_average_rating(), 21);
        assert_eq!(stack.len(), 2);
    }
}
