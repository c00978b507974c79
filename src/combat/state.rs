//! The AI's view of one tactical combat

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{CombatCoord, PlayerId, UnitId};

/// One unit as seen inside a combat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatUnit {
    pub id: UnitId,
    pub owner: PlayerId,
    /// Cleared when the unit leaves the combat grid (dead, fled, or the
    /// combat ended around it)
    pub position: Option<CombatCoord>,
    pub movement_left: i32,
    pub melee: bool,
    pub ranged: bool,
    pub ranged_ammo: i32,
    pub is_caster: bool,
    pub casting_resource: i32,
    pub alive: bool,
}

impl CombatUnit {
    pub fn has_attack(&self) -> bool {
        self.melee || self.ranged
    }

    pub fn can_shoot(&self) -> bool {
        self.ranged && self.ranged_ammo > 0
    }

    pub fn has_casting_reserve(&self, threshold: i32) -> bool {
        self.is_caster && self.casting_resource >= threshold
    }
}

/// Acting priority within a round
///
/// Casters that can still cast act first (they may have something better
/// to do than swing); exhausted casters act last so they can retreat
/// behind everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CombatRole {
    CasterWithReserve,
    Ranged,
    Melee,
    SpentCaster,
}

impl CombatRole {
    pub fn of(unit: &CombatUnit, caster_threshold: i32) -> Self {
        if unit.is_caster {
            if unit.casting_resource >= caster_threshold {
                Self::CasterWithReserve
            } else {
                Self::SpentCaster
            }
        } else if unit.ranged {
            Self::Ranged
        } else {
            Self::Melee
        }
    }
}

/// The units present in one combat, both sides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombatView {
    pub units: Vec<CombatUnit>,
}

impl CombatView {
    pub fn living_enemies_of(&self, player: PlayerId) -> impl Iterator<Item = &CombatUnit> {
        self.units
            .iter()
            .filter(move |u| u.owner != player && u.alive && u.position.is_some())
    }
}

/// Host collaborator applying combat actions
///
/// The engine picks who acts and at whom; the host owns hit rolls, spell
/// choice, line of sight, and the combat map itself.
pub trait CombatActions {
    /// True once the combat has been decided
    fn is_ended(&self) -> bool;

    /// Current grid position, `None` once the unit has left the combat
    fn position(&self, unit: UnitId) -> Option<CombatCoord>;

    /// Offer the spell layer a chance to cast for this unit; returns true
    /// if a spell was cast
    fn try_cast(&mut self, unit: UnitId) -> Result<bool>;

    /// Whether a legal ranged attack exists right now (ammo, range, line
    /// of sight)
    fn can_ranged_attack(&self, attacker: UnitId, target: UnitId) -> bool;

    /// Resolve an attack, melee or ranged as appropriate
    fn attack(&mut self, attacker: UnitId, target: UnitId) -> Result<()>;

    /// Advance one step along the best path; false if blocked in place
    fn step_toward(&mut self, unit: UnitId, toward: CombatCoord) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(is_caster: bool, resource: i32, ranged: bool) -> CombatUnit {
        CombatUnit {
            id: UnitId::new(),
            owner: PlayerId(0),
            position: Some(CombatCoord::new(0, 0)),
            movement_left: 2,
            melee: true,
            ranged,
            ranged_ammo: if ranged { 8 } else { 0 },
            is_caster,
            casting_resource: resource,
            alive: true,
        }
    }

    #[test]
    fn test_role_ordering() {
        assert!(CombatRole::CasterWithReserve < CombatRole::Ranged);
        assert!(CombatRole::Ranged < CombatRole::Melee);
        assert!(CombatRole::Melee < CombatRole::SpentCaster);
    }

    #[test]
    fn test_role_assignment() {
        assert_eq!(CombatRole::of(&unit(true, 12, false), 10), CombatRole::CasterWithReserve);
        assert_eq!(CombatRole::of(&unit(true, 3, false), 10), CombatRole::SpentCaster);
        // A spent caster stays last even if it could shoot
        assert_eq!(CombatRole::of(&unit(true, 0, true), 10), CombatRole::SpentCaster);
        assert_eq!(CombatRole::of(&unit(false, 0, true), 10), CombatRole::Ranged);
        assert_eq!(CombatRole::of(&unit(false, 0, false), 10), CombatRole::Melee);
    }
}
