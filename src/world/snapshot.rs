//! Fog-of-war scoped world snapshot
//!
//! One player's remembered view of the world, provided by the host at the
//! start of its turn. Everything here is read-only input to the engine;
//! the only writes go back through the mutation collaborator.

use serde::{Deserialize, Serialize};

use crate::core::error::{AiError, Result};
use crate::core::types::{ItemId, MapCoord, PlayerId, RealmId, SpellId, UnitDefId, UnitId};
use crate::rules::defs::SkillValue;
use crate::rules::ruleset::Ruleset;
use crate::world::map::MapGrid;

/// Remembered terrain class of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KnownTerrain {
    #[default]
    Land,
    Water,
}

/// Kind of strategic site occupying a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteKind {
    City,
    Tower,
    Node,
    Lair,
}

/// A strategic site and who we believe controls it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub kind: SiteKind,
    pub owner: Option<PlayerId>,
}

/// One remembered map cell
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct KnownTile {
    /// False until the player has ever seen this cell
    pub known: bool,
    pub terrain: KnownTerrain,
    pub site: Option<Site>,
    pub corrupted: bool,
}

/// What kind of player this is, which shapes how its units fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Wizard,
    Raiders,
    RampagingMonsters,
}

impl PlayerKind {
    /// Reckless players attack without comparing strength first
    pub fn is_reckless(&self) -> bool {
        matches!(self, Self::Raiders | Self::RampagingMonsters)
    }
}

/// A unit instance as remembered in the snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub owner: PlayerId,
    pub location: MapCoord,
    pub unit_def: UnitDefId,
    /// Hit points lost across all figures
    pub damage_taken: i32,
    pub experience: i32,
    pub equipment: Vec<ItemId>,
    /// Skill deltas from spells and combat-area effects, already resolved
    /// by the host rules engine
    pub enchant_skills: Vec<SkillValue>,
    pub movement_left: i32,
    /// Units embarked on this one (transports only)
    pub cargo: Vec<UnitId>,
}

impl Unit {
    /// Fraction of total hit points remaining, in [0, 1]
    pub fn hp_fraction(&self, rules: &Ruleset) -> Result<f64> {
        let def = rules.unit(self.unit_def)?;
        let max = def.max_hit_points().max(1);
        let left = (max - self.damage_taken).clamp(0, max);
        Ok(f64::from(left) / f64::from(max))
    }
}

/// A known wizard (or raider/monster faction)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownWizard {
    pub player: PlayerId,
    pub kind: PlayerKind,
    /// Spell-book picks held, as (realm, book count)
    pub picks: Vec<(RealmId, u32)>,
    pub capital: Option<MapCoord>,
    /// Items sitting unused in the fortress vault
    pub available_items: Vec<ItemId>,
    /// Summoning spells this player knows and could cast overland
    pub summon_spells: Vec<SpellId>,
}

/// An owned city and what it could currently build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownCity {
    pub location: MapCoord,
    pub owner: PlayerId,
    pub constructable_units: Vec<UnitDefId>,
}

/// The full snapshot handed to the engine for one player's turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnownWorld {
    pub tiles: MapGrid<KnownTile>,
    pub units: Vec<Unit>,
    pub cities: Vec<KnownCity>,
    pub wizards: Vec<KnownWizard>,
}

impl KnownWorld {
    pub fn new(tiles: MapGrid<KnownTile>) -> Self {
        Self {
            tiles,
            units: Vec::new(),
            cities: Vec::new(),
            wizards: Vec::new(),
        }
    }

    pub fn tile(&self, coord: MapCoord) -> Option<&KnownTile> {
        self.tiles.get(coord)
    }

    pub fn unit(&self, id: UnitId) -> Result<&Unit> {
        self.units
            .iter()
            .find(|u| u.id == id)
            .ok_or(AiError::UnitNotFound(id))
    }

    pub fn wizard(&self, player: PlayerId) -> Result<&KnownWizard> {
        self.wizards
            .iter()
            .find(|w| w.player == player)
            .ok_or(AiError::PlayerNotFound(player))
    }

    pub fn units_at(&self, location: MapCoord) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.location == location)
    }

    pub fn units_of(&self, player: PlayerId) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(move |u| u.owner == player)
    }

    pub fn cities_of(&self, player: PlayerId) -> impl Iterator<Item = &KnownCity> {
        self.cities.iter().filter(move |c| c.owner == player)
    }

    /// Sum of enemy units' count at a location (any owner but `player`)
    pub fn enemies_at(&self, location: MapCoord, player: PlayerId) -> impl Iterator<Item = &Unit> {
        self.units
            .iter()
            .filter(move |u| u.location == location && u.owner != player)
    }
}
