//! Core type definitions used throughout the engine

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (human, AI wizard, raiders, monsters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Unique identifier for a unit instance on the map
///
/// Unit instances are created by the host game session, so their ids are
/// opaque entity ids rather than indexes into any table this crate owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub Uuid);

impl UnitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier for a static unit kind in the ruleset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitDefId(pub u32);

/// Identifier for a skill definition in the ruleset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SkillId(pub u32);

/// Identifier for a spell definition in the ruleset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpellId(pub u32);

/// Identifier for a hero item definition in the ruleset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

/// Identifier for a spell realm (the "color" of a book pick)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RealmId(pub u32);

/// Overland map coordinate: plane, column, row
///
/// The overland world is a stack of same-sized square-grid planes.
/// Ordering is (plane, y, x) so sorted collections of coordinates have a
/// stable, documented order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapCoord {
    pub plane: u8,
    pub x: i32,
    pub y: i32,
}

impl MapCoord {
    pub fn new(plane: u8, x: i32, y: i32) -> Self {
        Self { plane, x, y }
    }

    /// Chebyshev distance to another coordinate on the same plane
    ///
    /// Returns `None` across planes; planes are only connected through
    /// towers, which the pathfinding collaborator knows about.
    pub fn grid_distance(&self, other: &MapCoord) -> Option<i32> {
        if self.plane != other.plane {
            return None;
        }
        Some(((self.x - other.x).abs()).max((self.y - other.y).abs()))
    }

    /// True if `other` is one of the 8 surrounding cells on the same plane
    pub fn is_adjacent(&self, other: &MapCoord) -> bool {
        self != other && self.grid_distance(other) == Some(1)
    }

    /// Sort key making "lowest coordinate" explicit: plane, then row, then column
    pub fn sort_key(&self) -> (u8, i32, i32) {
        (self.plane, self.y, self.x)
    }
}

impl PartialOrd for MapCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MapCoord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Position on the tactical combat grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatCoord {
    pub x: i32,
    pub y: i32,
}

impl CombatCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance in combat grid cells
    pub fn distance(&self, other: &CombatCoord) -> i32 {
        ((self.x - other.x).abs()).max((self.y - other.y).abs())
    }

    /// True if `other` is within melee reach
    pub fn is_adjacent(&self, other: &CombatCoord) -> bool {
        self != other && self.distance(other) <= 1
    }
}
