//! Collaborator interfaces at the engine boundary
//!
//! The engine never computes paths, applies moves, or audits treasuries
//! itself; hosts implement these traits over the authoritative game state.

use crate::core::error::Result;
use crate::core::types::{MapCoord, PlayerId, SpellId, UnitDefId, UnitId};
use crate::movement::decision::SpecialOrder;
use crate::movement::distance::AiMovementDistance;
use crate::world::map::MapGrid;
use crate::world::snapshot::KnownWorld;

/// Per-cell movement cost from one stack's starting point
///
/// `None` cells are unreachable for the queried stack.
#[derive(Debug, Clone)]
pub struct MovementCostGrid {
    grid: MapGrid<Option<AiMovementDistance>>,
}

impl MovementCostGrid {
    pub fn new(planes: usize, width: usize, height: usize, wrap_x: bool) -> Self {
        Self {
            grid: MapGrid::new(planes, width, height, wrap_x),
        }
    }

    pub fn set_cost(&mut self, coord: MapCoord, cost: AiMovementDistance) {
        self.grid.set(coord, Some(cost));
    }

    pub fn cost(&self, coord: MapCoord) -> Option<AiMovementDistance> {
        self.grid.get(coord).copied().flatten()
    }

    pub fn is_reachable(&self, coord: MapCoord) -> bool {
        self.cost(coord).is_some()
    }
}

/// Result of applying a move through the host
#[derive(Debug, Clone, Copy)]
pub struct MoveReport {
    /// The destination held hostile units and a combat began
    pub combat_started: bool,
}

/// Result of submitting a special order to world validation
#[derive(Debug, Clone)]
pub struct OrderReport {
    pub accepted: bool,
    /// Host-side validation message when rejected
    pub reason: Option<String>,
}

/// Overland movement-cost and routing collaborator
pub trait Pathfinder {
    /// Movement cost from `from` to every reachable cell for this stack
    fn cost_grid(&self, world: &KnownWorld, units: &[UnitId], from: MapCoord)
        -> MovementCostGrid;

    /// Concrete step-by-step path, or `None` if unroutable
    fn route(
        &self,
        world: &KnownWorld,
        units: &[UnitId],
        from: MapCoord,
        to: MapCoord,
    ) -> Option<Vec<MapCoord>>;
}

/// The only two writes this engine performs against the world
pub trait WorldMutator {
    /// Move a stack along a path; may start a combat at the far end
    fn execute_move(&mut self, units: &[UnitId], path: &[MapCoord]) -> Result<MoveReport>;

    /// Submit a special order for one unit; world rules may reject it
    fn execute_special_order(&mut self, unit: UnitId, order: SpecialOrder)
        -> Result<OrderReport>;
}

/// Upkeep/affordability oracle consulted before offering construction options
pub trait ProductionOracle {
    fn can_sustain_unit(&self, player: PlayerId, unit: UnitDefId) -> bool;
    fn can_sustain_summon(&self, player: PlayerId, spell: SpellId) -> bool;
}
