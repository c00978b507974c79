//! Shared read-only input for the movement strategies
//!
//! One context per mobile stack per turn. Strategies are pure functions
//! over this view; anything fallible (unit lookups, capacity resolution)
//! happens once, here, when the context is built.

use std::collections::BTreeMap;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::construction::ConstructableOption;
use crate::core::config::AiConfig;
use crate::core::error::Result;
use crate::core::types::{MapCoord, PlayerId};
use crate::defense::evaluator::DefenseAnalysis;
use crate::defense::grids::RatingGrids;
use crate::rating::stack::RatedStack;
use crate::rules::ruleset::Ruleset;
use crate::world::interfaces::MovementCostGrid;
use crate::world::snapshot::{KnownWizard, KnownWorld, Unit};

use super::distance::AiMovementDistance;

/// Host-planned work sites for utility units
#[derive(Debug, Clone, Default)]
pub struct PlayerPlans {
    /// Where the city-planning layer wants new outposts
    pub city_sites: Vec<MapCoord>,
    /// Cells the road network layer wants paved next
    pub road_cells: Vec<MapCoord>,
}

/// Everything a movement strategy may look at
pub struct StrategyContext<'a> {
    pub player: PlayerId,
    pub stack: &'a RatedStack,
    pub world: &'a KnownWorld,
    pub rules: &'a Ruleset,
    pub config: &'a AiConfig,
    pub grids: &'a RatingGrids,
    pub analysis: &'a DefenseAnalysis,
    pub costs: &'a MovementCostGrid,
    pub plans: &'a PlayerPlans,
    /// What reinforcements the construction advisor says are coming
    pub reinforcements: &'a [ConstructableOption],
    /// Skip the strength comparison in attack strategies
    pub reckless: bool,

    wizard: &'a KnownWizard,
    units: Vec<&'a Unit>,
    transport_capacity: u32,
    cargo_count: usize,
    /// Every cell holding enemy units, with its summed current rating
    enemy_cells: BTreeMap<MapCoord, i32>,
    /// Cells holding a friendly transport with room for more passengers
    spare_transport_cells: Vec<MapCoord>,
}

impl<'a> StrategyContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player: PlayerId,
        stack: &'a RatedStack,
        world: &'a KnownWorld,
        rules: &'a Ruleset,
        config: &'a AiConfig,
        grids: &'a RatingGrids,
        analysis: &'a DefenseAnalysis,
        costs: &'a MovementCostGrid,
        plans: &'a PlayerPlans,
        reinforcements: &'a [ConstructableOption],
        reckless: bool,
    ) -> Result<Self> {
        let wizard = world.wizard(player)?;
        let mut units = Vec::with_capacity(stack.len());
        let mut transport_capacity = 0u32;
        let mut cargo_count = 0usize;
        for rated in stack.units() {
            let unit = world.unit(rated.unit)?;
            let def = rules.unit(unit.unit_def)?;
            transport_capacity += def.transport_capacity;
            cargo_count += unit.cargo.len();
            units.push(unit);
        }

        let mut enemy_cells = BTreeMap::new();
        for unit in &world.units {
            if unit.owner != player {
                let strength = grids.enemy_current.get(unit.location).copied().unwrap_or(0);
                enemy_cells.insert(unit.location, strength);
            }
        }

        let mut spare_transport_cells: Vec<MapCoord> = Vec::new();
        for unit in world.units_of(player) {
            let def = rules.unit(unit.unit_def)?;
            if def.transport_capacity as usize > unit.cargo.len()
                && !spare_transport_cells.contains(&unit.location)
            {
                spare_transport_cells.push(unit.location);
            }
        }

        Ok(Self {
            player,
            stack,
            world,
            rules,
            config,
            grids,
            analysis,
            costs,
            plans,
            reinforcements,
            reckless,
            wizard,
            units,
            transport_capacity,
            cargo_count,
            enemy_cells,
            spare_transport_cells,
        })
    }

    pub fn at(&self) -> MapCoord {
        self.stack.location
    }

    pub fn wizard(&self) -> &'a KnownWizard {
        self.wizard
    }

    pub fn units(&self) -> &[&'a Unit] {
        &self.units
    }

    /// Slowest member bounds the stack
    pub fn movement_left(&self) -> i32 {
        self.units.iter().map(|u| u.movement_left).min().unwrap_or(0)
    }

    pub fn stack_average(&self) -> i32 {
        self.stack.total_average_rating()
    }

    pub fn transport_capacity(&self) -> u32 {
        self.transport_capacity
    }

    pub fn cargo_count(&self) -> usize {
        self.cargo_count
    }

    pub fn distance_to(&self, coord: MapCoord) -> Option<AiMovementDistance> {
        self.costs.cost(coord)
    }

    /// Cells with enemy units, with summed current ratings, in coordinate order
    pub fn enemy_cells(&self) -> impl Iterator<Item = (MapCoord, i32)> + '_ {
        self.enemy_cells.iter().map(|(&c, &s)| (c, s))
    }

    pub fn spare_transport_cells(&self) -> &[MapCoord] {
        &self.spare_transport_cells
    }

    /// Pick the reachable candidate with the lowest movement distance
    ///
    /// Exact distance ties are broken uniformly at random so identical
    /// stacks don't all converge on one predictable destination.
    pub fn closest(
        &self,
        candidates: impl IntoIterator<Item = MapCoord>,
        rng: &mut ChaCha8Rng,
    ) -> Option<MapCoord> {
        let mut best: Option<AiMovementDistance> = None;
        let mut tied: Vec<MapCoord> = Vec::new();
        for coord in candidates {
            let Some(dist) = self.costs.cost(coord) else {
                continue;
            };
            match best {
                None => {
                    best = Some(dist);
                    tied.clear();
                    tied.push(coord);
                }
                Some(b) if dist.is_shorter_than(&b) => {
                    best = Some(dist);
                    tied.clear();
                    tied.push(coord);
                }
                Some(b) if dist == b => tied.push(coord),
                Some(_) => {}
            }
        }
        match tied.len() {
            0 => None,
            1 => Some(tied[0]),
            n => Some(tied[rng.gen_range(0..n)]),
        }
    }
}
