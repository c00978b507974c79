//! Per-turn map-wide rating accumulation
//!
//! Three same-shaped grids, one per rating layer, owned by the caller for
//! exactly one AI turn. Only strength-bearing categories are accumulated;
//! settlers and engineers never show up in these numbers.

use crate::core::config::AiConfig;
use crate::core::error::Result;
use crate::core::types::{MapCoord, PlayerId};
use crate::rating::stack::rate_and_classify;
use crate::rules::ruleset::Ruleset;
use crate::world::map::MapGrid;
use crate::world::snapshot::KnownWorld;

/// Friendly and enemy rated strength across every cell of every plane
#[derive(Debug, Clone)]
pub struct RatingGrids {
    pub friendly_current: MapGrid<i32>,
    pub friendly_average: MapGrid<i32>,
    pub enemy_current: MapGrid<i32>,
}

impl RatingGrids {
    fn add(grid: &mut MapGrid<i32>, coord: MapCoord, rating: i32) {
        if let Some(cell) = grid.get_mut(coord) {
            *cell += rating;
        }
    }

    /// Summed enemy current rating within a square radius of a cell
    pub fn enemy_strength_near(&self, center: MapCoord, radius: i32) -> i32 {
        let mut total = 0;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let coord = MapCoord::new(center.plane, center.x + dx, center.y + dy);
                if let Some(&rating) = self.enemy_current.get(coord) {
                    total += rating;
                }
            }
        }
        total
    }
}

/// Rate every visible unit and accumulate the per-cell totals
pub fn accumulate_ratings(
    world: &KnownWorld,
    player: PlayerId,
    rules: &Ruleset,
    config: &AiConfig,
) -> Result<RatingGrids> {
    let mut grids = RatingGrids {
        friendly_current: world.tiles.same_shape(),
        friendly_average: world.tiles.same_shape(),
        enemy_current: world.tiles.same_shape(),
    };

    for unit in &world.units {
        let rated = rate_and_classify(unit, world, rules, config)?;
        if !rated.category.counts_for_strength() {
            continue;
        }
        if unit.owner == player {
            RatingGrids::add(&mut grids.friendly_current, unit.location, rated.current);
            RatingGrids::add(&mut grids.friendly_average, unit.location, rated.average);
        } else {
            RatingGrids::add(&mut grids.enemy_current, unit.location, rated.current);
        }
    }

    Ok(grids)
}
