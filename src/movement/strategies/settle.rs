//! Utility-unit strategies: founding, building, purifying, melding

use rand_chacha::ChaCha8Rng;

use crate::core::types::MapCoord;
use crate::movement::context::StrategyContext;
use crate::movement::decision::{MovementDecision, SpecialOrder};
use crate::rating::classify::UnitCategory;
use crate::world::snapshot::SiteKind;

/// Act at a work site if standing on one, else travel to the closest
fn work_at(
    ctx: &StrategyContext,
    rng: &mut ChaCha8Rng,
    order: SpecialOrder,
    sites: impl IntoIterator<Item = MapCoord>,
) -> Option<MovementDecision> {
    let sites: Vec<MapCoord> = sites.into_iter().collect();
    if sites.is_empty() {
        return None;
    }
    if sites.contains(&ctx.at()) {
        return Some(MovementDecision::Special(order));
    }
    ctx.closest(sites, rng).map(MovementDecision::MoveTo)
}

/// Found a new city at a planned site
pub fn found_city(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if ctx.stack.category != UnitCategory::Founder {
        return None;
    }
    work_at(
        ctx,
        rng,
        SpecialOrder::FoundCity,
        ctx.plans.city_sites.iter().copied(),
    )
}

/// Pave the next planned road cell
pub fn build_road(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if ctx.stack.category != UnitCategory::RoadBuilder {
        return None;
    }
    work_at(
        ctx,
        rng,
        SpecialOrder::BuildRoad,
        ctx.plans.road_cells.iter().copied(),
    )
}

/// Cleanse corrupted land near our cities
pub fn purify(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if ctx.stack.category != UnitCategory::Purifier {
        return None;
    }
    let radius = ctx.config.purify_search_radius;
    let cities: Vec<MapCoord> = ctx
        .world
        .cities_of(ctx.player)
        .map(|c| c.location)
        .collect();
    if cities.is_empty() {
        return None;
    }

    let tiles = &ctx.world.tiles;
    let corrupted = tiles.coords().filter(|&coord| {
        let Some(tile) = tiles.get(coord) else {
            return false;
        };
        tile.known
            && tile.corrupted
            && cities
                .iter()
                .any(|c| c.grid_distance(&coord).map_or(false, |d| d <= radius))
    });
    work_at(ctx, rng, SpecialOrder::Purify, corrupted)
}

/// Claim an unguarded node
pub fn meld_node(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if ctx.stack.category != UnitCategory::NodeMelder {
        return None;
    }
    let tiles = &ctx.world.tiles;
    let nodes = tiles.coords().filter(|&coord| {
        let Some(tile) = tiles.get(coord) else {
            return false;
        };
        let Some(site) = tile.site else {
            return false;
        };
        site.kind == SiteKind::Node
            && site.owner != Some(ctx.player)
            && ctx.grids.enemy_current.get(coord).copied().unwrap_or(0) == 0
    });
    work_at(ctx, rng, SpecialOrder::MeldNode, nodes)
}
