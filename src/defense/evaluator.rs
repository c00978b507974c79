//! Defense evaluation
//!
//! Walks every cell on every plane, compares garrisoned strength against
//! what each strategic site deserves, and splits the player's units into
//! garrisons and spares.

use std::collections::BTreeSet;

use crate::core::config::AiConfig;
use crate::core::error::Result;
use crate::core::types::{MapCoord, PlayerId};
use crate::rating::stack::{stacks_at, RatedStack};
use crate::rules::ruleset::Ruleset;
use crate::world::snapshot::{KnownWorld, SiteKind};

use super::grids::RatingGrids;

/// An under-defended strategic location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefenseDeficit {
    pub location: MapCoord,
    /// Desired defense rating minus friendly average rating present
    pub deficit: i32,
}

/// The outcome of one defense evaluation pass
#[derive(Debug, Clone)]
pub struct DefenseAnalysis {
    /// Positive deficits, most urgent first; equal deficits ordered by
    /// lowest (plane, row, column)
    pub deficits: Vec<DefenseDeficit>,
    /// Stacks free to be given movement orders this turn
    pub mobile: Vec<RatedStack>,
    /// Garrisons holding well past their desired rating; transports may
    /// come here to pick up the surplus
    pub overdefended: Vec<MapCoord>,
}

/// Whether a cell is somewhere we would post a garrison
///
/// Sites we own qualify; so do unowned sites nobody is contesting, since
/// we could walk in uncontested. Enemy-held sites and lairs are attack
/// targets, not defense posts.
fn defense_candidate(
    world: &KnownWorld,
    grids: &RatingGrids,
    player: PlayerId,
    coord: MapCoord,
) -> Option<SiteKind> {
    let tile = world.tile(coord)?;
    let site = tile.site?;
    if site.kind == SiteKind::Lair {
        return None;
    }
    match site.owner {
        Some(owner) if owner == player => Some(site.kind),
        Some(_) => None,
        None => {
            let contested = grids.enemy_current.get(coord).copied().unwrap_or(0) > 0;
            if contested {
                None
            } else {
                Some(site.kind)
            }
        }
    }
}

/// Scan the whole known map for deficits, spares, and overdefense
pub fn evaluate_defense(
    world: &KnownWorld,
    grids: &RatingGrids,
    player: PlayerId,
    rules: &Ruleset,
    config: &AiConfig,
) -> Result<DefenseAnalysis> {
    let mut deficits = Vec::new();
    let mut overdefended = Vec::new();
    let mut garrison_posts: BTreeSet<MapCoord> = BTreeSet::new();

    for coord in world.tiles.coords() {
        let Some(kind) = defense_candidate(world, grids, player, coord) else {
            continue;
        };
        let desired = config.desired_defense(kind);
        let present = grids.friendly_average.get(coord).copied().unwrap_or(0);

        let deficit = desired - present;
        if deficit > 0 {
            deficits.push(DefenseDeficit {
                location: coord,
                deficit,
            });
            garrison_posts.insert(coord);
        } else if present > desired * config.overdefense_factor {
            overdefended.push(coord);
        }
    }

    // Most urgent first; the explicit coordinate key keeps equal deficits
    // in one deterministic order run after run.
    deficits.sort_by(|a, b| {
        b.deficit
            .cmp(&a.deficit)
            .then_with(|| a.location.cmp(&b.location))
    });
    deficits.truncate(config.max_defense_candidates);

    // Units anywhere except an under-defended post are spares.
    let mut locations: BTreeSet<MapCoord> = BTreeSet::new();
    for unit in world.units_of(player) {
        locations.insert(unit.location);
    }

    let mut mobile = Vec::new();
    for location in locations {
        if garrison_posts.contains(&location) {
            continue;
        }
        for stack in stacks_at(world, player, location, rules, config)? {
            if !stack.is_empty() {
                mobile.push(stack);
            }
        }
    }

    tracing::debug!(
        "defense evaluation: {} deficits, {} mobile stacks, {} overdefended posts",
        deficits.len(),
        mobile.len(),
        overdefended.len()
    );

    Ok(DefenseAnalysis {
        deficits,
        mobile,
        overdefended,
    })
}
