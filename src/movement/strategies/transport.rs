//! Transport and embarkation strategies

use rand_chacha::ChaCha8Rng;

use crate::movement::context::StrategyContext;
use crate::movement::decision::MovementDecision;
use crate::rating::classify::UnitCategory;

/// Board a transport when nothing urgent is reachable on foot
///
/// Applies only when every under-defended location is unreachable for
/// this stack, which is what being stranded on the wrong landmass looks
/// like from the cost grid.
pub fn board_transport(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if ctx.stack.category == UnitCategory::Transport {
        return None;
    }
    if ctx.analysis.deficits.is_empty() {
        return None;
    }
    let any_reachable = ctx
        .analysis
        .deficits
        .iter()
        .any(|d| ctx.costs.is_reachable(d.location));
    if any_reachable {
        return None;
    }

    let cells = ctx.spare_transport_cells();
    if cells.contains(&ctx.at()) {
        // Already alongside one; embarkation happens where we stand
        return Some(MovementDecision::Stay);
    }
    ctx.closest(cells.iter().copied(), rng)
        .map(MovementDecision::MoveTo)
}

/// Deliver embarked passengers toward where defense is needed
pub fn carry_cargo(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if ctx.stack.category != UnitCategory::Transport || ctx.cargo_count() == 0 {
        return None;
    }
    let deficits = ctx.analysis.deficits.iter().map(|d| d.location);
    if let Some(dest) = ctx.closest(deficits, rng) {
        return Some(MovementDecision::MoveTo(dest));
    }
    // Nowhere needs troops: unload at home instead
    let capital = ctx.wizard().capital?;
    if capital != ctx.at() && ctx.costs.is_reachable(capital) {
        return Some(MovementDecision::MoveTo(capital));
    }
    None
}

/// Pick up surplus defenders from an overdefended garrison
pub fn load_at_overdefended(
    ctx: &StrategyContext,
    rng: &mut ChaCha8Rng,
) -> Option<MovementDecision> {
    if ctx.stack.category != UnitCategory::Transport || ctx.cargo_count() > 0 {
        return None;
    }
    if ctx.transport_capacity() == 0 {
        return None;
    }
    if ctx.analysis.overdefended.contains(&ctx.at()) {
        return Some(MovementDecision::Stay);
    }
    ctx.closest(ctx.analysis.overdefended.iter().copied(), rng)
        .map(MovementDecision::MoveTo)
}

/// Idle transports drift back toward the capital's plane
pub fn transport_home(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if ctx.stack.category != UnitCategory::Transport {
        return None;
    }
    let capital = ctx.wizard().capital?;
    if ctx.at().plane == capital.plane {
        return None;
    }
    ctx.closest(std::iter::once(capital), rng)
        .map(MovementDecision::MoveTo)
}
