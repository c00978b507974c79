//! Garrison-related strategies

use rand_chacha::ChaCha8Rng;

use crate::movement::context::StrategyContext;
use crate::movement::decision::MovementDecision;
use crate::world::snapshot::SiteKind;

/// March to the most reachable under-defended location
pub fn reinforce(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if !ctx.stack.category.counts_for_strength() {
        return None;
    }
    let candidates = ctx
        .analysis
        .deficits
        .iter()
        .map(|d| d.location)
        .filter(|&loc| loc != ctx.at());
    ctx.closest(candidates, rng).map(MovementDecision::MoveTo)
}

/// Stay put rather than leave a garrison short
///
/// Applies when the stack sits on a site we own whose garrison meets its
/// desired rating only while this stack is part of it. If the construction
/// advisor already has an affordable replacement lined up here, the stack
/// is released anyway.
pub fn hold_defended(ctx: &StrategyContext, _rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if !ctx.stack.category.counts_for_strength() {
        return None;
    }
    let at = ctx.at();
    let site = ctx.world.tile(at).and_then(|t| t.site)?;
    if site.owner != Some(ctx.player) || site.kind == SiteKind::Lair {
        return None;
    }

    let desired = ctx.config.desired_defense(site.kind);
    let present = ctx.grids.friendly_average.get(at).copied().unwrap_or(0);
    let without_us = present - ctx.stack_average();
    let shortfall = desired - without_us;
    if shortfall <= 0 {
        return None;
    }

    let covered = ctx.reinforcements.iter().any(|option| {
        option.affordable
            && option.built_at() == Some(at)
            && option.average_rating >= shortfall
    });
    if covered {
        return None;
    }

    Some(MovementDecision::Stay)
}

/// Seek safety in numbers when outmatched locally
///
/// If enemies near this stack outweigh it, head for the closest friendly
/// stack of the same category and merge strength.
pub fn join_stack(ctx: &StrategyContext, rng: &mut ChaCha8Rng) -> Option<MovementDecision> {
    if !ctx.stack.category.counts_for_strength() {
        return None;
    }
    let threat = ctx
        .grids
        .enemy_strength_near(ctx.at(), ctx.config.join_threat_radius);
    if threat <= ctx.stack_average() {
        return None;
    }

    let candidates = ctx
        .analysis
        .mobile
        .iter()
        .filter(|s| s.category == ctx.stack.category && s.location != ctx.at())
        .map(|s| s.location);
    ctx.closest(candidates, rng).map(MovementDecision::MoveTo)
}
