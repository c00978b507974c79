//! The ordered movement-code pipeline
//!
//! Each code is an independent decision rule over the shared context.
//! The pipeline tries them in order and the first rule with an opinion
//! wins; a rule that does not apply simply returns `None`.

pub mod attack;
pub mod defend;
pub mod scout;
pub mod settle;
pub mod transport;

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::movement::context::StrategyContext;
use crate::movement::decision::MovementDecision;

/// One movement decision rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementCode {
    Reinforce,
    AttackStationary,
    AttackWandering,
    ScoutFrontier,
    ScoutAnywhere,
    JoinStack,
    BoardTransport,
    HoldDefended,
    FoundCity,
    BuildRoad,
    Purify,
    MeldNode,
    CarryCargo,
    LoadAtOverdefended,
    TransportHome,
}

impl MovementCode {
    /// The standard priority order tried for every mobile stack
    pub fn default_order() -> Vec<MovementCode> {
        use MovementCode::*;
        vec![
            Reinforce,
            AttackStationary,
            AttackWandering,
            ScoutFrontier,
            ScoutAnywhere,
            JoinStack,
            BoardTransport,
            HoldDefended,
            FoundCity,
            BuildRoad,
            Purify,
            MeldNode,
            CarryCargo,
            LoadAtOverdefended,
            TransportHome,
        ]
    }

    /// Run this one rule against the context
    pub fn decide(
        &self,
        ctx: &StrategyContext,
        rng: &mut ChaCha8Rng,
    ) -> Option<MovementDecision> {
        match self {
            Self::Reinforce => defend::reinforce(ctx, rng),
            Self::AttackStationary => attack::attack_stationary(ctx, rng),
            Self::AttackWandering => attack::attack_wandering(ctx, rng),
            Self::ScoutFrontier => scout::scout_frontier(ctx, rng),
            Self::ScoutAnywhere => scout::scout_anywhere(ctx, rng),
            Self::JoinStack => defend::join_stack(ctx, rng),
            Self::BoardTransport => transport::board_transport(ctx, rng),
            Self::HoldDefended => defend::hold_defended(ctx, rng),
            Self::FoundCity => settle::found_city(ctx, rng),
            Self::BuildRoad => settle::build_road(ctx, rng),
            Self::Purify => settle::purify(ctx, rng),
            Self::MeldNode => settle::meld_node(ctx, rng),
            Self::CarryCargo => transport::carry_cargo(ctx, rng),
            Self::LoadAtOverdefended => transport::load_at_overdefended(ctx, rng),
            Self::TransportHome => transport::transport_home(ctx, rng),
        }
    }
}

/// Try each code in order; the first decision wins
pub fn decide_movement(
    codes: &[MovementCode],
    ctx: &StrategyContext,
    rng: &mut ChaCha8Rng,
) -> Option<(MovementCode, MovementDecision)> {
    for &code in codes {
        if let Some(decision) = code.decide(ctx, rng) {
            tracing::debug!(
                "stack at {:?} ({:?}): {:?} -> {:?}",
                ctx.at(),
                ctx.stack.category,
                code,
                decision
            );
            return Some((code, decision));
        }
    }
    tracing::trace!(
        "stack at {:?} ({:?}): no movement code applied",
        ctx.at(),
        ctx.stack.category
    );
    None
}
