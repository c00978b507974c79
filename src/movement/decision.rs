//! Movement decisions and their execution outcomes

use serde::{Deserialize, Serialize};

use crate::core::types::MapCoord;

/// A non-movement action a stack can take in place of relocating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialOrder {
    FoundCity,
    BuildRoad,
    MeldNode,
    Purify,
}

/// What one stack should do this turn
///
/// At most one of destination or order exists by construction; `Stay`
/// carries neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementDecision {
    Stay,
    MoveTo(MapCoord),
    Special(SpecialOrder),
}

/// Result of carrying a decision out against the world
///
/// A closed, single-step state machine: decide, attempt, outcome. Nothing
/// here persists between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementOutcome {
    NoMovementLeft,
    NoDestinationChosen,
    NoRouteFound,
    AlreadyAtDestination,
    Moved,
    MovedAndStartedCombat,
    SpecialOrderExecuted,
    SpecialOrderRejected,
    MalformedDecision,
}
