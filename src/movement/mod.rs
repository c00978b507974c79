//! Overland movement decisions
//!
//! One mobile stack at a time: a configured, ordered list of independent
//! movement codes proposes a decision, and the executor turns it into an
//! outcome against the authoritative world.

pub mod context;
pub mod decision;
pub mod distance;
pub mod executor;
pub mod strategies;

pub use context::{PlayerPlans, StrategyContext};
pub use decision::{MovementDecision, MovementOutcome, SpecialOrder};
pub use distance::AiMovementDistance;
pub use executor::{decide_and_execute, execute_decision};
pub use strategies::{decide_movement, MovementCode};
