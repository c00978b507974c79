//! Unit rating: profiles, the calculator, categories, and rated stacks

pub mod calculator;
pub mod classify;
pub mod profile;
pub mod stack;

pub use calculator::{additive_contribution, rate_profile, rate_unit, RatingMode, UnitRating};
pub use classify::{classify, UnitCategory};
pub use profile::{resolve_current, resolve_potential, Capabilities, UnitProfile};
pub use stack::{rate_and_classify, stacks_at, RatedStack, RatedUnit};
