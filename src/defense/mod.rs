//! Map-wide rated-strength grids and defense evaluation

pub mod evaluator;
pub mod grids;

pub use evaluator::{evaluate_defense, DefenseAnalysis, DefenseDeficit};
pub use grids::{accumulate_ratings, RatingGrids};
