//! Runeward - strategic decision engine for a turn-based fantasy 4X game
//!
//! Decides, for each AI-controlled player, how strong every unit and
//! stack is, which locations are under-defended, where idle units should
//! go, and how units act inside a tactical combat. The authoritative
//! rules database, pathfinding, and world mutation live in the host and
//! are reached through the traits in [`world::interfaces`].

pub mod combat;
pub mod construction;
pub mod core;
pub mod defense;
pub mod diplomacy;
pub mod movement;
pub mod rating;
pub mod rules;
pub mod turn;
pub mod world;
