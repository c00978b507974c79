//! World snapshot types, the map grid, and collaborator interfaces

pub mod interfaces;
pub mod map;
pub mod snapshot;

pub use interfaces::{
    MoveReport, MovementCostGrid, OrderReport, Pathfinder, ProductionOracle, WorldMutator,
};
pub use map::MapGrid;
pub use snapshot::{
    KnownCity, KnownTerrain, KnownTile, KnownWizard, KnownWorld, PlayerKind, Site, SiteKind,
    Unit,
};
