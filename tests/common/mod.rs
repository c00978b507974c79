//! Shared fixtures for the integration suites

#![allow(dead_code)]

use runeward::core::error::Result;
use runeward::core::types::{MapCoord, PlayerId, SkillId, SpellId, UnitDefId, UnitId};
use runeward::movement::decision::SpecialOrder;
use runeward::movement::distance::AiMovementDistance;
use runeward::rules::defs::{RatingModifier, SkillDef, SkillValue, UnitDef};
use runeward::rules::ruleset::{KeySkills, Ruleset};
use runeward::world::interfaces::{
    MoveReport, MovementCostGrid, OrderReport, Pathfinder, ProductionOracle, WorldMutator,
};
use runeward::world::map::MapGrid;
use runeward::world::snapshot::{
    KnownCity, KnownTile, KnownWizard, KnownWorld, PlayerKind, Site, SiteKind, Unit,
};

pub const MELEE: SkillId = SkillId(1);
pub const RANGED: SkillId = SkillId(2);
pub const CREATE_OUTPOST: SkillId = SkillId(3);
pub const BUILD_ROAD: SkillId = SkillId(4);
pub const MELD_NODE: SkillId = SkillId(5);
pub const PURIFY: SkillId = SkillId(6);
pub const CASTER: SkillId = SkillId(7);

pub const SPEARMEN: UnitDefId = UnitDefId(10);
pub const BOWMEN: UnitDefId = UnitDefId(11);
pub const SETTLERS: UnitDefId = UnitDefId(12);
pub const ENGINEERS: UnitDefId = UnitDefId(13);
pub const SHAMAN: UnitDefId = UnitDefId(14);
pub const MAGIC_SPIRIT: UnitDefId = UnitDefId(15);
pub const GALLEY: UnitDefId = UnitDefId(16);
pub const CHAMPION: UnitDefId = UnitDefId(17);

pub fn key_skills() -> KeySkills {
    KeySkills {
        melee_attack: MELEE,
        ranged_attack: RANGED,
        create_outpost: CREATE_OUTPOST,
        build_road: BUILD_ROAD,
        meld_node: MELD_NODE,
        purify: PURIFY,
        caster: CASTER,
    }
}

fn simple_unit(id: UnitDefId, name: &str, skills: Vec<SkillValue>) -> UnitDef {
    UnitDef {
        id,
        name: name.to_string(),
        skills,
        figures: 4,
        hit_points_per_figure: 1,
        transport_capacity: 0,
        ranged_ammo: 0,
        production_cost: 40,
        upkeep_gold: 1,
        upkeep_mana: 0,
    }
}

/// A small ruleset with one unit kind per behavioral category
///
/// No experience ladder and no items, so a fresh unit's potential equals
/// its current rating and stack totals are easy to predict: spearmen 10,
/// bowmen 8, shaman 4, galley 6, champion 50.
pub fn standard_rules() -> Ruleset {
    let mut rules = Ruleset::new(key_skills());

    rules.add_skill(SkillDef {
        id: MELEE,
        name: "Melee Attack".to_string(),
        rating: Some(RatingModifier::Additive {
            per_point: 2,
            diminishing_after: None,
        }),
    });
    rules.add_skill(SkillDef {
        id: RANGED,
        name: "Ranged Attack".to_string(),
        rating: Some(RatingModifier::Additive {
            per_point: 2,
            diminishing_after: None,
        }),
    });
    for (id, name) in [
        (CREATE_OUTPOST, "Create Outpost"),
        (BUILD_ROAD, "Build Road"),
        (MELD_NODE, "Meld With Node"),
        (PURIFY, "Purify"),
        (CASTER, "Caster"),
    ] {
        rules.add_skill(SkillDef {
            id,
            name: name.to_string(),
            rating: None,
        });
    }

    rules.add_unit(simple_unit(
        SPEARMEN,
        "Spearmen",
        vec![SkillValue::new(MELEE, 5)],
    ));
    let mut bowmen = simple_unit(BOWMEN, "Bowmen", vec![SkillValue::new(RANGED, 4)]);
    bowmen.ranged_ammo = 8;
    rules.add_unit(bowmen);
    rules.add_unit(simple_unit(
        SETTLERS,
        "Settlers",
        vec![SkillValue::new(CREATE_OUTPOST, 1)],
    ));
    rules.add_unit(simple_unit(
        ENGINEERS,
        "Engineers",
        vec![SkillValue::new(BUILD_ROAD, 1)],
    ));
    rules.add_unit(simple_unit(
        SHAMAN,
        "Shaman",
        vec![SkillValue::new(PURIFY, 1), SkillValue::new(MELEE, 2)],
    ));
    rules.add_unit(simple_unit(
        MAGIC_SPIRIT,
        "Magic Spirit",
        vec![SkillValue::new(MELD_NODE, 1)],
    ));
    let mut galley = simple_unit(GALLEY, "Galley", vec![SkillValue::new(MELEE, 3)]);
    galley.transport_capacity = 2;
    rules.add_unit(galley);
    rules.add_unit(simple_unit(
        CHAMPION,
        "Champion",
        vec![SkillValue::new(MELEE, 25)],
    ));

    rules
}

/// A fully-explored land world
pub fn known_land_world(planes: usize, width: usize, height: usize) -> KnownWorld {
    let mut tiles: MapGrid<KnownTile> = MapGrid::new(planes, width, height, false);
    let coords: Vec<MapCoord> = tiles.coords().collect();
    for coord in coords {
        tiles.set(
            coord,
            KnownTile {
                known: true,
                ..Default::default()
            },
        );
    }
    KnownWorld::new(tiles)
}

pub fn add_wizard(world: &mut KnownWorld, player: PlayerId, kind: PlayerKind) {
    world.wizards.push(KnownWizard {
        player,
        kind,
        picks: vec![],
        capital: None,
        available_items: vec![],
        summon_spells: vec![],
    });
}

pub fn add_site(world: &mut KnownWorld, coord: MapCoord, kind: SiteKind, owner: Option<PlayerId>) {
    let mut tile = *world.tile(coord).expect("coord on map");
    tile.known = true;
    tile.site = Some(Site { kind, owner });
    world.tiles.set(coord, tile);
}

pub fn add_city(world: &mut KnownWorld, coord: MapCoord, owner: PlayerId) {
    add_site(world, coord, SiteKind::City, Some(owner));
    world.cities.push(KnownCity {
        location: coord,
        owner,
        constructable_units: vec![],
    });
}

pub fn spawn(world: &mut KnownWorld, owner: PlayerId, def: UnitDefId, at: MapCoord) -> UnitId {
    let id = UnitId::new();
    world.units.push(Unit {
        id,
        owner,
        location: at,
        unit_def: def,
        damage_taken: 0,
        experience: 0,
        equipment: vec![],
        enchant_skills: vec![],
        movement_left: 2,
        cargo: vec![],
    });
    id
}

/// Straight-line pathfinder over the known grid
///
/// Costs two half-moves per cell crossed; planes are disconnected unless
/// `cross_planes` is set, mimicking tower travel being available.
pub struct GridPathfinder {
    pub cross_planes: bool,
}

impl GridPathfinder {
    pub fn new() -> Self {
        Self {
            cross_planes: false,
        }
    }

    fn distance(&self, from: MapCoord, to: MapCoord) -> Option<AiMovementDistance> {
        match from.grid_distance(&to) {
            Some(d) => Some(AiMovementDistance::new(2 * d as u32, d as u32)),
            None if self.cross_planes => {
                let d = ((from.x - to.x).abs()).max((from.y - to.y).abs()) as u32;
                Some(AiMovementDistance::new(2 * d + 20, d + 10))
            }
            None => None,
        }
    }
}

impl Pathfinder for GridPathfinder {
    fn cost_grid(
        &self,
        world: &KnownWorld,
        _units: &[UnitId],
        from: MapCoord,
    ) -> MovementCostGrid {
        let tiles = &world.tiles;
        let mut grid =
            MovementCostGrid::new(tiles.planes(), tiles.width(), tiles.height(), tiles.wrap_x());
        for coord in tiles.coords() {
            if let Some(cost) = self.distance(from, coord) {
                grid.set_cost(coord, cost);
            }
        }
        grid
    }

    fn route(
        &self,
        _world: &KnownWorld,
        _units: &[UnitId],
        from: MapCoord,
        to: MapCoord,
    ) -> Option<Vec<MapCoord>> {
        self.distance(from, to)?;
        // Step diagonally first, then straight; good enough for tests
        let mut path = vec![from];
        let mut cursor = MapCoord::new(to.plane, from.x, from.y);
        while cursor != to {
            cursor.x += (to.x - cursor.x).signum();
            cursor.y += (to.y - cursor.y).signum();
            path.push(cursor);
        }
        Some(path)
    }
}

/// Records the writes the engine performs, optionally simulating combat
/// triggers and order rejections
pub struct RecordingMutator {
    pub moves: Vec<(Vec<UnitId>, Vec<MapCoord>)>,
    pub orders: Vec<(UnitId, SpecialOrder)>,
    /// Destinations that start a combat when entered
    pub hostile_cells: Vec<MapCoord>,
    pub reject_orders: bool,
}

impl RecordingMutator {
    pub fn new() -> Self {
        Self {
            moves: Vec::new(),
            orders: Vec::new(),
            hostile_cells: Vec::new(),
            reject_orders: false,
        }
    }
}

impl WorldMutator for RecordingMutator {
    fn execute_move(&mut self, units: &[UnitId], path: &[MapCoord]) -> Result<MoveReport> {
        let destination = *path.last().expect("non-empty path");
        self.moves.push((units.to_vec(), path.to_vec()));
        Ok(MoveReport {
            combat_started: self.hostile_cells.contains(&destination),
        })
    }

    fn execute_special_order(&mut self, unit: UnitId, order: SpecialOrder) -> Result<OrderReport> {
        self.orders.push((unit, order));
        Ok(OrderReport {
            accepted: !self.reject_orders,
            reason: self.reject_orders.then(|| "test rejection".to_string()),
        })
    }
}

/// Everything is affordable
pub struct GenerousOracle;

impl ProductionOracle for GenerousOracle {
    fn can_sustain_unit(&self, _player: PlayerId, _unit: UnitDefId) -> bool {
        true
    }

    fn can_sustain_summon(&self, _player: PlayerId, _spell: SpellId) -> bool {
        true
    }
}
