//! Engine tuning configuration with documented constants
//!
//! All magic numbers used by the decision heuristics are collected here
//! with explanations of their purpose and how they interact.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::Result;

/// Tuning knobs for the strategic decision engine
///
/// These values have been tuned to produce competent play on standard
/// maps. Changing them shifts how cautious, expansionist, or defensive
/// AI players feel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    // === DEFENSE EVALUATION ===
    /// Desired total average rating garrisoning each owned city
    ///
    /// Cities below this rating show up in the deficit list; cities at or
    /// above it release their surplus units to the movement pipeline.
    pub desired_city_defense: i32,

    /// Desired total average rating garrisoning each owned tower
    pub desired_tower_defense: i32,

    /// Desired total average rating garrisoning each owned node
    pub desired_node_defense: i32,

    /// A location holding more than `overdefense_factor x desired` average
    /// rating is reported as overdefended, making it a pickup point for
    /// idle transports.
    pub overdefense_factor: i32,

    /// Upper bound on how many deficit entries one evaluation reports
    ///
    /// This is the host's lever for bounding AI think time: fewer
    /// candidates means fewer pathfinding queries downstream. The scan
    /// itself always covers the full map.
    pub max_defense_candidates: usize,

    // === UNIT RATING ===
    /// Multiplier applied to the potential rating of units with no attack
    /// capability, so settlers and engineers never look like an army.
    pub noncombatant_potential_discount: f64,

    /// Equipped items below this quality are assumed replaceable when
    /// computing a unit's potential rating.
    pub item_quality_threshold: i32,

    // === MOVEMENT STRATEGIES ===
    /// Radius (in cells) scanned for threatening enemies when deciding
    /// whether a stack should seek safety in numbers.
    pub join_threat_radius: i32,

    /// Radius (in cells) around owned cities within which corrupted land
    /// is worth a purifier's time.
    pub purify_search_radius: i32,

    // === COMBAT ===
    /// Minimum remaining casting resource for a unit to still be treated
    /// as a live caster, both when ordering our own units and when
    /// scoring enemy targets.
    pub caster_reserve_threshold: i32,

    // === DIPLOMACY ===
    /// Starting relation between any two AI players before modifiers
    pub diplomacy_base_relation: i32,

    /// Relation points per shared spell-book pick
    pub diplomacy_shared_book_weight: i32,

    /// Relation points lost per point of alignment distance
    pub diplomacy_alignment_weight: i32,

    /// Relations are clamped to [-clamp, +clamp]
    pub diplomacy_relation_clamp: i32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            desired_city_defense: 20,
            desired_tower_defense: 12,
            desired_node_defense: 10,
            overdefense_factor: 2,
            max_defense_candidates: 100,
            noncombatant_potential_discount: 0.1,
            item_quality_threshold: 2,
            join_threat_radius: 4,
            purify_search_radius: 3,
            caster_reserve_threshold: 10,
            diplomacy_base_relation: 0,
            diplomacy_shared_book_weight: 8,
            diplomacy_alignment_weight: 2,
            diplomacy_relation_clamp: 90,
        }
    }
}

impl AiConfig {
    /// Load a config from a TOML file; missing keys fall back to defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Desired defense rating for a strategic site kind
    pub fn desired_defense(&self, kind: crate::world::snapshot::SiteKind) -> i32 {
        use crate::world::snapshot::SiteKind;
        match kind {
            SiteKind::City => self.desired_city_defense,
            SiteKind::Tower => self.desired_tower_defense,
            SiteKind::Node => self.desired_node_defense,
            // Lairs are never garrisoned by us; they only matter as targets
            SiteKind::Lair => 0,
        }
    }
}
