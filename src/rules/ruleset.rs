//! Ruleset lookup store
//!
//! Owns the static definition tables and the well-known capability skill
//! ids. Every lookup is fallible: an unknown identifier means the game
//! database and this session disagree, which is fatal to the operation
//! that hit it.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{AiError, Result};
use crate::core::types::{ItemId, RealmId, SkillId, SpellId, UnitDefId};
use crate::rules::defs::{
    ExperienceLevelDef, ItemDef, RealmDef, SkillDef, SpellDef, UnitDef,
};

/// The capability skills the classifier and rating calculator key on
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KeySkills {
    pub melee_attack: SkillId,
    pub ranged_attack: SkillId,
    pub create_outpost: SkillId,
    pub build_road: SkillId,
    pub meld_node: SkillId,
    pub purify: SkillId,
    pub caster: SkillId,
}

/// In-memory rules database
#[derive(Debug, Clone)]
pub struct Ruleset {
    skills: AHashMap<SkillId, SkillDef>,
    units: AHashMap<UnitDefId, UnitDef>,
    spells: AHashMap<SpellId, SpellDef>,
    items: AHashMap<ItemId, ItemDef>,
    realms: AHashMap<RealmId, RealmDef>,
    /// Ordered by required experience, lowest first
    experience_levels: Vec<ExperienceLevelDef>,
    key_skills: KeySkills,
}

impl Ruleset {
    pub fn new(key_skills: KeySkills) -> Self {
        Self {
            skills: AHashMap::new(),
            units: AHashMap::new(),
            spells: AHashMap::new(),
            items: AHashMap::new(),
            realms: AHashMap::new(),
            experience_levels: Vec::new(),
            key_skills,
        }
    }

    pub fn key_skills(&self) -> &KeySkills {
        &self.key_skills
    }

    pub fn add_skill(&mut self, def: SkillDef) {
        self.skills.insert(def.id, def);
    }

    pub fn add_unit(&mut self, def: UnitDef) {
        self.units.insert(def.id, def);
    }

    pub fn add_spell(&mut self, def: SpellDef) {
        self.spells.insert(def.id, def);
    }

    pub fn add_item(&mut self, def: ItemDef) {
        self.items.insert(def.id, def);
    }

    pub fn add_realm(&mut self, def: RealmDef) {
        self.realms.insert(def.id, def);
    }

    /// Install the experience ladder, sorting it by required experience
    pub fn set_experience_levels(&mut self, mut levels: Vec<ExperienceLevelDef>) {
        levels.sort_by_key(|l| l.required_experience);
        self.experience_levels = levels;
    }

    pub fn skill(&self, id: SkillId) -> Result<&SkillDef> {
        self.skills.get(&id).ok_or(AiError::SkillNotFound(id))
    }

    pub fn unit(&self, id: UnitDefId) -> Result<&UnitDef> {
        self.units.get(&id).ok_or(AiError::UnitDefNotFound(id))
    }

    pub fn spell(&self, id: SpellId) -> Result<&SpellDef> {
        self.spells.get(&id).ok_or(AiError::SpellNotFound(id))
    }

    pub fn item(&self, id: ItemId) -> Result<&ItemDef> {
        self.items.get(&id).ok_or(AiError::ItemNotFound(id))
    }

    pub fn realm(&self, id: RealmId) -> Result<&RealmDef> {
        self.realms.get(&id).ok_or(AiError::RealmNotFound(id))
    }

    pub fn spells(&self) -> impl Iterator<Item = &SpellDef> {
        self.spells.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemDef> {
        self.items.values()
    }

    /// Highest experience rung reached with `points` experience
    pub fn experience_level_for(&self, points: i32) -> Option<&ExperienceLevelDef> {
        self.experience_levels
            .iter()
            .rev()
            .find(|l| points >= l.required_experience)
    }

    /// Top of the experience ladder, used by potential-rating evaluation
    pub fn max_experience_level(&self) -> Option<&ExperienceLevelDef> {
        self.experience_levels.last()
    }
}
