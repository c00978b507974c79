use thiserror::Error;

use crate::core::types::{ItemId, PlayerId, RealmId, SkillId, SpellId, UnitDefId, UnitId};

/// Errors surfaced by the decision engine
///
/// A referenced identifier missing from the ruleset is a configuration
/// defect and always fails the current operation; it is never defaulted.
/// "Nothing to do" results are not errors anywhere in this crate.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("Skill not found: {0:?}")]
    SkillNotFound(SkillId),

    #[error("Unit kind not found: {0:?}")]
    UnitDefNotFound(UnitDefId),

    #[error("Spell not found: {0:?}")]
    SpellNotFound(SpellId),

    #[error("Item not found: {0:?}")]
    ItemNotFound(ItemId),

    #[error("Realm not found: {0:?}")]
    RealmNotFound(RealmId),

    #[error("Player not found: {0:?}")]
    PlayerNotFound(PlayerId),

    #[error("Unit not found: {0:?}")]
    UnitNotFound(UnitId),

    #[error("Invalid decision: {0}")]
    InvalidDecision(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AiError>;
