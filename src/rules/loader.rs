//! Load a complete ruleset from a TOML document

use serde::Deserialize;
use std::path::Path;

use crate::core::error::Result;
use crate::rules::defs::{
    ExperienceLevelDef, ItemDef, RealmDef, SkillDef, SpellDef, UnitDef,
};
use crate::rules::ruleset::{KeySkills, Ruleset};

/// On-disk shape of a ruleset file
#[derive(Debug, Deserialize)]
struct RulesetFile {
    key_skills: KeySkills,
    #[serde(default)]
    skills: Vec<SkillDef>,
    #[serde(default)]
    units: Vec<UnitDef>,
    #[serde(default)]
    spells: Vec<SpellDef>,
    #[serde(default)]
    items: Vec<ItemDef>,
    #[serde(default)]
    realms: Vec<RealmDef>,
    #[serde(default)]
    experience_levels: Vec<ExperienceLevelDef>,
}

/// Parse a ruleset from TOML text
pub fn parse_ruleset(content: &str) -> Result<Ruleset> {
    let file: RulesetFile = toml::from_str(content)?;

    let mut rules = Ruleset::new(file.key_skills);
    for def in file.skills {
        rules.add_skill(def);
    }
    for def in file.units {
        rules.add_unit(def);
    }
    for def in file.spells {
        rules.add_spell(def);
    }
    for def in file.items {
        rules.add_item(def);
    }
    for def in file.realms {
        rules.add_realm(def);
    }
    rules.set_experience_levels(file.experience_levels);

    Ok(rules)
}

/// Load a ruleset from a TOML file
pub fn load_ruleset<P: AsRef<Path>>(path: P) -> Result<Ruleset> {
    let content = std::fs::read_to_string(path)?;
    parse_ruleset(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{SkillId, UnitDefId};

    const MINIMAL: &str = r#"
        [key_skills]
        melee_attack = 1
        ranged_attack = 2
        create_outpost = 3
        build_road = 4
        meld_node = 5
        purify = 6
        caster = 7

        [[skills]]
        id = 1
        name = "Melee Attack"
        rating = { kind = "additive", per_point = 2 }

        [[skills]]
        id = 8
        name = "First Strike"
        rating = { kind = "multiplicative", factor = 1.25 }

        [[units]]
        id = 10
        name = "Spearmen"
        skills = [{ skill = 1, value = 3 }]
        figures = 8
        hit_points_per_figure = 1
        production_cost = 15

        [[experience_levels]]
        required_experience = 0
        bonuses = []

        [[experience_levels]]
        required_experience = 20
        bonuses = [{ skill = 1, value = 1 }]
    "#;

    #[test]
    fn test_parse_minimal_ruleset() {
        let rules = parse_ruleset(MINIMAL).unwrap();
        assert_eq!(rules.skill(SkillId(1)).unwrap().name, "Melee Attack");
        assert_eq!(rules.unit(UnitDefId(10)).unwrap().figures, 8);
        assert_eq!(
            rules.max_experience_level().unwrap().required_experience,
            20
        );
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(parse_ruleset("not even toml = [").is_err());
    }
}
