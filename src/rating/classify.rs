//! Behavioral unit categories

use serde::{Deserialize, Serialize};

use super::profile::Capabilities;

/// What role a unit plays for the strategic AI
///
/// Exactly one category per unit, picked by fixed precedence: the rarer
/// utility roles win over the common case, so a combat-capable engineer is
/// still a road-builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    Founder,
    RoadBuilder,
    NodeMelder,
    Purifier,
    Transport,
    Combat,
}

impl UnitCategory {
    /// Whether units of this category add to attack/defense totals
    ///
    /// Pure utility units never contribute strength, but transports and
    /// purifiers fight when pressed.
    pub fn counts_for_strength(&self) -> bool {
        matches!(self, Self::Combat | Self::Transport | Self::Purifier)
    }
}

/// Assign a category from a unit's capability set
pub fn classify(caps: &Capabilities) -> UnitCategory {
    if caps.found_outpost {
        UnitCategory::Founder
    } else if caps.build_road {
        UnitCategory::RoadBuilder
    } else if caps.meld_node {
        UnitCategory::NodeMelder
    } else if caps.purify {
        UnitCategory::Purifier
    } else if caps.transport_capacity > 0 {
        UnitCategory::Transport
    } else {
        UnitCategory::Combat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_precedence() {
        let mut caps = Capabilities::default();
        caps.melee = true;
        assert_eq!(classify(&caps), UnitCategory::Combat);

        caps.transport_capacity = 4;
        assert_eq!(classify(&caps), UnitCategory::Transport);

        caps.purify = true;
        assert_eq!(classify(&caps), UnitCategory::Purifier);

        caps.meld_node = true;
        assert_eq!(classify(&caps), UnitCategory::NodeMelder);

        caps.build_road = true;
        assert_eq!(classify(&caps), UnitCategory::RoadBuilder);

        caps.found_outpost = true;
        assert_eq!(classify(&caps), UnitCategory::Founder);
    }

    #[test]
    fn test_strength_categories() {
        assert!(UnitCategory::Combat.counts_for_strength());
        assert!(UnitCategory::Transport.counts_for_strength());
        assert!(UnitCategory::Purifier.counts_for_strength());
        assert!(!UnitCategory::Founder.counts_for_strength());
        assert!(!UnitCategory::RoadBuilder.counts_for_strength());
        assert!(!UnitCategory::NodeMelder.counts_for_strength());
    }
}
