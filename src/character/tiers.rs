use serde::{Deserialize, Serialize};

/// The eight-step cultivation ladder.
///
/// Ordering follows declaration order, so `Tier::QiRefining < Tier::Foundation`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Tier {
    #[default]
    QiRefining,
    Foundation,
    GoldenCore,
    NascentSoul,
    SoulTransformation,
    VoidMerging,
    Mahayana,
    Tribulation,
}

impl Tier {
    pub fn all() -> [Tier; 8] {
        [
            Tier::QiRefining,
            Tier::Foundation,
            Tier::GoldenCore,
            Tier::NascentSoul,
            Tier::SoulTransformation,
            Tier::VoidMerging,
            Tier::Mahayana,
            Tier::Tribulation,
        ]
    }

    /// Gets the display name for a tier
    pub fn name(&self) -> &'static str {
        match self {
            Tier::QiRefining => "Qi Refining",
            Tier::Foundation => "Foundation Establishment",
            Tier::GoldenCore => "Golden Core",
            Tier::NascentSoul => "Nascent Soul",
            Tier::SoulTransformation => "Soul Transformation",
            Tier::VoidMerging => "Void Merging",
            Tier::Mahayana => "Mahayana",
            Tier::Tribulation => "Tribulation",
        }
    }

    /// Tier level from 1 to 8. Multiplies power gain and combat power.
    pub fn level(&self) -> u32 {
        match self {
            Tier::QiRefining => 1,
            Tier::Foundation => 2,
            Tier::GoldenCore => 3,
            Tier::NascentSoul => 4,
            Tier::SoulTransformation => 5,
            Tier::VoidMerging => 6,
            Tier::Mahayana => 7,
            Tier::Tribulation => 8,
        }
    }

    /// Accumulated power required to break through into this tier.
    pub fn threshold(&self) -> u64 {
        match self {
            Tier::QiRefining => 0,
            Tier::Foundation => 1_000,
            Tier::GoldenCore => 5_000,
            Tier::NascentSoul => 20_000,
            Tier::SoulTransformation => 80_000,
            Tier::VoidMerging => 300_000,
            Tier::Mahayana => 1_000_000,
            Tier::Tribulation => 5_000_000,
        }
    }

    /// The tier above this one, or `None` at Tribulation.
    pub fn next(&self) -> Option<Tier> {
        match self {
            Tier::QiRefining => Some(Tier::Foundation),
            Tier::Foundation => Some(Tier::GoldenCore),
            Tier::GoldenCore => Some(Tier::NascentSoul),
            Tier::NascentSoul => Some(Tier::SoulTransformation),
            Tier::SoulTransformation => Some(Tier::VoidMerging),
            Tier::VoidMerging => Some(Tier::Mahayana),
            Tier::Mahayana => Some(Tier::Tribulation),
            Tier::Tribulation => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_levels_are_one_through_eight() {
        for (i, tier) in Tier::all().iter().enumerate() {
            assert_eq!(tier.level(), i as u32 + 1);
        }
    }

    #[test]
    fn test_thresholds_strictly_increase() {
        let all = Tier::all();
        for pair in all.windows(2) {
            assert!(pair[0].threshold() < pair[1].threshold());
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Tier::QiRefining.threshold(), 0);
        assert_eq!(Tier::Foundation.threshold(), 1_000);
        assert_eq!(Tier::Tribulation.threshold(), 5_000_000);
    }

    #[test]
    fn test_next_chain_reaches_terminal() {
        let mut tier = Tier::QiRefining;
        let mut steps = 0;
        while let Some(next) = tier.next() {
            assert_eq!(next.level(), tier.level() + 1);
            tier = next;
            steps += 1;
        }
        assert_eq!(steps, 7);
        assert_eq!(tier, Tier::Tribulation);
        assert!(tier.is_terminal());
        assert!(!Tier::Mahayana.is_terminal());
    }

    #[test]
    fn test_default_is_lowest() {
        assert_eq!(Tier::default(), Tier::QiRefining);
        assert_eq!(Tier::QiRefining.name(), "Qi Refining");
    }
}
