//! Focus pet growth.
//!
//! XP is the total number of logged study minutes. The pet's stage is the
//! highest threshold in [`PET_STAGES`] that the XP has reached.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PetStage {
    pub threshold: u64,
    pub emoji: &'static str,
    pub name: &'static str,
}

/// Growth stages, sorted ascending by threshold.
pub const PET_STAGES: [PetStage; 5] = [
    PetStage {
        threshold: 0,
        emoji: "🥚",
        name: "Egg",
    },
    PetStage {
        threshold: 25,
        emoji: "🐣",
        name: "Hatchling",
    },
    PetStage {
        threshold: 50,
        emoji: "🐥",
        name: "Chick",
    },
    PetStage {
        threshold: 100,
        emoji: "🦉",
        name: "Fledgling Owl",
    },
    PetStage {
        threshold: 200,
        emoji: "🎓🦉",
        name: "Scholar Owl",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetStatus {
    pub emoji: String,
    pub name: String,
    pub xp: u64,
    pub stage_threshold: u64,
    /// 0.0 .. 1.0 toward the next stage; 1.0 once the last stage is reached.
    pub progress: f64,
    /// `None` once the last stage is reached.
    pub next_threshold: Option<u64>,
}

impl PetStatus {
    pub fn compute(xp: u64) -> Self {
        let idx = PET_STAGES
            .iter()
            .rposition(|stage| stage.threshold <= xp)
            .unwrap_or(0);
        let current = PET_STAGES[idx];
        let next = PET_STAGES.get(idx + 1).map(|stage| stage.threshold);
        let progress = match next {
            Some(next) => (xp - current.threshold) as f64 / (next - current.threshold) as f64,
            None => 1.0,
        };
        Self {
            emoji: current.emoji.to_string(),
            name: current.name.to_string(),
            xp,
            stage_threshold: current.threshold,
            progress,
            next_threshold: next,
        }
    }

    pub fn is_max(&self) -> bool {
        self.next_threshold.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn stage_table_is_sorted() {
        assert!(PET_STAGES.windows(2).all(|w| w[0].threshold < w[1].threshold));
        assert_eq!(PET_STAGES[0].threshold, 0);
    }

    #[test]
    fn zero_xp_is_an_egg() {
        let status = PetStatus::compute(0);
        assert_eq!(status.name, "Egg");
        assert_eq!(status.emoji, "🥚");
        assert_eq!(status.progress, 0.0);
        assert_eq!(status.next_threshold, Some(25));
    }

    #[test]
    fn just_below_first_threshold() {
        let status = PetStatus::compute(24);
        assert_eq!(status.name, "Egg");
        assert!((status.progress - 24.0 / 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn exact_threshold_enters_stage() {
        let status = PetStatus::compute(25);
        assert_eq!(status.name, "Hatchling");
        assert_eq!(status.progress, 0.0);
        assert_eq!(status.next_threshold, Some(50));

        let status = PetStatus::compute(150);
        assert_eq!(status.name, "Fledgling Owl");
        assert!((status.progress - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn max_stage() {
        for xp in [200, 201, 10_000] {
            let status = PetStatus::compute(xp);
            assert_eq!(status.name, "Scholar Owl");
            assert!(status.is_max());
            assert_eq!(status.progress, 1.0);
        }
    }

    proptest! {
        #[test]
        fn stage_is_highest_reached_threshold(xp in 0u64..1_000) {
            let status = PetStatus::compute(xp);
            prop_assert!(status.stage_threshold <= xp);
            let expected_next = PET_STAGES
                .iter()
                .map(|s| s.threshold)
                .find(|t| *t > status.stage_threshold);
            prop_assert_eq!(status.next_threshold, expected_next);
            if let Some(next) = status.next_threshold {
                prop_assert!(xp < next);
                prop_assert!((0.0..1.0).contains(&status.progress));
            }
        }
    }
}
