//! Named milestones of the lunar cycle.
//!
//! Each phase has five milestones keyed by day thresholds (<=1, <=6, <=9,
//! <=14, else). The waning names mirror the waxing ones.

use crate::phase::Phase;

/// Milestone name for a lunar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseName {
    /// Short English label, e.g. "First Quarter".
    pub short: &'static str,
    /// Descriptive Thai label as shown on the dial.
    pub descriptive: &'static str,
}

const WAXING_NAMES: [PhaseName; 5] = [
    PhaseName {
        short: "New Crescent",
        descriptive: "จันทร์เสี้ยว",
    },
    PhaseName {
        short: "Waxing Crescent",
        descriptive: "จันทร์เสี้ยวข้างขึ้น",
    },
    PhaseName {
        short: "First Quarter",
        descriptive: "จันทร์ครึ่งดวงข้างขึ้น",
    },
    PhaseName {
        short: "Waxing Gibbous",
        descriptive: "จันทร์ค่อนดวงข้างขึ้น",
    },
    PhaseName {
        short: "Full Moon",
        descriptive: "จันทร์เพ็ญ (เต็มดวง)",
    },
];

const WANING_NAMES: [PhaseName; 5] = [
    PhaseName {
        short: "Full → Waning",
        descriptive: "จันทร์เพ็ญ → แรม",
    },
    PhaseName {
        short: "Waning Gibbous",
        descriptive: "จันทร์ค่อนดวงข้างแรม",
    },
    PhaseName {
        short: "Third Quarter",
        descriptive: "จันทร์ครึ่งดวงข้างแรม",
    },
    PhaseName {
        short: "Waning Crescent",
        descriptive: "จันทร์เสี้ยวข้างแรม",
    },
    PhaseName {
        short: "New Moon",
        descriptive: "จันทร์ดับ",
    },
];

fn milestone_index(day: u8) -> usize {
    match day {
        0..=1 => 0,
        2..=6 => 1,
        7..=9 => 2,
        10..=14 => 3,
        _ => 4,
    }
}

/// Milestone name for a phase and lunar day.
pub fn phase_name(phase: Phase, day: u8) -> PhaseName {
    let idx = milestone_index(day);
    match phase {
        Phase::Waxing => WAXING_NAMES[idx],
        Phase::Waning => WANING_NAMES[idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waxing_thresholds() {
        assert_eq!(phase_name(Phase::Waxing, 1).short, "New Crescent");
        assert_eq!(phase_name(Phase::Waxing, 2).short, "Waxing Crescent");
        assert_eq!(phase_name(Phase::Waxing, 6).short, "Waxing Crescent");
        assert_eq!(phase_name(Phase::Waxing, 7).short, "First Quarter");
        assert_eq!(phase_name(Phase::Waxing, 9).short, "First Quarter");
        assert_eq!(phase_name(Phase::Waxing, 14).short, "Waxing Gibbous");
        assert_eq!(phase_name(Phase::Waxing, 15).short, "Full Moon");
    }

    #[test]
    fn waning_thresholds() {
        assert_eq!(phase_name(Phase::Waning, 1).short, "Full → Waning");
        assert_eq!(phase_name(Phase::Waning, 8).short, "Third Quarter");
        assert_eq!(phase_name(Phase::Waning, 10).short, "Waning Crescent");
        assert_eq!(phase_name(Phase::Waning, 15).short, "New Moon");
    }

    #[test]
    fn descriptive_labels_nonempty() {
        for phase in crate::ALL_PHASES {
            for day in 1..=15 {
                assert!(!phase_name(phase, day).descriptive.is_empty());
            }
        }
    }
}
