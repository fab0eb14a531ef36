//! Waxing and waning halves of the synodic cycle.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::MathError;

/// Half of the lunar cycle: growing (new -> full) or shrinking (full -> new).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Waxing,
    Waning,
}

/// Both phases in cycle order.
pub const ALL_PHASES: [Phase; 2] = [Phase::Waxing, Phase::Waning];

impl Phase {
    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Waxing => "waxing",
            Self::Waning => "waning",
        }
    }

    /// 0-based index (Waxing=0, Waning=1).
    pub const fn index(self) -> u8 {
        match self {
            Self::Waxing => 0,
            Self::Waning => 1,
        }
    }

    /// The other half of the cycle.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Waxing => Self::Waning,
            Self::Waning => Self::Waxing,
        }
    }

    pub const fn is_waxing(self) -> bool {
        matches!(self, Self::Waxing)
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "waxing" => Ok(Self::Waxing),
            "waning" => Ok(Self::Waning),
            _ => Err(MathError::UnknownPhase(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, p) in ALL_PHASES.iter().enumerate() {
            assert_eq!(p.index() as usize, i);
        }
    }

    #[test]
    fn opposite_is_involution() {
        for p in ALL_PHASES {
            assert_ne!(p.opposite(), p);
            assert_eq!(p.opposite().opposite(), p);
        }
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("Waxing".parse::<Phase>(), Ok(Phase::Waxing));
        assert_eq!(" WANING ".parse::<Phase>(), Ok(Phase::Waning));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "full".parse::<Phase>(),
            Err(MathError::UnknownPhase(_))
        ));
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Phase::Waning.to_string(), "waning");
    }
}
