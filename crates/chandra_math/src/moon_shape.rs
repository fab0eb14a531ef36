//! Geometry of a single moon icon: which part of the disc is lit.
//!
//! The terminator is drawn as a half-ellipse with horizontal radius
//! `|2i - 1| * r`. Near 0 and 1 that ellipse degenerates, so fractions at
//! or below [`DARK_THRESHOLD`] draw fully dark and at or above
//! [`LIT_THRESHOLD`] fully lit.

use crate::phase::Phase;

/// Illumination at or below which the icon is drawn as a new moon.
pub const DARK_THRESHOLD: f64 = 0.02;

/// Illumination at or above which the icon is drawn as a full moon.
pub const LIT_THRESHOLD: f64 = 0.98;

/// Limb carrying the bright edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LitSide {
    /// Right-hand limb (waxing).
    East,
    /// Left-hand limb (waning).
    West,
}

/// How to draw a moon icon of a given radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoonShape {
    /// No lit area.
    Dark,
    /// Fully lit disc.
    Lit,
    /// Lit limb bounded by an elliptical terminator.
    Partial {
        /// Horizontal semi-axis of the terminator ellipse.
        terminator_rx: f64,
        /// Less than half lit: the terminator bulges toward the lit limb.
        crescent: bool,
        lit_side: LitSide,
    },
}

/// Shape of a moon icon for an illumination fraction.
pub fn moon_shape(illumination: f64, phase: Phase, radius: f64) -> MoonShape {
    if illumination <= DARK_THRESHOLD {
        return MoonShape::Dark;
    }
    if illumination >= LIT_THRESHOLD {
        return MoonShape::Lit;
    }
    let lit_side = match phase {
        Phase::Waxing => LitSide::East,
        Phase::Waning => LitSide::West,
    };
    MoonShape::Partial {
        terminator_rx: (2.0 * illumination - 1.0).abs() * radius,
        crescent: illumination < 0.5,
        lit_side,
    }
}
