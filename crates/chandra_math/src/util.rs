//! Angle normalization shared by the dial and disc geometry.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle difference to (-180, 180] degrees.
///
/// Used to unwrap pointer-angle deltas across the atan2 seam at ±180 deg.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut r = normalize_360(deg);
    if r > 180.0 {
        r -= 360.0;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_turns_land_on_zero() {
        for turns in [-3.0, -1.0, 0.0, 1.0, 2.0] {
            assert_eq!(normalize_360(turns * 360.0), 0.0, "turns {turns}");
        }
    }

    #[test]
    fn day_steps_stay_in_range() {
        for step in -30..=30 {
            let r = normalize_360(f64::from(step) * -24.0);
            assert!((0.0..360.0).contains(&r), "step {step} -> {r}");
        }
    }

    #[test]
    fn disc_rotations_wrap_forward() {
        assert!((normalize_360(-24.0) - 336.0).abs() < 1e-12);
        assert!((normalize_360(-336.0) - 24.0).abs() < 1e-12);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn pm180_keeps_small_deltas() {
        assert!((normalize_to_pm180(30.0) - 30.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-30.0) + 30.0).abs() < 1e-12);
    }

    #[test]
    fn pm180_unwraps_seam() {
        // 170 deg -> -170 deg is a 20 deg clockwise move, not -340.
        assert!((normalize_to_pm180(-170.0 - 170.0) - 20.0).abs() < 1e-12);
        assert!((normalize_to_pm180(170.0 + 170.0) + 20.0).abs() < 1e-12);
    }

    #[test]
    fn pm180_half_turn_is_positive() {
        assert!((normalize_to_pm180(180.0) - 180.0).abs() < 1e-12);
        assert!((normalize_to_pm180(-180.0) - 180.0).abs() < 1e-12);
    }
}
