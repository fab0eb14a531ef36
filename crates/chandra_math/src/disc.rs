//! Ring of 15 moon icons: rotation for a day, snap back to a day, layout.
//!
//! Icon `i` (day `i + 1`) sits at `i * 24 - 90` degrees in the disc frame,
//! so with zero rotation day 1 is under the fixed marker at the top. The
//! disc turns by `-(day - 1) * 24` degrees to bring `day` under the marker.

use crate::lunar_day::DAYS_PER_PHASE;
use crate::util::normalize_360;

/// Degrees of disc rotation per lunar day: 360 / 15.
pub const DEG_PER_DAY: f64 = 360.0 / DAYS_PER_PHASE as f64;

/// Radius of the icon ring in scene units.
pub const RING_RADIUS: f64 = 310.0;

/// Gap from an icon's center to its day-number label.
const LABEL_OFFSET: f64 = 40.0;

/// Canonical disc rotation (degrees) that puts `day` under the marker.
pub fn disc_rotation_for_day(day: u8) -> f64 {
    -(f64::from(day) - 1.0) * DEG_PER_DAY
}

/// Nearest 24-degree step index (0..15) for a disc rotation.
pub fn snap_index(rotation_deg: f64) -> u8 {
    let normalized = normalize_360(rotation_deg);
    let steps = (normalized / DEG_PER_DAY).round() as u32;
    (steps % u32::from(DAYS_PER_PHASE)) as u8
}

/// Lunar day (1-15) brought under the marker by a disc rotation.
///
/// Rotation grows clockwise while day numbers grow counter-clockwise
/// around the ring, so step index `k` maps to day `((15 - k) mod 15) + 1`.
pub fn day_from_rotation(rotation_deg: f64) -> u8 {
    let index = snap_index(rotation_deg);
    let day = ((DAYS_PER_PHASE - index) % DAYS_PER_PHASE) + 1;
    day.clamp(1, DAYS_PER_PHASE)
}

/// One icon slot on the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSlot {
    /// Lunar day shown in this slot (1-15).
    pub day: u8,
    /// Slot angle in the disc frame, degrees (0 = east, -90 = top).
    pub angle_deg: f64,
    /// Icon center in the disc frame.
    pub x: f64,
    pub y: f64,
    /// Day-number label position in the disc frame.
    pub label_x: f64,
    pub label_y: f64,
    /// Slot angle on screen after the disc rotation, in [0, 360).
    pub screen_angle_deg: f64,
    /// Rotation applied to the icon so it stays upright on screen.
    pub counter_rotation_deg: f64,
}

/// Layout of all 15 slots for a disc rotation and ring radius.
pub fn ring_layout(rotation_deg: f64, radius: f64) -> Vec<RingSlot> {
    (0..DAYS_PER_PHASE)
        .map(|i| {
            let angle_deg = f64::from(i) * DEG_PER_DAY - 90.0;
            let rad = angle_deg.to_radians();
            let label_r = radius + LABEL_OFFSET;
            RingSlot {
                day: i + 1,
                angle_deg,
                x: rad.cos() * radius,
                y: rad.sin() * radius,
                label_x: rad.cos() * label_r,
                label_y: rad.sin() * label_r,
                screen_angle_deg: normalize_360(angle_deg + rotation_deg),
                counter_rotation_deg: -rotation_deg,
            }
        })
        .collect()
}
