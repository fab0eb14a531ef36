//! Drag-to-rotate state machine for the ring of moon icons.
//!
//! Idle -> Dragging on a pointer-down inside the ring annulus. Each move
//! sets a continuous live rotation; the selected day does not change until
//! release. On release the live rotation snaps to the nearest of the 15
//! day positions and the session (with its pointer capture) is consumed.

use chandra_math::{day_from_rotation, disc_rotation_for_day, normalize_to_pm180};

use crate::capture::CaptureGuard;
use crate::event::PointerSample;

/// Ring of scene radii where a drag may start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    /// Side of the square scene in scene units.
    pub scene_size: f64,
    pub inner: f64,
    pub outer: f64,
}

impl Annulus {
    /// Whether a pointer lies on the ring, bounds inclusive.
    pub fn contains(&self, sample: &PointerSample) -> bool {
        sample
            .scene_distance(self.scene_size)
            .is_some_and(|d| d >= self.inner && d <= self.outer)
    }
}

/// An active drag gesture.
#[derive(Debug)]
pub struct DragSession {
    start_pointer_angle: f64,
    start_rotation: f64,
    live_rotation: f64,
    _capture: CaptureGuard,
}

impl DragSession {
    /// Start a drag from the disc position of `current_day`.
    pub fn begin(sample: &PointerSample, current_day: u8, capture: CaptureGuard) -> Self {
        let start_rotation = disc_rotation_for_day(current_day);
        Self {
            start_pointer_angle: sample.angle_deg(),
            start_rotation,
            live_rotation: start_rotation,
            _capture: capture,
        }
    }

    /// Follow the pointer; returns the new live rotation.
    ///
    /// The pointer delta is taken in (-180, 180] so crossing the west axis
    /// does not flip the disc by a full turn. Non-finite samples leave the
    /// rotation unchanged.
    pub fn update(&mut self, sample: &PointerSample) -> f64 {
        let angle = sample.angle_deg();
        if !sample.is_finite() || !angle.is_finite() {
            return self.live_rotation;
        }
        let delta = normalize_to_pm180(angle - self.start_pointer_angle);
        self.live_rotation = self.start_rotation + delta;
        self.live_rotation
    }

    /// Continuous, non-integral rotation while dragging.
    pub fn live_rotation(&self) -> f64 {
        self.live_rotation
    }

    pub fn start_rotation(&self) -> f64 {
        self.start_rotation
    }

    /// End the drag: the lunar day (1-15) under the marker after snapping.
    pub fn finish(self) -> u8 {
        day_from_rotation(self.live_rotation)
    }
}
