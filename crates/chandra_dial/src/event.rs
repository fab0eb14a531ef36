//! External inputs to the dial.

use chandra_math::Phase;

/// On-screen bounds of the rendered scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SceneRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A square scene at the origin.
    pub fn square(size: f64) -> Self {
        Self::new(0.0, 0.0, size, size)
    }

    /// Screen position of the disc center.
    pub fn center(&self) -> (f64, f64) {
        (
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Screen pixels per scene unit, `None` for a collapsed scene.
    pub fn scale(&self, scene_size: f64) -> Option<f64> {
        let scale = self.width / scene_size;
        (scale.is_finite() && scale > 0.0).then_some(scale)
    }
}

/// One pointer position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub rect: SceneRect,
}

impl PointerSample {
    pub fn new(x: f64, y: f64, rect: SceneRect) -> Self {
        Self { x, y, rect }
    }

    /// Sample from a touch list. Only the first touch point is read.
    pub fn first_touch(points: &[(f64, f64)], rect: SceneRect) -> Option<Self> {
        points.first().map(|&(x, y)| Self::new(x, y, rect))
    }

    /// Sample at a polar position around the scene center, in screen units.
    ///
    /// Angles follow screen convention: 0 is east, 90 is south.
    pub fn at_polar(rect: SceneRect, radius: f64, angle_deg: f64) -> Self {
        let (cx, cy) = rect.center();
        let rad = angle_deg.to_radians();
        Self::new(cx + rad.cos() * radius, cy + rad.sin() * radius, rect)
    }

    /// Whether the pointer position is a finite screen coordinate.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    fn offset(&self) -> (f64, f64) {
        let (cx, cy) = self.rect.center();
        (self.x - cx, self.y - cy)
    }

    /// Pointer angle around the disc center, degrees in (-180, 180].
    pub fn angle_deg(&self) -> f64 {
        let (dx, dy) = self.offset();
        dy.atan2(dx).to_degrees()
    }

    /// Distance from the disc center in scene units.
    pub fn scene_distance(&self, scene_size: f64) -> Option<f64> {
        let (dx, dy) = self.offset();
        self.rect
            .scale(scene_size)
            .map(|scale| dx.hypot(dy) / scale)
    }
}

/// Every input the dial reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum DialEvent {
    /// Raw `YYYY-MM-DD` text from the date field. Empty or invalid is ignored.
    DateInput(String),
    /// Jump to the clock's current date.
    Today,
    /// Move the selected date by a signed number of days.
    StepDays(i64),
    /// Select a lunar day (1-15) within the current phase.
    SelectLunarDay(u8),
    /// Jump to day 1 of the given phase; no-op if already in it.
    SwitchPhase(Phase),
    /// Click on a day of the viewed month.
    CalendarSelect(u32),
    PreviousMonth,
    NextMonth,
    /// Start or stop auto-advance.
    ToggleAnimation,
    PointerDown(PointerSample),
    PointerMove(PointerSample),
    PointerUp,
}

impl DialEvent {
    /// Short name for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DateInput(_) => "date_input",
            Self::Today => "today",
            Self::StepDays(_) => "step_days",
            Self::SelectLunarDay(_) => "select_lunar_day",
            Self::SwitchPhase(_) => "switch_phase",
            Self::CalendarSelect(_) => "calendar_select",
            Self::PreviousMonth => "previous_month",
            Self::NextMonth => "next_month",
            Self::ToggleAnimation => "toggle_animation",
            Self::PointerDown(_) => "pointer_down",
            Self::PointerMove(_) => "pointer_move",
            Self::PointerUp => "pointer_up",
        }
    }
}
