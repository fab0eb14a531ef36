//! The dial controller.
//!
//! `Dial` holds the only mutable state: the selected date, the viewed
//! month, an optional drag session and the animation ticker. Each event is
//! applied synchronously; derived values come from [`Dial::snapshot`].

use std::path::Path;
use std::time::Instant;

use chandra_calendar::MonthView;
use chandra_math::{DAYS_PER_PHASE, LunarDate, Phase, lunar_day_for_date};
use chrono::{Days, NaiveDate};

use crate::capture::CaptureRegistry;
use crate::clock::{Clock, SystemClock};
use crate::config::DialConfig;
use crate::drag::DragSession;
use crate::error::DialError;
use crate::event::{DialEvent, PointerSample};
use crate::snapshot::DialSnapshot;
use crate::ticker::AnimationTicker;

/// Interactive moon dial.
#[derive(Debug)]
pub struct Dial<C: Clock = SystemClock> {
    config: DialConfig,
    clock: C,
    selected: NaiveDate,
    view: MonthView,
    drag: Option<DragSession>,
    ticker: AnimationTicker,
    captures: CaptureRegistry,
}

impl<C: Clock> Dial<C> {
    /// A dial starting on the clock's today.
    pub fn new(config: DialConfig, clock: C) -> Self {
        let today = clock.today();
        Self::starting_at(config, clock, today)
    }

    /// A dial on the clock's today, configured from a TOML file.
    pub fn from_config_file(path: &Path, clock: C) -> Result<Self, DialError> {
        let config = DialConfig::load(path)?;
        Ok(Self::new(config, clock))
    }

    /// A dial starting on `selected`.
    pub fn starting_at(config: DialConfig, clock: C, selected: NaiveDate) -> Self {
        let ticker = AnimationTicker::new(config.tick_period());
        Self {
            config,
            clock,
            selected,
            view: MonthView::containing(selected),
            drag: None,
            ticker,
            captures: CaptureRegistry::new(),
        }
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Lunar day of the selected date.
    pub fn lunar(&self) -> LunarDate {
        lunar_day_for_date(self.selected)
    }

    pub fn view(&self) -> MonthView {
        self.view
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.ticker.is_running()
    }

    pub fn ticker(&self) -> &AnimationTicker {
        &self.ticker
    }

    /// Registry of pointer captures held by this dial.
    pub fn captures(&self) -> &CaptureRegistry {
        &self.captures
    }

    /// Apply one event. Returns whether the selected date changed.
    pub fn handle(&mut self, event: DialEvent, now: Instant) -> Result<bool, DialError> {
        tracing::debug!(event = event.name(), selected = %self.selected, "handle event");
        match event {
            DialEvent::DateInput(text) => Ok(self.date_input(&text)),
            DialEvent::Today => {
                let today = self.clock.today();
                Ok(self.set_selected(today))
            }
            DialEvent::StepDays(days) => self.shift_days(days),
            DialEvent::SelectLunarDay(day) => self.select_lunar_day(day),
            DialEvent::SwitchPhase(phase) => self.switch_phase(phase),
            DialEvent::CalendarSelect(day_of_month) => {
                let date = self.view.date_of(day_of_month)?;
                Ok(self.set_selected(date))
            }
            DialEvent::PreviousMonth => {
                self.view = self.view.previous()?;
                Ok(false)
            }
            DialEvent::NextMonth => {
                self.view = self.view.next()?;
                Ok(false)
            }
            DialEvent::ToggleAnimation => {
                self.toggle_animation(now);
                Ok(false)
            }
            DialEvent::PointerDown(sample) => {
                self.pointer_down(&sample);
                Ok(false)
            }
            DialEvent::PointerMove(sample) => {
                self.pointer_move(&sample);
                Ok(false)
            }
            DialEvent::PointerUp => self.pointer_up(),
        }
    }

    /// Apply animation ticks due at `now`, one calendar day each.
    ///
    /// Returns the number of ticks applied.
    pub fn tick(&mut self, now: Instant) -> Result<u32, DialError> {
        let ticks = self.ticker.poll(now);
        if ticks > 0 {
            tracing::trace!(ticks, "animation tick");
            self.shift_days(i64::from(ticks))?;
        }
        Ok(ticks)
    }

    /// Stop the animation and release any drag capture.
    pub fn dispose(&mut self) {
        if self.ticker.stop() {
            tracing::info!("animation stopped on dispose");
        }
        if self.drag.take().is_some() {
            tracing::debug!("drag abandoned on dispose");
        }
    }

    /// Recompute every derived value from the current state.
    pub fn snapshot(&self) -> DialSnapshot {
        DialSnapshot::compute(
            self.selected,
            self.clock.today(),
            self.view,
            self.drag.as_ref().map(DragSession::live_rotation),
            self.ticker.is_running(),
        )
    }

    fn set_selected(&mut self, date: NaiveDate) -> bool {
        if date == self.selected {
            return false;
        }
        self.selected = date;
        self.view = MonthView::containing(date);
        true
    }

    fn shift_days(&mut self, days: i64) -> Result<bool, DialError> {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.selected.checked_add_days(magnitude)
        } else {
            self.selected.checked_sub_days(magnitude)
        };
        let date = shifted.ok_or(DialError::DateOverflow {
            from: self.selected,
            days,
        })?;
        Ok(self.set_selected(date))
    }

    fn date_input(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(date) => self.set_selected(date),
            Err(e) => {
                tracing::debug!(input = text, error = %e, "ignoring invalid date input");
                false
            }
        }
    }

    fn select_lunar_day(&mut self, target: u8) -> Result<bool, DialError> {
        let current = self.lunar();
        LunarDate::new(current.phase, target)?;
        self.shift_days(i64::from(target) - i64::from(current.day))
    }

    fn switch_phase(&mut self, target: Phase) -> Result<bool, DialError> {
        let current = self.lunar();
        if current.phase == target {
            return Ok(false);
        }
        // Day 1 of the next phase is assumed to be 15 - day + 1 days away.
        let jump = i64::from(DAYS_PER_PHASE) - i64::from(current.day) + 1;
        self.shift_days(jump)
    }

    fn toggle_animation(&mut self, now: Instant) {
        if self.ticker.stop() {
            tracing::info!(selected = %self.selected, "animation stopped");
        } else if self.ticker.start(now) {
            if self.drag.take().is_some() {
                tracing::debug!("drag cancelled by animation start");
            }
            tracing::info!(
                period_ms = self.config.tick_period_ms,
                selected = %self.selected,
                "animation started"
            );
        }
    }

    fn pointer_down(&mut self, sample: &PointerSample) {
        if self.ticker.is_running() {
            tracing::debug!("drag ignored while animating");
            return;
        }
        if self.drag.is_some() {
            return;
        }
        if !self.config.annulus().contains(sample) {
            tracing::debug!("pointer outside ring annulus");
            return;
        }
        let day = self.lunar().day;
        let session = DragSession::begin(sample, day, self.captures.capture());
        tracing::debug!(day, rotation = session.start_rotation(), "drag started");
        self.drag = Some(session);
    }

    fn pointer_move(&mut self, sample: &PointerSample) {
        if let Some(session) = self.drag.as_mut() {
            let rotation = session.update(sample);
            tracing::trace!(rotation, "drag moved");
        }
    }

    fn pointer_up(&mut self) -> Result<bool, DialError> {
        let Some(session) = self.drag.take() else {
            return Ok(false);
        };
        let rotation = session.live_rotation();
        let target = session.finish();
        let current = self.lunar();
        tracing::info!(rotation, from = current.day, to = target, "drag snapped");
        if target == current.day {
            return Ok(false);
        }
        self.select_lunar_day(target)
    }
}

impl<C: Clock> Drop for Dial<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}
