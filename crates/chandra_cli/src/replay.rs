//! Line-oriented event script for `chandra replay`.
//!
//! One command per line; blank lines and `#` comments are skipped.
//! Pointer coordinates are screen pixels in an 800x800 scene at the origin.
//!
//! ```text
//! date 2024-01-11      select 8         down 400 90
//! today                phase waning     move 710 400
//! step -3              calendar 14      up
//! next / prev          prev-month       toggle
//! wait 1500            next-month
//! ```

use std::time::Duration;

use chandra_dial::{DialEvent, PointerSample, SceneRect};
use chandra_math::Phase;

/// Screen rect used for pointer commands.
pub const REPLAY_SCENE: SceneRect = SceneRect {
    left: 0.0,
    top: 0.0,
    width: 800.0,
    height: 800.0,
};

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayStep {
    Event(DialEvent),
    /// Advance the virtual clock and apply due animation ticks.
    Wait(Duration),
}

/// Parse a script line; `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<ReplayStep>, String> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    let event = match command.to_ascii_lowercase().as_str() {
        "date" => DialEvent::DateInput(rest.to_string()),
        "today" => DialEvent::Today,
        "next" => DialEvent::StepDays(1),
        "prev" => DialEvent::StepDays(-1),
        "step" => DialEvent::StepDays(parse_arg(rest, "day count")?),
        "select" => DialEvent::SelectLunarDay(parse_arg(rest, "lunar day")?),
        "phase" => DialEvent::SwitchPhase(rest.parse::<Phase>().map_err(|e| e.to_string())?),
        "calendar" => DialEvent::CalendarSelect(parse_arg(rest, "day of month")?),
        "prev-month" => DialEvent::PreviousMonth,
        "next-month" => DialEvent::NextMonth,
        "toggle" => DialEvent::ToggleAnimation,
        "down" => DialEvent::PointerDown(parse_point(rest)?),
        "move" => DialEvent::PointerMove(parse_point(rest)?),
        "up" => DialEvent::PointerUp,
        "wait" => {
            let ms: u64 = parse_arg(rest, "milliseconds")?;
            return Ok(Some(ReplayStep::Wait(Duration::from_millis(ms))));
        }
        other => return Err(format!("unknown command {other:?}")),
    };
    Ok(Some(ReplayStep::Event(event)))
}

fn parse_arg<T: std::str::FromStr>(s: &str, what: &str) -> Result<T, String> {
    s.parse()
        .map_err(|_| format!("expected {what}, got {s:?}"))
}

fn parse_point(s: &str) -> Result<PointerSample, String> {
    let mut parts = s.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected \"<x> <y>\", got {s:?}"));
    };
    Ok(PointerSample::new(
        parse_arg(x, "x coordinate")?,
        parse_arg(y, "y coordinate")?,
        REPLAY_SCENE,
    ))
}
