//! Subcommand implementations.

use std::io::{BufRead, Write};
use std::time::Instant;

use chandra_calendar::thai::{THAI_WEEKDAYS, month_label};
use chandra_calendar::{MonthGrid, MonthView, month_grid};
use chandra_dial::{Dial, DialConfig, DialEvent, DialSnapshot, FixedClock};
use chandra_math::{LunarDate, Phase, day_from_rotation, disc_rotation_for_day, lunar_age};
use chrono::NaiveDate;

use crate::error::CliError;
use crate::replay::{ReplayStep, parse_line};

/// Shared inputs for every subcommand.
pub struct Context {
    pub today: NaiveDate,
    pub config: DialConfig,
}

impl Context {
    fn dial_at(&self, date: NaiveDate) -> Dial<FixedClock> {
        Dial::starting_at(self.config.clone(), FixedClock(self.today), date)
    }

    fn date_or_today(&self, date: Option<&str>) -> Result<NaiveDate, CliError> {
        date.map_or(Ok(self.today), parse_date)
    }
}

/// Parse a `YYYY-MM-DD` argument.
pub fn parse_date(s: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::InvalidDate(s.to_string()))
}

pub fn phase(ctx: &Context, date: Option<&str>) -> Result<(), CliError> {
    let date = ctx.date_or_today(date)?;
    let snap = ctx.dial_at(date).snapshot();

    println!("Date:         {} ({})", snap.selected, snap.date_label_thai);
    println!("Lunar age:    {:.4} days", lunar_age(date));
    println!(
        "Lunar day:    {} ({})",
        snap.lunar, snap.lunar_label_thai
    );
    println!(
        "Phase name:   {} ({})",
        snap.phase_name.short, snap.phase_name.descriptive
    );
    println!("Illumination: {:.1}%", snap.illumination * 100.0);
    println!(
        "Moonrise:     {} (hand at {:.1} deg)",
        snap.moonrise, snap.clock_angle
    );
    if let (Some(en), Some(th)) = (snap.observance_label, snap.observance_label_thai) {
        println!("Observance:   {en} ({th})");
    }
    if snap.is_today {
        println!("(today)");
    }
    Ok(())
}

pub fn moonrise(phase: &str, day: u8) -> Result<(), CliError> {
    let phase: Phase = phase.parse()?;
    let lunar = LunarDate::new(phase, day)?;
    let time = chandra_math::moonrise_time(lunar.phase, lunar.day);
    let labels = chandra_math::dial_hour_labels(lunar.phase);
    println!("{lunar}: moonrise {time}, hand at {:.1} deg", time.clock_angle(phase));
    println!(
        "Dial labels (clockwise from top): {}",
        labels
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(())
}

pub fn month(
    ctx: &Context,
    year: Option<i32>,
    month: Option<u32>,
    selected: Option<&str>,
) -> Result<(), CliError> {
    let selected = ctx.date_or_today(selected)?;
    let base = MonthView::containing(selected);
    let view = MonthView::new(
        year.unwrap_or_else(|| base.year()),
        month.unwrap_or_else(|| base.month()),
    )?;
    let grid = month_grid(view, selected, ctx.today);
    print!("{}", render_grid(&grid));
    Ok(())
}

/// Text rendering of a month grid.
///
/// Each cell shows the day of month and the lunar day, `+` waxing and `-`
/// waning. `*` marks an observance day, `[..]` the selection, `<..>` today.
pub fn render_grid(grid: &MonthGrid) -> String {
    let mut out = format!("{}  ({})\n", month_label(grid.view), grid.view);
    for name in THAI_WEEKDAYS {
        out.push_str(&format!("{name:^10}"));
    }
    out.push('\n');
    for week in grid.weeks() {
        for cell in week {
            let text = match cell {
                None => String::new(),
                Some(day) => {
                    let sign = if day.phase.is_waxing() { '+' } else { '-' };
                    let mark = if day.is_observance_day { "*" } else { "" };
                    let body = format!("{} {sign}{}{mark}", day.day_of_month, day.lunar_day);
                    if day.is_selected {
                        format!("[{body}]")
                    } else if day.is_today {
                        format!("<{body}>")
                    } else {
                        body
                    }
                }
            };
            out.push_str(&format!("{text:^10}"));
        }
        out.push('\n');
    }
    out
}

pub fn snap(rotation: f64) {
    let day = day_from_rotation(rotation);
    println!(
        "rotation {rotation:.2} deg -> day {day} (canonical {:.1} deg)",
        disc_rotation_for_day(day)
    );
}

pub fn animate(ctx: &Context, from: Option<&str>, ticks: u32) -> Result<(), CliError> {
    let start = ctx.date_or_today(from)?;
    let mut dial = ctx.dial_at(start);
    let period = ctx.config.tick_period();
    let t0 = Instant::now();

    dial.handle(DialEvent::ToggleAnimation, t0)?;
    println!("{}", summary_line(&dial.snapshot()));
    for n in 1..=ticks {
        dial.tick(t0 + period * n)?;
        println!("{}", summary_line(&dial.snapshot()));
    }
    dial.dispose();
    Ok(())
}

pub fn replay(ctx: &Context, from: Option<&str>) -> Result<(), CliError> {
    let start = ctx.date_or_today(from)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_replay(ctx, start, stdin.lock(), &mut stdout.lock())
}

/// Apply each script line to a dial and write the state after it.
///
/// Rejected events (such as an out-of-range lunar day) are reported inline
/// and do not stop the replay; malformed lines do.
pub fn run_replay<R: BufRead, W: Write>(
    ctx: &Context,
    start: NaiveDate,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    let mut dial = ctx.dial_at(start);
    let t0 = Instant::now();
    let mut now = t0;
    writeln!(out, "{}", summary_line(&dial.snapshot()))?;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let step = parse_line(&line).map_err(|message| CliError::Replay {
            line: idx + 1,
            message,
        })?;
        let outcome = match step {
            None => continue,
            Some(ReplayStep::Event(event)) => dial.handle(event, now).map(|_| ()),
            Some(ReplayStep::Wait(d)) => {
                now += d;
                dial.tick(now).map(|_| ())
            }
        };
        match outcome {
            Ok(()) => writeln!(out, "{}", summary_line(&dial.snapshot()))?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }
    dial.dispose();
    Ok(())
}

/// One-line state summary.
pub fn summary_line(snap: &DialSnapshot) -> String {
    let mut line = format!(
        "{}  {:<14}  {:>5.1}%  rise {}  hand {:>5.1}  disc {:>7.1}  view {}",
        snap.selected,
        snap.lunar.to_string(),
        snap.illumination * 100.0,
        snap.moonrise,
        snap.clock_angle,
        snap.disc_rotation,
        snap.month.view,
    );
    if snap.is_observance_day {
        line.push_str("  *observance*");
    }
    if snap.is_dragging {
        line.push_str("  dragging");
    }
    if snap.is_animating {
        line.push_str("  playing");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context {
            today: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            config: DialConfig::default(),
        }
    }

    fn replay_str(script: &str) -> Result<Vec<String>, CliError> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 11).unwrap();
        let mut out = Vec::new();
        run_replay(&ctx(), start, script.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect())
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("2024-01-11").is_ok());
        assert!(matches!(parse_date("11.01.2024"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn replay_prints_state_per_event() {
        let lines = replay_str("next\n\n# comment\nselect 8\n").unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("2024-01-11  waxing day 1"));
        assert!(lines[1].starts_with("2024-01-12  waxing day 2"));
        assert!(lines[2].starts_with("2024-01-18  waxing day 8"));
        assert!(lines[2].ends_with("*observance*"));
    }

    #[test]
    fn replay_reports_rejected_event_and_continues() {
        let lines = replay_str("select 16\nnext\n").unwrap();
        assert!(lines[1].starts_with("error:"));
        assert!(lines[2].starts_with("2024-01-12"));
    }

    #[test]
    fn replay_animation_with_waits() {
        let lines = replay_str("toggle\nwait 1000\ntoggle\nwait 5000\n").unwrap();
        assert!(lines[1].ends_with("playing"));
        assert!(lines[2].starts_with("2024-01-13"));
        assert!(lines[4].starts_with("2024-01-13"));
    }

    #[test]
    fn replay_stops_on_malformed_line() {
        let err = replay_str("next\nfly away\n").unwrap_err();
        assert!(matches!(err, CliError::Replay { line: 2, .. }));
    }

    #[test]
    fn grid_rendering_marks_today() {
        let view = MonthView::new(2026, 10).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let selected = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let text = render_grid(&month_grid(view, selected, today));
        assert!(text.starts_with("ตุลาคม 2569  (2026-10)"));
        assert!(text.contains("<18 +8*>"));
        assert!(text.contains("[1 "));
        assert_eq!(text.lines().count(), 7);
    }
}
