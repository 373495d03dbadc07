//! Human-relative and calendar labels for timestamps.
//!
//! Every function takes the reference instant explicitly; nothing here reads
//! the system clock.

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;

/// Label for a workflow without a schedule.
pub const ON_DEMAND_LABEL: &str = "On demand";

/// `strftime` pattern for [`calendar_label`].
pub const CALENDAR_FORMAT: &str = "%b %-d, %Y, %H:%M UTC";

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// Magnitude of a time distance expressed in its display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    UnderAMinute,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

/// Bucket an absolute distance in seconds.
///
/// Minutes are whole elapsed minutes (truncated). Hours and days are
/// re-derived from the previous tier with round-half-away-from-zero, and a
/// tier is left only once its full threshold is crossed.
fn span_from_seconds(abs_seconds: i64) -> Span {
    let minutes = abs_seconds / 60;
    if minutes < 1 {
        return Span::UnderAMinute;
    }
    if minutes < MINUTES_PER_HOUR {
        return Span::Minutes(minutes);
    }

    let hours = (minutes as f64 / MINUTES_PER_HOUR as f64).round() as i64;
    if hours < HOURS_PER_DAY {
        return Span::Hours(hours);
    }

    let days = (hours as f64 / HOURS_PER_DAY as f64).round() as i64;
    Span::Days(days)
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Render `target` relative to `now`.
///
/// Past (or present) targets read `"Now"`, `"5 min ago"`, `"3 hr ago"`,
/// `"2d ago"`; future targets read `"In moments"`, `"In 5 min"`,
/// `"In 3 hr"`, `"In 2d"`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use fleetview_core::time_label::relative_label;
///
/// let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
/// assert_eq!(relative_label(now, now - Duration::seconds(59)), "Now");
/// assert_eq!(relative_label(now, now - Duration::minutes(60)), "1 hr ago");
/// assert_eq!(relative_label(now, now + Duration::minutes(5)), "In 5 min");
/// ```
pub fn relative_label(now: Timestamp, target: Timestamp) -> String {
    let delta_seconds = (now - target).num_seconds();
    let span = span_from_seconds(delta_seconds.saturating_abs());

    if delta_seconds < 0 {
        match span {
            Span::UnderAMinute => "In moments".to_string(),
            Span::Minutes(m) => format!("In {m} min"),
            Span::Hours(h) => format!("In {h} hr"),
            Span::Days(d) => format!("In {d}d"),
        }
    } else {
        match span {
            Span::UnderAMinute => "Now".to_string(),
            Span::Minutes(m) => format!("{m} min ago"),
            Span::Hours(h) => format!("{h} hr ago"),
            Span::Days(d) => format!("{d}d ago"),
        }
    }
}

/// Absolute calendar label, e.g. `"Oct 17, 2026, 14:05 UTC"`.
///
/// Uses a fixed English format so output does not depend on host locale.
pub fn calendar_label(target: Timestamp) -> String {
    target.format(CALENDAR_FORMAT).to_string()
}

/// Label for the next scheduled run, or [`ON_DEMAND_LABEL`] when unscheduled.
pub fn next_run_label(now: Timestamp, next_run_at: Option<Timestamp>) -> String {
    match next_run_at {
        Some(at) => relative_label(now, at),
        None => ON_DEMAND_LABEL.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
