//! Deadline extraction.
//!
//! An ordered table of date patterns is tried top to bottom. Only the first
//! match of each pattern is considered; if it does not form a valid
//! month/day the next pattern is tried. Order encodes precedence, so a bare
//! `M月D日` near the top of a post can win over a later real deadline when
//! no marker pattern above it matched.
//!
//! Real posts:
//!   【締切】2024年2月29日 23:59まで
//!   〆：2/15
//!   開催期間：2/1(木)～2/14(水)
//!   期間：3月1日から3月31日まで
//!   テーマ「桜」(3/20)

use std::sync::LazyLock;

use art_event_types::Deadline;
use chrono::{Datelike, NaiveDateTime, TimeDelta};
use regex::Regex;
use tracing::{debug, trace};

use crate::profile::Profile;

/// Year-less dates further back than this are read as next year's.
pub const ROLLOVER_DAYS: i64 = 180;

/// One entry of the pattern table.
///
/// Regexes use named groups `month`, `day` and, for year-bearing patterns,
/// `year`.
#[derive(Debug)]
pub struct DatePattern {
    pub name: &'static str,
    regex: Regex,
}

/// The raw numbers of a pattern's first match, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMatch {
    pub year: Option<i32>,
    pub month: u32,
    pub day: u32,
}

impl DatePattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).unwrap(),
        }
    }

    /// First match of this pattern in `text`.
    pub fn find(&self, text: &str) -> Option<DateMatch> {
        let caps = self.regex.captures(text)?;
        let year = match caps.name("year") {
            Some(y) => Some(y.as_str().parse().ok()?),
            None => None,
        };
        Some(DateMatch {
            year,
            month: caps.name("month")?.as_str().parse().ok()?,
            day: caps.name("day")?.as_str().parse().ok()?,
        })
    }
}

/// Time of day attached to an extracted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    /// 23:59:59, so a same-day deadline is still open until the day ends.
    EndOfDay,
    Midnight,
}

impl TimeOfDay {
    fn on(self, year: i32, month: u32, day: u32) -> Option<Deadline> {
        match self {
            Self::EndOfDay => Deadline::end_of_day(year, month, day),
            Self::Midnight => Deadline::start_of_day(year, month, day),
        }
    }
}

// ── Pattern tables ───────────────────────────────────────────────────
//
// Range-end terminator: 日, whitespace, a bracket (weekday notes such as
// "(水)") or end of text. It keeps "～1/155" from reading as 1/15.

static FULL_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        DatePattern::new(
            "ymd-kanji",
            r"(?P<year>[0-9]{4})年(?P<month>[0-9]{1,2})月(?P<day>[0-9]{1,2})日",
        ),
        DatePattern::new(
            "ymd-slash",
            r"(?P<year>[0-9]{4})/(?P<month>[0-9]{1,2})/(?P<day>[0-9]{1,2})",
        ),
        DatePattern::new(
            "deadline-marker",
            r"(?i)(?:〆|締切|締め切り|デッドライン|deadline)[:\s：]*(?P<month>[0-9]{1,2})[/月](?P<day>[0-9]{1,2})日?",
        ),
        DatePattern::new(
            "range-end",
            r"[~\-\x{301C}\x{FF5E}](?P<month>[0-9]{1,2})[/月](?P<day>[0-9]{1,2})(?:[日\s）)（(]|$)",
        ),
        DatePattern::new(
            "period-range-end",
            r"(?:開催期間|期間)[:\s：]*.*?[~\-\x{301C}\x{FF5E}](?P<month>[0-9]{1,2})[/月](?P<day>[0-9]{1,2})(?:[日\s）)（(]|$)",
        ),
        DatePattern::new(
            "period-date",
            r"(?:開催期間|期間)[:\s：]*.*?(?P<month>[0-9]{1,2})[/月](?P<day>[0-9]{1,2})(?:[日\s）)（(]|$)",
        ),
        DatePattern::new(
            "md-kanji",
            r"(?P<month>[0-9]{1,2})月(?P<day>[0-9]{1,2})日",
        ),
        DatePattern::new(
            "md-parenthesized",
            r"[（(](?P<month>[0-9]{1,2})[/月](?P<day>[0-9]{1,2})[)）]",
        ),
        DatePattern::new(
            "md-until",
            r"(?P<month>[0-9]{1,2})[/月](?P<day>[0-9]{1,2})日?(?:まで| まで)",
        ),
    ]
});

static LEAN_PATTERNS: LazyLock<Vec<DatePattern>> = LazyLock::new(|| {
    vec![
        DatePattern::new(
            "ymd-kanji",
            r"(?P<year>[0-9]{4})年(?P<month>[0-9]{1,2})月(?P<day>[0-9]{1,2})日",
        ),
        DatePattern::new(
            "ymd-slash",
            r"(?P<year>[0-9]{4})/(?P<month>[0-9]{1,2})/(?P<day>[0-9]{1,2})",
        ),
        DatePattern::new(
            "deadline-marker",
            r"(?i)(?:〆|締切|締め切り|デッドライン|deadline)[:\s：]*(?P<month>[0-9]{1,2})[/月](?P<day>[0-9]{1,2})日?",
        ),
        DatePattern::new(
            "range-end",
            r"[~～\-](?P<month>[0-9]{1,2})[/月](?P<day>[0-9]{1,2})(?:日|\s|$)",
        ),
        DatePattern::new(
            "period-range-end",
            r"(?:開催期間|期間)[:\s：].*?[~～\-](?P<month>[0-9]{1,2})[/月](?P<day>[0-9]{1,2})(?:日|\s|$)",
        ),
        DatePattern::new(
            "period-date",
            r"(?:開催期間|期間)[:\s：].*?(?P<month>[0-9]{1,2})[/月](?P<day>[0-9]{1,2})(?:日|\s|$)",
        ),
        DatePattern::new(
            "md-kanji",
            r"(?P<month>[0-9]{1,2})月(?P<day>[0-9]{1,2})日",
        ),
    ]
});

/// The ordered pattern table for a profile.
pub fn patterns(profile: Profile) -> &'static [DatePattern] {
    match profile {
        Profile::Full => &FULL_PATTERNS,
        Profile::Lean => &LEAN_PATTERNS,
    }
}

fn time_of_day(profile: Profile) -> TimeOfDay {
    match profile {
        Profile::Full => TimeOfDay::EndOfDay,
        Profile::Lean => TimeOfDay::Midnight,
    }
}

/// Extract a deadline with the full pattern table, ending at 23:59:59.
///
/// `now` decides the year of year-less dates and must be the caller's
/// current local time.
pub fn extract_deadline(text: &str, now: NaiveDateTime) -> Option<Deadline> {
    extract_deadline_with(Profile::Full, text, now)
}

pub fn extract_deadline_with(profile: Profile, text: &str, now: NaiveDateTime) -> Option<Deadline> {
    let tod = time_of_day(profile);
    for pattern in patterns(profile) {
        let Some(m) = pattern.find(text) else {
            continue;
        };
        match resolve(m, now, tod) {
            Some(deadline) => {
                debug!(pattern = pattern.name, %deadline, "deadline found");
                return Some(deadline);
            }
            None => trace!(pattern = pattern.name, ?m, "rejected out-of-range date"),
        }
    }
    None
}

/// Turn a raw match into a deadline, inferring the year when absent.
///
/// A year-less date more than [`ROLLOVER_DAYS`] in the past means the next
/// occurrence: a December post saying "1/15" is about January next year.
pub fn resolve(m: DateMatch, now: NaiveDateTime, tod: TimeOfDay) -> Option<Deadline> {
    if let Some(year) = m.year {
        return tod.on(year, m.month, m.day);
    }

    let deadline = tod.on(now.year(), m.month, m.day)?;
    if let Some(instant) = deadline.to_naive() {
        if instant < now && now - instant > TimeDelta::days(ROLLOVER_DAYS) {
            return Some(deadline.with_year(now.year() + 1));
        }
    }
    Some(deadline)
}
