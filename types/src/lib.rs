use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Days, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ── Deadline ─────────────────────────────────────────────────────────────

// 2024-02-30T23:59:59
static RE_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})T(?P<hour>[0-9]{2}):(?P<minute>[0-9]{2}):(?P<second>[0-9]{2})$",
    )
    .unwrap()
});

/// A calendar deadline as read from post text.
///
/// The day is only bounded by 31, not by the month's real length, so a post
/// saying "2/30" yields `02-30` verbatim. Use [`Deadline::to_naive`] when a
/// real instant is needed; overflow days roll into the following month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deadline {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Deadline {
    /// Deadline at 23:59:59 of the given day. `None` when month/day are out of range.
    pub fn end_of_day(year: i32, month: u32, day: u32) -> Option<Self> {
        Self::at(year, month, day, 23, 59, 59)
    }

    /// Deadline at 00:00:00 of the given day.
    pub fn start_of_day(year: i32, month: u32, day: u32) -> Option<Self> {
        Self::at(year, month, day, 0, 0, 0)
    }

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// The same wall-clock time in another year.
    pub fn with_year(self, year: i32) -> Self {
        Self { year, ..self }
    }

    /// Normalized instant: day 31 of a 30-day month becomes the 1st of the next.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)?
            .checked_add_days(Days::new(u64::from(self.day.checked_sub(1)?)))?
            .and_hms_opt(self.hour, self.minute, self.second)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDeadlineError(pub String);

impl fmt::Display for ParseDeadlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid deadline timestamp: {}", self.0)
    }
}

impl std::error::Error for ParseDeadlineError {}

impl FromStr for Deadline {
    type Err = ParseDeadlineError;

    /// Parses `YYYY-MM-DDTHH:MM:SS` without checking the month's length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDeadlineError(s.to_string());
        let caps = RE_TIMESTAMP.captures(s).ok_or_else(err)?;
        let field = |name: &str| caps[name].parse::<u32>().map_err(|_| err());

        let year: i32 = caps["year"].parse().map_err(|_| err())?;
        let (month, day) = (field("month")?, field("day")?);
        let (hour, minute, second) = (field("hour")?, field("minute")?, field("second")?);

        if hour > 23 || minute > 59 || second > 59 {
            return Err(err());
        }
        Self::at(year, month, day, hour, minute, second).ok_or_else(err)
    }
}

impl Serialize for Deadline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Deadline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Event record ─────────────────────────────────────────────────────────

/// A post recognized as an art event announcement, with extracted metadata.
///
/// Storage-side attributes (id, done flag, memo) are attached by whoever
/// persists the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Opaque reference to the source post, usually its URL.
    pub origin_ref: String,
    pub event_name: String,
    pub deadline: Option<Deadline>,
    pub hashtags: Vec<String>,
    /// Non-empty trimmed lines of the body, in order.
    pub rules: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub raw_text: String,
}

// ── Post input ───────────────────────────────────────────────────────────

/// One post as handed over by a scraper or saved to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub text: String,
    #[serde(default, alias = "postUrl")]
    pub origin_ref: String,
    #[serde(default)]
    pub images: Vec<String>,
}
