//! Calendar-based release versioning.
//!
//! Release versions are `YYYY.M.D.N`: the release date without zero padding,
//! followed by a day-scoped sequence that counts releases cut on the same
//! calendar day and resets when the date changes.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::CoreError;

/// Release date as it appears in a version string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl VersionDate {
    pub fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: u32::try_from(date.year()).unwrap_or(0),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Today in local time. Kept out of [`next_version`] so the generator
    /// stays deterministic under test.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }
}

/// A parsed `YYYY.M.D.N` version. Ordering is numeric per component, so
/// `2024.3.9.10` sorts above `2024.3.9.9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarVersion {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub sequence: u32,
}

impl CalendarVersion {
    pub fn new(date: VersionDate, sequence: u32) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
            sequence,
        }
    }

    pub fn date(&self) -> VersionDate {
        VersionDate::new(self.year, self.month, self.day)
    }

    pub fn is_dated(&self, date: VersionDate) -> bool {
        self.date() == date
    }
}

impl FromStr for CalendarVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, CoreError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return Err(CoreError::InvalidVersion(s.to_string()));
        }

        let mut numbers = [0u32; 4];
        for (slot, part) in numbers.iter_mut().zip(parts.iter().copied()) {
            *slot = parse_component(part).ok_or_else(|| CoreError::InvalidVersion(s.to_string()))?;
        }

        Ok(Self {
            year: numbers[0],
            month: numbers[1],
            day: numbers[2],
            sequence: numbers[3],
        })
    }
}

// A component is ASCII digits with no leading zero: published versions carry
// the literal numeric date, so a padded component like "03" can never have
// been generated and must not compare equal to "3".
fn parse_component(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if part.len() > 1 && part.starts_with('0') {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for CalendarVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.year, self.month, self.day, self.sequence)
    }
}

impl PartialOrd for CalendarVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day, self.sequence).cmp(&(
            other.year,
            other.month,
            other.day,
            other.sequence,
        ))
    }
}

/// Next version for a release cut `today`. A previous version dated the same
/// day continues its sequence; anything else, including a malformed or absent
/// previous version, starts the day at sequence 0.
pub fn next_version(previous: Option<&str>, today: VersionDate) -> CalendarVersion {
    let sequence = previous
        .and_then(|raw| CalendarVersion::from_str(raw).ok())
        .filter(|version| version.is_dated(today))
        .map(|version| version.sequence + 1)
        .unwrap_or(0);

    CalendarVersion::new(today, sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_9() -> VersionDate {
        VersionDate::new(2024, 3, 9)
    }

    #[test]
    fn first_release_of_a_day_starts_at_sequence_zero() {
        assert_eq!(next_version(None, march_9()).to_string(), "2024.3.9.0");
    }

    #[test]
    fn same_day_release_continues_the_sequence() {
        assert_eq!(
            next_version(Some("2024.3.9.0"), march_9()).to_string(),
            "2024.3.9.1"
        );
    }

    #[test]
    fn date_rollover_resets_the_sequence() {
        assert_eq!(
            next_version(Some("2024.3.9.5"), VersionDate::new(2024, 3, 10)).to_string(),
            "2024.3.10.0"
        );
    }

    #[test]
    fn malformed_previous_version_is_treated_as_absent() {
        assert_eq!(next_version(Some("garbage"), march_9()).to_string(), "2024.3.9.0");
        assert_eq!(next_version(Some(""), march_9()).to_string(), "2024.3.9.0");
        assert_eq!(
            next_version(Some("2024.3.9"), march_9()).to_string(),
            "2024.3.9.0"
        );
    }

    #[test]
    fn zero_padded_previous_version_does_not_match_the_day() {
        // "2024.03.9.4" was never generated by this scheme, so the sequence
        // must not continue from it.
        assert_eq!(
            next_version(Some("2024.03.9.4"), march_9()).to_string(),
            "2024.3.9.0"
        );
    }

    #[test]
    fn parses_a_canonical_version() {
        let version: CalendarVersion = "2024.3.9.12".parse().expect("parse");
        assert_eq!(version.year, 2024);
        assert_eq!(version.month, 3);
        assert_eq!(version.day, 9);
        assert_eq!(version.sequence, 12);
        assert!(version.is_dated(march_9()));
    }

    #[test]
    fn rejects_non_canonical_versions() {
        for raw in ["", "2024.3.9", "2024.3.9.0.0", "2024.3.9.-1", "v2024.3.9.0", "2024.3.09.0", "2024.3.9.01"] {
            assert!(raw.parse::<CalendarVersion>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let version: CalendarVersion = " 2024.3.9.0\n".parse().expect("parse");
        assert_eq!(version.to_string(), "2024.3.9.0");
    }

    #[test]
    fn ordering_is_numeric_not_lexical() {
        let nine: CalendarVersion = "2024.3.9.9".parse().expect("parse");
        let ten: CalendarVersion = "2024.3.9.10".parse().expect("parse");
        assert!(nine < ten);

        let march: CalendarVersion = "2024.3.10.0".parse().expect("parse");
        let november: CalendarVersion = "2024.11.2.0".parse().expect("parse");
        assert!(march < november);
    }

    #[test]
    fn display_does_not_pad_components() {
        let version = CalendarVersion::new(VersionDate::new(2024, 3, 9), 0);
        assert_eq!(version.to_string(), "2024.3.9.0");
    }
}
