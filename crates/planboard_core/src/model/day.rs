//! Weekday enumeration used as the outer key of the timetable grid.
//!
//! # Invariants
//! - Exactly seven variants; the set is closed and never extended.
//! - Ordering follows the display order Monday through Sunday.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One of the seven fixed weekday names.
///
/// Serialized by full English name to match the persisted timetable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in display order, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Stable storage/display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Parses a full weekday name. Returns `None` for anything else,
    /// including abbreviations and different casing.
    pub fn parse(value: &str) -> Option<Day> {
        match value {
            "Monday" => Some(Day::Monday),
            "Tuesday" => Some(Day::Tuesday),
            "Wednesday" => Some(Day::Wednesday),
            "Thursday" => Some(Day::Thursday),
            "Friday" => Some(Day::Friday),
            "Saturday" => Some(Day::Saturday),
            "Sunday" => Some(Day::Sunday),
            _ => None,
        }
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Day;

    #[test]
    fn all_covers_seven_distinct_days() {
        assert_eq!(Day::ALL.len(), 7);
        for window in Day::ALL.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn parse_round_trips_every_name() {
        for day in Day::ALL {
            assert_eq!(Day::parse(day.as_str()), Some(day));
        }
        assert_eq!(Day::parse("monday"), None);
        assert_eq!(Day::parse("Mon"), None);
    }
}
