//! Activity records
//!
//! An `Activity` is both the registry record and the view handed to clients:
//! the full attribute set together with its name.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::weekday::Weekday;
use crate::error::RosterError;

/// An extracurricular activity and its roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique, human-readable name (the registry key)
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Human-readable schedule, display only
    pub schedule: String,

    /// Maximum roster size
    pub max_participants: u32,

    /// Participant emails in signup order
    #[serde(default)]
    pub participants: Vec<String>,

    /// Classification label, compared case-insensitively
    pub category: String,

    /// Days the activity meets on
    pub day: WeekdaySet,

    /// Start time as zero-padded 24-hour `HH:MM`
    pub time: String,
}

impl Activity {
    /// Whether `email` is on the roster
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Whether the roster has reached `max_participants`
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Remaining free places
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Ordered, duplicate-free set of weekdays
///
/// Serialized as the comma-joined string clients expect (`"Tuesday,Thursday"`).
/// Deserializes from that string or from a list of weekday names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdaySet(Vec<Weekday>);

impl WeekdaySet {
    /// Build a set, dropping repeated days while keeping first-seen order
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut set = Vec::new();
        for day in days {
            if !set.contains(&day) {
                set.push(day);
            }
        }
        Self(set)
    }

    /// Whether the activity meets on `day`
    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day)
    }

    /// Number of distinct days
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no day is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for WeekdaySet {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Weekday::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(days))
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(day.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for WeekdaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Joined(String),
            List(Vec<Weekday>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Joined(joined) => joined.parse().map_err(serde::de::Error::custom),
            Raw::List(days) => Ok(WeekdaySet::new(days)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Activity {
        Activity {
            name: "Math Club".into(),
            description: "Solve challenging problems".into(),
            schedule: "Tuesdays, 3:30 PM - 4:30 PM".into(),
            max_participants: 2,
            participants: vec!["james@mergington.edu".into()],
            category: "Club".into(),
            day: "Tuesday".parse().unwrap(),
            time: "15:30".into(),
        }
    }

    #[test]
    fn test_weekday_set_round_trips_through_display() {
        let set: WeekdaySet = "Monday, wednesday,Friday,monday".parse().unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_string(), "Monday,Wednesday,Friday");
        assert!(set.contains(Weekday::Wednesday));
        assert!(!set.contains(Weekday::Tuesday));
    }

    #[test]
    fn test_weekday_set_rejects_unknown_day() {
        assert!("Tuesday,Funday".parse::<WeekdaySet>().is_err());
    }

    #[test]
    fn test_capacity_helpers() {
        let mut activity = sample();
        assert!(activity.is_enrolled("james@mergington.edu"));
        assert!(!activity.is_full());
        assert_eq!(activity.spots_left(), 1);

        activity.participants.push("benjamin@mergington.edu".into());
        assert!(activity.is_full());
        assert_eq!(activity.spots_left(), 0);
    }

    #[test]
    fn test_view_serializes_day_as_joined_string() {
        let mut activity = sample();
        activity.day = "Tuesday,Thursday".parse().unwrap();

        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["name"], "Math Club");
        assert_eq!(json["day"], "Tuesday,Thursday");
        assert_eq!(json["participants"][0], "james@mergington.edu");
    }

    #[test]
    fn test_day_deserializes_from_list() {
        let yaml = r#"
name: Art Club
description: Painting
schedule: Thursdays
max_participants: 15
category: Club
day: [Thursday, Saturday]
time: "15:30"
"#;
        let activity: Activity = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(activity.day.to_string(), "Thursday,Saturday");
        assert!(activity.participants.is_empty());
    }
}
