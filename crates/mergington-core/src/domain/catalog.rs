//! Seed catalog for the activity registry
//!
//! The registry is populated once at start-up, either from the built-in
//! Mergington catalog or from a YAML (or JSON) file holding a list of
//! activities. Loading validates every registry invariant up front.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

use super::activity::{Activity, WeekdaySet};
use super::weekday::Weekday;
use crate::error::{RosterError, RosterResult};

/// Validated, ordered list of activities used to seed a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    activities: Vec<Activity>,
}

impl Catalog {
    /// Validate `activities` and wrap them in a catalog, keeping their order
    pub fn new(activities: Vec<Activity>) -> RosterResult<Self> {
        let mut names = HashSet::new();
        for activity in &activities {
            validate_activity(activity)?;
            if !names.insert(activity.name.as_str()) {
                return Err(RosterError::InvalidCatalog(format!(
                    "duplicate activity name: {}",
                    activity.name
                )));
            }
        }
        debug!(activities = activities.len(), "Catalog validated");
        Ok(Self { activities })
    }

    /// Parse a YAML document containing a list of activities
    pub fn from_yaml_str(source: &str) -> RosterResult<Self> {
        let activities: Vec<Activity> = serde_yaml::from_str(source)?;
        Self::new(activities)
    }

    /// Read and parse a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> RosterResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            RosterError::InvalidCatalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_yaml_str(&source)?;
        info!(path = %path.display(), activities = catalog.len(), "Loaded activity catalog");
        Ok(catalog)
    }

    /// The built-in Mergington High School catalog
    pub fn default_seed() -> Self {
        use Weekday::*;

        let activities = vec![
            seed_activity(
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
                "Club",
                &[Friday],
                "15:30",
            ),
            seed_activity(
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
                "Class",
                &[Tuesday, Thursday],
                "15:30",
            ),
            seed_activity(
                "Gym Class",
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
                "Sports",
                &[Monday, Wednesday, Friday],
                "14:00",
            ),
            seed_activity(
                "Soccer Team",
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
                "Sports",
                &[Tuesday, Thursday],
                "16:00",
            ),
            seed_activity(
                "Basketball Team",
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
                "Sports",
                &[Wednesday, Friday],
                "15:30",
            ),
            seed_activity(
                "Art Club",
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
                "Club",
                &[Thursday],
                "15:30",
            ),
            seed_activity(
                "Drama Club",
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
                "Club",
                &[Monday, Wednesday],
                "16:00",
            ),
            seed_activity(
                "Math Club",
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
                "Club",
                &[Tuesday],
                "15:30",
            ),
            seed_activity(
                "Debate Team",
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
                "Club",
                &[Friday],
                "16:00",
            ),
        ];

        Self { activities }
    }

    /// Activities in catalog order
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Consume the catalog
    pub fn into_activities(self) -> Vec<Activity> {
        self.activities
    }

    /// Number of activities
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// True for a catalog without activities
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_seed()
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
    category: &str,
    days: &[Weekday],
    time: &str,
) -> Activity {
    Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
        category: category.to_string(),
        day: WeekdaySet::new(days.iter().copied()),
        time: time.to_string(),
    }
}

fn validate_activity(activity: &Activity) -> RosterResult<()> {
    let invalid = |reason: String| Err(RosterError::InvalidCatalog(reason));

    if activity.name.trim().is_empty() {
        return invalid("activity name must not be empty".to_string());
    }
    if activity.max_participants == 0 {
        return invalid(format!("{}: max_participants must be positive", activity.name));
    }
    if activity.participants.len() > activity.max_participants as usize {
        return invalid(format!(
            "{}: {} participants exceed capacity {}",
            activity.name,
            activity.participants.len(),
            activity.max_participants
        ));
    }
    let mut seen = HashSet::new();
    for email in &activity.participants {
        if !seen.insert(email.as_str()) {
            return invalid(format!("{}: duplicate participant {}", activity.name, email));
        }
    }
    if activity.day.is_empty() {
        return invalid(format!("{}: at least one day is required", activity.name));
    }
    if !is_valid_time(&activity.time) {
        return invalid(format!(
            "{}: time {:?} is not zero-padded HH:MM",
            activity.name, activity.time
        ));
    }
    Ok(())
}

/// Zero-padded 24-hour `HH:MM`, the only format whose lexicographic order is chronological
fn is_valid_time(time: &str) -> bool {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let hours = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hours < 24 && minutes < 60
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_seed_is_valid() {
        let seed = Catalog::default_seed();
        assert_eq!(seed.len(), 9);
        let revalidated = Catalog::new(seed.clone().into_activities()).unwrap();
        assert_eq!(revalidated, seed);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let mut activities = Catalog::default_seed().into_activities();
        activities.push(activities[0].clone());
        let err = Catalog::new(activities).unwrap_err();
        assert_eq!(
            err,
            RosterError::InvalidCatalog("duplicate activity name: Chess Club".to_string())
        );
    }

    #[test]
    fn test_rejects_roster_over_capacity() {
        let mut activities = Catalog::default_seed().into_activities();
        activities[0].max_participants = 1;
        assert!(matches!(
            Catalog::new(activities),
            Err(RosterError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_participants_and_bad_time() {
        let mut activities = Catalog::default_seed().into_activities();
        activities[1].participants = vec!["a@mergington.edu".into(), "a@mergington.edu".into()];
        assert!(Catalog::new(activities).is_err());

        let mut activities = Catalog::default_seed().into_activities();
        activities[2].time = "9:00".into();
        assert!(Catalog::new(activities).is_err());
    }

    #[test]
    fn test_time_format() {
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("23:59"));
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time("3:30 PM"));
    }

    #[test]
    fn test_from_path_reads_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
- name: Robotics Club
  description: Build and program robots
  schedule: Saturdays, 10:00 AM - 12:00 PM
  max_participants: 8
  participants: [ada@mergington.edu]
  category: Club
  day: Saturday
  time: "10:00"
- name: Chess Club
  description: Learn strategies
  schedule: Fridays
  max_participants: 12
  category: Club
  day: [Friday]
  time: "15:30"
"#
        )
        .unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        let names: Vec<_> = catalog.activities().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Robotics Club", "Chess Club"]);
        assert!(catalog.activities()[0].day.contains(Weekday::Saturday));
    }

    #[test]
    fn test_from_yaml_reports_parse_errors() {
        let err = Catalog::from_yaml_str("- name: Broken\n  day: Funday\n").unwrap_err();
        assert!(matches!(err, RosterError::InvalidCatalog(_)));
    }
}
