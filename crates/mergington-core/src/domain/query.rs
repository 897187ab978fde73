//! Activity query: filtering and sorting over registry snapshots

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::activity::Activity;
use super::weekday::Weekday;

/// Field to sort query results by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Activity name
    Name,
    /// Start time (`HH:MM`)
    Time,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

/// Filters and ordering for listing activities
///
/// Every filter is optional and filters combine with logical AND. Without a
/// sort key the result keeps registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityQuery {
    /// Exact category match, ignoring case
    pub category: Option<String>,
    /// Activity must meet on this day
    pub day: Option<Weekday>,
    /// Substring of name or description, ignoring case
    pub search: Option<String>,
    /// Sort field
    pub sort_by: Option<SortKey>,
    /// Sort direction, ascending by default
    pub sort_order: SortOrder,
}

impl ActivityQuery {
    /// Query with no filters and no sorting
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to activities meeting on `day`
    pub fn with_day(mut self, day: Weekday) -> Self {
        self.day = Some(day);
        self
    }

    /// Restrict to activities whose name or description contains `search`
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sort by `key` in `order`
    pub fn sorted(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = Some(key);
        self.sort_order = order;
        self
    }

    /// Whether a single activity passes every filter
    pub fn matches(&self, activity: &Activity) -> bool {
        let category_match = match &self.category {
            Some(category) => activity.category.to_lowercase() == category.to_lowercase(),
            None => true,
        };

        let day_match = match self.day {
            Some(day) => activity.day.contains(day),
            None => true,
        };

        let search_match = match &self.search {
            Some(search) => {
                let needle = search.to_lowercase();
                activity.name.to_lowercase().contains(&needle)
                    || activity.description.to_lowercase().contains(&needle)
            }
            None => true,
        };

        category_match && day_match && search_match
    }

    /// Filter then sort a registry snapshot.
    ///
    /// The sort is stable, so activities with equal keys keep their filtered
    /// order in both directions.
    pub fn apply(&self, activities: Vec<Activity>) -> Vec<Activity> {
        let mut filtered: Vec<Activity> = activities
            .into_iter()
            .filter(|activity| self.matches(activity))
            .collect();

        if let Some(key) = self.sort_by {
            filtered.sort_by(|a, b| {
                let ordering = compare_by(key, a, b);
                match self.sort_order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        filtered
    }
}

fn compare_by(key: SortKey, a: &Activity, b: &Activity) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Time => a.time.cmp(&b.time),
    }
}
