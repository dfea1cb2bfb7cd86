use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

use super::holidaytype::HolidayCategory;

/// A holiday definition pinned to its observed date in a given year.
///
/// Identity is the date alone: two resolved holidays are equal when they fall
/// on the same day, whatever their names. Ordering is by date ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedHoliday {
    name: String,
    category: HolidayCategory,
    date: NaiveDate
}

impl ResolvedHoliday {
    pub fn new(name: String, category: HolidayCategory, date: NaiveDate) -> ResolvedHoliday {
        ResolvedHoliday { name, category, date }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl PartialEq for ResolvedHoliday {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for ResolvedHoliday {}

impl Hash for ResolvedHoliday {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

impl PartialOrd for ResolvedHoliday {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ResolvedHoliday {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}
