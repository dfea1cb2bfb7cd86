use chrono::{
    Datelike,
    Days,
    NaiveDate
};
use serde::{
    Serialize,
    Deserialize
};

use crate::holidayerror::{HolidayError, Result};
use super::holidaytype::HolidayCategory;

// Indexed by Weekday::num_days_from_monday() (0=Monday, 6=Sunday)
const NEXT_MONDAY_SHIFT: [u64; 7] = [0, 6, 5, 4, 3, 2, 1];
const FOLLOWING_MONDAY_SHIFT: [u64; 7] = [7, 6, 5, 4, 3, 2, 1];

#[inline]
fn shift_by_table(d: NaiveDate, table: &[u64; 7]) -> Result<NaiveDate> {
    let idx = d.weekday().num_days_from_monday() as usize;
    d.checked_add_days(Days::new(table[idx]))
        .ok_or_else(|| HolidayError::out_of_range("the Monday after the given date"))
}

/// Same-or-next Monday: a Monday is returned unchanged.
pub fn next_monday(d: NaiveDate) -> Result<NaiveDate> {
    shift_by_table(d, &NEXT_MONDAY_SHIFT)
}

/// First Monday strictly after `d`; a Monday moves a full week.
pub fn following_monday(d: NaiveDate) -> Result<NaiveDate> {
    shift_by_table(d, &FOLLOWING_MONDAY_SHIFT)
}

/// Monday-transfer rule of Law 51 of 1983 ("Ley de Puentes").
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TransferRule {
    Unadjusted,
    NextMonday
}

impl TransferRule {
    pub fn for_category(category: HolidayCategory) -> TransferRule {
        if category.is_transferable() {
            TransferRule::NextMonday
        } else {
            TransferRule::Unadjusted
        }
    }

    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> Result<NaiveDate> {
        match self {
            TransferRule::Unadjusted => Ok(d),
            TransferRule::NextMonday => next_monday(d)
        }
    }
}
