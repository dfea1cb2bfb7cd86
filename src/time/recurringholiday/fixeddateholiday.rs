use chrono::NaiveDate;

use crate::holidayerror::Result;
use crate::time::utility::{days_of_month, ymd};
use super::mondaytransfer::TransferRule;
use super::recurringholiday::RecurringHoliday;

// Any non-leap year; a day must exist in every year to recur.
const NON_LEAP_YEAR: i32 = 2001;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    transfer_rule: TransferRule
}

impl FixedDateHoliday {
    pub fn new(month: u32, day: u32, transfer_rule: TransferRule) -> Option<FixedDateHoliday> {
        if !(1..=12).contains(&month) || day == 0 || day > days_of_month(NON_LEAP_YEAR, month) {
            None
        } else {
            Some(FixedDateHoliday { month, day, transfer_rule })
        }
    }

    /// For trusted tables whose dates are checked by tests.
    pub(crate) const fn new_unchecked(month: u32, day: u32, transfer_rule: TransferRule) -> FixedDateHoliday {
        FixedDateHoliday { month, day, transfer_rule }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn transfer_rule(&self) -> TransferRule {
        self.transfer_rule
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate> {
        let d = ymd(year, self.month, self.day)?;
        self.transfer_rule.adjust(d)
    }
}
