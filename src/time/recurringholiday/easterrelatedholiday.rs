use chrono::{Days, NaiveDate};

use crate::holidayerror::{HolidayError, Result};
use super::eastercalculator::calculate_easter_sunday;
use super::mondaytransfer::TransferRule;
use super::recurringholiday::RecurringHoliday;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct EasterRelatedHoliday {
    shift_days: i32,
    transfer_rule: TransferRule
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i32, transfer_rule: TransferRule) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            shift_days,
            transfer_rule
        }
    }

    pub fn shift_days(&self) -> i32 {
        self.shift_days
    }

    pub fn transfer_rule(&self) -> TransferRule {
        self.transfer_rule
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate> {
        let easter_sunday = calculate_easter_sunday(year)?;
        let shift = Days::new(self.shift_days.unsigned_abs() as u64);
        let base = if self.shift_days >= 0 {
            easter_sunday.checked_add_days(shift)
        } else {
            easter_sunday.checked_sub_days(shift)
        }.ok_or_else(|| HolidayError::out_of_range("the Easter-relative date"))?;
        self.transfer_rule.adjust(base)
    }
}
