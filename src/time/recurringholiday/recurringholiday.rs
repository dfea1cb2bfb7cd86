use chrono::{Datelike, NaiveDate};

use crate::holidayerror::Result;

pub trait RecurringHoliday {

    /// Observed date of the holiday for `year`, after any Monday transfer.
    fn get_holiday(&self, year: i32) -> Result<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year()).is_ok_and(|holiday| holiday == *d)
    }
}
