use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::holidayerror::{HolidayError, Result};
use crate::time::recurringholiday::mondaytransfer::following_monday;
use crate::time::recurringholiday::resolvedholiday::ResolvedHoliday;
use crate::time::utility::{days_of_month, ymd};

const ONE_DAY: Days = Days::new(1);

fn step(d: NaiveDate, forward: bool) -> Result<NaiveDate> {
    let next = if forward {
        d.checked_add_days(ONE_DAY)
    } else {
        d.checked_sub_days(ONE_DAY)
    };
    next.ok_or_else(|| HolidayError::out_of_range("the business day search"))
}

/// Holiday queries over a year-by-year holiday list.
///
/// Implementors provide [`resolve_holidays`](HolidayCalendar::resolve_holidays);
/// every other query is derived from it. Next/previous lookups stay inside the
/// calendar year of the given date and never roll over into a neighbouring year.
///
/// Weekends are Saturday and Sunday; a business day is neither a weekend day
/// nor a holiday.
pub trait HolidayCalendar: Send + Sync {
    /// Every holiday observed in `year`, sorted by date.
    fn resolve_holidays(&self, year: i32) -> Result<Vec<ResolvedHoliday>>;

    fn holiday_dates_for_year(&self, year: i32) -> Result<Vec<NaiveDate>> {
        Ok(self.resolve_holidays(year)?
            .iter()
            .map(|holiday| holiday.date())
            .collect())
    }

    fn get_holiday_set(&self, year: i32) -> Result<HashSet<NaiveDate>> {
        Ok(self.holiday_dates_for_year(year)?.into_iter().collect())
    }

    fn is_holiday(&self, d: NaiveDate) -> Result<bool> {
        Ok(self.resolve_holidays(d.year())?
            .iter()
            .any(|holiday| holiday.date() == d))
    }

    /// First holiday strictly after `d` in the same calendar year.
    fn next_holiday(&self, d: NaiveDate) -> Result<Option<ResolvedHoliday>> {
        Ok(self.resolve_holidays(d.year())?
            .into_iter()
            .find(|holiday| holiday.date() > d))
    }

    /// Last holiday strictly before `d` in the same calendar year.
    fn previous_holiday(&self, d: NaiveDate) -> Result<Option<ResolvedHoliday>> {
        Ok(self.resolve_holidays(d.year())?
            .into_iter()
            .filter(|holiday| holiday.date() < d)
            .last())
    }

    fn next_holiday_date(&self, d: NaiveDate) -> Result<Option<NaiveDate>> {
        Ok(self.next_holiday(d)?.map(|holiday| holiday.date()))
    }

    fn previous_holiday_date(&self, d: NaiveDate) -> Result<Option<NaiveDate>> {
        Ok(self.previous_holiday(d)?.map(|holiday| holiday.date()))
    }

    /// Whether the first Monday strictly after `d` is a holiday.
    ///
    /// A Monday looks a full week ahead.
    fn is_long_weekend(&self, d: NaiveDate) -> Result<bool> {
        self.is_holiday(following_monday(d)?)
    }

    fn is_weekend(&self, d: NaiveDate) -> bool {
        matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
    }

    fn is_business_day(&self, d: NaiveDate) -> Result<bool> {
        Ok(!self.is_weekend(d) && !self.is_holiday(d)?)
    }

    /// Moves `n` business days from `horizon`; negative `n` moves backwards.
    /// `n == 0` returns `horizon` unchanged.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Result<NaiveDate> {
        let forward = n >= 0;
        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = step(d, forward)?;
            m -= self.is_business_day(d)? as u32;
        }
        Ok(d)
    }

    fn next_business_day(&self, d: NaiveDate) -> Result<NaiveDate> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Result<NaiveDate> {
        self.shift_n_business_day(d, -1)
    }

    fn last_business_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate> {
        if !(1..=12).contains(&month) {
            return Err(HolidayError::InvalidArgument(format!("month {} is out of range", month)));
        }
        let mut eom = ymd(year, month, days_of_month(year, month))?;
        while !self.is_business_day(eom)? {
            eom = step(eom, false)?;
        }
        Ok(eom)
    }

    fn first_business_day_of_month(&self, year: i32, month: u32) -> Result<NaiveDate> {
        let mut fom = ymd(year, month, 1)?;
        while !self.is_business_day(fom)? {
            fom = step(fom, true)?;
        }
        Ok(fom)
    }
}
