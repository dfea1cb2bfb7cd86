use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::holidayerror::{HolidayError, Result};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::resolvedholiday::ResolvedHoliday;

/// Holidays of a single year as a bitset over day-of-year.
/// 3 × u128 = 384 bits, enough for 366 days.
#[derive(Clone)]
struct YearBitset {
    bits: [u128; 3]
}

impl YearBitset {
    fn new() -> Self {
        YearBitset { bits: [0; 3] }
    }

    /// day_of_year: 0-365, where 0 = Jan 1
    #[inline]
    fn set(&mut self, day_of_year: u32) {
        let block = (day_of_year / 128) as usize;
        let bit = day_of_year % 128;
        if block < 3 {
            self.bits[block] |= 1u128 << bit;
        }
    }

    #[inline]
    fn is_set(&self, day_of_year: u32) -> bool {
        let block = (day_of_year / 128) as usize;
        let bit = day_of_year % 128;
        block < 3 && (self.bits[block] & (1u128 << bit)) != 0
    }

    // Only dates inside `year` are marked; a custom rule may push a holiday
    // into the next year, where `is_holiday` never looks for it.
    fn from_holidays(holidays: &[ResolvedHoliday], year: i32) -> Self {
        let mut bitset = YearBitset::new();
        for holiday in holidays.iter().filter(|h| h.date().year() == year) {
            bitset.set(holiday.date().ordinal0());
        }
        bitset
    }

    fn count_holidays(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }
}

struct PrecomputedYear {
    holidays: Vec<ResolvedHoliday>,
    bitset: YearBitset
}

/// Caches the resolved holidays of `[start_year, end_year]` of a raw calendar.
///
/// Queries inside the range are answered from the cache (`is_holiday` is a
/// single bitset lookup); years outside it fall back to the raw calendar.
/// Answers are identical to the raw calendar's either way.
pub struct PrecomputedHolidayCalendar<C: HolidayCalendar> {
    raw_calendar: C,
    start_year: i32,
    years: Vec<PrecomputedYear>
}

impl<C: HolidayCalendar> PrecomputedHolidayCalendar<C> {
    /// Fails with `InvalidArgument` if `end_year < start_year` or if any year in
    /// the range cannot be resolved.
    pub fn new(raw_calendar: C, start_year: i32, end_year: i32) -> Result<PrecomputedHolidayCalendar<C>> {
        if end_year < start_year {
            return Err(HolidayError::InvalidArgument(
                format!("precomputation range {}..={} is empty", start_year, end_year)));
        }

        let mut years = Vec::new();
        for year in start_year..=end_year {
            let holidays = raw_calendar.resolve_holidays(year)?;
            let bitset = YearBitset::from_holidays(&holidays, year);
            years.push(PrecomputedYear { holidays, bitset });
        }

        debug!("precomputed holidays for {}..={}", start_year, end_year);
        Ok(PrecomputedHolidayCalendar {
            raw_calendar,
            start_year,
            years
        })
    }

    pub fn raw_calendar(&self) -> &C {
        &self.raw_calendar
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + (self.len() as i32) - 1
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn in_precomputation_range(&self, year: i32) -> bool {
        year >= self.start_year && year <= self.end_year()
    }

    /// Number of distinct holiday dates cached for `year`.
    pub fn distinct_holiday_count(&self, year: i32) -> Option<u32> {
        self.cached(year).map(|y| y.bitset.count_holidays())
    }

    fn cached(&self, year: i32) -> Option<&PrecomputedYear> {
        if self.in_precomputation_range(year) {
            self.years.get((year - self.start_year) as usize)
        } else {
            None
        }
    }
}

impl<C: HolidayCalendar> HolidayCalendar for PrecomputedHolidayCalendar<C> {
    fn resolve_holidays(&self, year: i32) -> Result<Vec<ResolvedHoliday>> {
        match self.cached(year) {
            Some(cached) => Ok(cached.holidays.clone()),
            None => self.raw_calendar.resolve_holidays(year)
        }
    }

    #[inline]
    fn is_holiday(&self, d: NaiveDate) -> Result<bool> {
        match self.cached(d.year()) {
            Some(cached) => Ok(cached.bitset.is_set(d.ordinal0())),
            None => self.raw_calendar.is_holiday(d)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::catalogcalendar::CatalogCalendar;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_bookkeeping() {
        let cal = PrecomputedHolidayCalendar::new(CatalogCalendar::colombia(), 2020, 2030).unwrap();
        assert_eq!(cal.len(), 11);
        assert_eq!(cal.end_year(), 2030);
        assert!(cal.in_precomputation_range(2025));
        assert!(!cal.in_precomputation_range(2031));
        assert_eq!(cal.distinct_holiday_count(2024), Some(18));
        assert_eq!(cal.distinct_holiday_count(2014), None);
    }

    #[test]
    fn empty_range_rejected() {
        let result = PrecomputedHolidayCalendar::new(CatalogCalendar::colombia(), 2030, 2020);
        assert!(matches!(result, Err(HolidayError::InvalidArgument(_))));
    }

    #[test]
    fn matches_raw_calendar_inside_and_outside_range() {
        let raw = CatalogCalendar::colombia();
        let cal = PrecomputedHolidayCalendar::new(raw.clone(), 2023, 2025).unwrap();
        for year in [2010, 2023, 2024, 2025, 2040] {
            assert_eq!(cal.holiday_dates_for_year(year).unwrap(), raw.holiday_dates_for_year(year).unwrap());
        }
        assert!(cal.is_holiday(date(2024, 1, 8)).unwrap());
        assert!(!cal.is_holiday(date(2024, 1, 6)).unwrap());
        assert!(cal.is_holiday(date(2040, 12, 25)).unwrap());
        assert!(cal.is_long_weekend(date(2024, 10, 10)).unwrap());
    }

    #[test]
    fn collision_year_has_seventeen_distinct_dates() {
        let cal = PrecomputedHolidayCalendar::new(CatalogCalendar::colombia(), 2014, 2014).unwrap();
        assert_eq!(cal.distinct_holiday_count(2014), Some(17));
        assert_eq!(cal.resolve_holidays(2014).unwrap().len(), 18);
    }
}
