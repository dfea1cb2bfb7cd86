use chrono::NaiveDate;

use crate::holidayerror::{HolidayError, Result};

/// Gregorian Easter Sunday by the Meeus/Jones/Butcher algorithm.
///
/// Integer arithmetic only. The result is meaningful for years from 1583 on;
/// earlier years return whatever the formula yields, or `InvalidArgument` when
/// that is not a calendar date.
pub fn calculate_easter_sunday(year: i32) -> Result<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    let month = n / 31;
    let day = n % 31 + 1;

    if month < 1 || day < 1 {
        return Err(HolidayError::invalid_year(year));
    }

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or_else(|| HolidayError::invalid_year(year))
}
