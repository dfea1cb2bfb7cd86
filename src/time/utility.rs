use chrono::NaiveDate;

use crate::holidayerror::{HolidayError, Result};

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Builds a civil date, mapping an unrepresentable one to `InvalidArgument`.
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        HolidayError::InvalidArgument(format!("{:04}-{:02}-{:02} is not a valid calendar date", year, month, day))
    })
}

/// Rejects years chrono cannot represent in full.
pub fn check_year(year: i32) -> Result<()> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    let last = NaiveDate::from_ymd_opt(year, 12, 31);
    match (first, last) {
        (Some(_), Some(_)) => Ok(()),
        _ => Err(HolidayError::invalid_year(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap(2024));
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_of_month(2024, 2), 29);
        assert_eq!(days_of_month(2023, 2), 28);
        assert_eq!(days_of_month(2023, 12), 31);
        assert_eq!(days_of_month(2023, 11), 30);
    }

    #[test]
    fn year_range() {
        assert!(check_year(2024).is_ok());
        assert!(check_year(i32::MAX).is_err());
        assert!(check_year(i32::MIN).is_err());
    }

    #[test]
    fn invalid_ymd() {
        assert!(ymd(2023, 2, 29).is_err());
        assert_eq!(ymd(2024, 2, 29).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
