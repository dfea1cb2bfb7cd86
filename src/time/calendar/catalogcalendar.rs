use std::sync::Arc;

use crate::holidayerror::Result;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycatalog::HolidayCatalog;
use crate::time::recurringholiday::resolvedholiday::ResolvedHoliday;

/// Holiday calendar that resolves a [`HolidayCatalog`] on every query.
///
/// Nothing is cached; wrap it in a
/// [`PrecomputedHolidayCalendar`](crate::time::calendar::precomputedholidaycalendar::PrecomputedHolidayCalendar)
/// for repeated lookups over a fixed range of years.
#[derive(Debug, Clone)]
pub struct CatalogCalendar {
    catalog: Arc<HolidayCatalog>
}

impl CatalogCalendar {
    pub fn new(catalog: Arc<HolidayCatalog>) -> CatalogCalendar {
        CatalogCalendar { catalog }
    }

    /// Calendar over the shared Colombian catalog.
    pub fn colombia() -> CatalogCalendar {
        CatalogCalendar::new(HolidayCatalog::shared_colombia())
    }

    pub fn catalog(&self) -> &HolidayCatalog {
        &self.catalog
    }
}

impl Default for CatalogCalendar {
    fn default() -> Self {
        CatalogCalendar::colombia()
    }
}

impl HolidayCalendar for CatalogCalendar {
    fn resolve_holidays(&self, year: i32) -> Result<Vec<ResolvedHoliday>> {
        self.catalog.resolve(year)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::holidayerror::HolidayError;
    use crate::time::recurringholiday::holidaydefinition::HolidayDefinition;
    use crate::time::recurringholiday::holidaytype::HolidayCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epiphany_2024_is_transferred() {
        let cal = CatalogCalendar::colombia();
        assert!(!cal.is_holiday(date(2024, 1, 6)).unwrap());
        assert!(cal.is_holiday(date(2024, 1, 8)).unwrap());
    }

    #[test]
    fn holy_week_2024() {
        let cal = CatalogCalendar::colombia();
        assert!(cal.is_holiday(date(2024, 3, 28)).unwrap());
        assert!(cal.is_holiday(date(2024, 3, 29)).unwrap());
    }

    #[test]
    fn ordinary_days() {
        let cal = CatalogCalendar::colombia();
        assert!(!cal.is_holiday(date(2024, 2, 13)).unwrap());
        assert!(!cal.is_holiday(date(2024, 3, 20)).unwrap());
        assert!(!cal.is_holiday(date(2024, 4, 10)).unwrap());
    }

    #[test]
    fn next_holiday() {
        let cal = CatalogCalendar::colombia();
        assert_eq!(cal.next_holiday(date(2024, 1, 5)).unwrap().map(|h| h.date()), Some(date(2024, 1, 8)));
        assert_eq!(cal.next_holiday(date(2024, 3, 29)).unwrap().map(|h| h.date()), Some(date(2024, 5, 1)));
        assert_eq!(cal.next_holiday(date(2024, 12, 31)).unwrap(), None);
        assert_eq!(cal.next_holiday_date(date(2024, 12, 24)).unwrap(), Some(date(2024, 12, 25)));
    }

    #[test]
    fn previous_holiday() {
        let cal = CatalogCalendar::colombia();
        let previous = cal.previous_holiday(date(2024, 1, 5)).unwrap().unwrap();
        assert_eq!(previous.date(), date(2024, 1, 1));
        assert_eq!(previous.name(), "Año Nuevo");
        assert_eq!(cal.previous_holiday(date(2024, 1, 1)).unwrap(), None);
        assert_eq!(cal.previous_holiday_date(date(2024, 12, 31)).unwrap(), Some(date(2024, 12, 25)));
    }

    #[test]
    fn long_weekend() {
        let cal = CatalogCalendar::colombia();
        // Monday 2024-10-14 is the transferred Día de la Diversidad Étnica y Cultural
        assert!(cal.is_long_weekend(date(2024, 10, 10)).unwrap());
        assert!(cal.is_long_weekend(date(2024, 10, 13)).unwrap());
        // from a Monday the next Monday is a week away
        assert!(!cal.is_long_weekend(date(2024, 10, 14)).unwrap());
        assert!(cal.is_long_weekend(date(2024, 10, 7)).unwrap());
        assert!(!cal.is_long_weekend(date(2024, 2, 13)).unwrap());
    }

    #[test]
    fn long_weekend_across_new_year() {
        let cal = CatalogCalendar::colombia();
        // the Monday after 2023-12-28 is 2024-01-01
        assert!(cal.is_long_weekend(date(2023, 12, 28)).unwrap());
    }

    #[test]
    fn business_days() {
        let cal = CatalogCalendar::colombia();
        // Friday 2024-01-05, weekend, holiday Monday 2024-01-08
        assert_eq!(cal.next_business_day(date(2024, 1, 5)).unwrap(), date(2024, 1, 9));
        assert_eq!(cal.previous_business_day(date(2024, 1, 9)).unwrap(), date(2024, 1, 5));
        assert_eq!(cal.shift_n_business_day(date(2024, 1, 5), 0).unwrap(), date(2024, 1, 5));
        assert_eq!(cal.shift_n_business_day(date(2024, 3, 27), 2).unwrap(), date(2024, 4, 2));
        assert!(!cal.is_business_day(date(2024, 1, 6)).unwrap());
        assert!(cal.is_business_day(date(2024, 2, 13)).unwrap());
    }

    #[test]
    fn month_edges() {
        let cal = CatalogCalendar::colombia();
        // 2024-01-01 holiday Monday
        assert_eq!(cal.first_business_day_of_month(2024, 1).unwrap(), date(2024, 1, 2));
        // 2024-03-31 Sunday, 29th Good Friday, 28th Holy Thursday
        assert_eq!(cal.last_business_day_of_month(2024, 3).unwrap(), date(2024, 3, 27));
        assert!(matches!(cal.last_business_day_of_month(2024, 13), Err(HolidayError::InvalidArgument(_))));
    }

    #[test]
    fn holiday_set_collapses_shared_dates() {
        let cal = CatalogCalendar::colombia();
        assert_eq!(cal.get_holiday_set(2024).unwrap().len(), 18);
        assert_eq!(cal.get_holiday_set(2014).unwrap().len(), 17);
    }

    #[test]
    fn custom_catalog() {
        let catalog = HolidayCatalog::new(vec![
            HolidayDefinition::fixed_date("Navidad", HolidayCategory::FixedReligious, 12, 25).unwrap(),
            HolidayDefinition::easter_related("Viernes Santo", HolidayCategory::EasterBasedReligious, -2).unwrap()
        ]).unwrap();
        let cal = CatalogCalendar::new(Arc::new(catalog));
        let dates = cal.holiday_dates_for_year(2024).unwrap();
        assert_eq!(dates, vec![date(2024, 3, 29), date(2024, 12, 25)]);
        assert!(!cal.is_holiday(date(2024, 1, 1)).unwrap());
    }

    #[test]
    fn unrepresentable_date_range() {
        let cal = CatalogCalendar::colombia();
        assert!(matches!(cal.is_long_weekend(NaiveDate::MAX), Err(HolidayError::InvalidArgument(_))));
    }
}
