//! Colombian public holidays: the yearly holiday list under Law 51 of 1983
//! ("Ley de Puentes"), Easter-relative feasts, and the queries built on it.

pub mod configuration;

pub mod holidayerror;

pub mod time {
    pub mod utility;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod holidaytype;
        pub mod mondaytransfer;
        pub mod eastercalculator;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod holidaydefinition;
        pub mod resolvedholiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod holidaycatalog;
        pub mod catalogcalendar;
        pub mod precomputedholidaycalendar;
    }
}

pub use holidayerror::HolidayError;
pub use time::calendar::catalogcalendar::CatalogCalendar;
pub use time::calendar::holidaycalendar::HolidayCalendar;
pub use time::calendar::holidaycatalog::HolidayCatalog;
pub use time::recurringholiday::eastercalculator::calculate_easter_sunday;
pub use time::recurringholiday::holidaydefinition::HolidayDefinition;
pub use time::recurringholiday::holidaytype::{HolidayCategory, HolidayType};
pub use time::recurringholiday::resolvedholiday::ResolvedHoliday;
