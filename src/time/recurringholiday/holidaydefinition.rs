use chrono::NaiveDate;

use crate::holidayerror::{HolidayError, Result};
use super::easterrelatedholiday::EasterRelatedHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::holidaytype::{HolidayCategory, HolidayType};
use super::mondaytransfer::TransferRule;
use super::recurringholiday::RecurringHoliday;
use super::resolvedholiday::ResolvedHoliday;

/// How a definition finds its base date each year.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HolidayRule {
    FixedDate(FixedDateHoliday),
    EasterRelated(EasterRelatedHoliday)
}

impl RecurringHoliday for HolidayRule {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate> {
        match self {
            HolidayRule::FixedDate(holiday) => holiday.get_holiday(year),
            HolidayRule::EasterRelated(holiday) => holiday.get_holiday(year)
        }
    }
}

/// One entry of a holiday catalog.
///
/// Built only through [`HolidayDefinition::fixed_date`] or
/// [`HolidayDefinition::easter_related`], which check that the rule fits the
/// category. The transfer rule is derived from the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayDefinition {
    name: String,
    category: HolidayCategory,
    rule: HolidayRule
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        Err(HolidayError::invalid_definition(name, "name must not be empty"))
    } else {
        Ok(())
    }
}

impl HolidayDefinition {
    pub fn fixed_date(name: impl Into<String>,
                      category: HolidayCategory,
                      month: u32,
                      day: u32) -> Result<HolidayDefinition> {
        let name = name.into();
        check_name(&name)?;
        if category.holiday_type() == HolidayType::RelativeToDate {
            return Err(HolidayError::invalid_definition(&name, "an Easter-based category needs an Easter offset, not a fixed date"));
        }
        let holiday = FixedDateHoliday::new(month, day, TransferRule::for_category(category))
            .ok_or_else(|| HolidayError::invalid_definition(&name, format!("{:02}-{:02} is not a date that occurs every year", month, day)))?;
        Ok(HolidayDefinition {
            name,
            category,
            rule: HolidayRule::FixedDate(holiday)
        })
    }

    pub fn easter_related(name: impl Into<String>,
                          category: HolidayCategory,
                          easter_offset: i32) -> Result<HolidayDefinition> {
        let name = name.into();
        check_name(&name)?;
        if category.holiday_type() == HolidayType::Fixed {
            return Err(HolidayError::invalid_definition(&name, "a fixed category needs a month and day, not an Easter offset"));
        }
        Ok(HolidayDefinition {
            name,
            category,
            rule: HolidayRule::EasterRelated(EasterRelatedHoliday::new(easter_offset, TransferRule::for_category(category)))
        })
    }

    /// Skips validation; the caller guarantees the rule fits the category.
    pub(crate) fn from_rule(name: String, category: HolidayCategory, rule: HolidayRule) -> HolidayDefinition {
        HolidayDefinition { name, category, rule }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    pub fn rule(&self) -> &HolidayRule {
        &self.rule
    }

    pub fn month(&self) -> Option<u32> {
        match self.rule {
            HolidayRule::FixedDate(holiday) => Some(holiday.month()),
            HolidayRule::EasterRelated(_) => None
        }
    }

    pub fn day(&self) -> Option<u32> {
        match self.rule {
            HolidayRule::FixedDate(holiday) => Some(holiday.day()),
            HolidayRule::EasterRelated(_) => None
        }
    }

    pub fn easter_offset(&self) -> Option<i32> {
        match self.rule {
            HolidayRule::FixedDate(_) => None,
            HolidayRule::EasterRelated(holiday) => Some(holiday.shift_days())
        }
    }

    pub fn is_transferable(&self) -> bool {
        self.category.is_transferable()
    }

    pub fn resolve(&self, year: i32) -> Result<ResolvedHoliday> {
        let date = self.rule.get_holiday(year)?;
        Ok(ResolvedHoliday::new(self.name.clone(), self.category, date))
    }
}

impl RecurringHoliday for HolidayDefinition {
    fn get_holiday(&self, year: i32) -> Result<NaiveDate> {
        self.rule.get_holiday(year)
    }
}
