use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::holidayerror::{parse_json_value, HolidayError, Result};
use crate::time::calendar::catalogcalendar::CatalogCalendar;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycatalog::HolidayCatalog;
use crate::time::calendar::precomputedholidaycalendar::PrecomputedHolidayCalendar;
use crate::time::recurringholiday::holidaydefinition::HolidayDefinition;
use crate::time::recurringholiday::holidaytype::HolidayCategory;

#[derive(Deserialize)]
struct HolidayDefinitionJsonProp {
    name: String,
    category: HolidayCategory,
    #[serde(default)]
    month: Option<u32>,
    #[serde(default)]
    day: Option<u32>,
    #[serde(default)]
    easter_offset: Option<i32>
}

fn holiday_definition_from_json(json_value: serde_json::Value) -> Result<HolidayDefinition> {
    let prop: HolidayDefinitionJsonProp = parse_json_value(json_value)?;
    match (prop.month, prop.day, prop.easter_offset) {
        (Some(month), Some(day), None) => HolidayDefinition::fixed_date(prop.name, prop.category, month, day),
        (None, None, Some(offset)) => HolidayDefinition::easter_related(prop.name, prop.category, offset),
        _ => Err(HolidayError::invalid_definition(&prop.name, "give either month and day, or easter_offset"))
    }
}

#[derive(Deserialize)]
struct PrecomputationJsonProp {
    apply: bool,
    #[serde(default)]
    start_year: i32,
    #[serde(default)]
    end_year: i32
}

#[derive(Deserialize)]
struct HolidayCalendarJsonProp {
    name: String,
    #[serde(default)]
    holidays: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    precomputation: Option<PrecomputationJsonProp>
}

fn holiday_calendar_from_json(json_value: serde_json::Value) -> Result<(String, Arc<dyn HolidayCalendar>)> {
    let prop: HolidayCalendarJsonProp = parse_json_value(json_value)?;

    let catalog = match prop.holidays {
        Some(holiday_jsons) => {
            let mut definitions = Vec::with_capacity(holiday_jsons.len());
            for holiday_json in holiday_jsons {
                definitions.push(holiday_definition_from_json(holiday_json)?);
            }
            Arc::new(HolidayCatalog::new(definitions)?)
        },
        None => HolidayCatalog::shared_colombia()
    };
    let raw_calendar = CatalogCalendar::new(catalog);

    let calendar: Arc<dyn HolidayCalendar> = match prop.precomputation {
        Some(precomputation) if precomputation.apply => Arc::new(PrecomputedHolidayCalendar::new(
            raw_calendar,
            precomputation.start_year,
            precomputation.end_year
        )?),
        _ => Arc::new(raw_calendar)
    };
    Ok((prop.name, calendar))
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    holiday_calendar: Vec<serde_json::Value>
}

/// Named holiday calendars loaded from JSON.
///
/// ```json
/// { "holiday_calendar": [
///     { "name": "Colombia",
///       "precomputation": { "apply": true, "start_year": 2020, "end_year": 2040 } },
///     { "name": "Semana Santa",
///       "holidays": [ { "name": "Viernes Santo", "category": "EasterBasedReligious", "easter_offset": -2 } ] }
/// ] }
/// ```
///
/// A calendar without `holidays` uses the Colombian catalog.
#[derive(Default)]
pub struct Configuration {
    holiday_calendars: HashMap<String, Arc<dyn HolidayCalendar>>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        debug!("loading configuration from {}", file_path.as_ref().display());
        Configuration::from_json_value(json_value)
    }

    pub fn from_json_str(text: &str) -> Result<Configuration> {
        let json_value: serde_json::Value = serde_json::from_str(text)?;
        Configuration::from_json_value(json_value)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<Configuration> {
        let json_prop: ConfigurationJsonProp = parse_json_value(json_value)?;
        let mut configuration = Configuration::new();
        for calendar_json in json_prop.holiday_calendar {
            let (name, calendar) = holiday_calendar_from_json(calendar_json)?;
            if configuration.holiday_calendars.contains_key(&name) {
                return Err(HolidayError::invalid_definition(&name, "calendar name appears more than once"));
            }
            debug!("loaded holiday calendar '{}'", name);
            configuration.holiday_calendars.insert(name, calendar);
        }
        Ok(configuration)
    }

    pub fn insert_holiday_calendar(&mut self, name: impl Into<String>, calendar: Arc<dyn HolidayCalendar>) {
        self.holiday_calendars.insert(name.into(), calendar);
    }

    pub fn holiday_calendar(&self, name: &str) -> Result<Arc<dyn HolidayCalendar>> {
        self.holiday_calendars
            .get(name)
            .cloned()
            .ok_or_else(|| HolidayError::NameNotFound(name.to_owned()))
    }

    pub fn holiday_calendar_names(&self) -> impl Iterator<Item = &str> {
        self.holiday_calendars.keys().map(|name| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_catalog_when_holidays_missing() {
        let config = Configuration::from_json_value(json!({
            "holiday_calendar": [ { "name": "Colombia" } ]
        })).unwrap();
        let cal = config.holiday_calendar("Colombia").unwrap();
        assert_eq!(cal.resolve_holidays(2024).unwrap().len(), 18);
        assert!(cal.is_holiday(date(2024, 1, 8)).unwrap());
    }

    #[test]
    fn custom_holidays() {
        let config = Configuration::from_json_value(json!({
            "holiday_calendar": [ {
                "name": "Mini",
                "holidays": [
                    { "name": "Navidad", "category": "FixedReligious", "month": 12, "day": 25 },
                    { "name": "Ascensión del Señor", "category": "TransferableReligious", "easter_offset": 39 }
                ]
            } ]
        })).unwrap();
        let cal = config.holiday_calendar("Mini").unwrap();
        assert_eq!(cal.holiday_dates_for_year(2024).unwrap(), vec![date(2024, 5, 13), date(2024, 12, 25)]);
    }

    #[test]
    fn definition_needs_exactly_one_rule() {
        let both = holiday_definition_from_json(json!({
            "name": "Mixto", "category": "TransferableCivil", "month": 1, "day": 1, "easter_offset": 3
        }));
        assert!(matches!(both, Err(HolidayError::InvalidDefinition { .. })));
        let neither = holiday_definition_from_json(json!({ "name": "Nada", "category": "FixedCivil" }));
        assert!(matches!(neither, Err(HolidayError::InvalidDefinition { .. })));
    }

    #[test]
    fn unknown_category_is_parse_error() {
        let result = holiday_definition_from_json(json!({ "name": "Luna", "category": "LunarBased", "month": 1, "day": 1 }));
        assert!(matches!(result, Err(HolidayError::JsonParseError(_))));
    }

    #[test]
    fn missing_calendar() {
        let config = Configuration::new();
        assert!(matches!(config.holiday_calendar("Colombia"), Err(HolidayError::NameNotFound(_))));
    }

    #[test]
    fn duplicate_calendar_rejected() {
        let result = Configuration::from_json_value(json!({
            "holiday_calendar": [ { "name": "Colombia" }, { "name": "Colombia" } ]
        }));
        assert!(matches!(result, Err(HolidayError::InvalidDefinition { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Configuration::from_reader("/nonexistent/holidays.json");
        assert!(matches!(result, Err(HolidayError::IOError(_))));
    }

    #[test]
    fn insert_and_list() {
        let mut config = Configuration::new();
        config.insert_holiday_calendar("Colombia", Arc::new(CatalogCalendar::colombia()));
        let names: Vec<&str> = config.holiday_calendar_names().collect();
        assert_eq!(names, vec!["Colombia"]);
    }
}
