use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid holiday definition '{name}': {reason}")]
    InvalidDefinition {
        name: String,
        reason: String
    },

    #[error("key '{0}' not found")]
    NameNotFound(String),

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error)
}

impl HolidayError {
    pub fn invalid_year(year: i32) -> HolidayError {
        HolidayError::InvalidArgument(format!("year {} is not a representable calendar year", year))
    }

    pub fn out_of_range(what: &str) -> HolidayError {
        HolidayError::InvalidArgument(format!("{} falls outside the representable date range", what))
    }

    pub fn invalid_definition(name: &str, reason: impl Into<String>) -> HolidayError {
        HolidayError::InvalidDefinition {
            name: name.to_owned(),
            reason: reason.into()
        }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, HolidayError>
    where T: for<'a> Deserialize<'a> {
    serde_json::from_value(json_value).map_err(HolidayError::JsonParseError)
}

pub type Result<T, E = HolidayError> = std::result::Result<T, E>;
