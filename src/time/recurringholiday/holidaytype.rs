use serde::{
    Serialize,
    Deserialize
};

/// Base classification of how a holiday date is determined.
///
/// `FormulaBased` and `LunarBased` are reserved; no category maps to them.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum HolidayType {
    Fixed,
    RelativeToDate,
    Transferable,
    FormulaBased,
    LunarBased
}

/// Legal category of a Colombian holiday (Law 51 of 1983).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum HolidayCategory {
    FixedCivil,
    FixedReligious,
    EasterBasedReligious,
    TransferableCivil,
    TransferableReligious
}

impl HolidayCategory {
    pub fn holiday_type(&self) -> HolidayType {
        match self {
            HolidayCategory::FixedCivil | HolidayCategory::FixedReligious => HolidayType::Fixed,
            HolidayCategory::EasterBasedReligious => HolidayType::RelativeToDate,
            HolidayCategory::TransferableCivil | HolidayCategory::TransferableReligious => HolidayType::Transferable
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HolidayCategory::FixedCivil => "Fixed Civil Holiday",
            HolidayCategory::FixedReligious => "Fixed Religious Holiday",
            HolidayCategory::EasterBasedReligious => "Easter Based Religious Holiday",
            HolidayCategory::TransferableCivil => "Transferable Civil Holiday",
            HolidayCategory::TransferableReligious => "Easter Based Transferable Religious Holiday"
        }
    }

    pub fn is_civil(&self) -> bool {
        matches!(self, HolidayCategory::FixedCivil | HolidayCategory::TransferableCivil)
    }

    /// Whether the observed date moves to the next Monday.
    pub fn is_transferable(&self) -> bool {
        self.holiday_type() == HolidayType::Transferable
    }
}
