use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use log::{debug, trace};

use crate::holidayerror::{HolidayError, Result};
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::holidaydefinition::{HolidayDefinition, HolidayRule};
use crate::time::recurringholiday::holidaytype::HolidayCategory;
use crate::time::recurringholiday::mondaytransfer::TransferRule;
use crate::time::recurringholiday::resolvedholiday::ResolvedHoliday;
use crate::time::utility::check_year;

use HolidayCategory::*;

#[derive(Clone, Copy)]
enum CatalogRule {
    FixedDate(u32, u32),
    EasterOffset(i32)
}

#[derive(Clone, Copy)]
struct CatalogEntry {
    name: &'static str,
    category: HolidayCategory,
    rule: CatalogRule
}

const fn fixed(name: &'static str, category: HolidayCategory, month: u32, day: u32) -> CatalogEntry {
    CatalogEntry { name, category, rule: CatalogRule::FixedDate(month, day) }
}

const fn easter(name: &'static str, category: HolidayCategory, offset: i32) -> CatalogEntry {
    CatalogEntry { name, category, rule: CatalogRule::EasterOffset(offset) }
}

fn build(entries: &[CatalogEntry]) -> Vec<HolidayDefinition> {
    entries.iter().map(|entry| entry.to_definition()).collect()
}

impl CatalogEntry {
    fn to_definition(self) -> HolidayDefinition {
        let transfer_rule = TransferRule::for_category(self.category);
        let rule = match self.rule {
            CatalogRule::FixedDate(month, day) => HolidayRule::FixedDate(FixedDateHoliday::new_unchecked(month, day, transfer_rule)),
            CatalogRule::EasterOffset(offset) => HolidayRule::EasterRelated(EasterRelatedHoliday::new(offset, transfer_rule))
        };
        HolidayDefinition::from_rule(self.name.to_owned(), self.category, rule)
    }
}

const COLOMBIAN_FIXED_HOLIDAYS: [CatalogEntry; 6] = [
    fixed("Año Nuevo", FixedCivil, 1, 1),
    fixed("Día del Trabajo", FixedCivil, 5, 1),
    fixed("Día de la Independencia", FixedCivil, 7, 20),
    fixed("Batalla de Boyacá", FixedCivil, 8, 7),
    fixed("Inmaculada Concepción", FixedReligious, 12, 8),
    fixed("Navidad", FixedReligious, 12, 25)
];

const COLOMBIAN_EASTER_BASED_HOLIDAYS: [CatalogEntry; 5] = [
    easter("Jueves Santo", EasterBasedReligious, -3),
    easter("Viernes Santo", EasterBasedReligious, -2),
    easter("Ascensión del Señor", TransferableReligious, 39),
    easter("Corpus Christi", TransferableReligious, 60),
    easter("Sagrado Corazón", TransferableReligious, 68)
];

const COLOMBIAN_TRANSFERABLE_HOLIDAYS: [CatalogEntry; 7] = [
    fixed("Día de los Reyes Magos", TransferableReligious, 1, 6),
    fixed("Día de San José", TransferableReligious, 3, 19),
    fixed("San Pedro y San Pablo", TransferableReligious, 6, 29),
    fixed("Asunción de la Virgen", TransferableReligious, 8, 15),
    fixed("Día de la Diversidad Étnica y Cultural", TransferableCivil, 10, 12),
    fixed("Día de Todos los Santos", TransferableReligious, 11, 1),
    fixed("Independencia de Cartagena", TransferableCivil, 11, 11)
];

/// Immutable table of holiday definitions, kept in three groups:
/// fixed dates, Easter-based dates and Monday-transferred fixed dates.
///
/// Resolution walks the groups in that order, so ties between dates keep
/// this catalog order.
#[derive(Debug, Clone)]
pub struct HolidayCatalog {
    fixed: Vec<HolidayDefinition>,
    easter_based: Vec<HolidayDefinition>,
    transferable: Vec<HolidayDefinition>
}

impl HolidayCatalog {
    /// Groups `definitions` by rule. Names must be unique.
    pub fn new(definitions: Vec<HolidayDefinition>) -> Result<HolidayCatalog> {
        let mut names: HashSet<String> = HashSet::with_capacity(definitions.len());
        let mut fixed = Vec::new();
        let mut easter_based = Vec::new();
        let mut transferable = Vec::new();

        for definition in definitions {
            if !names.insert(definition.name().to_owned()) {
                return Err(HolidayError::invalid_definition(definition.name(), "name appears more than once in the catalog"));
            }
            match definition.rule() {
                HolidayRule::EasterRelated(_) => easter_based.push(definition),
                HolidayRule::FixedDate(_) if definition.is_transferable() => transferable.push(definition),
                HolidayRule::FixedDate(_) => fixed.push(definition)
            }
        }

        debug!("holiday catalog built: {} fixed, {} easter-based, {} transferable",
               fixed.len(), easter_based.len(), transferable.len());
        Ok(HolidayCatalog { fixed, easter_based, transferable })
    }

    /// The 18 public holidays of Colombia.
    pub fn colombia() -> HolidayCatalog {
        debug!("building Colombian holiday catalog");
        HolidayCatalog {
            fixed: build(&COLOMBIAN_FIXED_HOLIDAYS),
            easter_based: build(&COLOMBIAN_EASTER_BASED_HOLIDAYS),
            transferable: build(&COLOMBIAN_TRANSFERABLE_HOLIDAYS)
        }
    }

    /// Process-wide Colombian catalog, built on first use.
    pub fn shared_colombia() -> Arc<HolidayCatalog> {
        static COLOMBIA: OnceLock<Arc<HolidayCatalog>> = OnceLock::new();
        COLOMBIA.get_or_init(|| Arc::new(HolidayCatalog::colombia())).clone()
    }

    pub fn fixed(&self) -> &[HolidayDefinition] {
        &self.fixed
    }

    pub fn easter_based(&self) -> &[HolidayDefinition] {
        &self.easter_based
    }

    pub fn transferable(&self) -> &[HolidayDefinition] {
        &self.transferable
    }

    /// All definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &HolidayDefinition> {
        self.fixed.iter()
            .chain(self.easter_based.iter())
            .chain(self.transferable.iter())
    }

    pub fn len(&self) -> usize {
        self.fixed.len() + self.easter_based.len() + self.transferable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, name: &str) -> Option<&HolidayDefinition> {
        self.iter().find(|definition| definition.name() == name)
    }

    /// One resolved holiday per definition, sorted by date.
    pub fn resolve(&self, year: i32) -> Result<Vec<ResolvedHoliday>> {
        check_year(year)?;
        let mut holidays = Vec::with_capacity(self.len());
        for definition in self.iter() {
            holidays.push(definition.resolve(year)?);
        }
        // stable: equal dates keep catalog order
        holidays.sort();
        trace!("resolved {} holidays for {}", holidays.len(), year);
        Ok(holidays)
    }
}
