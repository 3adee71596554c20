use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::tax_return::{InputError, require_non_negative};

/// Personal circumstances affecting a single year's computation.
///
/// This is an immutable snapshot for one return. The dependant lists are
/// positional: entry `i` describes the `i`-th dependant. `dependant_disabilities`
/// may be left empty when no disability information was captured upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub age: u32,
    pub is_married: bool,
    pub spouse_income: Decimal,
    pub spouse_age: u32,
    pub has_disability: bool,
    pub spouse_has_disability: bool,
    pub num_dependants: usize,
    pub dependant_ages: Vec<u32>,
    pub dependant_disabilities: Vec<bool>,
    pub is_student: bool,
    pub is_first_time_buyer: bool,
    pub is_volunteer_firefighter: bool,
    pub is_search_rescue_volunteer: bool,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            // The upstream intake schema defaults unstated ages to 30.
            age: 30,
            is_married: false,
            spouse_income: Decimal::ZERO,
            spouse_age: 30,
            has_disability: false,
            spouse_has_disability: false,
            num_dependants: 0,
            dependant_ages: Vec::new(),
            dependant_disabilities: Vec::new(),
            is_student: false,
            is_first_time_buyer: false,
            is_volunteer_firefighter: false,
            is_search_rescue_volunteer: false,
        }
    }
}

impl PersonalInfo {
    pub(crate) fn validate(&self) -> Result<(), InputError> {
        require_non_negative("spouseIncome", self.spouse_income)?;
        if self.dependant_ages.len() != self.num_dependants {
            return Err(InputError::DependantAgesMismatch {
                expected: self.num_dependants,
                actual: self.dependant_ages.len(),
            });
        }
        if !self.dependant_disabilities.is_empty()
            && self.dependant_disabilities.len() != self.num_dependants
        {
            return Err(InputError::DependantDisabilitiesMismatch {
                expected: self.num_dependants,
                actual: self.dependant_disabilities.len(),
            });
        }
        Ok(())
    }
}
