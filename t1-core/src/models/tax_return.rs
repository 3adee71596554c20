use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    AdvancedDeductions, DeductionsCredits, ForeignTaxPaid, IncomeDetails, PensionSplitting,
    PersonalInfo,
};

/// Errors raised when an input record fails boundary validation.
///
/// Field names in messages use the wire (camelCase) spelling, matching the
/// schema the upstream extraction layer produces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} cannot be negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("expected {expected} dependant ages, got {actual}")]
    DependantAgesMismatch { expected: usize, actual: usize },

    #[error("expected {expected} dependant disability flags, got {actual}")]
    DependantDisabilitiesMismatch { expected: usize, actual: usize },

    #[error("pension split {split} exceeds half of eligible pension income {eligible}")]
    SplitExceedsEligible { split: Decimal, eligible: Decimal },
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), InputError> {
    if value < Decimal::ZERO {
        return Err(InputError::NegativeAmount { field, value });
    }
    Ok(())
}

/// One complete input record: jurisdiction plus everything the pipeline
/// consumes. All sections default to empty, so sparse upstream records
/// deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxReturn {
    /// Two-letter jurisdiction code, e.g. "ON".
    pub province: String,
    pub personal_info: PersonalInfo,
    pub income: IncomeDetails,
    pub deductions: DeductionsCredits,
    pub advanced_deductions: AdvancedDeductions,
    pub foreign_tax: ForeignTaxPaid,
    pub pension_splitting: PensionSplitting,
}

impl TaxReturn {
    /// Validates every section of the record.
    ///
    /// The calculation pipeline assumes non-negative amounts throughout, so
    /// this runs before any arithmetic.
    pub fn validate(&self) -> Result<(), InputError> {
        self.personal_info.validate()?;
        self.income.validate()?;
        self.deductions.validate()?;
        self.advanced_deductions.validate()?;
        self.foreign_tax.validate()?;
        self.pension_splitting.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_record_validates() {
        assert_eq!(TaxReturn::default().validate(), Ok(()));
    }

    #[test]
    fn validate_surfaces_errors_from_any_section() {
        let mut tax_return = TaxReturn::default();
        tax_return.deductions.union_dues = dec!(-80.00);

        assert_eq!(
            tax_return.validate(),
            Err(InputError::NegativeAmount {
                field: "unionDues",
                value: dec!(-80.00),
            })
        );
    }
}
