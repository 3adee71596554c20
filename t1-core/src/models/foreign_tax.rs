use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::tax_return::{InputError, require_non_negative};

/// Foreign income tax paid, used only to bound the foreign tax credit.
///
/// These amounts are never themselves taxed; the related foreign income is
/// already part of [`IncomeDetails`](crate::models::IncomeDetails).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForeignTaxPaid {
    pub foreign_business_tax: Decimal,
    pub foreign_non_business_tax: Decimal,
}

impl ForeignTaxPaid {
    /// Combined foreign tax paid across both pools.
    pub fn total(&self) -> Decimal {
        self.foreign_business_tax + self.foreign_non_business_tax
    }

    pub(crate) fn validate(&self) -> Result<(), InputError> {
        require_non_negative("foreignBusinessTax", self.foreign_business_tax)?;
        require_non_negative("foreignNonBusinessTax", self.foreign_non_business_tax)?;
        Ok(())
    }
}
