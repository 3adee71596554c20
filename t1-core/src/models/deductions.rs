use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::tax_return::{InputError, require_non_negative};

/// Claimed deductions and credit-eligible amounts.
///
/// Each field is the amount claimed, independent of any cap applied later in
/// the computation (the political contribution credit, for example, is capped
/// when the credit is computed, not here).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeductionsCredits {
    pub rrsp_contribution: Decimal,
    pub union_dues: Decimal,
    pub childcare_expenses: Decimal,
    pub alimony_paid: Decimal,
    pub medical_expenses: Decimal,
    pub tuition_fees: Decimal,
    pub charitable_donations: Decimal,
    pub political_contributions: Decimal,
}

impl DeductionsCredits {
    pub(crate) fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("rrspContribution", self.rrsp_contribution),
            ("unionDues", self.union_dues),
            ("childcareExpenses", self.childcare_expenses),
            ("alimonyPaid", self.alimony_paid),
            ("medicalExpenses", self.medical_expenses),
            ("tuitionFees", self.tuition_fees),
            ("charitableDonations", self.charitable_donations),
            ("politicalContributions", self.political_contributions),
        ] {
            require_non_negative(field, value)?;
        }
        Ok(())
    }
}

/// Business and investment deductions applied against total income.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedDeductions {
    pub business_expenses: Decimal,
    /// Capital cost allowance claimed; partially added back for AMT.
    pub capital_cost_allowance: Decimal,
    pub non_capital_losses_applied: Decimal,
    pub farm_losses_applied: Decimal,
}

impl AdvancedDeductions {
    pub(crate) fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("businessExpenses", self.business_expenses),
            ("capitalCostAllowance", self.capital_cost_allowance),
            ("nonCapitalLossesApplied", self.non_capital_losses_applied),
            ("farmLossesApplied", self.farm_losses_applied),
        ] {
            require_non_negative(field, value)?;
        }
        Ok(())
    }
}
