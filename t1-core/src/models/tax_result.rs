use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Complete output of one tax computation.
///
/// Produced fresh by the engine and never mutated afterwards. Monetary fields
/// are rounded to the cent; the two rate fields are percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    // Income summary
    pub total_income: Decimal,
    pub net_income: Decimal,
    pub taxable_income: Decimal,
    pub split_income_subject_to_tosi: Decimal,

    // Regular tax
    pub federal_tax: Decimal,
    pub provincial_tax: Decimal,
    pub provincial_surtax: Decimal,
    pub tosi_tax: Decimal,
    pub total_tax_before_credits: Decimal,

    // Alternative minimum tax
    pub amt_income: Decimal,
    pub amt_tax: Decimal,
    pub amt_carryforward: Decimal,

    // Non-refundable credits
    pub basic_personal_credit: Decimal,
    pub spouse_credit: Decimal,
    pub dependant_credit: Decimal,
    pub age_credit: Decimal,
    pub pension_credit: Decimal,
    pub disability_credit: Decimal,
    pub tuition_credit: Decimal,
    pub medical_credit: Decimal,
    pub charitable_credit: Decimal,
    pub political_credit: Decimal,
    pub volunteer_credit: Decimal,
    pub foreign_tax_credit: Decimal,
    pub total_non_refundable_credits: Decimal,

    pub total_tax_after_credits: Decimal,

    // Payroll contributions
    pub cpp_contribution: Decimal,
    pub ei_contribution: Decimal,

    // Refundable credits
    pub gst_hst_credit: Decimal,
    pub canada_child_benefit: Decimal,
    pub total_refundable_credits: Decimal,

    // Clawbacks
    pub oas_clawback: Decimal,
    pub ei_benefit_clawback: Decimal,
    pub total_clawbacks: Decimal,

    // Bottom line
    pub total_payable: Decimal,
    pub net_income_after_tax: Decimal,
    /// Total payable over net income, as a percentage.
    pub average_tax_rate: Decimal,
    /// Combined federal + provincial marginal rate at taxable income, as a
    /// percentage.
    pub marginal_tax_rate: Decimal,
}
