use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::tax_return::{InputError, require_non_negative};

/// Income by statutory category for one tax year.
///
/// Every field is a non-negative amount. Loss semantics are carried by the
/// dedicated loss fields (`capital_losses_current`,
/// `net_capital_losses_applied`), never by negative income values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeDetails {
    // Employment
    pub employment_income: Decimal,
    pub employment_benefits: Decimal,
    pub stock_option_benefit: Decimal,
    pub stock_option_deduction_eligible: bool,
    pub commission_income: Decimal,
    pub tips_gratuities: Decimal,

    // Business and self-employment
    pub business_income: Decimal,
    pub professional_income: Decimal,
    pub farming_income: Decimal,
    pub fishing_income: Decimal,
    pub partnership_income: Decimal,

    // Investment
    pub interest_income: Decimal,
    /// Eligible Canadian dividends, pre-gross-up.
    pub canadian_dividend_income: Decimal,
    pub foreign_dividend_income: Decimal,
    pub foreign_business_income: Decimal,
    pub foreign_non_business_income: Decimal,
    pub rental_income: Decimal,
    pub royalty_income: Decimal,

    // Capital gains and losses
    pub capital_gains: Decimal,
    pub capital_losses_current: Decimal,
    /// Net capital losses carried forward from prior years and applied this year.
    pub net_capital_losses_applied: Decimal,

    // Pension and retirement
    pub cpp_qpp_benefits: Decimal,
    pub oas_benefits: Decimal,
    pub private_pension: Decimal,
    pub foreign_pension: Decimal,
    pub rrif_withdrawals: Decimal,
    pub lif_withdrawals: Decimal,
    pub annuity_income: Decimal,

    // Other
    pub ei_benefits: Decimal,
    pub alimony_received: Decimal,
    pub scholarship_income: Decimal,
    pub death_benefits: Decimal,
    pub other_income: Decimal,

    /// Split income allocated from a related business, taxed separately.
    pub split_income_amount: Decimal,
}

impl IncomeDetails {
    pub(crate) fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("employmentIncome", self.employment_income),
            ("employmentBenefits", self.employment_benefits),
            ("stockOptionBenefit", self.stock_option_benefit),
            ("commissionIncome", self.commission_income),
            ("tipsGratuities", self.tips_gratuities),
            ("businessIncome", self.business_income),
            ("professionalIncome", self.professional_income),
            ("farmingIncome", self.farming_income),
            ("fishingIncome", self.fishing_income),
            ("partnershipIncome", self.partnership_income),
            ("interestIncome", self.interest_income),
            ("canadianDividendIncome", self.canadian_dividend_income),
            ("foreignDividendIncome", self.foreign_dividend_income),
            ("foreignBusinessIncome", self.foreign_business_income),
            ("foreignNonBusinessIncome", self.foreign_non_business_income),
            ("rentalIncome", self.rental_income),
            ("royaltyIncome", self.royalty_income),
            ("capitalGains", self.capital_gains),
            ("capitalLosses", self.capital_losses_current),
            ("netCapitalLossesApplied", self.net_capital_losses_applied),
            ("cppQppBenefits", self.cpp_qpp_benefits),
            ("oasBenefits", self.oas_benefits),
            ("privatePension", self.private_pension),
            ("foreignPension", self.foreign_pension),
            ("rrifWithdrawals", self.rrif_withdrawals),
            ("lifWithdrawals", self.lif_withdrawals),
            ("annuityIncome", self.annuity_income),
            ("eiBenefits", self.ei_benefits),
            ("alimonyReceived", self.alimony_received),
            ("scholarshipIncome", self.scholarship_income),
            ("deathBenefits", self.death_benefits),
            ("otherIncome", self.other_income),
            ("splitIncomeAmount", self.split_income_amount),
        ] {
            require_non_negative(field, value)?;
        }
        Ok(())
    }
}
