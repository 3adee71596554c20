mod deductions;
mod foreign_tax;
mod income;
mod pension_splitting;
mod personal_info;
mod tables;
mod tax_bracket;
mod tax_result;
mod tax_return;

pub use deductions::{AdvancedDeductions, DeductionsCredits};
pub use foreign_tax::ForeignTaxPaid;
pub use income::IncomeDetails;
pub use pension_splitting::PensionSplitting;
pub use personal_info::PersonalInfo;
pub use tables::{
    AmtRules, BenefitSchedule, FederalProfile, JurisdictionProfile, PayrollRules,
    PensionPlanRules, ProvincialAmounts, Surtax, SurtaxTier, TablesError, TaxTables,
};
pub use tax_bracket::TaxBracket;
pub use tax_result::TaxResult;
pub use tax_return::{InputError, TaxReturn};
