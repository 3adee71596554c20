//! The calculation pipeline, in statutory order.
//!
//! Income aggregation feeds everything else; bracket taxes, credits, the AMT
//! comparison, payroll contributions, clawbacks, and refundable credits each
//! read the shared income figures and the year's tables, and the engine
//! assembles the final result. Single pass, no partial states.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::amt::alternative_minimum_tax;
use crate::calculations::brackets::{marginal_rate, tax_on_brackets};
use crate::calculations::clawbacks::clawbacks;
use crate::calculations::common::{excess_over, round_half_up};
use crate::calculations::credits::CreditsCalculator;
use crate::calculations::income;
use crate::calculations::payroll::contributions;
use crate::calculations::refundable::refundable_credits;
use crate::models::{InputError, Surtax, TablesError, TaxResult, TaxReturn, TaxTables};

/// Errors a computation can surface. Everything else is deterministic
/// arithmetic that cannot fail on validated input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("tax tables: {0}")]
    Tables(#[from] TablesError),
}

/// Computes complete tax results against one year's validated tables.
///
/// The engine borrows the tables; it holds no other state, so one engine can
/// serve any number of independent computations.
#[derive(Debug, Clone)]
pub struct TaxEngine<'a> {
    tables: &'a TaxTables,
}

impl<'a> TaxEngine<'a> {
    pub fn new(tables: &'a TaxTables) -> Self {
        Self { tables }
    }

    /// Runs the full pipeline for one return.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the record fails boundary validation or
    /// names a jurisdiction the tables do not carry. A missing jurisdiction
    /// is an error, never a silent zero of provincial tax.
    pub fn calculate(&self, tax_return: &TaxReturn) -> Result<TaxResult, EngineError> {
        tax_return.validate()?;
        let province = self.tables.province(&tax_return.province)?;
        let federal = &self.tables.federal;
        let income = &tax_return.income;

        let summary = income::summarize(
            income,
            &tax_return.deductions,
            &tax_return.advanced_deductions,
            federal.dividend_gross_up,
            self.tables.stock_option_deduction_rate,
        );

        let federal_tax = tax_on_brackets(summary.taxable_income, &federal.brackets);
        let provincial_tax = tax_on_brackets(summary.taxable_income, &province.brackets);
        let provincial_surtax = surtax_on(provincial_tax, province.surtax.as_ref());

        // Split income is taxed on the federal schedule by itself, on top of
        // regular tax.
        let split_income = income.split_income_amount;
        let tosi_tax = if split_income > Decimal::ZERO {
            tax_on_brackets(split_income, &federal.brackets)
        } else {
            Decimal::ZERO
        };

        let total_tax_before_credits =
            round_half_up(federal_tax + provincial_tax + provincial_surtax + tosi_tax);

        let credits = CreditsCalculator::new(federal).calculate(
            &tax_return.personal_info,
            income,
            &tax_return.deductions,
            &tax_return.foreign_tax,
            summary.net_income,
            federal_tax,
        );
        let total_non_refundable_credits = round_half_up(credits.total());
        let regular_tax_after_credits =
            excess_over(total_tax_before_credits, total_non_refundable_credits);

        let amt = alternative_minimum_tax(
            summary.total_income,
            income.stock_option_benefit,
            tax_return.advanced_deductions.capital_cost_allowance,
            &self.tables.amt,
        );
        if amt.amt_tax > regular_tax_after_credits {
            warn!(
                amt_tax = %amt.amt_tax,
                regular_tax = %regular_tax_after_credits,
                "alternative minimum tax exceeds regular tax and sets the liability"
            );
        }
        let total_tax_after_credits = regular_tax_after_credits.max(amt.amt_tax);

        let payroll = contributions(
            income.employment_income,
            &self.tables.payroll,
            province.parallel_plans,
        );
        let clawed = clawbacks(
            summary.net_income,
            income.oas_benefits,
            income.ei_benefits,
            &self.tables.benefits,
        );
        let refundable = refundable_credits(
            &tax_return.personal_info,
            summary.net_income,
            &self.tables.benefits,
        );

        let total_payable = round_half_up(
            total_tax_after_credits
                + payroll.cpp_contribution
                + payroll.ei_contribution
                + clawed.total(),
        );
        let net_income_after_tax =
            round_half_up(summary.net_income - total_payable + refundable.total());

        let average_tax_rate = if summary.net_income > Decimal::ZERO {
            round_half_up(total_payable / summary.net_income * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };
        let marginal_tax_rate = round_half_up(
            (marginal_rate(summary.taxable_income, &federal.brackets)
                + marginal_rate(summary.taxable_income, &province.brackets))
                * Decimal::ONE_HUNDRED,
        );

        debug!(
            province = %province.code,
            taxable_income = %summary.taxable_income,
            total_payable = %total_payable,
            "computed return"
        );

        Ok(TaxResult {
            total_income: summary.total_income,
            net_income: summary.net_income,
            taxable_income: summary.taxable_income,
            split_income_subject_to_tosi: split_income,
            federal_tax,
            provincial_tax,
            provincial_surtax,
            tosi_tax,
            total_tax_before_credits,
            amt_income: amt.amt_income,
            amt_tax: amt.amt_tax,
            amt_carryforward: amt.amt_carryforward,
            basic_personal_credit: credits.basic_personal,
            spouse_credit: credits.spouse,
            dependant_credit: credits.dependant,
            age_credit: credits.age,
            pension_credit: credits.pension,
            disability_credit: credits.disability,
            tuition_credit: credits.tuition,
            medical_credit: credits.medical,
            charitable_credit: credits.charitable,
            political_credit: credits.political,
            volunteer_credit: credits.volunteer,
            foreign_tax_credit: credits.foreign_tax,
            total_non_refundable_credits,
            total_tax_after_credits,
            cpp_contribution: payroll.cpp_contribution,
            ei_contribution: payroll.ei_contribution,
            gst_hst_credit: refundable.gst_hst_credit,
            canada_child_benefit: refundable.canada_child_benefit,
            total_refundable_credits: round_half_up(refundable.total()),
            oas_clawback: clawed.oas_clawback,
            ei_benefit_clawback: clawed.ei_benefit_clawback,
            total_clawbacks: round_half_up(clawed.total()),
            total_payable,
            net_income_after_tax,
            average_tax_rate,
            marginal_tax_rate,
        })
    }
}

/// Surtax tiers stack: each taxes the excess of provincial base tax over its
/// own threshold.
fn surtax_on(provincial_tax: Decimal, surtax: Option<&Surtax>) -> Decimal {
    let Some(surtax) = surtax else {
        return Decimal::ZERO;
    };
    let mut total = Decimal::ZERO;
    for tier in &surtax.tiers {
        total += excess_over(provincial_tax, tier.threshold) * tier.rate;
    }
    round_half_up(total)
}
