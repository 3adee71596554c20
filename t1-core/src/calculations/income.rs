//! Income aggregation: total income, net income, taxable income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{excess_over, round_half_up};
use crate::models::{AdvancedDeductions, DeductionsCredits, IncomeDetails};

/// Fraction of a net capital gain included in income.
const CAPITAL_GAINS_INCLUSION: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// The three income figures every later stage keys off, plus the stock
/// option deduction taken between total and net income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSummary {
    pub total_income: Decimal,
    pub net_income: Decimal,
    pub taxable_income: Decimal,
    pub stock_option_deduction: Decimal,
}

/// Total income across all statutory categories, rounded to the cent.
///
/// Eligible Canadian dividends enter grossed up by `dividend_gross_up`;
/// foreign dividends enter at face value. Capital gains contribute
/// `max(0, (gains − current losses) × ½ − prior-year net losses applied)`.
pub fn total_income(income: &IncomeDetails, dividend_gross_up: Decimal) -> Decimal {
    let total = employment_income(income)
        + business_income(income)
        + investment_income(income, dividend_gross_up)
        + taxable_capital_gains(income)
        + pension_income(income)
        + other_income(income);
    round_half_up(total)
}

/// Runs the full aggregation: total income, then net income after
/// deductions, then taxable income after the additional reducers.
pub fn summarize(
    income: &IncomeDetails,
    deductions: &DeductionsCredits,
    advanced: &AdvancedDeductions,
    dividend_gross_up: Decimal,
    stock_option_deduction_rate: Decimal,
) -> IncomeSummary {
    let total = total_income(income, dividend_gross_up);

    let stock_option_deduction = if income.stock_option_deduction_eligible {
        round_half_up(income.stock_option_benefit * stock_option_deduction_rate)
    } else {
        Decimal::ZERO
    };

    let income_deductions = deductions.rrsp_contribution
        + deductions.union_dues
        + deductions.childcare_expenses
        + deductions.alimony_paid
        + stock_option_deduction
        + advanced.business_expenses
        + advanced.non_capital_losses_applied;
    let net_income = round_half_up(excess_over(total, income_deductions));

    let taxable_deductions = deductions.medical_expenses
        + deductions.charitable_donations
        + advanced.farm_losses_applied;
    let taxable_income = round_half_up(excess_over(net_income, taxable_deductions));

    IncomeSummary {
        total_income: total,
        net_income,
        taxable_income,
        stock_option_deduction,
    }
}

fn employment_income(income: &IncomeDetails) -> Decimal {
    income.employment_income
        + income.employment_benefits
        + income.stock_option_benefit
        + income.commission_income
        + income.tips_gratuities
}

fn business_income(income: &IncomeDetails) -> Decimal {
    income.business_income
        + income.professional_income
        + income.farming_income
        + income.fishing_income
        + income.partnership_income
}

fn investment_income(income: &IncomeDetails, dividend_gross_up: Decimal) -> Decimal {
    let dividends =
        income.canadian_dividend_income * dividend_gross_up + income.foreign_dividend_income;
    income.interest_income
        + dividends
        + income.rental_income
        + income.royalty_income
        + income.foreign_business_income
        + income.foreign_non_business_income
}

/// Taxable capital gains after the 50% inclusion rate and loss application.
fn taxable_capital_gains(income: &IncomeDetails) -> Decimal {
    if income.capital_losses_current > income.capital_gains {
        warn!(
            gains = %income.capital_gains,
            losses = %income.capital_losses_current,
            "current-year capital losses exceed gains; the excess does not reduce other income"
        );
    }
    let net_gains = excess_over(income.capital_gains, income.capital_losses_current);
    let included = net_gains * CAPITAL_GAINS_INCLUSION;
    excess_over(included, income.net_capital_losses_applied)
}

fn pension_income(income: &IncomeDetails) -> Decimal {
    income.cpp_qpp_benefits
        + income.oas_benefits
        + income.private_pension
        + income.foreign_pension
        + income.rrif_withdrawals
        + income.lif_withdrawals
        + income.annuity_income
}

fn other_income(income: &IncomeDetails) -> Decimal {
    income.ei_benefits
        + income.alimony_received
        + income.scholarship_income
        + income.death_benefits
        + income.other_income
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const GROSS_UP: Decimal = dec!(1.38);
    const OPTION_RATE: Decimal = dec!(0.50);

    fn summarize_default(income: &IncomeDetails) -> IncomeSummary {
        summarize(
            income,
            &DeductionsCredits::default(),
            &AdvancedDeductions::default(),
            GROSS_UP,
            OPTION_RATE,
        )
    }

    #[test]
    fn total_income_of_empty_details_is_zero() {
        assert_eq!(total_income(&IncomeDetails::default(), GROSS_UP), dec!(0));
    }

    #[test]
    fn employment_fields_sum_at_face_value() {
        let income = IncomeDetails {
            employment_income: dec!(60000),
            employment_benefits: dec!(1200),
            stock_option_benefit: dec!(5000),
            commission_income: dec!(800),
            tips_gratuities: dec!(450),
            ..IncomeDetails::default()
        };

        assert_eq!(total_income(&income, GROSS_UP), dec!(67450.00));
    }

    #[test]
    fn canadian_dividends_are_grossed_up() {
        let income = IncomeDetails {
            canadian_dividend_income: dec!(1000),
            foreign_dividend_income: dec!(500),
            ..IncomeDetails::default()
        };

        // 1000 × 1.38 + 500 at face value
        assert_eq!(total_income(&income, GROSS_UP), dec!(1880.00));
    }

    #[test]
    fn capital_gains_contribute_half_after_current_losses() {
        let income = IncomeDetails {
            capital_gains: dec!(10000),
            capital_losses_current: dec!(4000),
            ..IncomeDetails::default()
        };

        assert_eq!(total_income(&income, GROSS_UP), dec!(3000.00));
    }

    #[test]
    fn excess_current_losses_do_not_reduce_other_income() {
        let income = IncomeDetails {
            employment_income: dec!(50000),
            capital_gains: dec!(1000),
            capital_losses_current: dec!(8000),
            ..IncomeDetails::default()
        };

        assert_eq!(total_income(&income, GROSS_UP), dec!(50000.00));
    }

    #[test]
    fn prior_year_losses_reduce_the_included_gain_to_a_floor_of_zero() {
        let income = IncomeDetails {
            capital_gains: dec!(10000),
            net_capital_losses_applied: dec!(9000),
            ..IncomeDetails::default()
        };

        // Included gain 5000, prior-year losses 9000 → floored at 0.
        assert_eq!(total_income(&income, GROSS_UP), dec!(0));
    }

    #[test]
    fn net_income_subtracts_deductions() {
        let income = IncomeDetails {
            employment_income: dec!(80000),
            ..IncomeDetails::default()
        };
        let deductions = DeductionsCredits {
            rrsp_contribution: dec!(10000),
            union_dues: dec!(900),
            childcare_expenses: dec!(4000),
            alimony_paid: dec!(600),
            ..DeductionsCredits::default()
        };

        let summary = summarize(
            &income,
            &deductions,
            &AdvancedDeductions::default(),
            GROSS_UP,
            OPTION_RATE,
        );

        assert_eq!(summary.total_income, dec!(80000.00));
        assert_eq!(summary.net_income, dec!(64500.00));
        assert_eq!(summary.taxable_income, dec!(64500.00));
    }

    #[test]
    fn net_income_floors_at_zero() {
        let income = IncomeDetails {
            employment_income: dec!(5000),
            ..IncomeDetails::default()
        };
        let deductions = DeductionsCredits {
            rrsp_contribution: dec!(9000),
            ..DeductionsCredits::default()
        };

        let summary = summarize(
            &income,
            &deductions,
            &AdvancedDeductions::default(),
            GROSS_UP,
            OPTION_RATE,
        );

        assert_eq!(summary.net_income, dec!(0));
        assert_eq!(summary.taxable_income, dec!(0));
    }

    #[test]
    fn stock_option_deduction_requires_eligibility() {
        let mut income = IncomeDetails {
            employment_income: dec!(50000),
            stock_option_benefit: dec!(10000),
            ..IncomeDetails::default()
        };

        let ineligible = summarize_default(&income);
        assert_eq!(ineligible.stock_option_deduction, dec!(0));
        assert_eq!(ineligible.net_income, dec!(60000.00));

        income.stock_option_deduction_eligible = true;
        let eligible = summarize_default(&income);
        assert_eq!(eligible.stock_option_deduction, dec!(5000.00));
        assert_eq!(eligible.net_income, dec!(55000.00));
    }

    #[test]
    fn medical_charitable_and_farm_losses_reduce_taxable_income() {
        let income = IncomeDetails {
            employment_income: dec!(70000),
            ..IncomeDetails::default()
        };
        let deductions = DeductionsCredits {
            medical_expenses: dec!(3000),
            charitable_donations: dec!(1000),
            ..DeductionsCredits::default()
        };
        let advanced = AdvancedDeductions {
            farm_losses_applied: dec!(2000),
            ..AdvancedDeductions::default()
        };

        let summary = summarize(&income, &deductions, &advanced, GROSS_UP, OPTION_RATE);

        assert_eq!(summary.net_income, dec!(70000.00));
        assert_eq!(summary.taxable_income, dec!(64000.00));
    }
}
