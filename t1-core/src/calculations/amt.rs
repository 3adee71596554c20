//! Alternative minimum tax.
//!
//! The alternate base starts from total income and adds back the preference
//! fraction of the stock option benefit and of claimed CCA. The taxpayer owes
//! the greater of regular tax after credits and the flat-rate AMT; that
//! comparison happens in the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{excess_over, round_half_up};
use crate::models::AmtRules;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmtResult {
    /// The broadened base: total income plus preference add-backs.
    pub amt_income: Decimal,
    pub amt_tax: Decimal,
    /// Always zero in a single-year computation; prior-year AMT data would
    /// be needed to carry anything forward.
    pub amt_carryforward: Decimal,
}

pub fn alternative_minimum_tax(
    total_income: Decimal,
    stock_option_benefit: Decimal,
    capital_cost_allowance: Decimal,
    rules: &AmtRules,
) -> AmtResult {
    let amt_income = round_half_up(
        total_income
            + stock_option_benefit * rules.stock_option_preference
            + capital_cost_allowance * rules.cca_preference,
    );
    let amt_taxable = excess_over(amt_income, rules.exemption);
    let amt_tax = round_half_up(amt_taxable * rules.rate);

    AmtResult {
        amt_income,
        amt_tax,
        amt_carryforward: Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn rules() -> AmtRules {
        AmtRules {
            exemption: dec!(40000),
            rate: dec!(0.15),
            stock_option_preference: dec!(0.5),
            cca_preference: dec!(0.5),
        }
    }

    #[test]
    fn amt_is_zero_below_the_exemption() {
        let result = alternative_minimum_tax(dec!(35000), dec!(0), dec!(0), &rules());

        assert_eq!(result.amt_income, dec!(35000.00));
        assert_eq!(result.amt_tax, dec!(0));
    }

    #[test]
    fn amt_taxes_the_excess_over_the_exemption() {
        let result = alternative_minimum_tax(dec!(100000), dec!(0), dec!(0), &rules());

        // (100000 − 40000) × 0.15
        assert_eq!(result.amt_tax, dec!(9000.00));
    }

    #[test]
    fn preference_items_broaden_the_base() {
        let result = alternative_minimum_tax(dec!(100000), dec!(20000), dec!(10000), &rules());

        // 100000 + 10000 + 5000
        assert_eq!(result.amt_income, dec!(115000.00));
        assert_eq!(result.amt_tax, dec!(11250.00));
    }

    #[test]
    fn carryforward_is_always_zero() {
        let result = alternative_minimum_tax(dec!(500000), dec!(100000), dec!(0), &rules());

        assert_eq!(result.amt_carryforward, dec!(0));
    }
}
