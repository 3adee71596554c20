//! Benefit clawbacks: excess-over-threshold reductions of OAS and EI
//! benefits already received.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{excess_over, round_half_up};
use crate::models::BenefitSchedule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clawbacks {
    pub oas_clawback: Decimal,
    pub ei_benefit_clawback: Decimal,
}

impl Clawbacks {
    pub fn total(&self) -> Decimal {
        self.oas_clawback + self.ei_benefit_clawback
    }
}

/// Computes both clawbacks from net income and the benefits received.
///
/// Each repayment is capped by what was actually received (for EI, by the
/// repayment fraction of it); the clawback can never exceed the benefit.
pub fn clawbacks(
    net_income: Decimal,
    oas_benefits: Decimal,
    ei_benefits: Decimal,
    schedule: &BenefitSchedule,
) -> Clawbacks {
    let oas_clawback = round_half_up(oas_benefits.min(
        excess_over(net_income, schedule.oas_clawback_threshold) * schedule.oas_clawback_rate,
    ));

    let ei_benefit_clawback = if ei_benefits > Decimal::ZERO {
        let repayable = ei_benefits * schedule.ei_repayment_fraction;
        let over_threshold =
            excess_over(net_income, schedule.ei_clawback_threshold) * schedule.ei_clawback_rate;
        round_half_up(repayable.min(over_threshold))
    } else {
        Decimal::ZERO
    };

    Clawbacks {
        oas_clawback,
        ei_benefit_clawback,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn schedule() -> BenefitSchedule {
        BenefitSchedule {
            oas_clawback_threshold: dec!(86912),
            oas_clawback_rate: dec!(0.15),
            ei_clawback_threshold: dec!(78750),
            ei_clawback_rate: dec!(0.30),
            ei_repayment_fraction: dec!(0.30),
            gst_credit_single: dec!(467),
            gst_credit_married: dec!(612),
            gst_credit_per_child: dec!(161),
            gst_credit_threshold: dec!(42335),
            gst_reduction_rate: dec!(0.05),
            ccb_under_cutoff: dec!(7787),
            ccb_at_or_over_cutoff: dec!(6570),
            ccb_age_cutoff: 6,
            ccb_threshold: dec!(36502),
            ccb_reduction_rate: dec!(0.07),
            ccb_second_threshold: dec!(78221),
            ccb_second_rate: dec!(0.032),
        }
    }

    #[test]
    fn no_clawback_below_both_thresholds() {
        let result = clawbacks(dec!(60000), dec!(7362), dec!(5000), &schedule());

        assert_eq!(result.oas_clawback, dec!(0));
        assert_eq!(result.ei_benefit_clawback, dec!(0));
        assert_eq!(result.total(), dec!(0));
    }

    #[test]
    fn oas_clawback_takes_fifteen_percent_of_the_excess() {
        let result = clawbacks(dec!(100000), dec!(7362), dec!(0), &schedule());

        // (100000 − 86912) × 0.15 = 1963.20, under the benefit received
        assert_eq!(result.oas_clawback, dec!(1963.20));
    }

    #[test]
    fn oas_clawback_cannot_exceed_benefits_received() {
        let result = clawbacks(dec!(200000), dec!(7362), dec!(0), &schedule());

        // (200000 − 86912) × 0.15 = 16963.20, capped at 7362
        assert_eq!(result.oas_clawback, dec!(7362.00));
    }

    #[test]
    fn ei_clawback_applies_only_when_benefits_were_received() {
        let result = clawbacks(dec!(120000), dec!(0), dec!(0), &schedule());

        assert_eq!(result.ei_benefit_clawback, dec!(0));
    }

    #[test]
    fn ei_clawback_caps_at_the_repayment_fraction() {
        let result = clawbacks(dec!(120000), dec!(0), dec!(8000), &schedule());

        // Excess (120000 − 78750) × 0.30 = 12375; cap 8000 × 0.30 = 2400
        assert_eq!(result.ei_benefit_clawback, dec!(2400.00));
    }

    #[test]
    fn ei_clawback_uses_the_excess_when_smaller() {
        let result = clawbacks(dec!(80000), dec!(0), dec!(8000), &schedule());

        // Excess (80000 − 78750) × 0.30 = 375 < 2400
        assert_eq!(result.ei_benefit_clawback, dec!(375.00));
    }
}
