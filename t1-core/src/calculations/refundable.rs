//! Refundable credits: GST/HST credit and the child benefit.
//!
//! Unlike the non-refundable credits these pay out even with zero tax
//! payable; they are added to after-tax income rather than netted against
//! the balance owing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{excess_over, round_half_up};
use crate::models::{BenefitSchedule, PersonalInfo};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundableCredits {
    pub gst_hst_credit: Decimal,
    pub canada_child_benefit: Decimal,
}

impl RefundableCredits {
    pub fn total(&self) -> Decimal {
        self.gst_hst_credit + self.canada_child_benefit
    }
}

pub fn refundable_credits(
    personal: &PersonalInfo,
    net_income: Decimal,
    schedule: &BenefitSchedule,
) -> RefundableCredits {
    RefundableCredits {
        gst_hst_credit: gst_hst_credit(personal, net_income, schedule),
        canada_child_benefit: child_benefit(personal, net_income, schedule),
    }
}

/// Base amount (higher for married filers) plus a per-dependant amount,
/// phased out over the income threshold.
fn gst_hst_credit(
    personal: &PersonalInfo,
    net_income: Decimal,
    schedule: &BenefitSchedule,
) -> Decimal {
    let base = if personal.is_married {
        schedule.gst_credit_married
    } else {
        schedule.gst_credit_single
    };
    let entitlement =
        base + Decimal::from(personal.num_dependants) * schedule.gst_credit_per_child;
    let reduction =
        excess_over(net_income, schedule.gst_credit_threshold) * schedule.gst_reduction_rate;
    round_half_up(excess_over(entitlement, reduction))
}

/// Per-child amount banded by age, phased out over net income at a rate
/// that drops once income passes the second threshold.
fn child_benefit(
    personal: &PersonalInfo,
    net_income: Decimal,
    schedule: &BenefitSchedule,
) -> Decimal {
    if personal.num_dependants == 0 {
        return Decimal::ZERO;
    }

    let mut entitlement = Decimal::ZERO;
    for &age in &personal.dependant_ages {
        entitlement += if age < schedule.ccb_age_cutoff {
            schedule.ccb_under_cutoff
        } else {
            schedule.ccb_at_or_over_cutoff
        };
    }

    let reduction = if net_income > schedule.ccb_second_threshold {
        (schedule.ccb_second_threshold - schedule.ccb_threshold) * schedule.ccb_reduction_rate
            + excess_over(net_income, schedule.ccb_second_threshold) * schedule.ccb_second_rate
    } else {
        excess_over(net_income, schedule.ccb_threshold) * schedule.ccb_reduction_rate
    };

    round_half_up(excess_over(entitlement, reduction))
}
