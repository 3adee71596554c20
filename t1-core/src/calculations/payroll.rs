//! CPP/QPP and EI/QPIP payroll contributions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{excess_over, round_half_up};
use crate::models::{PayrollRules, PensionPlanRules};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollContributions {
    /// CPP, or QPP for parallel-plan jurisdictions.
    pub cpp_contribution: Decimal,
    /// EI, plus the parallel parental-insurance premium where one applies.
    pub ei_contribution: Decimal,
}

/// Computes both contributions on employment income.
///
/// `parallel_plans` selects the parallel pension plan and the reduced EI rate
/// plus parental-insurance premium (Québec's QPP/QPIP arrangement).
pub fn contributions(
    employment_income: Decimal,
    rules: &PayrollRules,
    parallel_plans: bool,
) -> PayrollContributions {
    let plan = if parallel_plans {
        &rules.parallel_plan
    } else {
        &rules.base_plan
    };

    PayrollContributions {
        cpp_contribution: pension_contribution(employment_income, plan),
        ei_contribution: insurance_contribution(employment_income, rules, parallel_plans),
    }
}

/// Pensionable earnings are capped at the ceiling and reduced by the basic
/// exemption; the plan's annual cap applies when it has one.
fn pension_contribution(employment_income: Decimal, plan: &PensionPlanRules) -> Decimal {
    let pensionable = excess_over(
        employment_income.min(plan.max_pensionable),
        plan.basic_exemption,
    );
    let contribution = round_half_up(pensionable * plan.rate);
    match plan.max_contribution {
        Some(cap) => contribution.min(cap),
        None => contribution,
    }
}

fn insurance_contribution(
    employment_income: Decimal,
    rules: &PayrollRules,
    parallel_plans: bool,
) -> Decimal {
    let insurable = employment_income.min(rules.ei_max_insurable);
    if parallel_plans {
        round_half_up(insurable * rules.ei_rate_reduced)
            + round_half_up(insurable * rules.parallel_insurance_rate)
    } else {
        round_half_up(insurable * rules.ei_rate)
    }
}
