//! Non-refundable credits.
//!
//! Every credit is computed from the federal amounts at the federal credit
//! rate (the lowest bracket rate) unless it carries its own statutory rate,
//! mirroring the governing schedule. Provincial credit amounts live on each
//! jurisdiction profile as configuration but do not enter these figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{excess_over, round_half_up};
use crate::models::{
    DeductionsCredits, FederalProfile, ForeignTaxPaid, IncomeDetails, PersonalInfo,
};

/// Minimum age for the age amount.
const AGE_AMOUNT_ELIGIBILITY: u32 = 65;

/// Every non-refundable credit, individually, plus their sum.
///
/// Credits reduce tax payable to a floor of zero; none of these fields is
/// ever negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonRefundableCredits {
    pub basic_personal: Decimal,
    pub spouse: Decimal,
    pub dependant: Decimal,
    pub age: Decimal,
    pub pension: Decimal,
    pub disability: Decimal,
    pub tuition: Decimal,
    pub medical: Decimal,
    pub charitable: Decimal,
    pub political: Decimal,
    pub volunteer: Decimal,
    pub foreign_tax: Decimal,
}

impl NonRefundableCredits {
    pub fn total(&self) -> Decimal {
        self.basic_personal
            + self.spouse
            + self.dependant
            + self.age
            + self.pension
            + self.disability
            + self.tuition
            + self.medical
            + self.charitable
            + self.political
            + self.volunteer
            + self.foreign_tax
    }
}

/// Computes each non-refundable credit under its own phase-out or tier rule.
#[derive(Debug, Clone)]
pub struct CreditsCalculator<'a> {
    federal: &'a FederalProfile,
}

impl<'a> CreditsCalculator<'a> {
    pub fn new(federal: &'a FederalProfile) -> Self {
        Self { federal }
    }

    /// Runs every credit computation.
    ///
    /// `net_income` drives the age and medical phase-outs; `federal_tax`
    /// bounds the foreign tax credit.
    pub fn calculate(
        &self,
        personal: &PersonalInfo,
        income: &IncomeDetails,
        deductions: &DeductionsCredits,
        foreign_tax: &ForeignTaxPaid,
        net_income: Decimal,
        federal_tax: Decimal,
    ) -> NonRefundableCredits {
        NonRefundableCredits {
            basic_personal: self.basic_personal(),
            spouse: self.spouse(personal),
            dependant: self.dependant(personal),
            age: self.age(personal, net_income),
            pension: self.pension(income),
            disability: self.disability(personal),
            tuition: self.tuition(deductions),
            medical: self.medical(deductions, net_income),
            charitable: self.charitable(deductions),
            political: self.political(deductions),
            volunteer: self.volunteer(personal),
            foreign_tax: self.foreign(foreign_tax, federal_tax),
        }
    }

    fn basic_personal(&self) -> Decimal {
        round_half_up(self.federal.basic_personal * self.federal.credit_rate)
    }

    /// Spouse-equivalent amount less the spouse's own income, for married
    /// filers only.
    fn spouse(&self, personal: &PersonalInfo) -> Decimal {
        if !personal.is_married {
            return Decimal::ZERO;
        }
        let amount = excess_over(self.federal.spouse_equivalent, personal.spouse_income);
        round_half_up(amount * self.federal.credit_rate)
    }

    fn dependant(&self, personal: &PersonalInfo) -> Decimal {
        let count = Decimal::from(personal.num_dependants);
        round_half_up(count * self.federal.dependant_amount * self.federal.credit_rate)
    }

    /// Age amount, eroded at `age_reduction_rate` on net income over the
    /// threshold.
    fn age(&self, personal: &PersonalInfo, net_income: Decimal) -> Decimal {
        if personal.age < AGE_AMOUNT_ELIGIBILITY {
            return Decimal::ZERO;
        }
        let reduction =
            excess_over(net_income, self.federal.age_threshold) * self.federal.age_reduction_rate;
        let amount = excess_over(self.federal.age_amount, reduction);
        round_half_up(amount * self.federal.credit_rate)
    }

    fn pension(&self, income: &IncomeDetails) -> Decimal {
        let eligible = self
            .federal
            .pension_amount
            .min(income.private_pension + income.rrif_withdrawals);
        round_half_up(eligible * self.federal.credit_rate)
    }

    fn disability(&self, personal: &PersonalInfo) -> Decimal {
        if !personal.has_disability {
            return Decimal::ZERO;
        }
        round_half_up(self.federal.disability_amount * self.federal.credit_rate)
    }

    /// Claimed tuition at the credit rate, uncapped. Carryforward and the
    /// cap by available tax are out of scope for a single-year computation.
    fn tuition(&self, deductions: &DeductionsCredits) -> Decimal {
        round_half_up(deductions.tuition_fees * self.federal.credit_rate)
    }

    /// Medical expenses over the lesser of the fixed floor and 3% of net
    /// income.
    fn medical(&self, deductions: &DeductionsCredits, net_income: Decimal) -> Decimal {
        let floor = self
            .federal
            .medical_floor
            .min(net_income * self.federal.medical_income_fraction);
        let eligible = excess_over(deductions.medical_expenses, floor);
        round_half_up(eligible * self.federal.medical_rate)
    }

    /// Tiered: the first `charitable_tier` dollars at the low rate, the
    /// remainder at the high rate.
    fn charitable(&self, deductions: &DeductionsCredits) -> Decimal {
        let donations = deductions.charitable_donations;
        let credit = if donations <= self.federal.charitable_tier {
            donations * self.federal.charitable_rate_low
        } else {
            self.federal.charitable_tier * self.federal.charitable_rate_low
                + (donations - self.federal.charitable_tier) * self.federal.charitable_rate_high
        };
        round_half_up(credit)
    }

    fn political(&self, deductions: &DeductionsCredits) -> Decimal {
        let credit = (deductions.political_contributions * self.federal.political_credit_rate)
            .min(self.federal.political_credit_max);
        round_half_up(credit)
    }

    /// Volunteer firefighter / search-and-rescue amount. The two claims are
    /// mutually exclusive, so either flag earns the single amount once.
    fn volunteer(&self, personal: &PersonalInfo) -> Decimal {
        if !personal.is_volunteer_firefighter && !personal.is_search_rescue_volunteer {
            return Decimal::ZERO;
        }
        round_half_up(self.federal.volunteer_amount * self.federal.credit_rate)
    }

    /// Foreign tax credit, bounded by a fixed fraction of federal tax.
    /// Business and non-business pools share a single limit.
    fn foreign(&self, foreign_tax: &ForeignTaxPaid, federal_tax: Decimal) -> Decimal {
        let paid = foreign_tax.total();
        if paid == Decimal::ZERO {
            return Decimal::ZERO;
        }
        round_half_up(paid.min(federal_tax * self.federal.foreign_tax_limit_fraction))
    }
}
