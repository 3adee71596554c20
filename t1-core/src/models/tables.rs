use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors raised while assembling or querying the tax tables.
///
/// Malformed bracket schedules are rejected when a [`TaxTables`] value is
/// constructed so that computation never has to deal with them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TablesError {
    #[error("unknown jurisdiction code '{0}'")]
    UnknownJurisdiction(String),

    #[error("{code}: bracket schedule is empty")]
    EmptyBrackets { code: String },

    #[error("{code}: first bracket must start at 0, starts at {start}")]
    FirstBracketNotZero { code: String, start: Decimal },

    #[error("{code}: bracket starting at {min} has max {max} at or below its min")]
    InvertedBracket {
        code: String,
        min: Decimal,
        max: Decimal,
    },

    #[error("{code}: bracket starting at {min} does not continue from {expected}")]
    NonContiguousBrackets {
        code: String,
        min: Decimal,
        expected: Decimal,
    },

    #[error("{code}: only the last bracket may be unbounded")]
    UnboundedBracketNotLast { code: String },

    #[error("{code}: last bracket must be unbounded")]
    BoundedLastBracket { code: String },

    #[error("{code}: bracket rate {rate} is outside [0, 1]")]
    InvalidRate { code: String, rate: Decimal },
}

/// Federal schedule plus the amounts that drive the credits engine.
///
/// Non-refundable credits are computed against federal amounts at the federal
/// credit rate (the lowest bracket rate); provincial amounts are carried on
/// each [`JurisdictionProfile`] as configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalProfile {
    pub brackets: Vec<TaxBracket>,

    pub basic_personal: Decimal,
    pub spouse_equivalent: Decimal,
    pub dependant_amount: Decimal,
    pub age_amount: Decimal,
    pub age_threshold: Decimal,
    /// Rate at which the age amount erodes over the threshold.
    pub age_reduction_rate: Decimal,
    pub pension_amount: Decimal,
    pub disability_amount: Decimal,
    /// Volunteer firefighter / search-and-rescue amount.
    pub volunteer_amount: Decimal,

    /// Lowest-bracket rate applied to most credit amounts.
    pub credit_rate: Decimal,
    pub medical_rate: Decimal,
    pub medical_floor: Decimal,
    pub medical_income_fraction: Decimal,
    pub charitable_rate_low: Decimal,
    pub charitable_rate_high: Decimal,
    /// Donations up to this amount earn the low rate.
    pub charitable_tier: Decimal,
    pub political_credit_rate: Decimal,
    pub political_credit_max: Decimal,

    pub dividend_gross_up: Decimal,
    pub dividend_tax_credit: Decimal,
    /// Fraction of federal tax that bounds the foreign tax credit.
    pub foreign_tax_limit_fraction: Decimal,
}

/// Per-jurisdiction constant amounts and credit rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvincialAmounts {
    pub basic_personal: Decimal,
    pub spouse_equivalent: Decimal,
    pub age_amount: Decimal,
    pub pension_amount: Decimal,
    pub disability_amount: Decimal,
    pub medical_rate: Decimal,
    pub charitable_rate: Decimal,
    pub dividend_tax_credit: Decimal,
    pub political_contribution_rate: Decimal,
}

/// One surtax tier: a rate applied to base tax above a threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurtaxTier {
    pub threshold: Decimal,
    pub rate: Decimal,
}

/// Surtax on provincial base tax. Tiers stack: each tier taxes the excess of
/// base tax over its own threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surtax {
    pub tiers: Vec<SurtaxTier>,
}

/// A provincial or territorial tax profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionProfile {
    pub code: String,
    pub name: String,
    pub brackets: Vec<TaxBracket>,
    pub amounts: ProvincialAmounts,
    pub surtax: Option<Surtax>,
    pub has_health_premium: bool,
    /// Jurisdiction runs parallel pension and parental-insurance plans
    /// (QPP/QPIP), which changes the payroll computation.
    pub parallel_plans: bool,
}

/// Contribution rules for one public pension plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionPlanRules {
    pub max_pensionable: Decimal,
    pub basic_exemption: Decimal,
    pub rate: Decimal,
    /// Annual contribution cap, when the plan has one.
    pub max_contribution: Option<Decimal>,
}

/// Payroll contribution constants for the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRules {
    pub base_plan: PensionPlanRules,
    /// Plan used by parallel-plan jurisdictions (QPP).
    pub parallel_plan: PensionPlanRules,
    pub ei_max_insurable: Decimal,
    pub ei_rate: Decimal,
    /// Reduced EI rate where a parallel parental-insurance plan exists.
    pub ei_rate_reduced: Decimal,
    /// Parallel parental-insurance premium rate (QPIP).
    pub parallel_insurance_rate: Decimal,
}

/// Alternative minimum tax parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmtRules {
    pub exemption: Decimal,
    pub rate: Decimal,
    /// Fraction of the stock option benefit added back to the AMT base.
    pub stock_option_preference: Decimal,
    /// Fraction of claimed CCA added back to the AMT base.
    pub cca_preference: Decimal,
}

/// Benefit, clawback, and refundable-credit thresholds for the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitSchedule {
    pub oas_clawback_threshold: Decimal,
    pub oas_clawback_rate: Decimal,

    pub ei_clawback_threshold: Decimal,
    pub ei_clawback_rate: Decimal,
    /// At most this fraction of EI benefits received is repayable.
    pub ei_repayment_fraction: Decimal,

    pub gst_credit_single: Decimal,
    pub gst_credit_married: Decimal,
    pub gst_credit_per_child: Decimal,
    pub gst_credit_threshold: Decimal,
    pub gst_reduction_rate: Decimal,

    pub ccb_under_cutoff: Decimal,
    pub ccb_at_or_over_cutoff: Decimal,
    /// Children younger than this earn the higher per-child amount.
    pub ccb_age_cutoff: u32,
    pub ccb_threshold: Decimal,
    pub ccb_reduction_rate: Decimal,
    pub ccb_second_threshold: Decimal,
    pub ccb_second_rate: Decimal,
}

/// The complete, validated table set for one tax year.
///
/// Built once, read-only afterwards; every calculation borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTables {
    pub tax_year: i32,
    pub federal: FederalProfile,
    provinces: BTreeMap<String, JurisdictionProfile>,
    pub payroll: PayrollRules,
    pub amt: AmtRules,
    pub benefits: BenefitSchedule,
    /// Deduction rate for eligible employee stock option benefits.
    pub stock_option_deduction_rate: Decimal,
}

impl TaxTables {
    /// Assembles the table set, validating every bracket schedule.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError`] if the federal schedule or any provincial
    /// schedule is empty, does not start at zero, has inverted or
    /// non-contiguous bands, carries an unbounded band before the last
    /// position, ends bounded, or uses a rate outside `[0, 1]`.
    pub fn new(
        tax_year: i32,
        federal: FederalProfile,
        provinces: Vec<JurisdictionProfile>,
        payroll: PayrollRules,
        amt: AmtRules,
        benefits: BenefitSchedule,
        stock_option_deduction_rate: Decimal,
    ) -> Result<Self, TablesError> {
        validate_brackets("federal", &federal.brackets)?;
        let mut by_code = BTreeMap::new();
        for province in provinces {
            validate_brackets(&province.code, &province.brackets)?;
            by_code.insert(province.code.clone(), province);
        }
        Ok(Self {
            tax_year,
            federal,
            provinces: by_code,
            payroll,
            amt,
            benefits,
            stock_option_deduction_rate,
        })
    }

    /// Looks up a jurisdiction profile by its two-letter code.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::UnknownJurisdiction`] for codes not present in
    /// the table set. A missing jurisdiction is a configuration error, never
    /// a silent zero.
    pub fn province(&self, code: &str) -> Result<&JurisdictionProfile, TablesError> {
        self.provinces
            .get(code)
            .ok_or_else(|| TablesError::UnknownJurisdiction(code.to_string()))
    }

    /// Jurisdiction codes in lexicographic order.
    pub fn province_codes(&self) -> impl Iterator<Item = &str> {
        self.provinces.keys().map(String::as_str)
    }
}

fn validate_brackets(code: &str, brackets: &[TaxBracket]) -> Result<(), TablesError> {
    let Some(first) = brackets.first() else {
        return Err(TablesError::EmptyBrackets {
            code: code.to_string(),
        });
    };
    if first.min_income != Decimal::ZERO {
        return Err(TablesError::FirstBracketNotZero {
            code: code.to_string(),
            start: first.min_income,
        });
    }

    let mut expected_min = Decimal::ZERO;
    for (position, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(TablesError::InvalidRate {
                code: code.to_string(),
                rate: bracket.rate,
            });
        }
        if bracket.min_income != expected_min {
            return Err(TablesError::NonContiguousBrackets {
                code: code.to_string(),
                min: bracket.min_income,
                expected: expected_min,
            });
        }
        match bracket.max_income {
            Some(max) => {
                if max <= bracket.min_income {
                    return Err(TablesError::InvertedBracket {
                        code: code.to_string(),
                        min: bracket.min_income,
                        max,
                    });
                }
                if position == brackets.len() - 1 {
                    return Err(TablesError::BoundedLastBracket {
                        code: code.to_string(),
                    });
                }
                expected_min = max;
            }
            None => {
                if position != brackets.len() - 1 {
                    return Err(TablesError::UnboundedBracketNotLast {
                        code: code.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn two_band_schedule() -> Vec<TaxBracket> {
        vec![
            TaxBracket::new(dec!(0), Some(dec!(50000)), dec!(0.10)),
            TaxBracket::new(dec!(50000), None, dec!(0.20)),
        ]
    }

    fn amounts() -> ProvincialAmounts {
        ProvincialAmounts {
            basic_personal: dec!(12000),
            spouse_equivalent: dec!(12000),
            age_amount: dec!(5000),
            pension_amount: dec!(1000),
            disability_amount: dec!(8000),
            medical_rate: dec!(0.10),
            charitable_rate: dec!(0.10),
            dividend_tax_credit: dec!(0.10),
            political_contribution_rate: dec!(0.75),
        }
    }

    fn federal() -> FederalProfile {
        FederalProfile {
            brackets: two_band_schedule(),
            basic_personal: dec!(15705),
            spouse_equivalent: dec!(15705),
            dependant_amount: dec!(2616),
            age_amount: dec!(8790),
            age_threshold: dec!(42335),
            age_reduction_rate: dec!(0.15),
            pension_amount: dec!(2000),
            disability_amount: dec!(9428),
            volunteer_amount: dec!(3000),
            credit_rate: dec!(0.15),
            medical_rate: dec!(0.15),
            medical_floor: dec!(2759),
            medical_income_fraction: dec!(0.03),
            charitable_rate_low: dec!(0.15),
            charitable_rate_high: dec!(0.29),
            charitable_tier: dec!(200),
            political_credit_rate: dec!(0.75),
            political_credit_max: dec!(650),
            dividend_gross_up: dec!(1.38),
            dividend_tax_credit: dec!(0.2505),
            foreign_tax_limit_fraction: dec!(0.10),
        }
    }

    fn province(code: &str, brackets: Vec<TaxBracket>) -> JurisdictionProfile {
        JurisdictionProfile {
            code: code.to_string(),
            name: code.to_string(),
            brackets,
            amounts: amounts(),
            surtax: None,
            has_health_premium: false,
            parallel_plans: false,
        }
    }

    fn payroll() -> PayrollRules {
        PayrollRules {
            base_plan: PensionPlanRules {
                max_pensionable: dec!(71300),
                basic_exemption: dec!(3500),
                rate: dec!(0.0595),
                max_contribution: Some(dec!(4055.25)),
            },
            parallel_plan: PensionPlanRules {
                max_pensionable: dec!(71300),
                basic_exemption: dec!(3500),
                rate: dec!(0.064),
                max_contribution: None,
            },
            ei_max_insurable: dec!(63750),
            ei_rate: dec!(0.0163),
            ei_rate_reduced: dec!(0.0127),
            parallel_insurance_rate: dec!(0.00494),
        }
    }

    fn amt() -> AmtRules {
        AmtRules {
            exemption: dec!(40000),
            rate: dec!(0.15),
            stock_option_preference: dec!(0.5),
            cca_preference: dec!(0.5),
        }
    }

    fn benefits() -> BenefitSchedule {
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

    fn tables(provinces: Vec<JurisdictionProfile>) -> Result<TaxTables, TablesError> {
        TaxTables::new(
            2024,
            federal(),
            provinces,
            payroll(),
            amt(),
            benefits(),
            dec!(0.50),
        )
    }

    #[test]
    fn new_accepts_well_formed_schedules() {
        let tables = tables(vec![province("ON", two_band_schedule())]).unwrap();

        assert_eq!(tables.tax_year, 2024);
        assert_eq!(tables.province("ON").unwrap().code, "ON");
    }

    #[test]
    fn province_lookup_fails_for_unknown_code() {
        let tables = tables(vec![province("ON", two_band_schedule())]).unwrap();

        assert_eq!(
            tables.province("ZZ"),
            Err(TablesError::UnknownJurisdiction("ZZ".to_string()))
        );
    }

    #[test]
    fn new_rejects_empty_schedule() {
        let result = tables(vec![province("XX", vec![])]);

        assert_eq!(
            result,
            Err(TablesError::EmptyBrackets {
                code: "XX".to_string(),
            })
        );
    }

    #[test]
    fn new_rejects_schedule_not_starting_at_zero() {
        let brackets = vec![TaxBracket::new(dec!(1000), None, dec!(0.10))];

        let result = tables(vec![province("XX", brackets)]);

        assert_eq!(
            result,
            Err(TablesError::FirstBracketNotZero {
                code: "XX".to_string(),
                start: dec!(1000),
            })
        );
    }

    #[test]
    fn new_rejects_gap_between_brackets() {
        let brackets = vec![
            TaxBracket::new(dec!(0), Some(dec!(40000)), dec!(0.10)),
            TaxBracket::new(dec!(45000), None, dec!(0.20)),
        ];

        let result = tables(vec![province("XX", brackets)]);

        assert_eq!(
            result,
            Err(TablesError::NonContiguousBrackets {
                code: "XX".to_string(),
                min: dec!(45000),
                expected: dec!(40000),
            })
        );
    }

    #[test]
    fn new_rejects_overlapping_brackets() {
        let brackets = vec![
            TaxBracket::new(dec!(0), Some(dec!(40000)), dec!(0.10)),
            TaxBracket::new(dec!(35000), None, dec!(0.20)),
        ];

        let result = tables(vec![province("XX", brackets)]);

        assert_eq!(
            result,
            Err(TablesError::NonContiguousBrackets {
                code: "XX".to_string(),
                min: dec!(35000),
                expected: dec!(40000),
            })
        );
    }

    #[test]
    fn new_rejects_inverted_bracket() {
        let brackets = vec![
            TaxBracket::new(dec!(0), Some(dec!(0)), dec!(0.10)),
            TaxBracket::new(dec!(0), None, dec!(0.20)),
        ];

        let result = tables(vec![province("XX", brackets)]);

        assert_eq!(
            result,
            Err(TablesError::InvertedBracket {
                code: "XX".to_string(),
                min: dec!(0),
                max: dec!(0),
            })
        );
    }

    #[test]
    fn new_rejects_unbounded_bracket_before_last() {
        let brackets = vec![
            TaxBracket::new(dec!(0), None, dec!(0.10)),
            TaxBracket::new(dec!(50000), None, dec!(0.20)),
        ];

        let result = tables(vec![province("XX", brackets)]);

        assert_eq!(
            result,
            Err(TablesError::UnboundedBracketNotLast {
                code: "XX".to_string(),
            })
        );
    }

    #[test]
    fn new_rejects_bounded_last_bracket() {
        let brackets = vec![
            TaxBracket::new(dec!(0), Some(dec!(50000)), dec!(0.10)),
            TaxBracket::new(dec!(50000), Some(dec!(100000)), dec!(0.20)),
        ];

        let result = tables(vec![province("XX", brackets)]);

        assert_eq!(
            result,
            Err(TablesError::BoundedLastBracket {
                code: "XX".to_string(),
            })
        );
    }

    #[test]
    fn new_rejects_rate_above_one() {
        let brackets = vec![TaxBracket::new(dec!(0), None, dec!(1.5))];

        let result = tables(vec![province("XX", brackets)]);

        assert_eq!(
            result,
            Err(TablesError::InvalidRate {
                code: "XX".to_string(),
                rate: dec!(1.5),
            })
        );
    }

    #[test]
    fn new_validates_the_federal_schedule_too() {
        let mut bad_federal = federal();
        bad_federal.brackets = vec![];

        let result = TaxTables::new(
            2024,
            bad_federal,
            vec![],
            payroll(),
            amt(),
            benefits(),
            dec!(0.50),
        );

        assert_eq!(
            result,
            Err(TablesError::EmptyBrackets {
                code: "federal".to_string(),
            })
        );
    }

    #[test]
    fn province_codes_are_sorted() {
        let tables = tables(vec![
            province("ON", two_band_schedule()),
            province("AB", two_band_schedule()),
            province("BC", two_band_schedule()),
        ])
        .unwrap();

        let codes: Vec<&str> = tables.province_codes().collect();
        assert_eq!(codes, vec!["AB", "BC", "ON"]);
    }
}
