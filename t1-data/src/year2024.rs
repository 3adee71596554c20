//! The 2024 tables: federal schedule and amounts, thirteen provincial and
//! territorial profiles, payroll constants, AMT parameters, and benefit
//! thresholds.
//!
//! Adding a jurisdiction is adding a profile here; there are no per-province
//! code paths anywhere in the pipeline.

use rust_decimal_macros::dec;
use t1_core::models::{
    AmtRules, BenefitSchedule, FederalProfile, JurisdictionProfile, PayrollRules,
    PensionPlanRules, ProvincialAmounts, Surtax, SurtaxTier, TablesError, TaxBracket, TaxTables,
};

/// Builds the validated 2024 table set.
///
/// # Errors
///
/// Returns [`TablesError`] if any bracket schedule is malformed; with the
/// schedules below that indicates an editing mistake in this module, caught
/// at load time rather than during a computation.
pub fn tables_2024() -> Result<TaxTables, TablesError> {
    TaxTables::new(
        2024,
        federal(),
        provinces(),
        payroll(),
        amt(),
        benefits(),
        dec!(0.50),
    )
}

fn federal() -> FederalProfile {
    FederalProfile {
        brackets: vec![
            TaxBracket::new(dec!(0), Some(dec!(55867)), dec!(0.15)),
            TaxBracket::new(dec!(55867), Some(dec!(111733)), dec!(0.205)),
            TaxBracket::new(dec!(111733), Some(dec!(173205)), dec!(0.26)),
            TaxBracket::new(dec!(173205), Some(dec!(246752)), dec!(0.29)),
            TaxBracket::new(dec!(246752), None, dec!(0.33)),
        ],
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

fn payroll() -> PayrollRules {
    PayrollRules {
        base_plan: PensionPlanRules {
            max_pensionable: dec!(71300),
            basic_exemption: dec!(3500),
            rate: dec!(0.0595),
            max_contribution: Some(dec!(4055.25)),
        },
        // QPP: same ceiling and exemption, its own rate, no annual cap.
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

fn profile(
    code: &str,
    name: &str,
    brackets: Vec<TaxBracket>,
    amounts: ProvincialAmounts,
) -> JurisdictionProfile {
    JurisdictionProfile {
        code: code.to_string(),
        name: name.to_string(),
        brackets,
        amounts,
        surtax: None,
        has_health_premium: false,
        parallel_plans: false,
    }
}

fn provinces() -> Vec<JurisdictionProfile> {
    vec![
        alberta(),
        british_columbia(),
        manitoba(),
        new_brunswick(),
        newfoundland_and_labrador(),
        nova_scotia(),
        northwest_territories(),
        nunavut(),
        ontario(),
        prince_edward_island(),
        quebec(),
        saskatchewan(),
        yukon(),
    ]
}

fn alberta() -> JurisdictionProfile {
    profile(
        "AB",
        "Alberta",
        vec![TaxBracket::new(dec!(0), None, dec!(0.10))],
        ProvincialAmounts {
            basic_personal: dec!(21003),
            spouse_equivalent: dec!(21003),
            age_amount: dec!(27060),
            pension_amount: dec!(1360),
            disability_amount: dec!(17787),
            medical_rate: dec!(0.10),
            charitable_rate: dec!(0.10),
            dividend_tax_credit: dec!(0.10),
            political_contribution_rate: dec!(0.75),
        },
    )
}

fn british_columbia() -> JurisdictionProfile {
    profile(
        "BC",
        "British Columbia",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(47937)), dec!(0.0506)),
            TaxBracket::new(dec!(47937), Some(dec!(95875)), dec!(0.077)),
            TaxBracket::new(dec!(95875), Some(dec!(110076)), dec!(0.105)),
            TaxBracket::new(dec!(110076), Some(dec!(133664)), dec!(0.1229)),
            TaxBracket::new(dec!(133664), Some(dec!(181232)), dec!(0.147)),
            TaxBracket::new(dec!(181232), None, dec!(0.2045)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(12580),
            spouse_equivalent: dec!(12580),
            age_amount: dec!(4908),
            pension_amount: dec!(1000),
            disability_amount: dec!(8405),
            medical_rate: dec!(0.0506),
            charitable_rate: dec!(0.0506),
            dividend_tax_credit: dec!(0.10),
            political_contribution_rate: dec!(0.75),
        },
    )
}

fn manitoba() -> JurisdictionProfile {
    profile(
        "MB",
        "Manitoba",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(47000)), dec!(0.108)),
            TaxBracket::new(dec!(47000), Some(dec!(100000)), dec!(0.1275)),
            TaxBracket::new(dec!(100000), None, dec!(0.174)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(15780),
            spouse_equivalent: dec!(15780),
            age_amount: dec!(3728),
            pension_amount: dec!(1000),
            disability_amount: dec!(4530),
            medical_rate: dec!(0.108),
            charitable_rate: dec!(0.108),
            dividend_tax_credit: dec!(0.08),
            political_contribution_rate: dec!(0.75),
        },
    )
}

fn new_brunswick() -> JurisdictionProfile {
    profile(
        "NB",
        "New Brunswick",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(49958)), dec!(0.094)),
            TaxBracket::new(dec!(49958), Some(dec!(99916)), dec!(0.14)),
            TaxBracket::new(dec!(99916), Some(dec!(185064)), dec!(0.16)),
            TaxBracket::new(dec!(185064), None, dec!(0.195)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(12458),
            spouse_equivalent: dec!(12458),
            age_amount: dec!(5355),
            pension_amount: dec!(1000),
            disability_amount: dec!(8870),
            medical_rate: dec!(0.094),
            charitable_rate: dec!(0.094),
            dividend_tax_credit: dec!(0.0275),
            political_contribution_rate: dec!(0.75),
        },
    )
}

fn newfoundland_and_labrador() -> JurisdictionProfile {
    profile(
        "NL",
        "Newfoundland and Labrador",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(43198)), dec!(0.087)),
            TaxBracket::new(dec!(43198), Some(dec!(86395)), dec!(0.145)),
            TaxBracket::new(dec!(86395), Some(dec!(154244)), dec!(0.158)),
            TaxBracket::new(dec!(154244), Some(dec!(215943)), dec!(0.178)),
            TaxBracket::new(dec!(215943), None, dec!(0.198)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(10382),
            spouse_equivalent: dec!(10382),
            age_amount: dec!(7401),
            pension_amount: dec!(1000),
            disability_amount: dec!(4200),
            medical_rate: dec!(0.087),
            charitable_rate: dec!(0.087),
            dividend_tax_credit: dec!(0.035),
            political_contribution_rate: dec!(0.75),
        },
    )
}

fn nova_scotia() -> JurisdictionProfile {
    profile(
        "NS",
        "Nova Scotia",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(29590)), dec!(0.0879)),
            TaxBracket::new(dec!(29590), Some(dec!(59180)), dec!(0.1495)),
            TaxBracket::new(dec!(59180), Some(dec!(93000)), dec!(0.1667)),
            TaxBracket::new(dec!(93000), Some(dec!(150000)), dec!(0.175)),
            TaxBracket::new(dec!(150000), None, dec!(0.21)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(8744),
            spouse_equivalent: dec!(8744),
            age_amount: dec!(6313),
            pension_amount: dec!(1000),
            disability_amount: dec!(7341),
            medical_rate: dec!(0.0879),
            charitable_rate: dec!(0.0879),
            dividend_tax_credit: dec!(0.0885),
            political_contribution_rate: dec!(0.75),
        },
    )
}

fn northwest_territories() -> JurisdictionProfile {
    profile(
        "NT",
        "Northwest Territories",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(50597)), dec!(0.059)),
            TaxBracket::new(dec!(50597), Some(dec!(101198)), dec!(0.086)),
            TaxBracket::new(dec!(101198), Some(dec!(164525)), dec!(0.122)),
            TaxBracket::new(dec!(164525), None, dec!(0.1405)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(16593),
            spouse_equivalent: dec!(16593),
            age_amount: dec!(7898),
            pension_amount: dec!(1000),
            disability_amount: dec!(4637),
            medical_rate: dec!(0.059),
            charitable_rate: dec!(0.059),
            dividend_tax_credit: dec!(0.115),
            political_contribution_rate: dec!(0.75),
        },
    )
}

fn nunavut() -> JurisdictionProfile {
    profile(
        "NU",
        "Nunavut",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(53268)), dec!(0.04)),
            TaxBracket::new(dec!(53268), Some(dec!(106537)), dec!(0.07)),
            TaxBracket::new(dec!(106537), Some(dec!(173205)), dec!(0.09)),
            TaxBracket::new(dec!(173205), None, dec!(0.115)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(19531),
            spouse_equivalent: dec!(19531),
            age_amount: dec!(7898),
            pension_amount: dec!(1000),
            disability_amount: dec!(4637),
            medical_rate: dec!(0.04),
            charitable_rate: dec!(0.04),
            dividend_tax_credit: dec!(0.0551),
            political_contribution_rate: dec!(0.75),
        },
    )
}

fn ontario() -> JurisdictionProfile {
    let mut ontario = profile(
        "ON",
        "Ontario",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(51446)), dec!(0.0505)),
            TaxBracket::new(dec!(51446), Some(dec!(102894)), dec!(0.0915)),
            TaxBracket::new(dec!(102894), Some(dec!(150000)), dec!(0.1116)),
            TaxBracket::new(dec!(150000), Some(dec!(220000)), dec!(0.1216)),
            TaxBracket::new(dec!(220000), None, dec!(0.1316)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(12399),
            spouse_equivalent: dec!(12399),
            age_amount: dec!(5846),
            pension_amount: dec!(1000),
            disability_amount: dec!(9545),
            medical_rate: dec!(0.0505),
            charitable_rate: dec!(0.0505),
            dividend_tax_credit: dec!(0.10),
            political_contribution_rate: dec!(0.75),
        },
    );
    ontario.has_health_premium = true;
    ontario.surtax = Some(Surtax {
        tiers: vec![
            SurtaxTier {
                threshold: dec!(5554),
                rate: dec!(0.20),
            },
            SurtaxTier {
                threshold: dec!(7108),
                rate: dec!(0.36),
            },
        ],
    });
    ontario
}

fn prince_edward_island() -> JurisdictionProfile {
    let mut pei = profile(
        "PE",
        "Prince Edward Island",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(32656)), dec!(0.098)),
            TaxBracket::new(dec!(32656), Some(dec!(65312)), dec!(0.138)),
            TaxBracket::new(dec!(65312), Some(dec!(105000)), dec!(0.167)),
            TaxBracket::new(dec!(105000), None, dec!(0.187)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(12500),
            spouse_equivalent: dec!(12500),
            age_amount: dec!(4207),
            pension_amount: dec!(1000),
            disability_amount: dec!(7341),
            medical_rate: dec!(0.098),
            charitable_rate: dec!(0.098),
            dividend_tax_credit: dec!(0.105),
            political_contribution_rate: dec!(0.75),
        },
    );
    pei.surtax = Some(Surtax {
        tiers: vec![SurtaxTier {
            threshold: dec!(12500),
            rate: dec!(0.10),
        }],
    });
    pei
}

fn quebec() -> JurisdictionProfile {
    let mut quebec = profile(
        "QC",
        "Quebec",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(51780)), dec!(0.14)),
            TaxBracket::new(dec!(51780), Some(dec!(103545)), dec!(0.19)),
            TaxBracket::new(dec!(103545), Some(dec!(126000)), dec!(0.24)),
            TaxBracket::new(dec!(126000), None, dec!(0.2575)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(18056),
            spouse_equivalent: dec!(18056),
            age_amount: dec!(3208),
            pension_amount: dec!(2815),
            disability_amount: dec!(3708),
            medical_rate: dec!(0.20),
            charitable_rate: dec!(0.20),
            dividend_tax_credit: dec!(0.0778),
            political_contribution_rate: dec!(0.75),
        },
    );
    quebec.parallel_plans = true;
    quebec
}

fn saskatchewan() -> JurisdictionProfile {
    profile(
        "SK",
        "Saskatchewan",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(52057)), dec!(0.105)),
            TaxBracket::new(dec!(52057), Some(dec!(148734)), dec!(0.125)),
            TaxBracket::new(dec!(148734), None, dec!(0.145)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(17661),
            spouse_equivalent: dec!(17661),
            age_amount: dec!(6065),
            pension_amount: dec!(1000),
            disability_amount: dec!(5659),
            medical_rate: dec!(0.105),
            charitable_rate: dec!(0.105),
            dividend_tax_credit: dec!(0.11),
            political_contribution_rate: dec!(0.75),
        },
    )
}

fn yukon() -> JurisdictionProfile {
    profile(
        "YT",
        "Yukon",
        vec![
            TaxBracket::new(dec!(0), Some(dec!(55867)), dec!(0.064)),
            TaxBracket::new(dec!(55867), Some(dec!(111733)), dec!(0.09)),
            TaxBracket::new(dec!(111733), Some(dec!(173205)), dec!(0.109)),
            TaxBracket::new(dec!(173205), Some(dec!(500000)), dec!(0.128)),
            TaxBracket::new(dec!(500000), None, dec!(0.15)),
        ],
        ProvincialAmounts {
            basic_personal: dec!(15705),
            spouse_equivalent: dec!(15705),
            age_amount: dec!(7898),
            pension_amount: dec!(1000),
            disability_amount: dec!(9428),
            medical_rate: dec!(0.064),
            charitable_rate: dec!(0.064),
            dividend_tax_credit: dec!(0.124),
            political_contribution_rate: dec!(0.75),
        },
    )
}
