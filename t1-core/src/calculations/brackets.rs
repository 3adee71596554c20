//! Progressive bracket integration and marginal rate lookup.
//!
//! Both functions are pure and are reused for federal tax, provincial tax,
//! and the tax on split income (which runs the federal schedule over the
//! split amount alone).

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::TaxBracket;

/// Tax on `income` under a progressive schedule, rounded to the cent.
///
/// Each band taxes the slice of income it covers at its own rate. Bands the
/// income never reaches contribute nothing.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use t1_core::calculations::brackets::tax_on_brackets;
/// use t1_core::models::TaxBracket;
///
/// let schedule = vec![
///     TaxBracket::new(dec!(0), Some(dec!(55867)), dec!(0.15)),
///     TaxBracket::new(dec!(55867), None, dec!(0.205)),
/// ];
///
/// // 55867 × 0.15 + 4133 × 0.205
/// assert_eq!(tax_on_brackets(dec!(60000), &schedule), dec!(9227.32));
/// ```
pub fn tax_on_brackets(income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut total = Decimal::ZERO;
    for bracket in brackets {
        if income <= bracket.min_income {
            break;
        }
        let upper = bracket.max_income.map_or(income, |max| income.min(max));
        total += (upper - bracket.min_income) * bracket.rate;
    }
    round_half_up(total)
}

/// The rate applied to the next dollar of income under a schedule.
///
/// Falls back to the top band's rate when income sits beyond every bounded
/// band, which cannot happen for a validated schedule (its top band is
/// unbounded) but keeps the lookup total.
pub fn marginal_rate(income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    brackets
        .iter()
        .find(|bracket| bracket.contains(income))
        .or_else(|| brackets.last())
        .map_or(Decimal::ZERO, |bracket| bracket.rate)
}
