use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal rate band of a progressive schedule.
///
/// `max_income` is `None` for the top band, which extends without bound.
/// A jurisdiction's bands must be contiguous and ascending; that invariant is
/// enforced when the tables are assembled, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(min_income: Decimal, max_income: Option<Decimal>, rate: Decimal) -> Self {
        Self {
            min_income,
            max_income,
            rate,
        }
    }

    /// Whether `income` falls inside this band's half-open range.
    pub fn contains(&self, income: Decimal) -> bool {
        income >= self.min_income && self.max_income.is_none_or(|max| income < max)
    }
}
