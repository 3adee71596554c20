use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::tax_return::{InputError, require_non_negative};

/// Pension income splitting election.
///
/// The election is validated (at most half of eligible pension income may be
/// split) but does not reassign income between spouses: the engine computes a
/// single return, and the transferee's side lives in a separate computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PensionSplitting {
    pub eligible_pension_income: Decimal,
    pub amount_to_split: Decimal,
    pub split_with_spouse: bool,
}

impl PensionSplitting {
    pub(crate) fn validate(&self) -> Result<(), InputError> {
        require_non_negative("eligiblePensionIncome", self.eligible_pension_income)?;
        require_non_negative("amountToSplit", self.amount_to_split)?;
        let half = self.eligible_pension_income / Decimal::TWO;
        if self.amount_to_split > half {
            return Err(InputError::SplitExceedsEligible {
                split: self.amount_to_split,
                eligible: self.eligible_pension_income,
            });
        }
        Ok(())
    }
}
