use serde::{Deserialize, Serialize};

use super::domain::{ProgramYear, Scheme};
use super::eligibility::{round_currency, EligibilityResults};

/// Reasons a bundle selection cannot be priced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BundleError {
    #[error("no schemes selected")]
    EmptySelection,
    #[error("{} cannot be selected: household is not eligible", .0.label())]
    SchemeNotEligible(Scheme),
}

/// One priced line of a bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleLine {
    pub scheme: Scheme,
    pub estimated_annual_amount: f64,
}

/// Selected schemes and the summed estimate used as the checkout basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleQuote {
    pub program_year: ProgramYear,
    pub lines: Vec<BundleLine>,
    pub total: f64,
}

impl BundleQuote {
    /// Price `selected` against `results`. Only eligible schemes are selectable; repeated
    /// schemes are counted once and lines follow the fixed scheme order.
    pub fn build(results: &EligibilityResults, selected: &[Scheme]) -> Result<Self, BundleError> {
        if selected.is_empty() {
            return Err(BundleError::EmptySelection);
        }

        if let Some(scheme) = selected
            .iter()
            .copied()
            .find(|scheme| !results.get(*scheme).eligible)
        {
            return Err(BundleError::SchemeNotEligible(scheme));
        }

        let lines: Vec<BundleLine> = results
            .iter()
            .filter(|(scheme, _)| selected.contains(scheme))
            .map(|(scheme, result)| BundleLine {
                scheme,
                estimated_annual_amount: result.estimated_annual_amount,
            })
            .collect();

        let total = round_currency(
            lines
                .iter()
                .map(|line| line.estimated_annual_amount)
                .sum::<f64>(),
        );

        Ok(Self {
            program_year: results.program_year,
            lines,
            total,
        })
    }
}
