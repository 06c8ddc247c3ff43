mod reasons;
mod schemes;

pub use reasons::IneligibilityReason;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{BenefitsWizardInput, ProgramYear, Scheme};
use super::rules::ToeslagRules;
use reasons::Gates;

/// Round to whole cents and clamp at zero.
pub fn round_currency(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded > 0.0 {
        rounded
    } else {
        0.0
    }
}

/// Evaluate every scheme for `input` against a single program year's table.
///
/// Pure and total: identical inputs always give identical results, and ineligibility is
/// reported through `reasons` rather than an error.
pub fn calculate(input: &BenefitsWizardInput, rules: &ToeslagRules) -> EligibilityResults {
    let zorgtoeslag = schemes::zorgtoeslag(input, &rules.zorgtoeslag);
    let huurtoeslag = schemes::huurtoeslag(input, &rules.huurtoeslag);
    let kindgebonden_budget = schemes::kindgebonden_budget(input, &rules.kindgebonden_budget);
    let kinderopvangtoeslag = schemes::kinderopvangtoeslag(input, &rules.kinderopvangtoeslag);

    let total_estimated_annual_amount = round_currency(
        zorgtoeslag.estimated_annual_amount
            + huurtoeslag.estimated_annual_amount
            + kindgebonden_budget.estimated_annual_amount
            + kinderopvangtoeslag.estimated_annual_amount,
    );

    EligibilityResults {
        program_year: rules.program_year,
        zorgtoeslag,
        huurtoeslag,
        kindgebonden_budget,
        kinderopvangtoeslag,
        total_estimated_annual_amount,
    }
}

/// Stateless evaluator bound to one program year's rules.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    rules: Arc<ToeslagRules>,
}

impl EligibilityEngine {
    pub fn new(rules: Arc<ToeslagRules>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ToeslagRules {
        &self.rules
    }

    pub fn evaluate(&self, input: &BenefitsWizardInput) -> EligibilityResults {
        calculate(input, &self.rules)
    }
}

/// Verdict and estimate for a single scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitResult {
    pub eligible: bool,
    pub estimated_annual_amount: f64,
    pub reasons: Vec<IneligibilityReason>,
}

impl BenefitResult {
    fn from_gates(gates: Gates, estimate: impl FnOnce() -> f64) -> Self {
        let reasons = gates.into_reasons();
        if reasons.is_empty() {
            Self {
                eligible: true,
                estimated_annual_amount: round_currency(estimate()),
                reasons,
            }
        } else {
            Self {
                eligible: false,
                estimated_annual_amount: 0.0,
                reasons,
            }
        }
    }
}

/// Per-scheme outcome plus the summed estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResults {
    pub program_year: ProgramYear,
    pub zorgtoeslag: BenefitResult,
    pub huurtoeslag: BenefitResult,
    pub kindgebonden_budget: BenefitResult,
    pub kinderopvangtoeslag: BenefitResult,
    pub total_estimated_annual_amount: f64,
}

impl EligibilityResults {
    pub fn get(&self, scheme: Scheme) -> &BenefitResult {
        match scheme {
            Scheme::Zorgtoeslag => &self.zorgtoeslag,
            Scheme::Huurtoeslag => &self.huurtoeslag,
            Scheme::KindgebondenBudget => &self.kindgebonden_budget,
            Scheme::Kinderopvangtoeslag => &self.kinderopvangtoeslag,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Scheme, &BenefitResult)> + '_ {
        Scheme::ALL.into_iter().map(move |scheme| (scheme, self.get(scheme)))
    }

    pub fn eligible_schemes(&self) -> Vec<Scheme> {
        self.iter()
            .filter(|(_, result)| result.eligible)
            .map(|(scheme, _)| scheme)
            .collect()
    }
}
