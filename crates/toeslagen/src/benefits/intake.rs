use super::domain::{BenefitsWizardInput, WizardDraft};

/// Validation errors raised before a household reaches the calculator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("wizard field `{0}` has not been answered yet")]
    MissingField(&'static str),
    #[error("wizard field `{field}` must be a non-negative number (found {value})")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("wizard field `{field}` is above the accepted maximum of {max} (found {value})")]
    AmountAboveLimit {
        field: &'static str,
        value: f64,
        max: f64,
    },
    #[error("age {found} is above the accepted maximum of {max}")]
    AgeOutOfRange { found: u32, max: u32 },
}

const DEFAULT_MAX_AGE: u32 = 130;

/// Upper bounds per wizard field; every calculator product stays finite below them.
const MAX_ANNUAL_INCOME: f64 = 100_000_000.0;
const MAX_ASSETS: f64 = 10_000_000_000.0;
const MAX_MONTHLY_RENT: f64 = 100_000.0;
/// Hours in a 31-day month.
const MAX_CHILDCARE_HOURS_PER_MONTH: f64 = 744.0;
const MAX_CHILDCARE_HOURLY_RATE: f64 = 1_000.0;

/// Boundary check producing calculator-ready [`BenefitsWizardInput`] values.
#[derive(Debug, Clone)]
pub struct IntakeGuard {
    max_age: u32,
}

impl Default for IntakeGuard {
    fn default() -> Self {
        Self::with_max_age(DEFAULT_MAX_AGE)
    }
}

impl IntakeGuard {
    pub fn with_max_age(max_age: u32) -> Self {
        Self { max_age }
    }

    /// Build a complete input from a persisted draft.
    ///
    /// Age, household type and income must be answered; unanswered yes/no questions count as
    /// "no" and unanswered amounts as zero, which is the wizard's initial state.
    pub fn input_from_draft(
        &self,
        draft: &WizardDraft,
    ) -> Result<BenefitsWizardInput, IntakeViolation> {
        let input = BenefitsWizardInput {
            age: draft.age.ok_or(IntakeViolation::MissingField("age"))?,
            household_type: draft
                .household_type
                .ok_or(IntakeViolation::MissingField("householdType"))?,
            annual_income: draft
                .annual_income
                .ok_or(IntakeViolation::MissingField("annualIncome"))?,
            assets: draft.assets.unwrap_or(0.0),
            nl_resident: draft.nl_resident.unwrap_or(false),
            has_health_insurance: draft.has_health_insurance.unwrap_or(false),
            has_independent_home: draft.has_independent_home.unwrap_or(false),
            has_rental_contract: draft.has_rental_contract.unwrap_or(false),
            monthly_rent: draft.monthly_rent.unwrap_or(0.0),
            children_under18: draft.children_under18.unwrap_or(0),
            receives_kinderbijslag: draft.receives_kinderbijslag.unwrap_or(false),
            childcare_hours_per_month: draft.childcare_hours_per_month.unwrap_or(0.0),
            childcare_type: draft.childcare_type.unwrap_or_default(),
            childcare_hourly_rate: draft.childcare_hourly_rate.unwrap_or(0.0),
            registered_childcare: draft.registered_childcare.unwrap_or(false),
            both_parents_work: draft.both_parents_work.unwrap_or(false),
        };

        self.check(&input)?;
        Ok(input)
    }

    /// Range-check an already complete input.
    pub fn check(&self, input: &BenefitsWizardInput) -> Result<(), IntakeViolation> {
        if input.age > self.max_age {
            return Err(IntakeViolation::AgeOutOfRange {
                found: input.age,
                max: self.max_age,
            });
        }

        let amounts = [
            ("annualIncome", input.annual_income, MAX_ANNUAL_INCOME),
            ("assets", input.assets, MAX_ASSETS),
            ("monthlyRent", input.monthly_rent, MAX_MONTHLY_RENT),
            (
                "childcareHoursPerMonth",
                input.childcare_hours_per_month,
                MAX_CHILDCARE_HOURS_PER_MONTH,
            ),
            (
                "childcareHourlyRate",
                input.childcare_hourly_rate,
                MAX_CHILDCARE_HOURLY_RATE,
            ),
        ];
        for (field, value, max) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(IntakeViolation::InvalidAmount { field, value });
            }
            if value > max {
                return Err(IntakeViolation::AmountAboveLimit { field, value, max });
            }
        }

        Ok(())
    }
}
