use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::bundle::{BundleError, BundleQuote};
use super::domain::{BenefitsWizardInput, CaseId, ProgramYear, Scheme, WizardDraft};
use super::eligibility::{EligibilityEngine, EligibilityResults};
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{DraftRecord, DraftRepository, RepositoryError};
use super::rules::RulesCatalog;

/// Service composing the rules catalog, intake guard, and draft repository.
pub struct EligibilityService<R> {
    catalog: Arc<RulesCatalog>,
    guard: IntakeGuard,
    repository: Arc<R>,
    default_year: ProgramYear,
}

impl<R> EligibilityService<R>
where
    R: DraftRepository + 'static,
{
    pub fn new(catalog: Arc<RulesCatalog>, repository: Arc<R>, default_year: ProgramYear) -> Self {
        Self::with_guard(IntakeGuard::default(), catalog, repository, default_year)
    }

    pub fn with_guard(
        guard: IntakeGuard,
        catalog: Arc<RulesCatalog>,
        repository: Arc<R>,
        default_year: ProgramYear,
    ) -> Self {
        Self {
            catalog,
            guard,
            repository,
            default_year,
        }
    }

    pub fn default_year(&self) -> ProgramYear {
        self.default_year
    }

    /// Calculator bound to the table published for `year`.
    pub fn engine(
        &self,
        year: ProgramYear,
    ) -> Result<EligibilityEngine, EligibilityServiceError> {
        self.catalog
            .get(year)
            .map(EligibilityEngine::new)
            .ok_or(EligibilityServiceError::UnknownProgramYear(year))
    }

    /// Live estimate for a complete input, without touching storage.
    pub fn estimate(
        &self,
        year: Option<ProgramYear>,
        input: &BenefitsWizardInput,
    ) -> Result<EligibilityResults, EligibilityServiceError> {
        let engine = self.engine(year.unwrap_or(self.default_year))?;
        self.guard.check(input)?;
        Ok(engine.evaluate(input))
    }

    /// Store the latest draft for a case, refreshing the live estimate when possible.
    pub fn save_draft(
        &self,
        case_id: CaseId,
        year: Option<ProgramYear>,
        draft: WizardDraft,
    ) -> Result<DraftRecord, EligibilityServiceError> {
        let year = year.unwrap_or(self.default_year);
        let engine = self.engine(year)?;

        let results = match self.guard.input_from_draft(&draft) {
            Ok(input) => Some(engine.evaluate(&input)),
            Err(violation) => {
                debug!(case_id = %case_id.0, %violation, "draft not ready for an estimate");
                None
            }
        };

        let record = DraftRecord {
            case_id,
            program_year: year,
            draft,
            results,
            finalized: false,
            updated_at: Utc::now(),
        };

        Ok(self.repository.save(record)?)
    }

    /// Results step: the draft must be complete; results are recomputed and persisted.
    pub fn finalize(&self, case_id: &CaseId) -> Result<DraftRecord, EligibilityServiceError> {
        let mut record = self.draft(case_id)?;
        let engine = self.engine(record.program_year)?;
        let input = self.guard.input_from_draft(&record.draft)?;
        let results = engine.evaluate(&input);

        info!(
            case_id = %case_id.0,
            year = %record.program_year,
            eligible = results.eligible_schemes().len(),
            total = results.total_estimated_annual_amount,
            "eligibility results finalized"
        );

        record.results = Some(results);
        record.finalized = true;
        record.updated_at = Utc::now();

        Ok(self.repository.save(record)?)
    }

    /// Price a bundle against the finalized results of a case.
    pub fn quote(
        &self,
        case_id: &CaseId,
        selected: &[Scheme],
    ) -> Result<BundleQuote, EligibilityServiceError> {
        let record = self.draft(case_id)?;
        let results = match (&record.results, record.finalized) {
            (Some(results), true) => results,
            _ => return Err(EligibilityServiceError::ResultsPending),
        };

        let quote = BundleQuote::build(results, selected)?;
        info!(
            case_id = %case_id.0,
            schemes = quote.lines.len(),
            total = quote.total,
            "bundle quoted"
        );
        Ok(quote)
    }

    pub fn draft(&self, case_id: &CaseId) -> Result<DraftRecord, EligibilityServiceError> {
        let record = self
            .repository
            .fetch(case_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn discard(&self, case_id: &CaseId) -> Result<(), EligibilityServiceError> {
        self.repository.remove(case_id)?;
        Ok(())
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Bundle(#[from] BundleError),
    #[error("no rules table published for program year {0}")]
    UnknownProgramYear(ProgramYear),
    #[error("eligibility results have not been finalized for this case")]
    ResultsPending,
}
