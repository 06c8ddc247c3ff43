use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CaseId, ProgramYear, WizardDraft};
use super::eligibility::EligibilityResults;

/// Persisted wizard state for one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub case_id: CaseId,
    pub program_year: ProgramYear,
    pub draft: WizardDraft,
    /// Live estimate for the draft, or `None` while required answers are missing.
    pub results: Option<EligibilityResults>,
    /// Set once the household reached the results step.
    pub finalized: bool,
    pub updated_at: DateTime<Utc>,
}

impl DraftRecord {
    pub fn status_view(&self) -> DraftStatusView {
        DraftStatusView {
            case_id: self.case_id.clone(),
            program_year: self.program_year,
            status: if self.finalized {
                "finalized"
            } else if self.results.is_some() {
                "estimated"
            } else {
                "incomplete"
            },
            total_estimated_annual_amount: self
                .results
                .as_ref()
                .map(|results| results.total_estimated_annual_amount),
            updated_at: self.updated_at,
        }
    }
}

/// Storage abstraction for wizard drafts (local or remote).
pub trait DraftRepository: Send + Sync {
    fn save(&self, record: DraftRecord) -> Result<DraftRecord, RepositoryError>;
    fn fetch(&self, case_id: &CaseId) -> Result<Option<DraftRecord>, RepositoryError>;
    fn remove(&self, case_id: &CaseId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("draft not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Summary of a draft exposed over the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftStatusView {
    pub case_id: CaseId,
    pub program_year: ProgramYear,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_estimated_annual_amount: Option<f64>,
    pub updated_at: DateTime<Utc>,
}
