use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::benefits::domain::{
    BenefitsWizardInput, CaseId, ChildcareType, HouseholdType, ProgramYear, WizardDraft,
};
use crate::benefits::repository::{DraftRecord, DraftRepository, RepositoryError};
use crate::benefits::rules::{RulesCatalog, ToeslagRules};
use crate::benefits::service::EligibilityService;

pub(super) fn rules() -> ToeslagRules {
    ToeslagRules::year_2026()
}

/// Single renter from the wizard's reference fixture.
pub(super) fn single_renter() -> BenefitsWizardInput {
    BenefitsWizardInput {
        age: 29,
        household_type: HouseholdType::Single,
        annual_income: 32_000.0,
        assets: 12_000.0,
        nl_resident: true,
        has_health_insurance: true,
        has_independent_home: true,
        has_rental_contract: true,
        monthly_rent: 950.0,
        children_under18: 0,
        receives_kinderbijslag: false,
        childcare_hours_per_month: 0.0,
        childcare_type: ChildcareType::Daycare,
        childcare_hourly_rate: 10.0,
        registered_childcare: false,
        both_parents_work: false,
    }
}

/// Family with substantial savings and registered daycare.
pub(super) fn wealthy_family() -> BenefitsWizardInput {
    BenefitsWizardInput {
        age: 35,
        annual_income: 28_000.0,
        assets: 200_000.0,
        children_under18: 2,
        receives_kinderbijslag: true,
        childcare_hours_per_month: 20.0,
        registered_childcare: true,
        both_parents_work: true,
        ..single_renter()
    }
}

pub(super) fn complete_draft() -> WizardDraft {
    WizardDraft::from(&single_renter())
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected {expected}, got {actual}"
    );
}

#[derive(Default, Clone)]
pub(super) struct MemoryDrafts {
    records: Arc<Mutex<HashMap<CaseId, DraftRecord>>>,
}

impl DraftRepository for MemoryDrafts {
    fn save(&self, record: DraftRecord) -> Result<DraftRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        guard.insert(record.case_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, case_id: &CaseId) -> Result<Option<DraftRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.get(case_id).cloned())
    }

    fn remove(&self, case_id: &CaseId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        guard
            .remove(case_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableDrafts;

impl DraftRepository for UnavailableDrafts {
    fn save(&self, _record: DraftRecord) -> Result<DraftRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn fetch(&self, _case_id: &CaseId) -> Result<Option<DraftRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn remove(&self, _case_id: &CaseId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }
}

pub(super) fn build_service() -> (EligibilityService<MemoryDrafts>, Arc<MemoryDrafts>) {
    let repository = Arc::new(MemoryDrafts::default());
    let service = EligibilityService::new(
        Arc::new(RulesCatalog::standard().expect("compiled tables validate")),
        repository.clone(),
        ProgramYear(2026),
    );
    (service, repository)
}

pub(super) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn json_request(
    method: axum::http::Method,
    uri: &str,
    payload: serde_json::Value,
) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(payload.to_string()))
        .expect("request builds")
}
