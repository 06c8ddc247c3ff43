use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use toeslagen::benefits::{
    CaseId, DraftRecord, DraftRepository, EligibilityServiceError, RepositoryError, RulesCatalog,
};
use toeslagen::config::RulesConfig;
use toeslagen::error::AppError;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<RulesCatalog>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDraftRepository {
    records: Arc<Mutex<HashMap<CaseId, DraftRecord>>>,
}

impl InMemoryDraftRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<CaseId, DraftRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("draft store poisoned".to_string()))
    }
}

impl DraftRepository for InMemoryDraftRepository {
    fn save(&self, record: DraftRecord) -> Result<DraftRecord, RepositoryError> {
        let mut guard = self.lock()?;
        guard.insert(record.case_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, case_id: &CaseId) -> Result<Option<DraftRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(case_id).cloned())
    }

    fn remove(&self, case_id: &CaseId) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        guard
            .remove(case_id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

/// Compiled tables plus any tables found in the configured rules directory.
///
/// Fails when the configured default year has no table, so a bad deploy never starts serving.
pub(crate) fn build_catalog(config: &RulesConfig) -> Result<RulesCatalog, AppError> {
    let mut catalog = RulesCatalog::standard()?;

    if let Some(dir) = &config.rules_dir {
        let loaded = catalog.load_dir(dir)?;
        info!(count = loaded, dir = %dir.display(), "loaded rules tables");
    }

    if catalog.get(config.program_year).is_none() {
        return Err(EligibilityServiceError::UnknownProgramYear(config.program_year).into());
    }

    Ok(catalog)
}
