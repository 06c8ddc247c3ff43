//! End-to-end behavior of the wizard-facing service: drafts are saved step by step, results
//! are finalized, and a bundle is priced from them, all through the public facade and router.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use toeslagen::benefits::{
        BenefitsWizardInput, CaseId, ChildcareType, DraftRecord, DraftRepository,
        EligibilityService, HouseholdType, ProgramYear, RepositoryError, RulesCatalog,
    };

    pub(super) fn family() -> BenefitsWizardInput {
        BenefitsWizardInput {
            age: 34,
            household_type: HouseholdType::Partners,
            annual_income: 41_000.0,
            assets: 8_000.0,
            nl_resident: true,
            has_health_insurance: true,
            has_independent_home: true,
            has_rental_contract: true,
            monthly_rent: 1_150.0,
            children_under18: 2,
            receives_kinderbijslag: true,
            childcare_hours_per_month: 64.0,
            childcare_type: ChildcareType::OutOfSchoolCare,
            childcare_hourly_rate: 9.80,
            registered_childcare: true,
            both_parents_work: true,
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryDrafts {
        records: Arc<Mutex<HashMap<CaseId, DraftRecord>>>,
    }

    impl MemoryDrafts {
        pub(super) fn len(&self) -> usize {
            self.records.lock().expect("lock").len()
        }
    }

    impl DraftRepository for MemoryDrafts {
        fn save(&self, record: DraftRecord) -> Result<DraftRecord, RepositoryError> {
            self.records
                .lock()
                .expect("lock")
                .insert(record.case_id.clone(), record.clone());
            Ok(record)
        }

        fn fetch(&self, case_id: &CaseId) -> Result<Option<DraftRecord>, RepositoryError> {
            Ok(self.records.lock().expect("lock").get(case_id).cloned())
        }

        fn remove(&self, case_id: &CaseId) -> Result<(), RepositoryError> {
            self.records
                .lock()
                .expect("lock")
                .remove(case_id)
                .map(|_| ())
                .ok_or(RepositoryError::NotFound)
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
}

mod wizard {
    use super::common::*;
    use toeslagen::benefits::{CaseId, HouseholdType, IneligibilityReason, Scheme, WizardDraft};

    #[test]
    fn draft_gains_estimate_once_required_answers_arrive() {
        let (service, repository) = build_service();
        let case_id = CaseId("wizard-1".to_string());

        let mut draft = WizardDraft {
            age: Some(34),
            ..WizardDraft::default()
        };
        let first = service
            .save_draft(case_id.clone(), None, draft.clone())
            .expect("first step saved");
        assert!(first.results.is_none());

        draft.household_type = Some(HouseholdType::Partners);
        draft.annual_income = Some(41_000.0);
        let second = service
            .save_draft(case_id.clone(), None, draft)
            .expect("second step saved");

        let results = second.results.expect("estimate available");
        assert!(!results.zorgtoeslag.eligible);
        assert!(results
            .zorgtoeslag
            .reasons
            .contains(&IneligibilityReason::NotNlResident));
        assert_eq!(repository.len(), 1);
    }

    #[test]
    fn family_can_bundle_every_eligible_scheme() {
        let (service, _) = build_service();
        let case_id = CaseId("wizard-2".to_string());

        service
            .save_draft(case_id.clone(), None, WizardDraft::from(&family()))
            .expect("draft saved");
        let record = service.finalize(&case_id).expect("finalized");
        let results = record.results.expect("results");

        let eligible = results.eligible_schemes();
        assert_eq!(eligible, Scheme::ALL.to_vec());

        let quote = service.quote(&case_id, &eligible).expect("quote");
        assert_eq!(quote.lines.len(), 4);
        assert_eq!(quote.total, results.total_estimated_annual_amount);
        assert!(quote.total > 0.0);
    }
}

mod http {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::IntoResponse;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::common::*;
    use toeslagen::benefits::{benefits_router, EligibilityServiceError, ProgramYear};
    use toeslagen::error::AppError;

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn estimate_endpoint_reports_every_scheme() {
        let (service, _) = build_service();
        let router = benefits_router(Arc::new(service));

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/v1/benefits/estimate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "programYear": 2026, "input": family() }).to_string(),
                    ))
                    .expect("request"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        for scheme in [
            "zorgtoeslag",
            "huurtoeslag",
            "kindgebondenBudget",
            "kinderopvangtoeslag",
        ] {
            assert_eq!(payload[scheme]["eligible"], true, "{scheme} eligible");
        }
    }

    #[tokio::test]
    async fn app_error_maps_unknown_year_to_not_found() {
        let error = AppError::from(EligibilityServiceError::UnknownProgramYear(ProgramYear(2001)));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let payload = read_json(response).await;
        assert!(payload["error"]
            .as_str()
            .unwrap_or_default()
            .contains("2001"));
    }
}
