//! Benefits eligibility: rules tables, the per-scheme calculator, and the wizard-facing
//! intake, draft, and bundle plumbing around it.

pub mod bundle;
pub mod domain;
pub mod eligibility;
pub mod intake;
pub mod repository;
pub mod router;
pub mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use bundle::{BundleError, BundleLine, BundleQuote};
pub use domain::{
    BenefitsWizardInput, CaseId, ChildcareType, HouseholdType, ProgramYear, Scheme, WizardDraft,
};
pub use eligibility::{
    calculate, round_currency, BenefitResult, EligibilityEngine, EligibilityResults,
    IneligibilityReason,
};
pub use intake::{IntakeGuard, IntakeViolation};
pub use repository::{DraftRecord, DraftRepository, DraftStatusView, RepositoryError};
pub use router::benefits_router;
pub use rules::{RulesCatalog, RulesError, ToeslagRules};
pub use service::{EligibilityService, EligibilityServiceError};
