use serde::{Deserialize, Serialize};

/// Household composition used for every household-keyed threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HouseholdType {
    Single,
    Partners,
}

/// Kind of childcare, each with its own reimbursable hourly-rate cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChildcareType {
    #[default]
    Daycare,
    OutOfSchoolCare,
    Childminder,
}

/// Household snapshot collected by the benefits wizard.
///
/// Amounts are yearly gross figures in euros unless the field name says otherwise. Values are
/// expected to have passed the intake guard before they reach the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsWizardInput {
    pub age: u32,
    pub household_type: HouseholdType,
    pub annual_income: f64,
    pub assets: f64,
    pub nl_resident: bool,
    pub has_health_insurance: bool,
    pub has_independent_home: bool,
    pub has_rental_contract: bool,
    pub monthly_rent: f64,
    pub children_under18: u32,
    pub receives_kinderbijslag: bool,
    pub childcare_hours_per_month: f64,
    pub childcare_type: ChildcareType,
    pub childcare_hourly_rate: f64,
    pub registered_childcare: bool,
    pub both_parents_work: bool,
}

/// The four allowance schemes evaluated for every household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scheme {
    Zorgtoeslag,
    Huurtoeslag,
    KindgebondenBudget,
    Kinderopvangtoeslag,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [
        Scheme::Zorgtoeslag,
        Scheme::Huurtoeslag,
        Scheme::KindgebondenBudget,
        Scheme::Kinderopvangtoeslag,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Scheme::Zorgtoeslag => "Zorgtoeslag",
            Scheme::Huurtoeslag => "Huurtoeslag",
            Scheme::KindgebondenBudget => "Kindgebonden budget",
            Scheme::Kinderopvangtoeslag => "Kinderopvangtoeslag",
        }
    }
}

/// Program year a rules table applies to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProgramYear(pub u16);

impl std::fmt::Display for ProgramYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a wizard case (session or filing case).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(pub String);

/// Partially-filled wizard state as persisted between steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardDraft {
    pub age: Option<u32>,
    pub household_type: Option<HouseholdType>,
    pub annual_income: Option<f64>,
    pub assets: Option<f64>,
    pub nl_resident: Option<bool>,
    pub has_health_insurance: Option<bool>,
    pub has_independent_home: Option<bool>,
    pub has_rental_contract: Option<bool>,
    pub monthly_rent: Option<f64>,
    pub children_under18: Option<u32>,
    pub receives_kinderbijslag: Option<bool>,
    pub childcare_hours_per_month: Option<f64>,
    pub childcare_type: Option<ChildcareType>,
    pub childcare_hourly_rate: Option<f64>,
    pub registered_childcare: Option<bool>,
    pub both_parents_work: Option<bool>,
}

impl From<&BenefitsWizardInput> for WizardDraft {
    fn from(input: &BenefitsWizardInput) -> Self {
        Self {
            age: Some(input.age),
            household_type: Some(input.household_type),
            annual_income: Some(input.annual_income),
            assets: Some(input.assets),
            nl_resident: Some(input.nl_resident),
            has_health_insurance: Some(input.has_health_insurance),
            has_independent_home: Some(input.has_independent_home),
            has_rental_contract: Some(input.has_rental_contract),
            monthly_rent: Some(input.monthly_rent),
            children_under18: Some(input.children_under18),
            receives_kinderbijslag: Some(input.receives_kinderbijslag),
            childcare_hours_per_month: Some(input.childcare_hours_per_month),
            childcare_type: Some(input.childcare_type),
            childcare_hourly_rate: Some(input.childcare_hourly_rate),
            registered_childcare: Some(input.registered_childcare),
            both_parents_work: Some(input.both_parents_work),
        }
    }
}
