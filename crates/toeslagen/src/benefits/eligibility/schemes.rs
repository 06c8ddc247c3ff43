use super::super::domain::BenefitsWizardInput;
use super::super::rules::{
    HuurtoeslagRules, KindgebondenBudgetRules, KinderopvangtoeslagRules, ZorgtoeslagRules,
};
use super::reasons::{Gates, IneligibilityReason};
use super::BenefitResult;

pub(crate) fn zorgtoeslag(input: &BenefitsWizardInput, rules: &ZorgtoeslagRules) -> BenefitResult {
    let household = input.household_type;
    let max_income = rules.max_income.for_household(household);

    let mut gates = Gates::default();
    gates
        .require(input.age >= rules.min_age, IneligibilityReason::BelowMinimumAge)
        .require(input.nl_resident, IneligibilityReason::NotNlResident)
        .require(input.has_health_insurance, IneligibilityReason::NoHealthInsurance)
        .require(
            input.annual_income <= max_income,
            IneligibilityReason::IncomeAboveLimit,
        )
        .require(
            input.assets <= rules.max_assets.for_household(household),
            IneligibilityReason::AssetsAboveLimit,
        );

    BenefitResult::from_gates(gates, || {
        let income_ratio = if max_income > 0.0 {
            (input.annual_income / max_income).min(1.0)
        } else {
            1.0
        };
        rules.max_annual_amount.for_household(household)
            * (1.0 - income_ratio * rules.income_taper_share)
    })
}

pub(crate) fn huurtoeslag(input: &BenefitsWizardInput, rules: &HuurtoeslagRules) -> BenefitResult {
    let mut gates = Gates::default();
    gates
        .require(input.age >= rules.min_age, IneligibilityReason::BelowMinimumAge)
        .require(input.has_independent_home, IneligibilityReason::NoIndependentHome)
        .require(input.has_rental_contract, IneligibilityReason::NoRentalContract)
        .require(
            input.assets <= rules.max_assets.for_household(input.household_type),
            IneligibilityReason::AssetsAboveLimit,
        );

    BenefitResult::from_gates(gates, || {
        let rent_cap = if input.age < rules.reduced_rent_cap_age_below {
            rules.max_rent_considered.under23
        } else {
            rules.max_rent_considered.standard
        };
        let annual_rent = input.monthly_rent.min(rent_cap) * 12.0;
        let income_factor = (1.0 - input.annual_income / rules.income_taper_divisor)
            .max(rules.income_factor_floor);
        annual_rent * rules.rent_share * income_factor
    })
}

pub(crate) fn kindgebonden_budget(
    input: &BenefitsWizardInput,
    rules: &KindgebondenBudgetRules,
) -> BenefitResult {
    let household = input.household_type;

    let mut gates = Gates::default();
    gates
        .require(input.children_under18 >= 1, IneligibilityReason::NoChildrenUnder18)
        .require(input.receives_kinderbijslag, IneligibilityReason::NoKinderbijslag)
        .require(
            input.assets <= rules.max_assets.for_household(household),
            IneligibilityReason::AssetsAboveLimit,
        );

    BenefitResult::from_gates(gates, || {
        let base = f64::from(input.children_under18) * rules.base_amount_per_child;
        let excess = (input.annual_income
            - rules.full_amount_income_threshold.for_household(household))
        .max(0.0);
        base - excess * rules.reduction_rate
    })
}

pub(crate) fn kinderopvangtoeslag(
    input: &BenefitsWizardInput,
    rules: &KinderopvangtoeslagRules,
) -> BenefitResult {
    let mut gates = Gates::default();
    gates
        .require(input.registered_childcare, IneligibilityReason::ChildcareNotRegistered)
        .require(input.both_parents_work, IneligibilityReason::ParentsNotBothWorking)
        .require(
            input.childcare_hours_per_month > 0.0,
            IneligibilityReason::NoChildcareHours,
        )
        .require(input.children_under18 >= 1, IneligibilityReason::NoChildrenUnder18);

    BenefitResult::from_gates(gates, || {
        let hourly_rate = input
            .childcare_hourly_rate
            .min(rules.max_hourly_rate.for_type(input.childcare_type));
        let yearly_cost = hourly_rate * input.childcare_hours_per_month * 12.0;
        let coverage = if input.annual_income <= rules.high_coverage_income_threshold {
            rules.high_coverage_rate
        } else {
            let taper = (input.annual_income - rules.high_coverage_income_threshold)
                / rules.coverage_taper_divisor;
            (rules.high_coverage_rate - taper).max(rules.coverage_floor)
        };
        yearly_cost * coverage
    })
}
