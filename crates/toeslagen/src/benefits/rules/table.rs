use serde::{Deserialize, Serialize};

use super::super::domain::{ChildcareType, HouseholdType, ProgramYear};
use super::RulesError;

/// Amount keyed by household composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseholdAmounts {
    pub single: f64,
    pub partners: f64,
}

impl HouseholdAmounts {
    pub const fn new(single: f64, partners: f64) -> Self {
        Self { single, partners }
    }

    pub fn for_household(&self, household: HouseholdType) -> f64 {
        match household {
            HouseholdType::Single => self.single,
            HouseholdType::Partners => self.partners,
        }
    }
}

/// Hourly-rate caps keyed by childcare type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildcareRateCaps {
    pub daycare: f64,
    pub out_of_school_care: f64,
    pub childminder: f64,
}

impl ChildcareRateCaps {
    pub fn for_type(&self, childcare: ChildcareType) -> f64 {
        match childcare {
            ChildcareType::Daycare => self.daycare,
            ChildcareType::OutOfSchoolCare => self.out_of_school_care,
            ChildcareType::Childminder => self.childminder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZorgtoeslagRules {
    pub min_age: u32,
    pub max_income: HouseholdAmounts,
    pub max_assets: HouseholdAmounts,
    pub max_annual_amount: HouseholdAmounts,
    /// Share of the maximum amount withdrawn once income reaches the cap.
    pub income_taper_share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentCaps {
    pub standard: f64,
    pub under23: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuurtoeslagRules {
    pub min_age: u32,
    pub max_assets: HouseholdAmounts,
    pub max_rent_considered: RentCaps,
    /// Applicants younger than this are credited up to `max_rent_considered.under23`.
    pub reduced_rent_cap_age_below: u32,
    pub rent_share: f64,
    pub income_factor_floor: f64,
    pub income_taper_divisor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindgebondenBudgetRules {
    pub max_assets: HouseholdAmounts,
    pub full_amount_income_threshold: HouseholdAmounts,
    pub reduction_rate: f64,
    pub base_amount_per_child: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KinderopvangtoeslagRules {
    pub high_coverage_income_threshold: f64,
    pub high_coverage_rate: f64,
    pub max_hourly_rate: ChildcareRateCaps,
    pub coverage_floor: f64,
    pub coverage_taper_divisor: f64,
}

/// Complete policy table for one program year.
///
/// Tables are only handed out after [`ToeslagRules::validate`] succeeded, so the calculator
/// can rely on every threshold being finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToeslagRules {
    pub program_year: ProgramYear,
    pub zorgtoeslag: ZorgtoeslagRules,
    pub huurtoeslag: HuurtoeslagRules,
    pub kindgebonden_budget: KindgebondenBudgetRules,
    pub kinderopvangtoeslag: KinderopvangtoeslagRules,
}

impl ToeslagRules {
    /// Published thresholds for program year 2026.
    pub fn year_2026() -> Self {
        Self {
            program_year: ProgramYear(2026),
            zorgtoeslag: ZorgtoeslagRules {
                min_age: 18,
                max_income: HouseholdAmounts::new(39_719.0, 50_206.0),
                max_assets: HouseholdAmounts::new(141_896.0, 179_429.0),
                max_annual_amount: HouseholdAmounts::new(1_574.0, 3_010.0),
                income_taper_share: 0.7,
            },
            huurtoeslag: HuurtoeslagRules {
                min_age: 18,
                max_assets: HouseholdAmounts::new(37_395.0, 74_790.0),
                max_rent_considered: RentCaps {
                    standard: 900.07,
                    under23: 477.20,
                },
                reduced_rent_cap_age_below: 23,
                rent_share: 0.32,
                income_factor_floor: 0.18,
                income_taper_divisor: 90_000.0,
            },
            kindgebonden_budget: KindgebondenBudgetRules {
                max_assets: HouseholdAmounts::new(141_896.0, 179_429.0),
                full_amount_income_threshold: HouseholdAmounts::new(28_406.0, 37_545.0),
                reduction_rate: 0.0713,
                base_amount_per_child: 1_650.0,
            },
            kinderopvangtoeslag: KinderopvangtoeslagRules {
                high_coverage_income_threshold: 56_413.0,
                high_coverage_rate: 0.96,
                max_hourly_rate: ChildcareRateCaps {
                    daycare: 10.25,
                    out_of_school_care: 9.12,
                    childminder: 7.53,
                },
                coverage_floor: 0.33,
                coverage_taper_divisor: 220_000.0,
            },
        }
    }

    /// Check the table invariants, reporting the first offending field.
    pub fn validate(&self) -> Result<(), RulesError> {
        let z = &self.zorgtoeslag;
        household("zorgtoeslag.maxIncome", &z.max_income)?;
        household("zorgtoeslag.maxAssets", &z.max_assets)?;
        household("zorgtoeslag.maxAnnualAmount", &z.max_annual_amount)?;
        rate("zorgtoeslag.incomeTaperShare", z.income_taper_share)?;

        let h = &self.huurtoeslag;
        household("huurtoeslag.maxAssets", &h.max_assets)?;
        amount(
            "huurtoeslag.maxRentConsidered.standard",
            h.max_rent_considered.standard,
        )?;
        amount(
            "huurtoeslag.maxRentConsidered.under23",
            h.max_rent_considered.under23,
        )?;
        rate("huurtoeslag.rentShare", h.rent_share)?;
        rate("huurtoeslag.incomeFactorFloor", h.income_factor_floor)?;
        divisor("huurtoeslag.incomeTaperDivisor", h.income_taper_divisor)?;

        let k = &self.kindgebonden_budget;
        household("kindgebondenBudget.maxAssets", &k.max_assets)?;
        household(
            "kindgebondenBudget.fullAmountIncomeThreshold",
            &k.full_amount_income_threshold,
        )?;
        rate("kindgebondenBudget.reductionRate", k.reduction_rate)?;
        amount(
            "kindgebondenBudget.baseAmountPerChild",
            k.base_amount_per_child,
        )?;

        let o = &self.kinderopvangtoeslag;
        amount(
            "kinderopvangtoeslag.highCoverageIncomeThreshold",
            o.high_coverage_income_threshold,
        )?;
        rate("kinderopvangtoeslag.highCoverageRate", o.high_coverage_rate)?;
        amount(
            "kinderopvangtoeslag.maxHourlyRate.daycare",
            o.max_hourly_rate.daycare,
        )?;
        amount(
            "kinderopvangtoeslag.maxHourlyRate.outOfSchoolCare",
            o.max_hourly_rate.out_of_school_care,
        )?;
        amount(
            "kinderopvangtoeslag.maxHourlyRate.childminder",
            o.max_hourly_rate.childminder,
        )?;
        rate("kinderopvangtoeslag.coverageFloor", o.coverage_floor)?;
        if o.coverage_floor > o.high_coverage_rate {
            return Err(RulesError::FloorAboveRate {
                field: "kinderopvangtoeslag.coverageFloor",
                floor: o.coverage_floor,
                rate: o.high_coverage_rate,
            });
        }
        divisor(
            "kinderopvangtoeslag.coverageTaperDivisor",
            o.coverage_taper_divisor,
        )?;

        Ok(())
    }

    /// Validate and return the table, for use in constructor chains.
    pub fn validated(self) -> Result<Self, RulesError> {
        self.validate()?;
        Ok(self)
    }
}

fn amount(field: &'static str, value: f64) -> Result<(), RulesError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RulesError::NegativeAmount { field, value })
    }
}

fn household(field: &'static str, amounts: &HouseholdAmounts) -> Result<(), RulesError> {
    amount(field, amounts.single)?;
    amount(field, amounts.partners)
}

fn rate(field: &'static str, value: f64) -> Result<(), RulesError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RulesError::RateOutOfRange { field, value })
    }
}

fn divisor(field: &'static str, value: f64) -> Result<(), RulesError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RulesError::NonPositiveDivisor { field, value })
    }
}
