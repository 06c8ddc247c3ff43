use serde::{Deserialize, Serialize};

/// Disqualification codes surfaced to the household, one per failed precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibilityReason {
    BelowMinimumAge,
    NotNlResident,
    NoHealthInsurance,
    IncomeAboveLimit,
    AssetsAboveLimit,
    NoIndependentHome,
    NoRentalContract,
    #[serde(rename = "no_children_under_18")]
    NoChildrenUnder18,
    NoKinderbijslag,
    ChildcareNotRegistered,
    ParentsNotBothWorking,
    NoChildcareHours,
}

impl IneligibilityReason {
    pub const fn code(self) -> &'static str {
        match self {
            IneligibilityReason::BelowMinimumAge => "below_minimum_age",
            IneligibilityReason::NotNlResident => "not_nl_resident",
            IneligibilityReason::NoHealthInsurance => "no_health_insurance",
            IneligibilityReason::IncomeAboveLimit => "income_above_limit",
            IneligibilityReason::AssetsAboveLimit => "assets_above_limit",
            IneligibilityReason::NoIndependentHome => "no_independent_home",
            IneligibilityReason::NoRentalContract => "no_rental_contract",
            IneligibilityReason::NoChildrenUnder18 => "no_children_under_18",
            IneligibilityReason::NoKinderbijslag => "no_kinderbijslag",
            IneligibilityReason::ChildcareNotRegistered => "childcare_not_registered",
            IneligibilityReason::ParentsNotBothWorking => "parents_not_both_working",
            IneligibilityReason::NoChildcareHours => "no_childcare_hours",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            IneligibilityReason::BelowMinimumAge => "applicant is younger than the minimum age",
            IneligibilityReason::NotNlResident => "applicant does not live in the Netherlands",
            IneligibilityReason::NoHealthInsurance => "no Dutch health insurance policy",
            IneligibilityReason::IncomeAboveLimit => "income exceeds the scheme limit",
            IneligibilityReason::AssetsAboveLimit => "assets exceed the scheme limit",
            IneligibilityReason::NoIndependentHome => "no independent living space",
            IneligibilityReason::NoRentalContract => "no rental contract on file",
            IneligibilityReason::NoChildrenUnder18 => "no children under 18 in the household",
            IneligibilityReason::NoKinderbijslag => "household does not receive kinderbijslag",
            IneligibilityReason::ChildcareNotRegistered => "childcare provider is not registered",
            IneligibilityReason::ParentsNotBothWorking => "not every parent works or studies",
            IneligibilityReason::NoChildcareHours => "no childcare hours reported",
        }
    }
}

/// Ordered collector for failed gates; every gate is evaluated, none short-circuit.
#[derive(Debug, Default)]
pub(crate) struct Gates {
    reasons: Vec<IneligibilityReason>,
}

impl Gates {
    pub(crate) fn require(&mut self, passed: bool, reason: IneligibilityReason) -> &mut Self {
        if !passed {
            self.reasons.push(reason);
        }
        self
    }

    pub(crate) fn into_reasons(self) -> Vec<IneligibilityReason> {
        self.reasons
    }
}

#[cfg(test)]
mod tests {
    use super::IneligibilityReason::{self, *};

    const EVERY_REASON: [IneligibilityReason; 12] = [
        BelowMinimumAge,
        NotNlResident,
        NoHealthInsurance,
        IncomeAboveLimit,
        AssetsAboveLimit,
        NoIndependentHome,
        NoRentalContract,
        NoChildrenUnder18,
        NoKinderbijslag,
        ChildcareNotRegistered,
        ParentsNotBothWorking,
        NoChildcareHours,
    ];

    // No wildcard arm: a new variant fails to compile here until it is listed above.
    fn is_listed(reason: IneligibilityReason) -> bool {
        match reason {
            BelowMinimumAge | NotNlResident | NoHealthInsurance | IncomeAboveLimit
            | AssetsAboveLimit | NoIndependentHome | NoRentalContract | NoChildrenUnder18
            | NoKinderbijslag | ChildcareNotRegistered | ParentsNotBothWorking
            | NoChildcareHours => EVERY_REASON.contains(&reason),
        }
    }

    #[test]
    fn code_matches_serialized_name() {
        for reason in EVERY_REASON {
            assert!(is_listed(reason));
            let serialized = serde_json::to_value(reason).expect("reason serializes");
            assert_eq!(serialized, reason.code(), "{reason:?}");
        }
    }

    #[test]
    fn codes_parse_back_into_reasons() {
        for reason in EVERY_REASON {
            let parsed: IneligibilityReason =
                serde_json::from_value(serde_json::Value::from(reason.code()))
                    .expect("code deserializes");
            assert_eq!(parsed, reason);
        }
    }
}
