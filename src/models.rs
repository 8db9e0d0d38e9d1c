//! Core data models for the advisor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classifier::Intent;

//
// ================= Enums =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentTimeline {
    Short,
    #[default]
    Medium,
    Long,
}

/// Goal tags recognised during profile collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FinancialGoal {
    HomePurchase,
    VehiclePurchase,
    ChildEducation,
    RetirementPlanning,
    EmergencyFund,
}

//
// ================= Profile =================
//

/// One per user, persisted through the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    #[serde(default)]
    pub financial_goals: Vec<FinancialGoal>,
    #[serde(default)]
    pub risk_tolerance: RiskTolerance,
    #[serde(default)]
    pub investment_timeline: InvestmentTimeline,
    #[serde(default)]
    pub current_investments: f64,
    #[serde(default)]
    pub emergency_fund: f64,
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default)]
    pub dependents: u32,
}

fn default_age() -> u32 {
    25
}

impl Default for FinancialProfile {
    fn default() -> Self {
        Self {
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            financial_goals: Vec::new(),
            risk_tolerance: RiskTolerance::Moderate,
            investment_timeline: InvestmentTimeline::Medium,
            current_investments: 0.0,
            emergency_fund: 0.0,
            age: default_age(),
            dependents: 0,
        }
    }
}

impl FinancialProfile {
    pub fn surplus(&self) -> f64 {
        self.monthly_income - self.monthly_expenses
    }

    /// A profile counts as recorded once an income has been collected.
    pub fn has_income(&self) -> bool {
        self.monthly_income > 0.0
    }
}

//
// ================= Recommendation =================
//

/// Transient slot set for one child-investment dialogue. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub child_age: i64,
    pub monthly_budget: i64,
    pub goal: String,
    pub risk_tolerance: String,
}

//
// ================= Streak =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserStreak {
    pub last_visit: DateTime<Utc>,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl UserStreak {
    /// Streak for a user seen for the first time.
    pub fn first_visit(now: DateTime<Utc>) -> Self {
        Self {
            last_visit: now,
            current_streak: 1,
            longest_streak: 1,
        }
    }
}

//
// ================= Turn Result =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnResponse {
    pub response_text: String,
    pub suggested_replies: Vec<String>,
    pub intent: Option<Intent>,
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskTolerance::Conservative => "Conservative",
            RiskTolerance::Moderate => "Moderate",
            RiskTolerance::Aggressive => "Aggressive",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for InvestmentTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InvestmentTimeline::Short => "Short-Term",
            InvestmentTimeline::Medium => "Medium-Term",
            InvestmentTimeline::Long => "Long-Term",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for FinancialGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FinancialGoal::HomePurchase => "Home Purchase",
            FinancialGoal::VehiclePurchase => "Vehicle Purchase",
            FinancialGoal::ChildEducation => "Child Education",
            FinancialGoal::RetirementPlanning => "Retirement Planning",
            FinancialGoal::EmergencyFund => "Emergency Fund",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults_when_fields_missing() {
        let profile: FinancialProfile =
            serde_json::from_str(r#"{"monthlyIncome": 50000, "monthlyExpenses": 20000}"#).unwrap();

        assert_eq!(profile.risk_tolerance, RiskTolerance::Moderate);
        assert_eq!(profile.age, 25);
        assert!(profile.financial_goals.is_empty());
        assert_eq!(profile.surplus(), 30000.0);
    }

    #[test]
    fn test_risk_tolerance_serde_is_lowercase() {
        let json = serde_json::to_string(&RiskTolerance::Aggressive).unwrap();
        assert_eq!(json, "\"aggressive\"");
    }

    #[test]
    fn test_default_profile_has_no_income() {
        assert!(!FinancialProfile::default().has_income());
    }
}
