//! Profile collection: income → expenses → goals → risk

use serde::{Deserialize, Serialize};

use super::extract::first_decimal;
use super::{DialogueStep, StepOutcome};
use crate::models::{FinancialGoal, RiskTolerance};
use crate::prompts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStep {
    Income,
    Expenses,
    Goals,
    Risk,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub monthly_income: Option<f64>,
    pub monthly_expenses: Option<f64>,
    pub financial_goals: Vec<FinancialGoal>,
}

/// The four slots a finished profile dialogue yields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileAnswers {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub financial_goals: Vec<FinancialGoal>,
    pub risk_tolerance: RiskTolerance,
}

const GOAL_KEYWORDS: &[(&[&str], FinancialGoal)] = &[
    (&["house", "home"], FinancialGoal::HomePurchase),
    (&["car", "vehicle"], FinancialGoal::VehiclePurchase),
    (&["education", "child"], FinancialGoal::ChildEducation),
    (&["retirement"], FinancialGoal::RetirementPlanning),
    (&["emergency"], FinancialGoal::EmergencyFund),
];

/// Every goal mentioned in the text, in table order.
pub fn detect_goals(text: &str) -> Vec<FinancialGoal> {
    let lower = text.to_lowercase();
    GOAL_KEYWORDS
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, goal)| *goal)
        .collect()
}

/// Conservative wins over aggressive; anything else is moderate.
pub fn classify_risk(text: &str) -> RiskTolerance {
    let lower = text.to_lowercase();
    if ["conservative", "low", "safe"].iter().any(|kw| lower.contains(kw)) {
        RiskTolerance::Conservative
    } else if ["aggressive", "high", "growth"].iter().any(|kw| lower.contains(kw)) {
        RiskTolerance::Aggressive
    } else {
        RiskTolerance::Moderate
    }
}

impl DialogueStep for ProfileStep {
    type Draft = ProfileDraft;
    type Output = ProfileAnswers;

    const FIRST: Self = ProfileStep::Income;

    fn handle(self, input: &str, draft: &ProfileDraft) -> StepOutcome<Self, ProfileDraft, ProfileAnswers> {
        match self {
            ProfileStep::Income => match first_decimal(input) {
                Some(income) if income > 0.0 => StepOutcome::Advance {
                    response: prompts::expenses_prompt(income),
                    next: ProfileStep::Expenses,
                    collected: ProfileDraft {
                        monthly_income: Some(income),
                        ..draft.clone()
                    },
                },
                _ => StepOutcome::Reprompt(prompts::INCOME_REPROMPT.to_string()),
            },

            ProfileStep::Expenses => match first_decimal(input) {
                Some(expenses) => {
                    let surplus = draft.monthly_income.unwrap_or_default() - expenses;
                    StepOutcome::Advance {
                        response: prompts::goals_prompt(expenses, surplus),
                        next: ProfileStep::Goals,
                        collected: ProfileDraft {
                            monthly_expenses: Some(expenses),
                            ..draft.clone()
                        },
                    }
                }
                None => StepOutcome::Reprompt(prompts::EXPENSES_REPROMPT.to_string()),
            },

            ProfileStep::Goals => {
                let goals = detect_goals(input);
                StepOutcome::Advance {
                    response: prompts::profile_risk_prompt(&goals),
                    next: ProfileStep::Risk,
                    collected: ProfileDraft {
                        financial_goals: goals,
                        ..draft.clone()
                    },
                }
            }

            // Income and expenses are always set by the time Risk is reached.
            ProfileStep::Risk => StepOutcome::Complete(ProfileAnswers {
                monthly_income: draft.monthly_income.unwrap_or_default(),
                monthly_expenses: draft.monthly_expenses.unwrap_or_default(),
                financial_goals: draft.financial_goals.clone(),
                risk_tolerance: classify_risk(input),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_income(income: f64) -> ProfileDraft {
        ProfileDraft {
            monthly_income: Some(income),
            ..ProfileDraft::default()
        }
    }

    #[test]
    fn test_income_parses_first_number() {
        let cases = vec![
            ("80000", 80000.0),
            ("My monthly income is ₹75,000", 75000.0),
            ("around 52000.50 after tax", 52000.5),
            ("I earn 90000 and my wife earns 60000", 90000.0),
        ];

        for (input, expected) in cases {
            match ProfileStep::Income.handle(input, &ProfileDraft::default()) {
                StepOutcome::Advance { next, collected, .. } => {
                    assert_eq!(next, ProfileStep::Expenses);
                    assert_eq!(collected.monthly_income, Some(expected), "input: {}", input);
                }
                other => panic!("expected advance for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_income_without_digits_reprompts() {
        for input in ["I don't know", "", "a lot"] {
            assert_eq!(
                ProfileStep::Income.handle(input, &ProfileDraft::default()),
                StepOutcome::Reprompt(prompts::INCOME_REPROMPT.to_string())
            );
        }
    }

    #[test]
    fn test_zero_income_reprompts() {
        assert!(matches!(
            ProfileStep::Income.handle("0", &ProfileDraft::default()),
            StepOutcome::Reprompt(_)
        ));
    }

    #[test]
    fn test_expenses_advance_even_with_deficit() {
        match ProfileStep::Expenses.handle("I spend 60000", &draft_with_income(50000.0)) {
            StepOutcome::Advance { response, next, collected } => {
                assert_eq!(next, ProfileStep::Goals);
                assert_eq!(collected.monthly_income, Some(50000.0));
                assert_eq!(collected.monthly_expenses, Some(60000.0));
                assert!(response.contains("-10,000"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_expenses_without_digits_reprompts() {
        assert_eq!(
            ProfileStep::Expenses.handle("not sure", &draft_with_income(50000.0)),
            StepOutcome::Reprompt(prompts::EXPENSES_REPROMPT.to_string())
        );
    }

    #[test]
    fn test_goals_collects_all_matches() {
        let goals = detect_goals("I want to buy a HOUSE and a car, and plan for retirement");
        assert_eq!(
            goals,
            vec![
                FinancialGoal::HomePurchase,
                FinancialGoal::VehiclePurchase,
                FinancialGoal::RetirementPlanning
            ]
        );
        assert!(detect_goals("nothing specific").is_empty());
    }

    #[test]
    fn test_goals_always_advance() {
        match ProfileStep::Goals.handle("no idea", &draft_with_income(1.0)) {
            StepOutcome::Advance { next, collected, .. } => {
                assert_eq!(next, ProfileStep::Risk);
                assert!(collected.financial_goals.is_empty());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_risk_classification() {
        assert_eq!(classify_risk("I prefer safe options"), RiskTolerance::Conservative);
        assert_eq!(classify_risk("Low risk please"), RiskTolerance::Conservative);
        assert_eq!(classify_risk("I'm aggressive"), RiskTolerance::Aggressive);
        assert_eq!(classify_risk("go for growth"), RiskTolerance::Aggressive);
        assert_eq!(classify_risk("balanced"), RiskTolerance::Moderate);
        // conservative keywords are checked first
        assert_eq!(classify_risk("high returns but safe"), RiskTolerance::Conservative);
    }

    #[test]
    fn test_risk_completes_with_all_slots() {
        let draft = ProfileDraft {
            monthly_income: Some(80000.0),
            monthly_expenses: Some(45000.0),
            financial_goals: vec![FinancialGoal::EmergencyFund],
        };

        assert_eq!(
            ProfileStep::Risk.handle("moderate", &draft),
            StepOutcome::Complete(ProfileAnswers {
                monthly_income: 80000.0,
                monthly_expenses: 45000.0,
                financial_goals: vec![FinancialGoal::EmergencyFund],
                risk_tolerance: RiskTolerance::Moderate,
            })
        );
    }
}
