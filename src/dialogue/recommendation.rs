//! Child-investment collection: child age → budget → goal → risk

use serde::{Deserialize, Serialize};

use super::extract::{first_amount, first_integer};
use super::{DialogueStep, StepOutcome};
use crate::models::RecommendationRequest;
use crate::prompts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStep {
    ChildAge,
    Budget,
    Goal,
    Risk,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationDraft {
    pub child_age: Option<i64>,
    pub monthly_budget: Option<i64>,
    pub goal: Option<String>,
}

impl DialogueStep for RecommendationStep {
    type Draft = RecommendationDraft;
    type Output = RecommendationRequest;

    const FIRST: Self = RecommendationStep::ChildAge;

    fn handle(
        self,
        input: &str,
        draft: &RecommendationDraft,
    ) -> StepOutcome<Self, RecommendationDraft, RecommendationRequest> {
        match self {
            RecommendationStep::ChildAge => match first_integer(input) {
                Some(age) => StepOutcome::Advance {
                    response: prompts::budget_prompt(age),
                    next: RecommendationStep::Budget,
                    collected: RecommendationDraft {
                        child_age: Some(age),
                        ..draft.clone()
                    },
                },
                None => StepOutcome::Reprompt(prompts::CHILD_AGE_REPROMPT.to_string()),
            },

            RecommendationStep::Budget => match first_amount(input) {
                Some(budget) => StepOutcome::Advance {
                    response: prompts::child_goal_prompt(budget),
                    next: RecommendationStep::Goal,
                    collected: RecommendationDraft {
                        monthly_budget: Some(budget),
                        ..draft.clone()
                    },
                },
                None => StepOutcome::Reprompt(prompts::BUDGET_REPROMPT.to_string()),
            },

            RecommendationStep::Goal => StepOutcome::Advance {
                response: prompts::child_risk_prompt(input),
                next: RecommendationStep::Risk,
                collected: RecommendationDraft {
                    goal: Some(input.to_string()),
                    ..draft.clone()
                },
            },

            RecommendationStep::Risk => StepOutcome::Complete(RecommendationRequest {
                child_age: draft.child_age.unwrap_or_default(),
                monthly_budget: draft.monthly_budget.unwrap_or_default(),
                goal: draft.goal.clone().unwrap_or_default(),
                risk_tolerance: input.to_string(),
            }),
        }
    }
}
