//! Profile overview and financial health score

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::round_half_up;
use crate::models::{FinancialProfile, RiskTolerance, UserStreak};
use crate::streak;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileOverview {
    pub financial_health_score: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub surplus: f64,
    pub potential_tax_savings: i64,
    pub goals_count: usize,
    pub risk_tolerance: RiskTolerance,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_visit: DateTime<Utc>,
    pub streak_active: bool,
}

/// Score out of 10, in half-point steps.
pub fn health_score(profile: &FinancialProfile, streak: &UserStreak) -> f64 {
    let surplus = profile.surplus();
    let mut score = 5.0;

    if surplus > 0.0 {
        score += 2.0;
    }
    if surplus > profile.monthly_income * 0.2 {
        score += 1.0;
    }
    if !profile.financial_goals.is_empty() {
        score += 1.0;
    }
    if streak.current_streak > 7 {
        score += 0.5;
    }
    if profile.has_income() {
        score += 0.5;
    }

    f64::min(10.0, score)
}

pub fn profile_overview(
    profile: &FinancialProfile,
    streak: &UserStreak,
    now: DateTime<Utc>,
) -> ProfileOverview {
    let surplus = profile.surplus();

    ProfileOverview {
        financial_health_score: health_score(profile, streak),
        monthly_income: profile.monthly_income,
        monthly_expenses: profile.monthly_expenses,
        surplus,
        potential_tax_savings: if surplus > 0.0 {
            round_half_up(surplus * 12.0 * 0.31)
        } else {
            0
        },
        goals_count: profile.financial_goals.len(),
        risk_tolerance: profile.risk_tolerance,
        current_streak: streak.current_streak,
        longest_streak: streak.longest_streak,
        last_visit: streak.last_visit,
        streak_active: streak::is_active(streak, now),
    }
}
