//! General financial plan from a completed profile

use serde::Serialize;

use super::round_half_up;
use crate::models::{FinancialProfile, RiskTolerance};

const SECTION_80C_LIMIT: f64 = 150_000.0;
const EFFECTIVE_TAX_RATE: f64 = 0.31;
const EMERGENCY_MONTHS: f64 = 6.0;

/// Share of the monthly surplus per bucket, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AllocationMix {
    pub emergency_pct: u32,
    pub debt_pct: u32,
    pub equity_pct: u32,
}

impl AllocationMix {
    pub fn for_risk(risk: RiskTolerance) -> Self {
        let (emergency_pct, debt_pct, equity_pct) = match risk {
            RiskTolerance::Conservative => (40, 35, 25),
            RiskTolerance::Moderate => (25, 35, 40),
            RiskTolerance::Aggressive => (20, 25, 55),
        };
        Self {
            emergency_pct,
            debt_pct,
            equity_pct,
        }
    }

    pub fn total_pct(&self) -> u32 {
        self.emergency_pct + self.debt_pct + self.equity_pct
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyAllocation {
    pub emergency: i64,
    pub debt: i64,
    pub equity: i64,
}

/// Ten year growth multiplier applied to the surplus.
pub fn growth_factor(risk: RiskTolerance) -> f64 {
    match risk {
        RiskTolerance::Conservative => 1.08,
        RiskTolerance::Moderate => 1.12,
        RiskTolerance::Aggressive => 1.15,
    }
}

pub fn fund_suggestions(risk: RiskTolerance) -> [&'static str; 3] {
    match risk {
        RiskTolerance::Conservative => [
            "SBI Conservative Hybrid Fund",
            "ICICI Prudential Corporate Bond Fund",
            "Axis Treasury Advantage Fund",
        ],
        RiskTolerance::Moderate => [
            "Axis Bluechip Fund (Large Cap)",
            "HDFC Balanced Advantage Fund",
            "Mirae Asset Tax Saver Fund (ELSS)",
        ],
        RiskTolerance::Aggressive => [
            "Parag Parikh Flexi Cap Fund",
            "Axis Small Cap Fund",
            "Mirae Asset Emerging Bluechip Fund",
        ],
    }
}

/// Marginal slab, in percent, for an annual income.
pub fn tax_bracket(annual_income: f64) -> u32 {
    if annual_income <= 250_000.0 {
        0
    } else if annual_income <= 500_000.0 {
        5
    } else if annual_income <= 1_000_000.0 {
        20
    } else {
        30
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialPlan {
    pub risk_tolerance: RiskTolerance,
    pub surplus: f64,
    pub emergency_target: f64,
    pub tax_saving_limit: f64,
    pub mix: AllocationMix,
    pub allocation: MonthlyAllocation,
    pub monthly_elss_sip: i64,
    pub estimated_tax_savings: i64,
    /// Rounded to whole lakhs.
    pub projected_wealth_lakhs: i64,
    pub funds: [&'static str; 3],
}

pub fn build_plan(profile: &FinancialProfile) -> FinancialPlan {
    let risk = profile.risk_tolerance;
    let surplus = profile.surplus();
    let tax_saving_limit = SECTION_80C_LIMIT.min(profile.monthly_income * 12.0 / 10.0);
    let mix = AllocationMix::for_risk(risk);

    let share = |pct: u32| round_half_up(surplus * pct as f64 / 100.0);

    FinancialPlan {
        risk_tolerance: risk,
        surplus,
        emergency_target: profile.monthly_expenses * EMERGENCY_MONTHS,
        tax_saving_limit,
        mix,
        allocation: MonthlyAllocation {
            emergency: share(mix.emergency_pct),
            debt: share(mix.debt_pct),
            equity: share(mix.equity_pct),
        },
        monthly_elss_sip: round_half_up(tax_saving_limit / 12.0),
        estimated_tax_savings: round_half_up(tax_saving_limit * EFFECTIVE_TAX_RATE),
        projected_wealth_lakhs: round_half_up(surplus * 12.0 * 10.0 * growth_factor(risk) / 100_000.0),
        funds: fund_suggestions(risk),
    }
}
