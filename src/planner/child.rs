//! Child investment recommendation
//!
//! Budget tier picks a fixed split between SIP funds and an LIC premium, and a
//! maturity multiplier range applied to the total contribution.

use serde::Serialize;

use crate::models::RecommendationRequest;

const CHILD_MATURITY_AGE: i64 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Starter,
    Balanced,
    Premium,
}

struct FundWeight {
    name: &'static str,
    note: Option<&'static str>,
    percent: i64,
}

/// An insurance product suggested for the LIC share of the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsuranceOption {
    pub name: &'static str,
    pub note: &'static str,
}

struct TierTemplate {
    funds: &'static [FundWeight],
    insurance_percent: i64,
    insurance_plans: &'static [InsuranceOption],
    /// Maturity multipliers in tenths.
    maturity_range: (i64, i64),
}

const STARTER: TierTemplate = TierTemplate {
    funds: &[
        FundWeight { name: "Axis Bluechip Fund", note: Some("Low risk, steady growth"), percent: 40 },
        FundWeight { name: "Mirae Asset Emerging Bluechip", note: Some("Medium risk, higher returns"), percent: 30 },
    ],
    insurance_percent: 30,
    insurance_plans: &[InsuranceOption { name: "LIC Jeevan Tarun", note: "Guaranteed maturity, life cover" }],
    maturity_range: (22, 28),
};

const BALANCED: TierTemplate = TierTemplate {
    funds: &[
        FundWeight { name: "Axis Bluechip Fund", note: None, percent: 25 },
        FundWeight { name: "Parag Parikh Flexi Cap", note: None, percent: 25 },
        FundWeight { name: "ELSS Tax Saver", note: Some("Tax benefits"), percent: 10 },
    ],
    insurance_percent: 40,
    insurance_plans: &[
        InsuranceOption { name: "LIC Kanyadan Policy", note: "Suitable for girls, guaranteed returns" },
        InsuranceOption { name: "LIC Jeevan Tarun", note: "Universal child plan option" },
    ],
    maturity_range: (25, 35),
};

const PREMIUM: TierTemplate = TierTemplate {
    funds: &[
        FundWeight { name: "Large Cap Fund", note: Some("Stability"), percent: 30 },
        FundWeight { name: "Mid Cap Fund", note: Some("Growth"), percent: 20 },
        FundWeight { name: "International Fund", note: Some("Diversification"), percent: 10 },
        FundWeight { name: "ELSS Fund", note: Some("Tax saving"), percent: 10 },
    ],
    insurance_percent: 30,
    insurance_plans: &[InsuranceOption { name: "High premium LIC policy", note: "with guaranteed additions" }],
    maturity_range: (32, 45),
};

impl BudgetTier {
    pub fn for_budget(monthly_budget: i64) -> Self {
        if monthly_budget < 2000 {
            BudgetTier::Starter
        } else if monthly_budget < 5000 {
            BudgetTier::Balanced
        } else {
            BudgetTier::Premium
        }
    }

    fn template(&self) -> &'static TierTemplate {
        match self {
            BudgetTier::Starter => &STARTER,
            BudgetTier::Balanced => &BALANCED,
            BudgetTier::Premium => &PREMIUM,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Starter => "STARTER PLAN",
            BudgetTier::Balanced => "BALANCED PLAN",
            BudgetTier::Premium => "PREMIUM PLAN",
        }
    }
}

/// One line of the monthly budget split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundSplit {
    pub name: &'static str,
    pub note: Option<&'static str>,
    pub percent: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildRecommendation {
    pub years_to_maturity: i64,
    pub total_investment: i64,
    pub tier: BudgetTier,
    pub funds: Vec<FundSplit>,
    pub sip_percent: i64,
    pub sip_amount: i64,
    pub insurance_percent: i64,
    pub insurance_amount: i64,
    pub insurance_plans: Vec<InsuranceOption>,
    pub maturity_low: i64,
    pub maturity_high: i64,
}

/// Products of user amounts are taken in `i128` and clamped back to `i64`.
fn saturate(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

fn floor_percent(amount: i64, percent: i64) -> i64 {
    saturate((amount as i128 * percent as i128).div_euclid(100))
}

fn floor_tenths(amount: i64, tenths: i64) -> i64 {
    saturate((amount as i128 * tenths as i128).div_euclid(10))
}

/// Build the recommendation. A child aged 18 or over yields a non-positive
/// horizon; the figures are passed through as computed.
pub fn recommend_for_child(request: &RecommendationRequest) -> ChildRecommendation {
    let budget = request.monthly_budget;
    let years_to_maturity = CHILD_MATURITY_AGE - request.child_age;
    let total_investment = saturate(budget as i128 * 12 * years_to_maturity as i128);

    let tier = BudgetTier::for_budget(budget);
    let template = tier.template();

    let funds: Vec<FundSplit> = template
        .funds
        .iter()
        .map(|fund| FundSplit {
            name: fund.name,
            note: fund.note,
            percent: fund.percent,
            amount: floor_percent(budget, fund.percent),
        })
        .collect();

    let sip_percent: i64 = template.funds.iter().map(|f| f.percent).sum();
    let (low, high) = template.maturity_range;

    ChildRecommendation {
        years_to_maturity,
        total_investment,
        tier,
        funds,
        sip_percent,
        sip_amount: floor_percent(budget, sip_percent),
        insurance_percent: template.insurance_percent,
        insurance_amount: floor_percent(budget, template.insurance_percent),
        insurance_plans: template.insurance_plans.to_vec(),
        maturity_low: floor_tenths(total_investment, low),
        maturity_high: floor_tenths(total_investment, high),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(child_age: i64, monthly_budget: i64) -> RecommendationRequest {
        RecommendationRequest {
            child_age,
            monthly_budget,
            goal: "education".to_string(),
            risk_tolerance: "moderate".to_string(),
        }
    }

    #[test]
    fn test_balanced_scenario() {
        let rec = recommend_for_child(&request(5, 3000));

        assert_eq!(rec.years_to_maturity, 13);
        assert_eq!(rec.total_investment, 468000);
        assert_eq!(rec.tier, BudgetTier::Balanced);
        assert_eq!(rec.maturity_low, 1170000);
        assert_eq!(rec.maturity_high, 1638000);

        let amounts: Vec<i64> = rec.funds.iter().map(|f| f.amount).collect();
        assert_eq!(amounts, vec![750, 750, 300]);
        assert_eq!(rec.sip_amount, 1800);
        assert_eq!(rec.insurance_amount, 1200);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(BudgetTier::for_budget(0), BudgetTier::Starter);
        assert_eq!(BudgetTier::for_budget(1999), BudgetTier::Starter);
        assert_eq!(BudgetTier::for_budget(2000), BudgetTier::Balanced);
        assert_eq!(BudgetTier::for_budget(4999), BudgetTier::Balanced);
        assert_eq!(BudgetTier::for_budget(5000), BudgetTier::Premium);
        assert_eq!(BudgetTier::for_budget(50000), BudgetTier::Premium);
    }

    #[test]
    fn test_fund_amounts_are_floored() {
        let rec = recommend_for_child(&request(10, 1999));

        assert_eq!(rec.tier, BudgetTier::Starter);
        let amounts: Vec<i64> = rec.funds.iter().map(|f| f.amount).collect();
        // 1999 × 0.4 = 799.6, 1999 × 0.3 = 599.7
        assert_eq!(amounts, vec![799, 599]);
        assert_eq!(rec.insurance_amount, 599);
        assert_eq!(rec.sip_percent + rec.insurance_percent, 100);
    }

    #[test]
    fn test_premium_split_and_maturity() {
        let rec = recommend_for_child(&request(8, 7777));

        assert_eq!(rec.tier, BudgetTier::Premium);
        assert_eq!(rec.funds.len(), 4);
        assert_eq!(rec.sip_percent, 70);
        assert_eq!(rec.total_investment, 7777 * 12 * 10);
        // 933240 × 3.2 and × 4.5
        assert_eq!(rec.maturity_low, 2986368);
        assert_eq!(rec.maturity_high, 4199580);
    }

    #[test]
    fn test_starter_maturity_floors() {
        let rec = recommend_for_child(&request(17, 1001));
        // 12012 × 2.2 = 26426.4, × 2.8 = 33633.6
        assert_eq!(rec.maturity_low, 26426);
        assert_eq!(rec.maturity_high, 33633);
    }

    #[test]
    fn test_huge_budget_is_exact_while_it_fits() {
        let rec = recommend_for_child(&request(5, 10_000_000_000_000_000));

        assert_eq!(rec.tier, BudgetTier::Premium);
        assert_eq!(rec.total_investment, 1_560_000_000_000_000_000);
        assert_eq!(rec.maturity_low, 4_992_000_000_000_000_000);
        assert_eq!(rec.maturity_high, 7_020_000_000_000_000_000);
        assert_eq!(rec.insurance_amount, 3_000_000_000_000_000);
    }

    #[test]
    fn test_totals_clamp_instead_of_wrapping() {
        let rec = recommend_for_child(&request(0, i64::MAX));
        assert_eq!(rec.total_investment, i64::MAX);
        assert_eq!(rec.maturity_low, i64::MAX);
        assert_eq!(rec.sip_amount, (i64::MAX as i128 * 70 / 100) as i64);

        let rec = recommend_for_child(&request(40, i64::MAX));
        assert_eq!(rec.total_investment, i64::MIN);
        assert_eq!(rec.maturity_high, i64::MIN);
    }

    #[test]
    fn test_adult_child_passes_through() {
        let rec = recommend_for_child(&request(18, 3000));
        assert_eq!(rec.years_to_maturity, 0);
        assert_eq!(rec.total_investment, 0);
        assert_eq!(rec.maturity_low, 0);

        let rec = recommend_for_child(&request(20, 3000));
        assert_eq!(rec.years_to_maturity, -2);
        assert_eq!(rec.total_investment, -72000);
        assert_eq!(rec.maturity_low, -180000);
    }
}
