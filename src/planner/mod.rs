//! Deterministic advice generators
//!
//! Turn completed slot sets into structured guidance. No I/O, no clock.
//! Per-fund splits are floored; aggregate figures use round-half-up.

pub mod child;
pub mod financial;
pub mod health;

pub use child::{recommend_for_child, BudgetTier, ChildRecommendation, FundSplit, InsuranceOption};
pub use financial::{build_plan, tax_bracket, AllocationMix, FinancialPlan, MonthlyAllocation};
pub use health::{health_score, profile_overview, ProfileOverview};

/// Round half up toward positive infinity (2.5 → 3, -2.5 → -2).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.0), 0);
    }
}
