//! Intent Router
//!
//! Classifies one inbound message into an intent by fixed-priority keyword
//! matching. An active slot-filling dialogue always takes the message first.
//!
//! The rule order is observable behaviour: reordering it changes which
//! handler answers an ambiguous message.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    ContinueRecommendationDialogue,
    ContinueProfileDialogue,
    ExplainConcept,
    StartRecommendationDialogue,
    GoldRateQuery,
    FundPerformanceQuery,
    MarketQuery,
    StartProfileDialogue,
    TaxGuidance,
    InvestmentGuidance,
    SchemeGuidance,
    FallbackMenu,
}

impl Intent {
    /// Intents that arm a slot-filling dialogue when selected.
    pub fn starts_dialogue(&self) -> bool {
        matches!(
            self,
            Intent::StartRecommendationDialogue | Intent::StartProfileDialogue
        )
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Intent::ContinueRecommendationDialogue => "continue_recommendation_dialogue",
            Intent::ContinueProfileDialogue => "continue_profile_dialogue",
            Intent::ExplainConcept => "explain_concept",
            Intent::StartRecommendationDialogue => "start_recommendation_dialogue",
            Intent::GoldRateQuery => "gold_rate_query",
            Intent::FundPerformanceQuery => "fund_performance_query",
            Intent::MarketQuery => "market_query",
            Intent::StartProfileDialogue => "start_profile_dialogue",
            Intent::TaxGuidance => "tax_guidance",
            Intent::InvestmentGuidance => "investment_guidance",
            Intent::SchemeGuidance => "scheme_guidance",
            Intent::FallbackMenu => "fallback_menu",
        };
        write!(f, "{}", s)
    }
}

/// Session facts the router needs besides the message itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteContext {
    pub recommendation_active: bool,
    pub profile_active: bool,
    pub income_recorded: bool,
}

/// Static keyword lists, zero allocation
const EXPLAIN_KEYWORDS: &[&str] = &["what is", "explain", "define", "meaning of"];

const CHILD_KEYWORDS: &[&str] = &[
    "child plan",
    "lic child",
    "compare lic",
    "child investment",
    "kid",
    "daughter",
    "son",
];

const GOLD_KEYWORDS: &[&str] = &["gold rate", "current gold", "gold price"];

const FUND_KEYWORDS: &[&str] = &["mutual fund", "sip rates", "fund performance"];

const MARKET_KEYWORDS: &[&str] = &["market", "stock", "nifty", "sensex"];

const PLANNING_KEYWORDS: &[&str] = &["plan", "financial plan"];

const TAX_KEYWORDS: &[&str] = &["tax", "save tax", "80c"];

const INVEST_KEYWORDS: &[&str] = &["invest", "mutual fund", "sip"];

const SCHEME_KEYWORDS: &[&str] = &["ppf", "nps", "sukanya", "government scheme"];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Keyword intent router
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentRouter;

impl IntentRouter {
    pub fn new() -> Self {
        Self
    }

    /// Highest-priority intent for the message.
    pub fn route(&self, message: &str, ctx: &RouteContext) -> Intent {
        self.candidates(message, ctx)
            .first()
            .copied()
            .unwrap_or(Intent::FallbackMenu)
    }

    /// Every matching intent, highest priority first, always ending with
    /// [`Intent::FallbackMenu`].
    ///
    /// Lower entries are only consulted when a quote handler has no data.
    pub fn candidates(&self, message: &str, ctx: &RouteContext) -> Vec<Intent> {
        if ctx.recommendation_active {
            return vec![Intent::ContinueRecommendationDialogue];
        }
        if ctx.profile_active {
            return vec![Intent::ContinueProfileDialogue];
        }

        let text = message.to_lowercase();
        let mut matched = Vec::with_capacity(4);

        if contains_any(&text, EXPLAIN_KEYWORDS) {
            matched.push(Intent::ExplainConcept);
        }
        if contains_any(&text, CHILD_KEYWORDS) {
            matched.push(Intent::StartRecommendationDialogue);
        }
        if contains_any(&text, GOLD_KEYWORDS) {
            matched.push(Intent::GoldRateQuery);
        }
        if contains_any(&text, FUND_KEYWORDS) {
            matched.push(Intent::FundPerformanceQuery);
        }
        if contains_any(&text, MARKET_KEYWORDS) {
            matched.push(Intent::MarketQuery);
        }
        if contains_any(&text, PLANNING_KEYWORDS)
            || (text.contains("income") && !ctx.income_recorded)
        {
            matched.push(Intent::StartProfileDialogue);
        }
        if contains_any(&text, TAX_KEYWORDS) {
            matched.push(Intent::TaxGuidance);
        }
        if contains_any(&text, INVEST_KEYWORDS) {
            matched.push(Intent::InvestmentGuidance);
        }
        if contains_any(&text, SCHEME_KEYWORDS) {
            matched.push(Intent::SchemeGuidance);
        }

        matched.push(Intent::FallbackMenu);
        matched
    }
}
