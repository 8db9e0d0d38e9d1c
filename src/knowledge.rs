//! Static finance knowledge
//!
//! Concept explanations, LIC plan facts and SIP categories. Pure data plus a
//! keyword lookup.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SipRisk {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicPlan {
    pub name: &'static str,
    pub eligibility: &'static str,
    pub premium_range: &'static str,
    pub maturity_benefit: &'static str,
    pub expected_return: &'static str,
    pub suitability: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipType {
    pub name: &'static str,
    pub risk_level: SipRisk,
    pub expected_return: &'static str,
    pub min_investment: &'static str,
    pub suitability: &'static str,
}

pub const LIC_PLANS: &[LicPlan] = &[
    LicPlan {
        name: "Sukanya Samriddhi Yojana",
        eligibility: "Girl child below 10 years",
        premium_range: "₹250 to ₹1.5L per year",
        maturity_benefit: "Tax-free maturity at 21 years or marriage after 18",
        expected_return: "7.6% annually (tax-free)",
        suitability: "Best for girl child's education and marriage expenses",
    },
    LicPlan {
        name: "LIC Jeevan Tarun",
        eligibility: "Age 90 days to 12 years",
        premium_range: "₹6,000 to ₹3L annually",
        maturity_benefit: "Guaranteed returns + bonus at age 25",
        expected_return: "6-8% annually",
        suitability: "Child's higher education and career start",
    },
    LicPlan {
        name: "LIC Kanyadan Policy",
        eligibility: "Girl child 1 day to 20 years",
        premium_range: "₹12,000 to ₹2L annually",
        maturity_benefit: "Lump sum at marriage or age 25",
        expected_return: "5-7% annually",
        suitability: "Marriage expenses and financial security",
    },
    LicPlan {
        name: "LIC Jeevan Lakshya",
        eligibility: "Age 18-50 years",
        premium_range: "₹15,000 to ₹10L annually",
        maturity_benefit: "Income + lump sum for 10 years",
        expected_return: "6-9% annually",
        suitability: "Family income protection and wealth creation",
    },
];

pub const SIP_TYPES: &[SipType] = &[
    SipType {
        name: "Equity SIP",
        risk_level: SipRisk::High,
        expected_return: "12-15% annually",
        min_investment: "₹500/month",
        suitability: "Long-term wealth creation, 5+ years",
    },
    SipType {
        name: "Balanced/Hybrid SIP",
        risk_level: SipRisk::Medium,
        expected_return: "9-12% annually",
        min_investment: "₹1,000/month",
        suitability: "Moderate risk investors, 3-5 years",
    },
    SipType {
        name: "Debt SIP",
        risk_level: SipRisk::Low,
        expected_return: "6-8% annually",
        min_investment: "₹1,000/month",
        suitability: "Conservative investors, capital protection",
    },
    SipType {
        name: "ELSS SIP",
        risk_level: SipRisk::Medium,
        expected_return: "10-14% annually",
        min_investment: "₹500/month",
        suitability: "Tax saving with growth, 3-year lock-in",
    },
];

/// Both product tables, as served to clients.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Catalog {
    pub lic_plans: &'static [LicPlan],
    pub sip_types: &'static [SipType],
}

pub fn catalog() -> Catalog {
    Catalog {
        lic_plans: LIC_PLANS,
        sip_types: SIP_TYPES,
    }
}

/// Match keys are checked in order; the first hit wins. "sip" must stay ahead
/// of "mutual fund".
const CONCEPTS: &[(&str, &str)] = &[
    ("sip", SIP_EXPLANATION),
    ("mutual fund", MUTUAL_FUND_EXPLANATION),
    ("lic", LIC_EXPLANATION),
    ("elss", ELSS_EXPLANATION),
    ("ppf", PPF_EXPLANATION),
    ("nps", NPS_EXPLANATION),
];

/// Explain the first known concept mentioned in `text`.
pub fn explain_concept(text: &str) -> &'static str {
    let lower = text.to_lowercase();

    CONCEPTS
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, explanation)| *explanation)
        .unwrap_or(UNKNOWN_CONCEPT)
}

const SIP_EXPLANATION: &str = "💰 **SIP (Systematic Investment Plan) Explained:**

A SIP is like a monthly savings habit, but instead of keeping money in a piggy bank, you invest it in mutual funds. You invest a fixed amount (like ₹1,000) every month automatically.

**Simple Example:** If you invest ₹2,000 monthly in an equity SIP for 10 years, with 12% returns, you'll invest ₹2.4 lakhs but get around ₹4.6 lakhs back! That's the power of compounding.

**Why SIP Works:**
• **Rupee Cost Averaging** - You buy more units when prices are low, fewer when high
• **Discipline** - Automatic investment removes emotions
• **Flexibility** - Start with ₹500, increase anytime
• **Compounding** - Your returns earn returns too!

**Best for:** Regular income earners who want to build wealth systematically without timing the market.";

const MUTUAL_FUND_EXPLANATION: &str = "📈 **Mutual Funds Made Simple:**

Think of a mutual fund as a big basket where many people pool their money together. A professional fund manager uses this money to buy stocks, bonds, or other investments.

**Real Example:** 1,000 people contribute ₹10,000 each = ₹1 crore pool. The fund manager buys shares of 50 different companies. When these companies grow, everyone's money grows proportionally.

**Types:**
• **Equity Funds** - Invest in stocks (higher risk, higher returns)
• **Debt Funds** - Invest in bonds (lower risk, steady returns)
• **Hybrid Funds** - Mix of both (balanced approach)

**Benefits:** Professional management, diversification, liquidity, and you can start with just ₹500!

**Perfect for:** Anyone who wants to invest in stock markets but doesn't have time or expertise to pick individual stocks.";

const LIC_EXPLANATION: &str = "🛡️ **LIC (Life Insurance Corporation) Explained:**

LIC is India's largest life insurance company that provides both insurance protection and investment returns. It's like having a safety net for your family plus a savings account that grows over time.

**How it Works:** You pay a premium (monthly/yearly), and LIC guarantees to pay a larger amount after a fixed period or to your family if something happens to you.

**Example:** Pay ₹10,000 yearly for 15 years in LIC Jeevan Anand. After 15 years, get ₹3-4 lakhs back. Plus, your family gets ₹5 lakhs if anything happens to you during this period.

**Best LIC Plans:**
• **Jeevan Anand** - Life cover + returns
• **Jeevan Akshay** - Pension plan
• **Kanyadan** - For girl child

**Good for:** People who want guaranteed returns with life insurance, especially those who are risk-averse and prefer traditional investments.";

const ELSS_EXPLANATION: &str = "💸 **ELSS (Equity Linked Savings Scheme) Explained:**

ELSS is a special type of mutual fund that helps you save taxes while growing your money. It's like getting a discount on your tax bill while investing for the future!

**Tax Magic:** Invest up to ₹1.5 lakhs in ELSS and reduce your taxable income by the same amount. If you're in 30% tax bracket, you save ₹45,000 in taxes!

**Example:** Invest ₹12,500 monthly in Axis Tax Saver Fund. In 3 years (minimum lock-in), your ₹4.5 lakhs could become ₹6-7 lakhs, plus you saved ₹1.35 lakhs in taxes!

**Key Features:**
• 3-year lock-in period (shortest among tax-saving options)
• Potential returns: 12-15% annually
• Tax-free returns after 1 year

**Perfect for:** Salaried individuals who want to save taxes and create wealth simultaneously with relatively short commitment.";

const PPF_EXPLANATION: &str = "🏛️ **PPF (Public Provident Fund) Explained:**

PPF is like a government-backed treasure chest that grows your money safely for 15 years. It's the most trusted long-term investment in India with complete tax benefits.

**Triple Tax Benefit (EEE):**
• Investment is tax-deductible (up to ₹1.5L)
• Growth is tax-free
• Maturity amount is tax-free

**Example:** Invest ₹1.5 lakhs yearly for 15 years at 7.1% interest. You invest ₹22.5 lakhs but get ₹40+ lakhs back - completely tax-free!

**Features:**
• 15-year lock-in (extendable in 5-year blocks)
• Partial withdrawal allowed after 7 years
• Loan facility available
• Government guaranteed returns

**Best for:** Conservative investors who want guaranteed, tax-free returns and don't mind long-term commitment. Perfect for retirement planning.";

const NPS_EXPLANATION: &str = "🎯 **NPS (National Pension System) Explained:**

NPS is like a retirement piggy bank managed by professionals, designed to give you regular income after age 60. It's India's market-linked pension scheme with additional tax benefits.

**How it Works:** You contribute regularly, choose investment options (equity/debt mix), and at 60, you get a pension for life plus a lump sum.

**Example:** Invest ₹5,000 monthly from age 30 to 60. With 10% average returns, your ₹18 lakhs investment could become ₹1+ crore! Get 40% as lump sum (₹40 lakhs) and ₹30,000+ monthly pension.

**Tax Benefits:**
• ₹1.5L deduction under Section 80C
• Additional ₹50K under Section 80CCD(1B)
• Partial tax-free withdrawal at maturity

**Best for:** Young professionals who want to build a substantial retirement corpus with maximum tax benefits and don't mind market-linked returns.";

const UNKNOWN_CONCEPT: &str = "🤔 I'd love to explain that concept! However, I specialize in common financial terms like:

📚 **Ask me about:**
• SIP, Mutual Funds, ELSS
• LIC, PPF, NPS
• Tax saving investments
• Child investment plans
• Retirement planning

**Try asking:** \"What is SIP?\" or \"Explain mutual funds\" and I'll give you a clear, beginner-friendly explanation with examples!

What specific financial concept would you like me to explain? 🌟";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(explain_concept("What is SIP?"), SIP_EXPLANATION);
        assert_eq!(explain_concept("explain Mutual Funds"), MUTUAL_FUND_EXPLANATION);
        assert_eq!(explain_concept("DEFINE PPF"), PPF_EXPLANATION);
    }

    #[test]
    fn test_first_key_wins_on_overlap() {
        let text = "explain mutual fund vs sip";
        assert_eq!(explain_concept(text), SIP_EXPLANATION);

        // "elss" is checked after "lic"
        assert_eq!(explain_concept("lic or elss?"), LIC_EXPLANATION);
    }

    #[test]
    fn test_unknown_concept_lists_supported_terms() {
        let answer = explain_concept("what is a bond ladder");
        assert_eq!(answer, UNKNOWN_CONCEPT);
        assert!(answer.contains("SIP, Mutual Funds, ELSS"));
    }

    #[test]
    fn test_catalog_serializes_camel_case() {
        let json = serde_json::to_value(catalog()).unwrap();

        assert_eq!(json["lic_plans"].as_array().map(|a| a.len()), Some(4));
        assert_eq!(json["sip_types"].as_array().map(|a| a.len()), Some(4));
        assert_eq!(json["lic_plans"][1]["name"], "LIC Jeevan Tarun");
        assert_eq!(json["lic_plans"][1]["premiumRange"], "₹6,000 to ₹3L annually");
        assert_eq!(json["sip_types"][2]["riskLevel"], "Low");
        assert_eq!(json["sip_types"][2]["minInvestment"], "₹1,000/month");
    }
}
