//! Response texts
//!
//! Every canned reply the advisor sends: dialogue prompts and re-prompts,
//! topical guidance, quote renderings and the two generated plans.
//! Figures are computed by the planner; this module only lays them out.

use crate::format::{amount, group_digits};
use crate::market::{FundsQuote, GoldQuote, MarketQuote, Trend};
use crate::models::{FinancialGoal, FinancialProfile, RecommendationRequest, RiskTolerance, UserStreak};
use crate::planner::{round_half_up, tax_bracket, BudgetTier, ChildRecommendation, FinancialPlan};
use chrono::{DateTime, Utc};

// ===== Suggestions =====

pub const WELCOME_SUGGESTIONS: &[&str] = &[
    "What is SIP?",
    "Explain mutual funds",
    "Compare LIC child plans",
    "I need investment advice",
];

pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "What is SIP?",
    "Compare LIC plans",
    "💰 Live gold rates",
    "🎯 Investment plan",
];

pub const COLLECTING_SUGGESTIONS: &[&str] = &[
    "💡 Need help with format",
    "📞 Call support",
    "⏭️ Skip this step",
];

pub fn suggestions(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%H:%M:%S UTC").to_string()
}

// ===== Session =====

pub fn welcome(streak: &UserStreak) -> String {
    let record = if streak.current_streak == streak.longest_streak && streak.current_streak > 1 {
        "🎉 New personal record!"
    } else {
        ""
    };

    format!(
        "🙏 Namaste! I'm Krishna, your personal financial guide with real-time market access!

🔥 **Your Streak: {} days!** {}

I can help you in two ways:
📚 **Explain Finance Concepts** - Ask \"What is SIP?\" or \"Explain mutual funds\"
🎯 **Personalized Recommendations** - Share your details for custom LIC/SIP advice

What would you like to explore today?",
        streak.current_streak, record
    )
}

// ===== Profile dialogue =====

pub const PROFILE_START: &str = "🎯 **Let's Create Your Personalized Financial Roadmap!**

I'll ask you a few questions to understand your situation and create a customized investment strategy with specific fund recommendations.

💰 **First, let's start with your income:**

What's your monthly income? Include:
• Salary (in-hand amount)
• Bonus/incentives (monthly average)
• Other income sources

**Example:** \"My monthly income is ₹75,000\" or \"I earn 1.2 lakhs per month\"

*This helps me calculate your exact tax savings and investment capacity.*";

pub const INCOME_REPROMPT: &str = "Please provide your monthly income in numbers.
**Example:** \"My monthly income is ₹50,000\" or \"I earn 80000 per month\"";

pub const EXPENSES_REPROMPT: &str = "Please provide your total monthly expenses in numbers.
**Example:** \"My monthly expenses are ₹30,000\" or \"I spend around 45000 monthly\"";

pub fn expenses_prompt(income: f64) -> String {
    format!(
        "💰 Great! Monthly income: ₹{}

Now, what are your monthly expenses? Include:
• Rent/EMI: ₹___
• Food & Groceries: ₹___
• Transportation: ₹___
• Utilities & Bills: ₹___
• Other expenses: ₹___

**Example:** \"My monthly expenses are around ₹35,000\"",
        amount(income)
    )
}

pub fn goals_prompt(expenses: f64, surplus: f64) -> String {
    let verdict = if surplus > 0.0 {
        "🎉 Great saving potential!"
    } else {
        "⚠️ Need to optimize expenses"
    };

    format!(
        "📊 Monthly expenses: ₹{}
💡 **Your monthly surplus: ₹{}** {}

What are your financial goals? Select or tell me:
1. 🏠 **Home Purchase** - In how many years?
2. 🚗 **Vehicle Purchase** - Budget and timeline?
3. 👶 **Child's Education** - Future planning?
4. 🏖️ **Retirement Planning** - Target age?
5. 🚨 **Emergency Fund** - 6-12 months expenses?

**Example:** \"I want to buy a house in 5 years worth ₹50 lakhs and plan for retirement\"",
        amount(expenses),
        amount(surplus),
        verdict
    )
}

pub fn profile_risk_prompt(goals: &[FinancialGoal]) -> String {
    let identified = if goals.is_empty() {
        "none yet".to_string()
    } else {
        goals.iter().map(|g| g.to_string()).collect::<Vec<_>>().join(", ")
    };

    format!(
        "🎯 Goals identified: {}

What's your risk tolerance for investments?

🛡️ **Conservative (Low Risk)**
• Prefer guaranteed returns
• Can accept 6-8% annual returns
• Priority: Capital protection

⚖️ **Moderate (Balanced Risk)**
• Mix of safety and growth
• Target: 10-12% annual returns
• Comfortable with some volatility

🚀 **Aggressive (High Risk)**
• Focus on maximum growth
• Target: 15%+ annual returns
• Can handle market fluctuations

**Example:** \"I prefer moderate risk investments\" or \"I'm aggressive with my investments\"",
        identified
    )
}

// ===== Recommendation dialogue =====

pub const RECOMMENDATION_START: &str = "👶 **Child Investment Planning - Let's Create the Perfect Plan!**

I'll help you compare LIC child plans and SIP options based on your specific situation.

**First, tell me your child's age:**
This helps me recommend age-appropriate plans with the right timeline.

**Examples:**
• \"My daughter is 3 years old\"
• \"He is 7 years old\"
• \"She just turned 1\"

💡 **Why age matters:**
• **0-5 years:** Maximum time for wealth creation
• **6-12 years:** Focus on education planning
• **13-18 years:** Short-term, conservative approach

What's your child's current age? 🌟";

pub const CHILD_AGE_REPROMPT: &str =
    "Please provide your child's age in years (e.g., '5 years old' or 'she is 8')";

pub const BUDGET_REPROMPT: &str =
    "Please specify your monthly budget amount (e.g., '₹3000' or 'I can invest 5000 rupees monthly')";

pub fn budget_prompt(age: i64) -> String {
    format!(
        "✅ **Child Age: {} years recorded**

💰 **What's your monthly investment budget?**

This helps me recommend suitable premium amounts and SIP options.

**Budget Categories:**
• **₹500-2,000:** Basic SIP plans, small premium LIC policies
• **₹2,000-5,000:** Balanced mix of SIP + LIC child plans
• **₹5,000-10,000:** Premium LIC plans + diversified SIP portfolio
• **₹10,000+:** Comprehensive wealth creation strategy

**Examples:**
• \"I can invest ₹3,000 monthly\"
• \"My budget is around ₹1,500 per month\"
• \"I want to invest ₹8,000 monthly\"

What's your comfortable monthly investment amount? 💸",
        age
    )
}

pub fn child_goal_prompt(budget: i64) -> String {
    format!(
        "✅ **Monthly Budget: ₹{} recorded**

🎯 **What's your primary goal for this investment?**

**Goal Options:**
• **Education Fund:** College fees, professional courses
• **Marriage Fund:** Wedding expenses, gold, ceremonies
• **General Wealth:** Long-term wealth creation
• **Emergency + Education:** Dual purpose planning

**Examples:**
• \"I want to save for my daughter's engineering college\"
• \"Planning for my son's wedding expenses\"
• \"General wealth creation for future needs\"

What's your main investment goal? 🌟",
        group_digits(budget)
    )
}

pub fn child_risk_prompt(goal: &str) -> String {
    format!(
        "✅ **Goal: {} recorded**

⚖️ **What's your risk tolerance?**

**Risk Levels:**
• **Conservative:** Guaranteed returns, capital protection (LIC focus)
• **Moderate:** Balanced growth with some risk (Mix of LIC + Equity SIP)
• **Aggressive:** Higher growth potential (Equity-heavy SIP focus)

**Examples:**
• \"I prefer guaranteed returns, safety first\"
• \"Moderate risk is fine, balanced approach\"
• \"I can take higher risk for better returns\"

What's your risk preference? 📊",
        goal
    )
}

// ===== Generated plans =====

const CHILD_PLAN_FOOTER: &str = "

---

**🔍 DATA SOURCES & VERIFICATION:**
• **LIC Plans:** licindia.in/insurance-plan (Official LIC website)
• **Mutual Funds:** amfiindia.com, respective fund house websites
• **Returns:** Historical data from AMFI, subject to market risks

**⚠️ IMPORTANT DISCLAIMER:**
*Mutual fund investments are subject to market risks. Past performance doesn't guarantee future returns. Please verify current plan details and terms from official sources before investing.*

**📞 NEXT STEPS:**
1. Visit official websites to verify current rates
2. Consult with financial advisor for personalized advice
3. Start with smaller amounts and gradually increase
4. Review and rebalance annually

Would you like me to explain any specific plan in detail? 🤔";

const LIC_SOURCE: &str = "• **Source:** licindia.in/insurance-plan\n";

fn tier_medal(tier: BudgetTier) -> &'static str {
    match tier {
        BudgetTier::Starter => "🥉",
        BudgetTier::Balanced => "🥈",
        BudgetTier::Premium => "🥇",
    }
}

/// Per-line amounts are printed ungrouped; only the totals are grouped.
fn fund_lines(rec: &ChildRecommendation) -> String {
    rec.funds
        .iter()
        .map(|fund| match fund.note {
            Some(note) => format!("• **{}:** ₹{} ({})\n", fund.name, fund.amount, note),
            None => format!("• **{}:** ₹{}\n", fund.name, fund.amount),
        })
        .collect()
}

fn tier_strategy(budget: i64, rec: &ChildRecommendation) -> String {
    let mut out = format!("**{} {} (Budget: ₹{})**\n\n", tier_medal(rec.tier), rec.tier.label(), budget);

    match rec.tier {
        BudgetTier::Starter => {
            out.push_str(&format!("**Option 1: SIP Focus ({}% allocation)**\n", rec.sip_percent));
            out.push_str(&fund_lines(rec));
            out.push_str("• **Source:** axismf.com, miraeassetmf.co.in\n\n");

            out.push_str(&format!(
                "**Option 2: LIC Child Plan ({}% allocation)**\n",
                rec.insurance_percent
            ));
            for plan in &rec.insurance_plans {
                out.push_str(&format!(
                    "• **{}:** ₹{} monthly premium\n• **Benefits:** {}\n",
                    plan.name, rec.insurance_amount, plan.note
                ));
            }
        }
        BudgetTier::Balanced => {
            out.push_str(&format!(
                "**SIP Portfolio ({}% allocation - ₹{})**\n",
                rec.sip_percent, rec.sip_amount
            ));
            out.push_str(&fund_lines(rec));

            out.push_str(&format!(
                "\n**LIC Child Plan ({}% allocation - ₹{})**\n",
                rec.insurance_percent, rec.insurance_amount
            ));
            for plan in &rec.insurance_plans {
                out.push_str(&format!("• **{}:** {}\n", plan.name, plan.note));
            }
        }
        BudgetTier::Premium => {
            out.push_str(&format!(
                "**Diversified SIP Portfolio ({}% allocation - ₹{})**\n",
                rec.sip_percent, rec.sip_amount
            ));
            out.push_str(&fund_lines(rec));

            out.push_str(&format!(
                "\n**LIC Premium Plan ({}% allocation - ₹{})**\n",
                rec.insurance_percent, rec.insurance_amount
            ));
            for plan in &rec.insurance_plans {
                out.push_str(&format!(
                    "• **{}** {}\n• **Life cover:** 10x annual premium minimum\n",
                    plan.name, plan.note
                ));
            }
        }
    }

    out.push_str(LIC_SOURCE);
    out
}

pub fn render_child_recommendation(request: &RecommendationRequest, rec: &ChildRecommendation) -> String {
    let mut out = format!(
        "🎯 **Personalized Investment Plan**

**Your Profile:**
• Child Age: {} years
• Investment Horizon: {} years
• Monthly Budget: ₹{}
• Goal: {}
• Risk Level: {}
• Total Investment: ₹{}

---

**📋 RECOMMENDED STRATEGY:**

",
        request.child_age,
        rec.years_to_maturity,
        group_digits(request.monthly_budget),
        request.goal,
        request.risk_tolerance,
        group_digits(rec.total_investment)
    );

    out.push_str(&tier_strategy(request.monthly_budget, rec));
    out.push_str(&format!(
        "\n**Expected Maturity:** ₹{} - ₹{}",
        group_digits(rec.maturity_low),
        group_digits(rec.maturity_high)
    ));

    out.push_str(CHILD_PLAN_FOOTER);
    out
}

pub fn render_financial_plan(profile: &FinancialProfile, plan: &FinancialPlan) -> String {
    let allocation = format!(
        "• Emergency Fund: {}% (₹{}/month)\n• Debt Funds: {}% (₹{}/month)\n• Equity: {}% (₹{}/month)",
        plan.mix.emergency_pct,
        group_digits(plan.allocation.emergency),
        plan.mix.debt_pct,
        group_digits(plan.allocation.debt),
        plan.mix.equity_pct,
        group_digits(plan.allocation.equity)
    );

    let funds = plan
        .funds
        .iter()
        .map(|f| format!("• {}", f))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "🎉 **Your Personalized Financial Plan is Ready!**

📊 **Financial Summary:**
• Monthly Income: ₹{}
• Monthly Expenses: ₹{}
• Monthly Surplus: ₹{}
• Risk Profile: {}

🎯 **Recommended Asset Allocation:**
{}

🛟 **Emergency Fund Target:** ₹{} (6 months of expenses)

💰 **Tax Saving Strategy:**
• Annual Tax Saving Potential: ₹{}
• Monthly SIP in ELSS: ₹{}
• Estimated Tax Savings: ₹{}/year

🏆 **Specific Fund Recommendations:**
{}

📈 **Projected Wealth in 10 Years:**
₹{}.0 Lakhs

🎮 **Next Steps:**
1. Open investment accounts (Zerodha, Groww, or bank)
2. Start SIPs in recommended funds
3. Set up auto-debit for consistency
4. Review and rebalance quarterly

Would you like me to explain any specific investment or create a goal-based timeline?",
        amount(profile.monthly_income),
        amount(profile.monthly_expenses),
        amount(plan.surplus),
        plan.risk_tolerance,
        allocation,
        amount(plan.emergency_target),
        amount(plan.tax_saving_limit),
        group_digits(plan.monthly_elss_sip),
        group_digits(plan.estimated_tax_savings),
        funds,
        plan.projected_wealth_lakhs
    )
}

// ===== Market quotes =====

pub fn gold_response(gold: &GoldQuote) -> String {
    let trend = match gold.trend {
        Trend::Bullish => "📈 Bullish - Good time to buy",
        Trend::Bearish => "📉 Bearish - Wait for better rates",
    };

    format!(
        "💰 **Live Gold Rates (Updated: {}):**

🏆 **24K Gold:** {} per gram ({})
🥈 **22K Gold:** {} per gram
📈 **Trend:** {}

**📊 Source:** {}

💡 **Krishna's Investment Strategy:**
• **Physical Gold:** 5-10% of portfolio maximum
• **Gold ETFs:** More liquid, lower making charges
• **Gold Bonds:** 2.5% annual interest + price appreciation
• **Digital Gold:** Start small, accumulate gradually

🎯 **Tax Benefits:**
• Gold Bonds: No capital gains tax if held 8+ years
• Gold ETF: Long-term capital gains at 20% with indexation

⚠️ **Note:** Rates vary by city and jeweller. Always verify with local dealers before purchasing.",
        timestamp(&gold.last_updated),
        gold.price_24k,
        gold.change,
        gold.price_22k,
        trend,
        gold.source
    )
}

pub fn funds_response(funds: &FundsQuote) -> String {
    let listing: String = funds
        .top_funds
        .iter()
        .enumerate()
        .map(|(i, fund)| {
            format!(
                "\n**{}. {}**\n• **Returns:** {} (3-year average)\n• **Risk Level:** {}\n• **Min SIP:** {}\n• **AUM:** {}\n• **Source:** {}\n",
                i + 1,
                fund.name,
                fund.returns,
                fund.risk,
                fund.min_sip,
                fund.aum,
                fund.source
            )
        })
        .collect();

    format!(
        "📈 **Top Performing SIP Funds (Updated: {}):**
{}
**⚠️ Disclaimer:** {}

💡 **Krishna's SIP Strategy:**
• Start with ₹500-1000 monthly
• Diversify across 2-3 fund categories
• Increase SIP amount annually by 10%
• Stay invested for minimum 5 years

🎯 **Tax Benefits:**
• ELSS funds: 80C deduction up to ₹1.5L
• Long-term gains: 10% tax above ₹1L annually

Would you like me to compare specific funds for your goals? 🤔",
        timestamp(&funds.last_updated),
        listing,
        funds.disclaimer
    )
}

pub fn market_response(market: &MarketQuote, profile: &FinancialProfile) -> String {
    let gainers = market
        .top_gainers
        .iter()
        .map(|g| format!("• {}", g))
        .collect::<Vec<_>>()
        .join("\n");

    let sentiment = match market.sentiment {
        Trend::Bullish => "🐂 Bullish - Good for SIP investments",
        Trend::Bearish => "🐻 Bearish - Stay cautious",
    };

    let personal = if profile.has_income() {
        format!(
            "**Your Recommended Monthly SIP:** ₹{} across 3-4 funds",
            group_digits(round_half_up(profile.surplus() * 0.4))
        )
    } else {
        String::new()
    };

    format!(
        "📈 **Live Market Update ({}):**

🔥 **Nifty 50:** {} ({})
🚀 **Sensex:** {} ({})

🏆 **Today's Top Performers:**
{}

💡 **Market Sentiment:** {}

🎯 **Investment Strategy for Current Market:**
• **SIP in Index Funds:** Benefit from market growth
• **Large Cap Funds:** Stable performance in volatile times
• **Avoid lump sum:** Continue systematic investing

{}

📊 **Best Performing Sectors This Month:**
• Technology: +3.2%
• Banking & Finance: +2.8%
• Healthcare: +2.1%

Ready to start your investment journey with current market conditions?",
        timestamp(&market.last_updated),
        market.nifty,
        market.nifty_change,
        market.sensex,
        market.sensex_change,
        gainers,
        sentiment,
        personal
    )
}

// ===== Topical guidance =====

const DEFAULT_TAX_INCOME: f64 = 50_000.0;

pub fn tax_guidance(profile: &FinancialProfile) -> String {
    let income = if profile.has_income() {
        profile.monthly_income
    } else {
        DEFAULT_TAX_INCOME
    };
    let annual_income = income * 12.0;
    let bracket = tax_bracket(annual_income);

    let personal = if profile.has_income() {
        let elss = std::cmp::min(12_500, round_half_up(profile.monthly_income * 0.15));
        let eligible = f64::min(150_000.0, profile.monthly_income * 12.0 * 0.15);
        format!(
            "**Your Recommended Tax-Saving Portfolio:**\nMonthly ELSS SIP: ₹{}\nAnnual Tax Savings: ₹{}",
            group_digits(elss),
            group_digits(round_half_up(eligible * bracket as f64 / 100.0))
        )
    } else {
        "Share your income for exact tax-saving calculations!".to_string()
    };

    format!(
        "💰 **Personalized Tax Optimization Strategy:**

📊 **Your Tax Profile:**
• Annual Income: ₹{}
• Current Tax Bracket: {}%
• Potential Tax Savings: ₹{}/year

🎯 **Section 80C Investments (₹1.5L limit):**
• **ELSS Mutual Funds:** ₹12,500/month
  - Tax saving + 12-15% returns
  - 3-year lock-in period
  - Recommended: Axis Tax Saver, Mirae Asset Tax Saver

• **PPF:** ₹12,500/month
  - 15-year lock-in, 7.1% tax-free returns
  - Best for long-term wealth creation

• **NSC/Tax Saver FD:** ₹5,000/month
  - 5-year lock-in, guaranteed returns

📈 **Additional Tax Benefits:**
• **Section 80D:** Health insurance (₹25K-₹50K deduction)
• **Section 80CCD(1B):** NPS additional ₹50K
• **Section 24:** Home loan interest (₹2L deduction)

💡 **Smart Tax Calendar:**
• **April-June:** Start ELSS SIPs
• **July-September:** Increase contributions
• **October-December:** Final tax-saving investments
• **January-March:** Prepare for filing

{}

Ready to start your tax-saving investments?",
        amount(annual_income),
        bracket,
        group_digits(round_half_up(annual_income * 0.31 * 0.15)),
        personal
    )
}

fn portfolio_template(risk: RiskTolerance) -> &'static str {
    match risk {
        RiskTolerance::Conservative => {
            "**Conservative Approach:**
• Large Cap Funds: 60% - Axis Bluechip Fund
• Debt Funds: 30% - ICICI Corporate Bond Fund
• Gold ETF: 10% - SBI Gold ETF
Expected Returns: 8-10% annually"
        }
        RiskTolerance::Moderate => {
            "**Balanced Portfolio:**
• Large Cap: 40% - Axis Bluechip Fund
• Mid Cap: 30% - HDFC Mid-Cap Opportunities
• Flexi Cap: 20% - Parag Parikh Flexi Cap
• Debt: 10% - Axis Treasury Advantage
Expected Returns: 12-15% annually"
        }
        RiskTolerance::Aggressive => {
            "**Aggressive Growth:**
• Small/Mid Cap: 40% - Axis Small Cap Fund
• Flexi Cap: 35% - Parag Parikh Flexi Cap
• Large Cap: 25% - Mirae Asset Large Cap
Expected Returns: 15-18% annually"
        }
    }
}

pub fn investment_guidance(profile: &FinancialProfile) -> String {
    let emergency_target = if profile.monthly_expenses > 0.0 {
        format!("₹{}", amount(profile.monthly_expenses * 6.0))
    } else {
        "6 months expenses".to_string()
    };

    let monthly_allocation = if profile.has_income() {
        format!("₹{}", group_digits(round_half_up(profile.surplus() * 0.25)))
    } else {
        "25% of surplus".to_string()
    };

    let sip = if profile.has_income() {
        let monthly_sip = profile.surplus() * 0.6;
        format!(
            "• Total Monthly SIP: ₹{}\n• Start with: ₹5,000/month, increase 10% annually\n• Wealth in 10 years: ₹{}.0 Lakhs",
            group_digits(round_half_up(monthly_sip)),
            round_half_up(monthly_sip * 12.0 * 10.0 * 1.12 / 100_000.0)
        )
    } else {
        "Share your income for personalized SIP amounts!".to_string()
    };

    format!(
        "📈 **Personalized Investment Strategy (Live Data):**

🎯 **Goal-Based Investment Approach:**

**🚨 Emergency Fund (First Priority):**
• Target: {}
• Investment: Liquid funds, savings account
• Monthly allocation: {}

**📊 Wealth Creation Portfolio:**
{}

💰 **SIP Recommendations:**
{}

🏆 **Top Performing Funds (5-year returns):**
• Axis Bluechip Fund: 12.8% CAGR
• Parag Parikh Flexi Cap: 14.6% CAGR
• Mirae Asset Emerging Bluechip: 15.2% CAGR

🎮 **Getting Started:**
1. Download Groww/Zerodha Coin app
2. Complete KYC verification
3. Start SIPs in recommended funds
4. Set up auto-debit for consistency

Want me to create a step-by-step investment timeline?",
        emergency_target,
        monthly_allocation,
        portfolio_template(profile.risk_tolerance),
        sip
    )
}

pub fn scheme_guidance(profile: &FinancialProfile) -> String {
    let personal = if profile.has_income() {
        let income = profile.monthly_income;
        format!(
            "**For your income (₹{}/month):**\nRecommended allocation:\n• ELSS SIP: ₹{}/month\n• PPF: ₹{}/month\n• NPS: ₹{}/month",
            amount(income),
            group_digits(round_half_up(income * 0.10)),
            group_digits(round_half_up(income * 0.08)),
            group_digits(round_half_up(income * 0.05))
        )
    } else {
        String::new()
    };

    format!(
        "🏛️ **Government Investment Schemes - Detailed Guide:**

💰 **Public Provident Fund (PPF):**
• **Lock-in:** 15 years (extendable in 5-year blocks)
• **Interest:** 7.1% annually (tax-free)
• **Investment:** ₹500 to ₹1.5L per year
• **Tax Benefit:** EEE (Exempt-Exempt-Exempt)
• **Best for:** Long-term wealth creation, retirement planning

📊 **National Pension System (NPS):**
• **Lock-in:** Until age 60 (partial withdrawal allowed)
• **Returns:** 10-12% historically
• **Tax Benefit:** ₹1.5L under Section 80C + ₹50K under Section 80CCD(1B)
• **Best for:** Retirement corpus building

👶 **Sukanya Samriddhi Yojana (Girl Child):**
• **Lock-in:** 21 years or marriage after 18
• **Interest:** 7.6% annually (tax-free)
• **Investment:** ₹250 to ₹1.5L per year
• **Best for:** Girl child's education and marriage

🏠 **ELSS vs PPF vs NPS Comparison:**

| Feature | ELSS | PPF | NPS |
|---------|------|-----|-----|
| Lock-in | 3 years | 15 years | Till 60 |
| Returns | 12-15% | 7.1% | 10-12% |
| Tax on maturity | LTCG | Nil | Partial |
| Liquidity | High | Medium | Low |

💡 **Krishna's Recommendation:**
• **Age 20-30:** 70% ELSS + 30% PPF
• **Age 30-40:** 50% ELSS + 30% PPF + 20% NPS
• **Age 40+:** 40% ELSS + 40% PPF + 20% NPS

{}

Which scheme interests you the most? I can provide detailed implementation steps!",
        personal
    )
}

pub fn fallback_menu(profile: &FinancialProfile) -> String {
    let status = if profile.has_income() {
        format!(
            "✅ Profile Complete - Ready for advanced strategies!\nCurrent surplus: ₹{}/month",
            amount(profile.surplus())
        )
    } else {
        "📝 Let's start by creating your financial profile or explaining concepts!".to_string()
    };

    format!(
        "🙏 **Namaste! I'm Krishna, your AI financial advisor with two special modes:**

📚 **Concept Explanation Mode:**
Ask \"What is SIP?\" or \"Explain mutual funds\" for clear, beginner-friendly explanations with examples.

🎯 **Personalized Recommendation Mode:**
Share your details (age, budget, goals) for custom LIC child plans and SIP comparisons.

✨ **I can also help you with:**
• 📊 **Real-time data:** Gold rates, stock prices, market updates
• 💰 **Tax optimization:** Save thousands through smart investments
• 🏛️ **Government schemes:** PPF, NPS, ELSS detailed guidance
• 📈 **Goal-based investing:** Home, retirement, education planning

💡 **Try asking:**
• \"What is SIP?\" (Concept Mode)
• \"Compare LIC child plans\" (Recommendation Mode)
• \"Current gold rates for investment\"
• \"My income is ₹80K, create my plan\"

🎮 **Your Financial Journey:**
{}

What would you like to explore today? 🌟",
        status
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{build_plan, recommend_for_child};
    use chrono::TimeZone;

    fn profile(income: f64, expenses: f64) -> FinancialProfile {
        FinancialProfile {
            monthly_income: income,
            monthly_expenses: expenses,
            ..FinancialProfile::default()
        }
    }

    #[test]
    fn test_welcome_marks_new_record() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
        let record = UserStreak {
            last_visit: now,
            current_streak: 4,
            longest_streak: 4,
        };
        assert!(welcome(&record).contains("Your Streak: 4 days!** 🎉 New personal record!"));

        assert!(!welcome(&UserStreak::first_visit(now)).contains("New personal record"));

        let behind = UserStreak {
            current_streak: 2,
            longest_streak: 9,
            ..record
        };
        assert!(!welcome(&behind).contains("New personal record"));
    }

    #[test]
    fn test_goals_prompt_flags_deficit() {
        let text = goals_prompt(60000.0, -10000.0);
        assert!(text.contains("Monthly expenses: ₹60,000"));
        assert!(text.contains("surplus: ₹-10,000** ⚠️ Need to optimize expenses"));

        assert!(goals_prompt(45000.0, 35000.0).contains("🎉 Great saving potential!"));
    }

    #[test]
    fn test_risk_prompt_lists_goals() {
        let text = profile_risk_prompt(&[FinancialGoal::HomePurchase, FinancialGoal::RetirementPlanning]);
        assert!(text.starts_with("🎯 Goals identified: Home Purchase, Retirement Planning"));
        assert!(profile_risk_prompt(&[]).starts_with("🎯 Goals identified: none yet"));
    }

    fn child_request(child_age: i64, monthly_budget: i64) -> RecommendationRequest {
        RecommendationRequest {
            child_age,
            monthly_budget,
            goal: "education".to_string(),
            risk_tolerance: "moderate".to_string(),
        }
    }

    #[test]
    fn test_balanced_child_plan_layout() {
        let request = child_request(5, 3000);
        let text = render_child_recommendation(&request, &recommend_for_child(&request));

        assert!(text.contains("• Monthly Budget: ₹3,000\n"));
        assert!(text.contains("• Total Investment: ₹468,000"));
        assert!(text.contains(
            "**🥈 BALANCED PLAN (Budget: ₹3000)**

**SIP Portfolio (60% allocation - ₹1800)**
• **Axis Bluechip Fund:** ₹750
• **Parag Parikh Flexi Cap:** ₹750
• **ELSS Tax Saver:** ₹300 (Tax benefits)

**LIC Child Plan (40% allocation - ₹1200)**
• **LIC Kanyadan Policy:** Suitable for girls, guaranteed returns
• **LIC Jeevan Tarun:** Universal child plan option
• **Source:** licindia.in/insurance-plan

**Expected Maturity:** ₹1,170,000 - ₹1,638,000"
        ));
    }

    #[test]
    fn test_starter_child_plan_offers_two_options() {
        let request = child_request(10, 1500);
        let text = render_child_recommendation(&request, &recommend_for_child(&request));

        assert!(text.contains(
            "**🥉 STARTER PLAN (Budget: ₹1500)**

**Option 1: SIP Focus (70% allocation)**
• **Axis Bluechip Fund:** ₹600 (Low risk, steady growth)
• **Mirae Asset Emerging Bluechip:** ₹450 (Medium risk, higher returns)
• **Source:** axismf.com, miraeassetmf.co.in

**Option 2: LIC Child Plan (30% allocation)**
• **LIC Jeevan Tarun:** ₹450 monthly premium
• **Benefits:** Guaranteed maturity, life cover
• **Source:** licindia.in/insurance-plan

**Expected Maturity:** ₹316,800 - ₹403,200"
        ));
    }

    #[test]
    fn test_premium_child_plan_layout() {
        let request = child_request(2, 10000);
        let text = render_child_recommendation(&request, &recommend_for_child(&request));

        assert!(text.contains("**🥇 PREMIUM PLAN (Budget: ₹10000)**"));
        assert!(text.contains("**Diversified SIP Portfolio (70% allocation - ₹7000)**"));
        assert!(text.contains("• **International Fund:** ₹1000 (Diversification)"));
        assert!(text.contains(
            "**LIC Premium Plan (30% allocation - ₹3000)**
• **High premium LIC policy** with guaranteed additions
• **Life cover:** 10x annual premium minimum
• **Source:** licindia.in/insurance-plan"
        ));
    }

    #[test]
    fn test_financial_plan_rendering() {
        let profile = profile(80000.0, 45000.0);
        let text = render_financial_plan(&profile, &build_plan(&profile));

        assert!(text.contains("• Monthly Surplus: ₹35,000"));
        assert!(text.contains("• Risk Profile: Moderate"));
        assert!(text.contains("• Emergency Fund: 25% (₹8,750/month)"));
        assert!(text.contains("• Debt Funds: 35% (₹12,250/month)"));
        assert!(text.contains("• Equity: 40% (₹14,000/month)"));
        assert!(text.contains("• Annual Tax Saving Potential: ₹96,000"));
        assert!(text.contains("• Estimated Tax Savings: ₹29,760/year"));
        assert!(text.contains("₹47.0 Lakhs"));
    }

    #[test]
    fn test_tax_guidance_defaults_income() {
        let text = tax_guidance(&FinancialProfile::default());
        assert!(text.contains("• Annual Income: ₹600,000"));
        assert!(text.contains("• Current Tax Bracket: 20%"));
        assert!(text.contains("• Potential Tax Savings: ₹27,900/year"));
        assert!(text.contains("Share your income for exact tax-saving calculations!"));
    }

    #[test]
    fn test_tax_guidance_with_income() {
        let text = tax_guidance(&profile(80000.0, 45000.0));
        assert!(text.contains("Monthly ELSS SIP: ₹12,000"));
        assert!(text.contains("Annual Tax Savings: ₹28,800"));
    }

    #[test]
    fn test_investment_guidance() {
        let text = investment_guidance(&profile(80000.0, 45000.0));
        assert!(text.contains("• Target: ₹270,000"));
        assert!(text.contains("• Monthly allocation: ₹8,750"));
        assert!(text.contains("• Total Monthly SIP: ₹21,000"));
        assert!(text.contains("• Wealth in 10 years: ₹28.0 Lakhs"));
        assert!(text.contains("**Balanced Portfolio:**"));

        let empty = investment_guidance(&FinancialProfile::default());
        assert!(empty.contains("• Target: 6 months expenses"));
        assert!(empty.contains("Share your income for personalized SIP amounts!"));
    }

    #[test]
    fn test_scheme_guidance() {
        let text = scheme_guidance(&profile(80000.0, 45000.0));
        assert!(text.contains("• ELSS SIP: ₹8,000/month"));
        assert!(text.contains("• PPF: ₹6,400/month"));
        assert!(text.contains("• NPS: ₹4,000/month"));
        assert!(!scheme_guidance(&FinancialProfile::default()).contains("For your income"));
    }

    #[test]
    fn test_market_response_adds_sip_with_income() {
        let quote = MarketQuote {
            nifty: "21,456.78".to_string(),
            nifty_change: "+1.2%".to_string(),
            sensex: "70,892.45".to_string(),
            sensex_change: "+0.9%".to_string(),
            top_gainers: vec!["TCS (+2.1%)".to_string()],
            sentiment: Trend::Bullish,
            last_updated: Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap(),
        };

        let text = market_response(&quote, &profile(80000.0, 45000.0));
        assert!(text.contains("Live Market Update (08:00:00 UTC)"));
        assert!(text.contains("**Your Recommended Monthly SIP:** ₹14,000 across 3-4 funds"));
        assert!(!market_response(&quote, &FinancialProfile::default()).contains("Recommended Monthly SIP"));
    }

    #[test]
    fn test_fallback_menu_shows_profile_status() {
        assert!(fallback_menu(&profile(80000.0, 45000.0)).contains("Current surplus: ₹35,000/month"));
        assert!(fallback_menu(&FinancialProfile::default()).contains("Let's start by creating your financial profile"));
    }
}
