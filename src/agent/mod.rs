//! Advisor engine - one turn at a time
//!
//! MESSAGE → ROUTE → HANDLE (fall through on missing quotes) → COMMIT → RESPOND
//!
//! Each user has an in-memory session holding both dialogues and the
//! transcript. Turns for the same user are serialized on the session lock, so a
//! turn always sees the state left by the previous one. Sessions idle past the
//! TTL are dropped on the next lookup; the user then starts fresh.

use crate::classifier::{Intent, IntentRouter, RouteContext};
use crate::dialogue::{Dialogue, ProfileAnswers, ProfileStep, RecommendationStep, StepOutcome};
use crate::error::AdvisorError;
use crate::knowledge;
use crate::market::{MarketDataSource, MarketSnapshot, QuoteTopic};
use crate::memory::{Message, Transcript};
use crate::models::{FinancialProfile, TurnResponse, UserStreak};
use crate::planner::{self, ProfileOverview};
use crate::prompts;
use crate::state::AdvisorStore;
use crate::streak;
use crate::Result;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Per-user conversational state
#[derive(Debug, Default)]
struct Session {
    profile: Dialogue<ProfileStep>,
    recommendation: Dialogue<RecommendationStep>,
    transcript: Transcript,
    /// The streak is applied once per session.
    streak_checked: bool,
}

impl Session {
    fn collecting(&self) -> bool {
        self.profile.is_active() || self.recommendation.is_active()
    }
}

/// Merge the collected slots onto the stored profile, keeping everything the
/// dialogue does not ask about.
fn apply_answers(base: FinancialProfile, answers: ProfileAnswers) -> FinancialProfile {
    FinancialProfile {
        monthly_income: answers.monthly_income,
        monthly_expenses: answers.monthly_expenses,
        financial_goals: answers.financial_goals,
        risk_tolerance: answers.risk_tolerance,
        ..base
    }
}

const DEFAULT_SESSION_TTL_MINUTES: i64 = 30;

struct SessionEntry {
    session: Arc<Mutex<Session>>,
    last_seen: DateTime<Utc>,
}

/// The dialogue engine
pub struct Advisor {
    router: IntentRouter,
    store: Arc<dyn AdvisorStore>,
    market: Arc<dyn MarketDataSource>,
    sessions: Mutex<HashMap<String, SessionEntry>>,
    session_ttl: Duration,
}

impl Advisor {
    pub fn new(store: Arc<dyn AdvisorStore>, market: Arc<dyn MarketDataSource>) -> Self {
        Self {
            router: IntentRouter::new(),
            store,
            market,
            sessions: Mutex::new(HashMap::new()),
            session_ttl: Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    /// Fetch or create the user's session, dropping idle ones first. A session
    /// with a turn in flight is never dropped.
    async fn session(&self, user_id: &str, now: DateTime<Utc>) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock().await;

        let before = sessions.len();
        let ttl = self.session_ttl;
        sessions.retain(|_, entry| now - entry.last_seen <= ttl || Arc::strong_count(&entry.session) > 1);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "Idle sessions dropped");
        }

        let entry = sessions
            .entry(user_id.to_string())
            .or_insert_with(|| SessionEntry {
                session: Arc::new(Mutex::new(Session::default())),
                last_seen: now,
            });
        entry.last_seen = entry.last_seen.max(now);
        entry.session.clone()
    }

    /// Forget the user's in-memory session. Stored profile and streak are kept.
    pub async fn end_session(&self, user_id: &str) -> bool {
        let ended = self.sessions.lock().await.remove(user_id).is_some();
        if ended {
            info!(user_id = %user_id, "Session ended");
        }
        ended
    }

    async fn load_profile(&self, user_id: &str) -> Result<FinancialProfile> {
        Ok(self.store.load_profile(user_id).await?.unwrap_or_default())
    }

    /// Open (or reopen) a session and greet the user.
    ///
    /// The first call per session applies today's visit to the stored streak.
    pub async fn start_session(&self, user_id: &str, now: DateTime<Utc>) -> Result<TurnResponse> {
        let session = self.session(user_id, now).await;
        let mut session = session.lock().await;

        let streak = if session.streak_checked {
            self.store
                .load_streak(user_id)
                .await?
                .unwrap_or_else(|| UserStreak::first_visit(now))
        } else {
            let streak = self.visit(user_id, now).await?;
            session.streak_checked = true;
            streak
        };

        info!(
            user_id = %user_id,
            current_streak = streak.current_streak,
            longest_streak = streak.longest_streak,
            "Session started"
        );

        let response_text = prompts::welcome(&streak);
        let suggested_replies = prompts::suggestions(prompts::WELCOME_SUGGESTIONS);

        session.transcript.push(Message::assistant(
            response_text.clone(),
            suggested_replies.clone(),
            now,
        ));

        Ok(TurnResponse {
            response_text,
            suggested_replies,
            intent: None,
        })
    }

    async fn visit(&self, user_id: &str, now: DateTime<Utc>) -> Result<UserStreak> {
        match self.store.load_streak(user_id).await? {
            Some(previous) => {
                let updated = streak::update_streak(&previous, now);
                if updated != previous {
                    self.store.save_streak(user_id, &updated).await?;
                }
                Ok(updated)
            }
            None => {
                let first = UserStreak::first_visit(now);
                self.store.save_streak(user_id, &first).await?;
                Ok(first)
            }
        }
    }

    /// Process one inbound message.
    ///
    /// Nothing is committed when an error is returned: dialogue state and the
    /// transcript are left as they were before the turn.
    pub async fn process_turn(&self, user_id: &str, raw_text: &str, now: DateTime<Utc>) -> Result<TurnResponse> {
        if raw_text.trim().is_empty() {
            return Err(AdvisorError::EmptyMessage);
        }

        let session = self.session(user_id, now).await;
        let mut session = session.lock().await;

        let profile = self.load_profile(user_id).await?;
        let ctx = RouteContext {
            recommendation_active: session.recommendation.is_active(),
            profile_active: session.profile.is_active(),
            income_recorded: profile.has_income(),
        };

        let candidates = self.router.candidates(raw_text, &ctx);
        debug!(user_id = %user_id, candidates = ?candidates, "Routed message");

        let mut answered = None;
        for intent in candidates {
            if let Some(text) = self
                .handle(intent, &mut session, user_id, raw_text, &profile)
                .await?
            {
                answered = Some((intent, text));
                break;
            }
            debug!(user_id = %user_id, intent = %intent, "Handler declined, falling through");
        }

        let (intent, response_text) =
            answered.unwrap_or_else(|| (Intent::FallbackMenu, prompts::fallback_menu(&profile)));
        if intent.starts_dialogue() {
            info!(user_id = %user_id, intent = %intent, "Dialogue started");
        }

        let suggested_replies = if session.collecting() {
            prompts::suggestions(prompts::COLLECTING_SUGGESTIONS)
        } else {
            prompts::suggestions(prompts::DEFAULT_SUGGESTIONS)
        };

        session.transcript.push(Message::user(raw_text, now));
        session.transcript.push(Message::assistant(
            response_text.clone(),
            suggested_replies.clone(),
            now,
        ));

        info!(
            user_id = %user_id,
            intent = %intent,
            collecting = session.collecting(),
            messages = session.transcript.len(),
            "Turn processed"
        );

        Ok(TurnResponse {
            response_text,
            suggested_replies,
            intent: Some(intent),
        })
    }

    /// Run the handler for one intent. `None` means the handler has nothing to
    /// say and the next candidate should be tried.
    async fn handle(
        &self,
        intent: Intent,
        session: &mut Session,
        user_id: &str,
        message: &str,
        profile: &FinancialProfile,
    ) -> Result<Option<String>> {
        let text = match intent {
            Intent::ContinueRecommendationDialogue => self.continue_recommendation(session, message),
            Intent::ContinueProfileDialogue => self.continue_profile(session, user_id, message, profile).await?,

            Intent::ExplainConcept => knowledge::explain_concept(message).to_string(),

            Intent::StartRecommendationDialogue => {
                session.recommendation.start();
                prompts::RECOMMENDATION_START.to_string()
            }
            Intent::StartProfileDialogue => {
                session.profile.start();
                prompts::PROFILE_START.to_string()
            }

            Intent::GoldRateQuery => match self.market.fetch_quote(QuoteTopic::Gold).await {
                Some(MarketSnapshot::Gold(gold)) => prompts::gold_response(&gold),
                _ => return Ok(None),
            },
            Intent::FundPerformanceQuery => match self.market.fetch_quote(QuoteTopic::Funds).await {
                Some(MarketSnapshot::Funds(funds)) => prompts::funds_response(&funds),
                _ => return Ok(None),
            },
            Intent::MarketQuery => match self.market.fetch_quote(QuoteTopic::Market).await {
                Some(MarketSnapshot::Market(market)) => prompts::market_response(&market, profile),
                _ => return Ok(None),
            },

            Intent::TaxGuidance => prompts::tax_guidance(profile),
            Intent::InvestmentGuidance => prompts::investment_guidance(profile),
            Intent::SchemeGuidance => prompts::scheme_guidance(profile),
            Intent::FallbackMenu => prompts::fallback_menu(profile),
        };

        Ok(Some(text))
    }

    fn continue_recommendation(&self, session: &mut Session, message: &str) -> String {
        let step = session.recommendation.current_step();

        match session.recommendation.handle(message) {
            Some(StepOutcome::Reprompt(text)) => {
                debug!(step = ?step, "Recommendation step re-prompted");
                text
            }
            Some(StepOutcome::Advance { response, next, collected }) => {
                session.recommendation.advance(next, collected);
                response
            }
            Some(StepOutcome::Complete(request)) => {
                let recommendation = planner::recommend_for_child(&request);
                let text = prompts::render_child_recommendation(&request, &recommendation);
                session.recommendation.reset();
                info!(
                    tier = ?recommendation.tier,
                    years_to_maturity = recommendation.years_to_maturity,
                    "Child recommendation generated"
                );
                text
            }
            None => prompts::RECOMMENDATION_START.to_string(),
        }
    }

    async fn continue_profile(
        &self,
        session: &mut Session,
        user_id: &str,
        message: &str,
        stored: &FinancialProfile,
    ) -> Result<String> {
        let step = session.profile.current_step();

        let text = match session.profile.handle(message) {
            Some(StepOutcome::Reprompt(text)) => {
                debug!(user_id = %user_id, step = ?step, "Profile step re-prompted");
                text
            }
            Some(StepOutcome::Advance { response, next, collected }) => {
                session.profile.advance(next, collected);
                response
            }
            Some(StepOutcome::Complete(answers)) => {
                let profile = apply_answers(stored.clone(), answers);

                // Save first: a failed write leaves the dialogue at its last step.
                self.store.save_profile(user_id, &profile).await?;

                let plan = planner::build_plan(&profile);
                let text = prompts::render_financial_plan(&profile, &plan);
                session.profile.reset();

                info!(
                    user_id = %user_id,
                    risk = %profile.risk_tolerance,
                    surplus = profile.surplus(),
                    "Financial profile saved"
                );
                text
            }
            None => prompts::PROFILE_START.to_string(),
        };

        Ok(text)
    }

    /// Health score and streak summary for the profile panel.
    pub async fn profile_overview(&self, user_id: &str, now: DateTime<Utc>) -> Result<ProfileOverview> {
        let profile = self.load_profile(user_id).await?;
        let streak = self
            .store
            .load_streak(user_id)
            .await?
            .unwrap_or_else(|| UserStreak::first_visit(now));

        Ok(planner::profile_overview(&profile, &streak, now))
    }

    /// Everything said in the user's current session, oldest first.
    pub async fn transcript(&self, user_id: &str) -> Vec<Message> {
        let session = {
            let sessions = self.sessions.lock().await;
            sessions.get(user_id).map(|entry| entry.session.clone())
        };

        match session {
            Some(session) => session.lock().await.transcript.to_vec(),
            None => Vec::new(),
        }
    }
}
