//! FinSavvy Advisor
//!
//! A rule-based personal finance assistant for Indian retail investors:
//! - Explains SIP, mutual funds, LIC child plans and tax-saving schemes
//! - Routes free text to intents with fixed keyword priority
//! - Collects a financial profile and child-plan inputs over multi-turn dialogues
//! - Builds allocation plans, child plan rankings and a health score
//! - Tracks daily visit streaks and persists profiles per user
//!
//! TURN LOOP:
//! INPUT → ROUTE → (DIALOGUE STEP | ANSWER) → PERSIST → RESPOND

pub mod agent;
pub mod api;
pub mod classifier;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod format;
pub mod knowledge;
pub mod market;
pub mod memory;
pub mod models;
pub mod planner;
pub mod prompts;
pub mod state;
pub mod streak;

pub use error::{AdvisorError, Result};

// Re-export common types
pub use agent::Advisor;
pub use classifier::{Intent, IntentRouter};
pub use config::AdvisorConfig;
pub use models::*;
