//! Slot-filling dialogues
//!
//! Each dialogue is a linear step enum plus a partial-record accumulator.
//! A step handler is pure: it inspects one message and the slots collected so
//! far and says whether to re-prompt, advance, or finish. The caller commits
//! the outcome, so a turn that fails later leaves the dialogue untouched.
//!
//! There is no retry cap. A step re-prompts for as long as its input is invalid.

pub mod extract;
pub mod profile;
pub mod recommendation;

pub use profile::{ProfileAnswers, ProfileDraft, ProfileStep};
pub use recommendation::{RecommendationDraft, RecommendationStep};

use std::fmt::Debug;

/// One step of a linear dialogue.
pub trait DialogueStep: Copy + Eq + Debug {
    /// Slots collected so far.
    type Draft: Default + Clone + Debug;
    /// Complete slot set handed to the generator on the final step.
    type Output;

    const FIRST: Self;

    fn handle(self, input: &str, draft: &Self::Draft) -> StepOutcome<Self, Self::Draft, Self::Output>;
}

/// Result of handling one message at one step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome<S, D, O> {
    /// Input failed validation; nothing changes.
    Reprompt(String),
    /// Slot accepted; move to `next` with the updated draft.
    Advance { response: String, next: S, collected: D },
    /// Last slot accepted; the dialogue is ready to finish.
    Complete(O),
}

/// Runtime state of one dialogue instance.
#[derive(Debug, Clone)]
pub struct Dialogue<S: DialogueStep> {
    current: Option<S>,
    collected: S::Draft,
}

impl<S: DialogueStep> Default for Dialogue<S> {
    fn default() -> Self {
        Self {
            current: None,
            collected: S::Draft::default(),
        }
    }
}

impl<S: DialogueStep> Dialogue<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_step(&self) -> Option<S> {
        self.current
    }

    pub fn collected(&self) -> &S::Draft {
        &self.collected
    }

    /// Arm the dialogue at its first step with nothing collected.
    pub fn start(&mut self) {
        self.current = Some(S::FIRST);
        self.collected = S::Draft::default();
    }

    /// Evaluate `input` against the current step. `None` when idle.
    pub fn handle(&self, input: &str) -> Option<StepOutcome<S, S::Draft, S::Output>> {
        self.current.map(|step| step.handle(input, &self.collected))
    }

    /// Commit an accepted slot.
    pub fn advance(&mut self, next: S, collected: S::Draft) {
        self.current = Some(next);
        self.collected = collected;
    }

    /// Back to idle; collected slots are discarded.
    pub fn reset(&mut self) {
        self.current = None;
        self.collected = S::Draft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut dialogue: Dialogue<RecommendationStep> = Dialogue::new();
        assert!(!dialogue.is_active());
        assert!(dialogue.handle("5").is_none());

        dialogue.start();
        assert_eq!(dialogue.current_step(), Some(RecommendationStep::ChildAge));

        match dialogue.handle("he is 5") {
            Some(StepOutcome::Advance { next, collected, .. }) => dialogue.advance(next, collected),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(dialogue.current_step(), Some(RecommendationStep::Budget));
        assert_eq!(dialogue.collected().child_age, Some(5));

        dialogue.reset();
        assert!(!dialogue.is_active());
        assert_eq!(dialogue.collected().child_age, None);
    }

    #[test]
    fn test_handle_does_not_mutate() {
        let mut dialogue: Dialogue<ProfileStep> = Dialogue::new();
        dialogue.start();

        let _ = dialogue.handle("80000");
        assert_eq!(dialogue.current_step(), Some(ProfileStep::Income));
        assert_eq!(dialogue.collected().monthly_income, None);
    }

    #[test]
    fn test_restart_clears_previous_slots() {
        let mut dialogue: Dialogue<ProfileStep> = Dialogue::new();
        dialogue.start();
        if let Some(StepOutcome::Advance { next, collected, .. }) = dialogue.handle("50000") {
            dialogue.advance(next, collected);
        }
        assert_eq!(dialogue.collected().monthly_income, Some(50000.0));

        dialogue.start();
        assert_eq!(dialogue.current_step(), Some(ProfileStep::Income));
        assert_eq!(dialogue.collected().monthly_income, None);
    }
}
