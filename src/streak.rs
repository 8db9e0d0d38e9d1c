//! Daily engagement streak
//!
//! A visit counts toward the streak once at least 23 hours have passed since
//! the previous counted visit. Missing the 48 hour window resets it.

use chrono::{DateTime, Utc};

use crate::models::UserStreak;

const MIN_HOURS_BETWEEN_VISITS: f64 = 23.0;
const STREAK_WINDOW_HOURS: f64 = 48.0;

fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 3_600_000.0
}

/// Apply one visit at `now` to the previous streak state.
pub fn update_streak(previous: &UserStreak, now: DateTime<Utc>) -> UserStreak {
    let hours = hours_between(previous.last_visit, now);

    if hours < MIN_HOURS_BETWEEN_VISITS {
        return *previous;
    }

    if hours < STREAK_WINDOW_HOURS {
        let current_streak = previous.current_streak + 1;
        UserStreak {
            last_visit: now,
            current_streak,
            longest_streak: previous.longest_streak.max(current_streak),
        }
    } else {
        UserStreak {
            last_visit: now,
            current_streak: 1,
            longest_streak: previous.longest_streak,
        }
    }
}

/// Whether the streak survives a visit at `now`.
pub fn is_active(streak: &UserStreak, now: DateTime<Utc>) -> bool {
    hours_between(streak.last_visit, now) < STREAK_WINDOW_HOURS
}
