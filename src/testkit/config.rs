//! Canonical test schedules.
//!
//! Single source of truth for the schedule used across tests: yearly on
//! January 1st, monthly on the 1st, weekly on Sundays. Tests that need
//! different trigger days build their own `Schedule` inline.

use chrono::{Month, Weekday};

use crate::domain::{RetentionRule, Schedule, Trigger};

/// Schedule with the canonical trigger days and the given retention
/// counts.
#[must_use]
pub fn schedule(yearly: u32, monthly: u32, weekly: u32) -> Schedule {
    Schedule {
        yearly: RetentionRule {
            retention: yearly,
            trigger: Trigger::Yearly {
                month: Month::January,
                day: 1,
            },
        },
        monthly: RetentionRule {
            retention: monthly,
            trigger: Trigger::Monthly { day: 1 },
        },
        weekly: RetentionRule {
            retention: weekly,
            trigger: Trigger::Weekly {
                weekday: Weekday::Sun,
            },
        },
    }
}
