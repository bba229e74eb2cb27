//! Unit tests for the task module.

mod domain_tests;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock pinned to 2024-03-01T09:30:00Z.
    pub(super) fn march_first() -> Self {
        Self(
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
                .single()
                .expect("valid fixed timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
