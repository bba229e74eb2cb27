//! Shared world state for task store BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskboard::task::{
    adapters::SequentialTaskIdGenerator,
    domain::{CommandOutcome, NewTask, Priority, TaskText, TaskTitle},
    services::TaskStore,
};

/// Clock pinned to the scenario start time.
pub struct ScenarioClock(DateTime<Utc>);

impl Clock for ScenarioClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Store type used by the BDD world.
pub type TestStore = TaskStore<SequentialTaskIdGenerator, ScenarioClock>;

/// Scenario world for task store behaviour tests.
pub struct StoreWorld {
    pub store: TestStore,
    pub last_outcome: Option<CommandOutcome>,
}

impl StoreWorld {
    /// Creates a world around an empty store issuing `T1`, `T2`, … ids.
    #[must_use]
    pub fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
            .single()
            .unwrap_or_else(Utc::now);
        let store = TaskStore::new(
            Arc::new(SequentialTaskIdGenerator::with_prefix("T")),
            Arc::new(ScenarioClock(start)),
        );
        Self {
            store,
            last_outcome: None,
        }
    }
}

impl Default for StoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StoreWorld {
    StoreWorld::default()
}

/// Builds an add payload from step captures.
pub fn new_task(title: &str, text: &str, priority: &str) -> Result<NewTask, eyre::Report> {
    Ok(NewTask::new(
        TaskTitle::new(title)?,
        TaskText::new(text)?,
        Priority::try_from(priority)?,
    ))
}
