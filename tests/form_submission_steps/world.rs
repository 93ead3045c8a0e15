//! Shared world state for task intake form BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdesk::{
    directory::adapters::memory::InMemoryUserDirectory,
    form::services::{FormController, FormResult, SubmitOutcome},
    task::adapters::memory::InMemoryTaskStore,
};

/// Controller type used by the BDD world.
pub type TestController = FormController<InMemoryUserDirectory, InMemoryTaskStore, DefaultClock>;

/// Scenario world for task intake behaviour tests.
pub struct FormWorld {
    pub controller: TestController,
    pub directory: Arc<InMemoryUserDirectory>,
    pub store: Arc<InMemoryTaskStore>,
    pub next_user_id: u64,
    pub last_submit: Option<FormResult<SubmitOutcome>>,
}

impl FormWorld {
    /// Creates a world over an empty directory and store.
    #[must_use]
    pub fn new() -> Self {
        let directory = Arc::new(InMemoryUserDirectory::new());
        let store = Arc::new(InMemoryTaskStore::new());
        let controller = FormController::new(
            Arc::clone(&directory),
            Arc::clone(&store),
            Arc::new(DefaultClock),
        );

        Self {
            controller,
            directory,
            store,
            next_user_id: 1,
            last_submit: None,
        }
    }

    /// Submits the form and records the result.
    pub fn submit(&mut self) {
        let result = run_async(self.controller.submit());
        self.last_submit = Some(result);
    }
}

impl Default for FormWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FormWorld {
    FormWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
