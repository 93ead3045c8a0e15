//! Shared test helpers for in-memory workflow integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskdesk::{
    directory::{adapters::memory::InMemoryUserDirectory, domain::User},
    form::{
        domain::FieldId,
        services::{CardFormat, FormController, TaskCardFactory},
    },
    task::adapters::memory::InMemoryTaskStore,
};

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Controller type wired to in-memory adapters.
pub type MemoryController = FormController<InMemoryUserDirectory, InMemoryTaskStore, FixedClock>;

/// Controller together with handles on its adapters.
pub struct Workflow {
    pub controller: MemoryController,
    pub directory: Arc<InMemoryUserDirectory>,
    pub store: Arc<InMemoryTaskStore>,
    pub now: DateTime<Utc>,
}

/// Instant every task in these tests is created at.
#[must_use]
pub fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Provides a workflow over a directory of two users.
///
/// Cards show month and year only so the assertions hold in any local zone.
#[fixture]
pub fn workflow() -> Workflow {
    let now = noon();
    let directory = Arc::new(InMemoryUserDirectory::with_users([
        User::new(1_u64, "123", "Ana Lopez"),
        User::new("c-2", "456", "Carlos"),
    ]));
    let store = Arc::new(InMemoryTaskStore::new());
    let format = CardFormat::new("%B %Y").expect("valid card format");
    let controller = FormController::new(
        Arc::clone(&directory),
        Arc::clone(&store),
        Arc::new(FixedClock(now)),
    )
    .with_card_factory(TaskCardFactory::with_format(format));
    Workflow {
        controller,
        directory,
        store,
        now,
    }
}

/// Confirms the user holding `document`.
///
/// # Errors
///
/// Returns an error if the lookup submit fails.
pub async fn confirm(controller: &mut MemoryController, document: &str) -> eyre::Result<()> {
    controller.input(FieldId::Document, document);
    controller.submit().await?;
    Ok(())
}

/// Fills in the task fields and submits them.
///
/// # Errors
///
/// Returns an error if the registration submit fails.
pub async fn register(
    controller: &mut MemoryController,
    title: &str,
    status: &str,
    description: &str,
) -> eyre::Result<()> {
    controller.input(FieldId::TaskTitle, title);
    controller.input(FieldId::Status, status);
    controller.input(FieldId::Description, description);
    controller.submit().await?;
    Ok(())
}
