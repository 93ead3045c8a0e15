//! In-memory integration tests for the two-phase submit workflow.

use super::helpers::{Workflow, confirm, register, workflow};
use rstest::rstest;
use taskdesk::{
    directory::domain::UserId,
    form::domain::{FieldId, FormState},
    task::{domain::TaskStatus, ports::TaskStore},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_intake_flow_records_task_with_user_snapshot(
    workflow: Workflow,
) -> eyre::Result<()> {
    let Workflow {
        mut controller,
        store,
        now,
        ..
    } = workflow;

    confirm(&mut controller, "123").await?;
    eyre::ensure!(controller.state() == FormState::AwaitingTaskSubmission);
    eyre::ensure!(store.all()?.is_empty(), "lookup must not register a task");

    register(&mut controller, "Report", "inactive", "Q1 summary").await?;

    let stored = store.all()?;
    eyre::ensure!(stored.len() == 1, "expected one stored task");
    let record = stored
        .first()
        .ok_or_else(|| eyre::eyre!("missing stored task"))?
        .record();
    eyre::ensure!(record.user_id() == &UserId::from(1_u64));
    eyre::ensure!(record.document() == "123");
    eyre::ensure!(record.full_name() == "Ana Lopez");
    eyre::ensure!(record.title() == "Report");
    eyre::ensure!(record.description() == "Q1 summary");
    eyre::ensure!(record.status() == TaskStatus::Inactive);
    eyre::ensure!(record.created_at() == now);

    let card = controller
        .list()
        .newest()
        .ok_or_else(|| eyre::eyre!("missing card"))?;
    eyre::ensure!(card.initials() == "AL");
    eyre::ensure!(card.timestamp() == "June 2026", "got {}", card.timestamp());
    eyre::ensure!(card.status_label() == "Inactive");
    eyre::ensure!(card.status_class() == "inactive");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn switching_users_keeps_earlier_cards(workflow: Workflow) -> eyre::Result<()> {
    let Workflow {
        mut controller,
        directory,
        store,
        ..
    } = workflow;

    confirm(&mut controller, "123").await?;
    register(&mut controller, "First", "active", "from Ana").await?;

    controller.input(FieldId::Document, "456");
    eyre::ensure!(controller.state() == FormState::AwaitingDocument);
    confirm(&mut controller, "456").await?;
    eyre::ensure!(controller.view().value(FieldId::FullName) == "Carlos");
    register(&mut controller, "Second", "active", "from Carlos").await?;

    eyre::ensure!(directory.lookup_count()? == 2);
    eyre::ensure!(controller.list().count_label() == "2 Tasks");
    let names: Vec<&str> = controller
        .list()
        .cards()
        .map(|card| card.display_name())
        .collect();
    eyre::ensure!(names == ["Carlos", "Ana Lopez"], "got {names:?}");

    let carlos_tasks = store.list_for_user(&UserId::from("c-2")).await?;
    eyre::ensure!(carlos_tasks.len() == 1);
    let mine = controller.tasks_for_current_user().await?;
    eyre::ensure!(mine == carlos_tasks);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_lookup_leaves_task_entry_locked(workflow: Workflow) -> eyre::Result<()> {
    let Workflow { mut controller, .. } = workflow;

    controller.input(FieldId::Document, "999");
    let result = controller.submit().await;

    eyre::ensure!(result.is_err(), "unknown document must not confirm");
    eyre::ensure!(!controller.input(FieldId::TaskTitle, "Report"));
    eyre::ensure!(controller.view().value(FieldId::TaskTitle).is_empty());
    eyre::ensure!(controller.list().is_empty_state_visible());
    Ok(())
}
