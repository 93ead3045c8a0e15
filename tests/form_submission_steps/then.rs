//! Then steps for task intake form BDD scenarios.

use super::world::FormWorld;
use rstest_bdd_macros::then;
use taskdesk::form::domain::{FieldId, FormState};

fn expect_state(world: &FormWorld, expected: FormState) -> Result<(), eyre::Report> {
    let state = world.controller.state();
    if state != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {state:?}"));
    }
    Ok(())
}

fn expect_task_fields_enabled(world: &FormWorld, enabled: bool) -> Result<(), eyre::Report> {
    for field in FieldId::TASK_FIELDS {
        if world.controller.view().is_enabled(field) != enabled {
            return Err(eyre::eyre!("{field} enabled state is not {enabled}"));
        }
    }
    Ok(())
}

#[then(r#"the document field shows "{message}""#)]
fn document_error_shown(world: &FormWorld, message: String) -> Result<(), eyre::Report> {
    let shown = world
        .controller
        .view()
        .error(FieldId::Document)
        .map(ToString::to_string)
        .ok_or_else(|| eyre::eyre!("document field has no error"))?;
    if shown != message {
        return Err(eyre::eyre!("expected '{message}', found '{shown}'"));
    }
    Ok(())
}

#[then(r#"the full name field shows "{name}""#)]
fn full_name_shown(world: &FormWorld, name: String) -> Result<(), eyre::Report> {
    let shown = world.controller.view().value(FieldId::FullName);
    if shown != name {
        return Err(eyre::eyre!("expected full name '{name}', found '{shown}'"));
    }
    Ok(())
}

#[then("the full name field is blank")]
fn full_name_blank(world: &FormWorld) -> Result<(), eyre::Report> {
    let shown = world.controller.view().value(FieldId::FullName);
    if !shown.is_empty() {
        return Err(eyre::eyre!("expected a blank full name, found '{shown}'"));
    }
    Ok(())
}

#[then("the form is awaiting a document")]
fn awaiting_document(world: &FormWorld) -> Result<(), eyre::Report> {
    expect_state(world, FormState::AwaitingDocument)
}

#[then("the form is awaiting task submission")]
fn awaiting_task_submission(world: &FormWorld) -> Result<(), eyre::Report> {
    expect_state(world, FormState::AwaitingTaskSubmission)
}

#[then("the task fields are locked")]
fn task_fields_locked(world: &FormWorld) -> Result<(), eyre::Report> {
    expect_task_fields_enabled(world, false)
}

#[then("the task fields are unlocked")]
fn task_fields_unlocked(world: &FormWorld) -> Result<(), eyre::Report> {
    expect_task_fields_enabled(world, true)
}

#[then("the number of stored tasks is {count:u64}")]
fn stored_task_count(world: &FormWorld, count: u64) -> Result<(), eyre::Report> {
    let stored = u64::try_from(world.store.all()?.len())?;
    if stored != count {
        return Err(eyre::eyre!("expected {count} stored tasks, found {stored}"));
    }
    Ok(())
}

#[then(r#"the task counter reads "{label}""#)]
fn counter_reads(world: &FormWorld, label: String) -> Result<(), eyre::Report> {
    let shown = world.controller.list().count_label();
    if shown != label {
        return Err(eyre::eyre!("expected counter '{label}', found '{shown}'"));
    }
    Ok(())
}

#[then(r#"the newest card shows initials "{initials}" and status "{status}""#)]
fn newest_card(world: &FormWorld, initials: String, status: String) -> Result<(), eyre::Report> {
    let card = world
        .controller
        .list()
        .newest()
        .ok_or_else(|| eyre::eyre!("task list is empty"))?;
    if card.initials() != initials || card.status_label() != status {
        return Err(eyre::eyre!(
            "unexpected card {} / {}",
            card.initials(),
            card.status_label()
        ));
    }
    Ok(())
}

#[then("the task title and description are cleared")]
fn task_text_cleared(world: &FormWorld) -> Result<(), eyre::Report> {
    let view = world.controller.view();
    if !view.value(FieldId::TaskTitle).is_empty() || !view.value(FieldId::Description).is_empty() {
        return Err(eyre::eyre!("task text fields were not reset"));
    }
    Ok(())
}

#[then("no directory lookup was made")]
fn no_lookup(world: &FormWorld) -> Result<(), eyre::Report> {
    let lookups = world.directory.lookup_count()?;
    if lookups != 0 {
        return Err(eyre::eyre!("expected no lookups, found {lookups}"));
    }
    Ok(())
}

#[then("the task title, status and description fields show errors")]
fn task_field_errors(world: &FormWorld) -> Result<(), eyre::Report> {
    let view = world.controller.view();
    for field in FieldId::TASK_FIELDS {
        if view.error(field).is_none() {
            return Err(eyre::eyre!("{field} has no error"));
        }
    }
    Ok(())
}
