//! When steps for task intake form BDD scenarios.

use super::world::FormWorld;
use rstest_bdd_macros::when;
use taskdesk::form::domain::FieldId;

#[when(r#"the document "{document}" is submitted"#)]
fn document_submitted(world: &mut FormWorld, document: String) {
    world.controller.input(FieldId::Document, document);
    world.submit();
}

#[when(r#"the task "{title}" with status "{status}" and description "{description}" is submitted"#)]
fn task_submitted(
    world: &mut FormWorld,
    title: String,
    status: String,
    description: String,
) -> Result<(), eyre::Report> {
    for (field, value) in [
        (FieldId::TaskTitle, title),
        (FieldId::Status, status),
        (FieldId::Description, description),
    ] {
        if !world.controller.input(field, value) {
            return Err(eyre::eyre!("{field} is locked"));
        }
    }
    world.submit();
    Ok(())
}

#[when(r#"a blank task with status "{status}" is submitted"#)]
fn blank_task_submitted(world: &mut FormWorld, status: String) {
    world.controller.input(FieldId::Status, status);
    world.submit();
}

#[when(r#"the document field is changed to "{document}""#)]
fn document_changed(world: &mut FormWorld, document: String) {
    world.controller.input(FieldId::Document, document);
}
