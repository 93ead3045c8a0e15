//! Given steps for task intake form BDD scenarios.

use super::world::FormWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::{directory::domain::User, form::domain::FieldId};

#[given(r#"a directory user "{name}" with document "{document}""#)]
fn directory_user(world: &mut FormWorld, name: String, document: String) -> Result<(), eyre::Report> {
    let id = world.next_user_id;
    world.next_user_id += 1;
    world
        .directory
        .insert(User::new(id, document, name))
        .wrap_err("seed directory user")?;
    Ok(())
}

#[given(r#"the user with document "{document}" has been confirmed"#)]
fn user_confirmed(world: &mut FormWorld, document: String) -> Result<(), eyre::Report> {
    world.controller.input(FieldId::Document, document);
    world.submit();
    match world.last_submit.take() {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("lookup did not confirm the user: {err}")),
        None => Err(eyre::eyre!("submit produced no result")),
    }
}
