//! When steps for task store BDD scenarios.

use super::world::{StoreWorld, new_task};
use rstest_bdd_macros::when;
use taskboard::task::domain::{CommandOutcome, TaskId, TaskPatch, TaskText};

#[when(r#"a task titled "{title}" described as "{text}" with priority "{priority}" is added"#)]
fn task_is_added(
    world: &mut StoreWorld,
    title: String,
    text: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let id = world.store.add(new_task(&title, &text, &priority)?);
    world.last_outcome = Some(CommandOutcome::Added(id));
    Ok(())
}

#[when(r#"the description of task "{id}" is changed to "{text}""#)]
fn description_is_changed(
    world: &mut StoreWorld,
    id: String,
    text: String,
) -> Result<(), eyre::Report> {
    let patch = TaskPatch::text(TaskText::new(text)?);
    world.last_outcome = Some(world.store.update(&TaskId::from_string(id), patch));
    Ok(())
}

#[when(r#"task "{id}" is marked completed"#)]
fn task_is_completed(world: &mut StoreWorld, id: String) {
    world.last_outcome = Some(
        world
            .store
            .update(&TaskId::from_string(id), TaskPatch::completed(true)),
    );
}

#[when(r#"task "{id}" is marked incomplete"#)]
fn task_is_reopened(world: &mut StoreWorld, id: String) {
    world.last_outcome = Some(
        world
            .store
            .update(&TaskId::from_string(id), TaskPatch::completed(false)),
    );
}

#[when(r#"task "{id}" is deleted"#)]
fn task_is_deleted(world: &mut StoreWorld, id: String) {
    world.last_outcome = Some(world.store.delete(&TaskId::from_string(id)));
}
