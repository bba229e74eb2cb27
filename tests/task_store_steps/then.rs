//! Then steps for task store BDD scenarios.

use super::world::StoreWorld;
use rstest_bdd_macros::then;
use taskboard::task::domain::{Task, TaskId};

fn task(world: &StoreWorld, id: &str) -> Result<Task, eyre::Report> {
    world
        .store
        .get(&TaskId::from_string(id))
        .ok_or_else(|| eyre::eyre!("task {id} is not in the store"))
}

#[then("the store lists {count:usize} tasks")]
fn store_lists(world: &StoreWorld, count: usize) -> Result<(), eyre::Report> {
    let len = world.store.len();
    eyre::ensure!(len == count, "expected {count} tasks, found {len}");
    Ok(())
}

#[then(r#"task "{id}" has title "{title}""#)]
fn task_has_title(world: &StoreWorld, id: String, title: String) -> Result<(), eyre::Report> {
    let found = task(world, &id)?;
    eyre::ensure!(
        found.title().as_str() == title,
        "expected title {title:?}, found {:?}",
        found.title().as_str()
    );
    Ok(())
}

#[then(r#"task "{id}" has description "{text}""#)]
fn task_has_description(world: &StoreWorld, id: String, text: String) -> Result<(), eyre::Report> {
    let found = task(world, &id)?;
    eyre::ensure!(
        found.text().as_str() == text,
        "expected description {text:?}, found {:?}",
        found.text().as_str()
    );
    Ok(())
}

#[then(r#"task "{id}" is not completed"#)]
fn task_is_not_completed(world: &StoreWorld, id: String) -> Result<(), eyre::Report> {
    eyre::ensure!(!task(world, &id)?.is_completed(), "task {id} is completed");
    Ok(())
}

#[then(r#"the first task is "{id}""#)]
fn first_task_is(world: &StoreWorld, id: String) -> Result<(), eyre::Report> {
    let snapshot = world.store.snapshot();
    let first = snapshot
        .iter()
        .next()
        .ok_or_else(|| eyre::eyre!("store is empty"))?;
    eyre::ensure!(first.id().as_str() == id, "first task is {}", first.id());
    Ok(())
}

#[then("the command is ignored")]
fn command_is_ignored(world: &StoreWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no command has run"))?;
    eyre::ensure!(!outcome.is_applied(), "expected ignored, got {outcome:?}");
    Ok(())
}
