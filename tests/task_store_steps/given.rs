//! Given steps for task store BDD scenarios.

use super::world::{StoreWorld, new_task};
use rstest_bdd_macros::given;

#[given("an empty task store")]
fn empty_task_store(world: &StoreWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.store.is_empty(), "expected a fresh store");
    Ok(())
}

#[given(r#"a task titled "{title}" described as "{text}" with priority "{priority}" has been added"#)]
fn task_has_been_added(
    world: &mut StoreWorld,
    title: String,
    text: String,
    priority: String,
) -> Result<(), eyre::Report> {
    world.store.add(new_task(&title, &text, &priority)?);
    Ok(())
}
