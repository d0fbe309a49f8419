//! Given steps for drag-reorder BDD scenarios.

use super::world::{ReorderWorld, call_named, run_async, split_titles};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use syncboard::list::domain::{Task, TaskId, TaskTitle};

#[given(r#"the remote store holds tasks "{titles}""#)]
fn remote_holds_tasks(world: &mut ReorderWorld, titles: String) -> Result<(), eyre::Report> {
    let mut seeded = Vec::new();
    for text in split_titles(&titles) {
        let title = TaskTitle::new(text).wrap_err("seed title for scenario")?;
        seeded.push(Task::new(TaskId::new(), title));
    }
    world.remote.preload(seeded);
    Ok(())
}

#[given("the local cache has been loaded")]
fn cache_loaded(world: &mut ReorderWorld) -> Result<(), eyre::Report> {
    run_async(world.controller.load()).wrap_err("load tasks in scenario setup")?;
    Ok(())
}

#[given(r#"the next "{operation}" call will fail"#)]
fn next_call_fails(world: &mut ReorderWorld, operation: String) -> Result<(), eyre::Report> {
    world.remote.fail_next(call_named(&operation)?);
    Ok(())
}
