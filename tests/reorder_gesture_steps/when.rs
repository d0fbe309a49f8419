//! When steps for drag-reorder BDD scenarios.

use super::world::{ReorderWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the row "{title}" starts dragging"#)]
fn row_starts_dragging(world: &mut ReorderWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    world.engine.drag_start(id);
    Ok(())
}

#[when(r#"the drag crosses the row "{title}""#)]
fn drag_crosses_row(world: &mut ReorderWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    world.engine.drag_enter(id);
    Ok(())
}

#[when("the drag is dropped")]
fn drag_is_dropped(world: &mut ReorderWorld) {
    world.last_drop = Some(run_async(world.engine.drag_end()));
}
