//! When steps for component generation BDD scenarios.

use super::world::{GenerationWorld, run_async};
use rstest_bdd_macros::when;

#[when("the component is generated")]
fn generate_component(world: &mut GenerationWorld) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;
    world.last_generate_result = Some(run_async(world.service.generate(request)));
    Ok(())
}

#[when("the history is requested with limit {limit:usize}")]
fn request_history(world: &mut GenerationWorld, limit: usize) {
    world.last_list_result = Some(run_async(world.service.list(Some(limit))));
}
