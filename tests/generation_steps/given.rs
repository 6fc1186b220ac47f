//! Given steps for component generation BDD scenarios.

use super::world::{GenerationWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use vibecraft::generation::services::GenerateRequest;

#[given(r#"a generation request named "{name}""#)]
fn request_named(world: &mut GenerationWorld, name: String) {
    world.pending_request = Some(GenerateRequest::named(name));
}

#[given(r#"the request uses source "{source}" with animation "{animation}""#)]
fn request_uses_source_and_animation(
    world: &mut GenerationWorld,
    source: String,
    animation: String,
) -> Result<(), eyre::Report> {
    let request = world
        .pending_request
        .take()
        .ok_or_else(|| eyre::eyre!("missing pending request in scenario world"))?;
    world.pending_request = Some(
        request
            .with_source_type(source)
            .with_animation(animation),
    );
    Ok(())
}

#[given("{count:usize} components have been generated")]
fn components_already_generated(
    world: &mut GenerationWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    for index in 0..count {
        run_async(
            world
                .service
                .generate(GenerateRequest::named(format!("Scene {index}"))),
        )
        .wrap_err("generate seed component")?;
    }
    Ok(())
}
