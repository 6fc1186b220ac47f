//! Then steps for component generation BDD scenarios.

use super::world::{GenerationWorld, run_async};
use rstest_bdd_macros::then;
use vibecraft::generation::services::GenerationServiceError;

#[then(r#"the generated code exports a function named "{function}""#)]
fn code_exports_function(world: &GenerationWorld, function: String) -> Result<(), eyre::Report> {
    let record = world.generated()?;
    let signature = format!("export default function {function}()");
    eyre::ensure!(
        record.code().contains(&signature),
        "expected `{signature}` in generated code"
    );
    Ok(())
}

#[then("the generation appears first in the history")]
fn generation_listed_first(world: &GenerationWorld) -> Result<(), eyre::Report> {
    let record = world.generated()?;
    let listed = run_async(world.service.list(None))
        .map_err(|err| eyre::eyre!("listing failed: {err}"))?;
    let newest = listed
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one listed generation"))?;

    eyre::ensure!(record.id().is_some(), "generation should have been recorded");
    eyre::ensure!(newest == record, "newest listed generation does not match");
    Ok(())
}

#[then("generation fails with a validation error")]
fn generation_fails_validation(world: &GenerationWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_generate_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing generate result in scenario world"))?;
    eyre::ensure!(
        matches!(result, Err(GenerationServiceError::Validation(_))),
        "expected validation error, got {result:?}"
    );
    Ok(())
}

#[then("the history is empty")]
fn history_is_empty(world: &GenerationWorld) -> Result<(), eyre::Report> {
    let stored = world
        .repository
        .len()
        .map_err(|err| eyre::eyre!("store inspection failed: {err}"))?;
    eyre::ensure!(stored == 0, "expected empty history, found {stored} records");
    Ok(())
}

#[then(r#"the generated code imports "{module}""#)]
fn code_imports_module(world: &GenerationWorld, module: String) -> Result<(), eyre::Report> {
    let record = world.generated()?;
    let import = format!("from '{module}';");
    eyre::ensure!(
        record.code().contains(&import),
        "expected an import from '{module}'"
    );
    Ok(())
}

#[then("the generated code does not import Spline")]
fn code_omits_spline(world: &GenerationWorld) -> Result<(), eyre::Report> {
    let record = world.generated()?;
    eyre::ensure!(
        !record.code().contains("@splinetool/react-spline"),
        "unexpected Spline import in generated code"
    );
    Ok(())
}

#[then("{count:usize} generations are listed")]
fn generations_listed(world: &GenerationWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = world
        .last_list_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing list result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected listing failure: {err}"))?;
    eyre::ensure!(
        listed.len() == count,
        "expected {count} generations, found {}",
        listed.len()
    );
    Ok(())
}
