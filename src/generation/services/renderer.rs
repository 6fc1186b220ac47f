//! Template renderer mapping a generation request to React component source.

use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};
use thiserror::Error;

use crate::generation::domain::GenerationRequest;

/// Spline scene embedded when a Spline request carries no `input_url`.
pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/VyGeZv58yuk8j7Yy/scene.splinecode";

const HEADER_TEMPLATE: &str = "header.jsx";
const FRAMER_BODY_TEMPLATE: &str = "framer_body.jsx";
const GSAP_BODY_TEMPLATE: &str = "gsap_body.jsx";

/// Error raised when the template engine fails.
///
/// The templates are fixed and every validated request renders, so this is
/// not expected in practice.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render template '{template}': {reason}")]
pub struct RenderError {
    /// Template that failed.
    pub template: &'static str,
    /// Engine failure description.
    pub reason: String,
}

/// Renders the component source for `request`.
///
/// The output is the import header, a blank line, the component body and a
/// trailing newline. Rendering is deterministic: identical requests produce
/// byte-identical output.
///
/// # Errors
///
/// Returns [`RenderError`] if the template engine fails.
pub fn render_component(request: &GenerationRequest) -> Result<String, RenderError> {
    let environment = build_environment()?;
    let scene_url = request
        .input_url()
        .map_or(DEFAULT_SCENE_URL, |url| url.as_str());
    let ctx = context! {
        component => request.name().identifier(),
        use_spline => request.uses_spline(),
        is_framer => request.is_framer(),
        scene_url => scene_url,
    };

    let body_template = if request.is_framer() {
        FRAMER_BODY_TEMPLATE
    } else {
        GSAP_BODY_TEMPLATE
    };

    let header = render_template(&environment, HEADER_TEMPLATE, &ctx)?;
    let body = render_template(&environment, body_template, &ctx)?;
    Ok(format!("{header}\n\n{body}\n"))
}

fn build_environment() -> Result<Environment<'static>, RenderError> {
    let mut environment = Environment::new();
    environment.set_trim_blocks(true);
    environment.set_lstrip_blocks(true);
    environment.set_undefined_behavior(UndefinedBehavior::Strict);
    environment.set_auto_escape_callback(|_| AutoEscape::None);

    for (name, source) in [
        (HEADER_TEMPLATE, include_str!("../templates/header.jsx.j2")),
        (
            FRAMER_BODY_TEMPLATE,
            include_str!("../templates/framer_body.jsx.j2"),
        ),
        (GSAP_BODY_TEMPLATE, include_str!("../templates/gsap_body.jsx.j2")),
    ] {
        environment
            .add_template(name, source)
            .map_err(|error| RenderError {
                template: name,
                reason: error.to_string(),
            })?;
    }
    Ok(environment)
}

fn render_template(
    environment: &Environment<'static>,
    name: &'static str,
    ctx: &minijinja::Value,
) -> Result<String, RenderError> {
    environment
        .get_template(name)
        .and_then(|template| template.render(ctx))
        .map_err(|error| RenderError {
            template: name,
            reason: error.to_string(),
        })
}
