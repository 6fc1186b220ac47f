//! Rendering and orchestration services for component generation.

mod generation;
mod renderer;

pub use generation::{
    DEFAULT_LIST_LIMIT, GenerateRequest, GenerationService, GenerationServiceError,
    GenerationServiceResult, MAX_LIST_LIMIT, StoreDiagnostics,
};
pub use renderer::{DEFAULT_SCENE_URL, RenderError, render_component};
