//! Domain model for component generation.
//!
//! Requests are validated into immutable value types before they reach the
//! renderer, and a [`GenerationRecord`] always carries the code rendered from
//! its own request. Infrastructure concerns stay outside this boundary.

mod animation;
mod error;
mod ids;
mod name;
mod options;
mod record;
mod request;
mod source_type;
mod source_url;

pub use animation::AnimationLibrary;
pub use error::GenerationDomainError;
pub use ids::GenerationId;
pub use name::{ComponentName, DEFAULT_COMPONENT_NAME};
pub use options::GenerationOptions;
pub use record::{GenerationRecord, PersistedGenerationData};
pub use request::GenerationRequest;
pub use source_type::SourceType;
pub use source_url::SourceUrl;
