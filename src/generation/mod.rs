//! Generation domain module - maps descriptors to generation plans
//!
//! This module holds the language-neutral part of code generation: the
//! generation context, the mapper and generator contracts, the shared
//! translation rules, and the pipeline that composes them into a
//! [`GenerationPlan`] for an external rendering engine.

pub mod context;
pub mod errors;
pub mod mapping;
pub mod namespace;
pub mod pipeline;
pub mod rules;
pub mod traits;
pub mod types;
pub mod utils;

pub use context::*;
pub use errors::*;
pub use namespace::*;
pub use pipeline::*;
pub use traits::*;
pub use types::*;
