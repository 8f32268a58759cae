//! Infrastructure layer - concrete implementations of domain ports

pub mod descriptors;
pub mod java;
pub mod output;
pub mod ports;
pub mod project;
pub mod python;
pub mod registry;
pub mod rendering;
pub mod templates;

pub use project::*;
pub use registry::*;
