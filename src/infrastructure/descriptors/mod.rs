//! Descriptor file loading

pub mod yaml_loader;

pub use yaml_loader::*;
