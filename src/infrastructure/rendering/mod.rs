//! Template rendering engine adapters

pub mod tera_renderer;

pub use tera_renderer::*;
