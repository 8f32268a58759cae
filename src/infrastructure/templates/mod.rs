//! Template sources: storage backends, layered loading and root discovery

pub mod dir;
pub mod errors;
pub mod loader;
pub mod store;

pub use dir::*;
pub use errors::*;
pub use loader::*;
pub use store::*;
