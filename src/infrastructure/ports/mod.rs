//! Port factories and the registry that dispatches ports to them

pub mod bulkio;
pub mod message;
pub mod registry;

pub use bulkio::*;
pub use message::*;
pub use registry::*;
