//! Java code generation

pub mod ports;
pub mod properties;
pub mod service;
pub mod types;

pub use ports::*;
pub use properties::*;
pub use service::*;
pub use types::*;
