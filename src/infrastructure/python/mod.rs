//! Python code generation

pub mod component;
pub mod ports;
pub mod properties;
pub mod types;

pub use component::*;
pub use ports::*;
pub use properties::*;
pub use types::*;
