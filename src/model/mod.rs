//! Descriptor model - the read-only input to the mapping layer
//!
//! Descriptors are produced by an upstream loader and borrowed immutably for
//! the duration of a generation run.

pub mod errors;
pub mod idl;
pub mod softpkg;

pub use errors::*;
pub use idl::*;
pub use softpkg::*;
