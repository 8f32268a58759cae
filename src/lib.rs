//! componentgen
//!
//! Maps software component descriptors (archetype, supported interface, ports
//! and properties) to fully resolved generation contexts and ordered template
//! bindings for Java and Python component code.
//!
//! The [`generation`] module is the pure mapping and dispatch layer. The
//! [`infrastructure`] module holds the language generators plus the adapters
//! used by the CLI: descriptor loading, template lookup, Tera rendering and
//! filesystem output.

pub mod core;
pub mod generation;
pub mod infrastructure;
pub mod model;
