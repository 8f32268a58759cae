//! Error types for the descriptor model

use thiserror::Error;

/// Errors raised while deriving interface descriptions from descriptor data.
///
/// These originate upstream of the mapping layer and are propagated unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdlError {
    #[error("Malformed repository id: {0}")]
    MalformedRepositoryId(String),

    #[error("Unknown interface: {0}")]
    UnknownInterface(String),

    #[error("Unrecognized IDL type: {0}")]
    UnrecognizedType(String),

    #[error("Inheritance cycle through interface {0}")]
    InheritanceCycle(String),

    #[error("Unknown component type: {0}")]
    UnknownComponentType(String),
}
