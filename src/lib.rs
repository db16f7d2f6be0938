pub mod codec;
pub mod index;
pub mod shortcut;
pub mod utils;
pub mod vector;

use thiserror::Error;

/// Type code written as the first byte of every encoded vector ('d', double precision).
pub const TYPE_CODE: u8 = b'd';

/// Size in bytes of one encoded component.
pub const COMPONENT_SIZE: usize = std::mem::size_of::<f64>();

/// Names of the shortcut components, in storage order.
pub const SHORTCUT_NAMES: &str = "xyzt";

/// Components shown by the debug form before it is abbreviated with `...`.
pub const REPR_MAX_COMPONENTS: usize = 5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
    #[error("Corrupt Data: {0}")]
    CorruptData(String),
    #[error("Index Out Of Range: index {index} for vector of arity {arity}")]
    IndexOutOfRange { index: isize, arity: usize },
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    #[error("'Vector' object has no attribute '{0}'")]
    AttributeNotFound(String),
    #[error("readonly attribute '{0}'")]
    ReadOnlyAttribute(String),
    #[error("a-z is protected namespace for 'Vector' (attribute '{0}')")]
    ProtectedNamespace(String),
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use index::{Item, Key, SliceSpec};
pub use utils::generate_random_vectors;
pub use vector::Vector;
