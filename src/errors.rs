use thiserror::Error;

/// Errors that can occur when operating on a list.
///
/// Lookups that merely miss (`find`, `node_at`, tree search) return `None`
/// instead of an error; these variants are reserved for contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The handle does not refer to a live node in this list: it was
    /// removed, or it belongs to a different list.
    #[error("handle does not refer to a live node in this list")]
    InvalidHandle,

    /// Index-based access past the end of the list.
    #[error("index {index} is out of range for a list of length {len}")]
    OutOfRange { index: usize, len: usize },
}
