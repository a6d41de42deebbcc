use thiserror::Error;

/// Errors returned by todo operations.
///
/// Each variant displays as a fixed message; the underlying store error is logged where it
/// happens and never carried along.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum TodoError {
    /// A stored record could not be decoded.
    #[error("failed to unmarshal record")]
    FailedToUnmarshalRecord,
    /// The store read failed.
    #[error("failed to fetch record")]
    FailedToFetchRecord,
    /// The caller supplied malformed or missing input.
    #[error("invalid data")]
    InvalidData,
    /// A record could not be encoded for storage.
    #[error("could not marshal item")]
    CouldNotMarshalItem,
    /// The store delete failed.
    #[error("could not delete item")]
    CouldNotDeleteItem,
    /// The store write failed.
    #[error("could not dynamo put item")]
    CouldNotDynamoPutItem,
    /// The record to update is not in the store.
    #[error("does not exist")]
    DoesNotExist,
}
