//! Configuration and usage errors raised by a collection.

/// Errors returned by [`Collection`](crate::Collection) operations.
///
/// These signal a programming mistake (a conflicting field set or a bad
/// argument) and are returned immediately. Problems with submitted input are
/// never reported this way; they are recorded as
/// [`ValidationError`](crate::ValidationError)s instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// A field was registered under a name that is already taken.
    #[error("field '{0}' already registered")]
    DuplicateFieldName(String),

    /// A field declared an alias that is already taken.
    #[error("alias '{alias}' of field '{field}' already registered")]
    DuplicateAlias {
        /// The conflicting alias.
        alias: String,
        /// The field that declared it.
        field: String,
    },

    /// No field resolves for the given name.
    #[error("field '{0}' not found")]
    UnknownField(String),

    /// An argument had the wrong shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
