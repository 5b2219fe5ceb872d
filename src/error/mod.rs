//! Error types.
//!
//! [`CollectionError`] covers configuration and usage mistakes and is returned
//! through `Result`. [`ValidationError`] and [`ValidationErrors`] describe bad
//! input and are accumulated as data.

mod collection_error;
mod validation_error;

pub use collection_error::CollectionError;
pub use validation_error::{ValidationError, ValidationErrors};
