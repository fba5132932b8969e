//! Unified error type for shop operations.
//!
//! Every failure in this crate is a user-input validation failure surfaced
//! synchronously; there are no retryable or fatal classes. Storage problems
//! never appear here, they degrade silently (see [`crate::storage`]).

use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::selection::{ExtraChoicesError, SelectionError};

/// Application-level error type for the storefront.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShopError {
    /// Checkout validation failed.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// A selection referenced an unknown choice.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Extra choices failed to parse.
    #[error(transparent)]
    ExtraChoices(#[from] ExtraChoicesError),

    /// The requested product is not in the catalog.
    #[error("no product \"{0}\" in the catalog")]
    UnknownProduct(String),

    /// A notification link could not be built from the store config.
    #[error("invalid notification link: {0}")]
    InvalidLink(#[from] url::ParseError),
}

/// Result type alias for `ShopError`.
pub type Result<T> = std::result::Result<T, ShopError>;
