//! Typed errors for fallible host operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure raised by a browser host operation.
pub enum HostError {
    /// The global `window` object is unavailable.
    #[error("browser window is unavailable")]
    WindowUnavailable,
    /// The `document` object is unavailable.
    #[error("browser document is unavailable")]
    DocumentUnavailable,
    /// No element with the requested DOM id exists.
    #[error("element `{id}` not found")]
    ElementNotFound {
        /// The DOM id that failed to resolve.
        id: String,
    },
    /// A browser API call rejected the request.
    #[error("browser API call failed: {0}")]
    Js(String),
}
