//! Error types for the Mercado Busca plugin.
//!
//! This module defines the centralized error type [`BuscaError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Mercado Busca operations.
///
/// Fetch failures are deliberately coarse: the orchestrator collapses every
/// variant into one localized message per operation, so the variants exist
/// for logging rather than for user-facing distinctions.
///
/// # Examples
///
/// ```
/// use mercado_busca::domain::BuscaError;
///
/// fn check_status(status: u16) -> Result<(), BuscaError> {
///     if (200..300).contains(&status) {
///         Ok(())
///     } else {
///         Err(BuscaError::Http { status })
///     }
/// }
///
/// assert!(check_status(404).is_err());
/// ```
#[derive(Debug, Error)]
pub enum BuscaError {
    /// The catalog API answered with a non-success status code.
    #[error("HTTP error: status {status}")]
    Http {
        /// Status code reported by the host for the request.
        status: u16,
    },

    /// A response body could not be decoded into the expected type.
    ///
    /// Covers non-JSON bodies as well as JSON that lacks required fields.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A response arrived without a recognizable request tag.
    #[error("Request tag error: {0}")]
    Request(String),
}

/// A specialized `Result` type for Mercado Busca operations.
pub type Result<T> = std::result::Result<T, BuscaError>;
