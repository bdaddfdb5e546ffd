//! Error types for the nanopub crate.
//!
//! All errors are strongly typed and propagated without panicking.
//! Private key material is never included in error messages.

use std::path::PathBuf;

/// Nanopub error types covering profile handling, key provisioning,
/// and document construction.
#[derive(Debug, thiserror::Error)]
pub enum NanopubError {
    /// The profile is missing a required field. Raised before any key
    /// generation or file write is attempted.
    #[error("incomplete profile: missing {0}")]
    ProfileIncomplete(&'static str),

    /// The profile file could not be parsed.
    #[error("profile file {path}: {reason}")]
    ProfileFile { path: PathBuf, reason: String },

    /// The RSA primitive failed or key material could not be encoded.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// A key file could not be written. Carries the destination path so
    /// the failing half of the pair can be identified.
    #[error("cannot write key file {path}: {source}")]
    FilePersistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document configuration is contradictory or the assembled
    /// document fails a structural check.
    #[error("malformed nanopub: {0}")]
    MalformedNanopub(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, NanopubError>;
