//! Error type shared by the decoding, expansion and compaction layers.
//!
//! The matching engine itself is infallible; only the boundary operations in
//! [`crate::processing`], [`crate::expansion`] and [`crate::context`] produce
//! these errors.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while turning raw bytes into Thing Descriptions or while
/// compacting them back.
#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be parsed as JSON at all.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the input failed.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The expansion collaborator rejected the document.
    #[error("expansion failed: {0}")]
    Expansion(String),

    /// A context document is referenced that no loader provides.
    #[error("context document {0} is not available offline")]
    ContextNotBundled(String),

    /// Expansion succeeded but yielded no node objects.
    #[error("expansion produced no node objects")]
    EmptyExpansion,

    /// An expanded node does not have the shape of a Thing Description.
    #[error("expanded node does not match the thing description model: {0}")]
    Decode(#[source] serde_json::Error),

    /// A prefix or IRI handed to the context registry is unusable.
    #[error("invalid context mapping '{prefix}': {reason}")]
    InvalidPrefix {
        /// The rejected prefix.
        prefix: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A prefix is already registered with a different IRI.
    #[error(
        "prefix '{prefix}' is already bound to {existing}, refusing to rebind it to {requested}"
    )]
    PrefixConflict {
        /// The prefix being registered.
        prefix: String,
        /// IRI currently bound to the prefix.
        existing: String,
        /// IRI the caller attempted to bind.
        requested: String,
    },
}
