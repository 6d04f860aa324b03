//! Error types for the parts of lodestar that can genuinely fail.
//!
//! Navigation itself never fails: every runtime condition degrades to a fallback inside the
//! component that detects it. What remains are construction-time problems (a malformed config,
//! an unparseable document, an inconsistent section list) and the one refusal the environment can
//! hand back, a denied full-viewport request.

use thiserror::Error;

/// Crate-level error surfaced by the binary.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading an input file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be used.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The document could not be turned into sections.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Serialising the section index failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Problems loading `lodestar.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: String,
        /// Underlying io failure.
        source: std::io::Error,
    },

    /// The file is not valid TOML for the config schema.
    #[error("invalid config {path}: {message}")]
    Parse {
        /// Path that was parsed.
        path: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Problems building a [`crate::document::Document`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The markdown grammar could not be loaded into the parser.
    #[error("markdown grammar unavailable: {0}")]
    Language(String),

    /// The parser produced no tree.
    #[error("markdown parse failed")]
    Parse,

    /// The extracted sections were inconsistent.
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Violations of the [`crate::section::SectionIndex`] invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    /// A document always has at least its header.
    #[error("section index is empty")]
    Empty,

    /// The first section must be the header.
    #[error("first section must be the header")]
    MissingHeader,

    /// A header appeared somewhere other than position 0.
    #[error("header found at position {0}")]
    MisplacedHeader(usize),

    /// A footer appeared somewhere other than the last position.
    #[error("footer found at position {0}")]
    MisplacedFooter(usize),

    /// An id was present but empty.
    #[error("section at position {0} has an empty id")]
    EmptyId(usize),

    /// Two sections share an id.
    #[error("duplicate section id {0:?}")]
    DuplicateId(String),
}

/// Refusals reported by the hosting environment.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// The environment declined a full-viewport mode change.
    #[error("full-viewport mode refused: {0}")]
    FullscreenRefused(String),
}
