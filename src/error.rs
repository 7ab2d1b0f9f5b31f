//! Error type shared by the parsing, configuration and export surfaces.
//!
//! Navigation itself never fails: a transition that cannot happen is a no-op that returns the
//! cursor unchanged. Only reading documents and writing exports can go wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while loading a document or writing an export.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The tree-sitter grammar could not be loaded into the parser.
    #[error("failed to load grammar: {0}")]
    Language(String),
    /// A tree-sitter query did not compile against the grammar.
    #[error("invalid query: {0}")]
    Query(String),
    /// tree-sitter produced no syntax tree for the file.
    #[error("failed to parse {}", .0.display())]
    Parse(PathBuf),
    /// The document contained neither headings nor body content.
    #[error("no sections found in {}", .0.display())]
    EmptyDocument(PathBuf),
}

/// Result alias for fallible document operations.
pub type Result<T> = std::result::Result<T, Error>;
