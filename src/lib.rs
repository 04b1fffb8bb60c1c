//! # Stencil
//!
//! A placeholder template renderer for code generation.
//!
//! Stencil turns a template containing `{{ placeholder }}` markers and a
//! map of placeholder names to replacement strings into fully substituted
//! output text. Everything outside the markers is opaque and copied
//! through byte-for-byte; the renderer has no awareness of the language or
//! framework being generated.
//!
//! ## Example
//!
//! ```rust
//! use stencil::{Substitutions, TemplateRenderer};
//!
//! let mut subs = Substitutions::new();
//! subs.set("package_name", "com.example.app");
//!
//! let renderer = TemplateRenderer::new();
//! let out = renderer.render("package {{ package_name }};", &subs)?;
//! assert_eq!(out, "package com.example.app;");
//! # Ok::<(), stencil::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod cli;
pub mod observability;
pub mod rendering;

// Re-exports for convenience
pub use rendering::{Placeholder, Substitutions, TemplateRenderer, extract_placeholders};

/// Error type for stencil operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `MalformedTemplate` | Unterminated `{{` marker, empty or invalid placeholder name |
/// | `UnresolvedPlaceholder` | Template references a name absent from the substitution map |
/// | `InvalidInput` | Unparseable `KEY=VALUE` pair, vars file is not a JSON object |
/// | `OperationFailed` | Template file or output file I/O fails |
#[derive(Debug, ThisError)]
pub enum Error {
    /// The template text itself is invalid.
    ///
    /// Raised when:
    /// - An open delimiter `{{` has no matching `}}` before end of input
    /// - A marker encloses an empty name after whitespace trimming
    /// - A marker name contains characters outside `[A-Za-z0-9_]`
    ///
    /// `position` is the byte offset of the offending open delimiter.
    #[error("malformed template at byte {position}: {reason}")]
    MalformedTemplate {
        /// Byte offset of the open delimiter that began the bad marker.
        position: usize,
        /// What was wrong with the marker.
        reason: String,
    },

    /// A placeholder has no entry in the substitution map.
    ///
    /// Rendering is strict: an unresolved placeholder always fails rather
    /// than passing the marker through or substituting an empty string.
    /// Silently emitting unsubstituted tokens produces invalid generated
    /// source, which is worse than a loud failure.
    #[error("unresolved placeholder '{name}'")]
    UnresolvedPlaceholder {
        /// The placeholder name that had no mapping.
        name: String,
    },

    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A `--var` argument is not of the form `KEY=VALUE`
    /// - A vars file does not contain a top-level JSON object
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when filesystem I/O at the CLI boundary fails (reading a
    /// template, writing rendered output).
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for stencil operations.
pub type Result<T> = std::result::Result<T, Error>;
