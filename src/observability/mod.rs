//! Structured logging setup.
//!
//! Logging goes to stderr so rendered output on stdout stays clean enough
//! to pipe into a file or another tool.

use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Initializes the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set; otherwise `info`, or
/// `debug` when `--verbose` was passed.
///
/// # Errors
///
/// Returns [`Error::OperationFailed`] if a global subscriber is already
/// installed.
pub fn init(verbose: bool) -> Result<()> {
    let default_directive = if verbose { "stencil=debug" } else { "stencil=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::OperationFailed {
            operation: "init_logging".to_string(),
            cause: e.to_string(),
        })
}
