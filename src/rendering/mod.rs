//! Template rendering engine.
//!
//! Provides placeholder substitution over `{{ name }}` markers. The
//! renderer is a pure function of (template, substitutions); it keeps no
//! state between calls and performs no I/O.

mod renderer;
mod substitutions;

pub use renderer::{Placeholder, TemplateRenderer, extract_placeholders};
pub use substitutions::Substitutions;
