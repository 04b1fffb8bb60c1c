//! CLI command implementations.
//!
//! This module provides the command-line interface for Stencil. Each
//! command reads a template, drives the rendering engine, and writes the
//! result; all template semantics live in [`crate::rendering`].
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `render` | Substitute placeholders and write the output |
//! | `vars` | List the placeholders a template references |
//! | `check` | Validate marker well-formedness without rendering |
//!
//! # Example Usage
//!
//! ```bash
//! # Render a template with inline values
//! stencil render Main.java.tpl --var package_name=com.example.app --var main_class=DemoApplication
//!
//! # Layer inline values over a JSON vars file
//! stencil render Main.java.tpl --vars-file vars.json --var main_class=DemoApplication
//!
//! # Inspect a template
//! stencil vars Main.java.tpl --format json
//! stencil check Main.java.tpl
//! ```

mod render;

pub use render::{OutputFormat, run_check, run_render, run_vars};
