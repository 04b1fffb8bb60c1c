//! Render, vars, and check command handlers.

// CLI commands are allowed to use println! for output
#![allow(clippy::print_stdout)]
// CLI commands take owned strings from clap parsing
#![allow(clippy::needless_pass_by_value)]

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::rendering::{Substitutions, TemplateRenderer, extract_placeholders};
use crate::{Error, Result};

/// Output format for the `vars` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One placeholder name per line (default).
    #[default]
    Text,
    /// JSON array of `{name, position}` objects.
    Json,
}

impl OutputFormat {
    /// Parses output format from string, defaulting to text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Renders a template and writes the result.
///
/// The substitution map is built from `vars_file` first (when given),
/// then `--var KEY=VALUE` entries on top, so inline values win.
///
/// # Errors
///
/// Returns an error if an input cannot be read, a `--var` entry is not
/// `KEY=VALUE`, the template is malformed, or a placeholder is
/// unresolved.
pub fn run_render(
    template_path: PathBuf,
    vars: Vec<String>,
    vars_file: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let template = read_template(&template_path)?;
    let subs = build_substitutions(&vars, vars_file.as_deref())?;
    debug!(
        template = %template_path.display(),
        substitutions = subs.len(),
        "rendering template"
    );

    let rendered = TemplateRenderer::new().render(&template, &subs)?;

    match output {
        Some(path) => {
            fs::write(&path, &rendered).map_err(|e| Error::OperationFailed {
                operation: "write_output".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;
            debug!(output = %path.display(), bytes = rendered.len(), "wrote rendered output");
        },
        None => print!("{rendered}"),
    }
    Ok(())
}

/// Lists the placeholders a template references, in first-occurrence
/// order.
///
/// # Errors
///
/// Returns an error if the template cannot be read or is malformed.
pub fn run_vars(template_path: PathBuf, format: OutputFormat) -> Result<()> {
    let template = read_template(&template_path)?;
    let placeholders = extract_placeholders(&template)?;

    match format {
        OutputFormat::Text => {
            for placeholder in &placeholders {
                println!("{}", placeholder.name);
            }
        },
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&placeholders).map_err(|e| {
                Error::OperationFailed {
                    operation: "serialize_placeholders".to_string(),
                    cause: e.to_string(),
                }
            })?;
            println!("{json}");
        },
    }
    Ok(())
}

/// Validates that a template's markers are well-formed.
///
/// # Errors
///
/// Returns an error if the template cannot be read or is malformed.
pub fn run_check(template_path: PathBuf) -> Result<()> {
    let template = read_template(&template_path)?;
    let placeholders = extract_placeholders(&template)?;
    println!(
        "{}: ok ({} placeholder{})",
        template_path.display(),
        placeholders.len(),
        if placeholders.len() == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Reads template text from a file, or from stdin when the path is `-`.
fn read_template(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| Error::OperationFailed {
                operation: "read_template".to_string(),
                cause: format!("stdin: {e}"),
            })?;
        return Ok(buffer);
    }
    fs::read_to_string(path).map_err(|e| Error::OperationFailed {
        operation: "read_template".to_string(),
        cause: format!("{}: {e}", path.display()),
    })
}

/// Builds the substitution map from a vars file and `KEY=VALUE` pairs.
fn build_substitutions(vars: &[String], vars_file: Option<&Path>) -> Result<Substitutions> {
    let mut subs = match vars_file {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| Error::OperationFailed {
                operation: "read_vars_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;
            let value: serde_json::Value =
                serde_json::from_str(&content).map_err(|e| Error::InvalidInput(format!(
                    "vars file {}: {e}",
                    path.display()
                )))?;
            Substitutions::from_json_value(&value)?
        },
        None => Substitutions::new(),
    };

    for var in vars {
        let (name, value) = parse_var(var)?;
        subs.set(name, value);
    }
    Ok(subs)
}

/// Parses a `KEY=VALUE` command-line variable.
fn parse_var(var: &str) -> Result<(&str, &str)> {
    var.split_once('=')
        .filter(|(name, _)| !name.trim().is_empty())
        .map(|(name, value)| (name.trim(), value))
        .ok_or_else(|| {
            Error::InvalidInput(format!("expected KEY=VALUE, got '{var}'"))
        })
}
