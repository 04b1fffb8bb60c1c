//! Binary entry point for stencil.
//!
//! This binary provides the CLI interface for the stencil template
//! renderer.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use stencil::cli::{OutputFormat, run_check, run_render, run_vars};
use stencil::observability;

/// Stencil - a placeholder template renderer for code generation.
#[derive(Parser)]
#[command(name = "stencil")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Render a template with placeholder substitutions.
    Render {
        /// Template file to render (use `-` for stdin).
        template: PathBuf,

        /// Substitution as KEY=VALUE (repeatable, overrides the vars file).
        #[arg(long = "var", value_name = "KEY=VALUE")]
        vars: Vec<String>,

        /// JSON file with a flat object of substitution values.
        #[arg(long, value_name = "FILE")]
        vars_file: Option<PathBuf>,

        /// Write output to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the placeholders a template references.
    Vars {
        /// Template file to inspect (use `-` for stdin).
        template: PathBuf,

        /// Output format: text or json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check that a template's markers are well-formed.
    Check {
        /// Template file to validate (use `-` for stdin).
        template: PathBuf,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = observability::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(command: Commands) -> stencil::Result<()> {
    match command {
        Commands::Render {
            template,
            vars,
            vars_file,
            output,
        } => run_render(template, vars, vars_file, output),

        Commands::Vars { template, format } => {
            run_vars(template, OutputFormat::parse(&format))
        },

        Commands::Check { template } => run_check(template),
    }
}
