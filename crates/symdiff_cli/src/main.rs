//! `symdiff`: print a formula and its derivative.

mod config;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use symdiff_ast::RenderMode;
use symdiff_engine::Derivation;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

/// Symbolic differentiation of a single-variable formula
#[derive(Parser, Debug)]
#[command(name = "symdiff", version)]
struct Cli {
    /// Formula to differentiate; read from the first line of stdin when omitted
    formula: Option<String>,

    /// Differentiation variable
    #[arg(short = 'v', long = "var", value_name = "NAME")]
    var: Option<String>,

    /// Typeset (LaTeX-style) output
    #[arg(short, long, default_value_t = false)]
    typeset: bool,

    /// Config file
    #[arg(long, value_name = "PATH", default_value = "symdiff.toml")]
    config: PathBuf,
}

/// Formula plus the variable named on the second line, if any.
fn read_stdin() -> Result<(String, Option<String>)> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let formula = lines
        .next()
        .transpose()
        .context("failed to read formula from stdin")?
        .context("no formula given on the command line or stdin")?;
    let variable = lines
        .next()
        .transpose()
        .context("failed to read variable from stdin")?
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty());
    Ok((formula, variable))
}

fn run(cli: Cli) -> Result<String> {
    let config = CliConfig::load(&cli.config);

    let (formula, stdin_variable) = match cli.formula {
        Some(formula) => (formula, None),
        None => read_stdin()?,
    };
    let variable = cli.var.or(stdin_variable).unwrap_or(config.variable);
    let mode = if cli.typeset || config.typeset {
        RenderMode::Typeset
    } else {
        RenderMode::Plain
    };
    debug!(%mode, variable = %variable, "resolved options");

    let formula = formula.trim();
    let derivation = Derivation::from_formula(formula, &variable)
        .with_context(|| format!("cannot differentiate '{}'", formula))?;
    Ok(derivation.report(mode).to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
