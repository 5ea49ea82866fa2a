//! Command-line interface.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use ffigen_codegen::{Generator, GeneratorConfig, Mode};
use ffigen_schema::{CastxmlCommand, DeclSource, load_graph};
use std::path::PathBuf;

/// Output mode as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Static Hermes extern declarations and constants
    Js,
    /// C wrappers for functions that pass structs or unions by value
    Cwrap,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Js => Mode::Managed,
            ModeArg::Cwrap => Mode::NativeWrappers,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ffigen",
    version,
    about = "Generate Static Hermes FFI bindings and C wrappers from a C header"
)]
pub struct Cli {
    /// What to generate
    #[arg(value_enum)]
    pub mode: ModeArg,

    /// C header, or a castxml dump ending in .xml
    pub input: PathBuf,

    /// castxml executable used for headers
    #[arg(long, env = "CASTXML", default_value = "castxml")]
    pub castxml: PathBuf,

    /// Extra argument passed to castxml before the header (repeatable)
    #[arg(long = "castxml-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub castxml_args: Vec<String>,

    /// Header to scan for numeric #define constants (useful with a dump)
    #[arg(long, value_name = "HEADER")]
    pub defines: Option<PathBuf>,

    /// Header the generated code should include
    #[arg(long, value_name = "HEADER")]
    pub include: Option<String>,

    /// Suffix of by-pointer wrapper symbols
    #[arg(long, default_value = ffigen_codegen::config::DEFAULT_WRAPPER_SUFFIX)]
    pub wrapper_suffix: String,
}

impl Cli {
    /// castxml settings from the arguments.
    #[must_use]
    pub fn castxml_command(&self) -> CastxmlCommand {
        self.castxml_args
            .iter()
            .fold(CastxmlCommand::new(&self.castxml), |cmd, arg| cmd.arg(arg))
    }

    /// Generator settings from the arguments.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new().wrapper_suffix(&self.wrapper_suffix);
        match &self.include {
            Some(header) => config.include(header),
            None => config,
        }
    }
}

/// Loads the declarations named on the command line and generates output.
///
/// # Errors
/// Returns an error if the declarations cannot be loaded; nothing is
/// generated in that case.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let source = DeclSource::from_path(&cli.input);
    let graph = load_graph(&source, &cli.castxml_command(), cli.defines.as_deref())
        .with_context(|| format!("failed to load declarations from {}", cli.input.display()))?;

    let mode = Mode::from(cli.mode);
    tracing::info!(
        %mode,
        functions = graph.functions.len(),
        constants = graph.constants.len(),
        "generating"
    );

    Ok(Generator::with_config(&graph, cli.generator_config()).generate(mode))
}
