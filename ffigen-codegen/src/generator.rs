//! Top-level generator.

use crate::config::GeneratorConfig;
use crate::managed::{ConstantGenerator, ExternGenerator};
use crate::native::WrapperGenerator;
use crate::resolve::TypeResolver;
use ffigen_schema::DeclGraph;
use std::fmt;

/// Output selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Static Hermes extern declarations and constants (`js`).
    Managed,
    /// C by-pointer wrapper definitions (`cwrap`).
    NativeWrappers,
}

impl Mode {
    /// Command-line name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Managed => "js",
            Self::NativeWrappers => "cwrap",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generates text for one mode from a declaration graph.
pub struct Generator<'a> {
    graph: &'a DeclGraph,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(graph: &'a DeclGraph) -> Self {
        Self::with_config(graph, GeneratorConfig::default())
    }

    /// Creates a generator with an explicit configuration.
    #[must_use]
    pub fn with_config(graph: &'a DeclGraph, config: GeneratorConfig) -> Self {
        Self { graph, config }
    }

    /// Generates the output for a mode.
    #[must_use]
    pub fn generate(&self, mode: Mode) -> String {
        let resolver = TypeResolver::new(self.graph);

        match mode {
            Mode::Managed => {
                let mut output = ExternGenerator::new(resolver, &self.config).generate();
                output.push_str(&ConstantGenerator::new(self.graph, &self.config).generate());
                output
            }
            Mode::NativeWrappers => WrapperGenerator::new(resolver, &self.config).generate(),
        }
    }
}
