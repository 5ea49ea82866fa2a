//! Declaration sources.
//!
//! A run reads either a pre-generated castxml dump or a C header, in which
//! case castxml is invoked and its stdout parsed. Header text is also
//! scanned for numeric `#define` constants.

use crate::defines::{Constants, scan_defines};
use crate::error::{ParseError, SchemaError};
use crate::ir::DeclGraph;
use crate::parser::parse_declarations;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Where declarations come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclSource {
    /// Pre-generated castxml XML dump.
    Dump(PathBuf),
    /// C header to run castxml on.
    Header(PathBuf),
}

impl DeclSource {
    /// Picks the source kind from the file extension: `.xml` is a dump,
    /// anything else a header.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let is_dump = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));
        if is_dump {
            Self::Dump(path)
        } else {
            Self::Header(path)
        }
    }

    /// Returns the input path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Dump(path) | Self::Header(path) => path,
        }
    }
}

/// castxml invocation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastxmlCommand {
    /// Program to run.
    pub program: PathBuf,
    /// Extra arguments placed before the header path (include dirs, defines).
    pub args: Vec<String>,
}

impl Default for CastxmlCommand {
    fn default() -> Self {
        Self {
            program: PathBuf::from("castxml"),
            args: Vec::new(),
        }
    }
}

impl CastxmlCommand {
    /// Creates a command for the given castxml program.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Adds an extra argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Runs castxml on a header and returns the XML it writes to stdout.
    ///
    /// # Errors
    /// Returns `ParseError::Castxml` if the program cannot be spawned or
    /// exits unsuccessfully.
    pub fn run(&self, header: &Path) -> Result<String, ParseError> {
        let program = self.program.display().to_string();
        tracing::debug!(program = %program, header = %header.display(), "running castxml");

        let output = Command::new(&self.program)
            .arg("--castxml-gccxml")
            .arg("-o")
            .arg("-")
            .args(&self.args)
            .arg(header)
            .output()
            .map_err(|e| ParseError::Castxml {
                program: program.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ParseError::Castxml {
                program,
                message: format!("{}: {}", output.status, stderr.trim()),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| ParseError::Utf8(e.utf8_error()))
    }
}

/// Builds the declaration graph for a source.
///
/// # Arguments
/// * `source` - Dump or header to read
/// * `castxml` - castxml settings, used for headers only
/// * `defines` - Extra header to scan for constants, typically used with a dump
///
/// # Errors
/// Returns `SchemaError` if reading, castxml, parsing or graph construction
/// fails.
pub fn load_graph(
    source: &DeclSource,
    castxml: &CastxmlCommand,
    defines: Option<&Path>,
) -> Result<DeclGraph, SchemaError> {
    tracing::debug!(path = %source.path().display(), "loading declarations");
    let mut constants = Constants::new();

    let xml = match source {
        DeclSource::Dump(path) => std::fs::read_to_string(path).map_err(ParseError::Io)?,
        DeclSource::Header(path) => {
            let text = std::fs::read_to_string(path).map_err(ParseError::Io)?;
            constants.extend(scan_defines(&text));
            castxml.run(path)?
        }
    };

    if let Some(path) = defines {
        let text = std::fs::read_to_string(path).map_err(ParseError::Io)?;
        for (name, value) in scan_defines(&text) {
            constants.entry(name).or_insert(value);
        }
    }

    let decls = parse_declarations(&xml)?;
    DeclGraph::build(decls, constants)
}
