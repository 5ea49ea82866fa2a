//! # ffigen Codegen
//!
//! Binding generation from castxml declarations.
//!
//! This crate provides:
//! - C and Static Hermes type name resolution
//! - The struct/union indirection policy shared by both outputs
//! - `$SHBuiltin.extern_c` declaration and constant generation
//! - By-pointer C wrapper generation

pub mod config;
pub mod error;
pub mod generator;
pub mod managed;
pub mod native;
pub mod policy;
pub mod resolve;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::{Generator, Mode};
pub use policy::{IndirectionPlan, needs_indirection, requires_native_wrapper};
pub use resolve::TypeResolver;

use ffigen_schema::{CastxmlCommand, Constants, DeclGraph, DeclSource};
use std::path::Path;

/// Generates output from a castxml dump string.
///
/// # Arguments
/// * `xml` - castxml XML dump
/// * `mode` - Output to generate
///
/// # Returns
/// Generated code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or graph construction fails.
pub fn generate_from_xml(xml: &str, mode: Mode) -> Result<String, CodegenError> {
    let decls = ffigen_schema::parse_declarations(xml)?;
    let graph = DeclGraph::build(decls, Constants::new())?;
    Ok(Generator::new(&graph).generate(mode))
}

/// Generates output from a dump or header file.
///
/// Files ending in `.xml` are read as dumps; anything else is treated as a
/// header and run through castxml.
///
/// # Arguments
/// * `path` - Dump or header path
/// * `mode` - Output to generate
/// * `castxml` - castxml invocation settings
/// * `config` - Generator settings
///
/// # Errors
/// Returns `CodegenError` if reading, castxml, parsing or graph
/// construction fails.
pub fn generate_from_file(
    path: &Path,
    mode: Mode,
    castxml: &CastxmlCommand,
    config: GeneratorConfig,
) -> Result<String, CodegenError> {
    let source = DeclSource::from_path(path);
    let graph = ffigen_schema::load_graph(&source, castxml, None)?;
    Ok(Generator::with_config(&graph, config).generate(mode))
}
