//! # ffigen Schema
//!
//! Declaration parsing and the resolved type graph.
//!
//! This crate provides:
//! - castxml (gccxml-format) dump parsing
//! - Numeric `#define` constant scanning
//! - The declaration graph with typedef alias collapsing
//! - Reference validation
//! - Loading declarations from a dump or by running castxml

pub mod defines;
pub mod error;
pub mod ir;
pub mod parser;
pub mod source;
pub mod types;
pub mod validation;

pub use defines::{Constants, scan_defines};
pub use error::{ParseError, SchemaError};
pub use ir::DeclGraph;
pub use parser::parse_declarations;
pub use source::{CastxmlCommand, DeclSource, load_graph};
pub use types::{
    Alias, AliasKind, Declarations, EnumMember, FunctionDecl, Param, TypeDescriptor, TypeKind,
};
