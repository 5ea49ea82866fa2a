//! Prelude module for convenient imports.
//!
//! ```ignore
//! use ffigen::prelude::*;
//! ```

// Declaration graph
pub use ffigen_schema::{
    CastxmlCommand, Constants, DeclGraph, DeclSource, FunctionDecl, ParseError, SchemaError,
    TypeKind, load_graph, parse_declarations, scan_defines,
};

// Generation
pub use ffigen_codegen::{
    CodegenError, Generator, GeneratorConfig, IndirectionPlan, Mode, TypeResolver,
    generate_from_file, generate_from_xml, needs_indirection, requires_native_wrapper,
};
