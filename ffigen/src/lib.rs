//! # ffigen
//!
//! Static Hermes FFI binding generator for C headers.
//!
//! Given a C header (or a castxml dump of one), ffigen produces either:
//!
//! - **`js`**: `$SHBuiltin.extern_c` declarations for every function plus
//!   constants for numeric `#define`s and enumeration members, or
//! - **`cwrap`**: C wrapper functions for every function that passes or
//!   returns a struct or union by value, taking pointers instead.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ffigen::prelude::*;
//!
//! let output = generate_from_xml(&std::fs::read_to_string("api.xml")?, Mode::Managed)?;
//! print!("{output}");
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - castxml parsing and the declaration graph
//! - [`codegen`] - Name resolution and the two generators
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod prelude;

/// castxml parsing and the declaration graph.
pub mod schema {
    pub use ffigen_schema::*;
}

/// Name resolution and code generation.
pub mod codegen {
    pub use ffigen_codegen::*;
}
