//! C (native side) code generation.

pub mod wrappers;

pub use wrappers::WrapperGenerator;
