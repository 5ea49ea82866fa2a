//! Static Hermes (managed side) code generation.

pub mod constants;
pub mod externs;

pub use constants::ConstantGenerator;
pub use externs::ExternGenerator;
