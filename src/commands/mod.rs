//! CLI command implementations.

pub mod print;

pub use print::print_registry;
