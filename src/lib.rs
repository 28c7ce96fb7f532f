// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod common;
pub mod geometry;
pub mod io;
pub mod registry;

// Re-export commonly used types
pub use crate::geometry::{Circle, Shape};
pub use crate::io::output::{create_writer, EntryWriter, PlainWriter};
pub use crate::registry::{assign, entries, insert_pair, seed, Registry};
