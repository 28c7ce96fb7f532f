pub mod output;

pub use output::{create_writer, EntryWriter, PlainWriter};
