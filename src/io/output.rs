use crate::registry::{self, Registry};
use std::io::Write;

pub trait EntryWriter {
    fn write_entries(&mut self, registry: &Registry) -> anyhow::Result<()>;
}

/// Writes one `"<key> <value>"` line per registry entry, in ascending key
/// order.
pub struct PlainWriter<W: Write> {
    writer: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> EntryWriter for PlainWriter<W> {
    fn write_entries(&mut self, registry: &Registry) -> anyhow::Result<()> {
        for (key, value) in registry::entries(registry) {
            writeln!(self.writer, "{key} {value}")?;
        }
        Ok(())
    }
}

pub fn create_writer() -> Box<dyn EntryWriter> {
    Box::new(PlainWriter::new(std::io::stdout()))
}
