use crate::io::output;
use crate::registry::{self, Registry};
use anyhow::Result;

/// Seed a fresh registry and print its entries to stdout, one per line.
///
/// The registry lives only for the duration of this call.
pub fn print_registry() -> Result<()> {
    let mut registry = Registry::new();
    registry::seed(&mut registry);

    let mut writer = output::create_writer();
    writer.write_entries(&registry)
}
