pub mod fs_handle;

use anyhow::Result;

use crate::registry::PrinterRegistry;

/// Install the built-in printers.
///
/// Called once by the hosting tool during startup; registration order is
/// lookup order.
pub fn install_default_printers(registry: &mut PrinterRegistry) -> Result<()> {
    registry.register(
        fs_handle::FsHandlePrinter::NAME,
        fs_handle::FsHandlePrinter::PATTERN,
        Box::new(fs_handle::FsHandlePrinter),
    )?;
    Ok(())
}
