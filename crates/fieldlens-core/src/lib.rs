// NOTE: Registration Model
//
// Printers never install themselves at load time. The hosting tool builds a
// PrinterRegistry during startup and calls install_default_printers (or
// registers its own entries) explicitly, so the set of active printers is
// always visible at the call site and a registry with no installed printers
// matches nothing.

pub mod printer;
pub mod printers;
pub mod registry;
pub mod render;

pub use printer::{Rendered, ValuePrinter};
pub use printers::install_default_printers;
pub use registry::{PrinterEntry, PrinterRegistry};
pub use render::{RenderOptions, render_symbol, render_value};
