use anyhow::{Context, Result, bail};
use fieldlens_types::Value;
use regex::Regex;

use crate::printer::{Rendered, ValuePrinter};

/// One registered printer: a short name for listings, the anchored type-name
/// pattern it matches, and the printer itself.
pub struct PrinterEntry {
    pub name: &'static str,
    pub pattern: Regex,
    pub printer: Box<dyn ValuePrinter>,
}

/// Type-name keyed printer dispatch.
///
/// Lookup walks entries in registration order and returns the first whose
/// pattern matches, so more specific patterns register first.
#[derive(Default)]
pub struct PrinterRegistry {
    entries: Vec<PrinterEntry>,
}

impl PrinterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: &'static str,
        pattern: &str,
        printer: Box<dyn ValuePrinter>,
    ) -> Result<()> {
        if self.entries.iter().any(|e| e.name == name) {
            bail!("printer `{}` is already registered", name);
        }
        let pattern = Regex::new(pattern)
            .with_context(|| format!("invalid pattern for printer `{}`", name))?;
        self.entries.push(PrinterEntry {
            name,
            pattern,
            printer,
        });
        Ok(())
    }

    pub fn lookup(&self, type_name: &str) -> Option<&PrinterEntry> {
        self.entries.iter().find(|e| e.pattern.is_match(type_name))
    }

    /// Dispatch by the value's type name. `Ok(None)` when no printer matches
    /// (the host falls back to its generic rendering).
    pub fn format(&self, value: &Value) -> Result<Option<Rendered>> {
        let Some(type_name) = value.type_name() else {
            return Ok(None);
        };
        match self.lookup(type_name) {
            Some(entry) => entry.printer.format(value).map(Some),
            None => Ok(None),
        }
    }

    pub fn entries(&self) -> &[PrinterEntry] {
        &self.entries
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }
}
