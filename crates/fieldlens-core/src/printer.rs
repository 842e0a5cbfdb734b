use anyhow::Result;
use fieldlens_types::Value;
use serde::Serialize;

/// Output contract of a printer: a constant type label plus an ordered
/// sequence of labeled child values.
///
/// The children are what the host renders, in the order given; a printer
/// never omits a pair, it fails instead.
#[derive(Debug, Clone, Serialize)]
pub struct Rendered {
    pub type_label: String,
    pub children: Vec<(String, Value)>,
}

/// A pretty-printer for one target record type.
///
/// Printers are pure extractors: one request, one response, no state. The
/// single failure mode is an expected field being missing or unreadable on
/// the input value, and that error propagates to the host unrecovered.
pub trait ValuePrinter: Send + Sync {
    fn format(&self, value: &Value) -> Result<Rendered>;
}
