use std::path::Path;

use anyhow::Result;
use fieldlens_core::PrinterRegistry;
use fieldlens_types::{Snapshot, Value};
use serde_json::json;

use crate::types::OutputFormat;

/// Per-symbol triage: what type each symbol carries and whether a printer
/// covers it.
pub fn handle(registry: &PrinterRegistry, path: &Path, format: OutputFormat) -> Result<()> {
    let snapshot = Snapshot::load(path)?;

    let rows: Vec<(String, String, Option<&str>)> = snapshot
        .symbols
        .iter()
        .map(|sym| {
            let type_desc = describe(&sym.value);
            let printer = sym
                .value
                .type_name()
                .and_then(|ty| registry.lookup(ty))
                .map(|entry| entry.name);
            (sym.name.clone(), type_desc, printer)
        })
        .collect();

    match format {
        OutputFormat::Plain => {
            if let Some(target) = &snapshot.target {
                println!("target: {}", target);
            }
            for (name, type_desc, printer) in rows {
                println!("{}  {}  {}", name, type_desc, printer.unwrap_or("-"));
            }
        }
        OutputFormat::Json => {
            let out: Vec<_> = rows
                .into_iter()
                .map(|(name, type_desc, printer)| {
                    json!({"symbol": name, "type": type_desc, "printer": printer})
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}

fn describe(value: &Value) -> String {
    match value {
        Value::Struct { type_name, .. } => format!("struct {}", type_name),
        Value::Pointer { .. } => match value.type_name() {
            Some(ty) => format!("struct {} *", ty),
            None => "pointer".to_string(),
        },
        Value::Int { .. } => "int".to_string(),
        Value::Bytes { .. } => "bytes".to_string(),
        Value::Text { .. } => "text".to_string(),
    }
}
