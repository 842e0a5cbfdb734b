use anyhow::Result;
use fieldlens_core::PrinterRegistry;
use serde_json::json;

use crate::types::OutputFormat;

pub fn handle(registry: &PrinterRegistry, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for entry in registry.entries() {
                println!("{}  {}", entry.name, entry.pattern.as_str());
            }
        }
        OutputFormat::Json => {
            let out: Vec<_> = registry
                .entries()
                .iter()
                .map(|entry| json!({"name": entry.name, "pattern": entry.pattern.as_str()}))
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
