use std::io;
use std::path::Path;

use anyhow::{Result, anyhow};
use fieldlens_core::{PrinterRegistry, RenderOptions, render_symbol};
use is_terminal::IsTerminal;
use fieldlens_types::{Snapshot, Symbol};
use serde_json::json;

use crate::types::OutputFormat;

pub fn handle(
    registry: &PrinterRegistry,
    path: &Path,
    symbol: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let snapshot = Snapshot::load(path)?;

    let selected: Vec<&Symbol> = match symbol {
        Some(name) => vec![
            snapshot
                .symbol(name)
                .ok_or_else(|| anyhow!("no symbol named `{}` in snapshot", name))?,
        ],
        None => snapshot.symbols.iter().collect(),
    };

    match format {
        OutputFormat::Plain => {
            let opts = RenderOptions {
                color: io::stdout().is_terminal(),
            };
            for sym in selected {
                println!("{}", render_symbol(registry, sym, opts)?);
            }
        }
        OutputFormat::Json => {
            let mut out = Vec::new();
            for sym in selected {
                let entry = match registry.format(&sym.value)? {
                    Some(rendered) => json!({
                        "symbol": sym.name,
                        "type_label": rendered.type_label,
                        "children": rendered.children,
                    }),
                    None => json!({
                        "symbol": sym.name,
                        "value": sym.value,
                    }),
                };
                out.push(entry);
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    Ok(())
}
