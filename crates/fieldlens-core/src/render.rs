use anyhow::Result;
use fieldlens_types::{Symbol, Value};
use owo_colors::OwoColorize;

use crate::registry::PrinterRegistry;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// ANSI color for type labels; the CLI enables this only when stdout is
    /// a terminal
    pub color: bool,
}

/// Render one captured symbol as `name = <value>`.
pub fn render_symbol(
    registry: &PrinterRegistry,
    symbol: &Symbol,
    opts: RenderOptions,
) -> Result<String> {
    Ok(format!(
        "{} = {}",
        symbol.name,
        render_value(registry, &symbol.value, opts)?
    ))
}

/// Render a value as an indented text tree.
///
/// Values with a matching printer render as `label { name = ... }` using the
/// printer's children (pointers dispatch on their pointee's type, like the
/// debugger's `->`); unmatched structs fall back to a generic
/// `struct <type_name> { ... }` listing, and unmatched pointers render as an
/// address summary, not by expansion.
pub fn render_value(
    registry: &PrinterRegistry,
    value: &Value,
    opts: RenderOptions,
) -> Result<String> {
    render_node(registry, None, value, 0, opts)
}

fn render_node(
    registry: &PrinterRegistry,
    name: Option<&str>,
    value: &Value,
    depth: usize,
    opts: RenderOptions,
) -> Result<String> {
    if let Some(rendered) = registry.format(value)? {
        let label = if opts.color {
            rendered.type_label.cyan().to_string()
        } else {
            rendered.type_label.clone()
        };
        return render_block(registry, &label, &rendered.children, depth, opts);
    }

    match value {
        Value::Int { value } => Ok(render_int(name, *value)),
        Value::Text { value } => Ok(format!("{:?}", value)),
        Value::Bytes { data } => match value.as_text() {
            Ok(text) => Ok(format!("{:?}", text)),
            Err(_) => Ok(format!("<{} bytes>", data.len())),
        },
        Value::Pointer { address, .. } => Ok(match value.type_name() {
            Some(ty) => format!("(struct {} *) {:#x}", ty, address),
            None => format!("{:#x}", address),
        }),
        Value::Struct { type_name, fields } => {
            let children: Vec<(String, Value)> = fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect();
            let header = format!("struct {}", type_name);
            let header = if opts.color {
                header.cyan().to_string()
            } else {
                header
            };
            render_block(registry, &header, &children, depth, opts)
        }
    }
}

fn render_block(
    registry: &PrinterRegistry,
    header: &str,
    children: &[(String, Value)],
    depth: usize,
    opts: RenderOptions,
) -> Result<String> {
    let pad = INDENT.repeat(depth);
    let mut out = format!("{} {{\n", header);
    for (name, child) in children {
        let body = render_node(registry, Some(name), child, depth + 1, opts)?;
        out.push_str(&format!("{}{}{} = {}\n", pad, INDENT, name, body));
    }
    out.push_str(&pad);
    out.push('}');
    Ok(out)
}

// Flag words read better in hex; everything else stays decimal.
fn render_int(name: Option<&str>, value: i64) -> String {
    match name {
        Some(n) if n.ends_with("_flags") && value >= 0 => format!("{:#x}", value),
        _ => value.to_string(),
    }
}
