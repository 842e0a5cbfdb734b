use anyhow::Result;
use fieldlens_core::{PrinterRegistry, install_default_printers};

use crate::args::{Cli, Commands};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    // Printer registration is an explicit startup step; nothing installs
    // itself as a side effect of linking a crate in.
    let mut registry = PrinterRegistry::new();
    install_default_printers(&mut registry)?;

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Render { snapshot, symbol } => {
            handlers::render::handle(&registry, &snapshot, symbol.as_deref(), cli.format)
        }
        Commands::Inspect { snapshot } => handlers::inspect::handle(&registry, &snapshot, cli.format),
        Commands::Printers => handlers::printers::handle(&registry, cli.format),
    }
}

fn show_guidance() {
    println!("fieldlens: pretty-print kernel data structures from debug snapshots");
    println!();
    println!("  fieldlens render <snapshot.json>     Render captured values");
    println!("  fieldlens inspect <snapshot.json>    Summarize symbols and printer coverage");
    println!("  fieldlens printers                   List registered printers");
    println!();
    println!("Run 'fieldlens --help' for details.");
}
