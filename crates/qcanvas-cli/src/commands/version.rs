//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - drag-and-drop quantum circuit canvas",
        style("qcanvas").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qcanvas-ir      Circuit model, placement and mutations");
    println!("  qcanvas-graph   Visual node/edge projection");
    println!("  qcanvas-exec    Export payload and execution client");
    println!("  qcanvas-canvas  Canvas event handling and scripts");
    println!("  qcanvas-cli     Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
