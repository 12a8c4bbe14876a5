// ABOUTME: CLI summary command - print the bag's order summary as text or JSON
//
// Amounts come from the same config the TUI uses, so both agree on the total

use super::OutputFormat;
use anyhow::{Context, Result};
use atelier::config::AppConfig;
use atelier::models::{placeholder_items, OrderSummary};
use std::fmt::{self, Write};

/// Execute the summary command
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let settings = config.checkout.settings();
    let summary = OrderSummary::compute(placeholder_items(), settings.shipping_fee, settings.tax);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize order summary")?;
            println!("{json}");
        }
        OutputFormat::Text => {
            let text = render_text(&summary).context("Failed to format order summary")?;
            print!("{text}");
        }
    }

    Ok(())
}

/// Plain-text receipt layout
fn render_text(summary: &OrderSummary) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let separator = "-".repeat(60);

    writeln!(out, "{:<40} {:>5} {:>12}", "ITEM", "QTY", "PRICE")?;
    writeln!(out, "{separator}")?;
    for item in &summary.items {
        writeln!(
            out,
            "{:<40} {:>5} {:>12}",
            item.name,
            item.quantity,
            item.line_total().to_string()
        )?;
        writeln!(out, "  {}", item.attributes())?;
    }
    writeln!(out, "{separator}")?;
    writeln!(out, "{:<46} {:>12}", "Subtotal", summary.subtotal.to_string())?;
    writeln!(out, "{:<46} {:>12}", "Shipping", summary.shipping.to_string())?;
    writeln!(out, "{:<46} {:>12}", "Tax (Est.)", summary.tax.to_string())?;
    writeln!(out, "{:<46} {:>12}", "Total", summary.total.to_string())?;
    Ok(out)
}
