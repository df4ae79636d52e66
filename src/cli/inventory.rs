use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::data::stock_alerts;
use crate::error::Result;
use crate::models::StockLevel;
use crate::stats::inventory_counts;

pub fn run() -> Result<()> {
    let alerts = stock_alerts();
    let counts = inventory_counts(&alerts);

    let mut table = Table::new();
    table.set_header(vec!["Product", "SKU", "Quantity", "Status"]);
    for a in &alerts {
        let status = match a.level {
            StockLevel::Low => a.level.label().yellow(),
            StockLevel::Out => a.level.label().red().bold(),
        };
        table.add_row(vec![
            Cell::new(&a.name),
            Cell::new(&a.sku),
            Cell::new(format!("{} units", a.quantity)),
            Cell::new(status),
        ]);
    }

    println!("Low Stock Alerts\n{table}");
    println!(
        "{} items require attention ({} low, {} out of stock)",
        alerts.len(),
        counts.low,
        counts.out
    );
    Ok(())
}
