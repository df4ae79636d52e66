use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::data::seed_sales;
use crate::error::Result;
use crate::fmt::{display_date, money};
use crate::listview::{filter_records, FilterState};

/// The sales view shows every filtered row — no pagination, matching the
/// point-of-sale habit of scanning the whole day at once.
pub fn run(search: Option<String>) -> Result<()> {
    let sales = seed_sales();
    let filter = FilterState {
        search: search.unwrap_or_default(),
        ..Default::default()
    };
    let rows = filter_records(&sales, &filter);

    if rows.is_empty() {
        println!("No results found for \"{}\"", filter.search);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Time", "Customer", "Items", "Amount", "Payment", "Status"]);
    let mut total = 0.0;
    for s in &rows {
        total += s.amount;
        table.add_row(vec![
            Cell::new(display_date(s.date)),
            Cell::new(&s.time),
            Cell::new(&s.customer),
            Cell::new(&s.items),
            Cell::new(money(s.amount)),
            Cell::new(s.payment.label()),
            Cell::new(s.status.label()),
        ]);
    }

    println!("Sales\n{table}");
    println!(
        "{} sales, {} {}",
        rows.len(),
        "total".bold(),
        money(total)
    );
    Ok(())
}
