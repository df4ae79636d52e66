use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::data::seed_expenses;
use crate::error::Result;
use crate::fmt::{display_date, money};
use crate::listview::{ListView, TimeRange};
use crate::settings::load_settings;
use crate::stats::expense_summary;

pub fn run(
    range: &str,
    category: Option<String>,
    search: Option<String>,
    page: usize,
    page_size: Option<usize>,
) -> Result<()> {
    let time_range = super::parse_time_range(range)?;
    let category = category.map(|c| super::validate_category(&c)).transpose()?;

    let settings = load_settings();
    let page_size = page_size.filter(|&s| s > 0).unwrap_or(settings.page_size());

    let mut view = ListView::new(seed_expenses(), page_size);
    view.set_time_range(time_range);
    view.set_category(category);
    if let Some(s) = search {
        view.set_search(s);
    }
    view.goto_page(page);

    if view.filtered_len() == 0 {
        println!("No results found for the selected filters.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Time", "Category", "Description", "Amount", "Status"]);
    for e in view.visible() {
        table.add_row(vec![
            Cell::new(display_date(e.date)),
            Cell::new(&e.time),
            Cell::new(&e.category),
            Cell::new(&e.description),
            Cell::new(money(e.amount)),
            Cell::new(e.status.label()),
        ]);
    }

    let summary = expense_summary(&view.all_filtered());
    let (start, end) = view.display_range();
    let filters = view.filter().describe();

    println!("Expenses\n{table}");
    println!(
        "Showing {start} to {end} of {} results (page {} of {})",
        view.filtered_len(),
        view.current_page(),
        view.total_pages(),
    );
    if !filters.is_empty() {
        println!("Filters: {filters}");
    }
    if view.filter().time_range != TimeRange::All {
        if let Some(anchor) = view.reference() {
            println!("Range anchored on {}", display_date(anchor));
        }
    }
    println!(
        "{} {}  ({} transactions, avg {})",
        "Total:".bold(),
        money(summary.total),
        summary.count,
        money(summary.average),
    );
    if summary.categories.len() > 1 {
        println!("By category:");
        for c in &summary.categories {
            println!("  {:<16} {:>14}  {:>4.1}%", c.name, money(c.total), c.share);
        }
    }
    Ok(())
}
