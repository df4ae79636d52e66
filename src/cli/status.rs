use crate::data::{seed_expenses, seed_sales, stock_alerts};
use crate::error::Result;
use crate::fmt::{display_date, money};
use crate::settings::load_settings;
use crate::stats::overview_kpis;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let sales = seed_sales();
    let expenses = seed_expenses();
    let alerts = stock_alerts();
    let kpis = overview_kpis(&sales, &expenses);

    let shop = if settings.shop_name.is_empty() {
        "(not set)".to_string()
    } else {
        settings.shop_name.clone()
    };
    println!("Shop:        {shop}");
    println!("Page size:   {}", settings.page_size());
    println!();
    println!("Sales:       {}", sales.len());
    println!("Expenses:    {}", expenses.len());
    println!("Alerts:      {}", alerts.len());
    println!("Pending:     {} records waiting to upload", kpis.pending_syncs);
    if let Some(reference) = kpis.reference {
        println!("Latest day:  {}", display_date(reference));
        println!("Day sales:   {}", money(kpis.latest_day_sales));
        println!("Day spend:   {}", money(kpis.latest_day_expenses));
    } else {
        println!("No records loaded.");
    }
    Ok(())
}
