//! Aggregations for the stat cards and the overview chart. Amounts stay
//! numeric here; formatting happens at the rendering boundary.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::listview::reference_date;
use crate::models::{ExpenseRecord, SaleRecord, StockAlert, StockLevel, SyncStatus};

pub struct CategorySpend {
    pub name: String,
    pub total: f64,
    /// Share of the summary total, in percent.
    pub share: f64,
}

pub struct ExpenseSummary {
    pub total: f64,
    pub count: usize,
    pub average: f64,
    /// Per-category spend, largest first.
    pub categories: Vec<CategorySpend>,
}

impl ExpenseSummary {
    pub fn top_category(&self) -> Option<&CategorySpend> {
        self.categories.first()
    }
}

/// Summarize a (possibly filtered) expense set for the stat cards and the
/// category-distribution view.
pub fn expense_summary(expenses: &[&ExpenseRecord]) -> ExpenseSummary {
    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    let count = expenses.len();
    let average = if count == 0 { 0.0 } else { total / count as f64 };

    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
    for e in expenses {
        *by_category.entry(e.category.as_str()).or_insert(0.0) += e.amount;
    }
    let mut categories: Vec<CategorySpend> = by_category
        .into_iter()
        .map(|(name, spend)| CategorySpend {
            name: name.to_string(),
            total: spend,
            share: if total > 0.0 { spend / total * 100.0 } else { 0.0 },
        })
        .collect();
    // Name order from the map makes the sort deterministic for ties.
    categories.sort_by(|a, b| b.total.total_cmp(&a.total));

    ExpenseSummary {
        total,
        count,
        average,
        categories,
    }
}

pub struct OverviewKpis {
    /// Latest date across both record sets; the "today" every card is
    /// anchored on. None when both sets are empty.
    pub reference: Option<NaiveDate>,
    pub latest_day_sales: f64,
    pub latest_day_expenses: f64,
    pub month_sales: f64,
    pub pending_syncs: usize,
}

/// KPI card values for the overview page. "Today" means the reference date
/// (the data's latest day), not the wall clock.
pub fn overview_kpis(sales: &[SaleRecord], expenses: &[ExpenseRecord]) -> OverviewKpis {
    let reference = reference_date(sales).max(reference_date(expenses));

    let (latest_day_sales, latest_day_expenses, month_sales) = match reference {
        Some(today) => (
            sales
                .iter()
                .filter(|s| s.date == today)
                .map(|s| s.amount)
                .sum(),
            expenses
                .iter()
                .filter(|e| e.date == today)
                .map(|e| e.amount)
                .sum(),
            sales
                .iter()
                .filter(|s| s.date.month() == today.month() && s.date.year() == today.year())
                .map(|s| s.amount)
                .sum(),
        ),
        None => (0.0, 0.0, 0.0),
    };

    let pending_syncs = sales
        .iter()
        .filter(|s| s.status == SyncStatus::Pending)
        .count()
        + expenses
            .iter()
            .filter(|e| e.status == SyncStatus::Pending)
            .count();

    OverviewKpis {
        reference,
        latest_day_sales,
        latest_day_expenses,
        month_sales,
        pending_syncs,
    }
}

pub struct DailyTotal {
    pub date: NaiveDate,
    pub sales: f64,
    pub expenses: f64,
}

/// Per-day sales and expense totals, ascending by date, for the
/// sales-vs-expenses chart. Days with activity on either side appear.
pub fn daily_totals(sales: &[SaleRecord], expenses: &[ExpenseRecord]) -> Vec<DailyTotal> {
    let mut days: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();
    for s in sales {
        days.entry(s.date).or_insert((0.0, 0.0)).0 += s.amount;
    }
    for e in expenses {
        days.entry(e.date).or_insert((0.0, 0.0)).1 += e.amount;
    }
    days.into_iter()
        .map(|(date, (sales, expenses))| DailyTotal {
            date,
            sales,
            expenses,
        })
        .collect()
}

pub struct InventoryCounts {
    pub low: usize,
    pub out: usize,
}

pub fn inventory_counts(alerts: &[StockAlert]) -> InventoryCounts {
    InventoryCounts {
        low: alerts.iter().filter(|a| a.level == StockLevel::Low).count(),
        out: alerts.iter().filter(|a| a.level == StockLevel::Out).count(),
    }
}
