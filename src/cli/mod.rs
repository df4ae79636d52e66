pub mod dashboard;
pub mod expenses;
pub mod inventory;
pub mod sales;
pub mod status;

use clap::{Parser, Subcommand};

use crate::error::{DukaError, Result};
use crate::listview::TimeRange;
use crate::models::EXPENSE_CATEGORIES;

#[derive(Parser)]
#[command(
    name = "duka",
    about = "Shop operations dashboard for small retailers. Run without a subcommand for the interactive dashboard."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sales records as a plain table.
    Sales {
        /// Filter by customer or items (case-insensitive substring)
        #[arg(long)]
        search: Option<String>,
    },
    /// Expense records as a plain, paginated table.
    Expenses {
        /// Time range: all, last7, month (anchored on the latest record date)
        #[arg(long, default_value = "all")]
        range: String,
        /// Filter by exact category, e.g. 'Stock Purchase'
        #[arg(long)]
        category: Option<String>,
        /// Filter by description or category (case-insensitive substring)
        #[arg(long)]
        search: Option<String>,
        /// Page to show (clamped to the available pages)
        #[arg(long, default_value = "1")]
        page: usize,
        /// Rows per page
        #[arg(long = "page-size")]
        page_size: Option<usize>,
    },
    /// Low and out-of-stock alerts.
    Inventory,
    /// Show settings and record-set summary.
    Status,
}

pub(crate) fn parse_time_range(s: &str) -> Result<TimeRange> {
    match s {
        "all" => Ok(TimeRange::All),
        "last7" => Ok(TimeRange::Last7Days),
        "month" => Ok(TimeRange::ThisMonth),
        other => Err(DukaError::UnknownTimeRange(other.to_string())),
    }
}

pub(crate) fn validate_category(category: &str) -> Result<String> {
    if EXPENSE_CATEGORIES.contains(&category) {
        Ok(category.to_string())
    } else {
        Err(DukaError::UnknownCategory(
            category.to_string(),
            EXPENSE_CATEGORIES.join(", "),
        ))
    }
}
