use std::fmt;

use chrono::NaiveDate;

use crate::listview::ListRecord;

/// Upload state of a record against the (future) sync backend.
/// Sales can fail to upload; expenses in practice only see Synced/Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Synced,
    Pending,
    Failed,
}

impl SyncStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SyncStatus::Synced => "Synced",
            SyncStatus::Pending => "Pending",
            SyncStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    MobileMoney,
    BankTransfer,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::MobileMoney => "Mobile Money",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The closed category set for expenses. Category filters match these
/// exactly (case-sensitive); anything else is rejected at the CLI boundary.
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Stock Purchase",
    "Salaries",
    "Rent",
    "Maintenance",
    "Transport",
    "Other",
];

#[derive(Debug, Clone)]
pub struct ExpenseRecord {
    pub id: i64,
    pub date: NaiveDate,
    /// Time of day, display only — never used in comparisons.
    pub time: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub status: SyncStatus,
}

impl ListRecord for ExpenseRecord {
    fn occurred_on(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn category_label(&self) -> &str {
        &self.category
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.description, self.category)
    }
}

#[derive(Debug, Clone)]
pub struct SaleRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub customer: String,
    pub items: String,
    pub amount: f64,
    pub payment: PaymentMethod,
    pub status: SyncStatus,
}

impl ListRecord for SaleRecord {
    fn occurred_on(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn category_label(&self) -> &str {
        &self.customer
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.customer, self.items)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Low,
    Out,
}

impl StockLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::Low => "Low Stock",
            StockLevel::Out => "Out of Stock",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StockAlert {
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub level: StockLevel,
}
