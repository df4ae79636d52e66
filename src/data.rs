//! Built-in record sets. There is no backend yet — these stand in for the
//! future sync fetch and are the same rows the pilot shop entered during the
//! February trial.

use chrono::NaiveDate;

use crate::models::{
    ExpenseRecord, PaymentMethod, SaleRecord, StockAlert, StockLevel, SyncStatus,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

struct SeedExpense {
    id: i64,
    date: (i32, u32, u32),
    time: &'static str,
    category: &'static str,
    description: &'static str,
    amount: f64,
    status: SyncStatus,
}

const EXPENSES: &[SeedExpense] = &[
    SeedExpense { id: 1, date: (2026, 2, 9), time: "08:30 AM", category: "Rent", description: "Monthly shop rent - Merkato branch", amount: 35000.00, status: SyncStatus::Synced },
    SeedExpense { id: 2, date: (2026, 2, 8), time: "02:20 PM", category: "Stock Purchase", description: "Wholesale rice purchase - 50 bags", amount: 87500.00, status: SyncStatus::Synced },
    SeedExpense { id: 3, date: (2026, 2, 6), time: "10:15 AM", category: "Maintenance", description: "Broken shelf repair", amount: 2400.00, status: SyncStatus::Synced },
    SeedExpense { id: 4, date: (2026, 2, 5), time: "04:45 PM", category: "Transport", description: "Delivery van fuel refill", amount: 3250.00, status: SyncStatus::Pending },
    SeedExpense { id: 5, date: (2026, 2, 4), time: "11:10 AM", category: "Salaries", description: "Part-time staff wages", amount: 14000.00, status: SyncStatus::Synced },
    SeedExpense { id: 6, date: (2026, 2, 3), time: "01:05 PM", category: "Stock Purchase", description: "Cooking oil restock - 30 cartons", amount: 42800.00, status: SyncStatus::Synced },
    SeedExpense { id: 7, date: (2026, 2, 2), time: "09:30 AM", category: "Other", description: "POS receipt paper rolls", amount: 640.00, status: SyncStatus::Synced },
    SeedExpense { id: 8, date: (2026, 2, 1), time: "03:40 PM", category: "Rent", description: "Warehouse space fee", amount: 18000.00, status: SyncStatus::Pending },
    SeedExpense { id: 9, date: (2026, 1, 30), time: "12:25 PM", category: "Transport", description: "Supplier delivery service", amount: 1950.00, status: SyncStatus::Synced },
    SeedExpense { id: 10, date: (2026, 1, 28), time: "09:00 AM", category: "Maintenance", description: "Air conditioner servicing", amount: 3800.00, status: SyncStatus::Synced },
];

struct SeedSale {
    id: i64,
    date: (i32, u32, u32),
    time: &'static str,
    customer: &'static str,
    items: &'static str,
    amount: f64,
    payment: PaymentMethod,
    status: SyncStatus,
}

const SALES: &[SeedSale] = &[
    SeedSale { id: 1, date: (2026, 2, 9), time: "10:30 AM", customer: "Walk-in", items: "Rice (5kg), Sugar (2kg)", amount: 1250.00, payment: PaymentMethod::Cash, status: SyncStatus::Synced },
    SeedSale { id: 2, date: (2026, 2, 9), time: "11:15 AM", customer: "Meron Alemu", items: "Cooking Oil (3L)", amount: 780.00, payment: PaymentMethod::MobileMoney, status: SyncStatus::Synced },
    SeedSale { id: 3, date: (2026, 2, 8), time: "02:00 PM", customer: "Walk-in", items: "Teff (10kg), Soap (x5)", amount: 3200.00, payment: PaymentMethod::Cash, status: SyncStatus::Synced },
    SeedSale { id: 4, date: (2026, 2, 8), time: "09:30 AM", customer: "Kebede Store", items: "Wholesale - mixed goods", amount: 15000.00, payment: PaymentMethod::BankTransfer, status: SyncStatus::Pending },
    SeedSale { id: 5, date: (2026, 2, 7), time: "04:00 PM", customer: "Walk-in", items: "Water (x12), Detergent", amount: 650.00, payment: PaymentMethod::Cash, status: SyncStatus::Synced },
    SeedSale { id: 6, date: (2026, 2, 7), time: "01:20 PM", customer: "Selamawit Cafe", items: "Sugar (25kg), Coffee", amount: 4500.00, payment: PaymentMethod::MobileMoney, status: SyncStatus::Synced },
    SeedSale { id: 7, date: (2026, 2, 6), time: "11:00 AM", customer: "Walk-in", items: "Flour (5kg)", amount: 420.00, payment: PaymentMethod::Cash, status: SyncStatus::Failed },
    SeedSale { id: 8, date: (2026, 2, 5), time: "10:45 AM", customer: "Walk-in", items: "Rice (25kg)", amount: 2800.00, payment: PaymentMethod::Cash, status: SyncStatus::Synced },
    SeedSale { id: 9, date: (2026, 2, 4), time: "03:30 PM", customer: "Yonas Minimarket", items: "Wholesale order", amount: 22000.00, payment: PaymentMethod::BankTransfer, status: SyncStatus::Synced },
    SeedSale { id: 10, date: (2026, 2, 3), time: "09:00 AM", customer: "Walk-in", items: "Soap (x3), Oil (1L)", amount: 380.00, payment: PaymentMethod::Cash, status: SyncStatus::Synced },
];

pub fn seed_expenses() -> Vec<ExpenseRecord> {
    EXPENSES
        .iter()
        .map(|e| ExpenseRecord {
            id: e.id,
            date: date(e.date.0, e.date.1, e.date.2),
            time: e.time.to_string(),
            category: e.category.to_string(),
            description: e.description.to_string(),
            amount: e.amount,
            status: e.status,
        })
        .collect()
}

pub fn seed_sales() -> Vec<SaleRecord> {
    SALES
        .iter()
        .map(|s| SaleRecord {
            id: s.id,
            date: date(s.date.0, s.date.1, s.date.2),
            time: s.time.to_string(),
            customer: s.customer.to_string(),
            items: s.items.to_string(),
            amount: s.amount,
            payment: s.payment,
            status: s.status,
        })
        .collect()
}

pub fn stock_alerts() -> Vec<StockAlert> {
    let alert = |name: &str, sku: &str, quantity: u32, level: StockLevel| StockAlert {
        name: name.to_string(),
        sku: sku.to_string(),
        quantity,
        level,
    };
    vec![
        alert("Cooking Oil (3L)", "CO-003", 8, StockLevel::Low),
        alert("Bottled Water", "BW-012", 0, StockLevel::Out),
        alert("Bar Soap (6pk)", "BS-006", 5, StockLevel::Low),
        alert("Pasta (500g)", "PA-500", 3, StockLevel::Low),
        alert("Tomato Paste", "TP-400", 0, StockLevel::Out),
    ]
}
