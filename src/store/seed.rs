//! Demo dataset for the out-of-the-box dashboard experience. Transactions
//! are listed newest first, matching the store's insertion order.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Account, Goal, GoalStatus, Transaction, TransactionKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

pub(super) fn demo_accounts() -> Vec<Account> {
    [
        ("Checking Account", "Checking", 5234.67),
        ("Savings Account", "Savings", 12_500.00),
        ("Investment Portfolio", "Investment", 28_750.50),
    ]
    .into_iter()
    .map(|(name, kind, balance)| Account {
        id: Uuid::new_v4(),
        name: name.into(),
        kind: kind.into(),
        currency: "USD".into(),
        balance,
    })
    .collect()
}

pub(super) fn demo_transactions(checking: Uuid) -> Vec<Transaction> {
    [
        ("Salary", "Monthly salary", date(2026, 2, 10), TransactionKind::Income, 5000.0, true),
        ("Rent", "Monthly rent payment", date(2026, 2, 8), TransactionKind::Expense, 1500.0, true),
        ("Groceries", "Weekly groceries", date(2026, 2, 5), TransactionKind::Expense, 150.0, false),
        ("Utilities", "Electric and water", date(2026, 2, 1), TransactionKind::Expense, 200.0, true),
    ]
    .into_iter()
    .map(|(label, description, date, kind, amount, recurring)| Transaction {
        id: Uuid::new_v4(),
        date,
        label: label.into(),
        description: description.into(),
        account_id: checking,
        kind,
        amount,
        currency: "USD".into(),
        recurring,
    })
    .collect()
}

pub(super) fn demo_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: Uuid::new_v4(),
            name: "Emergency Fund".into(),
            target_amount: 10_000.0,
            target_date: date(2025, 12, 31),
            priority: 1,
            status: GoalStatus::OnTrack,
        },
        Goal {
            id: Uuid::new_v4(),
            name: "Down Payment".into(),
            target_amount: 50_000.0,
            target_date: date(2027, 6, 30),
            priority: 2,
            status: GoalStatus::AtRisk,
        },
    ]
}
