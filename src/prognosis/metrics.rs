use chrono::{Duration, NaiveDate};

use crate::domain::{Account, Transaction, TransactionKind};

/// Window for income/expense aggregation.
pub const CASH_FLOW_WINDOW_DAYS: i64 = 30;
/// Window for burn-rate estimation.
pub const BURN_WINDOW_DAYS: i64 = 60;
/// Runway is reported capped rather than unbounded.
pub const RUNWAY_CAP_MONTHS: f64 = 999.9;

/// Account kinds excluded from the liquid balance, compared case-insensitively.
const NON_LIQUID_KINDS: [&str; 5] = ["investment", "holdings", "crypto", "brokerage", "retirement"];

/// Monthly cash-flow aggregates over trailing windows ending at `today`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlowMetrics {
    /// Income magnitudes summed over the last 30 days.
    pub monthly_income: f64,
    /// Expense magnitudes summed over the last 30 days.
    pub monthly_expenses: f64,
    /// `monthly_income - monthly_expenses`.
    pub monthly_savings: f64,
    /// Expenses over the last 60 days scaled to a 30-day month.
    pub burn_rate: f64,
    /// `(monthly_income - burn_rate) / monthly_income`, clamped to [0, 1].
    pub savings_ratio: f64,
}

pub fn trailing_cash_flow(transactions: &[Transaction], today: NaiveDate) -> CashFlowMetrics {
    let flow_cutoff = today - Duration::days(CASH_FLOW_WINDOW_DAYS);
    let mut monthly_income = 0.0;
    let mut monthly_expenses = 0.0;
    for txn in transactions.iter().filter(|txn| txn.date >= flow_cutoff) {
        match txn.kind {
            TransactionKind::Income => monthly_income += txn.amount,
            TransactionKind::Expense => monthly_expenses += txn.amount,
        }
    }

    let burn_cutoff = today - Duration::days(BURN_WINDOW_DAYS);
    let burn_total: f64 = transactions
        .iter()
        .filter(|txn| txn.date >= burn_cutoff && txn.kind == TransactionKind::Expense)
        .map(|txn| txn.amount)
        .sum();
    let burn_rate = burn_total / BURN_WINDOW_DAYS as f64 * 30.0;

    let savings_ratio = if monthly_income > 0.0 {
        ((monthly_income - burn_rate) / monthly_income).clamp(0.0, 1.0)
    } else {
        0.0
    };

    CashFlowMetrics {
        monthly_income,
        monthly_expenses,
        monthly_savings: monthly_income - monthly_expenses,
        burn_rate,
        savings_ratio,
    }
}

/// Sum of balances across liquid accounts.
pub fn liquid_balance(accounts: &[Account]) -> f64 {
    accounts
        .iter()
        .filter(|account| is_liquid(account))
        .map(|account| account.balance)
        .sum()
}

fn is_liquid(account: &Account) -> bool {
    let kind = account.kind.to_lowercase();
    !NON_LIQUID_KINDS.contains(&kind.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    Low,
    Moderate,
    High,
}

impl RiskLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Moderate => "Moderate",
            RiskLabel::High => "High",
        }
    }
}

/// Risk posture derived from burn rate, liquid reserves, and income stability.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskMetrics {
    pub burn_rate: f64,
    /// Months the liquid balance covers at the current burn rate.
    pub runway_months: f64,
    /// Income over burn; above 1.0 means income outpaces spending.
    pub stability_ratio: f64,
    pub savings_ratio: f64,
    /// Weighted score in [0, 100]: 40% runway, 30% stability, 30% savings.
    pub score: u8,
    pub label: RiskLabel,
}

pub fn risk_profile(
    transactions: &[Transaction],
    liquid_balance: f64,
    today: NaiveDate,
) -> RiskMetrics {
    let cash_flow = trailing_cash_flow(transactions, today);
    let burn_cutoff = today - Duration::days(BURN_WINDOW_DAYS);
    let has_recent_activity = transactions.iter().any(|txn| txn.date >= burn_cutoff);

    if !has_recent_activity {
        // Nothing to measure; report a neutral low-risk posture.
        let income = cash_flow.monthly_income;
        return RiskMetrics {
            burn_rate: 0.0,
            runway_months: if liquid_balance > 0.0 { RUNWAY_CAP_MONTHS } else { 0.0 },
            stability_ratio: if income > 0.0 { 2.0 } else { 1.0 },
            savings_ratio: if income > 0.0 { 1.0 } else { 0.0 },
            score: 70,
            label: RiskLabel::Low,
        };
    }

    let burn_rate = cash_flow.burn_rate;
    let runway_months = if burn_rate > 0.0 {
        (liquid_balance / burn_rate).min(RUNWAY_CAP_MONTHS)
    } else if liquid_balance > 0.0 {
        RUNWAY_CAP_MONTHS
    } else {
        0.0
    };

    let stability_ratio = if burn_rate > 0.0 {
        cash_flow.monthly_income / burn_rate
    } else if cash_flow.monthly_income > 0.0 {
        2.0
    } else {
        1.0
    };

    let score = risk_score(runway_months, stability_ratio, cash_flow.savings_ratio);

    RiskMetrics {
        burn_rate,
        runway_months,
        stability_ratio,
        savings_ratio: cash_flow.savings_ratio,
        score,
        label: label_for(score),
    }
}

fn risk_score(runway_months: f64, stability_ratio: f64, savings_ratio: f64) -> u8 {
    let runway_norm = normalize(runway_months.min(12.0), 0.0, 12.0);
    let stability_norm = normalize(stability_ratio, 0.5, 2.0);
    let raw = 40.0 * runway_norm + 30.0 * stability_norm + 30.0 * savings_ratio;
    raw.round().clamp(0.0, 100.0) as u8
}

fn label_for(score: u8) -> RiskLabel {
    if score >= 70 {
        RiskLabel::Low
    } else if score >= 40 {
        RiskLabel::Moderate
    } else {
        RiskLabel::High
    }
}

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn txn(days_ago: i64, kind: TransactionKind, amount: f64, today: NaiveDate) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            date: today - Duration::days(days_ago),
            label: "txn".into(),
            description: String::new(),
            account_id: Uuid::new_v4(),
            kind,
            amount,
            currency: "USD".into(),
            recurring: false,
        }
    }

    fn account(kind: &str, balance: f64) -> Account {
        Account {
            id: Uuid::new_v4(),
            name: kind.to_string(),
            kind: kind.to_string(),
            currency: "USD".into(),
            balance,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
    }

    #[test]
    fn cash_flow_windows_and_scaling() {
        let today = today();
        let transactions = vec![
            txn(5, TransactionKind::Income, 5000.0, today),
            txn(7, TransactionKind::Expense, 1500.0, today),
            // Inside the 60-day burn window but outside the 30-day flow window.
            txn(45, TransactionKind::Expense, 1500.0, today),
            // Outside both windows.
            txn(90, TransactionKind::Expense, 9999.0, today),
        ];
        let cash = trailing_cash_flow(&transactions, today);
        assert_eq!(cash.monthly_income, 5000.0);
        assert_eq!(cash.monthly_expenses, 1500.0);
        assert_eq!(cash.monthly_savings, 3500.0);
        assert!((cash.burn_rate - 1500.0).abs() < 1e-9);
        assert!((cash.savings_ratio - 0.7).abs() < 1e-9);
    }

    #[test]
    fn zero_income_means_zero_savings_ratio() {
        let today = today();
        let transactions = vec![txn(3, TransactionKind::Expense, 100.0, today)];
        let cash = trailing_cash_flow(&transactions, today);
        assert_eq!(cash.savings_ratio, 0.0);
        assert_eq!(cash.monthly_savings, -100.0);
    }

    #[test]
    fn liquid_balance_skips_investment_like_kinds() {
        let accounts = vec![
            account("Checking", 1000.0),
            account("Savings", 2000.0),
            account("Investment", 50000.0),
            account("Crypto", 300.0),
        ];
        assert_eq!(liquid_balance(&accounts), 3000.0);
    }

    #[test]
    fn risk_profile_without_activity_is_neutral() {
        let today = today();
        let risk = risk_profile(&[], 1000.0, today);
        assert_eq!(risk.score, 70);
        assert_eq!(risk.label, RiskLabel::Low);
        assert_eq!(risk.runway_months, RUNWAY_CAP_MONTHS);
    }

    #[test]
    fn healthy_profile_scores_low_risk() {
        let today = today();
        let transactions = vec![
            txn(5, TransactionKind::Income, 5000.0, today),
            txn(7, TransactionKind::Expense, 925.0, today),
            txn(40, TransactionKind::Expense, 925.0, today),
        ];
        // Burn: 1850 over 60 days -> 925/month. Runway on 17,734.67 liquid
        // is over 12 months, stability well above 2.0.
        let risk = risk_profile(&transactions, 17_734.67, today);
        assert!(risk.runway_months > 12.0);
        assert_eq!(risk.label, RiskLabel::Low);
        assert!(risk.score >= 90, "score was {}", risk.score);
    }

    #[test]
    fn empty_everything_scores_without_panic() {
        let today = today();
        let risk = risk_profile(&[], 0.0, today);
        assert_eq!(risk.runway_months, 0.0);
        assert_eq!(risk.label, RiskLabel::Low);
    }
}
