//! Prognosis scoring: cash-flow and risk metrics, goal feasibility, and
//! asset-allocation advice, rendered into a text report.
//!
//! Every function here is pure over the records it is given plus an explicit
//! reference date, so results are reproducible in tests.

pub mod allocation;
pub mod goals;
pub mod metrics;
mod report;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Account, Goal, Profile, Settings, Transaction};

pub use allocation::{recommend_allocation, AllocationAdvice, AssetMix};
pub use goals::{assess_goals, months_remaining, GoalAssessment};
pub use metrics::{
    liquid_balance, risk_profile, trailing_cash_flow, CashFlowMetrics, RiskLabel, RiskMetrics,
};

/// The stored outcome of a prognosis run. Absent until first generated;
/// regeneration overwrites the previous report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrognosisReport {
    pub generated_at: NaiveDate,
    pub body: String,
}

/// Runs the full prognosis pipeline over the given state.
pub fn build_report(
    accounts: &[Account],
    transactions: &[Transaction],
    goals: &[Goal],
    profile: &Profile,
    settings: &Settings,
    today: NaiveDate,
) -> PrognosisReport {
    let cash_flow = trailing_cash_flow(transactions, today);
    let liquid = liquid_balance(accounts);
    let risk = risk_profile(transactions, liquid, today);
    let assessments = assess_goals(goals, cash_flow.monthly_savings, today);

    let horizon_years = goals
        .iter()
        .map(|goal| months_remaining(today, goal.target_date))
        .min()
        .map(|months| (months / 12).max(1))
        .unwrap_or(10);
    let pressure = goals::average_pressure(&assessments);
    let advice = recommend_allocation(
        profile.age,
        profile.risk_appetite,
        risk.score,
        horizon_years,
        pressure,
    );

    let net_worth = accounts.iter().map(|account| account.balance).sum();
    let body = report::render(
        net_worth,
        &cash_flow,
        &risk,
        &assessments,
        &advice,
        profile,
        settings,
        today,
    );
    PrognosisReport {
        generated_at: today,
        body,
    }
}
