use chrono::NaiveDate;
use finboard_core::domain::GoalStatus;
use finboard_core::prognosis::{
    assess_goals, liquid_balance, risk_profile, trailing_cash_flow, RiskLabel,
};
use finboard_core::store::DashboardStore;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
}

#[test]
fn demo_cash_flow_numbers_are_exact() {
    let store = DashboardStore::with_demo_data();
    let cash = trailing_cash_flow(store.transactions(), reference_date());
    assert_eq!(cash.monthly_income, 5000.0);
    assert_eq!(cash.monthly_expenses, 1850.0);
    assert_eq!(cash.monthly_savings, 3150.0);
    // 1,850 of expenses over the 60-day window scale to 925/month.
    assert!((cash.burn_rate - 925.0).abs() < 1e-9);
    assert!((cash.savings_ratio - 0.815).abs() < 1e-9);
}

#[test]
fn demo_risk_profile_is_low() {
    let store = DashboardStore::with_demo_data();
    // Investment Portfolio is excluded from the liquid balance.
    let liquid = liquid_balance(store.accounts());
    assert!((liquid - 17_734.67).abs() < 1e-9);

    let risk = risk_profile(store.transactions(), liquid, reference_date());
    assert!(risk.runway_months > 12.0);
    assert_eq!(risk.label, RiskLabel::Low);
    assert!(risk.score >= 90, "score was {}", risk.score);
}

#[test]
fn demo_goal_assessments_split_as_expected() {
    let store = DashboardStore::with_demo_data();
    let cash = trailing_cash_flow(store.transactions(), reference_date());
    let assessments = assess_goals(store.goals(), cash.monthly_savings, reference_date());
    assert_eq!(assessments.len(), 2);

    // Emergency Fund's target date is already past: one month remaining,
    // the full 10,000 required, far beyond 3,150/month of savings.
    let emergency = &assessments[0];
    assert_eq!(emergency.months_remaining, 1);
    assert_eq!(emergency.status, GoalStatus::Unrealistic);

    // Down Payment: 50,000 over 16 months needs 3,125/month; savings of
    // 3,150 clear the 70% bar but not the 110% bar.
    let down_payment = &assessments[1];
    assert_eq!(down_payment.months_remaining, 16);
    assert!((down_payment.required_monthly_savings - 3125.0).abs() < 1e-9);
    assert_eq!(down_payment.status, GoalStatus::AtRisk);

    // Assessment never rewrites the stored records.
    assert_eq!(store.goals()[0].status, GoalStatus::OnTrack);
}

#[test]
fn generated_report_reflects_the_data() {
    let mut store = DashboardStore::with_demo_data();
    assert!(store.prognosis_report().is_none());

    store.generate_prognosis_at(reference_date());
    let report = store.prognosis_report().expect("report stored");
    assert_eq!(report.generated_at, reference_date());
    assert!(report.body.contains("Net Worth: $46,485.17"));
    assert!(report.body.contains("Monthly Income: $5,000.00"));
    assert!(report.body.contains("Monthly Expenses: $1,850.00"));
    assert!(report.body.contains("Savings Rate: 82%"));
    assert!(report.body.contains("Emergency Fund: Unrealistic"));
    assert!(report.body.contains("Down Payment: At Risk"));
    assert!(report.body.contains("**Recommended Allocation:**"));
}

#[test]
fn report_honors_currency_code_display() {
    let mut store = DashboardStore::with_demo_data();
    store.update_settings(finboard_core::domain::SettingsPatch {
        currency_display: Some(finboard_core::domain::CurrencyDisplay::Code),
        ..Default::default()
    });
    store.generate_prognosis_at(reference_date());
    let report = store.prognosis_report().unwrap();
    assert!(report.body.contains("Net Worth: 46,485.17 USD"));
}

#[test]
fn regeneration_overwrites_the_previous_report() {
    let mut store = DashboardStore::with_demo_data();
    store.generate_prognosis_at(reference_date());
    let first = store.prognosis_report().unwrap().clone();

    let later = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    store.generate_prognosis_at(later);
    let second = store.prognosis_report().unwrap();
    assert_eq!(second.generated_at, later);
    assert_ne!(first.body, second.body);
}

#[test]
fn empty_store_still_produces_a_report() {
    let mut store = DashboardStore::new();
    store.generate_prognosis_at(reference_date());
    let report = store.prognosis_report().unwrap();
    assert!(report.body.contains("Net Worth: $0.00"));
    assert!(report.body.contains("Savings Rate: 0%"));
    assert!(!report.body.contains("**Goals:**"));
    assert!(report
        .body
        .contains("Keep following your current plan and review your portfolio quarterly."));
}
