use std::fmt::Write;

use chrono::NaiveDate;

use crate::currency::format_amount;
use crate::domain::{GoalStatus, Profile, Settings};
use crate::prognosis::allocation::AllocationAdvice;
use crate::prognosis::goals::GoalAssessment;
use crate::prognosis::metrics::{CashFlowMetrics, RiskLabel, RiskMetrics, RUNWAY_CAP_MONTHS};

/// Renders the prognosis body. Markdown-flavored plain text; the front end
/// displays it verbatim.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render(
    net_worth: f64,
    cash_flow: &CashFlowMetrics,
    risk: &RiskMetrics,
    assessments: &[GoalAssessment],
    advice: &AllocationAdvice,
    profile: &Profile,
    settings: &Settings,
    today: NaiveDate,
) -> String {
    let money = |amount: f64| format_amount(amount, &profile.base_currency, settings.currency_display);
    let savings_pct = (cash_flow.savings_ratio * 100.0).round() as i64;

    let mut body = String::new();
    let _ = writeln!(
        body,
        "Based on your current financial data (as of {today}), here are your key insights:"
    );
    body.push('\n');

    body.push_str("**Summary:**\n");
    let _ = writeln!(body, "\u{2022} Net Worth: {}", money(net_worth));
    let _ = writeln!(body, "\u{2022} Monthly Income: {}", money(cash_flow.monthly_income));
    let _ = writeln!(body, "\u{2022} Monthly Expenses: {}", money(cash_flow.monthly_expenses));
    let _ = writeln!(body, "\u{2022} Savings Rate: {savings_pct}%");
    body.push('\n');

    if !assessments.is_empty() {
        body.push_str("**Goals:**\n");
        for assessment in assessments {
            let _ = writeln!(
                body,
                "\u{2022} {}: {} (requires {}/month over {} months)",
                assessment.name,
                assessment.status,
                money(assessment.required_monthly_savings),
                assessment.months_remaining,
            );
        }
        body.push('\n');
    }

    body.push_str("**Risk:**\n");
    let runway = if risk.runway_months >= RUNWAY_CAP_MONTHS {
        "12+ months".to_string()
    } else {
        format!("{:.1} months", risk.runway_months)
    };
    let _ = writeln!(
        body,
        "\u{2022} Burn rate {}/month with a liquid runway of {}",
        money(risk.burn_rate),
        runway,
    );
    let _ = writeln!(
        body,
        "\u{2022} Risk score {}/100 ({})",
        risk.score,
        risk.label.as_str()
    );
    body.push('\n');

    body.push_str("**Recommended Allocation:**\n");
    let mix = &advice.recommended;
    let _ = writeln!(
        body,
        "\u{2022} Equity {:.0}%, Debt {:.0}%, Cash {:.0}%, Other {:.0}%",
        mix.equity * 100.0,
        mix.debt * 100.0,
        mix.cash * 100.0,
        mix.other * 100.0,
    );
    if let Some(alt) = &advice.aggressive_alternative {
        let _ = writeln!(
            body,
            "\u{2022} Aggressive alternative (exceeds your measured capacity): Equity {:.0}%, Debt {:.0}%, Cash {:.0}%, Other {:.0}%",
            alt.equity * 100.0,
            alt.debt * 100.0,
            alt.cash * 100.0,
            alt.other * 100.0,
        );
    }
    body.push('\n');

    body.push_str("**Recommendations:**\n");
    let mut recommendations: Vec<String> = Vec::new();
    for assessment in assessments {
        match assessment.status {
            GoalStatus::OnTrack => {}
            GoalStatus::AtRisk => recommendations.push(format!(
                "Increase monthly contributions toward {} to roughly {} to stay on schedule.",
                assessment.name,
                money(assessment.required_monthly_savings)
            )),
            GoalStatus::Unrealistic => recommendations.push(format!(
                "Revisit the target or timeline for {}; the required {} per month is well beyond your current savings.",
                assessment.name,
                money(assessment.required_monthly_savings)
            )),
        }
    }
    if savings_pct >= 50 {
        recommendations.push(format!(
            "Your savings rate of {savings_pct}% shows strong expense discipline. Consider automating an additional share of income toward long-term investments."
        ));
    } else if cash_flow.monthly_income > 0.0 {
        recommendations.push(format!(
            "Your savings rate of {savings_pct}% leaves little buffer. Review recurring expenses for cuts."
        ));
    }
    if risk.label == RiskLabel::High {
        recommendations
            .push("Build up your liquid reserves before taking on additional investment risk.".into());
    }
    if recommendations.is_empty() {
        recommendations
            .push("Keep following your current plan and review your portfolio quarterly.".into());
    }
    for (index, text) in recommendations.iter().enumerate() {
        let _ = writeln!(body, "{}. {text}", index + 1);
    }

    body.trim_end().to_string()
}
