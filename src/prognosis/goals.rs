use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::domain::{Goal, GoalStatus};

/// Feasibility thresholds relative to the required monthly contribution.
const ON_TRACK_MARGIN: f64 = 1.1;
const AT_RISK_MARGIN: f64 = 0.7;

/// Feasibility verdict for a single goal. Never written back to the record;
/// the stored status remains whatever the user set.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalAssessment {
    pub goal_id: Uuid,
    pub name: String,
    pub months_remaining: u32,
    pub required_monthly_savings: f64,
    pub actual_monthly_savings: f64,
    pub status: GoalStatus,
}

/// Whole calendar months from `today` to `target`, floored at one so a due
/// or overdue goal still yields a finite required contribution.
pub fn months_remaining(today: NaiveDate, target: NaiveDate) -> u32 {
    let months = (target.year() - today.year()) * 12 + target.month() as i32
        - today.month() as i32;
    months.max(1) as u32
}

pub fn assess_goals(goals: &[Goal], monthly_savings: f64, today: NaiveDate) -> Vec<GoalAssessment> {
    goals
        .iter()
        .map(|goal| {
            let months = months_remaining(today, goal.target_date);
            let required = goal.target_amount / months as f64;
            let status = if monthly_savings >= required * ON_TRACK_MARGIN {
                GoalStatus::OnTrack
            } else if monthly_savings >= required * AT_RISK_MARGIN {
                GoalStatus::AtRisk
            } else {
                GoalStatus::Unrealistic
            };
            GoalAssessment {
                goal_id: goal.id,
                name: goal.name.clone(),
                months_remaining: months,
                required_monthly_savings: required,
                actual_monthly_savings: monthly_savings,
                status,
            }
        })
        .collect()
}

/// Average pressure across assessments: on-track goals contribute nothing,
/// at-risk goals half weight, unrealistic goals full weight.
pub fn average_pressure(assessments: &[GoalAssessment]) -> f64 {
    if assessments.is_empty() {
        return 0.0;
    }
    let total: f64 = assessments
        .iter()
        .map(|assessment| match assessment.status {
            GoalStatus::OnTrack => 0.0,
            GoalStatus::AtRisk => 0.5,
            GoalStatus::Unrealistic => 1.0,
        })
        .sum();
    total / assessments.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(name: &str, target_amount: f64, target_date: NaiveDate) -> Goal {
        Goal {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            target_date,
            priority: 1,
            status: GoalStatus::OnTrack,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()
    }

    #[test]
    fn months_remaining_floors_at_one() {
        let today = today();
        assert_eq!(
            months_remaining(today, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()),
            10
        );
        assert_eq!(
            months_remaining(today, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()),
            1
        );
        assert_eq!(
            months_remaining(today, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            1
        );
    }

    #[test]
    fn thresholds_split_statuses() {
        let today = today();
        // 12 months out, 12,000 target: 1,000/month required.
        let goals = vec![goal(
            "Fund",
            12_000.0,
            NaiveDate::from_ymd_opt(2027, 2, 15).unwrap(),
        )];
        let on_track = assess_goals(&goals, 1100.0, today);
        assert_eq!(on_track[0].status, GoalStatus::OnTrack);
        let at_risk = assess_goals(&goals, 800.0, today);
        assert_eq!(at_risk[0].status, GoalStatus::AtRisk);
        let unrealistic = assess_goals(&goals, 500.0, today);
        assert_eq!(unrealistic[0].status, GoalStatus::Unrealistic);
    }

    #[test]
    fn pressure_averages_statuses() {
        let today = today();
        let goals = vec![
            goal("A", 1.0, NaiveDate::from_ymd_opt(2027, 2, 15).unwrap()),
            goal("B", 1_000_000.0, NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()),
        ];
        let assessments = assess_goals(&goals, 1000.0, today);
        assert_eq!(assessments[0].status, GoalStatus::OnTrack);
        assert_eq!(assessments[1].status, GoalStatus::Unrealistic);
        assert!((average_pressure(&assessments) - 0.5).abs() < 1e-9);
        assert_eq!(average_pressure(&[]), 0.0);
    }
}
