use crate::domain::RiskAppetite;

/// Portfolio split as fractions summing to 1.0 (after rounding).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetMix {
    pub equity: f64,
    pub debt: f64,
    pub cash: f64,
    pub other: f64,
}

impl AssetMix {
    pub fn total(&self) -> f64 {
        self.equity + self.debt + self.cash + self.other
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllocationAdvice {
    pub recommended: AssetMix,
    /// Present when the stated appetite is aggressive but measured capacity
    /// is low; shows the riskier split the user is asking for anyway.
    pub aggressive_alternative: Option<AssetMix>,
}

/// Rule-based allocation: age baseline, horizon, goal pressure, appetite,
/// and risk capacity, each nudging the equity share before clamping.
pub fn recommend_allocation(
    age: u32,
    appetite: RiskAppetite,
    risk_capacity_score: u8,
    goal_time_horizon_years: u32,
    avg_goal_pressure: f64,
) -> AllocationAdvice {
    let baseline_equity = (100 - age as i32).clamp(20, 80);

    let horizon_adjustment = if goal_time_horizon_years > 15 {
        10
    } else if goal_time_horizon_years > 10 {
        5
    } else if goal_time_horizon_years < 3 {
        -10
    } else {
        0
    };

    let pressure_adjustment = -((avg_goal_pressure * 15.0).round() as i32);

    let appetite_adjustment = match appetite {
        RiskAppetite::Conservative => -10,
        RiskAppetite::Moderate => 0,
        RiskAppetite::Aggressive => 10,
    };

    let capacity = risk_capacity_score as f64 / 100.0;
    let capacity_adjustment = if capacity < 0.3 {
        -15
    } else if capacity < 0.5 {
        -5
    } else {
        0
    };

    let equity_pct = (baseline_equity
        + horizon_adjustment
        + pressure_adjustment
        + appetite_adjustment
        + capacity_adjustment)
        .clamp(10, 80);

    let cash_pct = if capacity >= 0.7 {
        5
    } else if capacity >= 0.5 {
        10
    } else {
        15
    };
    let other_pct = 5;
    let debt_pct = (100 - equity_pct - cash_pct - other_pct).max(5);

    let total = (equity_pct + debt_pct + cash_pct + other_pct) as f64;
    let recommended = AssetMix {
        equity: round3(equity_pct as f64 / total),
        debt: round3(debt_pct as f64 / total),
        cash: round3(cash_pct as f64 / total),
        other: round3(other_pct as f64 / total),
    };

    let aggressive_alternative = if appetite == RiskAppetite::Aggressive && capacity < 0.5 {
        let agg_equity = (equity_pct + 15).min(75);
        let agg_cash = 5;
        let agg_debt = 95 - agg_equity - agg_cash;
        Some(AssetMix {
            equity: round3(agg_equity as f64 / 100.0),
            debt: round3(agg_debt as f64 / 100.0),
            cash: round3(agg_cash as f64 / 100.0),
            other: 0.05,
        })
    } else {
        None
    };

    AllocationAdvice {
        recommended,
        aggressive_alternative,
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_mix_sums_to_one() {
        let advice = recommend_allocation(30, RiskAppetite::Moderate, 85, 10, 0.25);
        assert!((advice.recommended.total() - 1.0).abs() < 0.005);
        assert!(advice.aggressive_alternative.is_none());
    }

    #[test]
    fn young_aggressive_high_capacity_leans_equity() {
        let advice = recommend_allocation(25, RiskAppetite::Aggressive, 90, 20, 0.0);
        // 75 baseline + 10 horizon + 10 appetite clamps to 80.
        assert!((advice.recommended.equity - 0.8).abs() < 0.01);
        assert!((advice.recommended.cash - 0.05).abs() < 0.01);
    }

    #[test]
    fn low_capacity_gets_conservative_floor() {
        let advice = recommend_allocation(70, RiskAppetite::Conservative, 10, 2, 1.0);
        // 30 baseline - 10 horizon - 15 pressure - 10 appetite - 15 capacity
        // clamps to the 10% equity floor.
        assert!((advice.recommended.equity - 0.1).abs() < 0.01);
    }

    #[test]
    fn aggressive_appetite_with_low_capacity_offers_alternative() {
        let advice = recommend_allocation(40, RiskAppetite::Aggressive, 30, 8, 0.5);
        let alternative = advice.aggressive_alternative.expect("alternative present");
        assert!(alternative.equity > advice.recommended.equity);
        assert!((alternative.total() - 1.0).abs() < 0.005);
    }
}
