//! Loop state carried from one projected month to the next

/// Running state of a projection
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Nominal net worth
    pub net_worth: f64,

    /// Inflation factor compounded from the start through the end of the
    /// last completed month. Starts at 1.0.
    pub accumulated_inflation: f64,

    /// First month index (>= 1) where net worth was seen at or below zero.
    /// Set at most once.
    pub first_zero_or_negative: Option<usize>,

    /// Effective month key of the micro-plan used last month
    pub active_plan_key: Option<i32>,
}

impl ProjectionState {
    pub fn new(base_net_worth: f64) -> Self {
        Self {
            net_worth: base_net_worth,
            accumulated_inflation: 1.0,
            first_zero_or_negative: None,
            active_plan_key: None,
        }
    }

    /// Scale a base amount into this month's nominal terms
    pub fn inflate(&self, amount: f64, indexed: bool) -> f64 {
        if indexed {
            amount * self.accumulated_inflation
        } else {
            amount
        }
    }

    /// Book lump sums that bypass income and expenses
    pub fn apply_one_time(&mut self, net: f64) {
        self.net_worth += net;
    }

    /// Latch the first zero crossing. The starting month never trips it.
    /// Returns true only on the call that sets the latch.
    pub fn check_zero_crossing(&mut self, month_index: usize) -> bool {
        if month_index >= 1 && self.net_worth <= 0.0 && self.first_zero_or_negative.is_none() {
            self.first_zero_or_negative = Some(month_index);
            return true;
        }
        false
    }

    /// Invest the contribution, then grow the whole balance for one month.
    /// Returns the nominal gain.
    pub fn apply_contribution_and_returns(&mut self, contribution: f64, monthly_return_rate: f64) -> f64 {
        let pre_return = self.net_worth + contribution;
        let returns = pre_return * monthly_return_rate;
        self.net_worth = pre_return + returns;
        returns
    }

    pub fn advance_inflation(&mut self, monthly_inflation_rate: f64) {
        self.accumulated_inflation *= 1.0 + monthly_inflation_rate;
    }

    pub fn real_net_worth(&self) -> f64 {
        self.net_worth / self.accumulated_inflation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_latch_ignores_first_month() {
        let mut state = ProjectionState::new(-10.0);
        assert!(!state.check_zero_crossing(0));
        assert_eq!(state.first_zero_or_negative, None);
        assert!(state.check_zero_crossing(1));
        assert_eq!(state.first_zero_or_negative, Some(1));
    }

    #[test]
    fn test_latch_is_set_once() {
        let mut state = ProjectionState::new(0.0);
        assert!(state.check_zero_crossing(3));
        state.net_worth = 500.0;
        assert!(!state.check_zero_crossing(4));
        state.net_worth = -1.0;
        assert!(!state.check_zero_crossing(5));
        assert_eq!(state.first_zero_or_negative, Some(3));
    }

    #[test]
    fn test_returns_applied_after_contribution() {
        let mut state = ProjectionState::new(1000.0);
        let returns = state.apply_contribution_and_returns(200.0, 0.01);
        assert_relative_eq!(returns, 12.0);
        assert_relative_eq!(state.net_worth, 1212.0);
    }

    #[test]
    fn test_negative_balance_compounds_downward() {
        let mut state = ProjectionState::new(-1000.0);
        let returns = state.apply_contribution_and_returns(0.0, 0.01);
        assert_relative_eq!(returns, -10.0);
        assert_relative_eq!(state.net_worth, -1010.0);
    }

    #[test]
    fn test_inflation_and_real_value() {
        let mut state = ProjectionState::new(1100.0);
        assert_eq!(state.inflate(100.0, true), 100.0);
        state.advance_inflation(0.1);
        assert_relative_eq!(state.inflate(100.0, true), 110.0);
        assert_eq!(state.inflate(100.0, false), 100.0);
        assert_relative_eq!(state.real_net_worth(), 1000.0);
    }
}
