//! Projection output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One projected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeMonthlyPoint {
    /// First day of the month
    pub date: NaiveDate,
    pub age: i32,

    /// Nominal net worth at month end
    pub net_worth: f64,

    /// Net worth deflated by inflation through this month
    pub real_net_worth: f64,

    pub income: f64,
    pub expenses: f64,

    /// Income minus expenses, floored at zero
    pub contribution: f64,

    /// Nominal investment gain for the month
    pub returns: f64,
}

/// One calendar year. Stock fields are the year's last month; flow fields
/// are summed over the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeYearlyPoint {
    pub year: i32,
    pub age: i32,
    pub net_worth: f64,
    pub real_net_worth: f64,
    pub income: f64,
    pub expenses: f64,
    pub contribution: f64,
    pub returns: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub monthly: Vec<LifeMonthlyPoint>,
    pub yearly: Vec<LifeYearlyPoint>,

    /// Index into `monthly` of the first month net worth fell to zero or below
    pub first_month_with_zero_or_negative_net_worth: Option<usize>,
}

impl ProjectionResult {
    /// Calendar month in which net worth first ran out
    pub fn depletion_date(&self) -> Option<NaiveDate> {
        self.first_month_with_zero_or_negative_net_worth
            .and_then(|idx| self.monthly.get(idx))
            .map(|p| p.date)
    }

    /// First month at the given age
    pub fn point_at_age(&self, age: i32) -> Option<&LifeMonthlyPoint> {
        self.monthly.iter().find(|p| p.age == age)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_income: f64 = self.monthly.iter().map(|p| p.income).sum();
        let total_expenses: f64 = self.monthly.iter().map(|p| p.expenses).sum();
        let total_contributions: f64 = self.monthly.iter().map(|p| p.contribution).sum();
        let total_returns: f64 = self.monthly.iter().map(|p| p.returns).sum();

        let final_net_worth = self.monthly.last().map(|p| p.net_worth).unwrap_or(0.0);
        let final_real_net_worth = self.monthly.last().map(|p| p.real_net_worth).unwrap_or(0.0);

        // First point wins ties so the peak date is the earliest one
        let peak = self
            .monthly
            .iter()
            .fold(None::<&LifeMonthlyPoint>, |best, p| match best {
                Some(b) if b.net_worth >= p.net_worth => Some(b),
                _ => Some(p),
            });

        ProjectionSummary {
            total_months: self.monthly.len(),
            final_net_worth,
            final_real_net_worth,
            peak_net_worth: peak.map(|p| p.net_worth).unwrap_or(0.0),
            peak_date: peak.map(|p| p.date),
            total_income,
            total_expenses,
            total_contributions,
            total_returns,
            depletion_date: self.depletion_date(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: usize,
    pub final_net_worth: f64,
    pub final_real_net_worth: f64,
    pub peak_net_worth: f64,
    pub peak_date: Option<NaiveDate>,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_contributions: f64,
    pub total_returns: f64,
    pub depletion_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: u32, age: i32, net_worth: f64) -> LifeMonthlyPoint {
        LifeMonthlyPoint {
            date: NaiveDate::from_ymd_opt(2024, month, 1).unwrap(),
            age,
            net_worth,
            real_net_worth: net_worth,
            income: 100.0,
            expenses: 60.0,
            contribution: 40.0,
            returns: 1.0,
        }
    }

    fn result() -> ProjectionResult {
        ProjectionResult {
            monthly: vec![
                point(1, 40, 50.0),
                point(2, 40, 80.0),
                point(3, 41, 80.0),
                point(4, 41, -5.0),
            ],
            yearly: Vec::new(),
            first_month_with_zero_or_negative_net_worth: Some(3),
        }
    }

    #[test]
    fn test_summary_totals() {
        let summary = result().summary();
        assert_eq!(summary.total_months, 4);
        assert_eq!(summary.total_income, 400.0);
        assert_eq!(summary.total_expenses, 240.0);
        assert_eq!(summary.total_contributions, 160.0);
        assert_eq!(summary.total_returns, 4.0);
        assert_eq!(summary.final_net_worth, -5.0);
    }

    #[test]
    fn test_peak_keeps_earliest_month() {
        let summary = result().summary();
        assert_eq!(summary.peak_net_worth, 80.0);
        assert_eq!(summary.peak_date, NaiveDate::from_ymd_opt(2024, 2, 1));
    }

    #[test]
    fn test_depletion_and_age_lookup() {
        let r = result();
        assert_eq!(r.depletion_date(), NaiveDate::from_ymd_opt(2024, 4, 1));
        assert_eq!(r.point_at_age(41).unwrap().date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(r.point_at_age(90).is_none());
    }

    #[test]
    fn test_empty_summary() {
        let empty = ProjectionResult {
            monthly: Vec::new(),
            yearly: Vec::new(),
            first_month_with_zero_or_negative_net_worth: None,
        };
        let summary = empty.summary();
        assert_eq!(summary.total_months, 0);
        assert_eq!(summary.peak_date, None);
        assert_eq!(summary.depletion_date, None);
    }
}
