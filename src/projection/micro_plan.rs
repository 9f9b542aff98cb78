//! Micro-plan resolution
//!
//! The plan in effect for a month is the one with the latest effective month
//! at or before it. Day of month is ignored. Plans sharing an effective date
//! resolve to the one listed last.

use crate::calendar::month_key;
use crate::plan::LifeMicroPlan;
use chrono::NaiveDate;

/// Micro-plans sorted once by effective date, queried once per month
#[derive(Debug, Clone)]
pub struct MicroPlanResolver<'a> {
    sorted: Vec<&'a LifeMicroPlan>,
}

impl<'a> MicroPlanResolver<'a> {
    pub fn new(micro_plans: &'a [LifeMicroPlan]) -> Self {
        let mut sorted: Vec<&LifeMicroPlan> = micro_plans.iter().collect();
        // Stable: equal dates keep input order
        sorted.sort_by_key(|p| p.effective_date);
        Self { sorted }
    }

    /// Plan in effect for `target`, or `None` to fall back to baseline settings
    pub fn resolve(&self, target: NaiveDate) -> Option<&'a LifeMicroPlan> {
        let target_key = month_key(target);
        let eligible = self
            .sorted
            .partition_point(|p| month_key(p.effective_date) <= target_key);
        eligible.checked_sub(1).map(|idx| self.sorted[idx])
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

/// One-shot resolution without keeping the sorted index around
pub fn resolve_micro_plan(micro_plans: &[LifeMicroPlan], target: NaiveDate) -> Option<&LifeMicroPlan> {
    MicroPlanResolver::new(micro_plans).resolve(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plan(date: NaiveDate, income: f64) -> LifeMicroPlan {
        LifeMicroPlan {
            effective_date: date,
            monthly_income: income,
            monthly_expenses: 1000.0,
            monthly_contribution: 0.0,
        }
    }

    #[test]
    fn test_empty_list_resolves_to_none() {
        assert!(resolve_micro_plan(&[], ymd(2030, 1, 1)).is_none());
    }

    #[test]
    fn test_latest_eligible_wins() {
        // Listed out of order on purpose
        let plans = vec![
            plan(ymd(2030, 1, 1), 3.0),
            plan(ymd(2026, 1, 1), 1.0),
            plan(ymd(2028, 6, 1), 2.0),
        ];
        let resolver = MicroPlanResolver::new(&plans);

        assert!(resolver.resolve(ymd(2025, 12, 1)).is_none());
        assert_eq!(resolver.resolve(ymd(2026, 1, 1)).unwrap().monthly_income, 1.0);
        assert_eq!(resolver.resolve(ymd(2028, 5, 1)).unwrap().monthly_income, 1.0);
        assert_eq!(resolver.resolve(ymd(2028, 6, 1)).unwrap().monthly_income, 2.0);
        assert_eq!(resolver.resolve(ymd(2029, 12, 1)).unwrap().monthly_income, 2.0);
        assert_eq!(resolver.resolve(ymd(2060, 1, 1)).unwrap().monthly_income, 3.0);
    }

    #[test]
    fn test_day_of_month_ignored() {
        let plans = vec![plan(ymd(2027, 4, 28), 1.0)];
        // Month starts before the plan's day but is in the same month
        assert!(resolve_micro_plan(&plans, ymd(2027, 4, 1)).is_some());
        assert!(resolve_micro_plan(&plans, ymd(2027, 3, 31)).is_none());
    }

    #[test]
    fn test_same_date_later_listed_wins() {
        let plans = vec![
            plan(ymd(2027, 1, 1), 1.0),
            plan(ymd(2027, 1, 1), 2.0),
        ];
        assert_eq!(resolve_micro_plan(&plans, ymd(2027, 1, 1)).unwrap().monthly_income, 2.0);
    }

    #[test]
    fn test_same_month_later_day_wins() {
        let plans = vec![
            plan(ymd(2027, 1, 20), 2.0),
            plan(ymd(2027, 1, 5), 1.0),
        ];
        assert_eq!(resolve_micro_plan(&plans, ymd(2027, 1, 1)).unwrap().monthly_income, 2.0);
    }
}
