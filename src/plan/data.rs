//! Plan inputs: profile, baseline settings, scheduled events, and micro-plans

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_retirement_age() -> i32 {
    65
}

/// Category of a scheduled event
///
/// Only `Contribution` is income-like; every other category is an outflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Contribution,
    Expense,
    Purchase,
    Housing,
    Education,
    Healthcare,
    Travel,
    Other,
}

impl EventType {
    pub fn is_income(&self) -> bool {
        matches!(self, EventType::Contribution)
    }
}

/// How often an event recurs from its start date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFrequency {
    /// Only in the start month
    Once,
    /// Every month from the start month
    Monthly,
    /// Every year in the start date's calendar month
    Yearly,
}

/// Birth date and expected lifespan; together they fix the projection horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeProfile {
    pub birth_date: NaiveDate,
    pub life_expectancy_years: u32,
}

/// Baseline assumptions used when no micro-plan is active
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeSettings {
    /// Net worth at the start of the projection
    pub base_net_worth: f64,

    /// Monthly income before retirement, in today's money
    pub base_monthly_income: f64,

    /// Monthly expenses, in today's money
    pub base_monthly_expenses: f64,

    /// Planned monthly contribution. Reported only; the loop derives
    /// contributions from income minus expenses.
    pub monthly_contribution: f64,

    /// Expected nominal return, yearly percent
    pub expected_return_yearly: f64,

    /// Inflation, yearly percent
    pub inflation_yearly: f64,

    pub inflate_income: bool,
    pub inflate_expenses: bool,
    pub inflate_retirement_income: bool,

    #[serde(default = "default_retirement_age")]
    pub retirement_age: i32,

    /// Monthly income once `retirement_age` is reached
    pub retirement_monthly_income: f64,
}

impl Default for LifeSettings {
    fn default() -> Self {
        Self {
            base_net_worth: 0.0,
            base_monthly_income: 0.0,
            base_monthly_expenses: 0.0,
            monthly_contribution: 0.0,
            expected_return_yearly: 0.0,
            inflation_yearly: 0.0,
            inflate_income: false,
            inflate_expenses: false,
            inflate_retirement_income: false,
            retirement_age: default_retirement_age(),
            retirement_monthly_income: 0.0,
        }
    }
}

/// A scheduled cash-flow item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,

    /// Start date
    pub date: NaiveDate,

    /// Inclusive end date; open-ended when absent
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Amount per occurrence. Outflows use the magnitude, so the sign only
    /// matters for contributions.
    pub amount: f64,

    pub frequency: EventFrequency,

    /// Stored with the event but not used to bound monthly events;
    /// `end_date` does that.
    #[serde(default)]
    pub duration_months: Option<u32>,

    /// Stored with the event; amounts are not inflation-adjusted.
    #[serde(default)]
    pub inflation_indexed: bool,
}

impl LifeEvent {
    pub fn new(event_type: EventType, date: NaiveDate, amount: f64, frequency: EventFrequency) -> Self {
        Self {
            event_type,
            date,
            end_date: None,
            amount,
            frequency,
            duration_months: None,
            inflation_indexed: false,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// Staged override of baseline income and expenses, effective from the
/// month of `effective_date` until a later plan takes over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeMicroPlan {
    pub effective_date: NaiveDate,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
}

/// Everything a single projection needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    pub profile: LifeProfile,
    pub settings: LifeSettings,
    #[serde(default)]
    pub events: Vec<LifeEvent>,
    #[serde(default)]
    pub micro_plans: Vec<LifeMicroPlan>,
}

impl ProjectionParams {
    pub fn new(profile: LifeProfile, settings: LifeSettings) -> Self {
        Self {
            profile,
            settings,
            events: Vec::new(),
            micro_plans: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_contribution_is_income() {
        assert!(EventType::Contribution.is_income());
        for t in [
            EventType::Expense,
            EventType::Purchase,
            EventType::Housing,
            EventType::Education,
            EventType::Healthcare,
            EventType::Travel,
            EventType::Other,
        ] {
            assert!(!t.is_income(), "{:?} should be expense-like", t);
        }
    }

    #[test]
    fn test_settings_defaults() {
        let settings: LifeSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.retirement_age, 65);
        assert_eq!(settings.retirement_monthly_income, 0.0);
        assert!(!settings.inflate_income);
        assert_eq!(settings, LifeSettings::default());
    }

    #[test]
    fn test_event_json_shape() {
        let json = r#"{
            "type": "purchase",
            "date": "2026-05-01",
            "amount": -10000,
            "frequency": "once"
        }"#;
        let event: LifeEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, EventType::Purchase);
        assert_eq!(event.frequency, EventFrequency::Once);
        assert_eq!(event.end_date, None);
        assert_eq!(event.duration_months, None);
        assert!(!event.inflation_indexed);
    }
}
