//! Per-month event impact
//!
//! Monthly events move the recurring income/expense lines. Yearly and once
//! events land in the "extra" lines. Once outflows are also debited from net
//! worth directly, and are never part of the contribution that gets
//! invested, so a lump purchase is not counted twice.

use crate::calendar::month_key;
use crate::plan::{EventFrequency, LifeEvent};
use chrono::{Datelike, NaiveDate};

/// Event-adjusted cash flows for one month
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventImpact {
    /// Recurring income, base plus monthly income events
    pub income: f64,

    /// Recurring expenses, base plus monthly expense events
    pub expenses: f64,

    /// Income from yearly and once events
    pub extra_income: f64,

    /// Expenses from yearly and once events
    pub extra_expenses: f64,

    /// Lump sums debited straight from net worth
    pub one_time_outflow: f64,

    /// Lump sums credited straight to net worth. No event category
    /// produces one at present.
    pub one_time_inflow: f64,
}

impl EventImpact {
    pub fn total_income(&self) -> f64 {
        self.income + self.extra_income
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses + self.extra_expenses
    }

    /// Net direct adjustment to net worth
    pub fn one_time_net(&self) -> f64 {
        self.one_time_inflow - self.one_time_outflow
    }
}

/// Whether `event` passes its `[date, end_date]` window for `month_date`.
/// Open-ended events always pass.
fn within_window(event: &LifeEvent, month_date: NaiveDate) -> bool {
    match event.end_date {
        Some(end) => month_date >= event.date && month_date <= end,
        None => true,
    }
}

/// Apply every scheduled event to this month's base income and expenses
pub fn apply_events_for_month(
    base_income: f64,
    base_expenses: f64,
    month_date: NaiveDate,
    events: &[LifeEvent],
) -> EventImpact {
    let mut impact = EventImpact {
        income: base_income,
        expenses: base_expenses,
        ..Default::default()
    };

    let current_key = month_key(month_date);

    for event in events {
        if !within_window(event, month_date) {
            continue;
        }

        let is_income = event.event_type.is_income();
        let magnitude = event.amount.abs();
        let start_key = month_key(event.date);

        match event.frequency {
            EventFrequency::Once => {
                if current_key != start_key {
                    continue;
                }
                if is_income {
                    impact.extra_income += event.amount;
                } else {
                    impact.one_time_outflow += magnitude;
                    impact.extra_expenses += magnitude;
                }
            }
            EventFrequency::Monthly => {
                if current_key < start_key {
                    continue;
                }
                if is_income {
                    impact.income += event.amount;
                } else {
                    impact.expenses += magnitude;
                }
            }
            EventFrequency::Yearly => {
                if month_date.month() != event.date.month() || month_date.year() < event.date.year() {
                    continue;
                }
                if is_income {
                    impact.extra_income += event.amount;
                } else {
                    impact.extra_expenses += magnitude;
                }
            }
        }
    }

    impact
}
