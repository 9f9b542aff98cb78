//! Life Projection - deterministic month-by-month net worth forecasting
//!
//! This library provides:
//! - A monthly projection loop from today to the end of a projected lifespan
//! - Compounding returns, inflation indexing, and the switch to retirement income
//! - Scheduled life events (once, monthly, yearly) and staged micro-plans
//! - Yearly roll-ups, summaries, and CSV export
//! - Batch and what-if runs across scenarios

pub mod calendar;
pub mod error;
pub mod export;
pub mod plan;
pub mod projection;
pub mod rates;
pub mod scenario;

// Re-export commonly used types
pub use error::{PlanError, PlanResult};
pub use plan::{
    EventFrequency, EventType, LifeEvent, LifeMicroPlan, LifeProfile, LifeSettings,
    ProjectionParams, Scenario,
};
pub use projection::{
    run_projection, LifeMonthlyPoint, LifeYearlyPoint, ProjectionConfig, ProjectionEngine,
    ProjectionResult, ProjectionSummary,
};
pub use rates::yearly_to_monthly_rate;
pub use scenario::ScenarioRunner;
