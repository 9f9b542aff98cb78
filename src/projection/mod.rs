//! Life projection engine

mod engine;
mod events;
mod micro_plan;
mod points;
mod state;
mod yearly;

pub use engine::{run_projection, ProjectionConfig, ProjectionEngine};
pub use events::{apply_events_for_month, EventImpact};
pub use micro_plan::{resolve_micro_plan, MicroPlanResolver};
pub use points::{LifeMonthlyPoint, LifeYearlyPoint, ProjectionResult, ProjectionSummary};
pub use state::ProjectionState;
pub use yearly::aggregate_yearly;
