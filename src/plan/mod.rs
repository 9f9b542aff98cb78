//! Plan inputs and scenario loading

mod data;
pub mod loader;

pub use data::{
    EventFrequency, EventType, LifeEvent, LifeMicroPlan, LifeProfile, LifeSettings,
    ProjectionParams,
};
pub use loader::{load_scenario, load_scenario_from_reader, load_scenarios_in_dir, Scenario};
