//! Load scenarios from JSON documents
//!
//! A scenario file holds one `ProjectionParams` plus an optional name:
//!
//! ```json
//! {
//!   "name": "baseline",
//!   "profile": { "birth_date": "1990-01-01", "life_expectancy_years": 90 },
//!   "settings": { "base_net_worth": 100000, "base_monthly_income": 5000 },
//!   "events": [],
//!   "micro_plans": []
//! }
//! ```

use super::ProjectionParams;
use crate::error::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Longest lifespan a scenario may ask for
pub const MAX_LIFE_EXPECTANCY_YEARS: u32 = 150;

/// A named set of projection inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub params: ProjectionParams,
}

impl Scenario {
    /// Reject inputs the engine treats as preconditions
    pub fn validate(&self) -> PlanResult<()> {
        let years = self.params.profile.life_expectancy_years;
        if years == 0 {
            return Err(PlanError::InvalidScenario(format!(
                "{}: life_expectancy_years must be positive",
                self.name
            )));
        }
        if years > MAX_LIFE_EXPECTANCY_YEARS {
            return Err(PlanError::InvalidScenario(format!(
                "{}: life_expectancy_years {} exceeds {}",
                self.name, years, MAX_LIFE_EXPECTANCY_YEARS
            )));
        }

        for (idx, event) in self.params.events.iter().enumerate() {
            if let Some(end) = event.end_date {
                if end < event.date {
                    return Err(PlanError::InvalidScenario(format!(
                        "{}: event {} ends ({}) before it starts ({})",
                        self.name, idx, end, event.date
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Parse, name unnamed scenarios with `fallback_name`, then validate, so
/// validation errors carry the name
fn read_scenario<R: std::io::Read>(reader: R, fallback_name: Option<&str>) -> PlanResult<Scenario> {
    let mut scenario: Scenario = serde_json::from_reader(reader)?;
    if scenario.name.is_empty() {
        if let Some(name) = fallback_name {
            scenario.name = name.to_string();
        }
    }
    scenario.validate()?;
    Ok(scenario)
}

/// Load and validate a scenario from any reader
pub fn load_scenario_from_reader<R: std::io::Read>(reader: R) -> PlanResult<Scenario> {
    read_scenario(reader, None)
}

/// Load and validate a scenario file. Unnamed scenarios take the file stem.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> PlanResult<Scenario> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PlanError::io(path, e))?;
    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned());

    let scenario = read_scenario(BufReader::new(file), stem.as_deref())?;
    log::debug!(
        "Loaded scenario '{}' ({} events, {} micro-plans)",
        scenario.name,
        scenario.params.events.len(),
        scenario.params.micro_plans.len()
    );
    Ok(scenario)
}

/// Load every `*.json` scenario in a directory, ordered by file name
pub fn load_scenarios_in_dir<P: AsRef<Path>>(dir: P) -> PlanResult<Vec<Scenario>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| PlanError::io(dir, e))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| PlanError::io(dir, e))?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(load_scenario).collect()
}
