//! Scenario runner for batch and what-if projections
//!
//! Holds one start date so every projection in a batch shares the same
//! "today", then fans the work out across threads.

use crate::plan::{LifeMicroPlan, ProjectionParams, Scenario};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use rayon::prelude::*;

/// Runs many projections against a shared configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ProjectionConfig::starting(today));
///
/// // Compare staged plans against the same baseline
/// let variants = vec![early_retirement_plans, sabbatical_plans];
/// let results = runner.run_with_micro_plans(&baseline, &variants);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }

    /// Run a single projection
    pub fn run(&self, params: &ProjectionParams) -> ProjectionResult {
        self.engine.project(params)
    }

    /// Run projections in parallel; results keep input order
    pub fn run_batch(&self, params: &[ProjectionParams]) -> Vec<ProjectionResult> {
        params.par_iter().map(|p| self.engine.project(p)).collect()
    }

    /// Run named scenarios in parallel, pairing each result with its name
    pub fn run_scenarios<'a>(&self, scenarios: &'a [Scenario]) -> Vec<(&'a str, ProjectionResult)> {
        scenarios
            .par_iter()
            .map(|s| (s.name.as_str(), self.engine.project(&s.params)))
            .collect()
    }

    /// Project the same baseline once per micro-plan set. Each set replaces
    /// the baseline's own micro-plans.
    pub fn run_with_micro_plans(
        &self,
        baseline: &ProjectionParams,
        variants: &[Vec<LifeMicroPlan>],
    ) -> Vec<ProjectionResult> {
        variants
            .par_iter()
            .map(|plans| {
                let params = ProjectionParams {
                    micro_plans: plans.clone(),
                    ..baseline.clone()
                };
                self.engine.project(&params)
            })
            .collect()
    }
}
