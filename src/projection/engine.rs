//! Month-by-month net worth projection from the start date to the end of
//! the projected lifespan

use super::events::apply_events_for_month;
use super::micro_plan::MicroPlanResolver;
use super::points::{LifeMonthlyPoint, ProjectionResult};
use super::state::ProjectionState;
use super::yearly::aggregate_yearly;
use crate::calendar::{add_years, age_at, month_key, month_start_offset, months_between};
use crate::plan::{LifeSettings, ProjectionParams};
use crate::rates::yearly_to_monthly_rate;
use chrono::NaiveDate;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// "Today": month 0 of the projection. Only its year and month are used.
    pub start_date: NaiveDate,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            start_date: chrono::Local::now().date_naive(),
        }
    }
}

impl ProjectionConfig {
    pub fn starting(start_date: NaiveDate) -> Self {
        Self { start_date }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Number of months after the start month covered by the projection.
    /// The result holds one more point than this.
    pub fn horizon_months(&self, params: &ProjectionParams) -> u32 {
        let profile = &params.profile;
        let end = add_years(profile.birth_date, profile.life_expectancy_years);
        months_between(self.config.start_date, end).max(0) as u32
    }

    /// Run the projection
    pub fn project(&self, params: &ProjectionParams) -> ProjectionResult {
        let settings = &params.settings;
        let total_months = self.horizon_months(params);
        let monthly_return_rate = yearly_to_monthly_rate(settings.expected_return_yearly);
        let monthly_inflation_rate = yearly_to_monthly_rate(settings.inflation_yearly);

        if total_months == 0 {
            log::warn!(
                "Projection horizon ends at or before {}; producing a single month",
                self.config.start_date
            );
        }
        log::debug!(
            "Projecting {} months from {} (return {:.6}/mo, inflation {:.6}/mo, {} events, {} micro-plans)",
            total_months,
            self.config.start_date,
            monthly_return_rate,
            monthly_inflation_rate,
            params.events.len(),
            params.micro_plans.len()
        );

        let resolver = MicroPlanResolver::new(&params.micro_plans);
        let mut state = ProjectionState::new(settings.base_net_worth);
        let mut monthly = Vec::with_capacity(total_months as usize + 1);

        for month_index in 0..=total_months {
            let point = self.calculate_month(
                params,
                &resolver,
                &mut state,
                month_index as usize,
                monthly_return_rate,
                monthly_inflation_rate,
            );
            monthly.push(point);
        }

        let yearly = aggregate_yearly(&monthly);

        ProjectionResult {
            monthly,
            yearly,
            first_month_with_zero_or_negative_net_worth: state.first_zero_or_negative,
        }
    }

    /// Advance the state through one month and return its point
    fn calculate_month(
        &self,
        params: &ProjectionParams,
        resolver: &MicroPlanResolver<'_>,
        state: &mut ProjectionState,
        month_index: usize,
        monthly_return_rate: f64,
        monthly_inflation_rate: f64,
    ) -> LifeMonthlyPoint {
        let settings = &params.settings;
        let date = month_start_offset(self.config.start_date, month_index as u32);
        let age = age_at(params.profile.birth_date, date);
        let working = age < settings.retirement_age;

        // Base figures: active micro-plan, otherwise baseline settings
        let plan = resolver.resolve(date);
        self.note_plan_switch(state, plan.map(|p| month_key(p.effective_date)), date);
        let (base_income, base_expenses) = match plan {
            Some(p) => (p.monthly_income, p.monthly_expenses),
            None => (baseline_income(settings, working), settings.base_monthly_expenses),
        };

        let inflate_income = if working {
            settings.inflate_income
        } else {
            settings.inflate_retirement_income
        };

        // Inflation factor as of the end of last month
        let nominal_income = state.inflate(base_income, inflate_income);
        let nominal_expenses = state.inflate(base_expenses, settings.inflate_expenses);

        let impact = apply_events_for_month(nominal_income, nominal_expenses, date, &params.events);
        let income = impact.total_income();
        let expenses = impact.total_expenses();
        let contribution = (income - expenses).max(0.0);

        state.apply_one_time(impact.one_time_net());
        self.check_zero_crossing(state, month_index, date);

        let returns = state.apply_contribution_and_returns(contribution, monthly_return_rate);
        self.check_zero_crossing(state, month_index, date);

        state.advance_inflation(monthly_inflation_rate);

        LifeMonthlyPoint {
            date,
            age,
            net_worth: state.net_worth,
            real_net_worth: state.real_net_worth(),
            income,
            expenses,
            contribution,
            returns,
        }
    }

    fn check_zero_crossing(&self, state: &mut ProjectionState, month_index: usize, date: NaiveDate) {
        if state.check_zero_crossing(month_index) {
            log::info!(
                "Net worth reaches {:.2} in month {} ({})",
                state.net_worth,
                month_index,
                date
            );
        }
    }

    fn note_plan_switch(&self, state: &mut ProjectionState, plan_key: Option<i32>, date: NaiveDate) {
        if state.active_plan_key != plan_key {
            if plan_key.is_some() {
                log::debug!("Micro-plan takes effect in {}", date);
            }
            state.active_plan_key = plan_key;
        }
    }
}

fn baseline_income(settings: &LifeSettings, working: bool) -> f64 {
    if working {
        settings.base_monthly_income
    } else {
        settings.retirement_monthly_income
    }
}

/// Project `params` starting from `start_date`
pub fn run_projection(params: &ProjectionParams, start_date: NaiveDate) -> ProjectionResult {
    ProjectionEngine::new(ProjectionConfig::starting(start_date)).project(params)
}
