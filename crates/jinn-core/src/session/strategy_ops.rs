//! Strategy generation, lazy plan selection and the stage machine.

use log::debug;

use super::reducer::{non_empty, report_failure};
use super::Request;
use crate::error::GenerationError;
use crate::generator::normalize_strategies;
use crate::models::{GoalState, Language, Plan, Stage, Strategy, StrategyId};

pub(super) fn generate(state: &mut GoalState) -> Option<Request> {
    if state.description.trim().is_empty() || state.stage == Stage::Processing {
        return None;
    }

    state.strategies.clear();
    state.resources.clear();
    state.selected_strategy_id = None;
    state.selected_resource_id = None;
    state.stage = Stage::Processing;
    state.loading = true;
    state.error = None;

    Some(Request::Strategies {
        goal: state.description.clone(),
        quantification: state.quantification.clone(),
        environment: state.environment.clone(),
        language: state.language,
    })
}

pub(super) fn strategies_generated(
    state: &mut GoalState,
    result: Result<Vec<Strategy>, GenerationError>,
) -> Option<Request> {
    if state.stage != Stage::Processing || state.selected_strategy_id.is_some() {
        debug!("Ignoring strategies that arrived outside of strategy generation");
        return None;
    }

    state.loading = false;
    match non_empty(result, "generate_strategies") {
        Ok(strategies) => {
            state.strategies = normalize_strategies(strategies);
            state.stage = Stage::Selection;
        }
        Err(error) => {
            report_failure(state, "generate_strategies", &error);
            state.stage = Stage::Input;
        }
    }
    None
}

pub(super) fn select(state: &mut GoalState, id: StrategyId) -> Option<Request> {
    if state.stage == Stage::Processing {
        return None;
    }
    let strategy = state.strategy(&id)?;

    if strategy.has_plan_for(state.language) {
        debug!("Reusing cached plan for strategy {id}");
        state.selected_strategy_id = Some(id);
        state.stage = Stage::Process;
        state.error = None;
        return None;
    }

    let request = Request::StrategyPlan {
        strategy: strategy.clone(),
        goal: state.description.clone(),
        environment: state.environment.clone(),
        language: state.language,
    };
    state.selected_strategy_id = Some(id);
    state.stage = Stage::Processing;
    state.loading = true;
    state.error = None;
    Some(request)
}

pub(super) fn back(state: &mut GoalState) -> Option<Request> {
    if state.stage == Stage::Process {
        state.stage = Stage::Selection;
        state.selected_strategy_id = None;
        state.selected_resource_id = None;
    }
    None
}

/// Stores a generated plan. The plan replaces the strategy's cached plan as a
/// whole; the stage only moves if the session is still waiting for this
/// strategy.
pub(super) fn plan_generated(
    state: &mut GoalState,
    strategy_id: StrategyId,
    language: Language,
    result: Result<Plan, GenerationError>,
) -> Option<Request> {
    let awaiting = state.stage == Stage::Processing
        && state.selected_strategy_id.as_ref() == Some(&strategy_id);

    match non_empty(result, "generate_strategy_plan") {
        Ok(plan) => {
            if state.strategy(&strategy_id).is_none() {
                debug!("Dropping plan for vanished strategy {strategy_id}");
                return None;
            }
            state.resources.merge_plan(&plan, language);
            if let Some(strategy) = state.strategy_mut(&strategy_id) {
                strategy.plan = Some(plan);
                strategy.plan_language = Some(language);
            }

            if awaiting {
                state.stage = Stage::Process;
                state.loading = false;
            }
        }
        Err(error) => {
            if awaiting {
                report_failure(state, "generate_strategy_plan", &error);
                state.stage = Stage::Selection;
                state.selected_strategy_id = None;
                state.loading = false;
            } else {
                debug!("Late plan failure for strategy {strategy_id}: {error}");
            }
        }
    }
    None
}
