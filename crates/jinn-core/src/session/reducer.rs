//! The state transition function.
//!
//! [`reduce`] is synchronous and performs no I/O. Actions that need the
//! generator return a [`Request`]; running it yields a completion action that
//! is reduced against the state current at that moment, never against a copy
//! captured when the request was issued.

use log::warn;

use super::{resource_ops, step_ops, strategy_ops, Action, Request};
use crate::error::GenerationError;
use crate::models::{GoalState, Stage, Step, StepId, StepUpdate};
use crate::tree;

/// Applies `action` to `state`, returning the generation request to run next,
/// if any.
pub fn reduce(state: &mut GoalState, action: Action) -> Option<Request> {
    match action {
        Action::SetGoal {
            description,
            quantification,
            environment,
        } => {
            state.description = description;
            state.quantification = quantification;
            state.environment = environment;
            None
        }
        Action::SetLanguage(language) => {
            state.language = language;
            state.error = None;
            None
        }
        Action::ToggleLanguage => {
            let language = state.language.toggled();
            reduce(state, Action::SetLanguage(language))
        }
        Action::DismissError => {
            state.error = None;
            None
        }
        Action::Reset => {
            *state = GoalState::new(state.language);
            None
        }
        Action::LoadProcess(saved) => {
            let snapshot = saved.snapshot;
            state.description = snapshot.description;
            state.quantification = snapshot.quantification;
            state.environment = snapshot.environment;
            state.strategies = snapshot.strategies;
            for plan in state.strategies.iter_mut().filter_map(|s| s.plan.as_mut()) {
                tree::clear_loading(plan);
            }
            state.selected_strategy_id = snapshot.selected_strategy_id;
            state.resources.clear();
            state.selected_resource_id = None;
            state.loading = false;
            state.error = None;
            state.stage = if state.selected_strategy_id.is_some() {
                Stage::Process
            } else {
                Stage::Selection
            };
            None
        }
        Action::ProcessSaveFailed => {
            state.error = Some(state.language.save_error().to_string());
            None
        }

        Action::GenerateStrategies => strategy_ops::generate(state),
        Action::SelectStrategy(id) => strategy_ops::select(state, id),
        Action::BackToSelection => strategy_ops::back(state),
        Action::StrategiesGenerated(result) => strategy_ops::strategies_generated(state, result),
        Action::StrategyPlanGenerated {
            strategy_id,
            language,
            result,
        } => strategy_ops::plan_generated(state, strategy_id, language, result),

        Action::ToggleStepComplete(id) => step_ops::toggle_complete(state, &id),
        Action::ExpandStep(id) => step_ops::expand(state, id),
        Action::RegenerateStep(id) => step_ops::regenerate(state, id),
        Action::EditStep {
            step_id,
            text,
            mode,
        } => step_ops::edit(state, step_id, text, mode),
        Action::StepExpanded {
            step_id,
            language,
            result,
        } => step_ops::expanded(state, &step_id, language, result),
        Action::StepRegenerated {
            step_id,
            language,
            result,
        } => step_ops::regenerated(state, &step_id, language, result),
        Action::FutureStepsGenerated {
            strategy_id,
            anchor_step_id,
            count,
            language,
            snapshot,
            result,
        } => step_ops::future_generated(
            state,
            &strategy_id,
            &anchor_step_id,
            count,
            language,
            snapshot,
            result,
        ),

        Action::ClickResource(name) => resource_ops::click(state, &name),
        Action::ToggleResourceStepComplete {
            resource_id,
            step_id,
        } => resource_ops::toggle_step_complete(state, &resource_id, &step_id),
        Action::ToggleResourceExpanded(id) => resource_ops::toggle_expanded(state, &id),
        Action::CloseResource => {
            state.selected_resource_id = None;
            None
        }
        Action::ResourcePlanGenerated {
            resource_id,
            language,
            result,
        } => resource_ops::plan_generated(state, &resource_id, language, result),
    }
}

/// Logs a generation failure and surfaces the localized generic message.
pub(super) fn report_failure(state: &mut GoalState, operation: &str, error: &GenerationError) {
    warn!("{operation} failed: {error}");
    state.error = Some(state.language.generic_error().to_string());
}

/// Treats an empty list as a failed response.
pub(super) fn non_empty<T>(
    result: Result<Vec<T>, GenerationError>,
    operation: &'static str,
) -> Result<Vec<T>, GenerationError> {
    match result {
        Ok(items) if items.is_empty() => Err(GenerationError::EmptyResponse { operation }),
        other => other,
    }
}

/// Runs `apply` on the step with the given id in whichever cached plan holds
/// it.
pub(super) fn modify_step<F>(state: &mut GoalState, id: &StepId, mut apply: F) -> bool
where
    F: FnMut(&mut Step),
{
    state
        .strategies
        .iter_mut()
        .filter_map(|strategy| strategy.plan.as_mut())
        .any(|plan| tree::modify_step(plan, id, &mut apply))
}

pub(super) fn update_step(state: &mut GoalState, id: &StepId, update: &StepUpdate) -> bool {
    modify_step(state, id, |step| step.apply(update))
}
