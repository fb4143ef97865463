//! Plan tree interactions: completion, expansion, regeneration and edits.

use log::debug;

use super::reducer::{modify_step, non_empty, report_failure, update_step};
use super::{EditMode, Request};
use crate::error::GenerationError;
use crate::generator::RegeneratedStep;
use crate::models::{GoalState, Language, Plan, PlanItem, Step, StepId, StepUpdate, StrategyId};
use crate::registry::extract_resource_names;
use crate::tree;

pub(super) fn toggle_complete(state: &mut GoalState, id: &StepId) -> Option<Request> {
    if !modify_step(state, id, |step| step.is_completed = !step.is_completed) {
        debug!("No step {id} to toggle");
    }
    None
}

/// Toggles visibility when children are cached, otherwise asks for them.
pub(super) fn expand(state: &mut GoalState, id: StepId) -> Option<Request> {
    let step = state.find_step(&id)?;
    if step.loading {
        return None;
    }
    if step.has_children() {
        let update = StepUpdate::expanded(!step.is_expanded);
        update_step(state, &id, &update);
        return None;
    }

    let instruction = step.instruction.clone();
    let context = expansion_context(state, &id);
    update_step(state, &id, &StepUpdate::loading(true));
    Some(Request::ExpandStep {
        step_id: id,
        instruction,
        context,
        language: state.language,
    })
}

pub(super) fn expanded(
    state: &mut GoalState,
    id: &StepId,
    language: Language,
    result: Result<Vec<Step>, GenerationError>,
) -> Option<Request> {
    if state.find_step(id).is_none() {
        debug!("Dropping children for vanished step {id}");
        return None;
    }

    match non_empty(result, "expand_step") {
        Ok(children) => {
            state.resources.merge_steps(&children, language);
            update_step(state, id, &StepUpdate::children(children));
        }
        Err(error) => {
            update_step(state, id, &StepUpdate::loading(false));
            report_failure(state, "expand_step", &error);
        }
    }
    None
}

pub(super) fn regenerate(state: &mut GoalState, id: StepId) -> Option<Request> {
    let step = state.find_step(&id)?;
    if step.loading {
        return None;
    }

    let instruction = step.instruction.clone();
    update_step(state, &id, &StepUpdate::loading(true));
    Some(Request::RegenerateStep {
        step_id: id,
        instruction,
        context: state.context_line(),
        language: state.language,
    })
}

pub(super) fn regenerated(
    state: &mut GoalState,
    id: &StepId,
    language: Language,
    result: Result<RegeneratedStep, GenerationError>,
) -> Option<Request> {
    if state.find_step(id).is_none() {
        debug!("Dropping regenerated text for vanished step {id}");
        return None;
    }

    let result = result.and_then(|regenerated| {
        if regenerated.instruction.trim().is_empty() {
            Err(GenerationError::EmptyResponse {
                operation: "regenerate_step_text",
            })
        } else {
            Ok(regenerated)
        }
    });

    match result {
        Ok(RegeneratedStep {
            instruction,
            resources,
        }) => {
            state
                .resources
                .merge_names(resources.iter().map(String::as_str), language);
            let update = StepUpdate::text(instruction, resources)
                .without_children()
                .with_loading(false);
            update_step(state, id, &update);
        }
        Err(error) => {
            update_step(state, id, &StepUpdate::loading(false));
            report_failure(state, "regenerate_step_text", &error);
        }
    }
    None
}

/// Applies the edited text, then runs the follow-up selected by `mode`.
pub(super) fn edit(
    state: &mut GoalState,
    id: StepId,
    text: String,
    mode: EditMode,
) -> Option<Request> {
    let resources = extract_resource_names(&text);
    if !update_step(state, &id, &StepUpdate::text(text.clone(), resources.clone())) {
        debug!("No step {id} to edit");
        return None;
    }
    let language = state.language;
    state
        .resources
        .merge_names(resources.iter().map(String::as_str), language);

    match mode {
        EditMode::Save => None,
        EditMode::SubSteps => {
            if state.find_step(&id).is_some_and(|step| step.loading) {
                debug!("Step {id} already has a request in flight");
                return None;
            }
            let context = expansion_context(state, &id);
            update_step(state, &id, &StepUpdate::loading(true).without_children());
            Some(Request::ExpandStep {
                step_id: id,
                instruction: text,
                context,
                language,
            })
        }
        EditMode::Future => regenerate_future(state, id, text),
    }
}

/// Marks every top-level item after the edited step as loading and asks for
/// replacements. Only depth-zero single steps have a position to regenerate
/// from; anything else, or the last item, is left alone.
fn regenerate_future(state: &mut GoalState, id: StepId, edited: String) -> Option<Request> {
    let goal = state.description.clone();
    let language = state.language;

    let strategy = state.strategy_containing(&id)?;
    let strategy_id = strategy.id.clone();
    let plan = strategy.plan.as_deref()?;
    let index = tree::single_step_index(plan, &id)?;
    let count = plan.len() - index - 1;
    if count == 0 {
        debug!("Step {id} is the last item; nothing to regenerate");
        return None;
    }

    let prior_instructions = plan[..=index].iter().map(PlanItem::summary).collect();
    let snapshot = plan.to_vec();

    let plan = state.strategy_mut(&strategy_id)?.plan.as_mut()?;
    tree::mark_loading_after(plan, index);

    Some(Request::FutureSteps {
        strategy_id,
        anchor_step_id: id,
        snapshot,
        goal,
        prior_instructions,
        edited_instruction: edited,
        count,
        language,
    })
}

/// Splices replacement items after the anchor step, located in the latest
/// plan. On failure only the loading marks this request placed are lifted;
/// `snapshot` tells which following steps were idle when it was sent.
pub(super) fn future_generated(
    state: &mut GoalState,
    strategy_id: &StrategyId,
    anchor: &StepId,
    count: usize,
    language: Language,
    snapshot: Plan,
    result: Result<Plan, GenerationError>,
) -> Option<Request> {
    let Some(index) = state
        .strategy(strategy_id)
        .and_then(|strategy| strategy.plan.as_deref())
        .and_then(|plan| tree::single_step_index(plan, anchor))
    else {
        debug!("Anchor step {anchor} is gone; dropping future steps");
        return None;
    };

    match non_empty(result, "regenerate_future_steps") {
        Ok(mut items) => {
            items.truncate(count);
            state.resources.merge_plan(&items, language);
            if let Some(plan) = state.strategy_mut(strategy_id).and_then(|s| s.plan.as_mut()) {
                tree::splice_after(plan, index, items);
            }
        }
        Err(error) => {
            let following = tree::single_step_index(&snapshot, anchor)
                .map_or(&snapshot[..0], |at| &snapshot[at + 1..]);
            if let Some(plan) = state.strategy_mut(strategy_id).and_then(|s| s.plan.as_mut()) {
                tree::unmark_loading_after(plan, index, following);
            }
            report_failure(state, "regenerate_future_steps", &error);
        }
    }
    None
}

/// Goal, environment and strategy title, as sent with expansion requests.
fn expansion_context(state: &GoalState, id: &StepId) -> String {
    let environment = state
        .environment
        .as_deref()
        .map(|environment| format!(" [Environment: {environment}]"))
        .unwrap_or_default();
    let title = state
        .strategy_containing(id)
        .map(|strategy| strategy.title.as_str())
        .unwrap_or_default();
    format!("{}{environment} (Strategy: {title})", state.description)
}
