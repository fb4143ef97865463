//! Resource panel interactions and acquisition plans.

use log::debug;

use super::reducer::{non_empty, report_failure};
use super::Request;
use crate::error::GenerationError;
use crate::models::{GoalState, Language, Resource, ResourceId, Step, StepId};
use crate::registry::clean_resource_name;

/// Selects the named resource, creating it at the front of the registry when
/// unknown, and requests an acquisition plan if it is missing or stale.
pub(super) fn click(state: &mut GoalState, name: &str) -> Option<Request> {
    let name = clean_resource_name(name);
    if name.is_empty() {
        return None;
    }
    let language = state.language;

    let resource_id = match state.resources.find_by_name(&name) {
        Some(existing) => {
            let id = existing.id.clone();
            let stale = existing.needs_acquisition_plan(language) && !existing.loading;
            state.selected_resource_id = Some(id.clone());
            if !stale {
                return None;
            }
            state.resources.update(&id, |resource| resource.loading = true);
            id
        }
        None => {
            let mut resource = Resource::new(name.clone(), language);
            resource.is_expanded = true;
            resource.loading = true;
            let id = resource.id.clone();
            state.resources.insert_front(resource);
            state.selected_resource_id = Some(id.clone());
            id
        }
    };

    let name = state
        .resources
        .get(&resource_id)
        .map_or(name, |resource| resource.name.clone());
    Some(Request::ResourcePlan {
        resource_id,
        name,
        language,
    })
}

/// Replaces the acquisition steps on success. On failure any stale steps
/// stay in place and only the loading flag clears.
pub(super) fn plan_generated(
    state: &mut GoalState,
    id: &ResourceId,
    language: Language,
    result: Result<Vec<Step>, GenerationError>,
) -> Option<Request> {
    if state.resources.get(id).is_none() {
        debug!("Dropping acquisition plan for vanished resource {id}");
        return None;
    }

    match non_empty(result, "generate_resource_plan") {
        Ok(steps) => {
            state.resources.update(id, |resource| {
                resource.acquisition_steps = Some(steps);
                resource.language = Some(language);
                resource.loading = false;
            });
        }
        Err(error) => {
            state.resources.update(id, |resource| resource.loading = false);
            report_failure(state, "generate_resource_plan", &error);
        }
    }
    None
}

pub(super) fn toggle_step_complete(
    state: &mut GoalState,
    resource_id: &ResourceId,
    step_id: &StepId,
) -> Option<Request> {
    state.resources.update(resource_id, |resource| {
        if let Some(step) = resource
            .acquisition_steps
            .iter_mut()
            .flatten()
            .find(|step| &step.id == step_id)
        {
            step.is_completed = !step.is_completed;
        }
    });
    None
}

pub(super) fn toggle_expanded(state: &mut GoalState, id: &ResourceId) -> Option<Request> {
    state
        .resources
        .update(id, |resource| resource.is_expanded = !resource.is_expanded);
    None
}
