//! Mutation engine for the nested plan tree.
//!
//! Every localized plan change (completion toggles, attaching fetched
//! children, loading flags, in-place text edits) goes through one depth-first
//! traversal, [`update_matching`], parameterized by a predicate and an update
//! operation. The traversal always visits the whole tree: single items, every
//! parallel-group member, and all nested children below them.
//!
//! Updates are shallow merges on named fields only. A node's children,
//! expansion state and siblings are untouched unless the update names them.
//!
//! ```rust
//! use jinn_core::models::{PlanItem, Step, StepUpdate};
//! use jinn_core::tree;
//!
//! let step = Step::new("Sand the [Table]");
//! let id = step.id.clone();
//! let mut plan = vec![PlanItem::single(step)];
//!
//! assert!(tree::update_step(&mut plan, &id, &StepUpdate::completed(true)));
//! assert!(tree::find_step(&plan, &id).unwrap().is_completed);
//! ```

use crate::models::{Plan, PlanItem, Step, StepId, StepUpdate};

/// Applies `apply` to every step for which `matches` holds, visiting items in
/// order, parallel members in order, and children depth-first. Returns the
/// number of steps updated.
pub fn update_matching<P, F>(items: &mut [PlanItem], matches: P, mut apply: F) -> usize
where
    P: Fn(&Step) -> bool,
    F: FnMut(&mut Step),
{
    items
        .iter_mut()
        .map(|item| visit_steps(item.steps_mut(), &matches, &mut apply))
        .sum()
}

fn visit_steps<P, F>(steps: &mut [Step], matches: &P, apply: &mut F) -> usize
where
    P: Fn(&Step) -> bool,
    F: FnMut(&mut Step),
{
    let mut updated = 0;
    for step in steps.iter_mut() {
        if matches(step) {
            apply(step);
            updated += 1;
        }
        if let Some(children) = step.sub_steps.as_deref_mut() {
            updated += visit_steps(children, matches, apply);
        }
    }
    updated
}

/// Runs `apply` on the step with the given id. Returns false when no such
/// step exists.
pub fn modify_step<F>(items: &mut [PlanItem], id: &StepId, apply: F) -> bool
where
    F: FnMut(&mut Step),
{
    update_matching(items, |step| &step.id == id, apply) > 0
}

/// Merges `update` into the step with the given id.
pub fn update_step(items: &mut [PlanItem], id: &StepId, update: &StepUpdate) -> bool {
    modify_step(items, id, |step| step.apply(update))
}

/// Value-semantics variant of [`update_step`]: returns an updated copy of the
/// plan, or `None` when the id is not present.
pub fn with_step_updated(items: &[PlanItem], id: &StepId, update: &StepUpdate) -> Option<Plan> {
    let mut plan = items.to_vec();
    update_step(&mut plan, id, update).then_some(plan)
}

/// Finds a step anywhere in the tree.
pub fn find_step<'a>(items: &'a [PlanItem], id: &StepId) -> Option<&'a Step> {
    fn find_in<'a>(steps: &'a [Step], id: &StepId) -> Option<&'a Step> {
        steps.iter().find_map(|step| {
            if &step.id == id {
                Some(step)
            } else {
                step.sub_steps
                    .as_deref()
                    .and_then(|children| find_in(children, id))
            }
        })
    }

    items.iter().find_map(|item| find_in(item.steps(), id))
}

/// Position of the top-level single item holding the given step. Parallel
/// members and nested children have no position in the flat sequence.
pub fn single_step_index(items: &[PlanItem], id: &StepId) -> Option<usize> {
    items.iter().position(|item| item.is_single_step(id))
}

/// Sets `loading` on every depth-zero step of the items after `index`.
pub fn mark_loading_after(items: &mut [PlanItem], index: usize) {
    for item in items.iter_mut().skip(index + 1) {
        for step in item.steps_mut() {
            step.loading = true;
        }
    }
}

/// Undoes [`mark_loading_after`]: clears `loading` on the depth-zero steps
/// after `index` that were idle in `before`. Flags owned by other requests are
/// left alone. Returns how many were cleared.
pub fn unmark_loading_after(items: &mut [PlanItem], index: usize, before: &[PlanItem]) -> usize {
    let idle: Vec<&StepId> = before
        .iter()
        .flat_map(PlanItem::steps)
        .filter(|step| !step.loading)
        .map(|step| &step.id)
        .collect();

    let mut cleared = 0;
    for item in items.iter_mut().skip(index + 1) {
        for step in item.steps_mut() {
            if step.loading && idle.contains(&&step.id) {
                step.loading = false;
                cleared += 1;
            }
        }
    }
    cleared
}

/// Keeps items up to and including `index` and replaces the rest with
/// `replacement`.
pub fn splice_after(items: &mut Plan, index: usize, replacement: Vec<PlanItem>) {
    items.truncate(index + 1);
    items.extend(replacement);
}

/// Clears every loading flag in the tree. Returns how many were set.
pub fn clear_loading(items: &mut [PlanItem]) -> usize {
    update_matching(items, |step| step.loading, |step| step.loading = false)
}
