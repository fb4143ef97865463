//! Plan items: single steps and parallel groups.

use serde::{Deserialize, Serialize};

use super::{GroupId, Step, StepId};

/// Steps meant to be carried out concurrently. The group occupies a single
/// ordered position in its plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallelGroup {
    pub id: GroupId,
    pub steps: Vec<Step>,
}

impl ParallelGroup {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            id: GroupId::generate(),
            steps,
        }
    }
}

/// One slot in a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlanItem {
    Single { step: Step },
    Parallel { group: ParallelGroup },
}

/// An ordered sequence of plan items produced for one strategy.
pub type Plan = Vec<PlanItem>;

impl PlanItem {
    pub fn single(step: Step) -> Self {
        PlanItem::Single { step }
    }

    pub fn parallel(steps: Vec<Step>) -> Self {
        PlanItem::Parallel {
            group: ParallelGroup::new(steps),
        }
    }

    /// The depth-zero steps held by this item.
    pub fn steps(&self) -> &[Step] {
        match self {
            PlanItem::Single { step } => std::slice::from_ref(step),
            PlanItem::Parallel { group } => &group.steps,
        }
    }

    pub fn steps_mut(&mut self) -> &mut [Step] {
        match self {
            PlanItem::Single { step } => std::slice::from_mut(step),
            PlanItem::Parallel { group } => &mut group.steps,
        }
    }

    /// Returns true if this is a single item holding the given step.
    pub fn is_single_step(&self, id: &StepId) -> bool {
        matches!(self, PlanItem::Single { step } if &step.id == id)
    }

    /// Text summarizing the item, parallel members joined with "AND".
    pub fn summary(&self) -> String {
        match self {
            PlanItem::Single { step } => step.instruction.clone(),
            PlanItem::Parallel { group } => group
                .steps
                .iter()
                .map(|step| step.instruction.as_str())
                .collect::<Vec<_>>()
                .join(" AND "),
        }
    }
}

/// Counts every step in `items`, including nested children at any depth.
pub fn count_steps(items: &[PlanItem]) -> usize {
    fn count(steps: &[Step]) -> usize {
        steps
            .iter()
            .map(|step| 1 + step.sub_steps.as_deref().map_or(0, count))
            .sum()
    }

    items.iter().map(|item| count(item.steps())).sum()
}
