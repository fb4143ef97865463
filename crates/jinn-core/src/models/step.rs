//! Step model definition and partial updates.

use serde::{Deserialize, Serialize};

use super::StepId;
use crate::registry::{extract_resource_names, merge_names};

/// One actionable instruction, optionally expanded into child steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Unique identifier, stable for the node's lifetime
    pub id: StepId,

    /// Instruction text with inline `[Resource]` references
    pub instruction: String,

    /// Resource names extracted from `instruction` when it was produced
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,

    /// Child steps; `None` until the step has been expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_steps: Option<Vec<Step>>,

    /// Whether children are currently visible
    #[serde(default)]
    pub is_expanded: bool,

    /// User-toggled completion, never cascaded
    #[serde(default)]
    pub is_completed: bool,

    /// A request affecting this exact node is in flight
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub loading: bool,
}

impl Step {
    /// Creates a fresh, collapsed step whose resources are derived from the
    /// bracket notation in `instruction`.
    pub fn new(instruction: impl Into<String>) -> Self {
        let instruction = instruction.into();
        let resources = extract_resource_names(&instruction);
        Self {
            id: StepId::generate(),
            instruction,
            resources,
            sub_steps: None,
            is_expanded: false,
            is_completed: false,
            loading: false,
        }
    }

    /// Creates a step from generated output: bracketed names found in the
    /// instruction come first, followed by any additionally listed names.
    pub fn generated(instruction: impl Into<String>, listed: &[String]) -> Self {
        let mut step = Self::new(instruction);
        merge_names(&mut step.resources, listed.iter().map(String::as_str));
        step
    }

    /// Returns true when the step has at least one cached child.
    pub fn has_children(&self) -> bool {
        self.sub_steps.as_ref().is_some_and(|children| !children.is_empty())
    }

    /// Merges the provided fields of `update` into this step. Omitted fields
    /// keep their prior value.
    pub fn apply(&mut self, update: &StepUpdate) {
        if let Some(instruction) = &update.instruction {
            self.instruction.clone_from(instruction);
        }
        if let Some(resources) = &update.resources {
            self.resources.clone_from(resources);
        }
        if let Some(sub_steps) = &update.sub_steps {
            self.sub_steps.clone_from(sub_steps);
        }
        if let Some(is_expanded) = update.is_expanded {
            self.is_expanded = is_expanded;
        }
        if let Some(is_completed) = update.is_completed {
            self.is_completed = is_completed;
        }
        if let Some(loading) = update.loading {
            self.loading = loading;
        }
    }
}

/// Partial record merged into a single step by the mutation engine.
///
/// `sub_steps` is doubly optional: `Some(None)` discards cached children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepUpdate {
    pub instruction: Option<String>,
    pub resources: Option<Vec<String>>,
    pub sub_steps: Option<Option<Vec<Step>>>,
    pub is_expanded: Option<bool>,
    pub is_completed: Option<bool>,
    pub loading: Option<bool>,
}

impl StepUpdate {
    pub fn loading(loading: bool) -> Self {
        Self {
            loading: Some(loading),
            ..Default::default()
        }
    }

    pub fn completed(is_completed: bool) -> Self {
        Self {
            is_completed: Some(is_completed),
            ..Default::default()
        }
    }

    pub fn expanded(is_expanded: bool) -> Self {
        Self {
            is_expanded: Some(is_expanded),
            ..Default::default()
        }
    }

    /// Replaces the instruction and its resource list.
    pub fn text(instruction: impl Into<String>, resources: Vec<String>) -> Self {
        Self {
            instruction: Some(instruction.into()),
            resources: Some(resources),
            ..Default::default()
        }
    }

    /// Attaches freshly fetched children and shows them.
    pub fn children(sub_steps: Vec<Step>) -> Self {
        Self {
            sub_steps: Some(Some(sub_steps)),
            is_expanded: Some(true),
            loading: Some(false),
            ..Default::default()
        }
    }

    /// Drops cached children and collapses the node.
    pub fn without_children(mut self) -> Self {
        self.sub_steps = Some(None);
        self.is_expanded = Some(false);
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }
}
