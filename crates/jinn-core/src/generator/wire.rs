//! JSON shapes exchanged with the generation backend.
//!
//! The schemas derived here are embedded in every prompt so the backend
//! answers with structured data. Conversions into model types assign fresh
//! ids and rebuild each step's resource list from its bracket notation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RegeneratedStep;
use crate::models::{PlanItem, Step, Strategy};
use crate::registry::{extract_resource_names, merge_names};

const DEFAULT_INSTRUCTION: &str = "Do this step";

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WireStrategy {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub approach_type: Option<String>,
    #[serde(default)]
    pub first_action: Option<String>,
    #[serde(default)]
    pub key_advantage: Option<String>,
}

impl From<WireStrategy> for Strategy {
    fn from(wire: WireStrategy) -> Self {
        let mut strategy = Strategy::new(wire.title, wire.description);
        strategy.approach_type = wire.approach_type;
        strategy.first_action = wire.first_action;
        strategy.key_advantage = wire.key_advantage;
        strategy
    }
}

/// An instruction with the resource names it mentions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WireStep {
    pub instruction: String,
    #[serde(default)]
    pub resources: Vec<String>,
}

impl From<WireStep> for Step {
    fn from(wire: WireStep) -> Self {
        Step::generated(wire.instruction, &wire.resources)
    }
}

impl From<WireStep> for RegeneratedStep {
    fn from(wire: WireStep) -> Self {
        let mut resources = extract_resource_names(&wire.instruction);
        merge_names(&mut resources, wire.resources.iter().map(String::as_str));
        Self {
            instruction: wire.instruction,
            resources,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WireItemKind {
    #[default]
    Single,
    Parallel,
}

/// A plan slot: a single instruction or a group of parallel ones.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WirePlanItem {
    #[serde(rename = "type", default)]
    pub kind: WireItemKind,
    #[serde(default)]
    pub instruction: Option<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub parallel_steps: Vec<WireStep>,
}

impl From<WirePlanItem> for PlanItem {
    fn from(wire: WirePlanItem) -> Self {
        if wire.kind == WireItemKind::Parallel && !wire.parallel_steps.is_empty() {
            return PlanItem::parallel(wire.parallel_steps.into_iter().map(Step::from).collect());
        }

        let instruction = wire
            .instruction
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_INSTRUCTION.to_string());
        PlanItem::single(Step::generated(instruction, &wire.resources))
    }
}
