//! Session root aggregate and the coarse stage machine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Language, ResourceId, Step, StepId, Strategy, StrategyId};
use crate::registry::ResourceRegistry;
use crate::tree;

/// Coarse session stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stage {
    /// Collecting the goal and its context
    #[default]
    Input,
    /// Exactly one strategies or strategy-plan request is in flight
    Processing,
    /// Strategies available, none expanded
    Selection,
    /// A chosen strategy's plan is displayed
    Process,
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INPUT" => Ok(Stage::Input),
            "PROCESSING" => Ok(Stage::Processing),
            "SELECTION" => Ok(Stage::Selection),
            "PROCESS" => Ok(Stage::Process),
            _ => Err(format!("Invalid stage: {s}")),
        }
    }
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Input => "INPUT",
            Stage::Processing => "PROCESSING",
            Stage::Selection => "SELECTION",
            Stage::Process => "PROCESS",
        }
    }
}

/// Everything the session knows. Mutated only through
/// [`reduce`](crate::session::reduce).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GoalState {
    pub description: String,
    pub quantification: Option<String>,
    pub environment: Option<String>,
    pub strategies: Vec<Strategy>,
    pub resources: ResourceRegistry,
    pub selected_strategy_id: Option<StrategyId>,
    pub selected_resource_id: Option<ResourceId>,
    pub stage: Stage,
    pub loading: bool,
    pub error: Option<String>,
    pub language: Language,
}

impl GoalState {
    /// Fresh session state in the given language.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn strategy(&self, id: &StrategyId) -> Option<&Strategy> {
        self.strategies.iter().find(|strategy| &strategy.id == id)
    }

    pub fn strategy_mut(&mut self, id: &StrategyId) -> Option<&mut Strategy> {
        self.strategies.iter_mut().find(|strategy| &strategy.id == id)
    }

    /// The strategy whose plan is currently displayed.
    pub fn active_strategy(&self) -> Option<&Strategy> {
        self.selected_strategy_id
            .as_ref()
            .and_then(|id| self.strategy(id))
    }

    /// The strategy whose cached plan contains the given step.
    pub fn strategy_containing(&self, step_id: &StepId) -> Option<&Strategy> {
        self.strategies.iter().find(|strategy| {
            strategy
                .plan
                .as_deref()
                .is_some_and(|plan| tree::find_step(plan, step_id).is_some())
        })
    }

    /// Looks a step up by id across every cached plan.
    pub fn find_step(&self, step_id: &StepId) -> Option<&Step> {
        self.strategies
            .iter()
            .filter_map(|strategy| strategy.plan.as_deref())
            .find_map(|plan| tree::find_step(plan, step_id))
    }

    pub fn selected_resource(&self) -> Option<&crate::models::Resource> {
        self.selected_resource_id
            .as_ref()
            .and_then(|id| self.resources.get(id))
    }

    /// Goal text followed by the optional environment, as passed to the
    /// generator for step-level requests.
    pub(crate) fn context_line(&self) -> String {
        match &self.environment {
            Some(environment) => format!("{} {}", self.description, environment),
            None => self.description.clone(),
        }
    }
}
