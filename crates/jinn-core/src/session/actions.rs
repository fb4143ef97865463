//! Everything that can change a session: user intents and the completions of
//! generation requests.

use std::str::FromStr;

use crate::error::GenerationError;
use crate::generator::RegeneratedStep;
use crate::models::{
    Language, Plan, ResourceId, SavedProcess, Step, StepId, Strategy, StrategyId,
};

/// Follow-up applied after a step's text has been edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Keep the new text only
    #[default]
    Save,
    /// Discard the step's children and expand it again from the new text
    SubSteps,
    /// Regenerate every top-level item after the edited one
    Future,
}

impl FromStr for EditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "save" => Ok(EditMode::Save),
            "substeps" | "sub-steps" | "children" => Ok(EditMode::SubSteps),
            "future" => Ok(EditMode::Future),
            _ => Err(format!("Invalid edit mode: {s}")),
        }
    }
}

#[derive(Debug)]
pub enum Action {
    // Goal and session
    SetGoal {
        description: String,
        quantification: Option<String>,
        environment: Option<String>,
    },
    SetLanguage(Language),
    ToggleLanguage,
    DismissError,
    Reset,
    LoadProcess(SavedProcess),
    ProcessSaveFailed,

    // Strategies
    GenerateStrategies,
    SelectStrategy(StrategyId),
    BackToSelection,

    // Plan tree
    ToggleStepComplete(StepId),
    ExpandStep(StepId),
    RegenerateStep(StepId),
    EditStep {
        step_id: StepId,
        text: String,
        mode: EditMode,
    },

    // Resources
    ClickResource(String),
    ToggleResourceStepComplete {
        resource_id: ResourceId,
        step_id: StepId,
    },
    ToggleResourceExpanded(ResourceId),
    CloseResource,

    // Completions
    StrategiesGenerated(Result<Vec<Strategy>, GenerationError>),
    StrategyPlanGenerated {
        strategy_id: StrategyId,
        language: Language,
        result: Result<Plan, GenerationError>,
    },
    StepExpanded {
        step_id: StepId,
        language: Language,
        result: Result<Vec<Step>, GenerationError>,
    },
    StepRegenerated {
        step_id: StepId,
        language: Language,
        result: Result<RegeneratedStep, GenerationError>,
    },
    ResourcePlanGenerated {
        resource_id: ResourceId,
        language: Language,
        result: Result<Vec<Step>, GenerationError>,
    },
    FutureStepsGenerated {
        strategy_id: StrategyId,
        anchor_step_id: StepId,
        count: usize,
        language: Language,
        /// Plan as it was right after the edit, restored on failure
        snapshot: Plan,
        result: Result<Plan, GenerationError>,
    },
}

impl Action {
    /// Goal text with optional context; blank context strings become `None`.
    pub fn set_goal(
        description: impl Into<String>,
        quantification: Option<String>,
        environment: Option<String>,
    ) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
        }

        Action::SetGoal {
            description: description.into().trim().to_string(),
            quantification: non_blank(quantification),
            environment: non_blank(environment),
        }
    }

    /// True for actions produced by finished generation requests.
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            Action::StrategiesGenerated(_)
                | Action::StrategyPlanGenerated { .. }
                | Action::StepExpanded { .. }
                | Action::StepRegenerated { .. }
                | Action::ResourcePlanGenerated { .. }
                | Action::FutureStepsGenerated { .. }
        )
    }
}
