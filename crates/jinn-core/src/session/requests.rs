//! Generation requests issued by the reducer.
//!
//! A request carries every input it needs, captured when it was issued, so it
//! can run without access to the session. Its completion is an [`Action`]
//! that the reducer applies to whatever the state is by then.

use log::debug;

use super::Action;
use crate::generator::Generator;
use crate::models::{Language, Plan, ResourceId, StepId, Strategy, StrategyId};

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Strategies {
        goal: String,
        quantification: Option<String>,
        environment: Option<String>,
        language: Language,
    },
    StrategyPlan {
        strategy: Strategy,
        goal: String,
        environment: Option<String>,
        language: Language,
    },
    ExpandStep {
        step_id: StepId,
        instruction: String,
        context: String,
        language: Language,
    },
    RegenerateStep {
        step_id: StepId,
        instruction: String,
        context: String,
        language: Language,
    },
    ResourcePlan {
        resource_id: ResourceId,
        name: String,
        language: Language,
    },
    FutureSteps {
        strategy_id: StrategyId,
        anchor_step_id: StepId,
        snapshot: Plan,
        goal: String,
        prior_instructions: Vec<String>,
        edited_instruction: String,
        count: usize,
        language: Language,
    },
}

impl Request {
    /// Name of the generator operation this request calls.
    pub fn operation(&self) -> &'static str {
        match self {
            Request::Strategies { .. } => "generate_strategies",
            Request::StrategyPlan { .. } => "generate_strategy_plan",
            Request::ExpandStep { .. } => "expand_step",
            Request::RegenerateStep { .. } => "regenerate_step_text",
            Request::ResourcePlan { .. } => "generate_resource_plan",
            Request::FutureSteps { .. } => "regenerate_future_steps",
        }
    }

    /// Runs the request against `generator` and wraps the outcome in the
    /// matching completion action. Never fails: errors travel inside the
    /// action.
    pub async fn execute(self, generator: &dyn Generator) -> Action {
        let operation = self.operation();
        debug!("Issuing {operation} via {} generator", generator.name());

        match self {
            Request::Strategies {
                goal,
                quantification,
                environment,
                language,
            } => Action::StrategiesGenerated(
                generator
                    .generate_strategies(
                        &goal,
                        quantification.as_deref(),
                        environment.as_deref(),
                        language,
                    )
                    .await,
            ),
            Request::StrategyPlan {
                strategy,
                goal,
                environment,
                language,
            } => Action::StrategyPlanGenerated {
                result: generator
                    .generate_strategy_plan(&strategy, &goal, environment.as_deref(), language)
                    .await,
                strategy_id: strategy.id,
                language,
            },
            Request::ExpandStep {
                step_id,
                instruction,
                context,
                language,
            } => Action::StepExpanded {
                result: generator.expand_step(&instruction, &context, language).await,
                step_id,
                language,
            },
            Request::RegenerateStep {
                step_id,
                instruction,
                context,
                language,
            } => Action::StepRegenerated {
                result: generator
                    .regenerate_step_text(&instruction, &context, language)
                    .await,
                step_id,
                language,
            },
            Request::ResourcePlan {
                resource_id,
                name,
                language,
            } => Action::ResourcePlanGenerated {
                result: generator.generate_resource_plan(&name, language).await,
                resource_id,
                language,
            },
            Request::FutureSteps {
                strategy_id,
                anchor_step_id,
                snapshot,
                goal,
                prior_instructions,
                edited_instruction,
                count,
                language,
            } => Action::FutureStepsGenerated {
                result: generator
                    .regenerate_future_steps(
                        &goal,
                        &prior_instructions,
                        &edited_instruction,
                        count,
                        language,
                    )
                    .await,
                strategy_id,
                anchor_step_id,
                count,
                language,
                snapshot,
            },
        }
    }
}
