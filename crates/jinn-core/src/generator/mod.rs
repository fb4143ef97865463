//! The generation collaborator: turns goal text and context into strategies,
//! plans, sub-steps and resource acquisition steps.
//!
//! The session treats the collaborator as opaque and fallible. All generated
//! instruction text uses the `[Name]` bracket notation for resources so the
//! registry can recover them (see [`crate::registry`]).
//!
//! Two implementations ship with the crate:
//!
//! - [`CommandGenerator`]: spawns an external LLM command line tool and parses
//!   its JSON answer
//! - [`UnavailableGenerator`]: fails every request, used when nothing is
//!   configured

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::models::{Language, PlanItem, Step, Strategy};

pub mod command;
pub mod prompts;
pub mod wire;

pub use command::{CommandGenerator, CommandGeneratorConfig};

/// Number of strategies proposed for every goal.
pub const STRATEGY_COUNT: usize = 3;

/// Rewritten instruction returned by [`Generator::regenerate_step_text`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegeneratedStep {
    pub instruction: String,
    pub resources: Vec<String>,
}

#[async_trait]
pub trait Generator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Proposes strategies for the goal, ideally [`STRATEGY_COUNT`] of them.
    async fn generate_strategies(
        &self,
        goal: &str,
        quantification: Option<&str>,
        environment: Option<&str>,
        language: Language,
    ) -> Result<Vec<Strategy>, GenerationError>;

    /// Produces a 3 to 5 item plan for one strategy.
    async fn generate_strategy_plan(
        &self,
        strategy: &Strategy,
        goal: &str,
        environment: Option<&str>,
        language: Language,
    ) -> Result<Vec<PlanItem>, GenerationError>;

    /// Breaks one instruction into 3 to 5 flat child steps.
    async fn expand_step(
        &self,
        instruction: &str,
        context: &str,
        language: Language,
    ) -> Result<Vec<Step>, GenerationError>;

    /// Produces 3 to 5 flat steps for acquiring a resource.
    async fn generate_resource_plan(
        &self,
        resource_name: &str,
        language: Language,
    ) -> Result<Vec<Step>, GenerationError>;

    /// Rewrites a single instruction.
    async fn regenerate_step_text(
        &self,
        instruction: &str,
        context: &str,
        language: Language,
    ) -> Result<RegeneratedStep, GenerationError>;

    /// Produces `count` plan items that follow an edited step.
    async fn regenerate_future_steps(
        &self,
        goal: &str,
        prior_instructions: &[String],
        edited_instruction: &str,
        count: usize,
        language: Language,
    ) -> Result<Vec<PlanItem>, GenerationError>;
}

/// Pads with placeholders and truncates so exactly [`STRATEGY_COUNT`]
/// strategies remain.
pub fn normalize_strategies(mut strategies: Vec<Strategy>) -> Vec<Strategy> {
    strategies.truncate(STRATEGY_COUNT);
    while strategies.len() < STRATEGY_COUNT {
        strategies.push(Strategy::placeholder(strategies.len() + 1));
    }
    strategies
}

/// Generator used when no backend is configured; every request fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableGenerator;

#[async_trait]
impl Generator for UnavailableGenerator {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    async fn generate_strategies(
        &self,
        _goal: &str,
        _quantification: Option<&str>,
        _environment: Option<&str>,
        _language: Language,
    ) -> Result<Vec<Strategy>, GenerationError> {
        Err(GenerationError::Unavailable)
    }

    async fn generate_strategy_plan(
        &self,
        _strategy: &Strategy,
        _goal: &str,
        _environment: Option<&str>,
        _language: Language,
    ) -> Result<Vec<PlanItem>, GenerationError> {
        Err(GenerationError::Unavailable)
    }

    async fn expand_step(
        &self,
        _instruction: &str,
        _context: &str,
        _language: Language,
    ) -> Result<Vec<Step>, GenerationError> {
        Err(GenerationError::Unavailable)
    }

    async fn generate_resource_plan(
        &self,
        _resource_name: &str,
        _language: Language,
    ) -> Result<Vec<Step>, GenerationError> {
        Err(GenerationError::Unavailable)
    }

    async fn regenerate_step_text(
        &self,
        _instruction: &str,
        _context: &str,
        _language: Language,
    ) -> Result<RegeneratedStep, GenerationError> {
        Err(GenerationError::Unavailable)
    }

    async fn regenerate_future_steps(
        &self,
        _goal: &str,
        _prior_instructions: &[String],
        _edited_instruction: &str,
        _count: usize,
        _language: Language,
    ) -> Result<Vec<PlanItem>, GenerationError> {
        Err(GenerationError::Unavailable)
    }
}
