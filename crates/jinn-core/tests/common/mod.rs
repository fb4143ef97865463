#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jinn_core::generator::{Generator, RegeneratedStep};
use jinn_core::models::{Language, PlanItem, Step, Strategy};
use jinn_core::registry::extract_resource_names;
use jinn_core::{GenerationError, Session, SessionBuilder};
use tempfile::TempDir;

pub const STRATEGIES: &str = "generate_strategies";
pub const STRATEGY_PLAN: &str = "generate_strategy_plan";
pub const EXPAND: &str = "expand_step";
pub const RESOURCE_PLAN: &str = "generate_resource_plan";
pub const REGENERATE: &str = "regenerate_step_text";
pub const FUTURE: &str = "regenerate_future_steps";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Fail,
    Empty,
}

/// In-memory generator with deterministic answers, per-operation call
/// counters and switchable failures.
#[derive(Default)]
pub struct ScriptedGenerator {
    calls: Mutex<HashMap<&'static str, usize>>,
    modes: Mutex<HashMap<&'static str, Mode>>,
    languages: Mutex<Vec<Language>>,
}

impl ScriptedGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(operation)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    /// Languages of every request, in call order.
    pub fn languages(&self) -> Vec<Language> {
        self.languages.lock().unwrap().clone()
    }

    pub fn set_mode(&self, operation: &'static str, mode: Mode) {
        self.modes.lock().unwrap().insert(operation, mode);
    }

    pub fn recover(&self, operation: &'static str) {
        self.modes.lock().unwrap().remove(operation);
    }

    /// Counts the call and returns the configured failure, if any. An
    /// `Empty` mode yields `Ok(true)`.
    fn record(&self, operation: &'static str, language: Language) -> Result<bool, GenerationError> {
        *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;
        self.languages.lock().unwrap().push(language);
        match self.modes.lock().unwrap().get(operation) {
            Some(Mode::Fail) => Err(GenerationError::Parse(format!("scripted {operation} failure"))),
            Some(Mode::Empty) => Ok(true),
            None => Ok(false),
        }
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate_strategies(
        &self,
        goal: &str,
        _quantification: Option<&str>,
        _environment: Option<&str>,
        language: Language,
    ) -> Result<Vec<Strategy>, GenerationError> {
        if self.record(STRATEGIES, language)? {
            return Ok(vec![]);
        }
        Ok(vec![
            Strategy::new("Do it yourself", format!("Handle \"{goal}\" on your own")),
            Strategy::new("Get help", "Ask a friend who has done it before"),
        ])
    }

    async fn generate_strategy_plan(
        &self,
        strategy: &Strategy,
        _goal: &str,
        _environment: Option<&str>,
        language: Language,
    ) -> Result<Vec<PlanItem>, GenerationError> {
        if self.record(STRATEGY_PLAN, language)? {
            return Ok(vec![]);
        }
        Ok(vec![
            PlanItem::single(Step::new(format!("Plan the work for {}", strategy.title))),
            PlanItem::parallel(vec![
                Step::new("Buy a [Drill]"),
                Step::new("Clear the [Workbench]"),
            ]),
            PlanItem::single(Step::new("Do the work with the [drill]")),
        ])
    }

    async fn expand_step(
        &self,
        instruction: &str,
        _context: &str,
        language: Language,
    ) -> Result<Vec<Step>, GenerationError> {
        if self.record(EXPAND, language)? {
            return Ok(vec![]);
        }
        Ok(vec![
            Step::new(format!("{instruction}: prepare")),
            Step::new(format!("{instruction}: use the [Level]")),
            Step::new(format!("{instruction}: check")),
        ])
    }

    async fn generate_resource_plan(
        &self,
        resource_name: &str,
        language: Language,
    ) -> Result<Vec<Step>, GenerationError> {
        if self.record(RESOURCE_PLAN, language)? {
            return Ok(vec![]);
        }
        Ok(vec![
            Step::new(format!("Find out where to get {resource_name}")),
            Step::new(format!("Compare {resource_name} options")),
            Step::new(format!("Get the {resource_name}")),
        ])
    }

    async fn regenerate_step_text(
        &self,
        instruction: &str,
        _context: &str,
        language: Language,
    ) -> Result<RegeneratedStep, GenerationError> {
        if self.record(REGENERATE, language)? {
            return Ok(RegeneratedStep {
                instruction: String::new(),
                resources: vec![],
            });
        }
        let instruction = format!("{instruction} using a [Clamp]");
        Ok(RegeneratedStep {
            resources: extract_resource_names(&instruction),
            instruction,
        })
    }

    async fn regenerate_future_steps(
        &self,
        _goal: &str,
        _prior_instructions: &[String],
        edited_instruction: &str,
        count: usize,
        language: Language,
    ) -> Result<Vec<PlanItem>, GenerationError> {
        if self.record(FUTURE, language)? {
            return Ok(vec![]);
        }
        Ok((1..=count)
            .map(|n| {
                PlanItem::single(Step::new(format!(
                    "Follow-up {n} after \"{edited_instruction}\" with [Sandpaper]"
                )))
            })
            .collect())
    }
}

/// Helper function to create a test session backed by `generator`
pub async fn create_test_session(generator: Arc<ScriptedGenerator>) -> (TempDir, Session) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let session = SessionBuilder::new()
        .with_database_path(Some(&db_path))
        .with_generator(generator)
        .build()
        .await
        .expect("Failed to create session");
    (temp_dir, session)
}
