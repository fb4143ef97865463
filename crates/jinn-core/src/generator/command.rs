//! Generator backed by an external LLM command line tool.
//!
//! The configured binary is invoked once per request as
//! `<binary> <args..> <prompt>`; its standard output must contain the JSON
//! answer, either raw, inside a fenced code block, or wrapped in a
//! `{"result": "..."}` envelope.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::debug;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tokio::process::Command;
use tokio::time::timeout as tokio_timeout;

use super::wire::{WirePlanItem, WireStep, WireStrategy};
use super::{prompts, Generator, RegeneratedStep};
use crate::error::GenerationError;
use crate::models::{Language, PlanItem, Step, Strategy};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone)]
pub struct CommandGeneratorConfig {
    pub binary: PathBuf,
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl CommandGeneratorConfig {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct CommandGenerator {
    config: CommandGeneratorConfig,
}

impl CommandGenerator {
    pub fn new(config: CommandGeneratorConfig) -> Self {
        Self { config }
    }

    /// Runs one request and decodes the answer as `T`.
    async fn request<T>(&self, operation: &'static str, prompt: &str) -> Result<T, GenerationError>
    where
        T: DeserializeOwned + JsonSchema,
    {
        let schema = serde_json::to_string_pretty(&schemars::schema_for!(T))
            .map_err(|e| GenerationError::Parse(e.to_string()))?;
        let full_prompt = prompts::with_schema(prompt, &schema);

        debug!(
            "Invoking generator for {operation} with {} byte prompt",
            full_prompt.len()
        );
        let stdout = self.execute(&full_prompt).await?;
        parse_answer(&stdout)
    }

    async fn execute(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut cmd = Command::new(&self.config.binary);
        cmd.args(&self.config.args).arg(prompt).kill_on_drop(true);

        let start = Instant::now();
        let output = tokio_timeout(self.config.timeout, cmd.output())
            .await
            .map_err(|_| GenerationError::Timeout(self.config.timeout))?
            .map_err(|source| GenerationError::Spawn {
                binary: self.config.binary.display().to_string(),
                source,
            })?;

        debug!("Generator finished in {:?}", start.elapsed());

        if !output.status.success() {
            return Err(GenerationError::NonZeroExit {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl Generator for CommandGenerator {
    fn name(&self) -> &'static str {
        "command"
    }

    async fn generate_strategies(
        &self,
        goal: &str,
        quantification: Option<&str>,
        environment: Option<&str>,
        language: Language,
    ) -> Result<Vec<Strategy>, GenerationError> {
        let prompt = prompts::strategies(goal, quantification, environment, language);
        let wire: Vec<WireStrategy> = self.request("generate_strategies", &prompt).await?;
        Ok(wire.into_iter().map(Strategy::from).collect())
    }

    async fn generate_strategy_plan(
        &self,
        strategy: &Strategy,
        goal: &str,
        environment: Option<&str>,
        language: Language,
    ) -> Result<Vec<PlanItem>, GenerationError> {
        let prompt = prompts::strategy_plan(strategy, goal, environment, language);
        let wire: Vec<WirePlanItem> = self.request("generate_strategy_plan", &prompt).await?;
        Ok(wire.into_iter().map(PlanItem::from).collect())
    }

    async fn expand_step(
        &self,
        instruction: &str,
        context: &str,
        language: Language,
    ) -> Result<Vec<Step>, GenerationError> {
        let prompt = prompts::expand_step(instruction, context, language);
        let wire: Vec<WireStep> = self.request("expand_step", &prompt).await?;
        Ok(wire.into_iter().map(Step::from).collect())
    }

    async fn generate_resource_plan(
        &self,
        resource_name: &str,
        language: Language,
    ) -> Result<Vec<Step>, GenerationError> {
        let prompt = prompts::resource_plan(resource_name, language);
        let wire: Vec<WireStep> = self.request("generate_resource_plan", &prompt).await?;
        Ok(wire.into_iter().map(Step::from).collect())
    }

    async fn regenerate_step_text(
        &self,
        instruction: &str,
        context: &str,
        language: Language,
    ) -> Result<RegeneratedStep, GenerationError> {
        let prompt = prompts::regenerate_step(instruction, context, language);
        let wire: WireStep = self.request("regenerate_step_text", &prompt).await?;
        Ok(wire.into())
    }

    async fn regenerate_future_steps(
        &self,
        goal: &str,
        prior_instructions: &[String],
        edited_instruction: &str,
        count: usize,
        language: Language,
    ) -> Result<Vec<PlanItem>, GenerationError> {
        let prompt =
            prompts::future_steps(goal, prior_instructions, edited_instruction, count, language);
        let wire: Vec<WirePlanItem> = self.request("regenerate_future_steps", &prompt).await?;
        Ok(wire.into_iter().map(PlanItem::from).collect())
    }
}

/// Decodes a backend answer, unwrapping a `{"result": "..."}` envelope first
/// when present.
pub fn parse_answer<T: DeserializeOwned>(raw: &str) -> Result<T, GenerationError> {
    #[derive(serde::Deserialize)]
    struct Envelope {
        result: String,
    }

    if let Ok(envelope) = serde_json::from_str::<Envelope>(raw.trim()) {
        if let Some(value) = try_parse(&envelope.result) {
            return Ok(value);
        }
    }

    try_parse(raw).ok_or_else(|| {
        GenerationError::Parse(format!(
            "no usable JSON in output: {}...",
            raw.chars().take(200).collect::<String>()
        ))
    })
}

fn try_parse<T: DeserializeOwned>(text: &str) -> Option<T> {
    extract_json(text).and_then(|json| serde_json::from_str(json).ok())
}

/// Finds the JSON payload in free-form output: the whole text, a fenced code
/// block, or the first balanced object or array.
fn extract_json(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
    {
        return Some(trimmed);
    }

    if let Some(block) = fenced_block(text) {
        return Some(block);
    }

    balanced_span(text)
}

fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after_fence = &text[start + 3..];
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let end = body.find("```")?;
    let candidate = body[..end].trim();
    serde_json::from_str::<serde_json::Value>(candidate)
        .is_ok()
        .then_some(candidate)
}

fn balanced_span(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
