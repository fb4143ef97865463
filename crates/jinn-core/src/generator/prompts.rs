//! Prompt text for each generation operation.

use crate::models::{Language, Strategy};

fn language_rule(language: Language) -> String {
    format!(
        "Write every piece of text in {}, even if the input is written in another language.",
        language.prompt_name()
    )
}

const BRACKET_RULE: &str = "Wrap every concrete tool, material, piece of software or skill in square brackets, for example [Hammer] or [VS Code], and list the bracketed names in the \"resources\" array.";

pub fn strategies(
    goal: &str,
    quantification: Option<&str>,
    environment: Option<&str>,
    language: Language,
) -> String {
    format!(
        "Goal: \"{goal}\"\n\
         Specifics: \"{}\"\n\
         Environment: \"{}\"\n\n\
         Propose exactly {} distinct, realistic strategies for reaching this goal, \
         taking the environment into account. Give each a short title, a persuasive \
         description, the kind of approach it takes, the very first action and its key \
         advantage. Do not write detailed steps yet.\n\n\
         {}",
        quantification.unwrap_or_default(),
        environment.unwrap_or_default(),
        super::STRATEGY_COUNT,
        language_rule(language),
    )
}

pub fn strategy_plan(
    strategy: &Strategy,
    goal: &str,
    environment: Option<&str>,
    language: Language,
) -> String {
    format!(
        "Goal: \"{goal}\"\n\
         Environment: \"{}\"\n\
         Chosen strategy: \"{}\"\n\
         Strategy description: \"{}\"\n\n\
         Write an execution plan for this strategy with 3 to 5 high-level items. \
         An item is either a \"single\" step or a \"parallel\" group of steps that can \
         be done at the same time.\n\n\
         {BRACKET_RULE}\n{}",
        environment.unwrap_or_default(),
        strategy.title,
        strategy.description,
        language_rule(language),
    )
}

pub fn expand_step(instruction: &str, context: &str, language: Language) -> String {
    format!(
        "Context: \"{context}\"\n\
         Step: \"{instruction}\"\n\n\
         Break this step down into 3 to 5 smaller, concrete sub-steps.\n\n\
         {BRACKET_RULE}\n{}",
        language_rule(language),
    )
}

pub fn resource_plan(resource_name: &str, language: Language) -> String {
    format!(
        "Resource: \"{resource_name}\"\n\n\
         Describe in 3 to 5 steps how someone can get hold of this resource: acquire, \
         buy, install or learn to use it.\n\n\
         {BRACKET_RULE}\n{}",
        language_rule(language),
    )
}

pub fn regenerate_step(instruction: &str, context: &str, language: Language) -> String {
    format!(
        "Context: \"{context}\"\n\
         Current instruction: \"{instruction}\"\n\n\
         Rewrite the instruction so it is clearer and more actionable, or propose an \
         alternative method with the same intent.\n\n\
         {BRACKET_RULE}\n{}",
        language_rule(language),
    )
}

pub fn future_steps(
    goal: &str,
    prior_instructions: &[String],
    edited_instruction: &str,
    count: usize,
    language: Language,
) -> String {
    let history = prior_instructions
        .iter()
        .enumerate()
        .map(|(index, text)| format!("{}. {text}", index + 1))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Goal: \"{goal}\"\n\
         Steps planned so far:\n{history}\n\
         The step that was just edited: \"{edited_instruction}\"\n\n\
         Write the remaining {count} plan items that come after the edited step, \
         adapting the rest of the plan to the change. Produce exactly {count} items; \
         each is either a \"single\" step or a \"parallel\" group.\n\n\
         {BRACKET_RULE}\n{}",
        language_rule(language),
    )
}

/// Wraps an operation prompt with the JSON schema the answer must follow.
pub fn with_schema(prompt: &str, schema: &str) -> String {
    format!(
        "You are a practical, expert planner.\n\n{prompt}\n\n\
         Answer with JSON only, no commentary, matching this JSON Schema:\n```json\n{schema}\n```"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_name_the_language() {
        assert!(expand_step("Do it", "ctx", Language::Zh).contains("Simplified Chinese"));
        assert!(resource_plan("Saw", Language::En).contains("English"));
    }

    #[test]
    fn test_future_prompt_lists_history_and_count() {
        let prompt = future_steps(
            "Paint the house",
            &["Buy paint".to_string(), "Tape edges".to_string()],
            "Tape edges",
            2,
            Language::En,
        );
        assert!(prompt.contains("1. Buy paint\n2. Tape edges"));
        assert!(prompt.contains("exactly 2 items"));
    }
}
