//! Display language for generated content.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two languages content can be generated in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "zh" | "chinese" | "中文" => Ok(Language::Zh),
            _ => Err(format!("Invalid language: {s}")),
        }
    }
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Name of the language as it is spelled out in generation prompts.
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "Simplified Chinese",
        }
    }

    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    /// User-facing message shown whenever a generation request fails.
    pub fn generic_error(&self) -> &'static str {
        match self {
            Language::En => "Something went wrong while generating. Please try again.",
            Language::Zh => "生成时出现问题，请重试。",
        }
    }

    /// User-facing message shown when a process could not be saved.
    pub fn save_error(&self) -> &'static str {
        match self {
            Language::En => "Failed to save process",
            Language::Zh => "保存流程失败",
        }
    }
}
