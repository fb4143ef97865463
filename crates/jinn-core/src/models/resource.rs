//! Resource model definition.

use serde::{Deserialize, Serialize};

use super::{Language, ResourceId, Step};

/// A named tool, material or skill referenced by `[Name]` in plan text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: ResourceId,

    /// Display name, casing of the first occurrence
    pub name: String,

    #[serde(default)]
    pub is_expanded: bool,

    /// Flat acquisition plan, absent until requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_steps: Option<Vec<Step>>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub loading: bool,

    /// Language the acquisition plan was generated in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl Resource {
    pub fn new(name: impl Into<String>, language: Language) -> Self {
        Self {
            id: ResourceId::generate(),
            name: name.into(),
            is_expanded: false,
            acquisition_steps: None,
            loading: false,
            language: Some(language),
        }
    }

    /// True when the acquisition plan is missing or stale for `language`.
    pub fn needs_acquisition_plan(&self, language: Language) -> bool {
        self.acquisition_steps.is_none() || self.language != Some(language)
    }
}
