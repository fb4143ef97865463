//! Strategy model and its lazily generated plan.

use serde::{Deserialize, Serialize};

use super::{Language, PlanItem, StrategyId};

/// One proposed high-level method for achieving the goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Strategy {
    pub id: StrategyId,
    pub title: String,
    pub description: String,

    /// Coarse classification of the approach (e.g. "DIY", "Hire help")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_advantage: Option<String>,

    /// Detailed plan, absent until the strategy is first selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<PlanItem>>,

    /// Language the cached plan was generated in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_language: Option<Language>,
}

impl Strategy {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: StrategyId::generate(),
            title: title.into(),
            description: description.into(),
            approach_type: None,
            first_action: None,
            key_advantage: None,
            plan: None,
            plan_language: None,
        }
    }

    /// Placeholder used when the generator proposes fewer strategies than
    /// requested. `position` is 1-based.
    pub fn placeholder(position: usize) -> Self {
        Self::new(
            format!("Strategy {position}"),
            "An alternative approach to achieve your goal.",
        )
    }

    /// A cached plan can be reused only when it is non-empty and was
    /// generated in the active language.
    pub fn has_plan_for(&self, language: Language) -> bool {
        self.plan.as_ref().is_some_and(|plan| !plan.is_empty())
            && self.plan_language == Some(language)
    }
}
