//! Resource extraction and the session-wide resource registry.
//!
//! Plan text marks resources with a bracket notation, `[Resource Name]`. Every
//! code path that can introduce new instruction text (plan generation, step
//! expansion, edits, regeneration, future regeneration) funnels through
//! [`extract_resource_names`] and [`ResourceRegistry::merge_names`], so a name
//! can only ever resolve to one registry entry regardless of where it was
//! first seen.
//!
//! Names are compared case-insensitively after trimming and stripping any
//! square brackets; the registry keeps the casing of the first occurrence.
//!
//! ```rust
//! use jinn_core::models::Language;
//! use jinn_core::registry::{extract_resource_names, ResourceRegistry};
//!
//! let names = extract_resource_names("Use a [Hammer], then a [ Drill ]");
//! assert_eq!(names, vec!["Hammer", "Drill"]);
//!
//! let mut registry = ResourceRegistry::default();
//! registry.merge_names(["Hammer", "hammer"], Language::En);
//! assert_eq!(registry.len(), 1);
//! assert_eq!(registry.iter().next().unwrap().name, "Hammer");
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{Language, PlanItem, Resource, ResourceId, Step};

fn bracket_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[(.*?)\]").expect("bracket pattern is valid"))
}

/// Trims a raw resource mention and strips square brackets from it.
pub fn clean_resource_name(raw: &str) -> String {
    raw.replace(['[', ']'], "").trim().to_string()
}

/// Key used for case-insensitive name matching.
pub fn normalize_resource_name(raw: &str) -> String {
    clean_resource_name(raw).to_lowercase()
}

/// Scans `text` for `[Name]` mentions, in order of appearance. Empty mentions
/// are dropped and repeated names are reported once.
pub fn extract_resource_names(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    merge_names(
        &mut names,
        bracket_pattern()
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .map(|m| m.as_str()),
    );
    names
}

/// Appends each cleaned name not already present in `target`
/// (case-insensitively), preserving the existing order.
pub fn merge_names<'a>(target: &mut Vec<String>, names: impl IntoIterator<Item = &'a str>) {
    for raw in names {
        let name = clean_resource_name(raw);
        if name.is_empty() {
            continue;
        }
        let key = name.to_lowercase();
        if !target.iter().any(|existing| existing.to_lowercase() == key) {
            target.push(name);
        }
    }
}

/// Deduplicated, ordered set of resources for the whole session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ResourceRegistry(Vec<Resource>);

impl ResourceRegistry {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.0.iter()
    }

    pub fn get(&self, id: &ResourceId) -> Option<&Resource> {
        self.0.iter().find(|resource| &resource.id == id)
    }

    pub fn get_mut(&mut self, id: &ResourceId) -> Option<&mut Resource> {
        self.0.iter_mut().find(|resource| &resource.id == id)
    }

    /// Finds a resource by name, ignoring case, surrounding whitespace and
    /// brackets.
    pub fn find_by_name(&self, name: &str) -> Option<&Resource> {
        let key = normalize_resource_name(name);
        self.0
            .iter()
            .find(|resource| resource.name.to_lowercase() == key)
    }

    /// Adds a resource at the front of the registry. The caller is expected
    /// to have checked [`find_by_name`](Self::find_by_name) first.
    pub fn insert_front(&mut self, resource: Resource) {
        self.0.insert(0, resource);
    }

    /// Appends an entry for every name not yet registered. Returns how many
    /// entries were added.
    pub fn merge_names<'a>(
        &mut self,
        names: impl IntoIterator<Item = &'a str>,
        language: Language,
    ) -> usize {
        let before = self.0.len();
        for raw in names {
            let name = clean_resource_name(raw);
            if name.is_empty() || self.find_by_name(&name).is_some() {
                continue;
            }
            self.0.push(Resource::new(name, language));
        }
        self.0.len() - before
    }

    /// Registers the resources mentioned in bracket-annotated text.
    pub fn merge_text(&mut self, text: &str, language: Language) -> usize {
        let names = extract_resource_names(text);
        self.merge_names(names.iter().map(String::as_str), language)
    }

    /// Registers the resources of `steps` and all of their descendants.
    pub fn merge_steps(&mut self, steps: &[Step], language: Language) -> usize {
        steps
            .iter()
            .map(|step| {
                self.merge_names(step.resources.iter().map(String::as_str), language)
                    + step
                        .sub_steps
                        .as_deref()
                        .map_or(0, |children| self.merge_steps(children, language))
            })
            .sum()
    }

    /// Registers the resources of every step in `items`.
    pub fn merge_plan(&mut self, items: &[PlanItem], language: Language) -> usize {
        items
            .iter()
            .map(|item| self.merge_steps(item.steps(), language))
            .sum()
    }

    /// Applies `update` to the resource with the given id.
    pub fn update<F>(&mut self, id: &ResourceId, update: F) -> bool
    where
        F: FnOnce(&mut Resource),
    {
        match self.get_mut(id) {
            Some(resource) => {
                update(resource);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<'a> IntoIterator for &'a ResourceRegistry {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Resource>> for ResourceRegistry {
    fn from(resources: Vec<Resource>) -> Self {
        Self(resources)
    }
}
