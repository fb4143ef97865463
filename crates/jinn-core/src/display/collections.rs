//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{SavedProcess, Strategy};
use crate::registry::ResourceRegistry;

/// Saved processes as listed in the history view, newest first.
///
/// # Examples
///
/// ```rust
/// use jinn_core::display::SavedProcesses;
///
/// assert_eq!(SavedProcesses(vec![]).to_string(), "No saved processes.\n");
/// ```
pub struct SavedProcesses(pub Vec<SavedProcess>);

impl SavedProcesses {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SavedProcess> {
        self.0.iter()
    }
}

impl fmt::Display for SavedProcesses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No saved processes.");
        }
        for process in &self.0 {
            write!(f, "{process}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SavedProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.snapshot.description, self.id)?;
        writeln!(f)?;
        if let Some(quantification) = &self.snapshot.quantification {
            writeln!(f, "- **Specifics**: {quantification}")?;
        }
        if let Some(environment) = &self.snapshot.environment {
            writeln!(f, "- **Environment**: {environment}")?;
        }
        let selected = self
            .snapshot
            .selected_strategy_id
            .as_ref()
            .and_then(|id| self.snapshot.strategies.iter().find(|s| &s.id == id));
        match selected {
            Some(strategy) => writeln!(f, "- **Strategy**: {}", strategy.title)?,
            None => writeln!(f, "- **Strategies**: {}", self.snapshot.strategies.len())?,
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(self.created_at))?;
        if self.updated_at != self.created_at {
            writeln!(f, "- **Updated**: {}", LocalDateTime(self.updated_at))?;
        }
        writeln!(f)
    }
}

/// Numbered strategy cards for the selection screen.
pub struct Strategies<'a>(pub &'a [Strategy]);

impl fmt::Display for Strategies<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No strategies yet.");
        }
        for (index, strategy) in self.0.iter().enumerate() {
            writeln!(f, "**Option {}**", index + 1)?;
            writeln!(f)?;
            write!(f, "{strategy}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The session resource list, one line per resource.
pub struct ResourceList<'a>(pub &'a ResourceRegistry);

impl fmt::Display for ResourceList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No resources found yet.");
        }
        for resource in self.0 {
            let state = match (&resource.acquisition_steps, resource.loading) {
                (_, true) => "loading".to_string(),
                (Some(steps), false) => {
                    let done = steps.iter().filter(|step| step.is_completed).count();
                    format!("{done}/{} acquired", steps.len())
                }
                (None, false) => "not planned".to_string(),
            };
            writeln!(f, "- **{}** ({state})", resource.name)?;
        }
        Ok(())
    }
}
