//! Display implementations for domain models.
//!
//! Output is markdown, rendered to the terminal by the CLI.

use std::fmt;

use crate::models::{GoalState, Language, Resource, Stage, Strategy};

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for GoalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unset = "_(not set)_";
        writeln!(f, "# Goal")?;
        writeln!(f)?;
        if self.description.is_empty() {
            writeln!(f, "- **Goal**: {unset}")?;
        } else {
            writeln!(f, "- **Goal**: {}", self.description)?;
        }
        writeln!(
            f,
            "- **Specifics**: {}",
            self.quantification.as_deref().unwrap_or(unset)
        )?;
        writeln!(
            f,
            "- **Environment**: {}",
            self.environment.as_deref().unwrap_or(unset)
        )?;
        writeln!(f, "- **Language**: {}", self.language)?;
        writeln!(f, "- **Stage**: {}", self.stage)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        if let Some(approach) = &self.approach_type {
            writeln!(f, "- **Approach**: {approach}")?;
        }
        if let Some(first_action) = &self.first_action {
            writeln!(f, "- **First action**: {first_action}")?;
        }
        if let Some(advantage) = &self.key_advantage {
            writeln!(f, "- **Key advantage**: {advantage}")?;
        }
        if let (Some(plan), Some(language)) = (&self.plan, self.plan_language) {
            writeln!(f, "- **Plan**: {} items cached ({language})", plan.len())?;
        }
        Ok(())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## {}", self.name)?;
        if self.loading {
            write!(f, " (loading…)")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        if !self.is_expanded {
            return Ok(());
        }
        match &self.acquisition_steps {
            Some(steps) => {
                for (index, step) in steps.iter().enumerate() {
                    let mark = if step.is_completed { "x" } else { " " };
                    writeln!(f, "{}. [{mark}] {}", index + 1, step.instruction)?;
                }
            }
            None if self.loading => {}
            None => writeln!(f, "No acquisition plan yet.")?,
        }
        Ok(())
    }
}
