//! Plain-text export of the active plan and the resource checklists.
//!
//! The output is a pure function of [`GoalState`]: one `[x]` or `[ ]`
//! checkbox per step at every depth, followed by one per acquisition step.

use std::fmt;

use crate::models::{GoalState, Language, PlanItem, Step};

/// Default file name used when exporting to disk.
pub const DEFAULT_EXPORT_FILE: &str = "jinn-plan.md";

const SEPARATOR: &str = "--------------------------------";
const INDENT: &str = "   ";

struct Labels {
    title: &'static str,
    goal: &'static str,
    specifics: &'static str,
    environment: &'static str,
    selected: &'static str,
    roadmap: &'static str,
    simultaneous: &'static str,
    resources: &'static str,
    not_generated: &'static str,
}

const EN: Labels = Labels {
    title: "Jinn Plan",
    goal: "Goal",
    specifics: "Specifics",
    environment: "Environment",
    selected: "Selected Strategy",
    roadmap: "Roadmap",
    simultaneous: "Simultaneously",
    resources: "Resources",
    not_generated: "(Plan not generated yet)",
};

const ZH: Labels = Labels {
    title: "Jinn 计划",
    goal: "目标",
    specifics: "具体要求",
    environment: "环境",
    selected: "已选策略",
    roadmap: "路线图",
    simultaneous: "同时进行",
    resources: "资源",
    not_generated: "（尚未生成计划）",
};

fn labels(language: Language) -> &'static Labels {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
    }
}

/// Export rendering of a session, labeled in the session's language.
///
/// ```rust
/// use jinn_core::display::PlanExport;
/// use jinn_core::models::{GoalState, Language};
///
/// let mut state = GoalState::new(Language::En);
/// state.description = "Fix the bike".to_string();
/// assert!(PlanExport(&state).to_string().contains("Goal: Fix the bike"));
/// ```
pub struct PlanExport<'a>(pub &'a GoalState);

impl fmt::Display for PlanExport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        let labels = labels(state.language);

        writeln!(f, "{}\n", labels.title)?;
        writeln!(f, "{}: {}", labels.goal, state.description)?;
        if let Some(quantification) = &state.quantification {
            writeln!(f, "{}: {quantification}", labels.specifics)?;
        }
        if let Some(environment) = &state.environment {
            writeln!(f, "{}: {environment}", labels.environment)?;
        }

        if let Some(strategy) = state.active_strategy() {
            writeln!(f, "\n{SEPARATOR}\n")?;
            writeln!(f, "{}: {}", labels.selected, strategy.title)?;
            writeln!(f, "{}\n", strategy.description)?;
            writeln!(f, "{}:", labels.roadmap)?;

            match strategy.plan.as_deref() {
                Some(plan) if !plan.is_empty() => {
                    for (index, item) in plan.iter().enumerate() {
                        write_item(f, labels, index + 1, item)?;
                    }
                }
                _ => writeln!(f, "{}", labels.not_generated)?,
            }
        }

        if !state.resources.is_empty() {
            writeln!(f, "\n{SEPARATOR}\n")?;
            writeln!(f, "{}:", labels.resources)?;
            for resource in &state.resources {
                writeln!(f, "\n## {}", resource.name)?;
                match &resource.acquisition_steps {
                    Some(steps) => {
                        for (index, step) in steps.iter().enumerate() {
                            writeln!(f, "{}. {} {}", index + 1, checkbox(step), step.instruction)?;
                        }
                    }
                    None => writeln!(f, "{}", labels.not_generated)?,
                }
            }
        }

        Ok(())
    }
}

fn write_item(
    f: &mut fmt::Formatter<'_>,
    labels: &Labels,
    number: usize,
    item: &PlanItem,
) -> fmt::Result {
    match item {
        PlanItem::Single { step } => {
            writeln!(f, "{number}. {} {}", checkbox(step), step.instruction)?;
            write_children(f, step, 1)
        }
        PlanItem::Parallel { group } => {
            writeln!(f, "{number}. {}:", labels.simultaneous)?;
            for step in &group.steps {
                writeln!(f, "{INDENT}- {} {}", checkbox(step), step.instruction)?;
                write_children(f, step, 2)?;
            }
            Ok(())
        }
    }
}

fn write_children(f: &mut fmt::Formatter<'_>, step: &Step, depth: usize) -> fmt::Result {
    for child in step.sub_steps.iter().flatten() {
        writeln!(
            f,
            "{}- {} {}",
            INDENT.repeat(depth),
            checkbox(child),
            child.instruction
        )?;
        write_children(f, child, depth + 1)?;
    }
    Ok(())
}

fn checkbox(step: &Step) -> &'static str {
    if step.is_completed {
        "[x]"
    } else {
        "[ ]"
    }
}
