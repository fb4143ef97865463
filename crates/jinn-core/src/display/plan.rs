//! Interactive view of a strategy's plan with addressable step paths.
//!
//! Paths are 1-based: `2` is the second item, `2b` the second member of a
//! parallel group at position 2, and `.N` descends into a step's children,
//! as in `2b.1`.

use std::fmt;

use crate::models::{PlanItem, Step, Strategy};

/// Letter suffix of the parallel member at `index` (0-based).
pub fn member_suffix(index: usize) -> String {
    let mut suffix = String::new();
    let mut n = index;
    loop {
        suffix.insert(0, char::from(b'a' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    suffix
}

/// Position of the parallel member labeled `suffix`, the inverse of
/// [`member_suffix`].
fn member_index(suffix: &str) -> Option<usize> {
    if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }
    suffix
        .bytes()
        .try_fold(0usize, |acc, b| {
            acc.checked_mul(26)?.checked_add(usize::from(b - b'a') + 1)
        })
        .map(|value| value - 1)
}

/// Finds the step addressed by a path label such as `3`, `2b` or `2b.1`.
/// Collapsed children are addressable too.
pub fn resolve_step_path<'a>(plan: &'a [PlanItem], path: &str) -> Option<&'a Step> {
    let path = path.trim().to_ascii_lowercase();
    let mut segments = path.split('.');
    let head = segments.next()?;

    let digits = head
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(head.len());
    let number: usize = head[..digits].parse().ok()?;
    let item = plan.get(number.checked_sub(1)?)?;

    let mut step = match (item, &head[digits..]) {
        (PlanItem::Single { step }, "") => step,
        (PlanItem::Parallel { group }, suffix) => group.steps.get(member_index(suffix)?)?,
        _ => return None,
    };
    for segment in segments {
        let index: usize = segment.parse().ok()?;
        step = step.sub_steps.as_deref()?.get(index.checked_sub(1)?)?;
    }
    Some(step)
}

/// The active plan with a path label in front of every visible step.
pub struct PlanView<'a>(pub &'a Strategy);

impl fmt::Display for PlanView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = self.0;
        writeln!(f, "# {}", strategy.title)?;
        writeln!(f)?;
        writeln!(f, "{}", strategy.description)?;
        writeln!(f)?;

        let Some(plan) = strategy.plan.as_deref().filter(|plan| !plan.is_empty()) else {
            return writeln!(f, "No plan generated yet.");
        };

        for (index, item) in plan.iter().enumerate() {
            let number = index + 1;
            match item {
                PlanItem::Single { step } => write_step(f, &number.to_string(), step, 0)?,
                PlanItem::Parallel { group } => {
                    writeln!(f, "* **{number}** Simultaneously:")?;
                    for (member, step) in group.steps.iter().enumerate() {
                        write_step(f, &format!("{number}{}", member_suffix(member)), step, 1)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn write_step(f: &mut fmt::Formatter<'_>, path: &str, step: &Step, depth: usize) -> fmt::Result {
    let mark = if step.is_completed { "x" } else { " " };
    write!(
        f,
        "{}* **{path}** [{mark}] {}",
        "  ".repeat(depth),
        step.instruction
    )?;
    if step.loading {
        write!(f, " _(loading…)_")?;
    } else if let Some(children) = step.sub_steps.as_ref().filter(|_| !step.is_expanded) {
        write!(f, " _(+{} hidden)_", children.len())?;
    }
    writeln!(f)?;

    if step.is_expanded {
        for (index, child) in step.sub_steps.iter().flatten().enumerate() {
            write_step(f, &format!("{path}.{}", index + 1), child, depth + 1)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_suffix() {
        assert_eq!(member_suffix(0), "a");
        assert_eq!(member_suffix(1), "b");
        assert_eq!(member_suffix(25), "z");
        assert_eq!(member_suffix(26), "aa");
    }

    #[test]
    fn test_member_index_inverts_suffix() {
        for index in [0, 1, 25, 26, 27, 701, 702] {
            assert_eq!(member_index(&member_suffix(index)), Some(index));
        }
        assert_eq!(member_index(""), None);
        assert_eq!(member_index("a1"), None);
    }

    #[test]
    fn test_resolve_step_path() {
        let mut b = Step::new("Buy [Paint]");
        let child = Step::new("Pick a color");
        let child_id = child.id.clone();
        b.sub_steps = Some(vec![child]);
        let first = Step::new("Measure");
        let first_id = first.id.clone();
        let plan = vec![
            PlanItem::single(first),
            PlanItem::parallel(vec![Step::new("Tape"), b]),
        ];

        assert_eq!(resolve_step_path(&plan, "1").map(|s| &s.id), Some(&first_id));
        assert_eq!(resolve_step_path(&plan, " 2B.1 ").map(|s| &s.id), Some(&child_id));
        assert_eq!(
            resolve_step_path(&plan, "2a").map(|s| s.instruction.as_str()),
            Some("Tape")
        );
        for invalid in ["0", "2", "1a", "2c", "3", "1.1", "2b.2", "x", ""] {
            assert!(resolve_step_path(&plan, invalid).is_none(), "{invalid}");
        }
    }

    #[test]
    fn test_plan_view_paths() {
        let mut b = Step::new("Buy [Paint]");
        b.sub_steps = Some(vec![Step::new("Pick a color")]);
        b.is_expanded = true;
        let mut c = Step::new("Buy [Brushes]");
        c.sub_steps = Some(vec![Step::new("Compare prices")]);
        let mut d = Step::new("Paint");
        d.loading = true;

        let mut strategy = Strategy::new("DIY", "Do it yourself");
        strategy.plan = Some(vec![
            PlanItem::single(Step::new("Measure")),
            PlanItem::parallel(vec![b, c]),
            PlanItem::single(d),
        ]);

        let text = PlanView(&strategy).to_string();
        assert!(text.contains("* **1** [ ] Measure\n"));
        assert!(text.contains("  * **2a** [ ] Buy [Paint]\n"));
        assert!(text.contains("    * **2a.1** [ ] Pick a color\n"));
        assert!(text.contains("  * **2b** [ ] Buy [Brushes] _(+1 hidden)_\n"));
        assert!(!text.contains("Compare prices"));
        assert!(text.contains("* **3** [ ] Paint _(loading…)_\n"));
    }
}
