//! Data models for goals, strategies, plans, steps and resources.
//!
//! Display implementations for these models live in
//! [`crate::display::models`]; the export rendering lives in
//! [`crate::display::export`].
//!
//! # Plan shape
//!
//! ```text
//! Strategy ─▶ Plan = [PlanItem]
//!                     ├─ Single   { step }
//!                     └─ Parallel { group: [step, step, ..] }
//!                                   step ─▶ sub_steps: [step, ..] ─▶ ..
//! ```
//!
//! Step ids are unique across the entire tree, including nested children and
//! parallel-group members, which is what lets the mutation engine in
//! [`crate::tree`] address any node by id alone.
//!
//! # Examples
//!
//! ```rust
//! use jinn_core::models::{PlanItem, Step};
//!
//! let step = Step::new("Buy a [Hammer] and [Nails]");
//! assert_eq!(step.resources, vec!["Hammer", "Nails"]);
//!
//! let plan = vec![PlanItem::single(step)];
//! assert_eq!(plan[0].steps().len(), 1);
//! ```

pub mod goal;
pub mod ids;
pub mod language;
pub mod plan;
pub mod process;
pub mod resource;
pub mod step;
pub mod strategy;


pub use goal::{GoalState, Stage};
pub use ids::{GroupId, ProcessId, ResourceId, StepId, StrategyId};
pub use language::Language;
pub use plan::{count_steps, ParallelGroup, Plan, PlanItem};
pub use process::{ProcessSnapshot, SavedProcess};
pub use resource::Resource;
pub use step::{Step, StepUpdate};
pub use strategy::Strategy;
