//! Display formatting for session state.
//!
//! Models implement [`std::fmt::Display`] directly; views that need context
//! (a numbered list, the active plan with step paths, the export) are newtype
//! wrappers. Everything renders to markdown, which the CLI passes through its
//! terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Saved process, strategy and resource lists
//! - [`datetime`]: Date/time formatting utilities
//! - [`export`]: Deterministic plain-text export ([`PlanExport`])
//! - [`models`]: Display implementations for domain models
//! - [`plan`]: The active plan with addressable step paths ([`PlanView`])
//! - [`status`]: One-line operation confirmations

pub mod collections;
pub mod datetime;
pub mod export;
pub mod models;
pub mod plan;
pub mod status;

pub use collections::{ResourceList, SavedProcesses, Strategies};
pub use datetime::LocalDateTime;
pub use export::{PlanExport, DEFAULT_EXPORT_FILE};
pub use plan::{member_suffix, resolve_step_path, PlanView};
pub use status::OperationStatus;
