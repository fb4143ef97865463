//! Core library for the jinn planning assistant.
//!
//! A user states a goal, a generation backend proposes strategies, and the
//! chosen strategy is expanded into a nested plan of steps and parallel
//! groups. The plan stays editable: steps can be completed, expanded into
//! sub-steps, rewritten, or used as the anchor for regenerating everything
//! after them, without ever reloading sibling state.
//!
//! # Architecture
//!
//! - [`models`]: Plain data: goal state, strategies, plan items, steps and
//!   resources
//! - [`tree`]: The mutation engine that updates any step in a plan by id
//! - [`registry`]: Resource extraction from `[Name]` notation and the
//!   session-wide resource registry
//! - [`session`]: The reducer, the stage machine and request dispatch
//! - [`generator`]: The generation backend trait and a command-line
//!   implementation
//! - [`db`]: SQLite storage for saved processes
//! - [`display`]: Markdown rendering and the plain-text export
//!
//! # Quick Start
//!
//! ```rust
//! use jinn_core::{Action, SessionBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! session.apply(Action::set_goal("Repaint the kitchen", None, Some("Rented flat".into())));
//! session.dispatch(Action::GenerateStrategies).await;
//!
//! for strategy in &session.state().strategies {
//!     println!("{}", strategy.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod registry;
pub mod session;
pub mod tree;

pub use db::Database;
pub use error::{GenerationError, JinnError, Result};
pub use generator::{CommandGenerator, CommandGeneratorConfig, Generator, UnavailableGenerator};
pub use models::{GoalState, Language, Stage};
pub use session::{Action, EditMode, Request, Session, SessionBuilder};
