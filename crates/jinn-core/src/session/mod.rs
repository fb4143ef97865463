//! The planning session: state, reducer and generation dispatch.
//!
//! A [`Session`] owns one [`GoalState`] and mutates it only through
//! [`reduce`]. User intents and generation results are both expressed as
//! [`Action`]s; the reducer answers an intent with an optional [`Request`]
//! for the generator, and the request's completion is fed back in as another
//! action.
//!
//! ```text
//! ┌──────────┐  Action   ┌──────────┐  Request  ┌───────────┐
//! │  caller  │──────────▶│  reduce  │──────────▶│ Generator │
//! └──────────┘           └──────────┘           └───────────┘
//!                             ▲    completion Action  │
//!                             └───────────────────────┘
//! ```
//!
//! [`Session::dispatch`] runs that loop to completion. Callers that want
//! several requests in flight at once can use [`Session::apply`] and
//! [`Request::execute`] directly; every completion is reduced against the
//! latest state, so interleaving is safe.
//!
//! # Examples
//!
//! ```rust
//! use jinn_core::models::Stage;
//! use jinn_core::session::{Action, SessionBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_database_path(Some("jinn.db"))
//!     .build()
//!     .await?;
//!
//! session.apply(Action::set_goal("Learn to bake bread", None, None));
//! session.dispatch(Action::GenerateStrategies).await;
//!
//! // Without a configured generator the request fails and the session is
//! // returned to the goal form with a message.
//! assert_eq!(session.state().stage, Stage::Input);
//! assert!(session.state().error.is_some());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::generator::Generator;
use crate::models::GoalState;

pub mod actions;
pub mod builder;
pub mod process_ops;
pub mod reducer;
pub mod requests;

mod resource_ops;
mod step_ops;
mod strategy_ops;

#[cfg(test)]
mod tests;

pub use actions::{Action, EditMode};
pub use builder::SessionBuilder;
pub use reducer::reduce;
pub use requests::Request;

/// Default number of saved processes returned by a history listing.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// One interactive planning session.
pub struct Session {
    state: GoalState,
    generator: Arc<dyn Generator>,
    pub(crate) db_path: PathBuf,
    history_limit: usize,
}

impl Session {
    pub(crate) fn new(
        state: GoalState,
        generator: Arc<dyn Generator>,
        db_path: PathBuf,
        history_limit: usize,
    ) -> Self {
        Self {
            state,
            generator,
            db_path,
            history_limit,
        }
    }

    pub fn state(&self) -> &GoalState {
        &self.state
    }

    pub fn generator(&self) -> Arc<dyn Generator> {
        Arc::clone(&self.generator)
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Reduces one action without running any generation.
    pub fn apply(&mut self, action: Action) -> Option<Request> {
        reduce(&mut self.state, action)
    }

    /// Reduces `action` and then runs every request it leads to, applying
    /// each completion as it arrives.
    pub async fn dispatch(&mut self, action: Action) {
        let generator = Arc::clone(&self.generator);
        let mut next = self.apply(action);
        while let Some(request) = next {
            let completion = request.execute(generator.as_ref()).await;
            next = self.apply(completion);
        }
    }
}
