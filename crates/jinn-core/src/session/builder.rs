//! Builder for creating and configuring Session instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;
use tokio::task;

use super::{Session, DEFAULT_HISTORY_LIMIT};
use crate::{
    db::Database,
    error::{JinnError, Result},
    generator::{Generator, UnavailableGenerator},
    models::{GoalState, Language},
};

/// Builder for creating and configuring Session instances.
#[derive(Clone)]
pub struct SessionBuilder {
    database_path: Option<PathBuf>,
    generator: Option<Arc<dyn Generator>>,
    language: Language,
    history_limit: usize,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            generator: None,
            language: Language::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/jinn/jinn.db` or `~/.local/share/jinn/jinn.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the generation backend. Without one, every generation request
    /// fails.
    pub fn with_generator(mut self, generator: Arc<dyn Generator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Caps how many saved processes a history listing returns.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Builds the configured session.
    ///
    /// # Errors
    ///
    /// Returns `JinnError::InvalidInput` if the history limit is zero
    /// Returns `JinnError::FileSystem` if the database path is invalid
    /// Returns `JinnError::Database` if database initialization fails
    pub async fn build(self) -> Result<Session> {
        if self.history_limit == 0 {
            return Err(JinnError::invalid_input("history_limit").with_reason("must be at least 1"));
        }

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| JinnError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), JinnError>(())
        })
        .await
        .map_err(|e| JinnError::join(&e))??;

        let generator: Arc<dyn Generator> = match self.generator {
            Some(generator) => generator,
            None => Arc::new(UnavailableGenerator),
        };
        debug!(
            "Session ready with {} generator, database at {}",
            generator.name(),
            db_path.display()
        );

        Ok(Session::new(
            GoalState::new(self.language),
            generator,
            db_path,
            self.history_limit,
        ))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("jinn")
            .place_data_file("jinn.db")
            .map_err(|e| JinnError::XdgDirectory(e.to_string()))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
