//! Saved process operations for the Session.

use log::{info, warn};
use tokio::task;

use super::{Action, Session};
use crate::{
    db::Database,
    error::{JinnError, Result},
    models::{ProcessId, ProcessSnapshot, SavedProcess},
};

impl Session {
    /// Saves the current goal, context and strategies for `user_id`.
    ///
    /// A storage failure leaves the session untouched apart from the
    /// localized save error message.
    pub async fn save_process(&mut self, user_id: &str) -> Result<SavedProcess> {
        if self.state.description.trim().is_empty() {
            return Err(JinnError::invalid_input("description").with_reason("cannot be empty"));
        }

        let db_path = self.db_path.clone();
        let user_id = user_id.to_string();
        let snapshot = ProcessSnapshot::from(&self.state);

        let result = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_process(&user_id, &snapshot)
        })
        .await
        .map_err(|e| JinnError::join(&e))
        .and_then(|inner| inner);

        match &result {
            Ok(saved) => info!("Saved process {}", saved.id),
            Err(error) => {
                warn!("Saving process failed: {error}");
                self.apply(Action::ProcessSaveFailed);
            }
        }
        result
    }

    /// Overwrites a saved process with the current session contents.
    pub async fn update_process(&mut self, user_id: &str, id: &ProcessId) -> Result<SavedProcess> {
        let db_path = self.db_path.clone();
        let user_id = user_id.to_string();
        let id = id.clone();
        let snapshot = ProcessSnapshot::from(&self.state);

        let result = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_process(&user_id, &id, &snapshot)
        })
        .await
        .map_err(|e| JinnError::join(&e))
        .and_then(|inner| inner);

        if let Err(error) = &result {
            warn!("Updating process failed: {error}");
            self.apply(Action::ProcessSaveFailed);
        }
        result
    }

    /// Lists the user's saved processes, newest first, capped at the
    /// configured history limit.
    pub async fn list_processes(&self, user_id: &str) -> Result<Vec<SavedProcess>> {
        let db_path = self.db_path.clone();
        let user_id = user_id.to_string();
        let limit = self.history_limit;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_processes(&user_id, limit)
        })
        .await
        .map_err(|e| JinnError::join(&e))?
    }

    /// Retrieves one saved process.
    pub async fn get_process(&self, user_id: &str, id: &ProcessId) -> Result<Option<SavedProcess>> {
        let db_path = self.db_path.clone();
        let user_id = user_id.to_string();
        let id = id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_process(&user_id, &id)
        })
        .await
        .map_err(|e| JinnError::join(&e))?
    }

    /// Permanently deletes a saved process.
    pub async fn delete_process(&self, user_id: &str, id: &ProcessId) -> Result<()> {
        let db_path = self.db_path.clone();
        let user_id = user_id.to_string();
        let id = id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_process(&user_id, &id)
        })
        .await
        .map_err(|e| JinnError::join(&e))?
    }

    /// Replaces the session contents with a saved process.
    pub async fn load_process(&mut self, user_id: &str, id: &ProcessId) -> Result<()> {
        let saved = self
            .get_process(user_id, id)
            .await?
            .ok_or_else(|| JinnError::ProcessNotFound { id: id.to_string() })?;

        info!("Loading process {}", saved.id);
        self.apply(Action::LoadProcess(saved));
        Ok(())
    }
}
