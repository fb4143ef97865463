//! Saved process CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, JinnError, Result},
    models::{ProcessId, ProcessSnapshot, SavedProcess, Strategy, StrategyId},
};

const PROCESS_COLUMNS: &str = "id, user_id, description, quantification, environment, strategies, selected_strategy_id, created_at, updated_at";
const INSERT_PROCESS_SQL: &str = "INSERT INTO processes (id, user_id, description, quantification, environment, strategies, selected_strategy_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const UPDATE_PROCESS_SQL: &str = "UPDATE processes SET description = ?1, quantification = ?2, environment = ?3, strategies = ?4, selected_strategy_id = ?5, updated_at = ?6 WHERE id = ?7 AND user_id = ?8";
const DELETE_PROCESS_SQL: &str = "DELETE FROM processes WHERE id = ?1 AND user_id = ?2";

impl super::Database {
    /// Stores a new snapshot for `user_id`, stamped with the current time.
    pub fn create_process(
        &mut self,
        user_id: &str,
        snapshot: &ProcessSnapshot,
    ) -> Result<SavedProcess> {
        let id = ProcessId::generate();
        let now = Timestamp::now().as_microsecond();
        let strategies = serde_json::to_string(&snapshot.strategies)?;

        self.connection
            .execute(
                INSERT_PROCESS_SQL,
                params![
                    id.as_str(),
                    user_id,
                    &snapshot.description,
                    snapshot.quantification.as_deref(),
                    snapshot.environment.as_deref(),
                    &strategies,
                    snapshot.selected_strategy_id.as_ref().map(StrategyId::as_str),
                    now,
                    now,
                ],
            )
            .db_context("Failed to insert process")?;

        self.get_process(user_id, &id)?
            .ok_or_else(|| JinnError::ProcessNotFound { id: id.to_string() })
    }

    /// Lists the user's saved processes, newest first, at most `limit` rows.
    pub fn list_processes(&self, user_id: &str, limit: usize) -> Result<Vec<SavedProcess>> {
        let query = format!(
            "SELECT {PROCESS_COLUMNS} FROM processes WHERE user_id = ?1 \
             ORDER BY created_at DESC, rowid DESC LIMIT ?2"
        );
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let processes = stmt
            .query_map(params![user_id, limit], process_from_row)
            .db_context("Failed to query processes")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch processes")?;

        Ok(processes)
    }

    /// Retrieves one of the user's saved processes.
    pub fn get_process(&self, user_id: &str, id: &ProcessId) -> Result<Option<SavedProcess>> {
        let query = format!("SELECT {PROCESS_COLUMNS} FROM processes WHERE id = ?1 AND user_id = ?2");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id.as_str(), user_id], process_from_row)
            .optional()
            .db_context("Failed to query process")
    }

    /// Replaces the snapshot fields of a saved process and bumps its
    /// `updated_at`.
    pub fn update_process(
        &mut self,
        user_id: &str,
        id: &ProcessId,
        snapshot: &ProcessSnapshot,
    ) -> Result<SavedProcess> {
        let strategies = serde_json::to_string(&snapshot.strategies)?;
        let now = Timestamp::now().as_microsecond();

        let changed = self
            .connection
            .execute(
                UPDATE_PROCESS_SQL,
                params![
                    &snapshot.description,
                    snapshot.quantification.as_deref(),
                    snapshot.environment.as_deref(),
                    &strategies,
                    snapshot.selected_strategy_id.as_ref().map(StrategyId::as_str),
                    now,
                    id.as_str(),
                    user_id,
                ],
            )
            .db_context("Failed to update process")?;

        if changed == 0 {
            return Err(JinnError::ProcessNotFound { id: id.to_string() });
        }

        self.get_process(user_id, id)?
            .ok_or_else(|| JinnError::ProcessNotFound { id: id.to_string() })
    }

    /// Permanently deletes a saved process.
    pub fn delete_process(&mut self, user_id: &str, id: &ProcessId) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_PROCESS_SQL, params![id.as_str(), user_id])
            .db_context("Failed to delete process")?;

        if deleted == 0 {
            return Err(JinnError::ProcessNotFound { id: id.to_string() });
        }
        Ok(())
    }
}

fn process_from_row(row: &Row<'_>) -> rusqlite::Result<SavedProcess> {
    let strategies_json: String = row.get(5)?;
    let strategies: Vec<Strategy> = serde_json::from_str(&strategies_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(SavedProcess {
        id: ProcessId::from(row.get::<_, String>(0)?),
        user_id: row.get(1)?,
        snapshot: ProcessSnapshot {
            description: row.get(2)?,
            quantification: row.get(3)?,
            environment: row.get(4)?,
            strategies,
            selected_strategy_id: row.get::<_, Option<String>>(6)?.map(StrategyId::from),
        },
        created_at: timestamp_column(row, 7)?,
        updated_at: timestamp_column(row, 8)?,
    })
}

fn timestamp_column(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    Timestamp::from_microsecond(row.get(index)?)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Integer, Box::new(e)))
}
