use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// Commit-time conflict on a record that still exists.
    #[error("concurrency conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self { Self::NotFound(format!("{} {} not found", entity, id)) }

    /// Outcome of an update whose write matched no row: the record either
    /// vanished in between (not found) or changed under us (fatal).
    pub fn from_update_conflict(entity: &str, id: i32, still_exists: bool) -> Self {
        if still_exists {
            Self::Conflict(format!("{} {} was modified concurrently", entity, id))
        } else {
            Self::not_found(entity, id)
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self { Self::Db(e.to_string()) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}
