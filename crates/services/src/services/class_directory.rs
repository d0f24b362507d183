//! Service for listing the class labels (kelas) students are grouped into.

use db::models::user::User;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::debug;
use ts_rs::TS;

#[derive(Debug, Error)]
pub enum ClassDirectoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Sorted, duplicate-free class labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct ClassList {
    pub classes: Vec<String>,
}

impl ClassList {
    /// Normalize raw labels into ascending order without duplicates.
    pub fn from_labels(mut labels: Vec<String>) -> Self {
        labels.sort_unstable();
        labels.dedup();
        Self { classes: labels }
    }
}

pub struct ClassDirectoryService;

impl ClassDirectoryService {
    /// Fetch the distinct class labels of all students, sorted ascending.
    pub async fn list_classes(pool: &SqlitePool) -> Result<ClassList, ClassDirectoryError> {
        let labels = User::find_distinct_student_classes(pool).await?;
        let list = ClassList::from_labels(labels);
        debug!(count = list.classes.len(), "Listed student classes");
        Ok(list)
    }
}
