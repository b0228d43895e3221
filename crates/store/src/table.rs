//! The table-store trait and its query vocabulary.

use crate::StoreResult;
use serde_json::Value;
use uuid::Uuid;

/// An equality filter on a single column.
///
/// The only filter shape the system ever issues: child collections are
/// selected by `patient_id = <uuid>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub value: String,
}

impl Filter {
    /// Filter rows where `column` equals the given value.
    pub fn eq(column: &'static str, value: impl ToString) -> Self {
        Self {
            column,
            value: value.to_string(),
        }
    }

    /// The standard child-collection filter.
    pub fn patient(patient_id: Uuid) -> Self {
        Self::eq("patient_id", patient_id)
    }
}

/// Sort order for a select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ordering {
    pub column: &'static str,
    pub descending: bool,
}

impl Ordering {
    /// Newest-first ordering on the given column, the only ordering the
    /// record lists use.
    pub fn descending(column: &'static str) -> Self {
        Self {
            column,
            descending: true,
        }
    }
}

/// Create/select/update operations against one named table.
///
/// Implementations must assign row identifiers and creation timestamps
/// themselves (callers never invent them) and must return the stored
/// representation from `insert` and `update` so the caller can read the
/// assigned values back.
#[async_trait::async_trait]
pub trait TableStore: Send + Sync {
    /// Insert one row and return the stored representation.
    async fn insert(&self, table: &str, row: Value) -> StoreResult<Value>;

    /// Select rows, optionally filtered, in the given order.
    ///
    /// Absence of rows yields an empty vec, never an error.
    async fn select(
        &self,
        table: &str,
        filter: Option<Filter>,
        order: Ordering,
    ) -> StoreResult<Vec<Value>>;

    /// Patch one row by id and return the stored representation.
    async fn update(&self, table: &str, id: Uuid, patch: Value) -> StoreResult<Value>;
}
