//! In-memory table store for tests and local development.
//!
//! Behaves like the hosted store where it matters to callers: identifiers
//! and timestamps are assigned on insert, selects honour the requested
//! ordering, and absent tables read as empty. Per-table failure injection
//! lets tests drive the degraded paths (swallowed create errors, partial
//! aggregate fetches) without a network.

use crate::{Filter, Ordering, StoreError, StoreResult, TableStore};
use chrono::Utc;
use serde_json::Value;
use std::cmp::Ordering as CmpOrdering;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use uuid::Uuid;

/// Timestamp columns the hosted store populates via column defaults.
const STORE_ASSIGNED_TIMESTAMPS: [&str; 3] = ["created_at", "updated_at", "uploaded_at"];

/// An in-process [`TableStore`] fake.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    failing: Mutex<HashSet<String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation on `table` fail with
    /// [`StoreError::Unavailable`].
    pub fn fail_table(&self, table: &str) {
        self.failing
            .lock()
            .expect("failure set lock poisoned")
            .insert(table.to_owned());
    }

    /// Clears failure injection for `table`.
    pub fn restore_table(&self, table: &str) {
        self.failing
            .lock()
            .expect("failure set lock poisoned")
            .remove(table);
    }

    /// Number of rows currently held for `table`.
    pub fn row_count(&self, table: &str) -> usize {
        self.tables
            .lock()
            .expect("table lock poisoned")
            .get(table)
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn check_available(&self, table: &str) -> StoreResult<()> {
        let failing = self.failing.lock().expect("failure set lock poisoned");
        if failing.contains(table) {
            return Err(StoreError::Unavailable(table.to_owned()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TableStore for MemoryStore {
    async fn insert(&self, table: &str, row: Value) -> StoreResult<Value> {
        self.check_available(table)?;

        let Value::Object(mut fields) = row else {
            return Err(StoreError::Rejected {
                status: 400,
                body: format!("table `{table}` expects a JSON object row"),
            });
        };

        fields.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
        let now = Value::String(Utc::now().to_rfc3339());
        for column in STORE_ASSIGNED_TIMESTAMPS {
            fields
                .entry(column)
                .or_insert_with(|| now.clone());
        }

        let stored = Value::Object(fields);
        self.tables
            .lock()
            .expect("table lock poisoned")
            .entry(table.to_owned())
            .or_default()
            .push(stored.clone());

        Ok(stored)
    }

    async fn select(
        &self,
        table: &str,
        filter: Option<Filter>,
        order: Ordering,
    ) -> StoreResult<Vec<Value>> {
        self.check_available(table)?;

        let tables = self.tables.lock().expect("table lock poisoned");
        let mut rows: Vec<Value> = tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| match &filter {
                        Some(filter) => column_text(row, filter.column)
                            .map(|v| v == filter.value)
                            .unwrap_or(false),
                        None => true,
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        rows.sort_by(|a, b| {
            let ordering = column_cmp(a.get(order.column), b.get(order.column));
            if order.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });

        Ok(rows)
    }

    async fn update(&self, table: &str, id: Uuid, patch: Value) -> StoreResult<Value> {
        self.check_available(table)?;

        let Value::Object(patch_fields) = patch else {
            return Err(StoreError::Rejected {
                status: 400,
                body: format!("table `{table}` expects a JSON object patch"),
            });
        };

        let mut tables = self.tables.lock().expect("table lock poisoned");
        let rows = tables.entry(table.to_owned()).or_default();
        let id_text = id.to_string();

        let row = rows
            .iter_mut()
            .find(|row| column_text(row, "id").as_deref() == Some(id_text.as_str()))
            .ok_or_else(|| StoreError::RowNotFound {
                table: table.to_owned(),
                id,
            })?;

        if let Value::Object(fields) = row {
            for (key, value) in patch_fields {
                fields.insert(key, value);
            }
            fields.insert(
                "updated_at".into(),
                Value::String(Utc::now().to_rfc3339()),
            );
        }

        Ok(row.clone())
    }
}

fn column_text(row: &Value, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Compares two column values for ordering.
///
/// Dates travel as ISO-8601 strings, so lexicographic comparison sorts them
/// chronologically. Null and missing values sort before present ones, which
/// puts them last in the descending lists the repository asks for.
fn column_cmp(a: Option<&Value>, b: Option<&Value>) -> CmpOrdering {
    match (present(a), present(b)) {
        (None, None) => CmpOrdering::Equal,
        (None, Some(_)) => CmpOrdering::Less,
        (Some(_), None) => CmpOrdering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => a
                .as_f64()
                .partial_cmp(&b.as_f64())
                .unwrap_or(CmpOrdering::Equal),
            _ => CmpOrdering::Equal,
        },
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    match value {
        Some(Value::Null) | None => None,
        Some(v) => Some(v),
    }
}
