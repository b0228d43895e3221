//! Record repository.
//!
//! A thin, typed facade over the injected [`TableStore`]. The repository
//! owns the JSON boundary (encoding `New*` shapes on the way in, decoding
//! stored rows on the way out) and nothing else: no caching, no retry, no
//! local referential checks. Identifiers and timestamps on returned
//! records are the store's, never invented here.
//!
//! The store handle arrives through the constructor and is the only way
//! this module reaches the backend; there is no ambient client. Tests pass
//! a `MemoryStore`.

use crate::entities::{Patient, PatientUpdate, Record};
use crate::{ChartError, ChartResult};
use chartwell_store::{Filter, Ordering, TableStore};
use std::sync::Arc;
use uuid::Uuid;

/// Create and list operations for clinical records.
#[derive(Clone)]
pub struct RecordRepository {
    store: Arc<dyn TableStore>,
}

impl RecordRepository {
    /// Creates a repository over the given store.
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    /// Inserts one record and returns the persisted row.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::Persistence` when the store rejects the insert
    /// or the transport fails, and `ChartError::Serialization` /
    /// `ChartError::Deserialization` when a row cannot cross the JSON
    /// boundary.
    pub async fn create<R: Record>(&self, new: &R::New) -> ChartResult<R> {
        let row = serde_json::to_value(new).map_err(ChartError::Serialization)?;
        let stored = self.store.insert(R::TABLE, row).await?;
        serde_json::from_value(stored).map_err(ChartError::Deserialization)
    }

    /// Lists one patient's records of type `R`, ordered by `R::ORDER_BY`
    /// descending.
    ///
    /// Absence of rows yields an empty vec, never an error.
    pub async fn list_for_patient<R: Record>(&self, patient_id: Uuid) -> ChartResult<Vec<R>> {
        let rows = self
            .store
            .select(
                R::TABLE,
                Some(Filter::patient(patient_id)),
                Ordering::descending(R::ORDER_BY),
            )
            .await?;

        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(ChartError::Deserialization))
            .collect()
    }

    /// Lists all patients, newest first.
    pub async fn list_patients(&self) -> ChartResult<Vec<Patient>> {
        let rows = self
            .store
            .select(
                Patient::TABLE,
                None,
                Ordering::descending(Patient::ORDER_BY),
            )
            .await?;

        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(ChartError::Deserialization))
            .collect()
    }

    /// Replaces an existing patient's demographic fields.
    ///
    /// Patient is the only entity with an edit path; child records are
    /// append-only.
    pub async fn update_patient(&self, id: Uuid, update: &PatientUpdate) -> ChartResult<Patient> {
        let patch = serde_json::to_value(update).map_err(ChartError::Serialization)?;
        let stored = self.store.update(Patient::TABLE, id, patch).await?;
        serde_json::from_value(stored).map_err(ChartError::Deserialization)
    }
}
