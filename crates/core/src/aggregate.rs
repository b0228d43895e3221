//! Patient aggregate loading.
//!
//! A patient's chart is the composition of eight independent child
//! collections. The loader fetches all eight concurrently (fan-out, then
//! a join that completes when every fetch has settled), so total latency
//! is bounded by the slowest single collection rather than the sum.
//! Ordering between the individual fetches is unspecified and must not
//! be assumed.
//!
//! ## Degradation policy
//!
//! Loading is **best-effort**: a failed fetch degrades that collection to
//! empty with a warning, and the remaining collections are unaffected.
//! A missing tab is preferred over a dead detail view, at the cost of
//! "no records" being indistinguishable from "fetch failed" in the
//! composed chart, which is why every degradation is logged.
//!
//! ## Refresh and cancellation
//!
//! There is no incremental refresh: re-invoking [`ChartLoader::load`]
//! re-runs all eight fetches. The returned future is owned by the caller;
//! dropping it (a view being torn down) cancels every in-flight fetch.

use crate::entities::{
    ChronicCondition, Document, FamilyHistory, Immunization, LabResult, MedicalRecord, Patient,
    Prescription, Record, VitalSigns,
};
use crate::repository::RecordRepository;
use crate::ChartResult;

/// A patient's full chart: the root record plus all eight child
/// collections, each ordered newest-first.
#[derive(Clone, Debug)]
pub struct PatientChart {
    pub patient: Patient,
    pub medical_records: Vec<MedicalRecord>,
    pub prescriptions: Vec<Prescription>,
    pub documents: Vec<Document>,
    pub vital_signs: Vec<VitalSigns>,
    pub chronic_conditions: Vec<ChronicCondition>,
    pub lab_results: Vec<LabResult>,
    pub immunizations: Vec<Immunization>,
    pub family_history: Vec<FamilyHistory>,
}

/// Assembles [`PatientChart`]s from the repository.
#[derive(Clone)]
pub struct ChartLoader {
    repo: RecordRepository,
}

impl ChartLoader {
    pub fn new(repo: RecordRepository) -> Self {
        Self { repo }
    }

    /// Loads the full chart for one patient.
    ///
    /// All eight collection fetches run concurrently; the future resolves
    /// once the slowest has settled. Individual failures degrade to empty
    /// collections (see the module docs for the policy).
    pub async fn load(&self, patient: Patient) -> PatientChart {
        let id = patient.id;

        let (
            medical_records,
            prescriptions,
            documents,
            vital_signs,
            chronic_conditions,
            lab_results,
            immunizations,
            family_history,
        ) = futures::join!(
            self.repo.list_for_patient::<MedicalRecord>(id),
            self.repo.list_for_patient::<Prescription>(id),
            self.repo.list_for_patient::<Document>(id),
            self.repo.list_for_patient::<VitalSigns>(id),
            self.repo.list_for_patient::<ChronicCondition>(id),
            self.repo.list_for_patient::<LabResult>(id),
            self.repo.list_for_patient::<Immunization>(id),
            self.repo.list_for_patient::<FamilyHistory>(id),
        );

        PatientChart {
            patient,
            medical_records: or_empty(medical_records),
            prescriptions: or_empty(prescriptions),
            documents: or_empty(documents),
            vital_signs: or_empty(vital_signs),
            chronic_conditions: or_empty(chronic_conditions),
            lab_results: or_empty(lab_results),
            immunizations: or_empty(immunizations),
            family_history: or_empty(family_history),
        }
    }
}

fn or_empty<R: Record>(result: ChartResult<Vec<R>>) -> Vec<R> {
    match result {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(table = R::TABLE, "chart collection degraded to empty: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{NewMedicalRecord, NewPatient, NewPrescription};
    use chartwell_store::{
        Filter, MemoryStore, Ordering, StoreError, StoreResult, TableStore,
    };
    use chrono::NaiveDate;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use uuid::Uuid;

    fn new_patient() -> NewPatient {
        NewPatient {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15).expect("date should be valid"),
            gender: "female".into(),
            phone: None,
            email: None,
            address: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            blood_type: None,
            allergies: None,
        }
    }

    async fn seeded_patient(repo: &RecordRepository) -> Patient {
        repo.create(&new_patient())
            .await
            .expect("patient create should succeed")
    }

    #[tokio::test]
    async fn test_chart_with_no_child_rows_is_all_empty_collections() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let patient = seeded_patient(&repo).await;

        let chart = ChartLoader::new(repo).load(patient).await;

        assert!(chart.medical_records.is_empty());
        assert!(chart.prescriptions.is_empty());
        assert!(chart.documents.is_empty());
        assert!(chart.vital_signs.is_empty());
        assert!(chart.chronic_conditions.is_empty());
        assert!(chart.lab_results.is_empty());
        assert!(chart.immunizations.is_empty());
        assert!(chart.family_history.is_empty());
    }

    #[tokio::test]
    async fn test_one_failing_collection_degrades_alone() {
        let store = Arc::new(MemoryStore::new());
        let repo = RecordRepository::new(store.clone());
        let patient = seeded_patient(&repo).await;

        let _: MedicalRecord = repo
            .create(&NewMedicalRecord {
                patient_id: patient.id,
                doctor_name: "Dr. Osei".into(),
                visit_date: "2024-03-01".parse().expect("date should parse"),
                diagnosis: None,
                symptoms: None,
                treatment: None,
                notes: None,
            })
            .await
            .expect("create should succeed");
        let _: Prescription = repo
            .create(&NewPrescription {
                patient_id: patient.id,
                medical_record_id: None,
                medication_name: "Metformin".into(),
                dosage: "500 mg".into(),
                frequency: "twice daily".into(),
                duration: None,
                prescribed_date: "2024-03-01".parse().expect("date should parse"),
            })
            .await
            .expect("create should succeed");

        store.fail_table("prescriptions");

        let chart = ChartLoader::new(repo).load(patient).await;

        assert!(
            chart.prescriptions.is_empty(),
            "failing collection should degrade to empty"
        );
        assert_eq!(
            chart.medical_records.len(),
            1,
            "healthy collections should be unaffected"
        );
    }

    #[tokio::test]
    async fn test_reload_recovers_a_restored_collection() {
        let store = Arc::new(MemoryStore::new());
        let repo = RecordRepository::new(store.clone());
        let patient = seeded_patient(&repo).await;

        let _: MedicalRecord = repo
            .create(&NewMedicalRecord {
                patient_id: patient.id,
                doctor_name: "Dr. Osei".into(),
                visit_date: "2024-03-01".parse().expect("date should parse"),
                diagnosis: None,
                symptoms: None,
                treatment: None,
                notes: None,
            })
            .await
            .expect("create should succeed");

        store.fail_table("medical_records");
        let loader = ChartLoader::new(repo);
        let degraded = loader.load(patient.clone()).await;
        assert!(degraded.medical_records.is_empty());

        store.restore_table("medical_records");
        let reloaded = loader.load(patient).await;
        assert_eq!(reloaded.medical_records.len(), 1);
    }

    /// A store whose selects sleep for a per-table duration, for the
    /// wall-clock property.
    struct SlowEmptyStore {
        delays_ms: HashMap<&'static str, u64>,
    }

    #[async_trait::async_trait]
    impl TableStore for SlowEmptyStore {
        async fn insert(&self, table: &str, _row: Value) -> StoreResult<Value> {
            Err(StoreError::Unavailable(table.to_owned()))
        }

        async fn select(
            &self,
            table: &str,
            _filter: Option<Filter>,
            _order: Ordering,
        ) -> StoreResult<Vec<Value>> {
            let delay = self.delays_ms.get(table).copied().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            Ok(Vec::new())
        }

        async fn update(&self, table: &str, _id: Uuid, _patch: Value) -> StoreResult<Value> {
            Err(StoreError::Unavailable(table.to_owned()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_completes_with_the_slowest_fetch_not_the_sum() {
        let store = SlowEmptyStore {
            delays_ms: HashMap::from([
                ("medical_records", 10),
                ("prescriptions", 50),
                ("documents", 5),
            ]),
        };
        let repo = RecordRepository::new(Arc::new(store));

        let patient = Patient {
            id: Uuid::new_v4(),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15).expect("date should be valid"),
            gender: "female".into(),
            phone: None,
            email: None,
            address: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            blood_type: None,
            allergies: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let started = tokio::time::Instant::now();
        let chart = ChartLoader::new(repo).load(patient).await;
        let elapsed = started.elapsed();

        // Concurrent fan-out: bounded by the 50ms fetch, nowhere near the
        // 65ms a sequential walk would take. Paused time makes this exact.
        assert_eq!(elapsed, Duration::from_millis(50));
        assert!(chart.medical_records.is_empty());
    }
}
