//! Clinical record entity schemas.
//!
//! Patient is the aggregate root; every other entity is a child referencing
//! `patient_id`. The reference is trusted, never validated locally; the
//! store is the authority on referential integrity.
//!
//! Each entity comes in two structurally distinct shapes:
//!
//! - a `New*` type, which a form workflow submits: no identifier and no
//!   timestamps, because the store assigns both
//! - the persisted type, which `create` and the list operations return
//!
//! This split makes it impossible to read an id off a record before it has
//! been created.
//!
//! Optional fields are plain `Option<T>` **without** `skip_serializing_if`:
//! a blank optional serialises as JSON `null`, never as an omitted key.
//! The store's column defaults only apply to omitted keys, so omitting
//! blanks would silently change their meaning.
//!
//! Child entities are append-only: created once, never updated or deleted
//! here. Patient alone has an update shape ([`PatientUpdate`]).

mod chronic_condition;
mod document;
mod family_history;
mod immunization;
mod lab_result;
mod medical_record;
mod patient;
mod prescription;
mod vital_signs;

pub use chronic_condition::{
    ChronicCondition, ConditionStatus, NewChronicCondition, Severity,
};
pub use document::{Document, DocumentType, NewDocument};
pub use family_history::{FamilyHistory, FamilyHistoryStatus, NewFamilyHistory, Relationship};
pub use immunization::{AdministrationSite, Immunization, NewImmunization};
pub use lab_result::{LabResult, LabStatus, NewLabResult, TestCategory};
pub use medical_record::{MedicalRecord, NewMedicalRecord};
pub use patient::{NewPatient, Patient, PatientUpdate};
pub use prescription::{NewPrescription, Prescription};
pub use vital_signs::{NewVitalSigns, VitalSigns};

/// Binds a persisted entity to its table and list ordering.
///
/// `ORDER_BY` is the type-specific column the patient's list of this
/// entity is sorted by, always descending (newest first).
pub trait Record: serde::de::DeserializeOwned + Send {
    /// Backend table name.
    const TABLE: &'static str;

    /// Column the per-patient list is ordered by, descending.
    const ORDER_BY: &'static str;

    /// The shape submitted to create a row of this entity.
    type New: serde::Serialize + Send + Sync;
}
