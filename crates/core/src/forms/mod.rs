//! Form submission workflows.
//!
//! One workflow per entity, all with the same state-machine shape:
//!
//! ```text
//! Editing -> Submitting -> Saved
//!                       -> Failed -> (edit) -> Editing
//! ```
//!
//! While editing, a draft of raw field text is mutated through a closed
//! enum of field-update messages, one variant per field, so there is no
//! stringly-keyed update path and every coercion rule has a fixed place to
//! live. Nothing is validated until submit.
//!
//! Submit validates required fields and coerces numerics (blank → null,
//! never 0 or NaN; unparseable → validation error) **before** any network
//! call, then performs exactly one repository create. On success the saved
//! record is returned so the owning view can close the form and reload the
//! aggregate. On failure the draft keeps its values, the form stays open,
//! and the error is both logged and returned: surfaced, never retried.
//!
//! The document workflow additionally runs a recognition sub-step between
//! file selection and submission; see [`document`].

pub mod chronic_condition;
mod coerce;
pub mod document;
pub mod family_history;
pub mod immunization;
pub mod lab_result;
pub mod medical_record;
pub mod patient;
pub mod prescription;
pub mod vital_signs;

pub use chronic_condition::{ChronicConditionField, ChronicConditionForm};
pub use document::{DocumentField, DocumentForm};
pub use family_history::{FamilyHistoryField, FamilyHistoryForm};
pub use immunization::{ImmunizationField, ImmunizationForm};
pub use lab_result::{LabResultField, LabResultForm};
pub use medical_record::{MedicalRecordField, MedicalRecordForm};
pub use patient::{PatientField, PatientForm};
pub use prescription::{PrescriptionField, PrescriptionForm};
pub use vital_signs::{VitalSignsField, VitalSignsForm};

/// Where a form workflow currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    /// Field edits are being collected; nothing validated yet
    Editing,
    /// A create is in flight
    Submitting,
    /// The create resolved; the owning view should close the form
    Saved,
    /// The create was rejected; the draft is intact and editable
    Failed,
}

impl FormPhase {
    /// Whether field updates are accepted in this phase.
    pub fn accepts_edits(self) -> bool {
        matches!(self, FormPhase::Editing | FormPhase::Failed)
    }
}
