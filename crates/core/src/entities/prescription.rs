//! Prescribed medications.

use super::Record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A prescribed medication.
///
/// `medical_record_id` is a weak back-reference to the visit that produced
/// the prescription. It is reserved: carried on the schema but never
/// populated or read by any workflow, and the store does not enforce it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub medical_record_id: Option<Uuid>,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: Option<String>,
    pub prescribed_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewPrescription {
    pub patient_id: Uuid,
    pub medical_record_id: Option<Uuid>,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: Option<String>,
    pub prescribed_date: NaiveDate,
}

impl Record for Prescription {
    const TABLE: &'static str = "prescriptions";
    const ORDER_BY: &'static str = "prescribed_date";
    type New = NewPrescription;
}
