//! Visit records.

use super::Record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One clinical visit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_name: String,
    pub visit_date: NaiveDate,
    pub diagnosis: Option<String>,
    pub symptoms: Option<String>,
    pub treatment: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMedicalRecord {
    pub patient_id: Uuid,
    pub doctor_name: String,
    pub visit_date: NaiveDate,
    pub diagnosis: Option<String>,
    pub symptoms: Option<String>,
    pub treatment: Option<String>,
    pub notes: Option<String>,
}

impl Record for MedicalRecord {
    const TABLE: &'static str = "medical_records";
    const ORDER_BY: &'static str = "visit_date";
    type New = NewMedicalRecord;
}
