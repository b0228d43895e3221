//! Vital-sign measurements.

use super::Record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One set of vital-sign measurements.
///
/// Every measurement is optional; a nurse records whatever was taken.
/// `bmi` is derived exactly once at submission time from `height_cm` and
/// `weight_kg` (when both are present) and is never recomputed afterwards;
/// there is no edit path that could invalidate it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub recorded_date: NaiveDate,
    pub recorded_by: String,
    pub systolic_bp: Option<i32>,
    pub diastolic_bp: Option<i32>,
    pub heart_rate: Option<i32>,
    pub respiratory_rate: Option<i32>,
    pub temperature_celsius: Option<f64>,
    pub oxygen_saturation: Option<i32>,
    pub blood_glucose: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub bmi: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewVitalSigns {
    pub patient_id: Uuid,
    pub recorded_date: NaiveDate,
    pub recorded_by: String,
    pub systolic_bp: Option<i32>,
    pub diastolic_bp: Option<i32>,
    pub heart_rate: Option<i32>,
    pub respiratory_rate: Option<i32>,
    pub temperature_celsius: Option<f64>,
    pub oxygen_saturation: Option<i32>,
    pub blood_glucose: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub bmi: Option<f64>,
    pub notes: Option<String>,
}

impl Record for VitalSigns {
    const TABLE: &'static str = "vital_signs";
    const ORDER_BY: &'static str = "recorded_date";
    type New = NewVitalSigns;
}
