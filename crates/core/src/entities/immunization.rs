//! Immunization records.

use super::Record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anatomical site or route of administration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdministrationSite {
    #[default]
    LeftArm,
    RightArm,
    LeftThigh,
    RightThigh,
    LeftDeltoid,
    RightDeltoid,
    Oral,
    Nasal,
}

impl AdministrationSite {
    pub fn as_str(self) -> &'static str {
        match self {
            AdministrationSite::LeftArm => "left_arm",
            AdministrationSite::RightArm => "right_arm",
            AdministrationSite::LeftThigh => "left_thigh",
            AdministrationSite::RightThigh => "right_thigh",
            AdministrationSite::LeftDeltoid => "left_deltoid",
            AdministrationSite::RightDeltoid => "right_deltoid",
            AdministrationSite::Oral => "oral",
            AdministrationSite::Nasal => "nasal",
        }
    }
}

/// One administered vaccine dose.
///
/// `dose_number` is 1-based within the vaccine's series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Immunization {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub vaccine_name: String,
    pub vaccine_type: Option<String>,
    pub administration_date: NaiveDate,
    pub administered_by: String,
    pub manufacturer: Option<String>,
    pub lot_number: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub dose_number: i32,
    pub administration_site: AdministrationSite,
    pub adverse_reactions: Option<String>,
    pub next_dose_due: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewImmunization {
    pub patient_id: Uuid,
    pub vaccine_name: String,
    pub vaccine_type: Option<String>,
    pub administration_date: NaiveDate,
    pub administered_by: String,
    pub manufacturer: Option<String>,
    pub lot_number: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub dose_number: i32,
    pub administration_site: AdministrationSite,
    pub adverse_reactions: Option<String>,
    pub next_dose_due: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Record for Immunization {
    const TABLE: &'static str = "immunizations";
    const ORDER_BY: &'static str = "administration_date";
    type New = NewImmunization;
}
