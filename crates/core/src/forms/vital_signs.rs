//! Vital-signs form.
//!
//! The one place BMI is ever computed: at submit time, from the coerced
//! height and weight, rounded to two decimals. If either measurement is
//! absent the stored `bmi` is null, and nothing recomputes it later.

use super::{coerce, FormPhase};
use crate::calc;
use crate::entities::{NewVitalSigns, VitalSigns};
use crate::repository::RecordRepository;
use crate::ChartResult;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VitalSignsDraft {
    pub recorded_by: String,
    pub recorded_date: String,
    pub systolic_bp: String,
    pub diastolic_bp: String,
    pub heart_rate: String,
    pub respiratory_rate: String,
    pub temperature_celsius: String,
    pub oxygen_saturation: String,
    pub blood_glucose: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub notes: String,
}

#[derive(Clone, Debug)]
pub enum VitalSignsField {
    RecordedBy(String),
    RecordedDate(String),
    SystolicBp(String),
    DiastolicBp(String),
    HeartRate(String),
    RespiratoryRate(String),
    TemperatureCelsius(String),
    OxygenSaturation(String),
    BloodGlucose(String),
    HeightCm(String),
    WeightKg(String),
    Notes(String),
}

/// The vital-signs submission workflow.
pub struct VitalSignsForm {
    patient_id: Uuid,
    draft: VitalSignsDraft,
    phase: FormPhase,
}

impl VitalSignsForm {
    pub fn new(patient_id: Uuid, today: NaiveDate) -> Self {
        Self {
            patient_id,
            draft: VitalSignsDraft {
                recorded_date: today.to_string(),
                ..VitalSignsDraft::default()
            },
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &VitalSignsDraft {
        &self.draft
    }

    pub fn apply(&mut self, field: VitalSignsField) {
        if !self.phase.accepts_edits() {
            return;
        }
        self.phase = FormPhase::Editing;

        match field {
            VitalSignsField::RecordedBy(v) => self.draft.recorded_by = v,
            VitalSignsField::RecordedDate(v) => self.draft.recorded_date = v,
            VitalSignsField::SystolicBp(v) => self.draft.systolic_bp = v,
            VitalSignsField::DiastolicBp(v) => self.draft.diastolic_bp = v,
            VitalSignsField::HeartRate(v) => self.draft.heart_rate = v,
            VitalSignsField::RespiratoryRate(v) => self.draft.respiratory_rate = v,
            VitalSignsField::TemperatureCelsius(v) => self.draft.temperature_celsius = v,
            VitalSignsField::OxygenSaturation(v) => self.draft.oxygen_saturation = v,
            VitalSignsField::BloodGlucose(v) => self.draft.blood_glucose = v,
            VitalSignsField::HeightCm(v) => self.draft.height_cm = v,
            VitalSignsField::WeightKg(v) => self.draft.weight_kg = v,
            VitalSignsField::Notes(v) => self.draft.notes = v,
        }
    }

    fn validate(&self) -> ChartResult<NewVitalSigns> {
        let height_cm = coerce::optional_float("height_cm", &self.draft.height_cm)?;
        let weight_kg = coerce::optional_float("weight_kg", &self.draft.weight_kg)?;

        Ok(NewVitalSigns {
            patient_id: self.patient_id,
            recorded_by: coerce::required_text("recorded_by", &self.draft.recorded_by)?,
            recorded_date: coerce::required_date("recorded_date", &self.draft.recorded_date)?,
            systolic_bp: coerce::optional_int("systolic_bp", &self.draft.systolic_bp)?,
            diastolic_bp: coerce::optional_int("diastolic_bp", &self.draft.diastolic_bp)?,
            heart_rate: coerce::optional_int("heart_rate", &self.draft.heart_rate)?,
            respiratory_rate: coerce::optional_int(
                "respiratory_rate",
                &self.draft.respiratory_rate,
            )?,
            temperature_celsius: coerce::optional_float(
                "temperature_celsius",
                &self.draft.temperature_celsius,
            )?,
            oxygen_saturation: coerce::optional_int(
                "oxygen_saturation",
                &self.draft.oxygen_saturation,
            )?,
            blood_glucose: coerce::optional_int("blood_glucose", &self.draft.blood_glucose)?,
            bmi: calc::bmi(height_cm, weight_kg),
            height_cm,
            weight_kg,
            notes: coerce::optional_text(&self.draft.notes),
        })
    }

    pub async fn submit(&mut self, repo: &RecordRepository) -> ChartResult<VitalSigns> {
        let new = self.validate()?;
        self.phase = FormPhase::Submitting;

        match repo.create(&new).await {
            Ok(vitals) => {
                self.phase = FormPhase::Saved;
                Ok(vitals)
            }
            Err(e) => {
                tracing::warn!(patient_id = %self.patient_id, "vital signs submission failed: {e}");
                self.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }
}
