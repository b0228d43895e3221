//! # Chartwell Core
//!
//! Core domain logic for the Chartwell patient clinical-record system.
//!
//! This crate contains the pieces that make up a patient's chart and the
//! workflows that grow it:
//!
//! - [`entities`]: the nine clinical record schemas (Patient plus eight
//!   child collections), each split into a structurally distinct
//!   "new" type (what a caller submits) and a persisted type (what the
//!   store returns, carrying store-assigned id and timestamps)
//! - [`repository`]: create/list operations against an injected
//!   [`chartwell_store::TableStore`]
//! - [`calc`]: pure derived-field functions (age, BMI)
//! - [`aggregate`]: the concurrent loader that assembles a full
//!   [`aggregate::PatientChart`] from all eight child collections
//! - [`forms`]: one submission workflow per entity, with typed field
//!   updates and blank-to-null numeric coercion
//! - [`views`]: the patient directory (search) and detail view models
//!
//! **No transport concerns**: HTTP details live in `chartwell-store`, and
//! document media handling lives in `chartwell-intake`. This crate holds
//! only domain shapes and workflow rules.

pub mod aggregate;
pub mod calc;
pub mod entities;
mod error;
pub mod forms;
pub mod repository;
pub mod views;

pub use error::{ChartError, ChartResult};
pub use repository::RecordRepository;
