use chartwell_intake::IntakeError;
use chartwell_store::StoreError;

/// Errors produced by the clinical-record workflows.
///
/// The taxonomy is deliberately small. Validation failures are caught
/// client-side before any network call. Persistence failures come back
/// from the store boundary and are surfaced to the caller: logged where a
/// workflow chooses to degrade, but never silently swallowed and never
/// retried. Recognition failures cover the document-intake path.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// A required field is missing or a value is out of range
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// The store rejected a create, select, or update
    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),

    /// Document intake or text recognition failed
    #[error(transparent)]
    Recognition(#[from] IntakeError),

    /// A new record could not be encoded for the store
    #[error("failed to encode record: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A row returned by the store did not match the entity schema
    #[error("failed to decode stored record: {0}")]
    Deserialization(#[source] serde_json::Error),
}

impl ChartError {
    /// Shorthand for a validation failure on one field.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ChartError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for clinical-record operations.
pub type ChartResult<T> = std::result::Result<T, ChartError>;
