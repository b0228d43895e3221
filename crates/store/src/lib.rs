//! Chartwell store boundary.
//!
//! This crate is the only place that knows the patient-records backend is a
//! hosted, table-oriented service. Everything above it talks to the
//! [`TableStore`] trait:
//!
//! - [`RestStore`]: the production client, speaking PostgREST conventions
//!   over HTTP (`POST`/`GET`/`PATCH` per table, `Prefer: return=representation`).
//! - [`MemoryStore`]: an in-process fake that assigns identifiers and
//!   timestamps the way the hosted store does, for tests and local work.
//!
//! Rows travel as `serde_json::Value` so the store stays schema-agnostic;
//! typed conversion belongs to the repository layer above.
//!
//! Connection parameters are resolved once at process start into a
//! [`StoreConfig`] and passed explicitly. Nothing in this crate reads the
//! process environment.
//!
//! There are no timeouts and no retries here: a thin client reports the
//! first failure it sees and leaves policy to the caller.

mod config;
mod memory;
mod rest;
mod table;

pub use config::StoreConfig;
pub use memory::MemoryStore;
pub use rest::RestStore;
pub use table::{Filter, Ordering, TableStore};

/// Errors produced at the store boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connection parameters were unusable at startup
    #[error("invalid store configuration: {0}")]
    InvalidConfig(String),

    /// The request never completed (DNS, connect, TLS, body I/O)
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("store rejected the request (status {status}): {body}")]
    Rejected { status: u16, body: String },

    /// A returned row could not be parsed as JSON
    #[error("store returned a malformed row: {0}")]
    MalformedRow(#[from] serde_json::Error),

    /// An insert or update completed without returning the stored row
    #[error("store returned no representation for table `{0}`")]
    MissingRepresentation(String),

    /// No row with the given identifier exists in the table
    #[error("no row `{id}` in table `{table}`")]
    RowNotFound { table: String, id: uuid::Uuid },

    /// The table is currently unreachable (used by fakes to inject failure)
    #[error("table `{0}` is unavailable")]
    Unavailable(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
