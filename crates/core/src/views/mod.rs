//! List and detail view models.
//!
//! These types hold the state the rendering layer draws from; they own no
//! presentation. Cross-view communication is callback-and-reload only:
//! views never share mutable state, and a child save always triggers a
//! full aggregate reload rather than patching collections in place.
//!
//! Fetch lifetime is bound to view lifetime; the futures these models
//! return are owned by the caller, so tearing a view down drops and
//! thereby cancels any in-flight load.

mod detail;
mod directory;

pub use detail::{ChartSummary, ChartTab, OpenForm, PatientDetailView};
pub use directory::PatientDirectory;
