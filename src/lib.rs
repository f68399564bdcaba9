//! A single music track record: validated construction, guarded mutation,
//! keyword matching, display formatting and a sort ordering.
//!
//! Rejected inputs never panic and never abort construction of other
//! tracks: every validating operation reports success or failure through
//! its return value and emits one human-readable line per failing
//! condition on the [`log`] facade.

pub mod domain;

pub use domain::error::TrackError;
pub use domain::id::TrackId;
pub use domain::track::Track;
