//! Core types and scheduling service for the medisched appointment book.

/// Doctors, patients, appointments, and identifiers.
pub mod model;
/// Validation rule trait and error taxonomy.
pub mod ports;
/// Rule registry and the baseline required-fields rule.
pub mod rules;
/// Scheduler facade used by clients.
pub mod service;

pub use model::*;
pub use ports::*;
pub use rules::*;
pub use service::*;
