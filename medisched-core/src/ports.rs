//! Traits describing validation rules and the errors reported by the scheduler.

use crate::model::{Appointment, AppointmentId, ScheduledAppointment};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Reasons an appointment can be refused.
pub enum RuleViolation {
    /// No appointment was submitted at all.
    #[error("No appointment was provided")]
    MissingAppointment,
    /// Doctor name is empty or whitespace.
    #[error("Doctor name cannot be empty")]
    BlankDoctorName,
    /// Patient name is empty or whitespace.
    #[error("Patient name cannot be empty")]
    BlankPatientName,
    /// Date is empty or whitespace.
    #[error("Appointment date cannot be empty")]
    BlankDate,
    /// Date is present but not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),
    /// The doctor already has an appointment on that date.
    #[error("{doctor} is already booked on {date}")]
    DoctorDoubleBooked {
        /// Doctor name as submitted.
        doctor: String,
        /// Date as submitted.
        date: String,
    },
    /// The patient already has an appointment on that date.
    #[error("{patient} already has an appointment on {date}")]
    PatientDoubleBooked {
        /// Patient name as submitted.
        patient: String,
        /// Date as submitted.
        date: String,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
/// Outcomes other than success reported by scheduler operations.
pub enum SchedulerError {
    /// The appointment failed validation and was not stored.
    #[error("Invalid appointment: {0}")]
    InvalidAppointment(#[from] RuleViolation),
    /// No stored appointment carries this identifier.
    #[error("Appointment {0} not found")]
    AppointmentNotFound(AppointmentId),
    /// A shared scheduler was poisoned by a panicking holder.
    #[error("Scheduler unavailable")]
    Unavailable,
}

/// A single check an appointment must pass before it is stored.
///
/// Rules see the candidate and the appointments already booked, so they can express both field
/// checks and conflicts. Register them on a [`RuleSet`](crate::rules::RuleSet).
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier used in configuration and logs.
    fn name(&self) -> &'static str;

    /// Check the candidate against the current bookings.
    ///
    /// # Errors
    ///
    /// Returns the [`RuleViolation`] explaining why the candidate is refused.
    fn check(
        &self,
        candidate: &Appointment,
        booked: &[ScheduledAppointment],
    ) -> Result<(), RuleViolation>;
}
