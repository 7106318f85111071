//! Optional validation rules that can be installed on a [`RuleSet`](medisched_core::RuleSet).
//!
//! None of these are active by default; the scheduler only requires the baseline fields unless a
//! caller opts in.

use std::sync::Arc;

use tracing::debug;

use medisched_core::{
    model::{Appointment, Person, ScheduledAppointment, same_name},
    ports::{RuleViolation, ValidationRule},
};

/// Configuration name of [`DoctorConflict`].
pub const DOCTOR_CONFLICT: &str = "doctor-conflict";
/// Configuration name of [`PatientConflict`].
pub const PATIENT_CONFLICT: &str = "patient-conflict";
/// Configuration name of [`DateFormat`].
pub const DATE_FORMAT_RULE: &str = "date-format";

fn same_day(left: &Appointment, right: &Appointment) -> bool {
    left.date().trim() == right.date().trim()
}

/// Refuses a second appointment for the same doctor on the same date.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoctorConflict;

impl ValidationRule for DoctorConflict {
    fn name(&self) -> &'static str {
        DOCTOR_CONFLICT
    }

    fn check(
        &self,
        candidate: &Appointment,
        booked: &[ScheduledAppointment],
    ) -> Result<(), RuleViolation> {
        let clash = booked.iter().find(|entry| {
            same_day(&entry.appointment, candidate)
                && same_name(entry.appointment.doctor().name(), candidate.doctor().name())
        });
        match clash {
            Some(entry) => {
                debug!(existing = %entry.id, "doctor already booked");
                Err(RuleViolation::DoctorDoubleBooked {
                    doctor: candidate.doctor().name().to_owned(),
                    date: candidate.date().to_owned(),
                })
            }
            None => Ok(()),
        }
    }
}

/// Refuses a second appointment for the same patient on the same date.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatientConflict;

impl ValidationRule for PatientConflict {
    fn name(&self) -> &'static str {
        PATIENT_CONFLICT
    }

    fn check(
        &self,
        candidate: &Appointment,
        booked: &[ScheduledAppointment],
    ) -> Result<(), RuleViolation> {
        let clash = booked.iter().find(|entry| {
            same_day(&entry.appointment, candidate)
                && same_name(entry.appointment.patient().name(), candidate.patient().name())
        });
        match clash {
            Some(entry) => {
                debug!(existing = %entry.id, "patient already booked");
                Err(RuleViolation::PatientDoubleBooked {
                    patient: candidate.patient().name().to_owned(),
                    date: candidate.date().to_owned(),
                })
            }
            None => Ok(()),
        }
    }
}

/// Requires the date to be a real `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormat;

impl ValidationRule for DateFormat {
    fn name(&self) -> &'static str {
        DATE_FORMAT_RULE
    }

    fn check(
        &self,
        candidate: &Appointment,
        _booked: &[ScheduledAppointment],
    ) -> Result<(), RuleViolation> {
        match candidate.parsed_date() {
            Some(_date) => Ok(()),
            None => {
                debug!(date = candidate.date(), "date did not parse");
                Err(RuleViolation::MalformedDate(candidate.date().to_owned()))
            }
        }
    }
}

/// Resolve an optional rule from its configuration name.
#[must_use]
pub fn by_name(name: &str) -> Option<Arc<dyn ValidationRule>> {
    match name.trim() {
        DOCTOR_CONFLICT => Some(Arc::new(DoctorConflict)),
        PATIENT_CONFLICT => Some(Arc::new(PatientConflict)),
        DATE_FORMAT_RULE => Some(Arc::new(DateFormat)),
        _ => None,
    }
}

/// Every optional rule, in the order they are usually installed.
#[must_use]
pub fn all() -> Vec<Arc<dyn ValidationRule>> {
    vec![
        Arc::new(DateFormat),
        Arc::new(DoctorConflict),
        Arc::new(PatientConflict),
    ]
}
