//! Domain data structures for doctors, patients, and appointments.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layout the booking front end asks for.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Capabilities shared by everyone taking part in an appointment.
pub trait Person {
    /// Full name.
    fn name(&self) -> &str;
    /// Phone number or other free-text contact detail.
    fn contact_number(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A doctor and the field they practice in.
pub struct Doctor {
    name: String,
    contact_number: String,
    specialization: String,
}

impl Doctor {
    /// Construct a doctor. Empty values are accepted as-is.
    #[must_use]
    pub fn new<N, C, S>(name: N, contact_number: C, specialization: S) -> Self
    where
        N: Into<String>,
        C: Into<String>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            contact_number: contact_number.into(),
            specialization: specialization.into(),
        }
    }

    /// Medical specialization, e.g. "General" or "Cardiology".
    #[must_use]
    pub fn specialization(&self) -> &str {
        &self.specialization
    }
}

impl Person for Doctor {
    fn name(&self) -> &str {
        &self.name
    }

    fn contact_number(&self) -> &str {
        &self.contact_number
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A patient and the condition they are being seen for.
pub struct Patient {
    name: String,
    contact_number: String,
    health_condition: String,
}

impl Patient {
    /// Construct a patient. Empty values are accepted as-is.
    #[must_use]
    pub fn new<N, C, H>(name: N, contact_number: C, health_condition: H) -> Self
    where
        N: Into<String>,
        C: Into<String>,
        H: Into<String>,
    {
        Self {
            name: name.into(),
            contact_number: contact_number.into(),
            health_condition: health_condition.into(),
        }
    }

    /// Reported health condition.
    #[must_use]
    pub fn health_condition(&self) -> &str {
        &self.health_condition
    }
}

impl Person for Patient {
    fn name(&self) -> &str {
        &self.name
    }

    fn contact_number(&self) -> &str {
        &self.contact_number
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A date bound to one doctor and one patient.
///
/// Nothing is validated here; an appointment with a blank date or blank names is representable
/// and only rejected once it is handed to a [`Scheduler`](crate::service::Scheduler).
pub struct Appointment {
    date: String,
    doctor: Arc<Doctor>,
    patient: Arc<Patient>,
}

impl Appointment {
    /// Bind a date to a doctor and a patient.
    ///
    /// People are shared read-only, so the same doctor can back any number of appointments.
    #[must_use]
    pub fn new<D, P>(date: impl Into<String>, doctor: D, patient: P) -> Self
    where
        D: Into<Arc<Doctor>>,
        P: Into<Arc<Patient>>,
    {
        Self {
            date: date.into(),
            doctor: doctor.into(),
            patient: patient.into(),
        }
    }

    /// Date exactly as it was entered.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Date interpreted as `YYYY-MM-DD`, if it has that shape.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// Doctor seeing the patient.
    #[must_use]
    pub fn doctor(&self) -> &Doctor {
        &self.doctor
    }

    /// Patient being seen.
    #[must_use]
    pub fn patient(&self) -> &Patient {
        &self.patient
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Identifier handed out by a scheduler when an appointment is accepted.
pub struct AppointmentId(pub u64);

impl fmt::Display for AppointmentId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// An accepted appointment together with the identifier used to cancel it.
pub struct ScheduledAppointment {
    /// Identifier assigned at scheduling time.
    pub id: AppointmentId,
    /// The appointment as submitted.
    pub appointment: Appointment,
}

/// Compare two names the way people type them: surrounding whitespace and case are ignored.
#[must_use]
pub fn same_name(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn people_keep_every_field_even_when_empty() {
        let doctor = Doctor::new("", "", "");
        assert_eq!(doctor.name(), "", "doctor name");
        assert_eq!(doctor.specialization(), "", "specialization");

        let patient = Patient::new("Jo", "555-0101", "flu");
        assert_eq!(patient.name(), "Jo", "patient name");
        assert_eq!(patient.contact_number(), "555-0101", "patient contact");
        assert_eq!(patient.health_condition(), "flu", "health condition");
    }

    #[test]
    fn one_doctor_can_back_many_appointments() {
        let doctor = Arc::new(Doctor::new("Dr. Lee", "555-0100", "General"));
        let first = Appointment::new(
            "2024-01-10",
            Arc::clone(&doctor),
            Patient::new("Jo", "", "flu"),
        );
        let second = Appointment::new(
            "2024-01-11",
            Arc::clone(&doctor),
            Patient::new("Sam", "", "cold"),
        );

        assert_eq!(Arc::strong_count(&doctor), 3, "both appointments share the doctor");
        assert_eq!(first.doctor(), second.doctor(), "same doctor on both");
    }

    #[test]
    fn parsed_date_accepts_only_iso_dates() {
        let doctor = Doctor::new("Dr. Lee", "", "General");
        let patient = Patient::new("Jo", "", "flu");

        let iso = Appointment::new(" 2024-01-10 ", doctor.clone(), patient.clone());
        assert_eq!(
            iso.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 1, 10),
            "surrounding whitespace is ignored"
        );

        let loose = Appointment::new("10/01/2024", doctor.clone(), patient.clone());
        assert_eq!(loose.parsed_date(), None, "day-first dates are not parsed");

        let impossible = Appointment::new("2024-02-30", doctor, patient);
        assert_eq!(impossible.parsed_date(), None, "calendar-invalid dates are not parsed");
    }

    #[test]
    fn scheduled_appointment_survives_json() {
        let entry = ScheduledAppointment {
            id: AppointmentId(7),
            appointment: Appointment::new(
                "2024-01-10",
                Doctor::new("Dr. Lee", "555-0100", "General"),
                Patient::new("Jo", "555-0101", "flu"),
            ),
        };

        let json = match serde_json::to_value(&entry) {
            Ok(json) => json,
            Err(err) => panic!("serialize failed: {err}"),
        };
        assert_eq!(json["id"], 7, "id is a bare number");
        assert_eq!(json["appointment"]["doctor"]["name"], "Dr. Lee", "doctor inlined");
        assert_eq!(
            json["appointment"]["patient"]["health_condition"],
            "flu",
            "patient inlined"
        );

        let restored: ScheduledAppointment = match serde_json::from_value(json) {
            Ok(restored) => restored,
            Err(err) => panic!("deserialize failed: {err}"),
        };
        assert_eq!(restored.id, entry.id, "id");
        assert_eq!(restored.appointment.date(), "2024-01-10", "date");
        assert_eq!(restored.appointment.doctor(), entry.appointment.doctor(), "doctor");
        assert_eq!(restored.appointment.patient(), entry.appointment.patient(), "patient");
    }

    #[test]
    fn names_match_ignoring_case_and_padding() {
        assert!(same_name(" Dr. Lee", "dr. lee "), "case and padding");
        assert!(!same_name("Dr. Lee", "Dr. Li"), "different names");
    }
}
