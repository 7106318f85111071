//! Registry of validation rules and the baseline required-fields rule.

use std::sync::Arc;

use tracing::debug;

use crate::model::{Appointment, Person, ScheduledAppointment};
use crate::ports::{RuleViolation, ValidationRule};

/// Rejects appointments whose doctor name, patient name, or date is blank.
///
/// Fields are checked in that order and the first blank one is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFields;

impl ValidationRule for RequiredFields {
    fn name(&self) -> &'static str {
        "required-fields"
    }

    fn check(
        &self,
        candidate: &Appointment,
        _booked: &[ScheduledAppointment],
    ) -> Result<(), RuleViolation> {
        if candidate.doctor().name().trim().is_empty() {
            return Err(RuleViolation::BlankDoctorName);
        }
        if candidate.patient().name().trim().is_empty() {
            return Err(RuleViolation::BlankPatientName);
        }
        if candidate.date().trim().is_empty() {
            return Err(RuleViolation::BlankDate);
        }
        Ok(())
    }
}

/// Ordered collection of rules evaluated for every new appointment.
pub struct RuleSet {
    rules: Vec<Arc<dyn ValidationRule>>,
}

impl RuleSet {
    /// Build a rule set from the provided rules, evaluated in the given order.
    #[must_use]
    pub fn new(rules: Vec<Arc<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Rule set holding only [`RequiredFields`].
    #[must_use]
    pub fn baseline() -> Self {
        Self::new(vec![Arc::new(RequiredFields)])
    }

    /// Append a rule, evaluated after all existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: Arc<dyn ValidationRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Names of all registered rules in evaluation order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every rule in order, stopping at the first violation.
    ///
    /// # Errors
    ///
    /// Returns the violation reported by the first failing rule.
    pub fn evaluate(
        &self,
        candidate: &Appointment,
        booked: &[ScheduledAppointment],
    ) -> Result<(), RuleViolation> {
        for rule in &self.rules {
            debug!(rule = rule.name(), "evaluating appointment rule");
            rule.check(candidate, booked)?;
        }
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::model::{AppointmentId, Doctor, Patient};

    fn appointment(date: &str, doctor: &str, patient: &str) -> Appointment {
        Appointment::new(
            date,
            Doctor::new(doctor, "555-0100", "General"),
            Patient::new(patient, "555-0101", "flu"),
        )
    }

    struct AlwaysRefuse;

    impl ValidationRule for AlwaysRefuse {
        fn name(&self) -> &'static str {
            "always-refuse"
        }

        fn check(
            &self,
            candidate: &Appointment,
            _booked: &[ScheduledAppointment],
        ) -> Result<(), RuleViolation> {
            Err(RuleViolation::MalformedDate(candidate.date().to_owned()))
        }
    }

    #[test]
    fn required_fields_accepts_complete_appointment() {
        let result = RequiredFields.check(&appointment("2024-01-10", "Dr. Lee", "Jo"), &[]);
        assert_matches!(result, Ok(()));
    }

    #[test]
    fn required_fields_reports_first_blank_field() {
        assert_matches!(
            RequiredFields.check(&appointment("", "", ""), &[]),
            Err(RuleViolation::BlankDoctorName)
        );
        assert_matches!(
            RequiredFields.check(&appointment("", "Dr. Lee", "  "), &[]),
            Err(RuleViolation::BlankPatientName)
        );
        assert_matches!(
            RequiredFields.check(&appointment("\t", "Dr. Lee", "Jo"), &[]),
            Err(RuleViolation::BlankDate)
        );
    }

    #[test]
    fn baseline_ignores_existing_bookings() {
        let booked = vec![ScheduledAppointment {
            id: AppointmentId(1),
            appointment: appointment("2024-01-10", "Dr. Lee", "Jo"),
        }];
        let candidate = appointment("2024-01-10", "Dr. Lee", "Jo");
        let result = RuleSet::baseline().evaluate(&candidate, &booked);
        assert_matches!(result, Ok(()));
    }

    #[test]
    fn rules_run_in_registration_order() {
        let rules = RuleSet::baseline().with_rule(Arc::new(AlwaysRefuse));
        assert_eq!(rules.names(), vec!["required-fields", "always-refuse"], "order");

        assert_matches!(
            rules.evaluate(&appointment("2024-01-10", "", "Jo"), &[]),
            Err(RuleViolation::BlankDoctorName),
            "earlier rule wins"
        );
        assert_matches!(
            rules.evaluate(&appointment("soon", "Dr. Lee", "Jo"), &[]),
            Err(RuleViolation::MalformedDate(date)) if date == "soon"
        );
    }
}
