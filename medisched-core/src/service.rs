//! Scheduling service that validates, stores, cancels, and lists appointments.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use crate::model::{Appointment, AppointmentId, Person, ScheduledAppointment, same_name};
use crate::ports::{RuleViolation, SchedulerError};
use crate::rules::RuleSet;

/// In-memory appointment book.
///
/// Appointments are kept in the order they were accepted. Nothing stops two identical
/// appointments from coexisting; whether they may is up to the installed [`RuleSet`].
pub struct Scheduler {
    rules: Arc<RuleSet>,
    appointments: Vec<ScheduledAppointment>,
    next_id: u64,
}

impl Scheduler {
    /// Create an empty scheduler that validates with the provided rules.
    #[must_use]
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self {
            rules,
            appointments: Vec::new(),
            next_id: 1,
        }
    }

    /// Names of the rules every new appointment must pass.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.names()
    }

    /// Validate and store an appointment.
    ///
    /// Passing `None` is reported like any other invalid appointment.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidAppointment`] when a rule refuses the appointment; the
    /// stored appointments are left untouched in that case.
    pub fn schedule_appointment(
        &mut self,
        appointment: impl Into<Option<Appointment>>,
    ) -> Result<AppointmentId, SchedulerError> {
        let Some(appointment) = appointment.into() else {
            warn!("appointment rejected: nothing submitted");
            return Err(RuleViolation::MissingAppointment.into());
        };

        if let Err(violation) = self.rules.evaluate(&appointment, &self.appointments) {
            warn!(
                date = appointment.date(),
                doctor = appointment.doctor().name(),
                patient = appointment.patient().name(),
                reason = %violation,
                "appointment rejected"
            );
            return Err(violation.into());
        }

        let id = AppointmentId(self.next_id);
        self.next_id += 1;
        info!(
            %id,
            date = appointment.date(),
            doctor = appointment.doctor().name(),
            patient = appointment.patient().name(),
            "appointment scheduled"
        );
        self.appointments.push(ScheduledAppointment { id, appointment });
        Ok(id)
    }

    /// Remove the appointment with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::AppointmentNotFound`] when no stored appointment has that id,
    /// including ids that were already canceled.
    pub fn cancel_appointment(
        &mut self,
        id: AppointmentId,
    ) -> Result<ScheduledAppointment, SchedulerError> {
        let Some(position) = self.appointments.iter().position(|entry| entry.id == id) else {
            warn!(%id, "cancel requested for unknown appointment");
            return Err(SchedulerError::AppointmentNotFound(id));
        };
        let removed = self.appointments.remove(position);
        info!(%id, date = removed.appointment.date(), "appointment canceled");
        Ok(removed)
    }

    /// Snapshot of all appointments in the order they were scheduled.
    ///
    /// The returned list is owned by the caller; changing it does not affect the scheduler.
    #[must_use]
    pub fn view_appointments(&self) -> Vec<ScheduledAppointment> {
        self.appointments.clone()
    }

    /// Look up a single stored appointment.
    #[must_use]
    pub fn get(&self, id: AppointmentId) -> Option<&ScheduledAppointment> {
        self.appointments.iter().find(|entry| entry.id == id)
    }

    /// Appointments booked with the named doctor, in scheduling order.
    #[must_use]
    pub fn appointments_for_doctor(&self, name: &str) -> Vec<ScheduledAppointment> {
        self.filtered(|appointment| same_name(appointment.doctor().name(), name))
    }

    /// Appointments booked for the named patient, in scheduling order.
    #[must_use]
    pub fn appointments_for_patient(&self, name: &str) -> Vec<ScheduledAppointment> {
        self.filtered(|appointment| same_name(appointment.patient().name(), name))
    }

    /// Number of stored appointments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    /// Whether no appointments are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    fn filtered(&self, keep: impl Fn(&Appointment) -> bool) -> Vec<ScheduledAppointment> {
        self.appointments
            .iter()
            .filter(|entry| keep(&entry.appointment))
            .cloned()
            .collect()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(Arc::new(RuleSet::baseline()))
    }
}

/// Cloneable handle to one scheduler shared between callers.
///
/// Every operation takes the same lock, so there is at most one mutation at a time and every
/// snapshot reflects a single consistent state.
#[derive(Clone, Default)]
pub struct SharedScheduler {
    inner: Arc<Mutex<Scheduler>>,
}

impl SharedScheduler {
    /// Wrap a scheduler for shared use.
    #[must_use]
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            inner: Arc::new(Mutex::new(scheduler)),
        }
    }

    /// See [`Scheduler::schedule_appointment`].
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::InvalidAppointment`] on rejection or
    /// [`SchedulerError::Unavailable`] if the lock is poisoned.
    pub fn schedule_appointment(
        &self,
        appointment: impl Into<Option<Appointment>>,
    ) -> Result<AppointmentId, SchedulerError> {
        self.lock()?.schedule_appointment(appointment)
    }

    /// See [`Scheduler::cancel_appointment`].
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::AppointmentNotFound`] for unknown ids or
    /// [`SchedulerError::Unavailable`] if the lock is poisoned.
    pub fn cancel_appointment(
        &self,
        id: AppointmentId,
    ) -> Result<ScheduledAppointment, SchedulerError> {
        self.lock()?.cancel_appointment(id)
    }

    /// See [`Scheduler::view_appointments`].
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::Unavailable`] if the lock is poisoned.
    pub fn view_appointments(&self) -> Result<Vec<ScheduledAppointment>, SchedulerError> {
        Ok(self.lock()?.view_appointments())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Scheduler>, SchedulerError> {
        self.inner.lock().map_err(|_poisoned| {
            warn!("scheduler lock poisoned");
            SchedulerError::Unavailable
        })
    }
}
