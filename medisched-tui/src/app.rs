use chrono::Local;
use medisched_core::{
    model::{Appointment, AppointmentId, DATE_FORMAT, Doctor, Patient, ScheduledAppointment},
    service::Scheduler,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Form,
    Appointments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    DoctorName,
    DoctorContact,
    Specialization,
    PatientName,
    PatientContact,
    HealthCondition,
    Date,
}

impl Field {
    pub(crate) const ALL: [Field; 7] = [
        Field::DoctorName,
        Field::DoctorContact,
        Field::Specialization,
        Field::PatientName,
        Field::PatientContact,
        Field::HealthCondition,
        Field::Date,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Field::DoctorName => "Doctor's name",
            Field::DoctorContact => "Doctor's contact number",
            Field::Specialization => "Doctor's specialization",
            Field::PatientName => "Patient's name",
            Field::PatientContact => "Patient's contact number",
            Field::HealthCondition => "Patient's health condition",
            Field::Date => "Appointment date (YYYY-MM-DD)",
        }
    }
}

/// Free text typed into the booking form.
#[derive(Debug, Clone, Default)]
pub(crate) struct Form {
    pub doctor_name: String,
    pub doctor_contact: String,
    pub specialization: String,
    pub patient_name: String,
    pub patient_contact: String,
    pub health_condition: String,
    pub date: String,
}

impl Form {
    fn with_date(date: String) -> Self {
        Self {
            date,
            ..Self::default()
        }
    }

    pub(crate) fn value(&self, field: Field) -> &str {
        match field {
            Field::DoctorName => &self.doctor_name,
            Field::DoctorContact => &self.doctor_contact,
            Field::Specialization => &self.specialization,
            Field::PatientName => &self.patient_name,
            Field::PatientContact => &self.patient_contact,
            Field::HealthCondition => &self.health_condition,
            Field::Date => &self.date,
        }
    }

    pub(crate) fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::DoctorName => &mut self.doctor_name,
            Field::DoctorContact => &mut self.doctor_contact,
            Field::Specialization => &mut self.specialization,
            Field::PatientName => &mut self.patient_name,
            Field::PatientContact => &mut self.patient_contact,
            Field::HealthCondition => &mut self.health_condition,
            Field::Date => &mut self.date,
        }
    }

    fn to_appointment(&self) -> Appointment {
        let doctor = Doctor::new(
            self.doctor_name.as_str(),
            self.doctor_contact.as_str(),
            self.specialization.as_str(),
        );
        let patient = Patient::new(
            self.patient_name.as_str(),
            self.patient_contact.as_str(),
            self.health_condition.as_str(),
        );
        Appointment::new(self.date.as_str(), doctor, patient)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Status {
    Info(String),
    Error(String),
}

pub(crate) struct App {
    pub scheduler: Scheduler,

    pub screen: Screen,
    pub form: Form,
    pub focus: usize,

    pub appointments: Vec<ScheduledAppointment>,
    pub list_index: usize,

    pub status: Option<Status>,
}

impl App {
    pub(crate) fn new(scheduler: Scheduler) -> Self {
        let appointments = scheduler.view_appointments();
        Self {
            scheduler,
            screen: Screen::Form,
            form: Form::with_date(today()),
            focus: 0,
            appointments,
            list_index: 0,
            status: None,
        }
    }

    pub(crate) fn focused_field(&self) -> Field {
        Field::ALL.get(self.focus).copied().unwrap_or(Field::DoctorName)
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    pub(crate) fn focus_previous(&mut self) {
        self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
    }

    pub(crate) fn submit_form(&mut self) {
        match self.scheduler.schedule_appointment(self.form.to_appointment()) {
            Ok(id) => {
                self.status = Some(Status::Info(format!("Appointment scheduled ({id})")));
                self.form = Form::with_date(self.form.date.clone());
                self.focus = 0;
                self.refresh();
            }
            Err(err) => {
                self.status = Some(Status::Error(format!("Could not schedule: {err}")));
            }
        }
    }

    pub(crate) fn selected_id(&self) -> Option<AppointmentId> {
        self.appointments.get(self.list_index).map(|entry| entry.id)
    }

    pub(crate) fn cancel_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            self.status = Some(Status::Error("No appointment selected".into()));
            return;
        };

        self.status = Some(match self.scheduler.cancel_appointment(id) {
            Ok(_) => Status::Info(format!("Appointment {id} canceled")),
            Err(err) => Status::Error(err.to_string()),
        });
        self.refresh();
    }

    pub(crate) fn show_appointments(&mut self) {
        self.refresh();
        self.screen = Screen::Appointments;
    }

    fn refresh(&mut self) {
        self.appointments = self.scheduler.view_appointments();
        if self.list_index >= self.appointments.len() {
            self.list_index = self.appointments.len().saturating_sub(1);
        }
    }
}

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}
