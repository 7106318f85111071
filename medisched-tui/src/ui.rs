use medisched_core::model::{Person, ScheduledAppointment};
use ratatui::{
    prelude::*,
    widgets::{
        Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState, Wrap,
    },
};

use crate::app::{App, Field, Screen, Status};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let rules = app.scheduler.rule_names().join(", ");
    let header = Paragraph::new(format!("medisched – appointment book · rules: {rules}"))
        .block(Block::default().borders(Borders::ALL).title("Medisched"));
    frame.render_widget(header, *header_area);

    match app.screen {
        Screen::Form => draw_form(frame, app, *content_area),
        Screen::Appointments => draw_appointments(frame, app, *content_area),
    }

    let nav_hint = match app.screen {
        Screen::Form => {
            "Type to edit · Tab/↓ next · Shift-Tab/↑ previous · Enter schedule · F2 appointments · Ctrl-C quit"
        }
        Screen::Appointments => {
            "↑/↓ move · d/Del cancel · Esc/←/b back to form · q/Ctrl-C quit"
        }
    };

    let (status_text, status_style) = match &app.status {
        Some(Status::Error(msg)) => (
            format!("{msg} · {nav_hint}"),
            Style::default().fg(Color::Red),
        ),
        Some(Status::Info(msg)) => (
            format!("{msg} · {nav_hint}"),
            Style::default().fg(Color::Green),
        ),
        None => (nav_hint.to_owned(), Style::default()),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focused_field();
    let items = Field::ALL
        .iter()
        .map(|&field| {
            let prefix = if field == focused { "> " } else { "  " };
            let cursor = if field == focused { "_" } else { "" };
            ListItem::new(format!(
                "{prefix}{:<30} {}{cursor}",
                field.label(),
                app.form.value(field)
            ))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("New appointment ({} booked)", app.appointments.len())),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.focus));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_appointments(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = "Appointments in booking order (d to cancel, Esc to go back)";

    if app.appointments.is_empty() {
        let paragraph = Paragraph::new("No appointments scheduled yet.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let rows = app.appointments.iter().map(|entry| {
        let (doctor, patient) = people_labels(entry);
        Row::new(vec![
            Cell::from(entry.id.to_string()),
            Cell::from(entry.appointment.date().to_owned()),
            Cell::from(doctor),
            Cell::from(patient),
        ])
    });

    let column_widths = [
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Id", "Date", "Doctor", "Patient"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .column_spacing(1);

    let mut state = TableState::default();
    state.select(Some(app.list_index));
    frame.render_stateful_widget(table, area, &mut state);
}

fn people_labels(entry: &ScheduledAppointment) -> (String, String) {
    let doctor = entry.appointment.doctor();
    let patient = entry.appointment.patient();
    (
        labelled(doctor.name(), doctor.specialization()),
        labelled(patient.name(), patient.health_condition()),
    )
}

fn labelled(name: &str, detail: &str) -> String {
    if detail.trim().is_empty() {
        name.to_owned()
    } else {
        format!("{name} ({detail})")
    }
}
