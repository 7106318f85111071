use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    None,
    Quit,
    /// Run `scheduler.schedule_appointment`(...) with the form contents
    SubmitForm,
    /// Run `scheduler.cancel_appointment`(...) for the highlighted row
    CancelSelected,
}

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App) -> Action {
    use KeyCode::{BackTab, Backspace, Char, Delete, Down, Enter, Esc, F, Left, Tab, Up};

    // Global quit shortcut; plain `q` is text on the form
    if key.code == Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }
    let wants_list = key.code == F(2)
        || (key.code == Char('l') && key.modifiers.contains(KeyModifiers::CONTROL));

    let mut action = Action::None;

    match app.screen {
        Screen::Form => match key.code {
            _ if wants_list => app.show_appointments(),
            Tab | Down => app.focus_next(),
            BackTab | Up => app.focus_previous(),
            Char(character) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    let field = app.focused_field();
                    app.form.value_mut(field).push(character);
                }
            }
            Backspace => {
                let field = app.focused_field();
                app.form.value_mut(field).pop();
            }
            Enter => {
                action = Action::SubmitForm;
            }
            Esc => {
                app.status = None;
            }
            _ => {}
        },

        Screen::Appointments => match key.code {
            _ if wants_list => app.screen = Screen::Form,
            Char('q') if key.modifiers.is_empty() => {
                action = Action::Quit;
            }
            Up | Char('k') => {
                if app.list_index > 0 {
                    app.list_index -= 1;
                }
            }
            Down | Char('j') => {
                if app.list_index + 1 < app.appointments.len() {
                    app.list_index += 1;
                }
            }
            Char('d') | Delete => {
                action = Action::CancelSelected;
            }
            Left | Esc | Char('b') => {
                app.screen = Screen::Form;
            }
            _ => {}
        },
    }
    action
}

#[cfg(test)]
mod tests {
    use medisched_core::Scheduler;

    use super::*;

    fn press(app: &mut App, code: KeyCode) -> Action {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    fn type_text(app: &mut App, text: &str) {
        for character in text.chars() {
            assert_eq!(press(app, KeyCode::Char(character)), Action::None, "typing");
        }
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut app = App::new(Scheduler::default());
        type_text(&mut app, "Dr. Lq");
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "ee");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "555");

        assert_eq!(app.form.doctor_name, "Dr. Lee", "q is text on the form");
        assert_eq!(app.form.doctor_contact, "555", "second field");
    }

    #[test]
    fn enter_submits_and_list_actions_cancel() {
        let mut app = App::new(Scheduler::default());
        assert_eq!(press(&mut app, KeyCode::Enter), Action::SubmitForm, "submit");

        press(&mut app, KeyCode::F(2));
        assert_eq!(app.screen, Screen::Appointments, "F2 opens the list");
        assert_eq!(press(&mut app, KeyCode::Char('d')), Action::CancelSelected, "cancel");
        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit, "q quits from the list");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Form, "Esc goes back");
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = App::new(Scheduler::default());
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key, &mut app), Action::Quit, "quit");
        assert!(app.form.doctor_name.is_empty(), "not typed");
    }
}
