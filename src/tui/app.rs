use std::time::Instant;

use crate::tui::theme::ThemeColors;
use crate::wizard::{Session, SessionEvent};

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    NameInput,
    Help,
}

pub struct App {
    pub session: Session,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub colors: ThemeColors,
}

impl App {
    pub fn new(session: Session, colors: ThemeColors) -> Self {
        Self {
            session,
            input_mode: InputMode::Normal,
            flash_message: None,
            should_quit: false,
            colors,
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn toggle_current_answer(&mut self) {
        let id = self.session.current_criterion().id.clone();
        self.session.apply(SessionEvent::ToggleAnswer(id));
    }

    pub fn set_current_answer(&mut self, value: bool) {
        let id = self.session.current_criterion().id.clone();
        self.session.set_answer(&id, value);
    }

    pub fn next(&mut self) {
        self.session.apply(SessionEvent::Next);
    }

    pub fn previous(&mut self) {
        self.session.apply(SessionEvent::Previous);
    }

    pub fn start_over(&mut self) {
        self.session.apply(SessionEvent::StartOver);
        self.show_flash("Starting over".to_string());
    }

    pub fn is_final_step(&self) -> bool {
        self.session.step() + 1 == self.session.step_count()
    }

    pub fn start_name_input(&mut self) {
        self.input_mode = InputMode::NameInput;
    }

    pub fn finish_name_input(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn push_name_char(&mut self, c: char) {
        let mut name = self.session.funder_name().to_string();
        name.push(c);
        self.session.apply(SessionEvent::ChangeFunderName(name));
    }

    pub fn pop_name_char(&mut self) {
        let mut name = self.session.funder_name().to_string();
        name.pop();
        self.session.apply(SessionEvent::ChangeFunderName(name));
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::default_criteria;
    use crate::tui::theme::ThemeColors;
    use crate::wizard::Mode;

    fn app() -> App {
        App::new(Session::new(default_criteria()), ThemeColors::dark())
    }

    #[test]
    fn test_toggle_current_answer_flips_the_visible_criterion() {
        let mut app = app();
        let id = app.session.current_criterion().id.clone();

        app.toggle_current_answer();
        assert!(app.session.answer(&id));
        app.toggle_current_answer();
        assert!(!app.session.answer(&id));
    }

    #[test]
    fn test_set_current_answer() {
        let mut app = app();
        let id = app.session.current_criterion().id.clone();
        app.set_current_answer(true);
        assert!(app.session.answer(&id));
        app.set_current_answer(false);
        assert!(!app.session.answer(&id));
    }

    #[test]
    fn test_name_editing_round_trip() {
        let mut app = app();
        app.start_name_input();
        assert_eq!(app.input_mode, InputMode::NameInput);

        for c in "Acme".chars() {
            app.push_name_char(c);
        }
        assert_eq!(app.session.funder_name(), "Acme");

        app.pop_name_char();
        assert_eq!(app.session.funder_name(), "Acm");

        app.finish_name_input();
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_final_step_detection_and_completion() {
        let mut app = app();
        assert!(!app.is_final_step());
        for _ in 1..app.session.step_count() {
            app.next();
        }
        assert!(app.is_final_step());

        app.next();
        assert_eq!(app.session.mode(), Mode::ShowingResult);
        assert!(app.session.result().is_some());
    }

    #[test]
    fn test_start_over_flashes_and_resets() {
        let mut app = app();
        app.toggle_current_answer();
        app.next();
        app.start_over();

        assert_eq!(app.session.step(), 0);
        assert!(app.flash_message.is_some());
    }
}
