//! Login screen state management
//!
//! Contains the form model, input widgets, and submit flow state

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::{AuthState, Event as WorkerEvent, EventType};
use crate::form::{Credentials, LoginForm};
use crate::logging::LogLevel;

use crossterm::event::KeyEvent;
use std::collections::VecDeque;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler as _;

/// Which form field currently receives keystrokes
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FocusField {
    Email,
    Password,
}

/// Login screen state: the form model plus everything the view needs.
#[derive(Debug)]
pub struct LoginState {
    /// The environment shown in the header.
    pub environment: Environment,
    /// Field values and their validity, recomputed on every edit.
    pub form: LoginForm,
    /// The field that currently has focus.
    pub focus: FocusField,
    /// Whether the password renders as plain text.
    pub show_password: bool,
    /// True only while a simulated submission is in flight.
    pub is_loading: bool,
    /// Error banner text. Cleared on submit; nothing sets it yet.
    pub login_error: String,
    /// Worker events awaiting the next frame's update pass
    pub pending_events: VecDeque<WorkerEvent>,
    /// Bounded history backing the activity panel
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Frame counter driving the gauge animation
    pub tick: usize,
    /// Whether the background fill is painted
    pub with_background_color: bool,

    /// Line editor for the email field
    email_input: Input,
    /// Line editor for the password field
    password_input: Input,
    /// Whether the email field has received input yet (gates its hint)
    email_touched: bool,
    /// Whether the password field has received input yet (gates its hint)
    password_touched: bool,
}

impl LoginState {
    /// Creates a new instance of the login screen state.
    pub fn new(environment: Environment, with_background_color: bool) -> Self {
        Self {
            environment,
            form: LoginForm::new(),
            focus: FocusField::Email,
            show_password: false,
            is_loading: false,
            login_error: String::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            with_background_color,
            email_input: Input::default(),
            password_input: Input::default(),
            email_touched: false,
            password_touched: false,
        }
    }

    pub fn email_input(&self) -> &Input {
        &self.email_input
    }

    pub fn password_input(&self) -> &Input {
        &self.password_input
    }

    pub fn email_touched(&self) -> bool {
        self.email_touched
    }

    pub fn password_touched(&self) -> bool {
        self.password_touched
    }

    /// The submit flow state the gauge renders.
    pub fn current_auth_state(&self) -> AuthState {
        if self.is_loading {
            AuthState::Authenticating
        } else {
            AuthState::Idle
        }
    }

    /// Move focus to the next field (Tab).
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FocusField::Email => FocusField::Password,
            FocusField::Password => FocusField::Email,
        };
    }

    /// Move focus to the previous field (Shift+Tab).
    pub fn focus_previous(&mut self) {
        // Two fields, so backwards is the same hop
        self.focus_next();
    }

    /// Route a key event into the focused line editor and revalidate.
    pub fn handle_input(&mut self, key: KeyEvent) {
        let event = crossterm::event::Event::Key(key);
        match self.focus {
            FocusField::Email => {
                self.email_input.handle_event(&event);
                self.email_touched = true;
            }
            FocusField::Password => {
                self.password_input.handle_event(&event);
                self.password_touched = true;
            }
        }
        self.sync_from_inputs();
    }

    /// Flip password visibility. Touches nothing else.
    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Attempt to submit the form.
    ///
    /// With both fields valid this flips the loading flag on, clears the
    /// error banner, and returns the credentials snapshot for dispatch to the
    /// worker. With any field invalid it changes nothing and returns `None`.
    pub fn submit(&mut self) -> Option<Credentials> {
        if !self.form.is_valid() {
            return None;
        }

        self.is_loading = true;
        self.login_error.clear();
        Some(self.form.credentials())
    }

    /// Undo a submit whose dispatch to the worker failed.
    ///
    /// Without this the loading gauge would spin forever, since no completion
    /// event will ever arrive for the lost attempt.
    pub fn record_dispatch_failure(&mut self) {
        self.is_loading = false;
        self.add_event(WorkerEvent::authenticator_with_level(
            "Unable to queue sign-in attempt, worker unavailable".to_string(),
            EventType::Error,
            LogLevel::Error,
        ));
    }

    /// Queue a worker event for the next update pass.
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }

    /// Append to the activity history, evicting the oldest past the cap.
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    fn sync_from_inputs(&mut self) {
        self.form.set_email(self.email_input.value());
        self.form.set_password(self.password_input.value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn state() -> LoginState {
        LoginState::new(Environment::Local, true)
    }

    /// Type a string into whichever field has focus.
    fn type_str(state: &mut LoginState, text: &str) {
        for c in text.chars() {
            state.handle_input(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    fn fill_valid_form(state: &mut LoginState) {
        type_str(state, "a@b.com");
        state.focus_next();
        type_str(state, "secret1");
    }

    #[test]
    /// A fresh form starts empty with every flag off and focus on email.
    fn new_state_is_empty() {
        let state = state();
        assert_eq!(state.form.email(), "");
        assert_eq!(state.form.password(), "");
        assert!(!state.form.email_valid());
        assert!(!state.form.password_valid());
        assert!(!state.is_loading);
        assert!(!state.show_password);
        assert!(state.login_error.is_empty());
        assert_eq!(state.focus, FocusField::Email);
        assert!(!state.email_touched());
        assert!(!state.password_touched());
    }

    #[test]
    /// Keystrokes land in the focused field and revalidate the form.
    fn typing_updates_form_and_validity() {
        let mut state = state();
        type_str(&mut state, "a@b.com");
        assert_eq!(state.form.email(), "a@b.com");
        assert!(state.form.email_valid());
        assert!(state.email_touched());
        assert!(!state.password_touched());

        state.focus_next();
        assert_eq!(state.focus, FocusField::Password);
        type_str(&mut state, "secret1");
        assert_eq!(state.form.password(), "secret1");
        assert!(state.form.is_valid());
    }

    #[test]
    /// Backspace shortens the value and validity follows.
    fn editing_revalidates() {
        let mut state = state();
        state.focus_next();
        type_str(&mut state, "secret");
        assert!(state.form.password_valid());

        state.handle_input(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(state.form.password(), "secre");
        assert!(!state.form.password_valid());
    }

    #[test]
    fn focus_cycles_between_both_fields() {
        let mut state = state();
        state.focus_next();
        assert_eq!(state.focus, FocusField::Password);
        state.focus_next();
        assert_eq!(state.focus, FocusField::Email);
        state.focus_previous();
        assert_eq!(state.focus, FocusField::Password);
    }

    #[test]
    /// The toggle flips the visibility flag and only that flag.
    fn toggle_password_visibility_flips_one_flag() {
        let mut state = state();
        fill_valid_form(&mut state);
        let email_before = state.form.email().to_string();
        let password_before = state.form.password().to_string();
        let loading_before = state.is_loading;
        let error_before = state.login_error.clone();

        state.toggle_password_visibility();
        assert!(state.show_password);
        assert_eq!(state.form.email(), email_before);
        assert_eq!(state.form.password(), password_before);
        assert_eq!(state.is_loading, loading_before);
        assert_eq!(state.login_error, error_before);
    }

    #[test]
    /// Double invocation returns to the original state.
    fn toggle_password_visibility_is_idempotent_in_pairs() {
        let mut state = state();
        state.toggle_password_visibility();
        state.toggle_password_visibility();
        assert!(!state.show_password);
    }

    #[test]
    /// An invalid form makes submit a strict no-op.
    fn submit_with_invalid_fields_changes_nothing() {
        let mut state = state();
        type_str(&mut state, "bad");
        state.focus_next();
        type_str(&mut state, "secret1");
        state.login_error = "previous error".to_string();

        assert!(state.submit().is_none());
        assert!(!state.is_loading);
        assert_eq!(state.login_error, "previous error");
        assert_eq!(state.form.email(), "bad");
    }

    #[test]
    /// An empty form is invalid, so submit on startup is also a no-op.
    fn submit_on_empty_form_is_noop() {
        let mut state = state();
        assert!(state.submit().is_none());
        assert!(!state.is_loading);
    }

    #[test]
    /// A valid submit flips loading on immediately and snapshots the values.
    fn submit_with_valid_fields_starts_loading() {
        let mut state = state();
        fill_valid_form(&mut state);
        state.login_error = "stale".to_string();

        let credentials = state.submit().expect("valid form should submit");
        assert!(state.is_loading);
        assert!(state.login_error.is_empty());
        assert_eq!(credentials.email, "a@b.com");
        assert_eq!(credentials.password, "secret1");
    }

    #[test]
    /// Submitting again while loading queues another attempt.
    fn submit_while_loading_is_allowed() {
        let mut state = state();
        fill_valid_form(&mut state);
        assert!(state.submit().is_some());
        assert!(state.submit().is_some());
        assert!(state.is_loading);
    }

    #[test]
    /// A failed dispatch reverts the loading flag and logs an error event.
    fn dispatch_failure_reverts_loading() {
        let mut state = state();
        fill_valid_form(&mut state);
        assert!(state.submit().is_some());

        state.record_dispatch_failure();
        assert!(!state.is_loading);
        let queued = state.pending_events.back().expect("event queued");
        assert_eq!(queued.event_type, EventType::Error);
        // The error banner is reserved for authentication failures
        assert!(state.login_error.is_empty());
    }

    #[test]
    /// The activity log is capped, evicting the oldest entries first.
    fn activity_log_is_capped() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(WorkerEvent::authenticator_with_level(
                format!("event {}", i),
                EventType::Success,
                LogLevel::Info,
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().map(|e| e.msg.as_str()), Some("event 10"));
    }
}
