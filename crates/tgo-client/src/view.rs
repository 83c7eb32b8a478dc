//! Registration view-model
//!
//! Everything the event page renders, derived from the last listing plus the outcome of
//! the user's own actions.

use crate::models::{Participant, ParticipantList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Message box above the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// One entry of the role selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleOption {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

/// Free-text inputs of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    pub callsign: String,
    pub team: String,
}

/// Registration page state
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub rows: Vec<Participant>,
    pub current_count: usize,
    pub max_participants: u32,
    pub has_available_slots: bool,
    pub role_options: Vec<RoleOption>,
    pub form_visible: bool,
    /// Submit button disabled while a request is in flight
    pub submitting: bool,
    pub inputs: FormInputs,
    pub notice: Option<Notice>,
    event_full_text: String,
}

impl ViewModel {
    /// `event_full_text` is shown when a listing reports no free slots
    pub fn new(event_full_text: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            current_count: 0,
            max_participants: 0,
            has_available_slots: true,
            role_options: Vec::new(),
            form_visible: true,
            submitting: false,
            inputs: FormInputs::default(),
            notice: None,
            event_full_text: event_full_text.into(),
        }
    }

    /// Apply a fresh listing
    ///
    /// Role options keep the server's order, which starts with the default role. The
    /// listing's `default_role` is preselected when allowed, else the first option.
    pub fn apply_listing(&mut self, list: &ParticipantList) {
        self.rows.clone_from(&list.participants);
        self.current_count = list.current_count;
        self.max_participants = list.max_participants;
        self.has_available_slots = list.has_available_slots;

        let selected = if list.allowed_roles.contains(&list.default_role) {
            Some(list.default_role.as_str())
        } else {
            list.allowed_roles.first_key()
        };
        self.role_options = list
            .allowed_roles
            .iter()
            .map(|(key, label)| RoleOption {
                key: key.to_string(),
                label: label.to_string(),
                selected: Some(key) == selected,
            })
            .collect();

        if !list.has_available_slots && self.form_visible {
            self.form_visible = false;
            self.notice = Some(Notice::new(NoticeKind::Info, self.event_full_text.clone()));
        }
    }

    /// `current/max`, only for capped events
    pub fn counter(&self) -> Option<String> {
        (self.max_participants > 0).then(|| format!("{}/{}", self.current_count, self.max_participants))
    }

    /// Fill level of the progress bar, only for capped events
    pub fn progress_percent(&self) -> Option<f64> {
        (self.max_participants > 0)
            .then(|| self.current_count as f64 / f64::from(self.max_participants) * 100.0)
    }

    pub fn is_full(&self) -> bool {
        self.max_participants > 0 && self.current_count >= self.max_participants as usize
    }

    /// Key of the preselected role
    pub fn selected_role(&self) -> Option<&str> {
        self.role_options
            .iter()
            .find(|option| option.selected)
            .map(|option| option.key.as_str())
    }

    /// Whether the roster has a row the current user may cancel
    pub fn is_registered(&self) -> bool {
        self.rows.iter().any(|row| row.can_cancel)
    }

    /// A request starts: disable the button, clear the notice
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.notice = None;
    }

    pub fn register_succeeded(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.notice = Some(Notice::new(NoticeKind::Success, message));
        self.form_visible = false;
    }

    pub fn cancel_succeeded(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.notice = Some(Notice::new(NoticeKind::Success, message));
        self.inputs = FormInputs::default();
        self.form_visible = true;
    }

    /// Show the server's message verbatim and re-enable the button
    pub fn action_failed(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.notice = Some(Notice::new(NoticeKind::Error, message));
    }
}
