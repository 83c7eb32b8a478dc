//! Message catalog for the registration flow
//!
//! Success and failure texts shown to players are looked up by key in the catalog of the
//! configured locale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept platform-style tags such as ru_RU
        let lang = s.trim().split(['_', '-']).next().unwrap_or_default();
        match lang.to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Ru => write!(f, "ru"),
        }
    }
}

/// Keys of every message the service emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Registered,
    Cancelled,
    EventFull,
    CallsignRequired,
    TeamRequired,
    InvalidEvent,
    NotLoggedIn,
    NoPermission,
    GenericError,
}

/// Message lookup for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Text for a key in this catalog's locale
    pub fn get(&self, key: MessageKey) -> &'static str {
        match self.locale {
            Locale::En => english(key),
            Locale::Ru => russian(key),
        }
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Registered => "You have successfully registered for the event.",
        MessageKey::Cancelled => "Your registration has been cancelled.",
        MessageKey::EventFull => "Sorry, this event is full.",
        MessageKey::CallsignRequired => "Please enter your callsign.",
        MessageKey::TeamRequired => "Please enter your team.",
        MessageKey::InvalidEvent => "Invalid event.",
        MessageKey::NotLoggedIn => "You must be logged in to register for events.",
        MessageKey::NoPermission => "You do not have permission to register for events.",
        MessageKey::GenericError => "An error occurred. Please try again.",
    }
}

fn russian(key: MessageKey) -> &'static str {
    match key {
        MessageKey::Registered => "Вы успешно зарегистрировались на мероприятие.",
        MessageKey::Cancelled => "Ваша регистрация отменена.",
        MessageKey::EventFull => "К сожалению, все места на мероприятие заняты.",
        MessageKey::CallsignRequired => "Укажите ваш позывной.",
        MessageKey::TeamRequired => "Укажите вашу команду.",
        MessageKey::InvalidEvent => "Неверное мероприятие.",
        MessageKey::NotLoggedIn => "Войдите в систему, чтобы регистрироваться на мероприятия.",
        MessageKey::NoPermission => "У вас нет прав на регистрацию на мероприятия.",
        MessageKey::GenericError => "Произошла ошибка. Попробуйте ещё раз.",
    }
}
