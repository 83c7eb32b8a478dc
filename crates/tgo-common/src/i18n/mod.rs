//! Localized user-facing messages

mod messages;

pub use messages::{Locale, MessageKey, Messages};
