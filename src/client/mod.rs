//! Client application logic, independent of any UI framework.
//!
//! A UI drives [`TranslationForm`] and [`HistoryFeed`] and renders the
//! [`ToastStore`]; all three talk to the server through a [`Backend`].

/// Request/response access to the translator API
pub mod backend;
/// Translation form state machine
pub mod form;
/// Infinite-scroll history list
pub mod history;
/// Transient notifications
pub mod toast;

pub use backend::{Backend, HttpBackend};
pub use form::{FormState, TranslationForm};
pub use history::HistoryFeed;
pub use toast::{Toast, ToastKind, ToastStore};

#[cfg(test)]
pub(crate) mod test_backend;
