//! The translation form.
//!
//! State moves `Idle -> Translating -> Translated | Failed`. Only one translation
//! may be pending. After a result arrives the user can edit it locally; copy and
//! save work from the edited or the unedited text independently.

use super::{Backend, ToastStore};
use crate::{
    errors::{Error, Result},
    models::SaveHistoryRequest,
};
use tracing::warn;

/// Message shown after a successful save
pub const SAVED_MESSAGE: &str = "저장되었습니다!";
/// Message shown after a failed save
pub const SAVE_FAILED_MESSAGE: &str = "저장 실패";
/// Message shown after copying
pub const COPIED_MESSAGE: &str = "복사됨!";
/// Fallback when a failed translation carries no message
pub const TRANSLATE_FAILED_MESSAGE: &str = "번역 중 오류가 발생했습니다.";

/// Where the form is in the translate cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A translation request is pending
    Translating,
    /// The last request produced a translation
    Translated,
    /// The last request failed with this message
    Failed(String),
}

/// Form state for one Korean input and its translation
#[derive(Debug, Clone, Default)]
pub struct TranslationForm {
    korean_text: String,
    english_text: String,
    edited_text: String,
    editing: bool,
    state: FormState,
}

impl TranslationForm {
    /// An empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Current Korean input.
    #[must_use]
    pub fn korean_text(&self) -> &str {
        &self.korean_text
    }

    /// Machine translation of the last successful request.
    #[must_use]
    pub fn english_text(&self) -> &str {
        &self.english_text
    }

    /// The local edit overlay.
    #[must_use]
    pub fn edited_text(&self) -> &str {
        &self.edited_text
    }

    /// Whether the edit overlay is open.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Replaces the Korean input.
    pub fn set_korean_text(&mut self, text: impl Into<String>) {
        self.korean_text = text.into();
    }

    /// Whether the translate action is enabled.
    #[must_use]
    pub fn can_translate(&self) -> bool {
        self.state != FormState::Translating && !self.korean_text.trim().is_empty()
    }

    /// Enters `Translating` and returns the text to send, or `None` when the
    /// action is disabled.
    pub fn begin_translate(&mut self) -> Option<String> {
        if !self.can_translate() {
            return None;
        }
        self.state = FormState::Translating;
        Some(self.korean_text.clone())
    }

    /// Applies the outcome of the request started by [`Self::begin_translate`].
    ///
    /// A result resets the edit overlay to the new translation. A failure keeps
    /// the previous result on screen.
    pub fn finish_translate(&mut self, outcome: Result<String>) {
        match outcome {
            Ok(english_text) => {
                self.edited_text.clone_from(&english_text);
                self.english_text = english_text;
                self.editing = false;
                self.state = FormState::Translated;
            }
            Err(error) => {
                warn!("Translation failed: {}", error);
                let message = match error {
                    Error::Api { message, .. } if !message.is_empty() => message,
                    _ => TRANSLATE_FAILED_MESSAGE.to_string(),
                };
                self.state = FormState::Failed(message);
            }
        }
    }

    /// Runs a whole translate cycle against `backend`. Also serves as retry after a failure.
    ///
    /// Returns `false` without a request when the action is disabled.
    pub async fn translate(&mut self, backend: &dyn Backend) -> bool {
        let Some(korean_text) = self.begin_translate() else {
            return false;
        };
        let outcome = backend.translate(&korean_text).await;
        self.finish_translate(outcome);
        true
    }

    /// Opens or closes the edit overlay.
    pub fn toggle_edit(&mut self) {
        self.editing = !self.editing;
    }

    /// Replaces the edited text.
    pub fn set_edited_text(&mut self, text: impl Into<String>) {
        self.edited_text = text.into();
    }

    /// Text for the clipboard: the edit while editing, otherwise the machine translation.
    #[must_use]
    pub fn copy_text(&self) -> &str {
        if self.editing {
            &self.edited_text
        } else {
            &self.english_text
        }
    }

    /// Returns the text to copy and confirms with a toast.
    pub fn copy(&self, toasts: &ToastStore) -> String {
        toasts.success(COPIED_MESSAGE);
        self.copy_text().to_string()
    }

    /// The save request for the current result. The edit is only included when it differs.
    pub fn save_request(&self) -> Result<SaveHistoryRequest> {
        if self.english_text.is_empty() {
            return Err(Error::MissingParameter {
                name: "englishText".to_string(),
            });
        }
        let edited = (self.edited_text != self.english_text).then(|| self.edited_text.clone());
        Ok(SaveHistoryRequest {
            korean_text: self.korean_text.clone(),
            english_text: self.english_text.clone(),
            edited_english_text: edited,
        })
    }

    /// Saves the current result to history and reports the outcome with a toast.
    pub async fn save(&self, backend: &dyn Backend, toasts: &ToastStore) -> Result<i64> {
        let outcome = match self.save_request() {
            Ok(request) => backend.save(&request).await,
            Err(error) => Err(error),
        };
        match &outcome {
            Ok(_) => {
                toasts.success(SAVED_MESSAGE);
            }
            Err(error) => {
                warn!("Saving translation failed: {}", error);
                toasts.error(SAVE_FAILED_MESSAGE);
            }
        }
        outcome
    }
}
