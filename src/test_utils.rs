//! Shared test utilities.
//!
//! Helpers for setting up test databases, seeding translation records, and a
//! scripted [`TextGenerator`] that never touches the network.

use crate::{
    core::history::{self, NewTranslation},
    entities,
    errors::{Error, Result},
    providers::TextGenerator,
};
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Saves one translation record.
pub async fn create_test_translation(
    db: &DatabaseConnection,
    korean_text: &str,
    english_text: &str,
    edited_english_text: Option<&str>,
) -> Result<entities::translation::Model> {
    history::create_translation(
        db,
        NewTranslation {
            korean_text: korean_text.to_string(),
            english_text: english_text.to_string(),
            edited_english_text: edited_english_text.map(ToString::to_string),
        },
    )
    .await
}

/// Saves `count` records in insertion order and returns them oldest first.
pub async fn seed_translations(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entities::translation::Model>> {
    let mut saved = Vec::with_capacity(count);
    for n in 0..count {
        saved.push(
            create_test_translation(db, &format!("문장 {n}"), &format!("Sentence {n}"), None)
                .await?,
        );
    }
    Ok(saved)
}

/// A [`TextGenerator`] with a scripted reply that records every prompt it receives.
#[derive(Debug)]
pub struct StubGenerator {
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    /// A generator that always answers `reply`.
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A generator that always fails with an upstream 500.
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent prompt, or an empty string if there was none.
    pub fn last_prompt(&self) -> String {
        self.prompts
            .lock()
            .map(|prompts| prompts.last().cloned().unwrap_or_default())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.reply.clone().ok_or_else(|| Error::Upstream {
            status: 500,
            body: "stub failure".to_string(),
        })
    }
}
