//! In-memory [`Backend`] for client tests.

use super::Backend;
use crate::{
    core::history::PAGE_SIZE,
    errors::{Error, Result},
    models::{SaveHistoryRequest, TranslationRecord},
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Behaves like the server against an in-memory record list.
#[derive(Debug, Default)]
pub struct FakeBackend {
    translation: Option<String>,
    fail_delete: bool,
    list_limit: Option<usize>,
    records: Mutex<Vec<TranslationRecord>>,
    saved: Mutex<Vec<SaveHistoryRequest>>,
    translate_calls: AtomicUsize,
    list_offsets: Mutex<Vec<u64>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers translations with `text` instead of failing.
    pub fn with_translation(mut self, text: &str) -> Self {
        self.translation = Some(text.to_string());
        self
    }

    /// Makes every delete fail.
    pub fn failing_deletes(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    /// Lets the first `count` list calls succeed and fails every later one.
    pub fn failing_lists_after(mut self, count: usize) -> Self {
        self.list_limit = Some(count);
        self
    }

    /// Seeds `count` stored records with ids `1..=count`.
    pub fn with_records(self, count: i64) -> Self {
        if let Ok(mut records) = self.records.lock() {
            for id in 1..=count {
                records.push(record(id));
            }
        }
        self
    }

    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }

    pub fn saved(&self) -> Vec<SaveHistoryRequest> {
        self.saved.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn list_offsets(&self) -> Vec<u64> {
        self.list_offsets.lock().map(|o| o.clone()).unwrap_or_default()
    }
}

fn record(id: i64) -> TranslationRecord {
    let now = Utc::now();
    TranslationRecord {
        id,
        korean_text: format!("문장 {id}"),
        english_text: format!("Sentence {id}"),
        edited_english_text: None,
        is_edited: 0,
        created_at: now,
        updated_at: now,
    }
}

fn poisoned() -> Error {
    Error::Api {
        status: 500,
        message: "poisoned".to_string(),
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn translate(&self, _korean_text: &str) -> Result<String> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        self.translation.clone().ok_or_else(|| Error::Api {
            status: 500,
            message: "번역 중 오류가 발생했습니다. 다시 시도해주세요.".to_string(),
        })
    }

    async fn save(&self, request: &SaveHistoryRequest) -> Result<i64> {
        let mut saved = self.saved.lock().map_err(|_| poisoned())?;
        saved.push(request.clone());
        let mut records = self.records.lock().map_err(|_| poisoned())?;
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        records.push(record(id));
        Ok(id)
    }

    async fn list(&self, offset: u64) -> Result<Vec<TranslationRecord>> {
        let mut offsets = self.list_offsets.lock().map_err(|_| poisoned())?;
        let served = offsets.len();
        offsets.push(offset);
        drop(offsets);
        if self.list_limit.is_some_and(|limit| served >= limit) {
            return Err(Error::Api {
                status: 500,
                message: "히스토리 조회 실패".to_string(),
            });
        }
        let records = self.records.lock().map_err(|_| poisoned())?;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(PAGE_SIZE).unwrap_or(usize::MAX);
        Ok(records.iter().rev().skip(skip).take(take).cloned().collect())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if self.fail_delete {
            return Err(Error::Api {
                status: 500,
                message: "삭제 실패".to_string(),
            });
        }
        self.records
            .lock()
            .map_err(|_| poisoned())?
            .retain(|r| r.id != id);
        Ok(())
    }
}
