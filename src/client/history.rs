//! Infinite-scroll history list.
//!
//! Pages are fetched one at a time from offset `pages * PAGE_SIZE`. The next page
//! is only requested while the last page came back full and no fetch is in flight.

use super::{Backend, ToastStore};
use crate::{
    core::{export, history::PAGE_SIZE},
    errors::Result,
    models::TranslationRecord,
};
use tracing::{debug, warn};

/// Message shown when a delete fails
pub const DELETE_FAILED_MESSAGE: &str = "삭제 실패";

/// Loaded history pages
#[derive(Debug, Clone, Default)]
pub struct HistoryFeed {
    pages: Vec<Vec<TranslationRecord>>,
    fetching: bool,
}

impl HistoryFeed {
    /// An empty feed; the first fetch loads offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loaded pages in fetch order.
    #[must_use]
    pub fn pages(&self) -> &[Vec<TranslationRecord>] {
        &self.pages
    }

    /// Every loaded record, newest first.
    pub fn records(&self) -> impl Iterator<Item = &TranslationRecord> {
        self.pages.iter().flatten()
    }

    /// Whether no records are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.first().is_none_or(Vec::is_empty)
    }

    /// Whether a page fetch is in flight.
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Whether another page may exist: nothing loaded yet, or the last page was full.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pages
            .last()
            .is_none_or(|page| page.len() as u64 >= PAGE_SIZE)
    }

    /// Offset of the next page.
    #[must_use]
    pub fn next_offset(&self) -> u64 {
        self.pages.len() as u64 * PAGE_SIZE
    }

    /// Marks a fetch as in flight and returns its offset, or `None` when a fetch
    /// is already running or there is nothing more to load.
    pub fn begin_fetch(&mut self) -> Option<u64> {
        if self.fetching || !self.has_next_page() {
            return None;
        }
        self.fetching = true;
        Some(self.next_offset())
    }

    /// Applies the outcome of the fetch started by [`Self::begin_fetch`].
    pub fn finish_fetch(&mut self, outcome: Result<Vec<TranslationRecord>>) -> Result<()> {
        self.fetching = false;
        let page = outcome?;
        debug!(page = self.pages.len(), rows = page.len(), "Loaded history page");
        self.pages.push(page);
        Ok(())
    }

    /// Fetches the next page when the scroll sentinel becomes visible.
    ///
    /// Returns `Ok(false)` without a request when fetching is suppressed.
    pub async fn fetch_next_page(&mut self, backend: &dyn Backend) -> Result<bool> {
        let Some(offset) = self.begin_fetch() else {
            return Ok(false);
        };
        let outcome = backend.list(offset).await;
        self.finish_fetch(outcome)?;
        Ok(true)
    }

    /// Loads the first page again and replaces every loaded page with it.
    ///
    /// On failure the previously loaded pages stay in place.
    pub async fn reload(&mut self, backend: &dyn Backend) -> Result<()> {
        self.fetching = true;
        let outcome = backend.list(0).await;
        self.fetching = false;
        let page = outcome?;
        debug!(rows = page.len(), "Reloaded history from the first page");
        self.pages = vec![page];
        Ok(())
    }

    /// CSV of every loaded record.
    pub fn export_csv(&self) -> Result<String> {
        let records: Vec<TranslationRecord> = self.records().cloned().collect();
        export::to_csv(&records)
    }

    /// Text for the clipboard for one record; shows a toast.
    pub fn copy(&self, record: &TranslationRecord, toasts: &ToastStore) -> String {
        toasts.success(super::form::COPIED_MESSAGE);
        record.display_text().to_string()
    }

    /// Deletes `id` after `confirm` agrees, then reloads the list from the start.
    ///
    /// Returns `Ok(false)` when the user declined.
    pub async fn delete<F>(
        &mut self,
        backend: &dyn Backend,
        toasts: &ToastStore,
        id: i64,
        confirm: F,
    ) -> Result<bool>
    where
        F: FnOnce() -> bool + Send,
    {
        if !confirm() {
            return Ok(false);
        }
        if let Err(error) = backend.delete(id).await {
            warn!("Deleting translation {} failed: {}", id, error);
            toasts.error(DELETE_FAILED_MESSAGE);
            return Err(error);
        }
        self.reload(backend).await?;
        Ok(true)
    }
}
