//! Translation history business logic.
//!
//! Records are created once, listed newest-first with offset pagination, and
//! deleted by id. Every operation is a single SQL statement.

use crate::{
    entities::{Translation, translation},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use tracing::{debug, instrument};

/// Number of records returned by one history page
pub const PAGE_SIZE: u64 = 20;

/// Input of [`create_translation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTranslation {
    /// Original Korean input
    pub korean_text: String,
    /// Machine translation
    pub english_text: String,
    /// User edit, if the user touched the machine translation
    pub edited_english_text: Option<String>,
}

impl NewTranslation {
    /// The edit that will actually be stored: only a non-empty text that differs
    /// from the machine translation counts as an edit.
    #[must_use]
    pub fn effective_edit(&self) -> Option<&str> {
        self.edited_english_text
            .as_deref()
            .filter(|edited| !edited.is_empty() && *edited != self.english_text)
    }
}

/// Inserts a translation record and returns the stored row.
///
/// `is_edited` is derived here, and an edit equal to the machine translation is
/// stored as `NULL`, so `is_edited` is true exactly when `edited_english_text` is set.
#[instrument(skip_all)]
pub async fn create_translation<C>(db: &C, new: NewTranslation) -> Result<translation::Model>
where
    C: ConnectionTrait,
{
    let edited = new.effective_edit().map(ToString::to_string);
    let now = Utc::now();

    let model = translation::ActiveModel {
        korean_text: Set(new.korean_text),
        english_text: Set(new.english_text),
        is_edited: Set(edited.is_some()),
        edited_english_text: Set(edited),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let saved = model.insert(db).await?;
    debug!(id = saved.id, is_edited = saved.is_edited, "Saved translation");
    Ok(saved)
}

/// Returns up to [`PAGE_SIZE`] records, newest first, skipping `offset` records.
///
/// Rows inserted within the same timestamp are ordered by descending id.
pub async fn list_translations<C>(db: &C, offset: u64) -> Result<Vec<translation::Model>>
where
    C: ConnectionTrait,
{
    Translation::find()
        .order_by_desc(translation::Column::CreatedAt)
        .order_by_desc(translation::Column::Id)
        .offset(offset)
        .limit(PAGE_SIZE)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Returns every record, newest first.
pub async fn list_all_translations<C>(db: &C) -> Result<Vec<translation::Model>>
where
    C: ConnectionTrait,
{
    Translation::find()
        .order_by_desc(translation::Column::CreatedAt)
        .order_by_desc(translation::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a record by id.
pub async fn get_translation<C>(db: &C, id: i64) -> Result<Option<translation::Model>>
where
    C: ConnectionTrait,
{
    Translation::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Deletes a record by id and returns how many rows were removed.
///
/// Deleting an id that does not exist is not an error.
#[instrument(skip(db))]
pub async fn delete_translation<C>(db: &C, id: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = Translation::delete_by_id(id).exec(db).await?;
    debug!(rows_affected = result.rows_affected, "Deleted translation");
    Ok(result.rows_affected)
}
