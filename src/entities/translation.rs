//! Translation entity - One saved Korean/English translation pair.
//!
//! Rows are written once by the history create operation and are never updated
//! afterwards; `is_edited` is true exactly when `edited_english_text` is present.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Translation history database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "translations")]
pub struct Model {
    /// Unique identifier assigned on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Original Korean input
    #[sea_orm(column_type = "Text")]
    pub korean_text: String,
    /// Machine translation returned by the model
    #[sea_orm(column_type = "Text")]
    pub english_text: String,
    /// User's edit of the machine translation, only when it differs
    #[sea_orm(column_type = "Text", nullable)]
    pub edited_english_text: Option<String>,
    /// Whether `edited_english_text` is set
    pub is_edited: bool,
    /// When the row was inserted
    pub created_at: DateTimeUtc,
    /// Same as `created_at`; rows are never updated in place
    pub updated_at: DateTimeUtc,
}

/// The translations table has no relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
