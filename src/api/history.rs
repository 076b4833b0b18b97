//! `/history` endpoints - save, list, delete and export translation records.

use super::{ApiError, AppState, error::OrApiError};
use crate::{
    core::{
        export,
        history::{self, NewTranslation},
    },
    errors::{Error, Result},
    models::{
        HistoryPage, SaveHistoryRequest, SaveHistoryResponse, SuccessResponse, TranslationRecord,
    },
};
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Generic message for a failed save
pub const SAVE_FAILED: &str = "히스토리 저장 실패";
/// Generic message for a failed listing
pub const LIST_FAILED: &str = "히스토리 조회 실패";
/// Generic message for a failed delete
pub const DELETE_FAILED: &str = "삭제 실패";
/// Generic message for a failed export
pub const EXPORT_FAILED: &str = "CSV 내보내기 실패";

/// Query string of `GET /history`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Number of records to skip, defaults to 0
    pub offset: Option<String>,
}

/// Query string of `DELETE /history`
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    /// Id of the record to delete
    pub id: Option<String>,
}

/// Offsets are bound as signed 64-bit SQL integers, so anything above `i64::MAX` is rejected.
fn parse_offset(raw: Option<&str>) -> Result<u64> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(0),
        Some(value) => value
            .parse::<i64>()
            .ok()
            .and_then(|offset| u64::try_from(offset).ok())
            .ok_or_else(|| Error::InvalidParameter {
                name: "offset".to_string(),
                value: value.to_string(),
            }),
    }
}

fn parse_id(raw: Option<&str>) -> Result<i64> {
    let value = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::MissingParameter {
            name: "ID".to_string(),
        })?;
    value.parse().map_err(|_| Error::InvalidParameter {
        name: "ID".to_string(),
        value: value.to_string(),
    })
}

/// Saves a translation and answers `{id, success}`.
pub async fn save(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<SaveHistoryRequest>, JsonRejection>,
) -> std::result::Result<Json<SaveHistoryResponse>, ApiError> {
    let Json(request) = payload
        .map_err(|rejection| Error::InvalidBody {
            message: rejection.body_text(),
        })
        .or_api_error(SAVE_FAILED)?;
    let db = state.database().or_api_error(SAVE_FAILED)?;

    let saved = history::create_translation(
        db,
        NewTranslation {
            korean_text: request.korean_text,
            english_text: request.english_text,
            edited_english_text: request.edited_english_text,
        },
    )
    .await
    .or_api_error(SAVE_FAILED)?;

    info!(id = saved.id, "Translation saved to history");
    Ok(Json(SaveHistoryResponse {
        id: saved.id,
        success: true,
    }))
}

/// Answers one page of records starting at `offset`.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> std::result::Result<Json<HistoryPage>, ApiError> {
    let offset = parse_offset(query.offset.as_deref()).or_api_error(LIST_FAILED)?;
    let db = state.database().or_api_error(LIST_FAILED)?;

    let rows = history::list_translations(db, offset)
        .await
        .or_api_error(LIST_FAILED)?;

    Ok(Json(HistoryPage {
        translations: rows.into_iter().map(TranslationRecord::from).collect(),
    }))
}

/// Deletes the record named by `id`; succeeds even if it does not exist.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DeleteQuery>,
) -> std::result::Result<Json<SuccessResponse>, ApiError> {
    let id = parse_id(query.id.as_deref()).or_api_error(DELETE_FAILED)?;
    let db = state.database().or_api_error(DELETE_FAILED)?;

    history::delete_translation(db, id)
        .await
        .or_api_error(DELETE_FAILED)?;

    Ok(Json(SuccessResponse { success: true }))
}

/// Downloads every stored record as CSV.
pub async fn export(
    State(state): State<Arc<AppState>>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let db = state.database().or_api_error(EXPORT_FAILED)?;

    let records: Vec<TranslationRecord> = history::list_all_translations(db)
        .await
        .or_api_error(EXPORT_FAILED)?
        .into_iter()
        .map(TranslationRecord::from)
        .collect();
    let body = export::to_csv(&records).or_api_error(EXPORT_FAILED)?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::file_name(Utc::now().date_naive())
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
