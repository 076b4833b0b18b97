//! `POST /translate` - forwards Korean text to the generative text service.

use super::{ApiError, AppState, error::OrApiError};
use crate::{
    core::translate,
    errors::Error,
    models::{TranslateRequest, TranslateResponse},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use std::sync::Arc;

/// Shown for any failure whose details stay in the log
pub const TRANSLATE_FAILED: &str = "번역 중 오류가 발생했습니다. 다시 시도해주세요.";

/// Translates `koreanText` and answers `{englishText}`.
///
/// Blank input is rejected with 400 before any upstream call.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(request) = payload
        .map_err(|rejection| Error::InvalidBody {
            message: rejection.body_text(),
        })
        .or_api_error(TRANSLATE_FAILED)?;

    let korean_text = translate::validate_input(request.korean_text.as_deref())
        .or_api_error(TRANSLATE_FAILED)?;
    let generator = state.generator().or_api_error(TRANSLATE_FAILED)?;

    let english_text = translate::translate(generator, Some(korean_text))
        .await
        .or_api_error(TRANSLATE_FAILED)?;

    Ok(Json(TranslateResponse { english_text }))
}
