// ==========================================
// 장치장 현황판 - HTTP 핸들러
// ==========================================

use crate::api::{ApiError, ApiResult};
use crate::domain::{YardBoard, YardLayout};
use crate::server::state::AppState;
use axum::body::Bytes;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;

/// 업로드 폼의 파일 필드명
pub const UPLOAD_FIELD: &str = "file";

/// POST /api/parse
pub async fn parse_text(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<YardBoard>> {
    let board = state.board_api.parse_text_request(&body)?;
    Ok(Json(board))
}

/// POST /api/upload
///
/// multipart 가 아니거나 file 필드가 없으면 MissingFile
/// 업로드 크기 제한 초과는 UploadTooLarge
pub async fn upload_sheet(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<YardBoard>> {
    let mut multipart = multipart.map_err(|rejection| {
        tracing::debug!("multipart 추출 실패: {}", rejection);
        ApiError::MissingFile
    })?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;

        let board = state.board_api.parse_upload(&file_name, &bytes)?;
        return Ok(Json(board));
    }

    Err(ApiError::MissingFile)
}

/// 본문 크기 제한 초과는 413, 그 외 읽기 실패는 400
fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::UploadTooLarge(err.body_text())
    } else {
        ApiError::UploadRead(err.body_text())
    }
}

/// GET /api/layout
pub async fn layout(State(state): State<AppState>) -> Json<YardLayout> {
    Json(state.board_api.layout().clone())
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
