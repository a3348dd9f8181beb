// ==========================================
// 장치장 현황판 - API 계층 에러 타입
// ==========================================
// 책임: 가져오기 에러 → 호출자용 메시지 + HTTP 상태 코드
// 응답 형식: {"error": "<메시지>"}
// ==========================================

use crate::importer::ImportError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_i18n::t;
use thiserror::Error;

/// API 계층 에러 타입
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 호출자 입력 에러 (400 / 413)
    // ==========================================
    #[error("{}", t!("api.missing_file"))]
    MissingFile,

    #[error("{}", unsupported_file_message(.0))]
    UnsupportedFile(String),

    #[error("{}", invalid_json_message(.0))]
    InvalidJson(String),

    #[error("{}", upload_read_message(.0))]
    UploadRead(String),

    #[error("{}", upload_too_large_message(.0))]
    UploadTooLarge(String),

    // ==========================================
    // 가져오기 에러 (디코딩 실패 / 컬럼 누락)
    // ==========================================
    #[error(transparent)]
    Import(#[from] ImportError),
}

fn unsupported_file_message(name: &str) -> String {
    t!("api.unsupported_file", name = name).into_owned()
}

fn invalid_json_message(detail: &str) -> String {
    t!("api.invalid_json", detail = detail).into_owned()
}

fn upload_read_message(detail: &str) -> String {
    t!("api.upload_read_failed", detail = detail).into_owned()
}

fn upload_too_large_message(detail: &str) -> String {
    t!("api.upload_too_large", detail = detail).into_owned()
}

impl ApiError {
    /// 로그/클라이언트용 고정 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MissingFile => "MISSING_FILE",
            ApiError::UnsupportedFile(_) => "UNSUPPORTED_FILE",
            ApiError::InvalidJson(_) => "INVALID_INPUT",
            ApiError::UploadRead(_) => "UPLOAD_READ_ERROR",
            ApiError::UploadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ApiError::Import(ImportError::MissingColumns { .. }) => "MISSING_COLUMNS",
            ApiError::Import(_) => "IMPORT_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UploadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Import(err) if !err.is_caller_error() => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!(code = self.code(), "요청 처리 실패: {}", self);
            t!("api.internal").into_owned()
        } else {
            tracing::warn!(code = self.code(), "잘못된 요청: {}", self);
            self.to_string()
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// API Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{self, tests::LOCALE_TEST_LOCK};

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::UnsupportedFile("a.txt".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Import(ImportError::MissingColumns {
                missing: "곡종".into()
            })
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Import(ImportError::ExcelParseError("zip".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Import(ImportError::FileReadError("io".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(ApiError::MissingFile.code(), "MISSING_FILE");
        assert_eq!(ApiError::InvalidJson("eof".into()).code(), "INVALID_INPUT");
        assert_eq!(
            ApiError::Import(ImportError::MissingColumns {
                missing: "재고".into()
            })
            .code(),
            "MISSING_COLUMNS"
        );
    }

    #[test]
    fn test_upload_too_large_status() {
        let err = ApiError::UploadTooLarge("length limit exceeded".into());
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.code(), "PAYLOAD_TOO_LARGE");
    }

    #[test]
    fn test_localized_messages() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();

        i18n::set_locale("ko");
        assert_eq!(ApiError::MissingFile.to_string(), "file이 없습니다.");
        let msg = ApiError::UnsupportedFile("stock.txt".into()).to_string();
        assert_eq!(msg, "엑셀 파일만 업로드하세요. (stock.txt)");

        i18n::set_locale("en");
        assert_eq!(ApiError::MissingFile.to_string(), "No file was uploaded.");
        let msg = ApiError::InvalidJson("EOF while parsing".into()).to_string();
        assert_eq!(msg, "Request body is not valid JSON: EOF while parsing");

        i18n::set_locale(i18n::DEFAULT_LOCALE);
    }

    #[test]
    fn test_import_error_message_passthrough() {
        let err: ApiError = ImportError::MissingColumns {
            missing: "장치장".into(),
        }
        .into();
        assert!(err.to_string().contains("장치장/곡종/재고량"));
    }
}
