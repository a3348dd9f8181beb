// ==========================================
// 장치장 현황판 - 가져오기 모듈 에러 타입
// ==========================================
// 도구: thiserror 파생 매크로
// ==========================================

use thiserror::Error;

/// 가져오기 모듈 에러 타입
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 파일 관련 에러 =====
    #[error("지원하지 않는 파일 형식: {0} (.xlsx/.xls/.csv 만 지원)")]
    UnsupportedFormat(String),

    #[error("파일 읽기 실패: {0}")]
    FileReadError(String),

    #[error("엑셀 파싱 실패: {0}")]
    ExcelParseError(String),

    #[error("CSV 파싱 실패: {0}")]
    CsvParseError(String),

    // ===== 컬럼 매핑 에러 =====
    #[error("엑셀 컬럼명이 필요 형식(장치장/곡종/재고량)이 아닙니다. (누락: {missing})")]
    MissingColumns { missing: String },
}

impl ImportError {
    /// 입력 파일 자체가 원인인 에러인지 여부
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, ImportError::FileReadError(_))
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<calamine::XlsError> for ImportError {
    fn from(err: calamine::XlsError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 타입 별칭
pub type ImportResult<T> = Result<T, ImportError>;
