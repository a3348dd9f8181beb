// ==========================================
// 장치장 현황판 - 핵심 라이브러리
// ==========================================
// 붙여넣기 텍스트 / 스프레드시트 재고 데이터를
// 고정된 장치장 배치도(노드 18, 슬롯 14)에 매핑
// ==========================================

// 국제화 초기화
rust_i18n::i18n!("locales", fallback = "ko");

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 위치 카탈로그, 현황판 모델
pub mod domain;

// 가져오기 계층 - 텍스트/스프레드시트 파서
pub mod importer;

// 설정 계층
pub mod config;

// 로그 시스템
pub mod logging;

// 국제화
pub mod i18n;

// API 계층 - 파서 진입점
pub mod api;

// HTTP 서버
pub mod server;

// ==========================================
// 핵심 타입 재노출
// ==========================================

pub use api::{ApiError, BoardApi};
pub use domain::{LocationCatalog, LocationKind, ParsedRecord, StockRecord, YardBoard, YardLayout};
pub use importer::{ImportError, SheetParser, TextParser};

// ==========================================
// 상수
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "장치장 현황판";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
