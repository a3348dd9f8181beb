// ==========================================
// 장치장 현황판 - API 계층
// ==========================================
// 책임: 파서 호출 진입점 + 호출자용 에러 변환
// 사용처: server (HTTP), main (CLI)
// ==========================================

pub mod board_api;
pub mod error;

pub use board_api::{BoardApi, ParseTextRequest};
pub use error::{ApiError, ApiResult};
