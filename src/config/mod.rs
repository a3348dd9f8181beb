// ==========================================
// 장치장 현황판 - 설정 계층
// ==========================================
// 책임: 서버 설정 로드 (환경 변수 + CLI 덮어쓰기)
// ==========================================

pub mod app_config;

pub use app_config::{config_keys, AppConfig, ConfigError, ConfigOverrides, LogFormat};
