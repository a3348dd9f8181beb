// ==========================================
// 장치장 현황판 - 애플리케이션 설정
// ==========================================
// 적용 순서: 기본값 → 환경 변수 → CLI 인자
// 위치 카탈로그는 설정 대상이 아님 (컴파일 타임 고정)
// ==========================================

use crate::i18n;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// 설정 키 (환경 변수명)
// ==========================================
pub mod config_keys {
    pub const BIND_ADDR: &str = "YARD_BOARD_BIND_ADDR";
    pub const MAX_UPLOAD_BYTES: &str = "YARD_BOARD_MAX_UPLOAD_BYTES";
    pub const LOCALE: &str = "YARD_BOARD_LOCALE";
    pub const LOG_FORMAT: &str = "YARD_BOARD_LOG_FORMAT";
}

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// 설정 에러
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("설정 값 형식 오류 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, value: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}

// ==========================================
// 로그 출력 형식
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("지원하지 않는 로그 형식: {} (pretty/json)", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

// ==========================================
// AppConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_upload_bytes: usize,
    pub locale: String,
    pub log_format: LogFormat,
}

/// CLI 에서 넘어오는 덮어쓰기 값 (None = 유지)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_addr: Option<String>,
    pub max_upload_bytes: Option<usize>,
    pub locale: Option<String>,
    pub log_format: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            locale: i18n::DEFAULT_LOCALE.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 키 조회 함수로 설정 로드 (테스트용 주입 가능)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = get_or_default(config_keys::BIND_ADDR, DEFAULT_BIND_ADDR);
        let max_upload_bytes = get_or_default(
            config_keys::MAX_UPLOAD_BYTES,
            &DEFAULT_MAX_UPLOAD_BYTES.to_string(),
        );
        let locale = get_or_default(config_keys::LOCALE, i18n::DEFAULT_LOCALE);
        let log_format = get_or_default(config_keys::LOG_FORMAT, "pretty");

        Ok(Self {
            bind_addr: parse_bind_addr(config_keys::BIND_ADDR, &bind_addr)?,
            max_upload_bytes: parse_upload_limit(config_keys::MAX_UPLOAD_BYTES, &max_upload_bytes)?,
            locale: validate_locale(config_keys::LOCALE, &locale)?,
            log_format: log_format
                .parse()
                .map_err(|e: String| ConfigError::invalid(config_keys::LOG_FORMAT, &log_format, e))?,
        })
    }

    /// CLI 인자 덮어쓰기 적용
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(addr) = overrides.bind_addr {
            self.bind_addr = parse_bind_addr("--bind", &addr)?;
        }
        if let Some(limit) = overrides.max_upload_bytes {
            self.max_upload_bytes = parse_upload_limit("--max-upload-bytes", &limit.to_string())?;
        }
        if let Some(locale) = overrides.locale {
            self.locale = validate_locale("--locale", &locale)?;
        }
        if let Some(format) = overrides.log_format {
            self.log_format = format
                .parse()
                .map_err(|e: String| ConfigError::invalid("--log-format", &format, e))?;
        }
        Ok(self)
    }
}

fn parse_bind_addr(key: &str, value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::invalid(key, value, "host:port 형식이어야 합니다"))
}

fn parse_upload_limit(key: &str, value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(0) => Err(ConfigError::invalid(key, value, "0 보다 커야 합니다")),
        Ok(limit) => Ok(limit),
        Err(_) => Err(ConfigError::invalid(key, value, "양의 정수여야 합니다")),
    }
}

fn validate_locale(key: &str, value: &str) -> Result<String, ConfigError> {
    i18n::supported_locale(value)
        .map(str::to_string)
        .ok_or_else(|| {
            ConfigError::invalid(
                key,
                value,
                format!("지원 언어: {}", i18n::SUPPORTED_LOCALES.join(", ")),
            )
        })
}
