// ==========================================
// 로그 시스템 초기화
// ==========================================
// tracing + tracing-subscriber 사용
// RUST_LOG 환경 변수로 레벨 지정
// 출력: stderr (CLI parse 의 stdout JSON 과 분리)
// ==========================================

use crate::config::LogFormat;
use tracing_subscriber::{fmt, EnvFilter};

/// 로그 시스템 초기화
///
/// # 환경 변수
/// - RUST_LOG: 로그 레벨 필터 (기본: info)
///   예: RUST_LOG=debug 또는 RUST_LOG=yard_board=trace
///
/// # 예시
/// ```no_run
/// use yard_board::{config::LogFormat, logging};
/// logging::init(LogFormat::Pretty);
/// ```
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .init(),
    }
}

/// 테스트 환경용 로그 초기화
///
/// RUST_LOG 가 없으면 이 크레이트와 HTTP 추적 로그만 debug 로 출력.
/// 여러 테스트에서 호출해도 첫 호출만 적용됨
pub fn init_test() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,yard_board=debug,tower_http=debug"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
}
