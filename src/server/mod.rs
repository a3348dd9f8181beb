// ==========================================
// 장치장 현황판 - HTTP 서버
// ==========================================
// 라우트:
// - POST /api/parse   텍스트 → 현황판
// - POST /api/upload  스프레드시트 업로드 → 현황판
// - GET  /api/layout  배치도 레이아웃
// - GET  /health      생존 확인
// ==========================================

pub mod handlers;
pub mod state;

pub use state::AppState;

use crate::config::AppConfig;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// 전체 라우터 구성
pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/api/parse", post(handlers::parse_text))
        .route("/api/upload", post(handlers::upload_sheet))
        .route("/api/layout", get(handlers::layout))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 서버 실행 (Ctrl+C 수신 시 정상 종료)
pub async fn run(config: &AppConfig, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state, config.max_upload_bytes);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("서버 수신 대기: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("서버 종료");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("종료 시그널 대기 실패: {}", e);
    }
}
