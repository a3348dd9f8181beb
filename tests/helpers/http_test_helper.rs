// ==========================================
// HTTP 통합 테스트 보조 도구
// ==========================================
// 책임: 라우터 구성, 요청 생성, 응답 본문 디코딩
// ==========================================

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use yard_board::server::{build_router, AppState};

pub const BOUNDARY: &str = "----yard-board-test-boundary";

/// 테스트용 라우터 (에러 메시지 언어: ko)
pub fn test_app() -> Router {
    yard_board::logging::init_test();
    yard_board::i18n::set_locale("ko");
    build_router(AppState::default(), 1024 * 1024)
}

/// 요청 1건 실행 후 (상태 코드, 본문 바이트) 반환
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("요청 실행 실패");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("본문 읽기 실패")
        .to_bytes()
        .to_vec();
    (status, body)
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, request).await;
    let json = serde_json::from_slice(&body).expect("JSON 응답이 아님");
    (status, json)
}

pub fn parse_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/parse")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("요청 생성 실패")
}

/// multipart/form-data 본문 생성 (필드 1개)
pub fn multipart_body(field: &str, file_name: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn upload_request(field: &str, file_name: &str, content: &[u8]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(field, file_name, content)))
        .expect("요청 생성 실패")
}
