// ==========================================
// 장치장 현황판 - 도메인 모델 계층
// ==========================================
// 책임: 위치 카탈로그, 재고 기록, 현황판 매핑 정의
// 원칙: 파싱 로직 없음, I/O 없음
// ==========================================

pub mod board;
pub mod location;

// 핵심 타입 재노출
pub use board::{ParsedRecord, StockRecord, YardBoard};
pub use location::{LocationCatalog, LocationKind, YardLayout};
