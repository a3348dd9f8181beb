// ==========================================
// 장치장 현황판 - 서버 공유 상태
// ==========================================

use crate::api::BoardApi;
use crate::domain::LocationCatalog;
use std::sync::Arc;

/// 핸들러 공유 상태 (읽기 전용, 잠금 없음)
#[derive(Clone)]
pub struct AppState {
    pub board_api: Arc<BoardApi>,
}

impl AppState {
    pub fn new(catalog: Arc<LocationCatalog>) -> Self {
        Self {
            board_api: Arc::new(BoardApi::new(catalog)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(LocationCatalog::standard()))
    }
}
