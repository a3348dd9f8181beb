// ==========================================
// 장치장 현황판 - 장치장 위치 카탈로그
// ==========================================
// 배치도 구조: 노드 3행 × 6열, 슬롯 2행 × 7열
// 슬롯 상단 행은 노드 1·2행 사이, 하단 행은 노드 2·3행 사이
// ==========================================
// 카탈로그는 프로세스 시작 시 한 번 생성되고 이후 변경되지 않음
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ==========================================
// 위치 종류 (Location Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationKind {
    Node, // 주 장치 위치
    Slot, // 노드 행 사이의 보조 위치
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationKind::Node => write!(f, "NODE"),
            LocationKind::Slot => write!(f, "SLOT"),
        }
    }
}

// ==========================================
// 배치도 레이아웃 (프론트엔드 전달용)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardLayout {
    pub node_rows: Vec<Vec<String>>,
    pub top_slots: Vec<String>,
    pub bottom_slots: Vec<String>,
}

// ==========================================
// LocationCatalog - 고정 위치 카탈로그
// ==========================================
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    layout: YardLayout,
    nodes: HashSet<String>,
    slots: HashSet<String>,
}

/// 노드 행 접두 번호 (A1xx / A3xx / A5xx)
const NODE_ROW_BLOCKS: [u32; 3] = [1, 3, 5];
const NODE_COLUMNS: u32 = 6;

/// 슬롯 행 접두 번호 (A2xx = 상-중, A4xx = 중-하)
const TOP_SLOT_BLOCK: u32 = 2;
const BOTTOM_SLOT_BLOCK: u32 = 4;
const SLOT_COLUMNS: u32 = 7;

fn location_code(block: u32, column: u32) -> String {
    format!("A{}{:02}", block, column)
}

fn location_row(block: u32, columns: u32) -> Vec<String> {
    (1..=columns).map(|col| location_code(block, col)).collect()
}

impl LocationCatalog {
    /// 표준 장치장 카탈로그 (노드 18개, 슬롯 14개)
    pub fn standard() -> Self {
        let layout = YardLayout {
            node_rows: NODE_ROW_BLOCKS
                .iter()
                .map(|&block| location_row(block, NODE_COLUMNS))
                .collect(),
            top_slots: location_row(TOP_SLOT_BLOCK, SLOT_COLUMNS),
            bottom_slots: location_row(BOTTOM_SLOT_BLOCK, SLOT_COLUMNS),
        };

        let nodes = layout.node_rows.iter().flatten().cloned().collect();
        let slots = layout
            .top_slots
            .iter()
            .chain(layout.bottom_slots.iter())
            .cloned()
            .collect();

        Self {
            layout,
            nodes,
            slots,
        }
    }

    /// 위치 코드 분류
    ///
    /// # 반환
    /// - Some(Node) / Some(Slot): 카탈로그에 등록된 위치
    /// - None: 카탈로그 외 위치 (호출측에서 조용히 버림)
    pub fn classify(&self, code: &str) -> Option<LocationKind> {
        if self.nodes.contains(code) {
            Some(LocationKind::Node)
        } else if self.slots.contains(code) {
            Some(LocationKind::Slot)
        } else {
            None
        }
    }

    /// 배치도 순서대로 노드 코드 순회
    pub fn node_codes(&self) -> impl Iterator<Item = &str> {
        self.layout.node_rows.iter().flatten().map(String::as_str)
    }

    /// 상단 → 하단 순서로 슬롯 코드 순회
    pub fn slot_codes(&self) -> impl Iterator<Item = &str> {
        self.layout
            .top_slots
            .iter()
            .chain(self.layout.bottom_slots.iter())
            .map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn layout(&self) -> &YardLayout {
        &self.layout
    }
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_sizes() {
        let catalog = LocationCatalog::standard();
        assert_eq!(catalog.node_count(), 18);
        assert_eq!(catalog.slot_count(), 14);
        assert_eq!(catalog.layout().node_rows.len(), 3);
        assert!(catalog.layout().node_rows.iter().all(|row| row.len() == 6));
        assert_eq!(catalog.layout().top_slots.len(), 7);
        assert_eq!(catalog.layout().bottom_slots.len(), 7);
    }

    #[test]
    fn test_catalog_codes_follow_convention() {
        let catalog = LocationCatalog::standard();
        for code in catalog.node_codes().chain(catalog.slot_codes()) {
            assert_eq!(code.len(), 4, "코드 길이 오류: {}", code);
            assert!(code.starts_with('A'));
            assert!(code[1..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_classify() {
        let catalog = LocationCatalog::standard();
        assert_eq!(catalog.classify("A101"), Some(LocationKind::Node));
        assert_eq!(catalog.classify("A506"), Some(LocationKind::Node));
        assert_eq!(catalog.classify("A207"), Some(LocationKind::Slot));
        assert_eq!(catalog.classify("A401"), Some(LocationKind::Slot));

        // 범위 밖 / 형식 불일치
        assert_eq!(catalog.classify("A107"), None);
        assert_eq!(catalog.classify("A208"), None);
        assert_eq!(catalog.classify("a101"), None);
        assert_eq!(catalog.classify(""), None);
    }

    #[test]
    fn test_nodes_and_slots_disjoint() {
        let catalog = LocationCatalog::standard();
        for code in catalog.node_codes() {
            assert!(!catalog.slots.contains(code));
        }
    }

    #[test]
    fn test_layout_order() {
        let catalog = LocationCatalog::standard();
        let layout = catalog.layout();
        assert_eq!(layout.node_rows[0][0], "A101");
        assert_eq!(layout.node_rows[1][5], "A306");
        assert_eq!(layout.node_rows[2][0], "A501");
        assert_eq!(layout.top_slots[6], "A207");
        assert_eq!(layout.bottom_slots[0], "A401");
    }
}
