// ==========================================
// 장치장 현황판 - 현황판 모델
// ==========================================
// 불변식: nodes/slots 는 항상 카탈로그의 모든 키를 정확히 포함
// (누락 없음, 카탈로그 외 키 없음)
// ==========================================

use crate::domain::location::{LocationCatalog, LocationKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// StockRecord - 위치별 재고 기록
// ==========================================
// qty 는 숫자로 변환하지 않고 정규화된 문자열로 보존
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub item: String, // 곡종
    pub qty: String,  // 재고량
}

impl StockRecord {
    pub fn new(item: impl Into<String>, qty: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            qty: qty.into(),
        }
    }

    /// 빈 자리표시 기록 {item:"", qty:""}
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.item.is_empty() && self.qty.is_empty()
    }
}

// ==========================================
// ParsedRecord - 파서 출력 단위
// ==========================================
// 카탈로그 분류가 끝난 위치에 대해서만 생성됨
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub location: String,
    pub kind: LocationKind,
    pub item: String,
    pub qty: String,
}

impl ParsedRecord {
    /// 카탈로그로 위치를 분류하여 기록 생성 (카탈로그 외 위치는 None)
    pub fn classify(
        catalog: &LocationCatalog,
        location: &str,
        item: String,
        qty: String,
    ) -> Option<Self> {
        let kind = catalog.classify(location)?;
        Some(Self {
            location: location.to_string(),
            kind,
            item,
            qty,
        })
    }
}

// ==========================================
// YardBoard - 노드/슬롯 전체 매핑
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YardBoard {
    pub nodes: BTreeMap<String, StockRecord>,
    pub slots: BTreeMap<String, StockRecord>,
}

impl YardBoard {
    /// 모든 카탈로그 키를 자리표시 기록으로 채운 빈 현황판
    pub fn empty(catalog: &LocationCatalog) -> Self {
        Self {
            nodes: catalog
                .node_codes()
                .map(|code| (code.to_string(), StockRecord::placeholder()))
                .collect(),
            slots: catalog
                .slot_codes()
                .map(|code| (code.to_string(), StockRecord::placeholder()))
                .collect(),
        }
    }

    /// 빈 현황판에 기록을 순서대로 병합 (같은 위치는 나중 기록이 우선)
    pub fn from_records<I>(catalog: &LocationCatalog, records: I) -> Self
    where
        I: IntoIterator<Item = ParsedRecord>,
    {
        let mut board = Self::empty(catalog);
        for record in records {
            board.place(record);
        }
        board
    }

    /// 기록 1건 배치
    ///
    /// 현황판에 없는 키는 삽입하지 않음 (키 집합 불변식 유지)
    pub fn place(&mut self, record: ParsedRecord) {
        let target = match record.kind {
            LocationKind::Node => &mut self.nodes,
            LocationKind::Slot => &mut self.slots,
        };
        if let Some(entry) = target.get_mut(&record.location) {
            *entry = StockRecord::new(record.item, record.qty);
        }
    }

    pub fn node(&self, code: &str) -> Option<&StockRecord> {
        self.nodes.get(code)
    }

    pub fn slot(&self, code: &str) -> Option<&StockRecord> {
        self.slots.get(code)
    }

    /// 자리표시가 아닌 노드 수
    pub fn filled_nodes(&self) -> usize {
        self.nodes.values().filter(|r| !r.is_placeholder()).count()
    }

    /// 자리표시가 아닌 슬롯 수
    pub fn filled_slots(&self) -> usize {
        self.slots.values().filter(|r| !r.is_placeholder()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_contains_every_key() {
        let catalog = LocationCatalog::standard();
        let board = YardBoard::empty(&catalog);

        assert_eq!(board.nodes.len(), 18);
        assert_eq!(board.slots.len(), 14);
        assert!(board.nodes.values().all(StockRecord::is_placeholder));
        assert!(board.slots.values().all(StockRecord::is_placeholder));
    }

    #[test]
    fn test_from_records_last_write_wins() {
        let catalog = LocationCatalog::standard();
        let records = vec![
            ParsedRecord::classify(&catalog, "A101", "밀".into(), "100".into()).unwrap(),
            ParsedRecord::classify(&catalog, "A101", "보리".into(), "200".into()).unwrap(),
        ];

        let board = YardBoard::from_records(&catalog, records);

        assert_eq!(board.node("A101"), Some(&StockRecord::new("보리", "200")));
        assert_eq!(board.filled_nodes(), 1);
    }

    #[test]
    fn test_classify_rejects_unknown_location() {
        let catalog = LocationCatalog::standard();
        assert!(ParsedRecord::classify(&catalog, "B999", "밀".into(), "1".into()).is_none());
    }

    #[test]
    fn test_place_ignores_key_outside_board() {
        let catalog = LocationCatalog::standard();
        let mut board = YardBoard::empty(&catalog);

        // 직접 생성한 비정상 기록도 키 집합을 늘리지 못함
        board.place(ParsedRecord {
            location: "Z000".to_string(),
            kind: LocationKind::Node,
            item: "밀".to_string(),
            qty: "1".to_string(),
        });

        assert_eq!(board.nodes.len(), 18);
        assert!(board.node("Z000").is_none());
    }

    #[test]
    fn test_serialize_shape() {
        let catalog = LocationCatalog::standard();
        let board = YardBoard::empty(&catalog);
        let json = serde_json::to_value(&board).unwrap();

        assert_eq!(json["nodes"]["A101"], serde_json::json!({"item": "", "qty": ""}));
        assert_eq!(json["slots"]["A407"], serde_json::json!({"item": "", "qty": ""}));
    }
}
