// ==========================================
// 테스트 보조 함수
// ==========================================
// 책임: 테스트 입력 생성, 임시 파일, 카탈로그 전체 코드 목록
// ==========================================

#![allow(dead_code)]

use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;
use yard_board::LocationCatalog;

/// 카탈로그 전체 노드 코드 (배치도 순서)
pub fn all_node_codes() -> Vec<String> {
    LocationCatalog::standard()
        .node_codes()
        .map(str::to_string)
        .collect()
}

/// 카탈로그 전체 슬롯 코드 (상단 → 하단)
pub fn all_slot_codes() -> Vec<String> {
    LocationCatalog::standard()
        .slot_codes()
        .map(str::to_string)
        .collect()
}

/// 표준 헤더(장치장/곡종/재고량) CSV 문자열 생성
pub fn stock_csv(rows: &[(&str, &str, &str)]) -> String {
    let mut csv = String::from("장치장,곡종,재고량\n");
    for (loc, item, qty) in rows {
        csv.push_str(&format!("{},{},\"{}\"\n", loc, item, qty));
    }
    csv
}

/// 지정 확장자의 임시 파일 생성
pub fn temp_file_with(suffix: &str, content: &[u8]) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(content)?;
    file.flush()?;
    Ok(file)
}
