// ==========================================
// 장치장 현황판 - 붙여넣기 텍스트 파서
// ==========================================
// 입력: 엑셀/메신저에서 복사한 탭/공백 구분 텍스트
// 출력: 노드/슬롯 전체가 채워진 YardBoard
// ==========================================
// 정책: 형식 오류 줄, 카탈로그 외 위치는 에러 없이 건너뜀
// ==========================================

use crate::domain::{LocationCatalog, ParsedRecord, YardBoard};
use crate::importer::data_cleaner::DataCleaner;
use std::sync::Arc;

/// 첫 줄에 포함되면 헤더로 간주하는 키워드
pub const HEADER_KEYWORDS: [&str; 3] = ["장치장", "곡종", "재고"];

/// 한 줄에서 필요한 최소 토큰 수 (위치, 곡종, 재고량)
const MIN_TOKENS: usize = 3;

pub struct TextParser {
    catalog: Arc<LocationCatalog>,
    cleaner: DataCleaner,
}

impl TextParser {
    pub fn new(catalog: Arc<LocationCatalog>) -> Self {
        Self {
            catalog,
            cleaner: DataCleaner,
        }
    }

    /// 붙여넣기 텍스트를 현황판으로 변환
    ///
    /// None / 빈 문자열은 전부 자리표시인 현황판을 반환
    pub fn parse(&self, text: Option<&str>) -> YardBoard {
        let records = text.map(|t| self.parse_records(t)).unwrap_or_default();
        YardBoard::from_records(&self.catalog, records)
    }

    /// 카탈로그에 등록된 위치의 기록만 입력 순서대로 반환
    pub fn parse_records(&self, text: &str) -> Vec<ParsedRecord> {
        let lines: Vec<&str> = text
            .split(is_line_break)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let start = match lines.first() {
            Some(first) if is_header_line(first) => {
                tracing::debug!("헤더 줄 건너뜀: {}", first);
                1
            }
            _ => 0,
        };

        lines
            .iter()
            .skip(start)
            .filter_map(|line| self.parse_line(line))
            .collect()
    }

    fn parse_line(&self, line: &str) -> Option<ParsedRecord> {
        let tokens = tokenize(line);
        if tokens.len() < MIN_TOKENS {
            tracing::debug!("필드 부족으로 줄 건너뜀 (토큰 {}개): {}", tokens.len(), line);
            return None;
        }

        let location = self.cleaner.clean_text(tokens[0]);
        let item = self.cleaner.clean_text(tokens[1]);
        // 남은 토큰은 구분자 없이 이어붙임 (토큰 사이 공백은 보존되지 않음)
        let qty = self.cleaner.clean_qty(Some(&tokens[2..].concat()));

        let record = ParsedRecord::classify(&self.catalog, &location, item, qty);
        if record.is_none() {
            tracing::debug!("카탈로그 외 위치 무시: {}", location);
        }
        record
    }
}

/// 헤더 키워드 포함 여부
pub fn is_header_line(line: &str) -> bool {
    HEADER_KEYWORDS.iter().any(|kw| line.contains(kw))
}

/// 줄 구분 문자 (CR 단독, 폼피드, 유니코드 줄/문단 구분자 포함)
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// 한 줄을 필드 토큰으로 분리
///
/// 탭, 연속 공백, 단일 공백 모두 구분자. 빈 토큰은 생기지 않음
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
