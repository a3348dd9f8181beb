// ==========================================
// 장치장 현황판 - 시트 리더 Trait
// ==========================================
// 용도: 바이트 버퍼 → 헤더 + 데이터 행 (파싱 0단계)
// 구현체: CsvReader, XlsxReader, XlsReader
// ==========================================

use crate::importer::error::ImportResult;

/// 디코딩된 표 (첫 시트 / CSV 전체)
///
/// 헤더는 TRIM 된 상태, 데이터 행은 셀 문자열 그대로 (길이 불일치 허용)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawSheet {
    /// 행의 셀 값 (열이 없으면 빈 문자열)
    pub fn cell<'a>(row: &'a [String], column: usize) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }
}

pub trait SheetReader: Send + Sync {
    /// 바이트 버퍼를 RawSheet 로 디코딩
    ///
    /// # 반환
    /// - Ok(RawSheet): 헤더 행 + 완전 공백이 아닌 데이터 행
    /// - Err: 손상/형식 불일치 버퍼 (부분 결과 없음)
    fn read_sheet(&self, bytes: &[u8]) -> ImportResult<RawSheet>;
}
