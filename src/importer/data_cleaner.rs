// ==========================================
// 장치장 현황판 - 데이터 정제기
// ==========================================
// 책임: TRIM / 천 단위 구분 쉼표 제거 / NULL → 빈 문자열
// 텍스트 파서와 스프레드시트 파서가 공유
// ==========================================

pub struct DataCleaner;

impl DataCleaner {
    /// 텍스트 필드 정제 (TRIM)
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// 재고량 정제
    ///
    /// 숫자로 변환하지 않음: "1,000" → "1000", 값 없음 → ""
    pub fn clean_qty(&self, value: Option<&str>) -> String {
        match value {
            None => String::new(),
            Some(v) => v.trim().replace(',', ""),
        }
    }
}
