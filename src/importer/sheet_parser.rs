// ==========================================
// 장치장 현황판 - 스프레드시트 파서
// ==========================================
// 파이프라인:
// 0. 바이트 버퍼 디코딩 (UniversalSheetReader)
// 1. 컬럼 매칭 (ColumnMapping) - 실패 시 전체 중단
// 2. 행별 정제 + 카탈로그 분류 - 이상 행은 조용히 무시
// ==========================================

use crate::domain::{LocationCatalog, ParsedRecord, YardBoard};
use crate::importer::column_matcher::ColumnMapping;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{SheetFormat, UniversalSheetReader};
use crate::importer::sheet_reader_trait::RawSheet;
use std::sync::Arc;

pub struct SheetParser {
    catalog: Arc<LocationCatalog>,
    reader: UniversalSheetReader,
    cleaner: DataCleaner,
}

impl SheetParser {
    pub fn new(catalog: Arc<LocationCatalog>) -> Self {
        Self {
            catalog,
            reader: UniversalSheetReader,
            cleaner: DataCleaner,
        }
    }

    /// 업로드 파일을 현황판으로 변환
    ///
    /// # 파라미터
    /// - file_name: 형식 판단용 파일명 (.xlsx/.xls/.csv)
    /// - bytes: 파일 내용
    ///
    /// # 반환
    /// - Ok(YardBoard): 카탈로그 키가 모두 채워진 현황판
    /// - Err: 지원하지 않는 형식 / 디코딩 실패 / 필수 컬럼 누락
    pub fn parse(&self, file_name: &str, bytes: &[u8]) -> ImportResult<YardBoard> {
        let format = SheetFormat::from_file_name(file_name)?;
        self.parse_format(format, bytes)
    }

    pub fn parse_format(&self, format: SheetFormat, bytes: &[u8]) -> ImportResult<YardBoard> {
        let sheet = self.reader.read(format, bytes)?;
        let records = self.parse_records(&sheet)?;
        Ok(YardBoard::from_records(&self.catalog, records))
    }

    /// 디코딩된 시트에서 카탈로그 위치 기록만 행 순서대로 추출
    pub fn parse_records(&self, sheet: &RawSheet) -> ImportResult<Vec<ParsedRecord>> {
        let mapping = ColumnMapping::resolve(&sheet.headers)?;
        tracing::debug!(
            "컬럼 매칭: 장치장={}, 곡종={}, 재고={}",
            mapping.location,
            mapping.item,
            mapping.quantity
        );

        let records = sheet
            .rows
            .iter()
            .filter_map(|row| {
                let location = self.cleaner.clean_text(RawSheet::cell(row, mapping.location));
                let item = self.cleaner.clean_text(RawSheet::cell(row, mapping.item));
                let qty = self
                    .cleaner
                    .clean_qty(Some(RawSheet::cell(row, mapping.quantity)));

                let record = ParsedRecord::classify(&self.catalog, &location, item, qty);
                if record.is_none() {
                    tracing::debug!("카탈로그 외 위치 행 무시: {:?}", location);
                }
                record
            })
            .collect();

        Ok(records)
    }
}
