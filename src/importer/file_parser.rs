// ==========================================
// 장치장 현황판 - 파일 파서 구현
// ==========================================
// 지원: Excel (.xlsx/.xls) / CSV (.csv)
// 입력: 업로드된 바이트 버퍼 (디스크 파일 불필요)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::sheet_reader_trait::{RawSheet, SheetReader};
use calamine::{Reader, Xls, Xlsx};
use csv::ReaderBuilder;
use std::io::{Cursor, Read, Seek};

const UTF8_BOM: char = '\u{feff}';

// ==========================================
// 시트 형식 (파일 확장자 기준)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Xlsx,
    Xls,
    Csv,
}

impl SheetFormat {
    /// 파일명 확장자로 형식 결정 (대소문자 무시)
    pub fn from_file_name(file_name: &str) -> ImportResult<Self> {
        let lower = file_name.trim().to_lowercase();

        if lower.ends_with(".xlsx") {
            Ok(SheetFormat::Xlsx)
        } else if lower.ends_with(".xls") {
            Ok(SheetFormat::Xls)
        } else if lower.ends_with(".csv") {
            Ok(SheetFormat::Csv)
        } else {
            Err(ImportError::UnsupportedFormat(file_name.to_string()))
        }
    }
}

// ==========================================
// CSV Reader 구현
// ==========================================
pub struct CsvReader;

impl SheetReader for CsvReader {
    fn read_sheet(&self, bytes: &[u8]) -> ImportResult<RawSheet> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 행 길이 불일치 허용
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(idx, h)| {
                let h = if idx == 0 { h.trim_start_matches(UTF8_BOM) } else { h };
                h.trim().to_string()
            })
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(str::to_string).collect();

            // 완전 공백 행 건너뜀
            if is_blank_row(&row) {
                continue;
            }
            rows.push(row);
        }

        Ok(RawSheet { headers, rows })
    }
}

// ==========================================
// Excel Reader 구현 (첫 번째 시트만 사용)
// ==========================================
pub struct XlsxReader;

impl SheetReader for XlsxReader {
    fn read_sheet(&self, bytes: &[u8]) -> ImportResult<RawSheet> {
        let workbook = Xlsx::new(Cursor::new(bytes))?;
        read_first_sheet(workbook)
    }
}

pub struct XlsReader;

impl SheetReader for XlsReader {
    fn read_sheet(&self, bytes: &[u8]) -> ImportResult<RawSheet> {
        let workbook = Xls::new(Cursor::new(bytes))?;
        read_first_sheet(workbook)
    }
}

fn read_first_sheet<RS, R>(mut workbook: R) -> ImportResult<RawSheet>
where
    RS: Read + Seek,
    R: Reader<RS>,
    ImportError: From<R::Error>,
{
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ImportError::ExcelParseError("워크시트가 없습니다".to_string()))?;

    let range = workbook.worksheet_range(&sheet_name)?;

    // 빈 시트는 헤더 없음으로 처리 (컬럼 매칭 단계에서 실패)
    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect(),
        None => return Ok(RawSheet::default()),
    };

    let rows = rows_iter
        .map(|data_row| data_row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>())
        .filter(|row| !is_blank_row(row))
        .collect();

    Ok(RawSheet { headers, rows })
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|v| v.trim().is_empty())
}

// ==========================================
// 범용 시트 리더 (형식별 자동 선택)
// ==========================================
pub struct UniversalSheetReader;

impl UniversalSheetReader {
    pub fn read(&self, format: SheetFormat, bytes: &[u8]) -> ImportResult<RawSheet> {
        match format {
            SheetFormat::Csv => CsvReader.read_sheet(bytes),
            SheetFormat::Xlsx => XlsxReader.read_sheet(bytes),
            SheetFormat::Xls => XlsReader.read_sheet(bytes),
        }
    }
}
