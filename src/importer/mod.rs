// ==========================================
// 장치장 현황판 - 가져오기 계층
// ==========================================
// 책임: 외부 입력(붙여넣기 텍스트 / 스프레드시트) → YardBoard
// 지원: 텍스트, Excel (.xlsx/.xls), CSV
// ==========================================

pub mod column_matcher;
pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod sheet_parser;
pub mod sheet_reader_trait;
pub mod text_parser;

// 핵심 타입 재노출
pub use column_matcher::{ColumnMapping, ColumnRole};
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvReader, SheetFormat, UniversalSheetReader, XlsReader, XlsxReader};
pub use sheet_parser::SheetParser;
pub use sheet_reader_trait::{RawSheet, SheetReader};
pub use text_parser::TextParser;
