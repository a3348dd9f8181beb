// ==========================================
// 장치장 현황판 - 현황판 API
// ==========================================
// 책임: 텍스트/스프레드시트 파서 호출 진입점 (HTTP, CLI 공용)
// 각 호출은 순수 함수: 요청 간 공유 상태는 읽기 전용 카탈로그뿐
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{LocationCatalog, YardBoard, YardLayout};
use crate::importer::{SheetFormat, SheetParser, TextParser};
use chrono::Utc;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// POST /api/parse 요청 본문
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseTextRequest {
    #[serde(default)]
    pub text: Option<String>,
}

pub struct BoardApi {
    catalog: Arc<LocationCatalog>,
    text_parser: TextParser,
    sheet_parser: SheetParser,
}

impl BoardApi {
    pub fn new(catalog: Arc<LocationCatalog>) -> Self {
        Self {
            text_parser: TextParser::new(Arc::clone(&catalog)),
            sheet_parser: SheetParser::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    /// 붙여넣기 텍스트 파싱 (실패하지 않음)
    pub fn parse_text(&self, text: Option<&str>) -> YardBoard {
        let parse_id = Uuid::new_v4();
        let started = Utc::now();

        let board = self.text_parser.parse(text);

        tracing::info!(
            %parse_id,
            input_len = text.map(str::len).unwrap_or(0),
            filled_nodes = board.filled_nodes(),
            filled_slots = board.filled_slots(),
            elapsed_ms = (Utc::now() - started).num_milliseconds(),
            "텍스트 파싱 완료"
        );
        board
    }

    /// JSON 요청 본문 디코딩 후 텍스트 파싱
    ///
    /// Content-Type 은 검사하지 않음. text 누락 / null 은 빈 텍스트로 취급
    pub fn parse_text_request(&self, body: &[u8]) -> ApiResult<YardBoard> {
        let request: ParseTextRequest =
            serde_json::from_slice(body).map_err(|e| ApiError::InvalidJson(e.to_string()))?;
        Ok(self.parse_text(request.text.as_deref()))
    }

    /// 업로드 파일 파싱
    ///
    /// # 파라미터
    /// - file_name: 업로드 파일명 (.xlsx/.xls/.csv 만 허용)
    /// - bytes: 파일 내용
    ///
    /// # 반환
    /// - Ok(YardBoard)
    /// - Err(ApiError::UnsupportedFile): 확장자 불일치
    /// - Err(ApiError::Import): 디코딩 실패 / 필수 컬럼 누락 (부분 결과 없음)
    pub fn parse_upload(&self, file_name: &str, bytes: &[u8]) -> ApiResult<YardBoard> {
        let format = SheetFormat::from_file_name(file_name)
            .map_err(|_| ApiError::UnsupportedFile(file_name.to_string()))?;

        let parse_id = Uuid::new_v4();
        let started = Utc::now();

        let board = self.sheet_parser.parse_format(format, bytes).map_err(|e| {
            tracing::warn!(%parse_id, file_name, "스프레드시트 파싱 실패: {}", e);
            ApiError::from(e)
        })?;

        tracing::info!(
            %parse_id,
            file_name,
            size_bytes = bytes.len(),
            filled_nodes = board.filled_nodes(),
            filled_slots = board.filled_slots(),
            elapsed_ms = (Utc::now() - started).num_milliseconds(),
            "스프레드시트 파싱 완료"
        );
        Ok(board)
    }

    /// 로컬 파일 파싱 (CLI 용)
    ///
    /// 스프레드시트 확장자면 스프레드시트 파서, 그 외는 UTF-8 텍스트로 읽어 텍스트 파서 사용
    pub fn parse_path(&self, path: &Path) -> ApiResult<YardBoard> {
        let file_name = path.to_string_lossy();
        match SheetFormat::from_file_name(&file_name) {
            Ok(_) => {
                let bytes = std::fs::read(path).map_err(crate::importer::ImportError::from)?;
                self.parse_upload(&file_name, &bytes)
            }
            Err(_) => {
                let text =
                    std::fs::read_to_string(path).map_err(crate::importer::ImportError::from)?;
                Ok(self.parse_text(Some(&text)))
            }
        }
    }

    /// 배치도 레이아웃
    pub fn layout(&self) -> &YardLayout {
        self.catalog.layout()
    }
}
