// ==========================================
// 장치장 현황판 - 컬럼 매처
// ==========================================
// 책임: 스프레드시트 헤더 → 논리 컬럼(위치/곡종/재고량) 결정
// 규칙: 헤더를 TRIM 후 키워드 부분 일치, 시트 순서상 첫 컬럼 우선
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::fmt;

/// 논리 컬럼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Location,
    Item,
    Quantity,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 3] = [ColumnRole::Location, ColumnRole::Item, ColumnRole::Quantity];

    /// 헤더에 포함되어야 하는 키워드 조각
    pub fn keyword(self) -> &'static str {
        match self {
            ColumnRole::Location => "장치장",
            ColumnRole::Item => "곡종",
            ColumnRole::Quantity => "재고",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// 논리 컬럼별 시트 컬럼 인덱스
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub location: usize,
    pub item: usize,
    pub quantity: usize,
}

impl ColumnMapping {
    /// 헤더 행에서 세 논리 컬럼을 모두 찾음
    ///
    /// 하나라도 없으면 누락된 컬럼을 모두 나열한 단일 에러 반환
    pub fn resolve(headers: &[String]) -> ImportResult<Self> {
        let find = |role: ColumnRole| {
            headers
                .iter()
                .position(|header| header.trim().contains(role.keyword()))
        };

        match (
            find(ColumnRole::Location),
            find(ColumnRole::Item),
            find(ColumnRole::Quantity),
        ) {
            (Some(location), Some(item), Some(quantity)) => Ok(Self {
                location,
                item,
                quantity,
            }),
            _ => {
                let missing: Vec<String> = ColumnRole::ALL
                    .iter()
                    .filter(|role| find(**role).is_none())
                    .map(ToString::to_string)
                    .collect();
                Err(ImportError::MissingColumns {
                    missing: missing.join("/"),
                })
            }
        }
    }
}
