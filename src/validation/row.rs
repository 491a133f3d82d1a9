//! 패턴 입력 행 상태
//!
//! 아직 점을 찍지 않은 행은 인덱스 0이 아니라 `RowEntry::Empty`로 표현합니다.

use serde::Serialize;

use crate::core::bits::{binary_char_to_bit, dot_to_bit, BIT_COUNT};
use crate::core::{PatternCodec, PatternError};

use super::validator::{validate_binary, ValidationResult};

/// 입력 행 하나의 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "camelCase")]
pub enum RowEntry {
    /// 입력 없음 (점이 하나도 찍히지 않음)
    Empty,
    /// 유효한 패턴
    #[serde(serialize_with = "serialize_pattern_index")]
    Pattern(PatternCodec),
}

fn serialize_pattern_index<S: serde::Serializer>(
    pattern: &PatternCodec,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(pattern.index())
}

impl RowEntry {
    /// 점 문자열에서 행 상태 생성
    ///
    /// 공백만 있거나 정확히 12개의 빈 점(○)이면 Empty,
    /// 그 외에는 `PatternCodec::from_dots`의 검사를 그대로 따릅니다.
    pub fn from_dots(dots: &str) -> Result<Self, PatternError> {
        let cells: Vec<char> = dots.chars().filter(|c| !c.is_whitespace()).collect();
        let untouched = cells.is_empty()
            || (cells.len() == BIT_COUNT && cells.iter().all(|&c| dot_to_bit(c) == Some(0)));
        if untouched {
            return Ok(RowEntry::Empty);
        }
        PatternCodec::from_dots(dots).map(RowEntry::Pattern)
    }

    /// 이진 문자열에서 행 상태 생성
    ///
    /// 빈 문자열이나 12자리 0은 Empty,
    /// 그 외에는 검증 결과가 유효할 때만 Pattern
    pub fn from_binary(binary: &str) -> Result<Self, ValidationResult> {
        let untouched = binary.is_empty()
            || (binary.chars().count() == BIT_COUNT
                && binary.chars().all(|c| binary_char_to_bit(c) == Some(0)));
        if untouched {
            return Ok(RowEntry::Empty);
        }

        let result = validate_binary(binary);
        match (result.is_valid, result.index) {
            (true, Some(index)) => PatternCodec::from_index(u32::from(index))
                .map(RowEntry::Pattern)
                .map_err(|_| result),
            _ => Err(result),
        }
    }

    /// 입력 없음 여부
    pub fn is_empty(&self) -> bool {
        matches!(self, RowEntry::Empty)
    }

    /// 패턴 (입력 없으면 None)
    pub fn pattern(&self) -> Option<&PatternCodec> {
        match self {
            RowEntry::Empty => None,
            RowEntry::Pattern(pattern) => Some(pattern),
        }
    }
}

impl From<PatternCodec> for RowEntry {
    fn from(pattern: PatternCodec) -> Self {
        RowEntry::Pattern(pattern)
    }
}

impl From<Option<PatternCodec>> for RowEntry {
    fn from(pattern: Option<PatternCodec>) -> Self {
        pattern.map_or(RowEntry::Empty, RowEntry::Pattern)
    }
}
