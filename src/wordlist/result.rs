//! 단어 변환 결과 타입

use serde::Serialize;

use crate::core::bits::COLUMN_COUNT;
use crate::core::PatternCodec;

/// 단어 하나의 변환 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// 입력한 단어 (대소문자 유지)
    pub word: String,
    pub index: u16,
    pub binary: String,
    pub dots: String,
    pub columns: [String; COLUMN_COUNT],
}

impl ConversionResult {
    /// 단어와 패턴으로 결과 생성
    pub fn new(word: impl Into<String>, pattern: &PatternCodec) -> Self {
        Self {
            word: word.into(),
            index: pattern.index(),
            binary: pattern.to_binary(),
            dots: pattern.to_dots(),
            columns: pattern.to_columns(),
        }
    }

    /// 표시용 점 패턴 (컬럼 사이 공백)
    pub fn display_dots(&self) -> String {
        self.columns.join(" ")
    }
}

/// 일괄 변환 중 실패한 단어
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedError {
    /// 1부터 시작하는 위치
    pub position: usize,
    pub word: String,
    pub error: String,
}

/// 니모닉 일괄 변환 결과
///
/// 실패한 단어가 있어도 중단하지 않고 모든 위치의 에러를 모읍니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConversionResult {
    pub is_valid: bool,
    /// 입력 단어 수 (성공/실패 무관)
    pub word_count: usize,
    /// 변환에 성공한 단어 (입력 순서)
    pub words: Vec<String>,
    pub patterns: Vec<ConversionResult>,
    pub errors: Vec<PositionedError>,
}

/// 입력 위치 하나의 변환 결과 (성공 또는 실패)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchRow<'a> {
    Converted {
        /// 1부터 시작하는 입력 위치
        position: usize,
        result: &'a ConversionResult,
    },
    Failed(&'a PositionedError),
}

impl BatchRow<'_> {
    /// 1부터 시작하는 입력 위치
    pub fn position(&self) -> usize {
        match self {
            BatchRow::Converted { position, .. } => *position,
            BatchRow::Failed(error) => error.position,
        }
    }
}

impl BatchConversionResult {
    /// 입력 순서대로 위치별 결과
    ///
    /// 모든 위치는 `patterns` 또는 `errors` 중 정확히 한 곳에 순서대로 들어 있으므로,
    /// 에러 위치가 아닌 자리에 다음 패턴을 채웁니다.
    pub fn rows(&self) -> Vec<BatchRow<'_>> {
        let mut patterns = self.patterns.iter();
        let mut errors = self.errors.iter().peekable();
        let mut rows = Vec::with_capacity(self.word_count);

        for position in 1..=self.word_count {
            if let Some(error) = errors.next_if(|e| e.position == position) {
                rows.push(BatchRow::Failed(error));
            } else if let Some(result) = patterns.next() {
                rows.push(BatchRow::Converted { position, result });
            }
        }
        rows
    }
}
