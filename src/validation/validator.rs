//! 이진 문자열 검증 모듈
//!
//! 손으로 편집한 점 패턴에서 얻은 12자리 이진 문자열이
//! SLIP39 인덱스로 허용되는지 판정합니다. 에러는 반환값으로만 전달됩니다.

use serde::Serialize;

use crate::core::bits::{binary_char_to_bit, bits_to_value, is_valid_index, BIT_COUNT};

/// 이진 문자열 검증 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// 검증 통과 여부
    pub is_valid: bool,
    /// 실패 사유 (첫 번째로 실패한 검사)
    pub error: Option<String>,
    /// 해석한 값
    /// 첫 비트/범위 검사 실패 시에도 표시용으로 채워짐
    pub index: Option<u16>,
}

impl ValidationResult {
    fn valid(index: u16) -> Self {
        Self {
            is_valid: true,
            error: None,
            index: Some(index),
        }
    }

    fn invalid(error: impl Into<String>, index: Option<u16>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
            index,
        }
    }
}

/// 12자리 이진 문자열 검증
///
/// 검사 순서 (처음 실패한 검사가 사유가 됨):
/// 1. 빈 문자열
/// 2. 길이 12
/// 3. 0/1 이외의 문자
/// 4. 첫 비트 0
/// 5. 값 범위 1~1024
///
/// # Examples
/// ```
/// use slip39_dots::validate_binary;
///
/// let result = validate_binary("000000001111");
/// assert!(result.is_valid);
/// assert_eq!(result.index, Some(15));
///
/// let result = validate_binary("100000000000");
/// assert!(!result.is_valid);
/// assert_eq!(result.index, Some(2048));
/// ```
pub fn validate_binary(binary: &str) -> ValidationResult {
    // 1. 빈 문자열
    if binary.is_empty() {
        return ValidationResult::invalid("Binary must be a non-empty string", None);
    }

    // 2. 길이
    let len = binary.chars().count();
    if len != BIT_COUNT {
        return ValidationResult::invalid(
            format!("Binary must be exactly {} characters, got {}", BIT_COUNT, len),
            None,
        );
    }

    // 3. 문자 집합
    let bits: Option<Vec<u8>> = binary.chars().map(binary_char_to_bit).collect();
    let Some(bits) = bits else {
        return ValidationResult::invalid("Binary must contain only 0 and 1", None);
    };

    // 12비트 값은 u16에 항상 들어감
    let value = bits_to_value(bits.iter().copied());

    // 4. 첫 비트
    if bits[0] != 0 {
        return ValidationResult::invalid("First bit must be 0 for SLIP39", Some(value as u16));
    }

    // 5. 범위
    if !is_valid_index(value) {
        return ValidationResult::invalid(
            format!("Index {} is out of range (must be 1-1024)", value),
            Some(value as u16),
        );
    }

    ValidationResult::valid(value as u16)
}

/// 이진 문자열이 유효한 SLIP39 인덱스인지 확인
pub fn is_valid_binary(binary: &str) -> bool {
    validate_binary(binary).is_valid
}
