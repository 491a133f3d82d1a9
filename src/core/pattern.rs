//! SLIP39 단어 인덱스 ↔ 12점 패턴 코덱
//!
//! 인덱스(1~1024)를 12비트 이진 문자열, 점 패턴(●/○),
//! 4점씩 3컬럼의 물리 배치로 변환하고 그 역변환을 제공합니다.

use std::fmt;
use std::str::FromStr;

use super::bits::{
    bit_to_dot, bits_to_value, dot_to_bit, is_valid_index, value_to_bits, BIT_COUNT,
    COLUMN_COUNT, COLUMN_WEIGHTS, MAX_INDEX, MIN_INDEX,
};

/// 패턴 생성 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// 인덱스가 1~1024 범위 밖 (점 문자열을 해석한 값 포함)
    IndexOutOfRange(u32),
    /// 공백 제거 후 점 문자열 길이가 12가 아님
    InvalidLength(usize),
    /// ●/○ 이외의 문자
    InvalidCharacter(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::IndexOutOfRange(index) => write!(
                f,
                "Index must be between {} and {}, got {}",
                MIN_INDEX, MAX_INDEX, index
            ),
            PatternError::InvalidLength(len) => write!(
                f,
                "Dot pattern must be exactly {} dots, got {}",
                BIT_COUNT, len
            ),
            PatternError::InvalidCharacter(c) => {
                write!(f, "Invalid dot character: '{}' (expected ● or ○)", c)
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// SLIP39 단어 하나의 점 패턴
///
/// 유효한 인덱스로만 생성되며, 이진/점/컬럼 표현은 모두 인덱스에서 파생됩니다.
///
/// ```
/// use slip39_dots::PatternCodec;
///
/// let pattern = PatternCodec::from_index(15).unwrap();
/// assert_eq!(pattern.to_binary(), "000000001111");
/// assert_eq!(pattern.to_dots(), "○○○○○○○○●●●●");
/// assert_eq!(pattern.to_display_string(), "○○○○ ○○○○ ●●●●");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternCodec {
    index: u16,
}

impl PatternCodec {
    /// 인덱스로 패턴 생성 (범위 밖이면 IndexOutOfRange)
    pub fn from_index(index: u32) -> Result<Self, PatternError> {
        if !is_valid_index(index) {
            return Err(PatternError::IndexOutOfRange(index));
        }
        Ok(Self {
            index: index as u16,
        })
    }

    /// 점 문자열로 패턴 생성
    ///
    /// 묶음 사이의 공백은 무시합니다. 길이/문자 검사를 통과해도
    /// 해석한 값이 범위 밖이면 `from_index`와 같은 IndexOutOfRange를 반환합니다.
    pub fn from_dots(dots: &str) -> Result<Self, PatternError> {
        let cleaned: Vec<char> = dots.chars().filter(|c| !c.is_whitespace()).collect();

        if cleaned.len() != BIT_COUNT {
            return Err(PatternError::InvalidLength(cleaned.len()));
        }

        let mut bits = [0u8; BIT_COUNT];
        for (bit, &c) in bits.iter_mut().zip(&cleaned) {
            *bit = dot_to_bit(c).ok_or(PatternError::InvalidCharacter(c))?;
        }

        Self::from_index(bits_to_value(bits))
    }

    /// 단어 인덱스 (1~1024)
    pub fn index(&self) -> u16 {
        self.index
    }

    /// 12자리 0 패딩 이진 문자열
    pub fn to_binary(&self) -> String {
        format!("{:0width$b}", self.index, width = BIT_COUNT)
    }

    /// 비트 배열 (위치 0 = 최상위 비트)
    pub fn to_bit_array(&self) -> [u8; BIT_COUNT] {
        value_to_bits(self.index)
    }

    /// 점 패턴 (● = 1, ○ = 0)
    pub fn to_dots(&self) -> String {
        self.to_bit_array().iter().map(|&bit| bit_to_dot(bit)).collect()
    }

    /// 4점씩 3컬럼으로 분할한 점 패턴
    ///
    /// 컬럼별 가중치: [2048,1024,512,256] | [128,64,32,16] | [8,4,2,1]
    pub fn to_columns(&self) -> [String; COLUMN_COUNT] {
        let mut columns: [String; COLUMN_COUNT] = Default::default();
        for (column, weights) in columns.iter_mut().zip(COLUMN_WEIGHTS.iter()) {
            *column = weights
                .iter()
                .map(|&weight| bit_to_dot(u8::from(self.index & weight != 0)))
                .collect();
        }
        columns
    }

    /// 표시용 문자열 (컬럼을 공백 하나로 연결)
    pub fn to_display_string(&self) -> String {
        self.to_columns().join(" ")
    }
}

impl fmt::Display for PatternCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl FromStr for PatternCodec {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dots(s)
    }
}

impl TryFrom<u32> for PatternCodec {
    type Error = PatternError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl From<PatternCodec> for u16 {
    fn from(pattern: PatternCodec) -> Self {
        pattern.index
    }
}
