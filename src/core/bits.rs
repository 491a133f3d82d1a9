//! SLIP39 점 패턴 비트 배치 상수/유틸리티

/// 패턴 한 줄의 비트(점) 수
pub const BIT_COUNT: usize = 12;

/// 컬럼 수 (4점씩 3묶음)
pub const COLUMN_COUNT: usize = 3;
/// 컬럼 하나의 점 수
pub const COLUMN_WIDTH: usize = 4;

/// 최소 단어 인덱스
pub const MIN_INDEX: u16 = 1;
/// 최대 단어 인덱스 (SLIP39 단어 수)
pub const MAX_INDEX: u16 = 1024;

/// 찍힌 점 ('1')
pub const FILLED_DOT: char = '●';
/// 빈 점 ('0')
pub const EMPTY_DOT: char = '○';

/// 컬럼별 비트 가중치 (왼쪽 → 오른쪽, MSB 먼저)
/// 첫 자리(2048)는 유효한 인덱스에서 항상 빈 점
#[rustfmt::skip]
pub const COLUMN_WEIGHTS: [[u16; COLUMN_WIDTH]; COLUMN_COUNT] = [
    [2048, 1024, 512, 256],
    [128,  64,   32,  16],
    [8,    4,    2,   1],
];

/// 인덱스가 SLIP39 범위(1~1024)인지 확인
pub fn is_valid_index(value: u32) -> bool {
    (MIN_INDEX as u32..=MAX_INDEX as u32).contains(&value)
}

/// 점 문자 → 비트
/// ● = 1, ○ = 0, 그 외 None
pub fn dot_to_bit(c: char) -> Option<u8> {
    match c {
        FILLED_DOT => Some(1),
        EMPTY_DOT => Some(0),
        _ => None,
    }
}

/// 비트 → 점 문자
pub fn bit_to_dot(bit: u8) -> char {
    if bit == 0 {
        EMPTY_DOT
    } else {
        FILLED_DOT
    }
}

/// 이진 문자 → 비트 ('0'/'1' 외에는 None)
pub fn binary_char_to_bit(c: char) -> Option<u8> {
    match c {
        '0' => Some(0),
        '1' => Some(1),
        _ => None,
    }
}

/// 비트열(MSB 먼저)을 정수로 조합
pub fn bits_to_value(bits: impl IntoIterator<Item = u8>) -> u32 {
    bits.into_iter()
        .fold(0u32, |acc, bit| (acc << 1) | u32::from(bit))
}

/// 정수를 12비트 배열로 분해 (위치 0 = 최상위 비트)
pub fn value_to_bits(value: u16) -> [u8; BIT_COUNT] {
    let mut bits = [0u8; BIT_COUNT];
    for (i, bit) in bits.iter_mut().enumerate() {
        let shift = BIT_COUNT - 1 - i;
        *bit = ((value >> shift) & 1) as u8;
    }
    bits
}
