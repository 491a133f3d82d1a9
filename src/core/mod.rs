//! 단어 인덱스 ↔ 점 패턴 코덱

pub mod bits;
pub mod pattern;

pub use pattern::{PatternCodec, PatternError};
