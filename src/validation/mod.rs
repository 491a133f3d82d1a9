//! 손으로 편집한 패턴 검증 모듈

mod row;
pub mod validator;

pub use row::RowEntry;
pub use validator::{is_valid_binary, validate_binary, ValidationResult};
