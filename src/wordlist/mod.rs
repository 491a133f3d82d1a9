//! SLIP39 단어 목록과 단어 ↔ 점 패턴 변환
//!
//! # 사용 예시
//!
//! ```no_run
//! use slip39_dots::wordlist::{WordConverter, Wordlist};
//!
//! let wordlist = Wordlist::load("wordlist.json").unwrap();
//! let converter = WordConverter::new(wordlist);
//!
//! let result = converter.convert_word_to_dots("academic").unwrap();
//! println!("{} {}", result.index, result.display_dots());
//!
//! let batch = converter.convert_with_validation("academic acid acne");
//! for error in &batch.errors {
//!     eprintln!("{}: {}", error.position, error.error);
//! }
//! ```

mod converter;
mod model;
mod result;

// 공개 인터페이스
pub use converter::{ConvertError, MnemonicInput, WordConverter};
pub use model::{Wordlist, WordlistError};
pub use result::{BatchConversionResult, BatchRow, ConversionResult, PositionedError};
