pub mod config;
pub mod core;
pub mod validation;
pub mod wordlist;

pub use core::{PatternCodec, PatternError};
pub use validation::{is_valid_binary, validate_binary, RowEntry, ValidationResult};
pub use wordlist::{
    BatchConversionResult, BatchRow, ConversionResult, ConvertError, MnemonicInput, PositionedError,
    WordConverter, Wordlist, WordlistError,
};
