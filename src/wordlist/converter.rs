//! SLIP39 단어 → 점 패턴 변환기

use std::collections::HashMap;
use std::fmt;

use crate::core::{PatternCodec, PatternError};

use super::model::{Wordlist, WordlistError};
use super::result::{BatchConversionResult, ConversionResult, PositionedError};

/// 단어 변환 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// 단어 목록에 없는 단어
    WordNotFound(String),
    /// 점 패턴 해석 실패
    Pattern(PatternError),
    /// 유효한 인덱스지만 단어 목록에 해당 단어가 없음
    UnassignedIndex(u16),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::WordNotFound(word) => {
                write!(f, "Word not found in wordlist: {}", word)
            }
            ConvertError::Pattern(e) => write!(f, "{}", e),
            ConvertError::UnassignedIndex(index) => {
                write!(f, "No word assigned to index {}", index)
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Pattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PatternError> for ConvertError {
    fn from(e: PatternError) -> Self {
        ConvertError::Pattern(e)
    }
}

/// 일괄 변환 입력
///
/// 공백으로 구분된 문자열 또는 이미 나눈 단어 목록
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MnemonicInput<'a> {
    Text(&'a str),
    Words(Vec<&'a str>),
}

impl<'a> MnemonicInput<'a> {
    /// 입력 순서대로 단어 목록
    fn into_words(self) -> Vec<&'a str> {
        match self {
            MnemonicInput::Text(text) => text.split_whitespace().collect(),
            MnemonicInput::Words(words) => words,
        }
    }
}

impl<'a> From<&'a str> for MnemonicInput<'a> {
    fn from(text: &'a str) -> Self {
        MnemonicInput::Text(text)
    }
}

impl<'a> From<&'a String> for MnemonicInput<'a> {
    fn from(text: &'a String) -> Self {
        MnemonicInput::Text(text.as_str())
    }
}

impl<'a> From<&'a [&'a str]> for MnemonicInput<'a> {
    fn from(words: &'a [&'a str]) -> Self {
        MnemonicInput::Words(words.to_vec())
    }
}

impl<'a> From<&'a [String]> for MnemonicInput<'a> {
    fn from(words: &'a [String]) -> Self {
        MnemonicInput::Words(words.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for MnemonicInput<'a> {
    fn from(words: &'a Vec<String>) -> Self {
        MnemonicInput::from(words.as_slice())
    }
}

/// SLIP39 단어 변환기
///
/// 생성 시 단어 → 인덱스 역매핑을 한 번 만들고 이후 변경하지 않습니다.
/// 조회만 하므로 여러 스레드에서 그대로 공유할 수 있습니다.
#[derive(Debug, Clone)]
pub struct WordConverter {
    wordlist: Wordlist,
    /// 소문자 단어 → 인덱스
    reverse: HashMap<String, u16>,
}

impl WordConverter {
    /// 검증된 단어 목록으로 변환기 생성
    pub fn new(wordlist: Wordlist) -> Self {
        let reverse: HashMap<String, u16> = wordlist
            .iter()
            .map(|(index, word)| (word.to_lowercase(), index))
            .collect();
        log::debug!("역매핑 생성: {}개 단어", reverse.len());

        Self { wordlist, reverse }
    }

    /// (인덱스, 단어) 목록으로 변환기 생성
    ///
    /// 비어 있거나 형식이 잘못된 목록은 거부합니다.
    pub fn from_entries<I, W>(entries: I) -> Result<Self, WordlistError>
    where
        I: IntoIterator<Item = (u32, W)>,
        W: Into<String>,
    {
        Wordlist::from_entries(entries).map(Self::new)
    }

    /// 단어 목록
    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// 소문자 단어 → 인덱스 역매핑 (읽기 전용)
    pub fn reverse_wordlist(&self) -> &HashMap<String, u16> {
        &self.reverse
    }

    /// 인덱스의 단어
    pub fn word_for_index(&self, index: u16) -> Option<&str> {
        self.wordlist.word(index)
    }

    /// 단어를 점 패턴으로 변환 (대소문자 무시)
    ///
    /// 결과의 `word`는 입력한 대소문자를 그대로 유지합니다.
    pub fn convert_word_to_dots(&self, word: &str) -> Result<ConversionResult, ConvertError> {
        let index = self
            .reverse
            .get(&word.to_lowercase())
            .copied()
            .ok_or_else(|| ConvertError::WordNotFound(word.to_string()))?;

        let pattern = PatternCodec::from_index(u32::from(index))?;
        Ok(ConversionResult::new(word, &pattern))
    }

    /// 점 패턴을 단어로 역변환
    ///
    /// 결과의 `word`는 단어 목록의 단어입니다.
    pub fn convert_dots_to_word(&self, dots: &str) -> Result<ConversionResult, ConvertError> {
        let pattern = PatternCodec::from_dots(dots)?;
        let word = self
            .word_for_index(pattern.index())
            .ok_or(ConvertError::UnassignedIndex(pattern.index()))?;
        Ok(ConversionResult::new(word, &pattern))
    }

    /// 니모닉 전체를 변환하고 실패한 단어를 위치와 함께 모음
    ///
    /// 실패해도 중단하지 않고 다음 단어를 계속 변환합니다.
    ///
    /// # Examples
    /// ```
    /// use slip39_dots::WordConverter;
    ///
    /// let converter = WordConverter::from_entries([(1, "academic"), (2, "acid")]).unwrap();
    /// let result = converter.convert_with_validation("academic nope ACID");
    ///
    /// assert!(!result.is_valid);
    /// assert_eq!(result.word_count, 3);
    /// assert_eq!(result.words, vec!["academic", "ACID"]);
    /// assert_eq!(result.errors[0].position, 2);
    /// ```
    pub fn convert_with_validation<'a>(
        &self,
        mnemonic: impl Into<MnemonicInput<'a>>,
    ) -> BatchConversionResult {
        let words = mnemonic.into().into_words();
        let mut result = BatchConversionResult {
            word_count: words.len(),
            ..Default::default()
        };

        for (i, word) in words.into_iter().enumerate() {
            let position = i + 1;
            match self.convert_word_to_dots(word) {
                Ok(conversion) => {
                    result.words.push(word.to_string());
                    result.patterns.push(conversion);
                }
                Err(e) => {
                    log::debug!("{}번째 단어 변환 실패: {}", position, e);
                    result.errors.push(PositionedError {
                        position,
                        word: word.to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        result.is_valid = result.errors.is_empty();
        result
    }
}
