//! SLIP39 단어 목록 로드 및 검증
//!
//! `"1"`~`"1024"` 키를 단어에 매핑한 JSON 파일을 로드합니다.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::bits::{is_valid_index, MAX_INDEX};

/// 단어 목록 로드/검증 에러
#[derive(Debug)]
pub enum WordlistError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 빈 단어 목록
    Empty,
    /// 10진수가 아닌 키
    InvalidKey(String),
    /// 1~1024 범위 밖 인덱스
    IndexOutOfRange(u32),
    /// 같은 인덱스가 두 번 등장
    DuplicateIndex(u16),
    /// 빈 단어
    BlankWord(u16),
    /// 같은 단어가 두 번 등장 (대소문자 무시)
    DuplicateWord(String),
    /// 단어 수가 1024가 아님
    Incomplete(usize),
}

impl fmt::Display for WordlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordlistError::IoError(e) => write!(f, "Failed to read wordlist: {}", e),
            WordlistError::ParseError(s) => write!(f, "Failed to parse wordlist JSON: {}", s),
            WordlistError::Empty => write!(f, "Wordlist must not be empty"),
            WordlistError::InvalidKey(key) => {
                write!(f, "Wordlist key must be a decimal index, got '{}'", key)
            }
            WordlistError::IndexOutOfRange(index) => {
                write!(f, "Wordlist index {} is out of range (must be 1-1024)", index)
            }
            WordlistError::DuplicateIndex(index) => {
                write!(f, "Wordlist index {} appears more than once", index)
            }
            WordlistError::BlankWord(index) => {
                write!(f, "Wordlist entry {} is blank", index)
            }
            WordlistError::DuplicateWord(word) => {
                write!(f, "Wordlist word '{}' appears more than once", word)
            }
            WordlistError::Incomplete(count) => write!(
                f,
                "Wordlist must contain exactly {} words, got {}",
                MAX_INDEX, count
            ),
        }
    }
}

impl std::error::Error for WordlistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WordlistError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WordlistError {
    fn from(e: std::io::Error) -> Self {
        WordlistError::IoError(e)
    }
}

/// 인덱스 → 단어 매핑
///
/// 생성 후에는 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: BTreeMap<u16, String>,
}

impl Wordlist {
    /// (인덱스, 단어) 목록에서 생성
    ///
    /// 1024개를 요구하지 않습니다. 빈 목록, 범위 밖 인덱스,
    /// 중복 인덱스, 빈 단어, 중복 단어(대소문자 무시)는 거부합니다.
    pub fn from_entries<I, W>(entries: I) -> Result<Self, WordlistError>
    where
        I: IntoIterator<Item = (u32, W)>,
        W: Into<String>,
    {
        let mut words = BTreeMap::new();
        let mut seen = HashSet::new();

        for (index, word) in entries {
            if !is_valid_index(index) {
                return Err(WordlistError::IndexOutOfRange(index));
            }
            let index = index as u16;

            let word: String = word.into();
            let word = word.trim().to_string();
            if word.is_empty() {
                return Err(WordlistError::BlankWord(index));
            }
            if !seen.insert(word.to_lowercase()) {
                return Err(WordlistError::DuplicateWord(word));
            }
            if words.insert(index, word).is_some() {
                return Err(WordlistError::DuplicateIndex(index));
            }
        }

        if words.is_empty() {
            return Err(WordlistError::Empty);
        }

        Ok(Self { words })
    }

    /// JSON 파일에서 단어 목록 로드
    ///
    /// # 파일 형식
    /// ```json
    /// { "1": "academic", "2": "acid", "...": "...", "1024": "zero" }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordlistError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let value: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| WordlistError::ParseError(e.to_string()))?;

        let wordlist = Self::from_json_value(&value)?;
        log::debug!("단어 목록 로드: {} ({}개)", path.display(), wordlist.len());
        Ok(wordlist)
    }

    /// JSON 문자열에서 단어 목록 로드
    pub fn from_json(json_str: &str) -> Result<Self, WordlistError> {
        let value: serde_json::Value = serde_json::from_str(json_str)
            .map_err(|e| WordlistError::ParseError(e.to_string()))?;

        Self::from_json_value(&value)
    }

    /// serde_json::Value에서 단어 목록 생성 (정확히 1024개 필요)
    fn from_json_value(value: &serde_json::Value) -> Result<Self, WordlistError> {
        let obj = value
            .as_object()
            .ok_or_else(|| WordlistError::ParseError("expected a JSON object".into()))?;

        let mut entries = Vec::with_capacity(obj.len());
        for (key, val) in obj {
            // "+1", "001" 같은 비표준 표기는 거부
            let index: u32 = key
                .parse()
                .ok()
                .filter(|index: &u32| index.to_string() == *key)
                .ok_or_else(|| WordlistError::InvalidKey(key.clone()))?;
            let word = val.as_str().ok_or_else(|| {
                WordlistError::ParseError(format!("entry '{}' is not a string", key))
            })?;
            entries.push((index, word));
        }

        let wordlist = Self::from_entries(entries)?;
        if !wordlist.is_complete() {
            return Err(WordlistError::Incomplete(wordlist.len()));
        }
        Ok(wordlist)
    }

    /// 단어 수
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// 비어 있는지 확인 (생성 검사 때문에 항상 false)
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// 1024개 모두 있는지 확인
    pub fn is_complete(&self) -> bool {
        self.words.len() == MAX_INDEX as usize
    }

    /// 인덱스의 단어
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(&index).map(String::as_str)
    }

    /// 인덱스 순서로 (인덱스, 단어) 순회
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> + '_ {
        self.words.iter().map(|(&index, word)| (index, word.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// 1024개짜리 합성 단어 목록 JSON
    fn full_wordlist_json() -> String {
        let map: serde_json::Map<String, serde_json::Value> = (1..=1024u32)
            .map(|i| (i.to_string(), serde_json::Value::from(format!("word{}", i))))
            .collect();
        serde_json::Value::Object(map).to_string()
    }

    #[test]
    fn test_from_entries() {
        let wordlist =
            Wordlist::from_entries([(1, "academic"), (2, "acid"), (15, "adapt")]).unwrap();
        assert_eq!(wordlist.len(), 3);
        assert!(!wordlist.is_complete());
        assert_eq!(wordlist.word(1), Some("academic"));
        assert_eq!(wordlist.word(15), Some("adapt"));
        assert_eq!(wordlist.word(3), None);

        let order: Vec<u16> = wordlist.iter().map(|(i, _)| i).collect();
        assert_eq!(order, vec![1, 2, 15]);
    }

    #[test]
    fn test_from_entries_errors() {
        let empty: [(u32, &str); 0] = [];
        assert!(matches!(
            Wordlist::from_entries(empty),
            Err(WordlistError::Empty)
        ));
        assert!(matches!(
            Wordlist::from_entries([(0, "zero")]),
            Err(WordlistError::IndexOutOfRange(0))
        ));
        assert!(matches!(
            Wordlist::from_entries([(1025, "over")]),
            Err(WordlistError::IndexOutOfRange(1025))
        ));
        assert!(matches!(
            Wordlist::from_entries([(1, "acid"), (1, "adapt")]),
            Err(WordlistError::DuplicateIndex(1))
        ));
        assert!(matches!(
            Wordlist::from_entries([(1, "  ")]),
            Err(WordlistError::BlankWord(1))
        ));
        // 대소문자만 다른 단어도 중복
        assert!(matches!(
            Wordlist::from_entries([(1, "acid"), (2, "ACID")]),
            Err(WordlistError::DuplicateWord(w)) if w == "ACID"
        ));
    }

    #[test]
    fn test_from_json_full() {
        let wordlist = Wordlist::from_json(&full_wordlist_json()).unwrap();
        assert_eq!(wordlist.len(), 1024);
        assert!(wordlist.is_complete());
        assert_eq!(wordlist.word(1024), Some("word1024"));
    }

    #[test]
    fn test_from_json_incomplete() {
        let result = Wordlist::from_json(r#"{ "1": "academic", "2": "acid" }"#);
        assert!(matches!(result, Err(WordlistError::Incomplete(2))));
    }

    #[test]
    fn test_from_json_format_errors() {
        assert!(matches!(
            Wordlist::from_json("not json"),
            Err(WordlistError::ParseError(_))
        ));
        assert!(matches!(
            Wordlist::from_json(r#"["academic"]"#),
            Err(WordlistError::ParseError(_))
        ));
        assert!(matches!(
            Wordlist::from_json(r#"{ "one": "academic" }"#),
            Err(WordlistError::InvalidKey(k)) if k == "one"
        ));
        assert!(matches!(
            Wordlist::from_json(r#"{ "1": 42 }"#),
            Err(WordlistError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_non_canonical_keys() {
        for key in ["+1", "001", " 1", "1.0", "0x1"] {
            let mut value: serde_json::Value = serde_json::from_str(&full_wordlist_json()).unwrap();
            let obj = value.as_object_mut().unwrap();
            let word = obj.remove("1").unwrap();
            obj.insert(key.to_string(), word);

            let result = Wordlist::from_json(&value.to_string());
            assert!(
                matches!(result, Err(WordlistError::InvalidKey(ref k)) if k == key),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(full_wordlist_json().as_bytes()).unwrap();

        let wordlist = Wordlist::load(file.path()).unwrap();
        assert_eq!(wordlist.word(754), Some("word754"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Wordlist::load("/nonexistent/wordlist.json");
        assert!(matches!(result, Err(WordlistError::IoError(_))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            WordlistError::Incomplete(2).to_string(),
            "Wordlist must contain exactly 1024 words, got 2"
        );
        assert_eq!(
            WordlistError::DuplicateWord("acid".into()).to_string(),
            "Wordlist word 'acid' appears more than once"
        );
    }
}
