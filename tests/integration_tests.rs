//! 통합 테스트 - 단어 → 점 패턴 변환 및 검증

use slip39_dots::{
    validate_binary, ConvertError, PatternCodec, PatternError, RowEntry, WordConverter, Wordlist,
    WordlistError,
};

/// 1024개짜리 합성 단어 목록 (1번 = academic)
fn full_wordlist() -> Wordlist {
    Wordlist::from_entries((1..=1024u32).map(|i| {
        let word = match i {
            1 => "academic".to_string(),
            2 => "acid".to_string(),
            754 => "pipeline".to_string(),
            _ => format!("word{}", i),
        };
        (i, word)
    }))
    .unwrap()
}

#[test]
fn test_scenario_index_15() {
    let pattern = PatternCodec::from_index(15).unwrap();
    assert_eq!(pattern.to_binary(), "000000001111");
    assert_eq!(pattern.to_dots(), "○○○○○○○○●●●●");
    assert_eq!(pattern.to_columns(), ["○○○○", "○○○○", "●●●●"]);
}

#[test]
fn test_scenario_index_754() {
    let pattern = PatternCodec::from_index(754).unwrap();
    assert_eq!(pattern.to_binary(), "001011110010");
    assert_eq!(pattern.to_dots(), "○○●○●●●●○○●○");
    assert_eq!(pattern.to_columns(), ["○○●○", "●●●●", "○○●○"]);
}

#[test]
fn test_boundary_range_errors() {
    assert_eq!(
        PatternCodec::from_index(0),
        Err(PatternError::IndexOutOfRange(0))
    );
    assert_eq!(
        PatternCodec::from_index(1025),
        Err(PatternError::IndexOutOfRange(1025))
    );
    // 점 문자열 해석 후에도 같은 범위 에러
    assert_eq!(
        PatternCodec::from_dots("○○○○○○○○○○○○"),
        Err(PatternError::IndexOutOfRange(0))
    );
}

#[test]
fn test_exhaustive_round_trip() {
    for index in 1..=1024u32 {
        let pattern = PatternCodec::from_index(index).unwrap();
        let binary = pattern.to_binary();
        let dots = pattern.to_dots();

        assert!(binary.starts_with('0'));
        assert!(dots.starts_with('○'));
        assert_eq!(PatternCodec::from_dots(&dots).unwrap().index() as u32, index);
        assert_eq!(
            PatternCodec::from_dots(&pattern.to_display_string()).unwrap(),
            pattern
        );

        let result = validate_binary(&binary);
        assert!(result.is_valid);
        assert_eq!(result.index, Some(index as u16));
    }
}

#[test]
fn test_word_to_dots_with_full_wordlist() {
    let converter = WordConverter::new(full_wordlist());

    let result = converter.convert_word_to_dots("Pipeline").unwrap();
    assert_eq!(result.word, "Pipeline");
    assert_eq!(result.index, 754);
    assert_eq!(result.columns, ["○○●○", "●●●●", "○○●○"]);

    let upper = converter.convert_word_to_dots("ACADEMIC").unwrap();
    let lower = converter.convert_word_to_dots("academic").unwrap();
    assert_eq!(
        (upper.index, &upper.binary, &upper.dots, &upper.columns),
        (lower.index, &lower.binary, &lower.dots, &lower.columns)
    );
}

#[test]
fn test_batch_reports_position_of_unknown_word() {
    let converter = WordConverter::new(full_wordlist());
    let words = ["academic", "acid", "word3", "bogus", "word5", "pipeline"];

    let result = converter.convert_with_validation(&words[..]);
    assert!(!result.is_valid);
    assert_eq!(result.word_count, words.len());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].position, 4);
    assert_eq!(result.errors[0].word, "bogus");
    assert_eq!(result.patterns.len(), words.len() - 1);

    // 문자열 입력도 같은 결과
    let text_result = converter.convert_with_validation(words.join(" ").as_str());
    assert_eq!(text_result, result);
}

#[test]
fn test_dots_back_to_word() {
    let converter = WordConverter::new(full_wordlist());
    let result = converter.convert_dots_to_word("○○○○ ○○○○ ○○○●").unwrap();
    assert_eq!(result.word, "academic");

    let err = converter.convert_dots_to_word("○○○○ ○○○○ ○○●").unwrap_err();
    assert_eq!(err, ConvertError::Pattern(PatternError::InvalidLength(11)));
}

#[test]
fn test_json_wordlist_round_trip_through_converter() {
    let wordlist = full_wordlist();
    let map: serde_json::Map<String, serde_json::Value> = wordlist
        .iter()
        .map(|(i, w)| (i.to_string(), serde_json::Value::from(w)))
        .collect();
    let json = serde_json::Value::Object(map).to_string();

    let loaded = Wordlist::from_json(&json).unwrap();
    assert_eq!(loaded, wordlist);

    let converter = WordConverter::new(loaded);
    assert_eq!(converter.word_for_index(2), Some("acid"));
    assert_eq!(converter.reverse_wordlist().len(), 1024);
}

#[test]
fn test_partial_json_wordlist_rejected() {
    let result = Wordlist::from_json(r#"{ "1": "academic" }"#);
    assert!(matches!(result, Err(WordlistError::Incomplete(1))));
}

#[test]
fn test_untouched_row_is_not_index_zero() {
    assert_eq!(RowEntry::from_dots("○○○○ ○○○○ ○○○○"), Ok(RowEntry::Empty));
    // 코덱 자체는 0을 범위 에러로 처리
    assert!(PatternCodec::from_dots("○○○○ ○○○○ ○○○○").is_err());
}
