use chrono::NaiveDate;
use serde_json::{json, Value};

use prompt2json::{
    analyze, convert_prompt_to_json, ConvertError, FixedClock, LanguageHint, Metadata,
    PromptConverter, PromptRecord, VERSION,
};

fn fixed_clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_micro_opt(15, 9, 26, 535_897)
            .unwrap(),
    )
}

#[test]
fn test_record_shape_without_metadata() {
    let converter = PromptConverter::new(false);
    let record = converter.convert("Create a Python script with Flask", &Metadata::new());

    insta::assert_yaml_snapshot!(record, @r###"
    prompt: Create a Python script with Flask
    length: 33
    word_count: 6
    analysis:
      has_questions: false
      has_instructions: true
      sentences: 1
      contains_code: false
      language_hints:
        - python
    "###);
}

#[test]
fn test_record_shape_multiple_hints() {
    let converter = PromptConverter::new(false);
    let record = converter.convert(
        "  Build a REST API in node and store rows in a database\n",
        &Metadata::new(),
    );

    insta::assert_yaml_snapshot!(record, @r###"
    prompt: Build a REST API in node and store rows in a database
    length: 53
    word_count: 12
    analysis:
      has_questions: false
      has_instructions: true
      sentences: 1
      contains_code: false
      language_hints:
        - javascript
        - sql
        - json
    "###);
}

#[test]
fn test_metadata_with_fixed_clock() {
    let converter = PromptConverter::with_clock(true, fixed_clock());
    let mut extra = Metadata::new();
    extra.insert("project_type".to_string(), json!("web_api"));
    extra.insert("difficulty".to_string(), json!("intermediate"));

    let record = converter.convert("Write a REST API in Python using Flask", &extra);
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(
        value["metadata"],
        json!({
            "timestamp": "2025-03-14T15:09:26.535897",
            "version": VERSION,
            "project_type": "web_api",
            "difficulty": "intermediate",
        })
    );
    assert_eq!(
        record.analysis.language_hints,
        vec![LanguageHint::Python, LanguageHint::Json]
    );
}

#[test]
fn test_version_override() {
    let converter = PromptConverter::with_clock(true, fixed_clock());
    let mut extra = Metadata::new();
    extra.insert("version".to_string(), json!("custom"));

    let record = converter.convert("x", &extra);
    assert_eq!(record.metadata_value("version"), Some(&json!("custom")));
}

#[test]
fn test_metadata_disabled_everywhere() {
    let converter = PromptConverter::with_clock(false, fixed_clock());
    let mut extra = Metadata::new();
    extra.insert("category".to_string(), json!("development"));

    let single = converter.convert("Test prompt", &extra);
    let batch = converter.convert_batch(&["a", "b"], &extra);
    let json = converter.to_json_string("Test prompt", Some(2), &extra).unwrap();

    assert!(single.metadata.is_none());
    assert!(batch.iter().all(|record| record.metadata.is_none()));
    assert!(!json.contains("\"metadata\""));
}

#[test]
fn test_code_detection_scenarios() {
    assert!(analyze("Here is code: ```python\nprint('hello')\n```").contains_code);
    assert!(analyze("use `x` here").contains_code);
    assert!(!analyze("use `` here").contains_code);
}

#[test]
fn test_question_and_instruction_scenario() {
    let converter: PromptConverter = PromptConverter::default();
    let record = converter.convert("How do I create a function?", &Metadata::new());

    assert!(record.analysis.has_questions);
    assert!(record.analysis.has_instructions);
}

#[test]
fn test_length_and_word_count_match_trimmed_prompt() {
    let converter = PromptConverter::new(false);
    let samples = [
        "",
        "   ",
        "one",
        "  two words  ",
        "tabs\tand\nnewlines\r\nmixed",
        "naïve café ünïcode",
        "\u{3000}ideographic space\u{3000}",
    ];

    for sample in samples {
        let record = converter.convert(sample, &Metadata::new());
        let trimmed = sample.trim();

        assert_eq!(record.prompt, trimmed);
        assert_eq!(record.length, trimmed.chars().count(), "length of {:?}", sample);
        assert_eq!(record.word_count, trimmed.split_whitespace().count(), "words of {:?}", sample);
        assert_eq!(record.word_count == 0, trimmed.is_empty());
    }
}

#[test]
fn test_information_separators_count_as_whitespace() {
    let converter = PromptConverter::new(false);
    let record = converter.convert("\u{1c}split\u{1f}here.\u{1d}", &Metadata::new());

    assert_eq!(record.prompt, "split\u{1f}here.");
    assert_eq!(record.length, 11);
    assert_eq!(record.word_count, 2);
    assert_eq!(record.analysis.sentences, 2);
}

#[test]
fn test_invalid_input() {
    let converter: PromptConverter = PromptConverter::default();

    let err = converter.convert_value(&Value::Null, &Metadata::new()).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidInput { found: "null" }));

    let err = converter.convert_value(&json!(123), &Metadata::new()).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidInput { found: "number" }));
}

#[test]
fn test_value_batch_aborts_on_first_invalid() {
    let converter = PromptConverter::new(false);
    let prompts = vec![json!("first"), json!({"not": "a prompt"}), json!("third")];

    let result = converter.convert_value_batch(&prompts, &Metadata::new());
    assert!(matches!(result, Err(ConvertError::InvalidInput { found: "object" })));
}

#[test]
fn test_batch_order_preservation() {
    let converter: PromptConverter = PromptConverter::default();
    let prompts = ["First prompt", "Second prompt", "Third prompt"];
    let records = converter.convert_batch(&prompts, &Metadata::new());

    assert_eq!(records.len(), 3);
    for (record, prompt) in records.iter().zip(prompts) {
        assert_eq!(record.prompt, prompt);
    }
}

#[test]
fn test_json_round_trip() {
    let converter = PromptConverter::with_clock(true, fixed_clock());
    let samples = ["Test prompt", "  padded  ", "", "multi\nline ✓ prompt?"];

    for sample in samples {
        for indent in [None, Some(0), Some(2), Some(4)] {
            let json = converter.to_json_string(sample, indent, &Metadata::new()).unwrap();
            let parsed: PromptRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.prompt, sample.trim());
            assert_eq!(parsed, converter.convert(sample, &Metadata::new()));
        }
    }
}

#[test]
fn test_convenience_function() {
    let record = convert_prompt_to_json("Test prompt", true, &Metadata::new());
    assert_eq!(record.prompt, "Test prompt");
    assert!(record.metadata.is_some());

    let record = convert_prompt_to_json("Test", false, &Metadata::new());
    assert!(record.metadata.is_none());
}
