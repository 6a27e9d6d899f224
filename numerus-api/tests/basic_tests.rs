//! Basic tests for numerus-api

use numerus_api::*;

#[test]
fn test_input_text_processing() {
    let input = Input::Text("WBC 12,000".to_string());
    let text = input.read_text().unwrap();
    assert_eq!(text, "WBC 12,000");
}

#[test]
fn test_input_bytes_processing() {
    let bytes = b"CRP 3.5".to_vec();
    let input = Input::Bytes(bytes);
    let text = input.read_text().unwrap();
    assert_eq!(text, "CRP 3.5");
}

#[test]
fn test_input_reader_processing() {
    let reader = std::io::Cursor::new("Hb 141");
    let input = Input::from_reader(reader);
    assert_eq!(input.read_text().unwrap(), "Hb 141");
}

#[test]
fn test_config_builder() {
    let config = Config::builder()
        .kind("unsigned-integer")
        .unwrap()
        .scale_exponent("9")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.kind(), NumberKind::UnsignedInteger);
    assert_eq!(config.scale_exponents(), [9, 12, 9]);
}

#[test]
fn test_extract_text_convenience() {
    let output = extract_text("Na 141 mmol/L, K 4.2 mmol/L").unwrap();

    assert_eq!(output.metadata.kind, "liberal-number");
    assert_eq!(output.metadata.total_bytes, 27);
    let digits: Vec<&str> = output
        .matches
        .iter()
        .map(|m| m.int_digits.as_str())
        .collect();
    assert_eq!(digits, ["141", "4"]);
}

#[test]
fn test_extract_with_named_kind() {
    let output = extract_text_with_kind("-12,000 then +5", "unsigned-integer").unwrap();
    let texts: Vec<&str> = output.matches.iter().map(|m| m.text.as_str()).collect();
    // The negative numeral is boundary-rejected in full; the plus is kept
    assert_eq!(texts, ["+5"]);
}

#[test]
fn test_unknown_kind_name() {
    let err = extract_text_with_kind("1", "decimal").unwrap_err();
    assert!(matches!(err, ApiError::UnknownNumberKind { .. }));
}

#[test]
fn test_find_scales() {
    let extractor = NumberExtractor::new().unwrap();
    let scales = extractor.find_scales("WBC 12 x10^9/L, platelets 250 x10^12/L");
    let exponents: Vec<i64> = scales.iter().map(|s| s.exponent).collect();
    assert_eq!(exponents, [9, 12]);
    assert_eq!(scales[0].text, "x10^9");
    assert_eq!(scales[1].text, "x10^12");
}

#[test]
fn test_extractor_is_reusable_and_deterministic() {
    let extractor = NumberExtractor::with_kind(NumberKind::SignedFloat).unwrap();
    let first = extractor.extract_text("pH 7.35, BE -2.5").unwrap();
    let second = extractor.extract_text("pH 7.35, BE -2.5").unwrap();
    assert_eq!(first.matches, second.matches);
    assert_eq!(first.matches.len(), 2);
    assert_eq!(first.matches[1].sign, -1);
}

#[cfg(feature = "serde")]
#[test]
fn test_match_dto_serialization() {
    let output = extract_text("glucose 5.4 mmol/L").unwrap();
    let json = serde_json::to_string(&output).unwrap();
    let deserialized: Output = serde_json::from_str(&json).unwrap();

    assert_eq!(output.matches, deserialized.matches);
    assert_eq!(
        output.metadata.match_count,
        deserialized.metadata.match_count
    );
}

#[test]
fn test_error_conversions() {
    use std::io;

    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let api_error: ApiError = io_error.into();

    match api_error {
        ApiError::Io(_) => (),
        _ => panic!("Wrong error type"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let extractor = NumberExtractor::new().unwrap();
    let err = extractor
        .extract(Input::from_file("/no/such/numerus/file.txt"))
        .unwrap_err();
    assert!(matches!(err, ApiError::Io(_)));
}
