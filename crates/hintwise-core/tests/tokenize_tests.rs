//! Tokenizer snapshots

use hintwise_core::tokenize;

#[test]
fn test_tokenize_camel_case_snapshot() {
    insta::assert_yaml_snapshot!("camel_case", tokenize("getUserNameById"));
}

#[test]
fn test_tokenize_mixed_separators_snapshot() {
    insta::assert_yaml_snapshot!("mixed_separators", tokenize("MAX_retry count2Limit"));
}
