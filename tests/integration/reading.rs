//! Integration tests for lexer + list construction
//! Text goes in, a list with the same values comes out

use intlist::{ListError, Token, parse_list, parse_list_with_filename};

#[test]
fn test_scenario_a_from_text() {
    let list = parse_list("10, 20, 30").unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list.sum(), 60);
}

#[test]
fn test_scenario_b_from_multiline_file_text() {
    let text = "# two values\n42\n9999\n";
    let list = parse_list_with_filename(text, "b.txt").unwrap();

    assert_eq!(list.iter().collect::<Vec<_>>(), vec![42, 9999]);
    assert_eq!(list.sum(), 10041);
}

#[test]
fn test_reader_errors_carry_filename() {
    let err = parse_list_with_filename("1\n2\n99999999999", "big.txt").unwrap_err();

    assert!(err.to_string().starts_with("intlist:big.txt:3:1"));
    assert!(err.span().is_some());
}

#[test]
fn test_reader_and_lexer_agree_on_value_count() {
    let text = "5 -6, 7\n8";
    let integers = intlist::Lexer::new(text)
        .tokenize()
        .into_iter()
        .filter(|t| t.token == Token::Integer)
        .count();

    assert_eq!(parse_list(text).unwrap().len(), integers);
}

#[test]
fn test_checked_sum_after_reading() {
    let list = parse_list("2147483647, 1").unwrap();

    assert_eq!(list.checked_sum(), Err(ListError::SumOverflow { steps: 2 }));
    assert_eq!(list.sum(), i32::MIN);
}
