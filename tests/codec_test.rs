//! Property and example tests for the public codec API
use base_converter::codec::{
    ALPHABET, Base, CodecError, MAX_UNARY_LEN, base_groups_to_text, convert, decode,
    decode_groups, encode, join_groups, split_groups, text_to_base_groups,
};
use proptest::prelude::*;

fn symbol(value: u32) -> char {
    char::from(ALPHABET[value as usize])
}

proptest! {
    #[test]
    fn prop_number_round_trip(v in 0u64..=1_000_000, b in 2u32..=64) {
        let digits = encode(v, b).unwrap();
        prop_assert_eq!(decode(&digits, b).unwrap(), v);
    }

    #[test]
    fn prop_full_range_round_trip(v in any::<u64>(), b in 2u32..=64) {
        prop_assert_eq!(decode(&encode(v, b).unwrap(), b).unwrap(), v);
    }

    #[test]
    fn prop_valid_symbols_never_fail(
        b in 2u32..=64,
        values in proptest::collection::vec(0u32..64, 0..8),
    ) {
        // At most 8 digits in base <= 64 fits in 48 bits
        let digits: String = values.iter().map(|v| symbol(v % b)).collect();
        prop_assert!(decode(&digits, b).is_ok());
    }

    #[test]
    fn prop_out_of_range_symbol_is_invalid_digit(
        b in 2u32..64,
        offset in 0u32..64,
        prefix in proptest::collection::vec(0u32..2, 0..4),
    ) {
        let bad_value = b + offset % (64 - b);
        let mut digits: String = prefix.iter().map(|v| symbol(*v)).collect();
        let position = digits.len();
        digits.push(symbol(bad_value));

        let err = decode(&digits, b).unwrap_err();
        prop_assert_eq!(
            err,
            CodecError::InvalidDigit { digit: symbol(bad_value), position, base: b }
        );
    }

    #[test]
    fn prop_printable_ascii_text_round_trip(s in "[ -~]{0,32}", b in 2u32..=64) {
        let groups = text_to_base_groups(&s, b).unwrap();
        prop_assert_eq!(base_groups_to_text(&groups, b).unwrap(), s.clone());

        // Also survives joining and re-splitting on whitespace
        let joined = join_groups(&groups);
        prop_assert_eq!(base_groups_to_text(&split_groups(&joined), b).unwrap(), s);
    }

    #[test]
    fn prop_groups_share_one_width(s in "[\\x01-\\xff]{1,16}", b in 2u32..=64) {
        let groups = text_to_base_groups(&s, b).unwrap();
        let width = groups[0].len();
        prop_assert!(groups.iter().all(|g| g.len() == width));
        prop_assert!(u64::from(b).pow(width as u32) >= 256);
    }

    #[test]
    fn prop_convert_matches_decode_then_encode(v in any::<u64>(), from in 2u32..=64, to in 2u32..=64) {
        let digits = encode(v, from).unwrap();
        prop_assert_eq!(convert(&digits, from, to).unwrap(), encode(v, to).unwrap());
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(encode(10, 2).unwrap(), "1010");
    assert_eq!(encode(255, 16).unwrap(), "FF");
    assert_eq!(decode("FF", 16).unwrap(), 255);
    assert_eq!(decode("1010", 2).unwrap(), 10);
}

#[test]
fn test_zero_encodes_to_single_digit() {
    for b in 2..=64 {
        assert_eq!(encode(0, b).unwrap(), "0", "base {}", b);
    }
}

#[test]
fn test_unary_convention() {
    assert_eq!(encode(0, 1).unwrap(), "");
    assert_eq!(decode("", 1).unwrap(), 0);
    for v in 1..=50 {
        assert_eq!(encode(v, 1).unwrap(), "1".repeat(v as usize));
    }
    // Any symbol counts as one unit
    assert_eq!(decode("1x1", 1).unwrap(), 3);
}

#[test]
fn test_unary_output_is_capped() {
    assert_eq!(encode(MAX_UNARY_LEN, 1).unwrap().len() as u64, MAX_UNARY_LEN);
    for value in [MAX_UNARY_LEN + 1, 10_000_000_000, u64::MAX] {
        assert_eq!(encode(value, 1).unwrap_err(), CodecError::UnaryTooLong(value));
    }
    assert_eq!(
        convert("FFFFFFFFFFFFFFFF", 16, 1).unwrap_err(),
        CodecError::UnaryTooLong(u64::MAX)
    );
    assert_eq!(convert("FF", 16, 1).unwrap(), "1".repeat(255));
}

#[test]
fn test_invalid_base_is_rejected() {
    assert_eq!(encode(5, 65).unwrap_err(), CodecError::InvalidBase(65));
    assert_eq!(encode(5, 0).unwrap_err(), CodecError::InvalidBase(0));
    assert_eq!(decode("1", 0).unwrap_err(), CodecError::InvalidBase(0));
    assert_eq!(text_to_base_groups("a", 99).unwrap_err(), CodecError::InvalidBase(99));
    assert!(Base::new(64).is_ok());
}

#[test]
fn test_hello_in_binary() {
    let groups = text_to_base_groups("Hello", 2).unwrap();
    assert_eq!(join_groups(&groups), "01001000 01100101 01101100 01101100 01101111");
}

#[test]
fn test_base_groups_abort_on_first_bad_group() {
    let err = base_groups_to_text(&["48", "100", "Z"], 16).unwrap_err();
    assert_eq!(err, CodecError::InvalidCodePoint(256));
}

#[test]
fn test_decode_groups_keeps_per_group_results() {
    let results = decode_groups(&["48", "100", "69"], 16);
    assert_eq!(results[0], Ok('H'));
    assert_eq!(results[1], Err(CodecError::InvalidCodePoint(256)));
    assert_eq!(results[2], Ok('i'));
}

#[test]
fn test_wide_characters_are_out_of_scope() {
    assert_eq!(text_to_base_groups("€", 16).unwrap_err(), CodecError::InvalidCodePoint(0x20AC));
    assert_eq!(text_to_base_groups("é", 16).unwrap(), vec!["E9"]);
}

#[test]
fn test_base_names_parse() {
    assert_eq!("hexadecimal".parse::<Base>().unwrap(), Base::HEXADECIMAL);
    assert_eq!("36".parse::<Base>().unwrap().radix(), 36);
    assert!("base99".parse::<Base>().is_err());
}
