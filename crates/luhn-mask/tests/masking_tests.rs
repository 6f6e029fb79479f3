//! Integration tests for card number masking.

use luhn_mask::{
    LuhnMaskingConverter, MessageConverter, build_mask, has_enough_digits_opt, luhn_check, mask,
    mask_opt, mask_string, strip_separators,
};

/// Test card numbers published by payment processors, all Luhn-valid.
const TEST_CARDS: &[(&str, &str)] = &[
    ("American Express", "378282246310005"),
    ("American Express", "371449635398431"),
    ("American Express Corporate", "378734493671000"),
    ("Australian BankCard", "5610591081018250"),
    ("Diners Club", "30569309025904"),
    ("Diners Club", "38520000023237"),
    ("Discover", "6011111111111117"),
    ("Discover", "6011000990139424"),
    ("JCB", "3530111333300000"),
    ("JCB", "3566002020360505"),
    ("MasterCard", "5555555555554444"),
    ("MasterCard", "5105105105105100"),
    ("Visa", "4111111111111111"),
    ("Visa", "4012888888881881"),
    ("Visa", "4222222222222"),
    ("Dankort (PBS)", "5019717010103742"),
    ("Switch/Solo (Paymentech)", "6331101999990016"),
];

/// Same numbers with the check digit bumped, so none pass Luhn.
const NON_CARDS: &[(&str, &str)] = &[
    ("American Express", "378282246310006"),
    ("American Express", "371449635398432"),
    ("American Express Corporate", "378734493671001"),
    ("Australian BankCard", "5610591081018251"),
    ("Diners Club", "30569309025905"),
    ("Diners Club", "38520000023238"),
    ("Discover", "6011111111111118"),
    ("Discover", "6011000990139425"),
    ("JCB", "3530111333300001"),
    ("JCB", "3566002020360506"),
    ("MasterCard", "5555555555554445"),
    ("MasterCard", "5105105105105102"),
    ("Visa", "4111111111111112"),
    ("Visa", "4012888888881882"),
    ("Visa", "4222222222223"),
    ("Dankort (PBS)", "5019717010103743"),
    ("Switch/Solo (Paymentech)", "6331101999990017"),
];

fn concat(pairs: &[(&str, &str)]) -> String {
    pairs.iter().map(|(label, number)| format!("{label}{number}")).collect()
}

#[test]
fn absent_message() {
    assert!(!has_enough_digits_opt(None));
    assert_eq!(mask_opt(None), None);
}

#[test]
fn strip_separators_spaces_and_dashes() {
    assert_eq!(strip_separators("5137 0049 8639 6403"), "5137004986396403");
    assert_eq!(strip_separators("5137-0049-8639-6403"), "5137004986396403");
}

#[test]
fn mask_string_sixteen_digits() {
    assert_eq!(mask_string("5137004986396403", "6403"), "***MASKED***");
}

#[test]
fn luhn_good_and_bad() {
    assert!(luhn_check("5137004986396403"));
    assert!(!luhn_check("5137004986396404"));
}

#[test]
fn only_possible_card_numbers_are_masked() {
    let converter = LuhnMaskingConverter::new();
    assert_eq!(
        converter.convert("try 5137 0049 8639 6404 and 5137 0049 8639 6403"),
        "try 5137 0049 8639 6404 and ****MASKED*****6403"
    );
}

#[test]
fn card_number_at_start_non_card_at_end() {
    let converter = LuhnMaskingConverter::new();
    assert_eq!(
        converter.convert("5137 0049 8639 6403 and 5137 0049 8639 6404"),
        "****MASKED*****6403 and 5137 0049 8639 6404"
    );
}

#[test]
fn multiple_numbers_masked_independently() {
    let msg = "try 5137 0049 8639 6403 multiple 5137 0049 8639 6404 possible \
               4111-1111-1111 1111 card 4111111111111112 numbers";
    assert_eq!(
        mask(msg),
        "try ****MASKED*****6403 multiple 5137 0049 8639 6404 possible \
         ****MASKED*****1111 card 4111111111111112 numbers"
    );
}

#[test]
fn thirteen_digit_visa() {
    assert_eq!(mask("4222222222222"), "*MASKED**2222");
}

#[test]
fn lots_of_card_numbers() {
    let msg = concat(TEST_CARDS);
    let expected: String = TEST_CARDS
        .iter()
        .map(|(label, number)| {
            let (head, tail) = number.split_at(number.len() - 4);
            format!("{label}{}{tail}", build_mask(head.len()))
        })
        .collect();

    let masked = mask(&msg);
    assert_eq!(masked, expected);
    assert!(masked.contains("American Express**MASKED***0005"));
    assert!(masked.contains("Diners Club**MASKED**5904"));
    assert!(masked.contains("Visa*MASKED**2222"));
    assert!(masked.contains("Switch/Solo (Paymentech)***MASKED***0016"));
}

#[test]
fn lots_of_non_card_numbers() {
    let msg = concat(NON_CARDS);
    assert_eq!(mask(&msg), msg);
}

#[test]
fn card_numbers_with_prose_between() {
    let msg = "Visa 4222222222222 Note : Even though this number has a different \
               character count than the other test numbers, it is the correct and \
               functional number.";
    let masked = mask(msg);
    assert!(masked.starts_with("Visa *MASKED**2222 Note"));
    assert!(masked.ends_with("functional number."));
}

#[test]
fn short_numbers_untouched() {
    for msg in [
        "",
        "String with no numbers",
        "String with 1234 5678 not enough numbers",
        "Not 1234 enough 5678 consecutive 9012 numbers 3456",
        "American Express3782822463Visa4222222222",
    ] {
        assert_eq!(mask(msg), msg);
    }
}

#[test]
fn other_separators_break_runs() {
    // Dots are not separators, so neither half reaches 13 digits.
    let msg = "4111.1111.1111.1111";
    assert_eq!(mask(msg), msg);
    let msg = "4111111111\n111111";
    assert_eq!(mask(msg), msg);
}

#[test]
fn separators_only_between_runs_do_not_join_text() {
    assert_eq!(
        mask("id: 4111 1111 1111 1111, ok"),
        "id: ****MASKED*****1111, ok"
    );
}
