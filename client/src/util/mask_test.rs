use super::*;

// =============================================================
// digits_only
// =============================================================

#[test]
fn digits_only_strips_everything_else() {
    assert_eq!(digits_only("12a-3 4/5"), "12345");
    assert_eq!(digits_only("abc"), "");
}

#[test]
fn digits_only_ignores_non_ascii_digits() {
    assert_eq!(digits_only("١٢3"), "3");
}

// =============================================================
// JIB
// =============================================================

#[test]
fn jib_truncates_to_thirteen_digits() {
    let masked = mask_jib("12345678901234567");
    assert_eq!(masked.value, "1234567890123");
    assert_eq!(masked.state, FieldState::Complete);
}

#[test]
fn jib_partial_and_empty_states() {
    assert_eq!(mask_jib("123").state, FieldState::Partial);
    assert_eq!(mask_jib("").state, FieldState::Empty);
    assert_eq!(mask_jib("x-y").state, FieldState::Empty);
}

// =============================================================
// Racun
// =============================================================

#[test]
fn racun_full_number_groups_three_three_eleven_one() {
    let masked = mask_racun("123456789012345678");
    assert_eq!(masked.digits.len(), 18);
    assert_eq!(masked.value, "123-456-78901234567-8");
    assert_eq!(masked.state, FieldState::Complete);
}

#[test]
fn racun_truncates_extra_digits() {
    let masked = mask_racun("1234567890123456789999");
    assert_eq!(masked.digits.len(), RACUN.len());
    assert_eq!(masked.value, "123-456-78901234567-8");
}

#[test]
fn racun_partial_input_has_no_trailing_separator() {
    assert_eq!(mask_racun("123").value, "123");
    assert_eq!(mask_racun("1234").value, "123-4");
    assert_eq!(mask_racun("1234").state, FieldState::Partial);
}

// =============================================================
// Card number / CVV
// =============================================================

#[test]
fn card_number_groups_in_fours() {
    let masked = mask_card_number("4111111111111111");
    assert_eq!(masked.value, "4111 1111 1111 1111");
    assert_eq!(masked.state, FieldState::Complete);
}

#[test]
fn card_number_reformats_pasted_text() {
    assert_eq!(mask_card_number("4111-1111-11").value, "4111 1111 11");
}

#[test]
fn cvv_keeps_three_digits() {
    assert_eq!(mask_cvv("12a34").value, "123");
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn expiry_inserts_slash_after_month() {
    assert_eq!(mask_expiry("1228").value, "12/28");
    assert_eq!(mask_expiry("122").value, "12/2");
    assert_eq!(mask_expiry("1").value, "1");
}

#[test]
fn expiry_flags_out_of_range_month() {
    assert_eq!(mask_expiry("13").state, FieldState::Invalid);
    assert_eq!(mask_expiry("0027").state, FieldState::Invalid);
    assert_eq!(mask_expiry("0127").state, FieldState::Complete);
    assert_eq!(mask_expiry("12").state, FieldState::Partial);
}

// =============================================================
// Idempotence and truncation
// =============================================================

#[test]
fn every_mask_is_idempotent() {
    let inputs = ["", "1", "12345", "4111111111111111999", "12/34", "abc123-456 789"];
    let masks: [fn(&str) -> Masked; 5] = [mask_jib, mask_racun, mask_card_number, mask_expiry, mask_cvv];
    for mask in masks {
        for input in inputs {
            let once = mask(input);
            let twice = mask(&once.value);
            assert_eq!(once, twice, "input {input:?}");
        }
    }
}

#[test]
fn long_inputs_truncate_to_exact_target() {
    let long = "9".repeat(40);
    for pattern in [JIB, RACUN, CARD_NUMBER, EXPIRY, CVV] {
        assert_eq!(pattern.apply(&long).digits.len(), pattern.len());
    }
}

#[test]
fn border_classes_map_states() {
    assert_eq!(FieldState::Empty.border_class(), "");
    assert_eq!(FieldState::Partial.border_class(), "border-yellow-500");
    assert_eq!(FieldState::Complete.border_class(), "border-green-500");
    assert_eq!(FieldState::Invalid.border_class(), "border-red-500");
}

#[test]
fn card_name_is_uppercased() {
    assert_eq!(uppercase_card_name("marko marković"), "MARKO MARKOVIĆ");
}
