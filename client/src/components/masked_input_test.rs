use super::*;

#[test]
fn empty_field_has_no_border_color() {
    assert_eq!(input_class(FieldState::Empty), "w-full px-4 py-2 border rounded-lg");
}

#[test]
fn field_state_appends_border_color() {
    assert_eq!(input_class(FieldState::Partial), "w-full px-4 py-2 border rounded-lg border-yellow-500");
    assert_eq!(input_class(FieldState::Complete), "w-full px-4 py-2 border rounded-lg border-green-500");
    assert_eq!(input_class(mask::mask_expiry("13/25").state), "w-full px-4 py-2 border rounded-lg border-red-500");
}

#[test]
fn jib_counter_reports_digits_out_of_total() {
    let masked = mask::mask_jib("44-0012");
    assert_eq!(digit_counter(masked.digits.len(), mask::JIB.len()), "6/13");
}
