use super::*;

#[test]
fn direction_values_are_signed() {
    assert_eq!(Direction::Left.value(), -1);
    assert_eq!(Direction::Forward.value(), 0);
    assert_eq!(Direction::Right.value(), 1);
    assert_eq!(Direction::Left.to_string(), "-1");
}

#[test]
fn duration_appends_and_deletes() {
    let mut field = DurationField::new("1", 45);
    assert!(field.apply(TextEdit::Insert('.')));
    assert!(field.apply(TextEdit::Insert('5')));
    assert_eq!(field.value(), "1.5");

    assert!(field.apply(TextEdit::Backspace));
    assert_eq!(field.value(), "1.");
}

#[test]
fn duration_accepts_non_numeric_text() {
    let mut field = DurationField::new("", 45);
    for ch in "slow".chars() {
        field.apply(TextEdit::Insert(ch));
    }
    assert_eq!(field.value(), "slow");
}

#[test]
fn duration_stops_at_max_len() {
    let mut field = DurationField::new("12", 3);
    assert!(field.apply(TextEdit::Insert('3')));
    assert!(!field.apply(TextEdit::Insert('4')));
    assert_eq!(field.value(), "123");
}

#[test]
fn duration_max_len_counts_characters() {
    let mut field = DurationField::new("", 2);
    assert!(field.apply(TextEdit::Insert('é')));
    assert!(field.apply(TextEdit::Insert('ü')));
    assert!(!field.apply(TextEdit::Insert('x')));
    assert_eq!(field.value(), "éü");
}

#[test]
fn backspace_on_empty_is_a_no_op() {
    let mut field = DurationField::new("", 45);
    assert!(!field.apply(TextEdit::Backspace));
    assert_eq!(field.value(), "");
}

#[test]
fn control_characters_are_ignored() {
    let mut field = DurationField::new("1", 45);
    assert!(!field.apply(TextEdit::Insert('\r')));
    assert!(!field.apply(TextEdit::Insert('\t')));
    assert_eq!(field.value(), "1");
}

#[test]
fn initial_text_is_truncated_to_max_len() {
    let field = DurationField::new("123456", 4);
    assert_eq!(field.value(), "1234");
    assert_eq!(field.max_len(), 4);
}
