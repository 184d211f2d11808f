use card_render::{wrap_text, FontSet, Weight};

fn measure(text: &str) -> f32 {
    FontSet::builtin().measure(Weight::Bold, text, 10.0)
}

#[test]
fn test_wrap_respects_width() {
    // 6 px per char in the block face at 10 px
    let lines = wrap_text(measure, "la luna llena amplifica todo", 60.0);
    assert_eq!(lines, vec!["la luna", "llena", "amplifica", "todo"]);
    for line in &lines {
        assert!(measure(line) <= 60.0 || !line.contains(' '));
    }
}

#[test]
fn test_wrap_breaks_at_newline_even_when_short() {
    let lines = wrap_text(measure, "uno\ndos", 10_000.0);
    assert_eq!(lines, vec!["uno", "dos"]);
}

#[test]
fn test_wrap_keeps_overlong_word() {
    let lines = wrap_text(measure, "transformación", 20.0);
    assert_eq!(lines, vec!["transformación"]);
}

#[test]
fn test_blank_paragraph_is_blank_line() {
    let lines = wrap_text(measure, "a\n   \nb", 100.0);
    assert_eq!(lines, vec!["a", "", "b"]);
}
