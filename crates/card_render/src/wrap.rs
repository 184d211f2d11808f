/// Greedy word wrap against a pixel width.
///
/// Each `\n` starts a new paragraph. Blank paragraphs become empty lines.
/// Words are joined by single spaces while `measure` stays within
/// `max_width`; a word that is wider than `max_width` on its own still gets
/// a line to itself.
pub fn wrap_text<F>(measure: F, text: &str, max_width: f32) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    for para in text.split('\n') {
        if para.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        for word in para.split(' ') {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if measure(&candidate) > max_width && !current.is_empty() {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_greedy_fill() {
        assert_eq!(
            wrap_text(chars, "uno dos tres cuatro", 8.0),
            vec!["uno dos", "tres", "cuatro"]
        );
    }

    #[test]
    fn test_newline_always_breaks() {
        assert_eq!(wrap_text(chars, "a\nb", 100.0), vec!["a", "b"]);
        assert_eq!(wrap_text(chars, "a\n\nb", 100.0), vec!["a", "", "b"]);
    }

    #[test]
    fn test_long_word_kept() {
        assert_eq!(
            wrap_text(chars, "hi supercalifragilistico yo", 5.0),
            vec!["hi", "supercalifragilistico", "yo"]
        );
    }

    #[test]
    fn test_empty_text_is_one_blank_line() {
        assert_eq!(wrap_text(chars, "", 10.0), vec![String::new()]);
    }
}
