//! Word-cloud tokenization.
//!
//! Splits on single spaces, drops a fixed punctuation set and any whitespace
//! left inside a token, then lowercases. Stripping can leave empty tokens;
//! [`normalize`] keeps them so the output lines up with the input words,
//! [`words`] skips them for counting.

/// Characters removed from every token
pub const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~', '(', ')',
];

/// Normalize every space-separated word of `text`, empty results included
pub fn normalize(text: &str) -> Vec<String> {
    text.split(' ').map(normalize_word).collect()
}

/// Normalized, non-empty words of `text`
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(' ').map(normalize_word).filter(|word| !word.is_empty())
}

pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c) && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_lowercases() {
        assert_eq!(
            normalize("Great, GREAT film!"),
            vec!["great", "great", "film"]
        );
    }

    #[test]
    fn test_normalize_keeps_empty_tokens() {
        assert_eq!(normalize("wow -- ok"), vec!["wow", "", "ok"]);
        assert_eq!(normalize("a  b"), vec!["a", "", "b"]);
        assert_eq!(normalize(""), vec![""]);
    }

    #[test]
    fn test_words_skips_empty_tokens() {
        let collected: Vec<String> = words("wow -- ok  (!)").collect();
        assert_eq!(collected, vec!["wow", "ok"]);
    }

    #[test]
    fn test_full_punctuation_set() {
        assert_eq!(normalize_word(".,/#!$%^&*;:{}=-_`~()"), "");
        assert_eq!(normalize_word("re-watch_worthy"), "rewatchworthy");
    }

    #[test]
    fn test_keeps_characters_outside_the_set() {
        assert_eq!(normalize_word("Don't"), "don't");
        assert_eq!(normalize_word("\"quoted\"?"), "\"quoted\"?");
    }

    #[test]
    fn test_removes_embedded_whitespace() {
        assert_eq!(normalize_word("line\nbreak\ttab"), "linebreaktab");
    }
}
