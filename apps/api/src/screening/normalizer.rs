//! Normalizer — turns free text into a sequence of lowercase alphabetic tokens.

use crate::screening::stopwords::StopWords;

/// Whole-word contractions that word tokenization splits even without
/// apostrophes. Each half is then subject to stop-word filtering.
const SPLIT_CONTRACTIONS: &[(&str, &str, &str)] = &[
    ("cannot", "can", "not"),
    ("gimme", "gim", "me"),
    ("gonna", "gon", "na"),
    ("gotta", "got", "ta"),
    ("lemme", "lem", "me"),
    ("wanna", "wan", "na"),
];

/// Normalizes raw text into tokens.
///
/// 1. Lowercase.
/// 2. Drop every character that is not `a-z` or whitespace (so `data-engineering`
///    becomes `dataengineering` and `C++` becomes `c`).
/// 3. Split on whitespace, then split the contractions in `SPLIT_CONTRACTIONS`
///    (`cannot` → `can` + `not`).
/// 4. Remove stop words.
///
/// Token order follows the input. Never fails; text with no letters yields an
/// empty vector.
pub fn preprocess_text(text: &str, stop_words: &StopWords) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .flat_map(split_contraction)
        .filter(|token| !stop_words.contains(token))
        .map(str::to_string)
        .collect()
}

fn split_contraction(word: &str) -> Vec<&str> {
    match SPLIT_CONTRACTIONS.iter().find(|(whole, _, _)| *whole == word) {
        Some((_, first, second)) => vec![*first, *second],
        None => vec![word],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        preprocess_text(text, &StopWords::english())
    }

    #[test]
    fn test_basic_tokenization_and_cleanup() {
        let result = tokens("Python, SQL & data-engineering!!!");

        assert!(result.contains(&"python".to_string()));
        assert!(result.contains(&"sql".to_string()));
        assert!(result
            .iter()
            .all(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_hyphenated_words_are_joined() {
        assert_eq!(
            tokens("data-engineering"),
            vec!["dataengineering".to_string()]
        );
    }

    #[test]
    fn test_stop_words_removed_and_order_kept() {
        assert_eq!(
            tokens("The engineer and the Rust compiler"),
            vec!["engineer", "rust", "compiler"]
        );
    }

    #[test]
    fn test_duplicates_are_kept_in_sequence() {
        assert_eq!(tokens("rust Rust RUST"), vec!["rust", "rust", "rust"]);
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(tokens("").is_empty());
        assert!(tokens("   \n\t ").is_empty());
    }

    #[test]
    fn test_no_alphabetic_content_yields_no_tokens() {
        assert!(tokens("123 456 !!! --- $$$ 42%").is_empty());
    }

    #[test]
    fn test_digits_inside_words_are_stripped() {
        assert_eq!(tokens("k8s python3 web2"), vec!["ks", "python", "web"]);
    }

    #[test]
    fn test_non_ascii_letters_are_stripped() {
        assert_eq!(tokens("Café naïve"), vec!["caf", "nave"]);
    }

    #[test]
    fn test_contractions_are_split_before_stop_word_filtering() {
        // "can" and "not" are both stop words
        assert!(tokens("Cannot").is_empty());
        assert_eq!(
            tokens("gonna gotta gimme lemme wanna"),
            vec!["gon", "na", "got", "ta", "gim", "lem", "wan", "na"]
        );
    }

    #[test]
    fn test_contractions_only_split_as_whole_words() {
        assert_eq!(tokens("cannoted wannabe"), vec!["cannoted", "wannabe"]);
        assert_eq!(
            preprocess_text("cannot", &StopWords::default()),
            vec!["can", "not"]
        );
    }

    #[test]
    fn test_custom_stop_words_are_injected() {
        let stop_words = StopWords::from_list(&["python"]);
        assert_eq!(
            preprocess_text("Python and SQL", &stop_words),
            vec!["and", "sql"]
        );
    }

    #[test]
    fn test_empty_stop_word_set_keeps_everything() {
        assert_eq!(
            preprocess_text("the rust book", &StopWords::default()),
            vec!["the", "rust", "book"]
        );
    }
}
