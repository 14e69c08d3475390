//! Text helpers shared by the fetcher and the engine.
//!

use bytes::Bytes;
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Pulls the `charset` parameter out of a `Content-Type` header value.
pub fn charset_of(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Decode a response body into a [`String`]. Never fails.
///
/// A known `charset` wins. Without one the body is read as UTF-8 when it
/// is valid UTF-8 and as windows-1252 (a superset of Latin-1) otherwise.
/// Malformed sequences become U+FFFD.
pub fn string_from_bytes(buf: Bytes, charset: Option<&str>) -> String {
    if let Some(encoding) = charset.and_then(|label| Encoding::for_label(label.as_bytes())) {
        return encoding.decode(&buf).0.into_owned();
    }
    match UTF_8.decode_without_bom_handling_and_without_replacement(&buf) {
        Some(text) => text.into_owned(),
        None => WINDOWS_1252.decode(&buf).0.into_owned(),
    }
}

/// Strips every ASCII punctuation character from `text`.
///
/// The set is fixed: ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``. Non-ASCII
/// characters are left alone.
pub fn remove_punctuation(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Splits punctuation-free text into whitespace-delimited tokens,
/// preserving document order and case.
pub fn tokenize(text: &str) -> Vec<String> {
    remove_punctuation(text)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_keeps_case() {
        assert_eq!(
            tokenize("The cat sat. The cat ran!"),
            vec!["The", "cat", "sat", "The", "cat", "ran"]
        );
    }

    #[test]
    fn never_yields_empty_tokens() {
        let tokens = tokenize("  -- ... \t\n well,  hello ---  world!? \r\n");
        assert_eq!(tokens, vec!["well", "hello", "world"]);
        assert!(tokens.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn removes_the_whole_ascii_set() {
        let punct = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
        assert_eq!(remove_punctuation(punct), "");
        assert_eq!(tokenize(&format!("a{punct}b")), vec!["ab"]);
    }

    #[test]
    fn joins_words_split_by_apostrophes() {
        assert_eq!(tokenize("don't stop"), vec!["dont", "stop"]);
        assert_eq!(tokenize("naïve “quotes”"), vec!["naïve", "“quotes”"]);
    }

    #[test]
    fn empty_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn finds_charset_parameter() {
        assert_eq!(charset_of("text/plain; charset=ISO-8859-1"), Some("ISO-8859-1"));
        assert_eq!(charset_of("text/plain;Charset=\"utf-8\""), Some("utf-8"));
        assert_eq!(charset_of("text/plain"), None);
        assert_eq!(charset_of("charset=utf-8"), None);
    }

    #[test]
    fn latin1_without_charset_falls_back() {
        let body = Bytes::from_static(b"caf\xe9 ok");
        assert_eq!(string_from_bytes(body, None), "café ok");
        assert_eq!(string_from_bytes(Bytes::from("café"), None), "café");
    }

    #[test]
    fn declared_charset_is_used() {
        let body = Bytes::from_static(b"caf\xe9");
        assert_eq!(string_from_bytes(body.clone(), Some("iso-8859-1")), "café");
        // utf-8 declared but the bytes disagree: replaced, not rejected
        assert_eq!(string_from_bytes(body.clone(), Some("utf-8")), "caf\u{fffd}");
        assert_eq!(string_from_bytes(body, Some("no-such-charset")), "café");
    }
}
