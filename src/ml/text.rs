use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("invalid URL pattern"));

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").expect("invalid tag pattern"));

static NON_ALPHA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("invalid non-alpha pattern"));

static WHITESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("invalid whitespace pattern"));

/// Normalize raw article text into the canonical form used for both training
/// and inference.
///
/// Applies, in order: lowercasing, URL removal (`http(s)://...` and
/// `www....`), HTML tag removal, replacement of every non-alphabetic
/// character with a space, whitespace collapsing and trimming. Must stay
/// bit-identical between the training pipeline and the serving layer.
pub fn normalize(text: &str) -> String {
    let text = text.to_lowercase();
    let text = URL_PATTERN.replace_all(&text, "");
    let text = TAG_PATTERN.replace_all(&text, "");
    let text = NON_ALPHA_PATTERN.replace_all(&text, " ");
    let text = WHITESPACE_PATTERN.replace_all(&text, " ");
    text.trim().to_string()
}

/// Tokenize normalized text into feature terms.
///
/// Single-character fragments carry no signal and are skipped, matching the
/// word definition used when the vocabulary was fitted.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace().filter(|w| w.len() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("BREAKING News: Markets Crash!"),
            "breaking news markets crash"
        );
    }

    #[test]
    fn test_removes_urls() {
        let out = normalize("read more at https://example.com/story?id=1 now");
        assert_eq!(out, "read more at now");

        let out = normalize("source www.example.com/page today");
        assert_eq!(out, "source today");
    }

    #[test]
    fn test_no_url_tokens_survive() {
        let out = normalize("see http://a.b/c and https://d.e and www.f.g end");
        assert!(!out.contains("http"));
        assert!(!out.contains("www."));
    }

    #[test]
    fn test_removes_html_tags() {
        assert_eq!(
            normalize("<p>hello <b>world</b></p>"),
            "hello world"
        );
    }

    #[test]
    fn test_tag_removal_is_non_greedy() {
        assert_eq!(normalize("<a>keep</a> this"), "keep this");
    }

    #[test]
    fn test_digits_and_symbols_become_spaces() {
        assert_eq!(normalize("covid-19 cases up 300%"), "covid cases up");
    }

    #[test]
    fn test_numeric_only_content_normalizes_to_empty() {
        assert_eq!(normalize("123 456 !!!"), "");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  a \t b \n\n c  "), "a b c");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Shocking <b>REPORT</b>: visit https://fake.news/now!!!",
            "plain already normalized text",
            "",
            "Mixed 123 content www.site.org here",
        ];
        for s in samples {
            let once = normalize(s);
            let twice = normalize(&once);
            assert_eq!(once, twice, "normalize must be idempotent for {s:?}");
        }
    }

    #[test]
    fn test_tokenize_skips_single_chars() {
        let normalized = normalize("a big story x y about z markets");
        let tokens: Vec<&str> = tokenize(&normalized).collect();
        assert_eq!(tokens, vec!["big", "story", "about", "markets"]);
    }
}
