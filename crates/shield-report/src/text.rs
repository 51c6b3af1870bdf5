//! Text preparation for the built-in PDF fonts: ASCII sanitizing and
//! character-count word wrapping.

/// Replace characters the built-in Helvetica encoding cannot show.
///
/// Typographic quotes, dashes, bullets and ellipses get ASCII equivalents;
/// other non-ASCII characters become `?`. Control characters are dropped,
/// except newlines.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push('\n'),
            '\t' => out.push(' '),
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2022}' | '\u{25CF}' | '\u{25AA}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' => out.push(' '),
            '\u{20AC}' => out.push_str("EUR"),
            '\u{00A3}' => out.push_str("GBP"),
            c if c.is_ascii_control() => {}
            c if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// Greedy word wrap to at most `max_chars` characters per line.
///
/// Explicit newlines start a new line; words longer than a full line are
/// split. Blank input yields no lines.
#[must_use]
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word = word;
            while word.chars().count() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split_at = word
                    .char_indices()
                    .nth(max_chars)
                    .map_or(word.len(), |(i, _)| i);
                lines.push(word[..split_at].to_string());
                word = &word[split_at..];
            }
            if word.is_empty() {
                continue;
            }

            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > max_chars {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
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
    use pretty_assertions::assert_eq;

    #[test]
    fn sanitize_maps_typography_to_ascii() {
        assert_eq!(
            sanitize("\u{201C}Act now\u{201D} \u{2014} it\u{2019}s \u{2022} urgent\u{2026}"),
            "\"Act now\" - it's - urgent..."
        );
        assert_eq!(sanitize("Pay \u{20AC}500\tnow\r\n"), "Pay EUR500 now\n");
        assert_eq!(sanitize("日本"), "??");
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(
            lines,
            vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
        assert!(lines.iter().all(|l| l.len() <= 10));
    }

    #[test]
    fn wrap_splits_long_words() {
        let lines = wrap("see https://example.com/very/long/path ok", 12);
        assert_eq!(
            lines,
            vec!["see", "https://exam", "ple.com/very", "/long/path", "ok"]
        );
    }

    #[test]
    fn wrap_keeps_paragraphs() {
        assert_eq!(wrap("one\ntwo three", 80), vec!["one", "two three"]);
    }

    #[test]
    fn wrap_blank_is_empty() {
        assert!(wrap("   \n  ", 20).is_empty());
    }
}
