use unicode_linebreak::{linebreaks, BreakOpportunity};

/// One visual line, borrowed from the laid out text
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<'t> {
    pub text: &'t str,
    pub width: f32,
}

/// Greedy line breaking over the Unicode break opportunities of `text`.
///
/// Mandatory breaks (newlines) always end a line. Allowed breaks are taken once
/// the line up to the next one would be wider than `max_width`, with `None` only
/// the mandatory ones are. Whitespace left at the end of a line is dropped.
///
/// A segment without any break opportunity that is wider than `max_width` gets a
/// line of its own and overflows.
pub fn wrap<'t, F>(text: &'t str, max_width: Option<f32>, measure: F) -> Vec<Line<'t>>
where
    F: Fn(&str) -> f32,
{
    let line = |start: usize, end: usize| {
        let text = text[start..end].trim_end();
        Line {
            text,
            width: measure(text),
        }
    };

    let mut lines = Vec::new();
    let mut start = 0;
    let mut last_fit = None;

    for (idx, opportunity) in linebreaks(text) {
        if let (Some(max_width), Some(fit)) = (max_width, last_fit) {
            if measure(text[start..idx].trim_end()) > max_width {
                lines.push(line(start, fit));
                start = fit;
            }
        }

        match opportunity {
            BreakOpportunity::Mandatory => {
                lines.push(line(start, idx));
                start = idx;
                last_fit = None;
            }
            BreakOpportunity::Allowed => last_fit = Some(idx),
        }
    }

    if lines.is_empty() {
        lines.push(line(0, 0));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // every char is one unit wide
    fn chars(s: &str) -> f32 {
        s.chars().count() as f32
    }

    fn texts<'t>(lines: &[Line<'t>]) -> Vec<&'t str> {
        lines.iter().map(|l| l.text).collect()
    }

    #[test]
    fn fits_one_line() {
        let lines = wrap("Hello world", Some(11.0), chars);
        assert_eq!(texts(&lines), vec!["Hello world"]);
        assert_eq!(lines[0].width, 11.0);
    }

    #[test]
    fn breaks_between_words() {
        let lines = wrap(
            "Hello my dear world, how are you? Hope that fine.",
            Some(12.0),
            chars,
        );
        assert_eq!(
            texts(&lines),
            vec!["Hello my", "dear world,", "how are you?", "Hope that", "fine."]
        );
        assert!(lines.iter().all(|l| l.width <= 12.0));
    }

    #[test]
    fn breaks_after_hyphens() {
        let lines = wrap("state-of-the-art", Some(6.0), chars);
        assert_eq!(texts(&lines), vec!["state-", "of-", "the-", "art"]);
    }

    #[test]
    fn breaks_between_ideographs() {
        let text = "日本語のテキストを表示する";
        let lines = wrap(text, Some(4.0), chars);

        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.width <= 4.0), "{:?}", texts(&lines));
        assert_eq!(texts(&lines).concat(), text);
    }

    #[test]
    fn long_word_overflows() {
        let lines = wrap("a incomprehensibilities b", Some(5.0), chars);
        assert_eq!(texts(&lines), vec!["a", "incomprehensibilities", "b"]);
        assert_eq!(lines[1].width, 21.0);
    }

    #[test]
    fn paragraphs() {
        let lines = wrap("one two\r\n\nthree", Some(100.0), chars);
        assert_eq!(texts(&lines), vec!["one two", "", "three"]);
    }

    #[test]
    fn no_wrap() {
        let lines = wrap("one two three \nfour", None, chars);
        assert_eq!(texts(&lines), vec!["one two three", "four"]);
        assert_eq!(lines[0].width, 13.0);
    }

    #[test]
    fn empty() {
        let lines = wrap("", Some(10.0), chars);
        assert_eq!(texts(&lines), vec![""]);
        assert_eq!(lines[0].width, 0.0);
    }
}
