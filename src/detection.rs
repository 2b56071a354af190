//! Calls into the language detector for one unit of text.
//!
//! The minimum-length gate runs first and short-circuits: text with too few
//! alphabetic characters is classified `unknown` without touching the
//! detector. Past the gate, multi-language mode asks for byte-ranged spans
//! and every other mode asks for the full confidence distribution.

use lingua::{Language, LanguageDetector};
use tracing::debug;

/// Ranked `(language, confidence)` pairs, highest confidence first
pub type Confidences = Vec<(Language, f64)>;

/// A fragment of the input dominated by one language.
/// Offsets are UTF-8 byte positions into the text that was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub language: Language,
}

impl Span {
    /// The slice of `text` this span covers, empty if the offsets do not
    /// fall on character boundaries of `text`
    pub fn fragment<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or_default()
    }
}

/// The two detector operations the pipeline relies on
pub trait LanguageDetection {
    /// Confidence for every configured language, ranked descending
    fn confidence_values(&self, text: &str) -> Confidences;

    /// Non-overlapping language spans in order of appearance
    fn detect_spans(&self, text: &str) -> Vec<Span>;
}

impl LanguageDetection for LanguageDetector {
    fn confidence_values(&self, text: &str) -> Confidences {
        self.compute_language_confidence_values(text)
    }

    fn detect_spans(&self, text: &str) -> Vec<Span> {
        self.detect_multiple_languages_of(text)
            .into_iter()
            .map(|result| Span {
                start: result.start_index(),
                end: result.end_index(),
                language: result.language(),
            })
            .collect()
    }
}

/// Which detector operation a unit is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionMode {
    #[default]
    Single,
    Multi,
}

/// Outcome of classifying one unit
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    /// Failed the minimum-length gate; the detector was not called
    TooShort,
    Confidences(Confidences),
    Spans(Vec<Span>),
}

/// Number of alphabetic characters; whitespace, digits and punctuation don't count
pub fn alphabetic_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

/// Whether `text` holds at least `min_length` alphabetic characters.
/// Stops counting as soon as the minimum is reached.
pub fn long_enough(text: &str, min_length: usize) -> bool {
    min_length == 0
        || text
            .chars()
            .filter(|c| c.is_alphabetic())
            .nth(min_length - 1)
            .is_some()
}

/// Gate `text` on its alphabetic length, then run the detector operation for `mode`
pub fn detect<D: LanguageDetection + ?Sized>(
    detector: &D,
    text: &str,
    mode: DetectionMode,
    min_length: Option<usize>,
) -> Detection {
    if let Some(min_length) = min_length {
        if !long_enough(text, min_length) {
            debug!(
                min_length,
                letters = alphabetic_count(text),
                "Text below minimum alphabetic length"
            );
            return Detection::TooShort;
        }
    }

    match mode {
        DetectionMode::Single => Detection::Confidences(detector.confidence_values(text)),
        DetectionMode::Multi => Detection::Spans(detector.detect_spans(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Fixed {
        calls: Cell<usize>,
    }

    impl LanguageDetection for Fixed {
        fn confidence_values(&self, _text: &str) -> Confidences {
            self.calls.set(self.calls.get() + 1);
            vec![(Language::English, 0.75), (Language::French, 0.25)]
        }

        fn detect_spans(&self, text: &str) -> Vec<Span> {
            self.calls.set(self.calls.get() + 1);
            vec![Span {
                start: 0,
                end: text.len(),
                language: Language::German,
            }]
        }
    }

    fn fixed() -> Fixed {
        Fixed {
            calls: Cell::new(0),
        }
    }

    #[test]
    fn test_alphabetic_count_ignores_non_letters() {
        assert_eq!(alphabetic_count("Hi, 42 times!"), 7);
        assert_eq!(alphabetic_count("   ...123"), 0);
        assert_eq!(alphabetic_count("Grüße aus Köln"), 12);
        assert_eq!(alphabetic_count("日本語"), 3);
    }

    #[test]
    fn test_long_enough_boundaries() {
        assert!(long_enough("", 0));
        assert!(long_enough("abc", 3));
        assert!(!long_enough("a b", 3));
        assert!(!long_enough("12345", 1));
    }

    #[test]
    fn test_gate_skips_detector() {
        let detector = fixed();
        let detection = detect(&detector, "hi!", DetectionMode::Single, Some(3));
        assert_eq!(detection, Detection::TooShort);

        let detection = detect(&detector, "ok", DetectionMode::Multi, Some(5));
        assert_eq!(detection, Detection::TooShort);
        assert_eq!(detector.calls.get(), 0);
    }

    #[test]
    fn test_single_mode_returns_distribution() {
        let detector = fixed();
        let detection = detect(&detector, "hello", DetectionMode::Single, Some(5));
        assert_eq!(
            detection,
            Detection::Confidences(vec![(Language::English, 0.75), (Language::French, 0.25)])
        );
        assert_eq!(detector.calls.get(), 1);
    }

    #[test]
    fn test_multi_mode_returns_spans() {
        let detector = fixed();
        let detection = detect(&detector, "Hallo Welt", DetectionMode::Multi, None);
        assert_eq!(
            detection,
            Detection::Spans(vec![Span {
                start: 0,
                end: 10,
                language: Language::German
            }])
        );
    }

    #[test]
    fn test_span_fragment_is_byte_exact() {
        let text = "Grüße! Hello";
        let span = Span {
            start: 0,
            end: 7,
            language: Language::German,
        };
        assert_eq!(span.fragment(text), "Grüße");

        let inside_char = Span {
            start: 3,
            end: 5,
            language: Language::German,
        };
        assert_eq!(inside_char.fragment(text), "");
    }
}
