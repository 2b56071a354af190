// Integration test utilities and common code
#![allow(dead_code)]

use lingua::Language;
use lingua_cli::{Confidences, LanguageDetection, Span};
use std::cell::Cell;
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Detector stand-in that returns canned results and counts every call
pub struct StubDetector {
    pub confidences: Confidences,
    pub spans: Vec<Span>,
    pub calls: Cell<usize>,
}

impl StubDetector {
    pub fn new(confidences: Confidences) -> Self {
        Self {
            confidences,
            spans: Vec::new(),
            calls: Cell::new(0),
        }
    }

    pub fn with_spans(spans: Vec<Span>) -> Self {
        Self {
            confidences: Vec::new(),
            spans,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl LanguageDetection for StubDetector {
    fn confidence_values(&self, _text: &str) -> Confidences {
        self.calls.set(self.calls.get() + 1);
        self.confidences.clone()
    }

    fn detect_spans(&self, _text: &str) -> Vec<Span> {
        self.calls.set(self.calls.get() + 1);
        self.spans.clone()
    }
}

/// English-leaning distribution used by most pipeline tests
pub fn english_distribution() -> Confidences {
    vec![
        (Language::English, 0.7),
        (Language::French, 0.2),
        (Language::Spanish, 0.1),
    ]
}

/// Run the built binary with `args`, feeding `stdin` to it
pub fn run_cli(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lingua-cli"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start lingua-cli");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for lingua-cli")
}

pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "lingua-cli failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

/// Parse a score column, accepting the bare `1` form
pub fn parse_score(column: &str) -> f64 {
    column.parse().expect("score column should be a number")
}
