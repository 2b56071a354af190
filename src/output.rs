//! Renders detection results as delimiter separated lines.
//!
//! Column layouts:
//! - whole input: `<code><delim><score>`
//! - per line: `<code><delim><score><delim><line>`
//! - spans: `<start><delim><end><delim><code><delim><fragment>`
//!
//! `unknown` replaces the code and leaves the score column empty.

use crate::config::iso_code;
use crate::detection::{Detection, Span};
use crate::input::{InputUnit, UnitKind};
use lingua::Language;
use std::io::{self, Write};

pub const UNKNOWN: &str = "unknown";

/// Rendering settings shared by every unit of a run
#[derive(Debug, Clone, PartialEq)]
pub struct OutputOptions {
    pub delimiter: String,
    /// Minimum score a language needs to be printed
    pub threshold: Option<f64>,
    /// Print the whole distribution instead of the top language
    pub all: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            delimiter: "\t".to_string(),
            threshold: None,
            all: false,
        }
    }
}

impl OutputOptions {
    fn passes(&self, score: f64) -> bool {
        self.threshold.map_or(true, |threshold| score >= threshold)
    }
}

/// `1` for a certain result, otherwise a fixed 16 digit fraction
pub fn format_score(score: f64) -> String {
    if score == 1.0 {
        "1".to_string()
    } else {
        format!("{score:.16}")
    }
}

/// Write every output line for one classified unit
pub fn write_detection<W: Write>(
    out: &mut W,
    unit: &InputUnit,
    detection: &Detection,
    options: &OutputOptions,
) -> io::Result<()> {
    match (detection, unit.kind) {
        (Detection::TooShort, UnitKind::Whole) => write_unknown(out, options),
        (Detection::TooShort, UnitKind::Line) => write_line_unknown(out, &unit.text, options),
        (Detection::Confidences(values), UnitKind::Whole) => {
            write_confidences(out, values, options)
        }
        (Detection::Confidences(values), UnitKind::Line) => {
            write_line_confidences(out, &unit.text, values, options)
        }
        (Detection::Spans(spans), _) => write_spans(out, &unit.text, spans, &options.delimiter),
    }
}

/// Whole-input confidence lines.
///
/// Languages below the threshold are skipped; `unknown` is written once if
/// nothing was printed.
pub fn write_confidences<W: Write>(
    out: &mut W,
    values: &[(Language, f64)],
    options: &OutputOptions,
) -> io::Result<()> {
    let delim = &options.delimiter;
    let mut found = false;
    for &(language, score) in values {
        if options.passes(score) {
            found = true;
            writeln!(out, "{}{delim}{}", iso_code(language), format_score(score))?;
        }
        if !options.all {
            break;
        }
    }
    if !found {
        write_unknown(out, options)?;
    }
    Ok(())
}

/// Per-line confidence lines, each ending with the original line.
///
/// Unlike whole input, every language below the threshold gets its own
/// `unknown` line, so with `all` one line of input can yield several of them.
pub fn write_line_confidences<W: Write>(
    out: &mut W,
    line: &str,
    values: &[(Language, f64)],
    options: &OutputOptions,
) -> io::Result<()> {
    let delim = &options.delimiter;
    if values.is_empty() {
        return write_line_unknown(out, line, options);
    }
    for &(language, score) in values {
        if options.passes(score) {
            writeln!(
                out,
                "{}{delim}{}{delim}{line}",
                iso_code(language),
                format_score(score)
            )?;
        } else {
            write_line_unknown(out, line, options)?;
        }
        if !options.all {
            break;
        }
    }
    Ok(())
}

/// Span lines with byte offsets. Thresholds and `all` do not apply.
pub fn write_spans<W: Write>(
    out: &mut W,
    text: &str,
    spans: &[Span],
    delimiter: &str,
) -> io::Result<()> {
    for span in spans {
        writeln!(
            out,
            "{}{delimiter}{}{delimiter}{}{delimiter}{}",
            span.start,
            span.end,
            iso_code(span.language),
            span.fragment(text)
        )?;
    }
    Ok(())
}

pub fn write_unknown<W: Write>(out: &mut W, options: &OutputOptions) -> io::Result<()> {
    writeln!(out, "{UNKNOWN}{}", options.delimiter)
}

pub fn write_line_unknown<W: Write>(
    out: &mut W,
    line: &str,
    options: &OutputOptions,
) -> io::Result<()> {
    let delim = &options.delimiter;
    writeln!(out, "{UNKNOWN}{delim}{delim}{line}")
}
