use crate::error::Result;
use std::io::BufRead;
use tracing::debug;

/// Where a unit of text came from, which decides its output shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Joined positional arguments, or all of standard input
    Whole,
    /// One line of standard input in per-line mode
    Line,
}

/// One piece of text classified independently of every other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputUnit {
    pub text: String,
    pub kind: UnitKind,
}

impl InputUnit {
    pub fn whole(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: UnitKind::Whole,
        }
    }

    pub fn line(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: UnitKind::Line,
        }
    }
}

/// Single-pass sequence of input units.
///
/// Lines are pulled from the reader on demand, so unbounded input is never
/// held in memory. Bytes that are not valid UTF-8 are replaced with U+FFFD
/// and the line is still classified; only an I/O failure ends the sequence,
/// after the error is yielded.
pub enum InputUnits<R> {
    Single(Option<InputUnit>),
    Lines {
        reader: R,
        buffer: Vec<u8>,
        failed: bool,
    },
}

impl<R: BufRead> Iterator for InputUnits<R> {
    type Item = Result<InputUnit>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            InputUnits::Single(unit) => unit.take().map(Ok),
            InputUnits::Lines {
                reader,
                buffer,
                failed,
            } => {
                if *failed {
                    return None;
                }
                buffer.clear();
                match reader.read_until(b'\n', buffer) {
                    Ok(0) => None,
                    Ok(_) => Some(Ok(InputUnit::line(decode_line(buffer)))),
                    Err(e) => {
                        *failed = true;
                        Some(Err(e.into()))
                    }
                }
            }
        }
    }
}

/// Strip one `\n` or `\r\n` terminator and decode, replacing invalid UTF-8
fn decode_line(bytes: &[u8]) -> String {
    let line = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

/// Decide the input units for a run.
///
/// Positional text wins over standard input and is always one unit; per-line
/// mode only applies to standard input. Without per-line mode the whole
/// stream is read here, so a read error surfaces before any detection.
/// Invalid UTF-8 is replaced, never an error.
pub fn select_input<R: BufRead>(
    positional: &[String],
    per_line: bool,
    mut stdin: R,
) -> Result<InputUnits<R>> {
    if !positional.is_empty() {
        debug!(arguments = positional.len(), "Classifying positional text");
        return Ok(InputUnits::Single(Some(InputUnit::whole(positional.join(" ")))));
    }

    if per_line {
        debug!("Classifying standard input line by line");
        return Ok(InputUnits::Lines {
            reader: stdin,
            buffer: Vec::new(),
            failed: false,
        });
    }

    let mut bytes = Vec::new();
    stdin.read_to_end(&mut bytes)?;
    debug!(bytes = bytes.len(), "Read standard input");
    let text = String::from_utf8_lossy(&bytes).into_owned();
    Ok(InputUnits::Single(Some(InputUnit::whole(text))))
}
