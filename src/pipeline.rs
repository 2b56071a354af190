use crate::detection::{detect, Detection, DetectionMode, LanguageDetection};
use crate::error::Result;
use crate::input::InputUnit;
use crate::output::{write_detection, OutputOptions};
use std::io::Write;
use tracing::{debug, info, warn};

/// Settings for everything after the detector is built
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifyOptions {
    pub mode: DetectionMode,
    /// Minimum number of alphabetic characters a unit needs
    pub min_length: Option<usize>,
    pub output: OutputOptions,
}

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub units: u64,
    pub too_short: u64,
}

/// Read-only context shared by every unit of a run
pub struct Classifier<'a, D: ?Sized> {
    detector: &'a D,
    options: &'a ClassifyOptions,
}

impl<'a, D: LanguageDetection + ?Sized> Classifier<'a, D> {
    pub fn new(detector: &'a D, options: &'a ClassifyOptions) -> Self {
        Self { detector, options }
    }

    /// Classify one unit and write its lines.
    /// Returns whether the unit was too short to reach the detector.
    pub fn classify<W: Write>(&self, unit: &InputUnit, out: &mut W) -> Result<bool> {
        let detection = detect(
            self.detector,
            &unit.text,
            self.options.mode,
            self.options.min_length,
        );
        write_detection(out, unit, &detection, &self.options.output)?;
        Ok(matches!(detection, Detection::TooShort))
    }

    /// Classify units in order until the input ends.
    ///
    /// Output is flushed before a read error is returned, so every unit that
    /// was classified before the failure stays written.
    pub fn run<I, W>(&self, units: I, out: &mut W) -> Result<RunStats>
    where
        I: IntoIterator<Item = Result<InputUnit>>,
        W: Write,
    {
        let mut stats = RunStats::default();
        for unit in units {
            let unit = match unit {
                Ok(unit) => unit,
                Err(e) => {
                    warn!(units = stats.units, "Input failed: {}", e);
                    out.flush()?;
                    return Err(e);
                }
            };

            debug!(unit = stats.units, bytes = unit.text.len(), "Classifying unit");
            if self.classify(&unit, out)? {
                stats.too_short += 1;
            }
            stats.units += 1;
        }
        out.flush()?;

        info!(
            units = stats.units,
            too_short = stats.too_short,
            "Classification complete"
        );
        Ok(stats)
    }
}
