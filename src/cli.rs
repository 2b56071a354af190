use crate::config::DetectorConfig;
use crate::detection::DetectionMode;
use crate::error::Result;
use crate::output::OutputOptions;
use crate::pipeline::ClassifyOptions;
use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "lingua-cli")]
#[command(about = "Command line tool for natural language classification")]
#[command(version)]
pub struct Args {
    /// Comma separated list of ISO 639-1 codes of languages to detect. All supported
    /// languages are used if not specified; setting this improves accuracy and resource usage
    #[arg(short = 'l', long)]
    pub languages: Option<String>,

    /// Classify language per line, only works when text is read from standard input
    #[arg(short = 'n', long)]
    pub per_line: bool,

    /// List all supported languages
    #[arg(short = 'L', long)]
    pub list: bool,

    /// Show all confidence values (the entire distribution) rather than only the
    /// winning score. Does not apply to --multi
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Quick, low accuracy mode
    #[arg(short = 'q', long)]
    pub quick: bool,

    /// Classify multiple languages in mixed texts, reporting UTF-8 byte offsets
    #[arg(short = 'm', long, conflicts_with = "per_line")]
    pub multi: bool,

    /// Only output results with at least this confidence value (0.0-1.0)
    #[arg(short = 'c', long)]
    pub confidence: Option<f64>,

    /// Minimum text length, not counting whitespace, punctuation or numerals.
    /// Shorter text is classified as 'unknown'
    #[arg(short = 'M', long)]
    pub minlength: Option<usize>,

    /// Minimum relative distance between the top language probabilities (0.0-0.99)
    #[arg(short = 'd', long)]
    pub min_relative_distance: Option<f64>,

    /// Output column delimiter
    #[arg(short = 'D', long, default_value = "\t")]
    pub delimiter: String,

    /// Text to classify; standard input is read when omitted
    pub text: Vec<String>,
}

impl Args {
    /// Resolve language codes and detector flags
    pub fn detector_config(&self) -> Result<DetectorConfig> {
        DetectorConfig::from_options(
            self.languages.as_deref(),
            self.quick,
            self.min_relative_distance,
        )
    }

    pub fn classify_options(&self) -> ClassifyOptions {
        ClassifyOptions {
            mode: if self.multi {
                DetectionMode::Multi
            } else {
                DetectionMode::Single
            },
            min_length: self.minlength.filter(|&min| min > 0),
            output: OutputOptions {
                delimiter: self.delimiter.clone(),
                threshold: self.confidence,
                all: self.all,
            },
        }
    }
}
