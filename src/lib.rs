pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;

// Re-export main types for convenient access
pub use config::{DetectorConfig, LanguageSet};
pub use detection::{Confidences, Detection, DetectionMode, LanguageDetection, Span};
pub use error::{Error, Result};
pub use input::{select_input, InputUnit, InputUnits, UnitKind};
pub use output::OutputOptions;
pub use pipeline::{ClassifyOptions, Classifier, RunStats};
