use crate::error::{Error, Result};
use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};
use tracing::{debug, info};

/// Largest minimum relative distance the detector accepts
pub const MAX_RELATIVE_DISTANCE: f64 = 0.99;

/// Languages the detector chooses between
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSet {
    /// Every language in the catalog
    All,
    /// An explicit restriction, in the order given on the command line
    Only(Vec<Language>),
}

/// Immutable detector settings, built once per run
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    pub languages: LanguageSet,
    /// Low-accuracy, low-memory detection
    pub quick: bool,
    /// Only applied when explicitly supplied; `Some(0.0)` is a valid setting
    pub min_relative_distance: Option<f64>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            languages: LanguageSet::All,
            quick: false,
            min_relative_distance: None,
        }
    }
}

impl DetectorConfig {
    /// Validate command-line level options into a detector configuration.
    ///
    /// Fails on the first code that does not resolve, before any detector is built.
    pub fn from_options(
        languages: Option<&str>,
        quick: bool,
        min_relative_distance: Option<f64>,
    ) -> Result<Self> {
        let languages = match languages {
            Some(list) => {
                let parsed = parse_language_list(list)?;
                if parsed.is_empty() {
                    LanguageSet::All
                } else {
                    LanguageSet::Only(parsed)
                }
            }
            None => LanguageSet::All,
        };

        if let Some(value) = min_relative_distance {
            if !(0.0..=MAX_RELATIVE_DISTANCE).contains(&value) {
                return Err(Error::InvalidRelativeDistance { value });
            }
        }

        Ok(Self {
            languages,
            quick,
            min_relative_distance,
        })
    }

    /// Build the detector this configuration describes
    pub fn build_detector(&self) -> LanguageDetector {
        let mut builder = match &self.languages {
            LanguageSet::All => LanguageDetectorBuilder::from_all_languages(),
            LanguageSet::Only(languages) => LanguageDetectorBuilder::from_languages(languages),
        };

        if self.quick {
            builder.with_low_accuracy_mode();
        }
        if let Some(distance) = self.min_relative_distance {
            builder.with_minimum_relative_distance(distance);
        }

        info!(
            languages = self.language_count(),
            quick = self.quick,
            min_relative_distance = ?self.min_relative_distance,
            "Building language detector"
        );
        builder.build()
    }

    fn language_count(&self) -> usize {
        match &self.languages {
            LanguageSet::All => Language::all().len(),
            LanguageSet::Only(languages) => languages.len(),
        }
    }
}

/// Split a comma separated list of ISO 639-1 codes and resolve each one.
/// Whitespace around codes is ignored, as are empty entries.
pub fn parse_language_list(list: &str) -> Result<Vec<Language>> {
    let mut languages = Vec::new();
    for code in list.split(',').map(str::trim).filter(|code| !code.is_empty()) {
        let language = resolve_iso_code(code)?;
        debug!(code, %language, "Resolved language code");
        if !languages.contains(&language) {
            languages.push(language);
        }
    }
    Ok(languages)
}

/// Resolve one ISO 639-1 code, ignoring case
pub fn resolve_iso_code(code: &str) -> Result<Language> {
    Language::all()
        .into_iter()
        .find(|language| iso_code(*language).eq_ignore_ascii_case(code))
        .ok_or_else(|| Error::unknown_language(code))
}

/// Lowercase ISO 639-1 code of a language, as printed in every output format
pub fn iso_code(language: Language) -> String {
    language.iso_code_639_1().to_string().to_lowercase()
}

/// The full catalog sorted by language name, for `--list`
pub fn supported_languages() -> Vec<Language> {
    let mut languages: Vec<Language> = Language::all().into_iter().collect();
    languages.sort_by_key(|language| language.to_string());
    languages
}
