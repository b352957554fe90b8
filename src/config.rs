//! Configuration for word segmentation.

use crate::error::Result;
use crate::geometry::DEFAULT_LINE_VARIANCE;
use serde::{Deserialize, Serialize};

/// Tolerances used by the word merger.
///
/// The defaults are the values the merger was tuned with; they only need to
/// change for unusual typesetting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Fraction of the expected space width that counts as a word gap.
    ///
    /// Default: 0.5
    pub spacing_tolerance: f32,

    /// Fraction of the rolling average character width that counts as a word gap.
    ///
    /// Default: 0.3
    pub average_char_tolerance: f32,

    /// Minimum overlap ratio for two identical glyphs to be treated as one.
    ///
    /// Default: 0.5
    pub duplicate_overlap_ratio: f32,

    /// Baseline variance for the same-line test.
    ///
    /// Default: 0.1
    pub line_variance: f32,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            spacing_tolerance: 0.5,
            average_char_tolerance: 0.3,
            duplicate_overlap_ratio: 0.5,
            line_variance: DEFAULT_LINE_VARIANCE,
        }
    }

    /// Set the space-width tolerance.
    pub fn with_spacing_tolerance(mut self, tolerance: f32) -> Self {
        self.spacing_tolerance = tolerance;
        self
    }

    /// Set the average character width tolerance.
    pub fn with_average_char_tolerance(mut self, tolerance: f32) -> Self {
        self.average_char_tolerance = tolerance;
        self
    }

    /// Set the duplicate overlap ratio.
    pub fn with_duplicate_overlap_ratio(mut self, ratio: f32) -> Self {
        self.duplicate_overlap_ratio = ratio;
        self
    }

    /// Set the same-line baseline variance.
    pub fn with_line_variance(mut self, variance: f32) -> Self {
        self.line_variance = variance;
        self
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_wordseg::config::MergeConfig;
    ///
    /// let config = MergeConfig::from_json(r#"{"spacing_tolerance": 0.8}"#).unwrap();
    /// assert_eq!(config.spacing_tolerance, 0.8);
    /// assert_eq!(config.average_char_tolerance, 0.3);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
