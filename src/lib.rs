// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]

//! # PDF word segmentation
//!
//! Reconstructs words and text lines from the flat stream of positioned
//! glyphs a PDF content-stream reader produces. PDFs do not store word
//! boundaries; they are recovered from glyph advance widths, inter-glyph
//! gaps, vertical alignment and column separators.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_wordseg::layout::{merge_words, Ruling, TextElement};
//!
//! let glyphs = vec![
//!     TextElement::new(0.0, 0.0, 6.0, 10.0, "Helvetica", 12.0, "H", 4.0),
//!     TextElement::new(0.0, 6.0, 3.0, 10.0, "Helvetica", 12.0, "i", 4.0),
//!     TextElement::new(0.0, 40.0, 3.0, 10.0, "Helvetica", 12.0, "!", 4.0),
//! ];
//! let rulings: Vec<Ruling> = Vec::new();
//!
//! let chunks = merge_words(&glyphs, &rulings);
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].text().trim_end(), "Hi");
//! assert_eq!(chunks[1].text(), "!");
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 (<http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license (<http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Layout analysis
pub mod geometry;
pub mod layout;

// Configuration
pub mod config;

// Re-exports
pub use config::MergeConfig;
pub use error::{Error, Result};
pub use layout::{merge_words, Ruling, TextChunk, TextElement, TextLine, WordMerger};

// Internal utilities
pub(crate) mod utils {
    use std::cmp::Ordering;

    /// Total order on coordinates for sorting; NaN sorts last.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
