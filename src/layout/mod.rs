//! Layout analysis: from positioned glyphs to words and lines.
//!
//! - [`TextElement`]: a positioned glyph with its font metrics
//! - [`TextChunk`]: a word or word fragment
//! - [`WordMerger`]: the glyph-to-word segmentation pass
//! - [`TextLine`]: chunks grouped by baseline

pub mod entity;
pub mod ruling;
pub mod text_chunk;
pub mod text_element;
pub mod text_line;
pub mod word_merger;

// Re-export main types
pub use entity::LayoutEntity;
pub use ruling::Ruling;
pub use text_chunk::TextChunk;
pub use text_element::TextElement;
pub use text_line::{group_by_lines, TextLine};
pub use word_merger::{merge_words, WordMerger};
