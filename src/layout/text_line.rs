//! Grouping of word chunks into text lines.

use crate::geometry::{overlap, Rect};
use crate::layout::entity::LayoutEntity;
use crate::layout::text_chunk::TextChunk;
use crate::utils::safe_float_cmp;

/// A run of chunks sharing one baseline, ordered left to right.
#[derive(Debug, Clone)]
pub struct TextLine {
    bbox: Rect,
    chunks: Vec<TextChunk>,
}

impl TextLine {
    fn from_chunk(chunk: TextChunk) -> Self {
        Self {
            bbox: chunk.bbox(),
            chunks: vec![chunk],
        }
    }

    fn accepts(&self, chunk: &TextChunk, variance: f32) -> bool {
        let bbox = chunk.bbox();
        overlap(
            bbox.bottom(),
            bbox.height,
            self.bbox.bottom(),
            self.bbox.height,
            variance,
        )
    }

    fn push(&mut self, chunk: TextChunk) {
        self.bbox.merge(&chunk.bbox());
        self.chunks.push(chunk);
    }

    /// Chunks on this line, left to right.
    pub fn chunks(&self) -> &[TextChunk] {
        &self.chunks
    }

    /// Bounding box covering every chunk on the line.
    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Line text. Chunks are separated by a single space unless one of them
    /// already carries whitespace at the boundary.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for chunk in &self.chunks {
            let text = chunk.text();
            if !out.is_empty()
                && !out.ends_with(char::is_whitespace)
                && !text.starts_with(char::is_whitespace)
            {
                out.push(' ');
            }
            out.push_str(&text);
        }
        out
    }
}

impl LayoutEntity for TextLine {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}

/// Group chunks (in reading order) into lines.
///
/// A chunk joins the previous line when its baseline overlaps the line's
/// vertical span (see [`overlap`]); otherwise it opens a new line.
///
/// # Examples
///
/// ```
/// use pdf_wordseg::geometry::DEFAULT_LINE_VARIANCE;
/// use pdf_wordseg::layout::{group_by_lines, merge_words, TextElement};
///
/// let glyphs = vec![
///     TextElement::new(0.0, 0.0, 5.0, 10.0, "F", 12.0, "a", 4.0),
///     TextElement::new(0.0, 40.0, 5.0, 10.0, "F", 12.0, "b", 4.0),
///     TextElement::new(30.0, 0.0, 5.0, 10.0, "F", 12.0, "c", 4.0),
/// ];
/// let lines = group_by_lines(merge_words(&glyphs, &[]), DEFAULT_LINE_VARIANCE);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].text(), "a b");
/// assert_eq!(lines[1].text(), "c");
/// ```
pub fn group_by_lines(chunks: Vec<TextChunk>, variance: f32) -> Vec<TextLine> {
    let mut lines: Vec<TextLine> = Vec::new();

    for chunk in chunks {
        match lines.last_mut() {
            Some(line) if line.accepts(&chunk, variance) => line.push(chunk),
            _ => lines.push(TextLine::from_chunk(chunk)),
        }
    }

    for line in &mut lines {
        line.chunks.sort_by(|a, b| safe_float_cmp(a.left(), b.left()));
    }

    log::debug!("Grouped chunks into {} lines", lines.len());
    lines
}
