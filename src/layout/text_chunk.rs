//! Runs of glyphs that form a word or word fragment.

use crate::geometry::Rect;
use crate::layout::entity::LayoutEntity;
use crate::layout::text_element::TextElement;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// An ordered, growable sequence of glyphs.
///
/// The bounding box always covers every member glyph. A chunk is never
/// empty: it is created from its first glyph and only grows afterwards.
#[derive(Debug, Clone)]
pub struct TextChunk {
    bbox: Rect,
    elements: Vec<TextElement>,
}

impl TextChunk {
    /// Start a chunk with a single glyph.
    pub fn from_element(element: TextElement) -> Self {
        Self {
            bbox: element.bbox(),
            elements: vec![element],
        }
    }

    /// Append a glyph and grow the bounding box to cover it.
    pub fn push(&mut self, element: TextElement) {
        self.bbox.merge(&element.bbox());
        self.elements.push(element);
    }

    /// Append several glyphs in order.
    pub fn extend<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = TextElement>,
    {
        for element in elements {
            self.push(element);
        }
    }

    /// Member glyphs in order.
    pub fn elements(&self) -> &[TextElement] {
        &self.elements
    }

    /// The most recently appended glyph.
    pub fn last_element(&self) -> Option<&TextElement> {
        self.elements.last()
    }

    /// Number of member glyphs.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false for chunks built through the public API.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Bounding box covering all member glyphs.
    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Top edge.
    pub fn top(&self) -> f32 {
        self.bbox.top()
    }

    /// Left edge.
    pub fn left(&self) -> f32 {
        self.bbox.left()
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.bbox.bottom()
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.bbox.right()
    }

    /// Concatenated text of all member glyphs.
    pub fn text(&self) -> String {
        self.elements.iter().map(TextElement::text).collect()
    }

    /// Check whether every member glyph is whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.elements.iter().all(|e| e.text().trim().is_empty())
    }

    /// Check whether the chunk shares any vertical span with `element`.
    pub fn vertically_overlaps(&self, element: &TextElement) -> bool {
        self.bbox.vertically_overlaps(&element.bbox())
    }

    /// Absorb another chunk.
    ///
    /// The glyphs of whichever chunk comes first in reading order are placed
    /// first; the bounding box covers both.
    pub fn merge(&mut self, other: TextChunk) {
        if other.bbox.cmp_reading_order(&self.bbox) == Ordering::Less {
            let mut elements = other.elements;
            elements.append(&mut self.elements);
            self.elements = elements;
        } else {
            self.elements.extend(other.elements);
        }
        self.bbox.merge(&other.bbox);
    }
}

impl LayoutEntity for TextChunk {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl fmt::Display for TextChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            f.write_str(element.text())?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChunkRecord<'a> {
    #[serde(flatten)]
    bbox: Rect,
    text: String,
    text_elements: &'a [TextElement],
}

impl Serialize for TextChunk {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ChunkRecord {
            bbox: self.bbox,
            text: self.text(),
            text_elements: &self.elements,
        }
        .serialize(serializer)
    }
}
