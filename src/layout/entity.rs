//! Shared surface of positioned layout entities.

use crate::geometry::Rect;
use crate::layout::text_element::TextElement;

/// A positioned entity on a page: a glyph, a chunk of glyphs, a line or a ruling.
///
/// Entities embed their geometry instead of inheriting it; this trait exposes
/// the bounding box and lets operations that only accept glyphs check the
/// kind of their operand at runtime.
pub trait LayoutEntity {
    /// Bounding box in page space.
    fn bbox(&self) -> Rect;

    /// Downcast to a glyph, if this entity is one.
    fn as_text_element(&self) -> Option<&TextElement> {
        None
    }
}
