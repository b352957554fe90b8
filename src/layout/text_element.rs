//! Positioned glyphs.
//!
//! A [`TextElement`] is the atomic unit of word segmentation: one character
//! (or ligature string) with its bounding box and the font metrics the
//! upstream extractor reported for it.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::layout::entity::LayoutEntity;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A single positioned character.
///
/// Serialized as the flat record
/// `{top, left, width, height, font, fontSize, text, widthOfSpace, direction}`.
///
/// Equality compares the trimmed text only; geometry and font data are
/// ignored, so two `"A"` glyphs anywhere on the page are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    #[serde(flatten)]
    bbox: Rect,
    #[serde(default)]
    font: Option<String>,
    font_size: f32,
    text: String,
    width_of_space: f32,
    #[serde(default)]
    direction: i32,
}

impl TextElement {
    /// Create a horizontal glyph.
    ///
    /// `width_of_space` is the expected advance of a space character in the
    /// same font and size; it may be NaN or zero when the font does not
    /// provide one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_wordseg::layout::TextElement;
    ///
    /// let h = TextElement::new(0.0, 0.0, 6.0, 10.0, "F", 12.0, "H", 4.0);
    /// assert_eq!(h.right(), 6.0);
    /// assert_eq!(h.bottom(), 10.0);
    /// assert_eq!(h.direction(), 0);
    /// ```
    pub fn new(
        top: f32,
        left: f32,
        width: f32,
        height: f32,
        font: impl Into<String>,
        font_size: f32,
        text: impl Into<String>,
        width_of_space: f32,
    ) -> Self {
        Self {
            bbox: Rect::new(left, top, width, height),
            font: Some(font.into()),
            font_size,
            text: text.into(),
            width_of_space,
            direction: 0,
        }
    }

    /// The neutral placeholder glyph: no font, no text, no extent.
    ///
    /// Every call returns a fresh value; there is no shared instance.
    pub fn empty() -> Self {
        Self {
            bbox: Rect::default(),
            font: None,
            font_size: 0.0,
            text: String::new(),
            width_of_space: 0.0,
            direction: 0,
        }
    }

    /// Set the writing direction tag.
    pub fn with_direction(mut self, direction: i32) -> Self {
        self.direction = direction;
        self
    }

    /// Build a space glyph that starts at this glyph's right edge.
    ///
    /// The space inherits this glyph's vertical metrics, font and direction.
    pub(crate) fn space_after(&self, width: f32) -> Self {
        Self {
            bbox: Rect::new(self.right(), self.top(), width, self.height()),
            font: self.font.clone(),
            font_size: self.font_size,
            text: " ".to_string(),
            width_of_space: self.width_of_space,
            direction: self.direction,
        }
    }

    /// Check whether this is the placeholder produced by [`TextElement::empty`].
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Bounding box.
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

    /// Width.
    pub fn width(&self) -> f32 {
        self.bbox.width
    }

    /// Height.
    pub fn height(&self) -> f32 {
        self.bbox.height
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f32 {
        self.bbox.bottom()
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f32 {
        self.bbox.right()
    }

    /// Font identifier, `None` for the placeholder glyph.
    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    /// Font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Expected width of a space glyph in this font and size.
    pub fn width_of_space(&self) -> f32 {
        self.width_of_space
    }

    /// Writing direction tag (0 = horizontal).
    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// Check whether `other` uses a different font or font size.
    pub fn font_differs(&self, other: &TextElement) -> bool {
        self.font != other.font || self.font_size != other.font_size
    }

    /// Merge another fragment of the same character position into this glyph.
    ///
    /// The texts are concatenated in reading order (the glyph that comes
    /// first on the page contributes its text first) and the bounding box
    /// grows to cover both. Fails with [`Error::InvalidArgument`] when
    /// `other` is not a glyph; `self` is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_wordseg::layout::TextElement;
    ///
    /// let mut accent = TextElement::new(0.0, 3.0, 3.0, 10.0, "F", 12.0, "\u{301}", 4.0);
    /// let base = TextElement::new(0.0, 0.0, 6.0, 10.0, "F", 12.0, "e", 4.0);
    /// accent.merge(&base).unwrap();
    /// assert_eq!(accent.text(), "e\u{301}");
    /// assert_eq!(accent.left(), 0.0);
    /// assert_eq!(accent.right(), 6.0);
    /// ```
    pub fn merge(&mut self, other: &dyn LayoutEntity) -> Result<()> {
        let other = other.as_text_element().ok_or_else(|| {
            Error::InvalidArgument("argument is not a TextElement".to_string())
        })?;

        if self.bbox.cmp_reading_order(&other.bbox) == Ordering::Greater {
            self.text.insert_str(0, &other.text);
        } else {
            self.text.push_str(&other.text);
        }
        self.bbox.merge(&other.bbox);
        Ok(())
    }
}

impl LayoutEntity for TextElement {
    fn bbox(&self) -> Rect {
        self.bbox
    }

    fn as_text_element(&self) -> Option<&TextElement> {
        Some(self)
    }
}

impl PartialEq for TextElement {
    fn eq(&self, other: &Self) -> bool {
        self.text.trim() == other.text.trim()
    }
}

impl fmt::Display for TextElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#<TextElement: {:.2},{:.2},{:.2},{:.2} '{}'>",
            self.top(),
            self.left(),
            self.bottom(),
            self.right(),
            self.text
        )
    }
}
