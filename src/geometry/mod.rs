//! Geometric primitives for layout analysis.
//!
//! Page coordinates grow downwards: `top` is smaller than `bottom` for any
//! rectangle with a positive height. Besides the rectangle type, this module
//! holds the tolerance helpers the word merger uses to decide whether two
//! glyphs sit on the same text line.

use crate::utils::safe_float_cmp;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default variance for [`overlap`] when comparing line baselines.
pub const DEFAULT_LINE_VARIANCE: f32 = 0.1;

/// Check whether two values differ by strictly less than `variance`.
///
/// # Examples
///
/// ```
/// use pdf_wordseg::geometry::within;
///
/// assert!(within(5.0, 5.05, 0.1));
/// assert!(!within(5.0, 5.3, 0.1));
/// ```
#[inline]
pub fn within(first: f32, second: f32, variance: f32) -> bool {
    second < first + variance && second > first - variance
}

/// Check whether two vertical spans belong to the same text line.
///
/// Each span is given by its baseline (`y1`, `y2`, i.e. the bottom edge) and
/// the extent above it (`height1`, `height2`). The spans are on the same line
/// when their baselines are within `variance` of each other, or when either
/// baseline falls inside the other span.
///
/// The test is looser than exact row equality so that small rendering jitter
/// in line placement does not split a line.
///
/// # Examples
///
/// ```
/// use pdf_wordseg::geometry::overlap;
///
/// assert!(overlap(10.0, 2.0, 10.05, 2.0, 0.1));
/// assert!(!overlap(10.0, 2.0, 40.0, 2.0, 0.1));
/// ```
pub fn overlap(y1: f32, height1: f32, y2: f32, height2: f32, variance: f32) -> bool {
    within(y1, y2, variance)
        || (y2 <= y1 && y2 >= y1 - height1)
        || (y1 <= y2 && y1 >= y2 - height2)
}

/// A rectangle in page space.
///
/// Serialized as `{top, left, width, height}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the left edge
    #[serde(rename = "left")]
    pub x: f32,
    /// Y coordinate of the top edge
    #[serde(rename = "top")]
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_wordseg::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_wordseg::geometry::Rect;
    ///
    /// let rect = Rect::from_points(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.x, 10.0);
    /// assert_eq!(rect.y, 20.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle that contains both rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_wordseg::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 50.0, 50.0);
    /// let r2 = Rect::new(25.0, 25.0, 50.0, 50.0);
    /// let union = r1.union(&r2);
    ///
    /// assert_eq!(union.x, 0.0);
    /// assert_eq!(union.y, 0.0);
    /// assert_eq!(union.right(), 75.0);
    /// assert_eq!(union.bottom(), 75.0);
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::from_points(x0, y0, x1, y1)
    }

    /// Grow this rectangle in place so that it also covers `other`.
    pub fn merge(&mut self, other: &Rect) {
        *self = self.union(other);
    }

    /// Compute the area of the rectangle.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Length of the vertical span shared by both rectangles (0 if disjoint).
    pub fn vertical_overlap(&self, other: &Rect) -> f32 {
        (self.bottom().min(other.bottom()) - self.top().max(other.top())).max(0.0)
    }

    /// Check whether the two rectangles share any vertical span.
    pub fn vertically_overlaps(&self, other: &Rect) -> bool {
        self.vertical_overlap(other) > 0.0
    }

    /// Length of the horizontal span shared by both rectangles (0 if disjoint).
    pub fn horizontal_overlap(&self, other: &Rect) -> f32 {
        (self.right().min(other.right()) - self.left().max(other.left())).max(0.0)
    }

    /// Area of the intersection of both rectangles.
    pub fn intersection_area(&self, other: &Rect) -> f32 {
        self.horizontal_overlap(other) * self.vertical_overlap(other)
    }

    /// Intersection area divided by union area.
    ///
    /// Returns 0 when the union has no area (two degenerate rectangles).
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_wordseg::geometry::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// let b = Rect::new(5.0, 0.0, 10.0, 10.0);
    /// assert!((a.overlap_ratio(&b) - 50.0 / 150.0).abs() < 1e-6);
    /// assert_eq!(a.overlap_ratio(&a), 1.0);
    /// ```
    pub fn overlap_ratio(&self, other: &Rect) -> f32 {
        let intersection = self.intersection_area(other);
        let union = self.area() + other.area() - intersection;
        if union <= 0.0 {
            return 0.0;
        }
        intersection / union
    }

    /// Check whether [`Rect::overlap_ratio`] reaches `ratio`.
    pub fn overlaps_with_ratio(&self, other: &Rect, ratio: f32) -> bool {
        self.overlap_ratio(other) >= ratio
    }

    /// Compare two rectangles by reading position.
    ///
    /// Rectangles on the same line (per [`overlap`] on their bottoms) are
    /// ordered left to right; otherwise the one whose bottom is higher on
    /// the page comes first. NaN coordinates never panic.
    pub fn cmp_reading_order(&self, other: &Rect) -> Ordering {
        if overlap(
            self.bottom(),
            self.height,
            other.bottom(),
            other.height,
            DEFAULT_LINE_VARIANCE,
        ) {
            safe_float_cmp(self.left(), other.left())
        } else {
            safe_float_cmp(self.bottom(), other.bottom())
        }
    }
}
