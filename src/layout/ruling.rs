//! Ruling lines detected on the page.
//!
//! Rulings come from an external line detector. The word merger only looks
//! at the x-coordinate of vertical rulings, which act as column separators.

use crate::geometry::{within, Rect};
use crate::layout::entity::LayoutEntity;
use serde::{Deserialize, Serialize};

/// Maximum horizontal drift for a ruling to still count as vertical.
const ORIENTATION_TOLERANCE: f32 = 1.0;

/// A straight separator line given by its end points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ruling {
    /// Top end point y-coordinate
    pub top: f32,
    /// Left end point x-coordinate
    pub left: f32,
    /// Bottom end point y-coordinate
    pub bottom: f32,
    /// Right end point x-coordinate
    pub right: f32,
}

impl Ruling {
    /// Create a ruling from its end points.
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create a vertical ruling at `x` spanning `top..bottom`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_wordseg::layout::Ruling;
    ///
    /// let ruling = Ruling::vertical(120.0, 0.0, 400.0);
    /// assert!(ruling.is_vertical());
    /// assert_eq!(ruling.left(), 120.0);
    /// ```
    pub fn vertical(x: f32, top: f32, bottom: f32) -> Self {
        Self::new(top, x, bottom, x)
    }

    /// X-coordinate of the left end point.
    pub fn left(&self) -> f32 {
        self.left
    }

    /// Check whether the ruling runs (almost) straight down the page.
    pub fn is_vertical(&self) -> bool {
        within(self.left, self.right, ORIENTATION_TOLERANCE) && self.bottom != self.top
    }
}

impl LayoutEntity for Ruling {
    fn bbox(&self) -> Rect {
        Rect::from_points(
            self.left.min(self.right),
            self.top.min(self.bottom),
            self.left.max(self.right),
            self.top.max(self.bottom),
        )
    }
}
