//! Heuristic word segmentation.
//!
//! Word boundaries are not stored in PDF content streams, so they have to be
//! recovered from glyph geometry. The merger folds glyphs, already sorted in
//! reading order, into [`TextChunk`]s in a single pass:
//!
//! 1. A font or font size change resets the rolling average character width.
//! 2. A glyph with the same text as its predecessor that overlaps it by at
//!    least [`MergeConfig::duplicate_overlap_ratio`] is a doubled rendering
//!    and is dropped.
//! 3. A space glyph sitting exactly on its predecessor is dropped.
//! 4. A vertical ruling strictly between two glyphs always splits them.
//! 5. The word gap threshold is the smaller of two estimates: one from the
//!    font's space width, one from the rolling average character width.
//! 6. A glyph whose baseline does not overlap the running line starts a new
//!    line and therefore a new chunk.
//! 7. A gap wider than the threshold gets a synthesized space glyph.
//! 8. The glyph joins the current chunk unless the remaining gap reaches the
//!    font's space width (or, for overlapping glyphs, the chunk and glyph do
//!    not share any vertical span).

use crate::config::MergeConfig;
use crate::geometry::overlap;
use crate::layout::ruling::Ruling;
use crate::layout::text_chunk::TextChunk;
use crate::layout::text_element::TextElement;
use crate::layout::text_line::{group_by_lines, TextLine};

/// Merge glyphs into word chunks with the default tolerances.
///
/// `rulings` are vertical separators; pass an empty slice when none were
/// detected.
///
/// # Examples
///
/// ```
/// use pdf_wordseg::layout::{merge_words, TextElement};
///
/// let glyphs = vec![
///     TextElement::new(0.0, 0.0, 6.0, 10.0, "F", 12.0, "H", 4.0),
///     TextElement::new(0.0, 6.0, 3.0, 10.0, "F", 12.0, "i", 4.0),
/// ];
/// let chunks = merge_words(&glyphs, &[]);
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].text(), "Hi");
/// ```
pub fn merge_words(elements: &[TextElement], rulings: &[Ruling]) -> Vec<TextChunk> {
    WordMerger::default().merge(elements, rulings)
}

/// Single-pass glyph-to-word merger.
///
/// The merger holds only its configuration; every call keeps its scan state
/// on the stack, so one merger can process many pages concurrently.
#[derive(Debug, Clone, Default)]
pub struct WordMerger {
    config: MergeConfig,
}

/// Rolling statistics carried from one glyph to the next.
#[derive(Debug, Clone, Copy)]
struct ScanState {
    previous_average_char_width: Option<f32>,
    end_of_last_text_x: Option<f32>,
    max_y_for_line: f32,
    max_height_for_line: f32,
    min_y_top_for_line: f32,
    last_word_spacing: Option<f32>,
}

impl ScanState {
    fn seed(first: &TextElement) -> Self {
        Self {
            previous_average_char_width: Some(first.width()),
            end_of_last_text_x: Some(first.right()),
            max_y_for_line: first.bottom(),
            max_height_for_line: first.height(),
            min_y_top_for_line: first.top(),
            last_word_spacing: None,
        }
    }

    fn start_new_line(&mut self) {
        self.end_of_last_text_x = None;
        self.max_y_for_line = f32::NEG_INFINITY;
        self.max_height_for_line = -1.0;
        self.min_y_top_for_line = f32::INFINITY;
        self.last_word_spacing = None;
    }

    fn extend_line(&mut self, element: &TextElement) {
        self.max_y_for_line = self.max_y_for_line.max(element.bottom());
        self.max_height_for_line = self.max_height_for_line.max(element.height());
        self.min_y_top_for_line = self.min_y_top_for_line.min(element.top());
    }
}

#[derive(Debug, Default)]
struct MergeStats {
    duplicates: usize,
    phantom_spaces: usize,
    spaces: usize,
}

impl WordMerger {
    /// Create a merger with custom tolerances.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Tolerances in use.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge glyphs in reading order into word chunks.
    ///
    /// The input is only read, never consumed. Every glyph ends up in exactly
    /// one chunk, in input order, except dropped duplicates and phantom
    /// spaces; synthesized space glyphs (text `" "`) are inserted where a gap
    /// looks like word spacing. Empty input yields no chunks.
    pub fn merge(&self, elements: &[TextElement], rulings: &[Ruling]) -> Vec<TextChunk> {
        let Some((first, rest)) = elements.split_first() else {
            return Vec::new();
        };

        let ruling_xs: Vec<f32> = rulings.iter().map(Ruling::left).collect();
        let mut chunks = Vec::new();
        let mut current = TextChunk::from_element(first.clone());
        let mut prev = first;
        let mut state = ScanState::seed(first);
        let mut stats = MergeStats::default();

        for element in rest {
            let kept = self.fold_element(
                &mut chunks,
                &mut current,
                prev,
                &mut state,
                &mut stats,
                element,
                &ruling_xs,
            );
            if kept {
                prev = element;
            }
        }
        chunks.push(current);

        log::debug!(
            "Merged {} glyphs into {} chunks ({} spaces synthesized, {} duplicates and {} phantom spaces dropped)",
            elements.len(),
            chunks.len(),
            stats.spaces,
            stats.duplicates,
            stats.phantom_spaces
        );

        chunks
    }

    /// Merge glyphs into chunks and group the chunks into text lines.
    pub fn merge_lines(&self, elements: &[TextElement], rulings: &[Ruling]) -> Vec<TextLine> {
        group_by_lines(self.merge(elements, rulings), self.config.line_variance)
    }

    /// Fold one glyph into the running chunk. `prev` is the last glyph kept
    /// from the input, which is always the last element of `current`.
    ///
    /// Returns false when the glyph was dropped.
    fn fold_element(
        &self,
        chunks: &mut Vec<TextChunk>,
        current: &mut TextChunk,
        prev: &TextElement,
        state: &mut ScanState,
        stats: &mut MergeStats,
        element: &TextElement,
        ruling_xs: &[f32],
    ) -> bool {
        if element.font_differs(prev) {
            state.previous_average_char_width = None;
        }

        if prev.text() == element.text()
            && prev
                .bbox()
                .overlaps_with_ratio(&element.bbox(), self.config.duplicate_overlap_ratio)
        {
            log::trace!("Dropping duplicate glyph {}", element);
            stats.duplicates += 1;
            return false;
        }

        if element.text() == " " && prev.left() == element.left() && prev.top() == element.top() {
            log::trace!("Dropping space glyph on top of {}", prev);
            stats.phantom_spaces += 1;
            return false;
        }

        let crosses_ruling = ruling_xs
            .iter()
            .any(|&x| prev.left() < x && element.left() > x);
        if crosses_ruling {
            log::trace!("Ruling between {} and {}", prev, element);
        }

        // Expected space width with some margin, from the font metrics
        let word_spacing = element.width_of_space();
        let delta_space = if word_spacing.is_nan() || word_spacing == 0.0 {
            f32::INFINITY
        } else {
            match state.last_word_spacing.filter(|s| *s >= 0.0) {
                Some(last) => ((word_spacing + last) / 2.0) * self.config.spacing_tolerance,
                None => word_spacing * self.config.spacing_tolerance,
            }
        };

        // Expected space width with some margin, from the glyph widths seen so
        // far. Not a true running average: each glyph halves the weight of
        // everything before it.
        let char_count = element.text().chars().count().max(1) as f32;
        let char_width = element.width() / char_count;
        let average_char_width = match state.previous_average_char_width.filter(|w| *w >= 0.0) {
            Some(previous) => (previous + char_width) / 2.0,
            None => char_width,
        };
        let delta_char_width = average_char_width * self.config.average_char_tolerance;
        let threshold = delta_char_width.min(delta_space);

        let same_line = overlap(
            element.bottom(),
            element.height(),
            state.max_y_for_line,
            state.max_height_for_line,
            self.config.line_variance,
        );
        if !same_line {
            log::trace!(
                "Line break before {} (previous line spanned {:.2}..{:.2})",
                element,
                state.min_y_top_for_line,
                state.max_y_for_line
            );
            state.start_new_line();
        }

        let expected_start_of_next_word_x = state
            .end_of_last_text_x
            .map_or(f32::NEG_INFINITY, |end| end + threshold);
        state.end_of_last_text_x = Some(element.right());

        let space = if !crosses_ruling
            && same_line
            && expected_start_of_next_word_x < element.left()
            && !prev.text().ends_with(' ')
        {
            Some(prev.space_after(expected_start_of_next_word_x - prev.right()))
        } else {
            None
        };
        let prev_right = prev.right();

        let space_extent = space.as_ref().map(|sp| (sp.right(), sp.width()));
        if let Some(sp) = space {
            log::trace!("Synthesized {}", sp);
            stats.spaces += 1;
            current.push(sp);
        }

        state.extend_line(element);

        let gap = element.left() - space_extent.map_or(prev_right, |(right, _)| right);
        let joins = !crosses_ruling
            && same_line
            && if gap < 0.0 {
                current.vertically_overlaps(element)
            } else {
                gap < word_spacing
            };

        if joins {
            current.push(element.clone());
        } else {
            log::trace!("New chunk at {}", element);
            let finished = std::mem::replace(current, TextChunk::from_element(element.clone()));
            chunks.push(finished);
        }

        state.last_word_spacing = Some(word_spacing);
        state.previous_average_char_width = Some(match space_extent {
            Some((_, space_width)) => (average_char_width + space_width) / 2.0,
            None => average_char_width,
        });
        true
    }
}
