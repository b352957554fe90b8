//! Integration tests for glyph-to-word segmentation.
//!
//! These tests drive the public API with mock glyph streams shaped like the
//! output of a PDF content-stream reader.

use pdf_wordseg::geometry::{overlap, within};
use pdf_wordseg::layout::{merge_words, Ruling, TextChunk, TextElement, WordMerger};
use pdf_wordseg::{Error, MergeConfig};
use proptest::prelude::*;

// ============================================================================
// Helper Functions for Creating Mock Data
// ============================================================================

/// Create a glyph in font "F" at 12pt with a 4pt space width.
fn mock_glyph(text: &str, top: f32, left: f32, width: f32) -> TextElement {
    TextElement::new(top, left, width, 10.0, "F", 12.0, text, 4.0)
}

/// Lay out a word as fixed-advance glyphs starting at `left`.
fn mock_word(word: &str, top: f32, left: f32, advance: f32) -> Vec<TextElement> {
    word.chars()
        .enumerate()
        .map(|(i, c)| mock_glyph(&c.to_string(), top, left + i as f32 * advance, advance))
        .collect()
}

fn chunk_texts(chunks: &[TextChunk]) -> Vec<String> {
    chunks.iter().map(|c| c.text().trim_end().to_string()).collect()
}

/// Texts of every real (non-synthesized) glyph in output order.
fn real_glyph_texts(chunks: &[TextChunk]) -> Vec<String> {
    chunks
        .iter()
        .flat_map(TextChunk::elements)
        .filter(|e| e.text() != " ")
        .map(|e| e.text().to_string())
        .collect()
}

// ============================================================================
// Tolerance helpers
// ============================================================================

#[test]
fn test_within() {
    assert!(within(5.0, 5.05, 0.1));
    assert!(!within(5.0, 5.3, 0.1));
}

#[test]
fn test_overlap() {
    assert!(overlap(10.0, 2.0, 10.05, 2.0, 0.1));
    assert!(!overlap(10.0, 2.0, 40.0, 2.0, 0.1));
}

// ============================================================================
// Word segmentation
// ============================================================================

#[test]
fn test_hi_then_distant_exclamation() {
    let h = TextElement::new(0.0, 0.0, 6.0, 10.0, "F", 12.0, "H", 4.0);
    let i = TextElement::new(0.0, 6.0, 3.0, 10.0, "F", 12.0, "i", 4.0);
    let bang = TextElement::new(0.0, 40.0, 3.0, 10.0, "F", 12.0, "!", 4.0);

    let chunks = merge_words(&[h.clone(), i.clone()], &[]);
    assert_eq!(chunk_texts(&chunks), vec!["Hi"]);

    let chunks = merge_words(&[h, i, bang], &[]);
    assert_eq!(chunk_texts(&chunks), vec!["Hi", "!"]);
    // The second chunk starts with the glyph itself, no leading space
    assert_eq!(chunks[1].elements()[0].text(), "!");
}

#[test]
fn test_sentence() {
    let mut glyphs = mock_word("quick", 0.0, 0.0, 6.0);
    glyphs.extend(mock_word("brown", 0.0, 40.0, 6.0));
    glyphs.extend(mock_word("fox", 0.0, 80.0, 6.0));

    let chunks = merge_words(&glyphs, &[]);
    assert_eq!(chunk_texts(&chunks), vec!["quick", "brown", "fox"]);
    assert_eq!(real_glyph_texts(&chunks).concat(), "quickbrownfox");
}

#[test]
fn test_two_lines() {
    let mut glyphs = mock_word("top", 0.0, 0.0, 6.0);
    glyphs.extend(mock_word("bottom", 20.0, 0.0, 6.0));

    let chunks = merge_words(&glyphs, &[]);
    assert_eq!(chunk_texts(&chunks), vec!["top", "bottom"]);
    assert_eq!(chunks[1].top(), 20.0);
}

#[test]
fn test_baseline_jitter_stays_on_line() {
    let glyphs = vec![
        mock_glyph("a", 0.0, 0.0, 5.0),
        mock_glyph("b", 0.05, 5.0, 5.0),
        mock_glyph("c", -0.05, 10.0, 5.0),
    ];
    let chunks = merge_words(&glyphs, &[]);
    assert_eq!(chunk_texts(&chunks), vec!["abc"]);
}

#[test]
fn test_column_separator() {
    // Two table cells whose text nearly touches
    let mut glyphs = mock_word("Qty", 0.0, 0.0, 5.0);
    glyphs.extend(mock_word("12", 0.0, 15.5, 5.0));

    let without = merge_words(&glyphs, &[]);
    assert_eq!(chunk_texts(&without), vec!["Qty12"]);

    let with = merge_words(&glyphs, &[Ruling::vertical(15.2, 0.0, 50.0)]);
    assert_eq!(chunk_texts(&with), vec!["Qty", "12"]);
    // No space is synthesized across a ruling
    assert!(with.iter().all(|c| !c.text().contains(' ')));
}

#[test]
fn test_doubled_rendering_is_collapsed() {
    // Fake bold: every glyph drawn twice with a tiny offset
    let glyphs = vec![
        mock_glyph("B", 0.0, 0.0, 6.0),
        mock_glyph("B", 0.0, 0.3, 6.0),
        mock_glyph("o", 0.0, 6.0, 6.0),
        mock_glyph("o", 0.0, 6.3, 6.0),
    ];
    let chunks = merge_words(&glyphs, &[]);
    assert_eq!(chunk_texts(&chunks), vec!["Bo"]);
    assert_eq!(chunks[0].len(), 2);
}

#[test]
fn test_phantom_space_shrinks_output() {
    let glyphs = vec![
        mock_glyph("o", 0.0, 0.0, 5.0),
        mock_glyph(" ", 0.0, 0.0, 3.0),
        mock_glyph("k", 0.0, 5.0, 5.0),
    ];
    let chunks = merge_words(&glyphs, &[]);
    let total: usize = chunks.iter().map(TextChunk::len).sum();
    assert_eq!(total, glyphs.len() - 1);
}

#[test]
fn test_direction_tag_is_carried() {
    let glyphs = vec![
        mock_glyph("a", 0.0, 0.0, 5.0).with_direction(2),
        mock_glyph("b", 0.0, 5.0, 5.0).with_direction(2),
    ];
    let chunks = merge_words(&glyphs, &[]);
    assert!(chunks[0].elements().iter().all(|e| e.direction() == 2));
}

#[test]
fn test_merger_shared_across_threads() {
    let merger = WordMerger::new(MergeConfig::default());
    let pages: Vec<Vec<TextElement>> = (0..4)
        .map(|p| mock_word("page", 0.0, p as f32 * 10.0, 6.0))
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = pages
            .iter()
            .map(|page| scope.spawn(|| merger.merge(page, &[])))
            .collect();
        for handle in handles {
            let chunks = handle.join().unwrap();
            assert_eq!(chunk_texts(&chunks), vec!["page"]);
        }
    });
}

#[test]
fn test_json_glyph_dump() {
    let json = r#"[
        {"top": 0, "left": 0, "width": 6, "height": 10, "font": "F", "fontSize": 12, "text": "H", "widthOfSpace": 4},
        {"top": 0, "left": 6, "width": 3, "height": 10, "font": "F", "fontSize": 12, "text": "i", "widthOfSpace": 4, "direction": 0}
    ]"#;
    let glyphs: Vec<TextElement> = serde_json::from_str(json).unwrap();
    let chunks = merge_words(&glyphs, &[]);

    let out = serde_json::to_value(&chunks).unwrap();
    assert_eq!(out[0]["text"], "Hi");
    assert_eq!(out[0]["width"], 9.0);
}

#[test]
fn test_merge_rejects_chunk_operand() {
    let mut glyph = mock_glyph("a", 0.0, 0.0, 5.0);
    let chunk = TextChunk::from_element(mock_glyph("b", 0.0, 5.0, 5.0));
    assert!(matches!(glyph.merge(&chunk), Err(Error::InvalidArgument(_))));
}

// ============================================================================
// Properties
// ============================================================================

/// Glyph rows in reading order: each glyph is (gap before it, width); rows
/// are stacked 20pt apart.
fn glyph_rows() -> impl Strategy<Value = Vec<Vec<(f32, f32)>>> {
    prop::collection::vec(
        prop::collection::vec((0.0f32..15.0, 1.0f32..8.0), 1..20),
        1..5,
    )
}

fn layout_rows(rows: &[Vec<(f32, f32)>]) -> Vec<TextElement> {
    let letters: Vec<char> = ('a'..='z').collect();
    let mut glyphs = Vec::new();
    let mut n = 0;
    for (row, cells) in rows.iter().enumerate() {
        let mut x = 0.0;
        for &(gap, width) in cells {
            x += gap;
            let text = letters[n % letters.len()].to_string();
            glyphs.push(mock_glyph(&text, row as f32 * 20.0, x, width));
            x += width;
            n += 1;
        }
    }
    glyphs
}

proptest! {
    #[test]
    fn prop_every_glyph_appears_once_in_order(rows in glyph_rows()) {
        let glyphs = layout_rows(&rows);
        let chunks = merge_words(&glyphs, &[]);

        prop_assert!(!chunks.is_empty());
        let expected: Vec<String> = glyphs.iter().map(|g| g.text().to_string()).collect();
        prop_assert_eq!(real_glyph_texts(&chunks), expected);
    }

    #[test]
    fn prop_synthesized_glyphs_are_spaces(rows in glyph_rows()) {
        let glyphs = layout_rows(&rows);
        let chunks = merge_words(&glyphs, &[]);

        let total: usize = chunks.iter().map(TextChunk::len).sum();
        let spaces = chunks
            .iter()
            .flat_map(TextChunk::elements)
            .filter(|e| e.text() == " ")
            .count();
        prop_assert_eq!(total - spaces, glyphs.len());
    }

    #[test]
    fn prop_lines_never_share_a_chunk(rows in glyph_rows()) {
        let glyphs = layout_rows(&rows);
        let chunks = merge_words(&glyphs, &[]);

        for chunk in &chunks {
            let top = chunk.elements()[0].top();
            prop_assert!(chunk.elements().iter().all(|e| e.top() == top));
        }
        prop_assert!(chunks.len() >= rows.len());
    }
}
