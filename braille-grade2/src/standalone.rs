//! The shared standalone-boundary predicate.
//!
//! Several contraction classes (short-form words, lower wordsigns,
//! alphabetic wordsigns, the capitalized Was/His homographs) apply only
//! when the candidate match "stands alone": flanked on both sides by a
//! word or sentence boundary. Every pass consults this one implementation;
//! divergent per-pass boundary sets are the classic source of
//! mistranscription.
//!
//! A match is standalone when the cells immediately before it are absent
//! (document start) or drawn from the opening-boundary family (empty cell,
//! hyphen/dash, capitalization indicator, opening quotes and brackets, the
//! first cells of a typeform indicator), and the cells immediately after
//! it are absent (document end) or drawn from the closing-boundary family
//! (empty cell, hyphen/dash, sentence punctuation, closing quotes and
//! brackets, typeform terminators). Structural break markers separate
//! words the way their original trailing empty cells did, and boundary
//! context that earlier passes have already resolved to printed
//! punctuation participates through the resolved text sets below.

use braille_stream::{Cell, CellStream};

const OPEN_TRIPLES: [[char; 3]; 3] = [['⠠', '⠐', '⠣'], ['⠠', '⠨', '⠣'], ['⠠', '⠸', '⠣']];

const OPEN_PAIRS: [[char; 2]; 18] = [
    ['⠠', '⠦'],
    ['⠘', '⠦'],
    ['⠸', '⠦'],
    ['⠨', '⠆'],
    ['⠨', '⠂'],
    ['⠨', '⠶'],
    ['⠘', '⠆'],
    ['⠘', '⠂'],
    ['⠘', '⠶'],
    ['⠸', '⠆'],
    ['⠸', '⠂'],
    ['⠸', '⠶'],
    ['⠈', '⠆'],
    ['⠈', '⠂'],
    ['⠈', '⠶'],
    ['⠐', '⠣'],
    ['⠨', '⠣'],
    ['⠸', '⠣'],
];

const CLOSE_TRIPLES: [[char; 3]; 4] = [
    ['⠠', '⠐', '⠜'],
    ['⠠', '⠨', '⠜'],
    ['⠠', '⠸', '⠜'],
    ['⠐', '⠠', '⠤'],
];

const CLOSE_PAIRS: [[char; 2]; 13] = [
    ['⠠', '⠴'],
    ['⠘', '⠴'],
    ['⠸', '⠴'],
    ['⠐', '⠜'],
    ['⠨', '⠜'],
    ['⠸', '⠜'],
    ['⠐', '⠤'],
    ['⠠', '⠤'],
    ['⠨', '⠤'],
    ['⠨', '⠄'],
    ['⠘', '⠄'],
    ['⠸', '⠄'],
    ['⠈', '⠄'],
];

const CLOSE_SINGLES: [char; 9] = ['⠤', '⠲', '⠄', '⠂', '⠒', '⠆', '⠦', '⠖', '⠴'];

/// Resolved text accepted as opening context.
pub const OPEN_TEXT: [&str; 11] = ["—", "–", "-", "‐", "_", "‘", "“", "«", "(", "[", "{"];

/// Resolved text accepted as closing context.
pub const CLOSE_TEXT: [&str; 18] = [
    "—", "–", "-", "‐", "_", "’", "”", "»", ")", "]", "}", "?", "!", ".", "…", ",", ":", ";",
];

fn is_open_text(cell: &Cell) -> bool {
    matches!(cell, Cell::Text { text, .. } if OPEN_TEXT.contains(&text.as_str()))
}

fn is_close_text(cell: &Cell) -> bool {
    matches!(cell, Cell::Text { text, .. } if CLOSE_TEXT.contains(&text.as_str()))
}

fn before_impl(stream: &CellStream, start: usize, with_capital_and_quote: bool) -> bool {
    if start == 0 {
        return true;
    }
    if OPEN_TRIPLES.iter().any(|t| stream.matches_seq_before(start, t))
        || OPEN_PAIRS.iter().any(|p| stream.matches_seq_before(start, p))
    {
        return true;
    }
    let prev = &stream.cells()[start - 1];
    if prev.is_empty_cell() || prev.is_pattern('⠤') || matches!(prev, Cell::Break(_)) {
        return true;
    }
    if with_capital_and_quote && (prev.is_pattern('⠦') || prev.is_pattern('⠠') || is_open_text(prev))
    {
        return true;
    }
    false
}

/// Opening-boundary check for the cells before `start`.
pub fn standalone_before(stream: &CellStream, start: usize) -> bool {
    before_impl(stream, start, true)
}

/// The Was variant: a closing single quote is never preceded by a
/// capitalization indicator or an opening quote, so the left set drops
/// both. The asymmetry is intentional in the reference transcription.
pub fn standalone_before_excluding_capital(stream: &CellStream, start: usize) -> bool {
    before_impl(stream, start, false)
}

/// Closing-boundary check for the cells at and after `end`.
pub fn standalone_after(stream: &CellStream, end: usize) -> bool {
    if end >= stream.len() {
        return true;
    }
    if CLOSE_TRIPLES.iter().any(|t| stream.matches_seq(end, t))
        || CLOSE_PAIRS.iter().any(|p| stream.matches_seq(end, p))
    {
        return true;
    }
    let next = &stream.cells()[end];
    next.is_empty_cell()
        || matches!(next, Cell::Break(_))
        || next
            .pattern()
            .map_or(false, |c| CLOSE_SINGLES.contains(&c))
        || is_close_text(next)
}

/// True when the cells in `start..end` stand alone on both sides.
pub fn is_standalone(stream: &CellStream, start: usize, end: usize) -> bool {
    standalone_before(stream, start) && standalone_after(stream, end)
}
