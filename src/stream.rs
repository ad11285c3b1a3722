//! The mutable cell stream and its splice operations.

use crate::cell::{Cell, EMPTY_CELL};
use crate::error::TranscribeError;
use std::ops::Range;

/// A predicted cell label from the classifier boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// A Unicode braille pattern (U+2800..U+28FF).
    Pattern(char),
    /// The designated empty-cell label.
    Empty,
}

/// An ordered, in-place mutable sequence of cells.
///
/// The stream is built once per input document, mutated by successive
/// disambiguation passes (each pass may shrink it by replacing N cells with
/// fewer resolved cells) and consumed exactly once by each renderer.
///
/// A trailing empty cell is appended on ingest so every pass has stable
/// right-context at document end; the print renderer trims it back out.
/// Within one pass, collected matches must be applied from the highest
/// offset to the lowest, since substitutions change the stream length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStream {
    cells: Vec<Cell>,
}

impl CellStream {
    /// Ingest a document from the classifier boundary as text, one braille
    /// pattern per character. Line feeds are review artifacts from the OCR
    /// output file and are skipped. Empty input is fatal.
    pub fn from_text(input: &str) -> Result<Self, TranscribeError> {
        let mut cells = Vec::new();
        for c in input.chars() {
            match c {
                '\n' | '\r' => {}
                EMPTY_CELL => cells.push(Cell::Empty),
                '\u{2800}'..='\u{28FF}' => cells.push(Cell::Pattern(c)),
                other => return Err(TranscribeError::InvalidLabel(other)),
            }
        }
        Self::from_cells(cells)
    }

    /// Ingest a document from an explicit label sequence.
    pub fn from_labels(
        labels: impl IntoIterator<Item = Label>,
    ) -> Result<Self, TranscribeError> {
        let cells = labels
            .into_iter()
            .map(|label| match label {
                Label::Pattern(c) => Cell::Pattern(c),
                Label::Empty => Cell::Empty,
            })
            .collect();
        Self::from_cells(cells)
    }

    fn from_cells(mut cells: Vec<Cell>) -> Result<Self, TranscribeError> {
        if cells.is_empty() {
            return Err(TranscribeError::EmptyInput);
        }
        // Stable right-context sentinel for every pass.
        cells.push(Cell::Empty);
        Ok(CellStream { cells })
    }

    /// Build a stream directly from cells, without the ingest sentinel.
    /// Intended for tests and for renderers reassembling partial streams.
    pub fn from_raw_cells(cells: Vec<Cell>) -> Self {
        CellStream { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The pattern character at `index`, if that cell is unresolved.
    pub fn pattern_at(&self, index: usize) -> Option<char> {
        self.cells.get(index).and_then(Cell::pattern)
    }

    /// True when the cells at `start` are exactly the given pattern
    /// sequence of unresolved cells.
    pub fn matches_seq(&self, start: usize, patterns: &[char]) -> bool {
        patterns.len() <= self.cells.len().saturating_sub(start)
            && patterns
                .iter()
                .enumerate()
                .all(|(offset, &p)| self.cells[start + offset].is_pattern(p))
    }

    /// True when the cells ending just before `end` are exactly the given
    /// pattern sequence. Used for left-context checks.
    pub fn matches_seq_before(&self, end: usize, patterns: &[char]) -> bool {
        end >= patterns.len() && self.matches_seq(end - patterns.len(), patterns)
    }

    /// Indices of every occurrence of the pattern sequence, in stream
    /// order. Matches never overlap: the scan resumes after each match.
    /// Passes that rewrite must apply matches from the last to the first.
    pub fn find_seq(&self, patterns: &[char]) -> Vec<usize> {
        let mut matches = Vec::new();
        if patterns.is_empty() || patterns.len() > self.cells.len() {
            return matches;
        }
        let mut i = 0;
        while i + patterns.len() <= self.cells.len() {
            if self.matches_seq(i, patterns) {
                matches.push(i);
                i += patterns.len();
            } else {
                i += 1;
            }
        }
        matches
    }

    /// First occurrence of the pattern sequence at or after `start`.
    pub fn find_seq_from(&self, start: usize, patterns: &[char]) -> Option<usize> {
        if patterns.is_empty() || patterns.len() > self.cells.len() {
            return None;
        }
        (start..=self.cells.len() - patterns.len()).find(|&i| self.matches_seq(i, patterns))
    }

    /// Replace the cells in `range` with the given cells.
    pub fn replace(&mut self, range: Range<usize>, with: impl IntoIterator<Item = Cell>) {
        self.cells.splice(range, with);
    }

    /// Remove the cells in `range`.
    pub fn remove_range(&mut self, range: Range<usize>) {
        self.cells.drain(range);
    }

    pub fn insert(&mut self, index: usize, cell: Cell) {
        self.cells.insert(index, cell);
    }

    /// Concatenated resolved text, with empty cells as spaces and unresolved
    /// patterns as their braille characters. Breaks, indicators and notes
    /// are omitted. Primarily for assertions.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for cell in &self.cells {
            match cell {
                Cell::Pattern(c) => out.push(*c),
                Cell::Empty => out.push(' '),
                Cell::Text { text, .. } => out.push_str(text),
                Cell::Break(_) | Cell::Indicator(_) | Cell::Note(_) => {}
            }
        }
        out
    }
}
