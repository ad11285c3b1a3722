//! Scanning-artifact cleanup.

use crate::tables::TRANSCRIBER_TYPEFORMS;
use braille_stream::{CellStream, Pass};

/// Two or more consecutive full cells signal a typo struck out on the
/// Perkins Brailler; the run collapses to nothing. A single full cell is
/// left alone, since it is the "for" wordsign. Runs before the
/// contraction passes so a typo never falsely matches a valid
/// contraction.
pub struct FullCellCollapse;

impl Pass for FullCellCollapse {
    fn name(&self) -> &'static str {
        "full-cell-collapse"
    }

    fn run(&self, stream: &mut CellStream) {
        let mut runs: Vec<(usize, usize)> = Vec::new();
        let mut i = 0;
        while i < stream.len() {
            if stream.cells()[i].is_pattern('⠿') {
                let start = i;
                while i < stream.len() && stream.cells()[i].is_pattern('⠿') {
                    i += 1;
                }
                if i - start >= 2 {
                    runs.push((start, i));
                }
            } else {
                i += 1;
            }
        }
        for (start, end) in runs.into_iter().rev() {
            stream.remove_range(start..end);
        }
    }
}

/// Drops the dot locator for mention and the transcriber-defined typeform
/// indicators from the print transcription. These cells stay in the
/// embosser stream, so this pass runs after the layout split.
pub struct MentionStrip;

impl Pass for MentionStrip {
    fn name(&self) -> &'static str {
        "mention-strip"
    }

    fn run(&self, stream: &mut CellStream) {
        let mut matches: Vec<(usize, usize)> = Vec::new();
        let mut i = 0;
        while i < stream.len() {
            if TRANSCRIBER_TYPEFORMS
                .iter()
                .any(|t| stream.matches_seq(i, t))
            {
                matches.push((i, 3));
                i += 3;
            } else if stream.matches_seq(i, &['⠨', '⠿']) {
                matches.push((i, 2));
                i += 2;
            } else {
                i += 1;
            }
        }
        for (start, len) in matches.into_iter().rev() {
            stream.remove_range(start..start + len);
        }
    }
}
