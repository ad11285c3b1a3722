//! Short-form whole-word contractions.

use crate::standalone::is_standalone;
use crate::tables::SHORTFORM_WORDS;
use braille_stream::{Cell, CellStream, Pass};

/// Multi-cell short-form words, accepted only when standalone. Matches are
/// rewritten back to front within each table entry so recorded offsets
/// survive the shrinking substitutions.
pub struct ShortFormWords;

impl Pass for ShortFormWords {
    fn name(&self) -> &'static str {
        "short-form-words"
    }

    fn run(&self, stream: &mut CellStream) {
        for (pattern, word) in SHORTFORM_WORDS.iter() {
            let matches = stream.find_seq(pattern);
            for i in matches.into_iter().rev() {
                if is_standalone(stream, i, i + pattern.len()) {
                    stream.replace(i..i + pattern.len(), [Cell::word(*word)]);
                }
            }
        }
    }
}
