//! Grade-I passage, word and symbol resolution.
//!
//! A Grade-I indicator switches a span back to one-cell-per-letter
//! reading. Passages run from `⠰⠰⠰` to the terminator `⠰⠄`; words run
//! from `⠰⠰` to the first empty cell, terminator or hyphen/dash; the
//! symbol indicator `⠰` covers one following cell, with a small ambiguity
//! table against the final-letter groupsigns that share its spelling.
//!
//! Malformed spans never abort the pipeline: an unterminated passage or
//! word resolves through end-of-document with a transcription note at the
//! indicator position, and an unrecognized cell after the symbol indicator
//! produces a note while the cell itself is preserved unresolved.

use crate::charset::is_letterish;
use crate::tables::{grade1_punct, grade1_suffix, letter_text};
use braille_stream::{Cell, CellStream, Pass};

pub const PASSAGE_NOTE: &str = "[Transcription note: a grade I passage indicator was located here, \
     but no grade I terminator was found after it.]";

pub const SYMBOL_NOTE: &str = "[Transcription note: a grade I symbol character was found here, but \
     the following character was not recognized as a letter, and so could not be transcribed in \
     grade I.]";

const PASSAGE: [char; 3] = ['⠰', '⠰', '⠰'];
const WORD: [char; 2] = ['⠰', '⠰'];
const TERMINATOR: [char; 2] = ['⠰', '⠄'];

/// One-cell translation inside a Grade-I span. Cells outside the Grade-I
/// alphabet pass through unchanged; the super/subscript second cells keep
/// their indicator spelling for the later merge pass.
fn translate(cells: &[Cell]) -> Vec<Cell> {
    let mut out = Vec::with_capacity(cells.len());
    for cell in cells {
        match cell.pattern() {
            Some(c @ ('⠔' | '⠢')) => {
                out.push(Cell::Pattern('⠰'));
                out.push(Cell::Pattern(c));
            }
            Some(c) => {
                if let Some(letter) = letter_text(c) {
                    out.push(Cell::letter(letter));
                } else if let Some(punct) = grade1_punct(c) {
                    out.push(Cell::punct(punct));
                } else {
                    out.push(cell.clone());
                }
            }
            None => out.push(cell.clone()),
        }
    }
    out
}

/// The terminators that end a Grade-I word, searched in stream order. Only
/// the explicit terminator is consumed; every other boundary cell stays.
fn word_end(stream: &CellStream, from: usize) -> (usize, usize) {
    for j in from..stream.len() {
        if stream.matches_seq(j, &TERMINATOR) {
            return (j, 2);
        }
        let cell = &stream.cells()[j];
        if cell.is_empty_cell()
            || matches!(cell, Cell::Break(_))
            || stream.matches_seq(j, &['⠐', '⠠', '⠤'])
            || stream.matches_seq(j, &['⠠', '⠤'])
            || stream.matches_seq(j, &['⠨', '⠤'])
            || cell.is_pattern('⠤')
        {
            return (j, 0);
        }
    }
    (stream.len(), 0)
}

pub struct GradeOne;

impl GradeOne {
    fn resolve_passages(&self, stream: &mut CellStream) {
        let matches = stream.find_seq(&PASSAGE);
        for i in matches.into_iter().rev() {
            match stream.find_seq_from(i + 3, &TERMINATOR) {
                Some(end) => {
                    let translated = translate(&stream.cells()[i + 3..end]);
                    stream.replace(i..end + 2, translated);
                }
                None => {
                    let mut cells = vec![Cell::Note(PASSAGE_NOTE.to_string()), Cell::Empty];
                    cells.extend(translate(&stream.cells()[i + 3..]));
                    let len = stream.len();
                    stream.replace(i..len, cells);
                }
            }
        }
    }

    fn resolve_words(&self, stream: &mut CellStream) {
        let matches = stream.find_seq(&WORD);
        for i in matches.into_iter().rev() {
            let (end, terminator_len) = word_end(stream, i + 2);
            let translated = translate(&stream.cells()[i + 2..end]);
            stream.replace(i..end + terminator_len, translated);
        }
    }

    fn resolve_symbols(&self, stream: &mut CellStream) {
        let matches: Vec<usize> = (0..stream.len())
            .filter(|&i| stream.cells()[i].is_pattern('⠰'))
            .collect();
        for i in matches.into_iter().rev() {
            let next = stream.get(i + 1).cloned();
            let next_pattern = next.as_ref().and_then(Cell::pattern);
            match next_pattern {
                // super/subscript indicator second cells; merged later
                Some('⠔' | '⠢') => {}
                Some(c) => {
                    if let Some(suffix) = grade1_suffix(c) {
                        let after_letter = i > 0
                            && (is_letterish(&stream.cells()[i - 1])
                                || stream.cells()[i - 1].is_pattern('⠤'));
                        // every ambiguous cell is also a plain letter
                        let cell = match letter_text(c) {
                            Some(letter) if !after_letter => Cell::letter(letter),
                            _ => Cell::suffix(suffix),
                        };
                        stream.replace(i..i + 2, [cell]);
                    } else if let Some(letter) = letter_text(c) {
                        stream.replace(i..i + 2, [Cell::letter(letter)]);
                    } else if let Some(punct) = grade1_punct(c) {
                        stream.replace(i..i + 2, [Cell::punct(punct)]);
                    } else {
                        stream.replace(
                            i..i + 1,
                            [Cell::Note(SYMBOL_NOTE.to_string()), Cell::Empty],
                        );
                    }
                }
                None => {
                    stream.replace(
                        i..i + 1,
                        [Cell::Note(SYMBOL_NOTE.to_string()), Cell::Empty],
                    );
                }
            }
        }
    }
}

impl Pass for GradeOne {
    fn name(&self) -> &'static str {
        "grade-1"
    }

    fn run(&self, stream: &mut CellStream) {
        self.resolve_passages(stream);
        self.resolve_words(stream);
        self.resolve_symbols(stream);
    }
}
