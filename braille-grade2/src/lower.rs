//! The lower-cell contractions and their punctuation homographs.
//!
//! Lower cells are the most overloaded spellings in Grade II: `⠆` is the
//! wordsign be, the doubled letters bb, a semicolon, and the second cell
//! of every typeform symbol indicator. These passes peel the readings off
//! in the documented order, always leaving unresolved cells for the later
//! passes rather than guessing.

use crate::charset::{is_letterish, is_letterish_or_ambiguous, TYPEFORM_FIRST, TYPEFORM_SECOND};
use crate::standalone::{is_standalone, CLOSE_TEXT, OPEN_TEXT};
use crate::tables::BE_WORDS;
use braille_stream::{Cell, CellStream, Pass};

fn after_typeform_first(stream: &CellStream, i: usize) -> bool {
    i > 0
        && stream.cells()[i - 1]
            .pattern()
            .map_or(false, |c| TYPEFORM_FIRST.contains(&c))
}

fn text_in(cell: &Cell, set: &[&str]) -> bool {
    matches!(cell, Cell::Text { text, .. } if set.contains(&text.as_str()))
}

/// The "be-" words and were: standalone, and never directly after a
/// typeform first cell, whose second cell they share.
pub struct BeWords;

impl Pass for BeWords {
    fn name(&self) -> &'static str {
        "be-words"
    }

    fn run(&self, stream: &mut CellStream) {
        for (pattern, word) in BE_WORDS.iter() {
            let matches = stream.find_seq(pattern);
            for i in matches.into_iter().rev() {
                if is_standalone(stream, i, i + pattern.len()) && !after_typeform_first(stream, i) {
                    stream.replace(i..i + pattern.len(), [Cell::word(*word)]);
                }
            }
        }
    }
}

const PUNCT_BEFORE_TEXT: [&str; 7] = ["!", "?", "’", "—", "–", "_", "-"];

/// The lower wordsigns his and was against the question mark and closing
/// double quote. A letter or sentence punctuation on the left forces the
/// punctuation reading; a standalone position with closing context on the
/// right forces the wordsign; anything else is left for the later passes
/// (the residual `⠦` cells become opening double quotes).
pub struct LowerWordsigns;

impl LowerWordsigns {
    fn resolve(&self, stream: &mut CellStream, pattern: char, word: &str, punct: &str) {
        let matches: Vec<usize> = (0..stream.len())
            .filter(|&i| stream.cells()[i].is_pattern(pattern))
            .collect();
        for i in matches.into_iter().rev() {
            if i == 0 {
                continue;
            }
            let prev = &stream.cells()[i - 1];
            if is_letterish_or_ambiguous(prev)
                || prev.is_pattern('⠄')
                || text_in(prev, &PUNCT_BEFORE_TEXT)
            {
                stream.replace(i..i + 1, [Cell::punct(punct)]);
                continue;
            }
            if i == stream.len() - 1 {
                stream.replace(i..i + 1, [Cell::punct(punct)]);
                continue;
            }
            let next = &stream.cells()[i + 1];
            let closing_right = next.is_empty_cell()
                || matches!(next, Cell::Break(_))
                || next
                    .pattern()
                    .map_or(false, |c| ['⠲', '⠂', '⠒', '⠆', '⠦', '⠖', '⠴'].contains(&c))
                || TYPEFORM_FIRST
                    .iter()
                    .any(|&f| stream.matches_seq(i + 1, &[f, '⠄']))
                || text_in(next, &CLOSE_TEXT);
            let open_left = prev.is_empty_cell()
                || matches!(prev, Cell::Break(_))
                || prev.is_pattern('⠦')
                || prev.is_pattern('⠠')
                || text_in(prev, &OPEN_TEXT);
            if closing_right && open_left {
                stream.replace(i..i + 1, [Cell::word(word)]);
            }
        }
    }
}

impl Pass for LowerWordsigns {
    fn name(&self) -> &'static str {
        "lower-wordsigns"
    }

    fn run(&self, stream: &mut CellStream) {
        self.resolve(stream, '⠦', "his", "?");
        self.resolve(stream, '⠴', "was", "”");
        // the remaining ⠦ cells can only open a quotation
        let matches: Vec<usize> = (0..stream.len())
            .filter(|&i| stream.cells()[i].is_pattern('⠦'))
            .collect();
        for i in matches.into_iter().rev() {
            stream.replace(i..i + 1, [Cell::punct("“")]);
        }
    }
}

const DOUBLE_LETTERS: [(char, &str, &str); 5] = [
    ('⠆', "bb", ";"),
    ('⠒', "cc", ":"),
    ('⠖', "ff", "!"),
    ('⠶', "gg", "'"),
    ('⠂', "ea", ","),
];

/// Doubled letters require letter context on both sides; the punctuation
/// reading requires letter-like context before only. Everything else is
/// left alone: a `⠒` with no letters nearby is the con groupsign, and the
/// `⠆` cells are settled by the be pass.
pub struct DoubleLetterGroupsigns;

impl Pass for DoubleLetterGroupsigns {
    fn name(&self) -> &'static str {
        "double-letter-groupsigns"
    }

    fn run(&self, stream: &mut CellStream) {
        for (pattern, double, punct) in DOUBLE_LETTERS {
            let matches: Vec<usize> = (0..stream.len())
                .filter(|&i| stream.cells()[i].is_pattern(pattern))
                .collect();
            for i in matches.into_iter().rev() {
                if i == 0 || i == stream.len() - 1 {
                    continue;
                }
                let prev = &stream.cells()[i - 1];
                let next = &stream.cells()[i + 1];
                if is_letterish(prev) && is_letterish(next) {
                    stream.replace(i..i + 1, [Cell::group(double)]);
                } else if is_letterish(prev)
                    || prev.is_pattern('⠄')
                    || text_in(prev, &[")", "}", "]", "?", "!"])
                {
                    stream.replace(i..i + 1, [Cell::punct(punct)]);
                }
            }
        }
    }
}

/// dis begins a word; the period ends one.
pub struct DisPeriod;

impl Pass for DisPeriod {
    fn name(&self) -> &'static str {
        "dis-period"
    }

    fn run(&self, stream: &mut CellStream) {
        let matches: Vec<usize> = (0..stream.len())
            .filter(|&i| stream.cells()[i].is_pattern('⠲'))
            .collect();
        for i in matches.into_iter().rev() {
            let word_start = i == 0 || {
                let prev = &stream.cells()[i - 1];
                prev.is_empty_cell()
                    || matches!(prev, Cell::Break(_))
                    || prev.is_pattern('⠠')
                    || text_in(prev, &OPEN_TEXT)
                    || TYPEFORM_FIRST.iter().any(|&f| {
                        TYPEFORM_SECOND
                            .iter()
                            .any(|&s| stream.matches_seq_before(i, &[f, s]))
                    })
            };
            let cell = if word_start {
                Cell::group("dis")
            } else {
                Cell::punct(".")
            };
            stream.replace(i..i + 1, [cell]);
        }
    }
}

/// The residual `⠆` cells read as be once every other use is excluded.
pub struct ResidualBe;

impl Pass for ResidualBe {
    fn name(&self) -> &'static str {
        "residual-be"
    }

    fn run(&self, stream: &mut CellStream) {
        let matches: Vec<usize> = (0..stream.len())
            .filter(|&i| stream.cells()[i].is_pattern('⠆'))
            .collect();
        for i in matches.into_iter().rev() {
            if !after_typeform_first(stream, i) {
                stream.replace(i..i + 1, [Cell::word("be")]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn be_words_resolve_standalone_only() {
        let mut stream = CellStream::from_text("⠀⠆⠉⠀⠁⠆⠉⠀").unwrap();
        BeWords.run(&mut stream);
        assert_eq!(stream.plain_text(), " because ⠁⠆⠉  ");
    }

    #[test]
    fn were_is_rejected_after_a_typeform_first_cell() {
        // ⠨⠶ is the italic passage indicator, not ⠨ + were
        let mut stream = CellStream::from_text("⠀⠶⠀⠨⠶⠀").unwrap();
        BeWords.run(&mut stream);
        assert_eq!(stream.plain_text(), " were ⠨⠶  ");
    }

    #[test]
    fn lower_wordsign_after_letter_is_punctuation() {
        let mut stream = CellStream::from_text("⠁⠦⠀⠁⠴⠀").unwrap();
        LowerWordsigns.run(&mut stream);
        assert_eq!(stream.plain_text(), "⠁? ⠁”  ");
    }

    #[test]
    fn lower_wordsign_standalone_is_the_word() {
        let mut stream = CellStream::from_text("⠀⠦⠀⠮⠀⠴⠲").unwrap();
        LowerWordsigns.run(&mut stream);
        assert_eq!(stream.plain_text(), " his ⠮ was⠲ ");
    }

    #[test]
    fn residual_open_quote_before_letters() {
        let mut stream = CellStream::from_text("⠀⠦⠁⠃").unwrap();
        LowerWordsigns.run(&mut stream);
        assert_eq!(stream.plain_text(), " “⠁⠃ ");
    }

    #[test]
    fn doubled_letters_between_letters() {
        let mut stream = CellStream::from_text("⠗⠁⠆⠭⠀").unwrap();
        DoubleLetterGroupsigns.run(&mut stream);
        assert_eq!(stream.plain_text(), "⠗⠁bb⠭  ");
    }

    #[test]
    fn punctuation_after_letter_without_letter_following() {
        let mut stream = CellStream::from_text("⠁⠆⠀⠁⠒⠀⠁⠖⠀").unwrap();
        DoubleLetterGroupsigns.run(&mut stream);
        assert_eq!(stream.plain_text(), "⠁; ⠁: ⠁!  ");
    }

    #[test]
    fn typeform_indicator_cells_are_left_alone() {
        let mut stream = CellStream::from_text("⠀⠨⠂⠁⠀").unwrap();
        DoubleLetterGroupsigns.run(&mut stream);
        assert_eq!(stream.pattern_at(2), Some('⠂'));
    }

    #[test]
    fn dis_at_word_start_period_after_letters() {
        let mut stream = CellStream::from_text("⠀⠲⠁⠃⠲⠀").unwrap();
        DisPeriod.run(&mut stream);
        assert_eq!(stream.plain_text(), " dis⠁⠃.  ");
    }

    #[test]
    fn residual_be_avoids_typeform_indicators() {
        let mut stream = CellStream::from_text("⠆⠀⠨⠆⠀").unwrap();
        ResidualBe.run(&mut stream);
        assert_eq!(stream.plain_text(), "be ⠨⠆  ");
    }
}
