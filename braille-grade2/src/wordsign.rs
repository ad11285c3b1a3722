//! Wordsign/groupsign disambiguation by letter flanking, and the
//! standalone alphabetic wordsigns.

use crate::charset::is_letterish;
use crate::standalone::is_standalone;
use crate::tables::{ALPHABETIC_WORDSIGNS, STRONG_WORDSIGNS};
use braille_stream::{Cell, CellStream, Pass};

/// child/ch, shall/sh, this/th, which/wh, out/ou, still/st: a letter on
/// either side makes it the groupsign, since the wordsign must stand
/// alone.
pub struct StrongWordsigns;

impl Pass for StrongWordsigns {
    fn name(&self) -> &'static str {
        "strong-wordsigns"
    }

    fn run(&self, stream: &mut CellStream) {
        for (pattern, word, group) in STRONG_WORDSIGNS.iter() {
            let matches: Vec<usize> = (0..stream.len())
                .filter(|&i| stream.cells()[i].is_pattern(*pattern))
                .collect();
            for i in matches.into_iter().rev() {
                let flanked = (i > 0 && is_letterish(&stream.cells()[i - 1]))
                    || (i + 1 < stream.len() && is_letterish(&stream.cells()[i + 1]));
                let cell = if flanked {
                    Cell::group(*group)
                } else {
                    Cell::word(*word)
                };
                stream.replace(i..i + 1, [cell]);
            }
        }
    }
}

/// enough/en follows the same flanking rule, except that `⠢` directly
/// after `⠰` spells the subscript indicator and is skipped here.
pub struct EnoughEn;

impl Pass for EnoughEn {
    fn name(&self) -> &'static str {
        "enough-en"
    }

    fn run(&self, stream: &mut CellStream) {
        let matches: Vec<usize> = (0..stream.len())
            .filter(|&i| stream.cells()[i].is_pattern('⠢'))
            .collect();
        for i in matches.into_iter().rev() {
            if i > 0 && stream.cells()[i - 1].is_pattern('⠰') {
                continue;
            }
            let flanked = (i > 0 && is_letterish(&stream.cells()[i - 1]))
                || (i + 1 < stream.len() && is_letterish(&stream.cells()[i + 1]));
            let cell = if flanked {
                Cell::group("en")
            } else {
                Cell::word("enough")
            };
            stream.replace(i..i + 1, [cell]);
        }
    }
}

/// The alphabetic wordsigns resolve only when standalone; adjoined cells
/// fall through to the final letter table.
pub struct AlphabeticWordsigns;

impl Pass for AlphabeticWordsigns {
    fn name(&self) -> &'static str {
        "alphabetic-wordsigns"
    }

    fn run(&self, stream: &mut CellStream) {
        for (pattern, word) in ALPHABETIC_WORDSIGNS.iter() {
            let matches: Vec<usize> = (0..stream.len())
                .filter(|&i| stream.cells()[i].is_pattern(*pattern))
                .collect();
            for i in matches.into_iter().rev() {
                if is_standalone(stream, i, i + 1) {
                    stream.replace(i..i + 1, [Cell::word(*word)]);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flanked_cells_become_groupsigns() {
        // machine: m-a-ch-i-n-e
        let mut stream = CellStream::from_text("⠍⠁⠡⠊⠝⠑⠀").unwrap();
        StrongWordsigns.run(&mut stream);
        assert_eq!(stream.plain_text(), "⠍⠁ch⠊⠝⠑  ");
    }

    #[test]
    fn standalone_cells_become_wordsigns() {
        let mut stream = CellStream::from_text("⠀⠡⠀⠹⠀").unwrap();
        StrongWordsigns.run(&mut stream);
        assert_eq!(stream.plain_text(), " child this  ");
    }

    #[test]
    fn enough_skips_the_subscript_indicator() {
        let mut stream = CellStream::from_text("⠀⠢⠀⠰⠢⠀").unwrap();
        EnoughEn.run(&mut stream);
        assert_eq!(stream.plain_text(), " enough ⠰⠢  ");
    }

    #[test]
    fn en_between_letters() {
        let mut stream = CellStream::from_text("⠃⠢⠙⠀").unwrap();
        EnoughEn.run(&mut stream);
        assert_eq!(stream.plain_text(), "⠃en⠙  ");
    }

    #[test]
    fn alphabetic_wordsign_standalone_only() {
        let mut stream = CellStream::from_text("⠀⠺⠀⠺⠁⠀").unwrap();
        AlphabeticWordsigns.run(&mut stream);
        assert_eq!(stream.plain_text(), " will ⠺⠁  ");
    }

    #[test]
    fn standalone_acceptance_is_reflexive() {
        let mut stream = CellStream::from_text("⠀⠺⠀").unwrap();
        AlphabeticWordsigns.run(&mut stream);
        let once = stream.clone();
        AlphabeticWordsigns.run(&mut stream);
        assert_eq!(stream, once);
    }
}
