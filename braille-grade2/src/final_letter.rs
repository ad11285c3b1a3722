//! The final-letter groupsigns that double as printed suffixes.
//!
//! less, ness and sion can form whole words in print, so their braille
//! spellings never designate whole words; they resolve only directly after
//! a letter. ness shares its first cell with the Grade-I indicators and
//! must therefore resolve before the Grade-I pass runs.

use crate::charset::is_letterish_or_ambiguous;
use braille_stream::{Cell, CellStream, Pass};

const SUFFIXES: [(&[char], &str); 3] = [
    (&['⠨', '⠎'], "less"),
    (&['⠰', '⠎'], "ness"),
    (&['⠨', '⠝'], "sion"),
];

pub struct FinalLetterGroupsigns;

impl Pass for FinalLetterGroupsigns {
    fn name(&self) -> &'static str {
        "final-letter-groupsigns"
    }

    fn run(&self, stream: &mut CellStream) {
        for (pattern, suffix) in SUFFIXES {
            let matches = stream.find_seq(pattern);
            for i in matches.into_iter().rev() {
                if i > 0 && is_letterish_or_ambiguous(&stream.cells()[i - 1]) {
                    stream.replace(i..i + 2, [Cell::suffix(suffix)]);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braille_stream::CellStreamDisplay;

    fn run(text: &str) -> CellStream {
        let mut stream = CellStream::from_text(text).unwrap();
        FinalLetterGroupsigns.run(&mut stream);
        stream
    }

    #[test]
    fn resolves_after_a_letter() {
        // hopeless: h-o-p-e + less
        let stream = run("⠓⠕⠏⠑⠨⠎");
        let display = CellStreamDisplay::new(&stream).with_classes();
        insta::assert_snapshot!(display.to_string(), @r###"
        ⠓  ⠕  ⠏  ⠑  less  _
                    ╰FinalLetterGroupsign
        "###);
    }

    #[test]
    fn left_alone_without_a_preceding_letter() {
        // word-initial ⠰⠎ stays for the Grade-I symbol pass
        let stream = run("⠀⠰⠎⠀");
        assert_eq!(stream.pattern_at(1), Some('⠰'));
        assert_eq!(stream.pattern_at(2), Some('⠎'));
    }

    #[test]
    fn resolves_all_three_suffixes() {
        let stream = run("⠁⠰⠎⠀⠁⠨⠎⠀⠁⠨⠝");
        assert_eq!(stream.plain_text(), "⠁ness ⠁less ⠁sion ");
    }
}
