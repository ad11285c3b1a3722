//! Numeric passage resolution.
//!
//! The numeric indicator `⠼` begins a run of digit-letters (a through j),
//! commas, periods and fraction slashes. The run ends at the first cell
//! outside that set, which is kept, or at end-of-document. Each run
//! resolves to a single digit-class cell.

use crate::tables::numeral_text;
use braille_stream::{Cell, CellStream, Pass};

pub struct NumericPassages;

impl Pass for NumericPassages {
    fn name(&self) -> &'static str {
        "numeric-passages"
    }

    fn run(&self, stream: &mut CellStream) {
        let matches: Vec<usize> = (0..stream.len())
            .filter(|&i| stream.cells()[i].is_pattern('⠼'))
            .collect();
        for i in matches.into_iter().rev() {
            let mut digits = String::new();
            let mut end = i + 1;
            while let Some(text) = stream.pattern_at(end).and_then(numeral_text) {
                digits.push_str(text);
                end += 1;
            }
            if digits.is_empty() {
                stream.remove_range(i..end);
            } else {
                stream.replace(i..end, [Cell::digit(digits)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braille_stream::CellClass;

    fn run(text: &str) -> CellStream {
        let mut stream = CellStream::from_text(text).unwrap();
        NumericPassages.run(&mut stream);
        stream
    }

    #[test]
    fn resolves_a_simple_number() {
        let stream = run("⠼⠁⠃⠉⠀⠮");
        assert_eq!(stream.plain_text(), "123 ⠮ ");
        assert_eq!(stream.get(0).unwrap().class(), Some(CellClass::Digit));
    }

    #[test]
    fn includes_decimal_points_commas_and_fractions() {
        let stream = run("⠼⠁⠂⠚⠚⠚⠲⠑⠀⠼⠁⡈⠃");
        assert_eq!(stream.plain_text(), "1,000.5 1/2 ");
    }

    #[test]
    fn run_ends_at_the_first_non_numeral_and_keeps_it() {
        let stream = run("⠼⠁⠃⠮⠀");
        assert_eq!(stream.plain_text(), "12⠮  ");
    }

    #[test]
    fn unterminated_run_resolves_to_document_end() {
        // the ingest sentinel is the only cell after the digits
        let stream = run("⠼⠊⠊");
        assert_eq!(stream.plain_text(), "99 ");
    }

    #[test]
    fn bare_indicator_disappears() {
        let stream = run("⠁⠼⠀");
        assert_eq!(stream.plain_text(), "⠁  ");
    }
}
