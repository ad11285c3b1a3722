//! The capitalized lower wordsigns Was and His against their single-quote
//! homographs, and the apostrophe against the terminator second cell.
//!
//! `⠠⠴` reads as Was or as a closing single quote, `⠠⠦` as His or an
//! opening single quote. Was is decided on left context only and His on
//! right context only, and Was must run first: a His fallback quote could
//! otherwise be seeded next to a still-unresolved Was.

use crate::charset::INDICATOR_FIRST;
use crate::standalone::{standalone_after, standalone_before_excluding_capital};
use braille_stream::{Cell, CellStream, Pass};

pub struct CapitalizedWas;

impl Pass for CapitalizedWas {
    fn name(&self) -> &'static str {
        "capitalized-was"
    }

    fn run(&self, stream: &mut CellStream) {
        let matches = stream.find_seq(&['⠠', '⠴']);
        for i in matches.into_iter().rev() {
            let cell = if standalone_before_excluding_capital(stream, i) {
                Cell::word("Was")
            } else {
                Cell::punct("’")
            };
            stream.replace(i..i + 2, [cell]);
        }
    }
}

pub struct CapitalizedHis;

impl Pass for CapitalizedHis {
    fn name(&self) -> &'static str {
        "capitalized-his"
    }

    fn run(&self, stream: &mut CellStream) {
        let matches = stream.find_seq(&['⠠', '⠦']);
        for i in matches.into_iter().rev() {
            let cell = if standalone_after(stream, i + 2) {
                Cell::word("His")
            } else {
                Cell::punct("‘")
            };
            stream.replace(i..i + 2, [cell]);
        }
    }
}

/// `⠄` is the apostrophe, but also the second cell of every capitalization,
/// grade and typeform terminator; it resolves only when not preceded by an
/// indicator first cell.
pub struct Apostrophe;

impl Pass for Apostrophe {
    fn name(&self) -> &'static str {
        "apostrophe"
    }

    fn run(&self, stream: &mut CellStream) {
        let matches: Vec<usize> = (1..stream.len())
            .filter(|&i| stream.cells()[i].is_pattern('⠄'))
            .collect();
        for i in matches.into_iter().rev() {
            let preceded_by_indicator = stream.cells()[i - 1]
                .pattern()
                .map_or(false, |c| INDICATOR_FIRST.contains(&c));
            if !preceded_by_indicator {
                stream.replace(i..i + 1, [Cell::punct("’")]);
            }
        }
    }
}
