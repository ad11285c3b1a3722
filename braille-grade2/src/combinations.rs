//! The flat multi-cell symbol and initial-letter contraction table, plus
//! the residual hyphen cleanup that must follow it.

use crate::tables::COMBINATIONS;
use braille_stream::{Cell, CellClass, CellStream, Pass, EMPTY_CELL};

fn expand(text: &str, class: CellClass) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut run = String::new();
    for c in text.chars() {
        if c == EMPTY_CELL {
            if !run.is_empty() {
                cells.push(Cell::Text {
                    text: std::mem::take(&mut run),
                    class,
                });
            }
            cells.push(Cell::Empty);
        } else {
            run.push(c);
        }
    }
    if !run.is_empty() {
        cells.push(Cell::Text { text: run, class });
    }
    cells
}

/// Applies the ordered substitution table, longest match first. Every
/// entry is unconditional; the context-sensitive homographs were settled
/// by the earlier passes.
pub struct SymbolCombinations;

impl Pass for SymbolCombinations {
    fn name(&self) -> &'static str {
        "symbol-combinations"
    }

    fn run(&self, stream: &mut CellStream) {
        for (pattern, text, class) in COMBINATIONS.iter() {
            let matches = stream.find_seq(pattern);
            for i in matches.into_iter().rev() {
                stream.replace(i..i + pattern.len(), expand(text, *class));
            }
        }
    }
}

/// Every dash spelling ending in `⠤` is consumed by the table above, so
/// the remaining `⠤` cells are plain hyphens.
pub struct ResidualHyphen;

impl Pass for ResidualHyphen {
    fn name(&self) -> &'static str {
        "residual-hyphen"
    }

    fn run(&self, stream: &mut CellStream) {
        let matches: Vec<usize> = (0..stream.len())
            .filter(|&i| stream.cells()[i].is_pattern('⠤'))
            .collect();
        for i in matches.into_iter().rev() {
            stream.replace(i..i + 1, [Cell::punct("-")]);
        }
    }
}
