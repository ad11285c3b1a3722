//! The tail of the engine: super/subscript indicator merging, the residual
//! in groupsign, and the final one-to-one letter table.

use crate::tables::single_cell;
use braille_stream::{Cell, CellStream, IndicatorKind, Pass};

/// Merges `⠰⠢` and `⠰⠔` into one indicator token scoping exactly the next
/// cell. Must run before the residual `⠔` cleanup below, which would
/// otherwise read the superscript second cell as the in groupsign.
pub struct SubSuperIndicators;

impl Pass for SubSuperIndicators {
    fn name(&self) -> &'static str {
        "sub-super-indicators"
    }

    fn run(&self, stream: &mut CellStream) {
        for (pattern, kind) in [
            (['⠰', '⠢'], IndicatorKind::Subscript),
            (['⠰', '⠔'], IndicatorKind::Superscript),
        ] {
            let matches = stream.find_seq(&pattern);
            for i in matches.into_iter().rev() {
                stream.replace(i..i + 2, [Cell::Indicator(kind)]);
            }
        }
    }
}

/// The final one-to-one translation. The remaining `⠔` cells are the in
/// groupsign; every other still-unresolved cell maps through the single
/// cell table. Cells outside the table (stray terminator halves, OCR
/// misreads) stay unresolved and render as their raw braille characters.
pub struct SingleCellTable;

impl Pass for SingleCellTable {
    fn name(&self) -> &'static str {
        "single-cell-table"
    }

    fn run(&self, stream: &mut CellStream) {
        let in_matches: Vec<usize> = (0..stream.len())
            .filter(|&i| stream.cells()[i].is_pattern('⠔'))
            .collect();
        for i in in_matches.into_iter().rev() {
            stream.replace(i..i + 1, [Cell::group("in")]);
        }

        let matches: Vec<(usize, &'static str, braille_stream::CellClass)> = stream
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| {
                cell.pattern()
                    .and_then(single_cell)
                    .map(|(text, class)| (i, text, class))
            })
            .collect();
        for (i, text, class) in matches.into_iter().rev() {
            stream.replace(
                i..i + 1,
                [Cell::Text {
                    text: text.to_string(),
                    class,
                }],
            );
        }
    }
}
