//! Debug display for cell streams, used pervasively by snapshot tests.

use crate::cell::Cell;
use crate::stream::CellStream;
use std::fmt::Write as _;
use unicode_width::UnicodeWidthStr;

/// Renders a stream as one line of cell tokens, optionally followed by one
/// annotation line per classified cell:
///
/// ```text
/// less  _  ⠁
/// ╰FinalLetterGroupsign
/// ```
pub struct CellStreamDisplay<'a> {
    stream: &'a CellStream,
    show_classes: bool,
}

const SPACE_PADDING: usize = 2;

fn cell_token(cell: &Cell) -> String {
    match cell {
        Cell::Pattern(c) => c.to_string(),
        Cell::Empty => "_".to_string(),
        Cell::Text { text, .. } => text.clone(),
        Cell::Break(kind) => format!("<{:?}>", kind).to_lowercase(),
        Cell::Indicator(kind) => format!("<{:?}>", kind).to_lowercase(),
        Cell::Note(_) => "[note]".to_string(),
    }
}

impl<'a> CellStreamDisplay<'a> {
    pub fn new(stream: &'a CellStream) -> Self {
        CellStreamDisplay {
            stream,
            show_classes: false,
        }
    }

    /// Takes self, enables the class annotation lines.
    pub fn with_classes(mut self) -> Self {
        self.show_classes = true;
        self
    }
}

impl<'a> std::fmt::Display for CellStreamDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cell_start_columns = Vec::new();
        let mut opening_line = String::new();
        let mut is_first = true;
        for cell in self.stream.cells() {
            if is_first {
                is_first = false;
            } else {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            cell_start_columns.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&cell_token(cell));
        }
        f.write_str(&opening_line)?;

        if self.show_classes {
            for (idx, cell) in self.stream.cells().iter().enumerate() {
                if let Some(class) = cell.class() {
                    f.write_char('\n')?;
                    for _ in 0..cell_start_columns[idx] {
                        f.write_char(' ')?;
                    }
                    write!(f, "╰{:?}", class)?;
                }
            }
        }

        Ok(())
    }
}
