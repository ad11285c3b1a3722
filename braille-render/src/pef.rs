//! The embosser-ready PEF layout engine.
//!
//! Consumes the structural-pass stream (raw cells, empty cells and break
//! markers, before any letter disambiguation) and reflows it into rows bounded by
//! `columns_per_page` and pages bounded by `rows_per_page`. Rows, pages
//! and sections are derived, never authored: they are recomputed
//! deterministically from the marker stream and the two configuration
//! values. Markup carries zero width; only braille cell counts matter.

use braille_stream::{BreakKind, Cell, CellStream, EMPTY_CELL};
use serde::{Deserialize, Serialize};

/// Embosser page geometry. Any positive integers are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub columns_per_page: usize,
    pub rows_per_page: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            columns_per_page: 40,
            rows_per_page: 25,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns_per_page = columns;
        self
    }

    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows_per_page = rows;
        self
    }
}

/// One embosser page: rows of raw braille text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub rows: Vec<String>,
}

/// A section delimited by explicit section-break markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub pages: Vec<Page>,
}

/// A fully derived document ready for XML serialization.
#[derive(Debug, Clone)]
pub struct PefDocument {
    sections: Vec<Section>,
    columns_per_page: usize,
    rows_per_page: usize,
}

struct Builder {
    columns: usize,
    rows_per_page: usize,
    sections: Vec<Section>,
    pages: Vec<Page>,
    rows: Vec<String>,
    row: String,
    row_width: usize,
    gap: usize,
    word: String,
    word_len: usize,
}

impl Builder {
    fn new(columns: usize, rows_per_page: usize) -> Self {
        Builder {
            columns,
            rows_per_page,
            sections: Vec::new(),
            pages: Vec::new(),
            rows: Vec::new(),
            row: String::new(),
            row_width: 0,
            gap: 0,
            word: String::new(),
            word_len: 0,
        }
    }

    fn push_cell(&mut self, c: char) {
        self.word.push(c);
        self.word_len += 1;
    }

    /// Greedy packer: the pending word goes on the current row if it fits
    /// together with its separating empty cells, else a new row begins.
    /// A word longer than a full row is hard-split at the column limit.
    fn flush_word(&mut self) {
        if self.word_len == 0 {
            return;
        }
        let word = std::mem::take(&mut self.word);
        let mut remaining: Vec<char> = word.chars().collect();
        self.word_len = 0;
        while !remaining.is_empty() {
            let chunk_len = remaining.len().min(self.columns);
            let chunk: String = remaining.drain(..chunk_len).collect();
            let sep = if self.row_width == 0 {
                self.gap
            } else {
                self.gap.max(1)
            };
            if self.row_width + sep + chunk_len <= self.columns {
                for _ in 0..sep {
                    self.row.push(EMPTY_CELL);
                }
                self.row.push_str(&chunk);
                self.row_width += sep + chunk_len;
            } else {
                self.finish_row();
                self.row.push_str(&chunk);
                self.row_width = chunk_len;
            }
            self.gap = 0;
        }
    }

    fn finish_row(&mut self) {
        self.rows.push(std::mem::take(&mut self.row));
        self.row_width = 0;
        self.gap = 0;
        if self.rows.len() == self.rows_per_page {
            self.finish_page();
        }
    }

    /// Explicit page breaks are never double-inserted: closing an already
    /// empty page is a no-op, so an authored break landing exactly on an
    /// automatic one produces a single boundary.
    fn finish_page(&mut self) {
        if !self.rows.is_empty() {
            self.pages.push(Page {
                rows: std::mem::take(&mut self.rows),
            });
        }
    }

    fn finish_section(&mut self) {
        if !self.pages.is_empty() {
            self.sections.push(Section {
                pages: std::mem::take(&mut self.pages),
            });
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush_word();
        if self.row_width > 0 || (self.rows.is_empty() && self.pages.is_empty() && self.sections.is_empty())
        {
            self.finish_row();
        }
        self.finish_page();
        self.finish_section();
        self.sections
    }
}

impl PefDocument {
    /// Reflow the structural stream into sections, pages and rows.
    pub fn layout(stream: &CellStream, config: &LayoutConfig) -> Self {
        let columns = config.columns_per_page.max(1);
        let rows_per_page = config.rows_per_page.max(1);
        let mut builder = Builder::new(columns, rows_per_page);
        for cell in stream.cells() {
            match cell {
                Cell::Pattern(c) => builder.push_cell(*c),
                Cell::Empty => {
                    builder.flush_word();
                    builder.gap += 1;
                }
                Cell::Break(BreakKind::Tab) => {
                    builder.flush_word();
                    builder.gap += 2;
                }
                Cell::Break(BreakKind::Line) => {
                    builder.flush_word();
                    builder.finish_row();
                }
                Cell::Break(BreakKind::Paragraph) => {
                    builder.flush_word();
                    builder.finish_row();
                    builder.gap = 2;
                }
                Cell::Break(BreakKind::Page) => {
                    builder.flush_word();
                    builder.finish_row();
                    builder.finish_page();
                }
                Cell::Break(BreakKind::Section) => {
                    builder.flush_word();
                    builder.finish_row();
                    builder.finish_page();
                    builder.finish_section();
                }
                // the embosser stream carries no resolved cells
                Cell::Text { .. } | Cell::Indicator(_) | Cell::Note(_) => {}
            }
        }
        PefDocument {
            sections: builder.finish(),
            columns_per_page: columns,
            rows_per_page,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Serialize with the fixed PEF 2008-1 header block.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str("<pef version=\"2008-1\" xmlns=\"http://www.daisy.org/ns/2008/pef\">\n");
        out.push_str("\t<head>\n");
        out.push_str("\t\t<meta xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\n");
        out.push_str("\t\t\t<dc:format>application/x-pef+xml</dc:format>\n");
        out.push_str("\t\t\t<dc:identifier>org.pef-format.00002</dc:identifier>\n");
        out.push_str("\t\t</meta>\n");
        out.push_str("\t</head>\n");
        out.push_str("\t<body>\n");
        out.push_str(&format!(
            "\t\t<volume cols=\"{}\" rows=\"{}\" rowgap=\"0\" duplex=\"false\">\n",
            self.columns_per_page, self.rows_per_page
        ));
        for section in &self.sections {
            out.push_str("\t\t\t<section>\n");
            for page in &section.pages {
                out.push_str("\t\t\t\t<page>\n");
                for row in &page.rows {
                    out.push_str("\t\t\t\t\t<row>");
                    out.push_str(row);
                    out.push_str("</row>\n");
                }
                out.push_str("\t\t\t\t</page>\n");
            }
            out.push_str("\t\t\t</section>\n");
        }
        out.push_str("\t\t</volume>\n");
        out.push_str("\t</body>\n");
        out.push_str("</pef>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braille_grade2::passes;

    fn layout(text: &str, config: &LayoutConfig) -> PefDocument {
        let mut stream = CellStream::from_text(text).unwrap();
        passes::structural().run(&mut stream);
        PefDocument::layout(&stream, config)
    }

    fn all_rows(doc: &PefDocument) -> Vec<String> {
        doc.sections()
            .iter()
            .flat_map(|s| s.pages.iter())
            .flat_map(|p| p.rows.clone())
            .collect()
    }

    #[test]
    fn twelve_cells_in_five_columns_split_5_5_2() {
        let doc = layout("⠁⠃⠉⠙⠑⠋⠛⠓⠊⠚⠅⠇", &LayoutConfig::new().with_columns(5));
        let rows = all_rows(&doc);
        let widths: Vec<usize> = rows.iter().map(|r| r.chars().count()).collect();
        assert_eq!(widths, vec![5, 5, 2]);
    }

    #[test]
    fn words_pack_greedily_with_single_cell_gaps() {
        let doc = layout("⠁⠃⠀⠉⠙⠀⠑", &LayoutConfig::new().with_columns(5));
        assert_eq!(all_rows(&doc), vec!["⠁⠃⠀⠉⠙", "⠑"]);
    }

    #[test]
    fn every_row_fits_the_column_limit() {
        let doc = layout(
            "⠁⠃⠉⠀⠙⠀⠑⠋⠛⠓⠀⠊⠀⠚⠅⠀⠇⠍⠝⠕⠏⠟⠗⠀⠎",
            &LayoutConfig::new().with_columns(6),
        );
        for row in all_rows(&doc) {
            assert!(row.chars().count() <= 6, "row too wide: {row}");
        }
    }

    #[test]
    fn pages_fill_to_exactly_rows_per_page() {
        // seven explicit rows at three rows per page: 3, 3, 1
        let text = "⠁⠸⠡⠇⠔⠑⠀⠃⠸⠡⠇⠔⠑⠀⠉⠸⠡⠇⠔⠑⠀⠙⠸⠡⠇⠔⠑⠀⠑⠸⠡⠇⠔⠑⠀⠋⠸⠡⠇⠔⠑⠀⠛";
        let doc = layout(text, &LayoutConfig::new().with_rows(3));
        let pages: Vec<usize> = doc.sections()[0].pages.iter().map(|p| p.rows.len()).collect();
        assert_eq!(pages, vec![3, 3, 1]);
    }

    #[test]
    fn explicit_page_breaks_are_preserved_and_reset_the_counter() {
        let text = "⠁⠸⠡⠏⠁⠛⠑⠀⠃⠸⠡⠇⠔⠑⠀⠉";
        let doc = layout(text, &LayoutConfig::new().with_rows(3));
        let pages: Vec<Vec<String>> = doc.sections()[0]
            .pages
            .iter()
            .map(|p| p.rows.clone())
            .collect();
        assert_eq!(pages, vec![vec!["⠁".to_string()], vec!["⠃".to_string(), "⠉".to_string()]]);
    }

    #[test]
    fn section_breaks_produce_new_sections() {
        let doc = layout("⠁⠸⠡⠎⠃⠅⠏⠁⠛⠑⠀⠃", &LayoutConfig::default());
        assert_eq!(doc.sections().len(), 2);
        assert_eq!(doc.sections()[0].pages[0].rows, vec!["⠁"]);
        assert_eq!(doc.sections()[1].pages[0].rows, vec!["⠃"]);
    }

    #[test]
    fn paragraphs_indent_and_tabs_widen() {
        let doc = layout("⠁⠸⠡⠏⠜⠀⠃⠸⠡⠞⠁⠃⠀⠉", &LayoutConfig::default());
        assert_eq!(all_rows(&doc), vec!["⠁", "⠀⠀⠃⠀⠀⠉"]);
    }

    #[test]
    fn the_xml_envelope_matches_the_container_format() {
        let doc = layout("⠁⠃⠉", &LayoutConfig::default());
        insta::assert_snapshot!(doc.to_xml(), @r###"
        <?xml version="1.0" encoding="UTF-8"?>
        <pef version="2008-1" xmlns="http://www.daisy.org/ns/2008/pef">
        	<head>
        		<meta xmlns:dc="http://purl.org/dc/elements/1.1/">
        			<dc:format>application/x-pef+xml</dc:format>
        			<dc:identifier>org.pef-format.00002</dc:identifier>
        		</meta>
        	</head>
        	<body>
        		<volume cols="40" rows="25" rowgap="0" duplex="false">
        			<section>
        				<page>
        					<row>⠁⠃⠉</row>
        				</page>
        			</section>
        		</volume>
        	</body>
        </pef>
        "###);
    }
}
