//! The printed-English RTF renderer.
//!
//! Serializes the resolved stream and its formatting spans into a
//! single-run RTF document. Special characters go through a fixed
//! literal-escape table; spans become balanced open/close escape pairs;
//! the deliberately appended trailing empty cell is trimmed back out.

use braille_stream::{BreakKind, Cell, CellStream};
use braille_typeform::{FormatKind, FormatSpan};
use serde::{Deserialize, Serialize};

/// Print-output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtfConfig {
    /// Font registered in the document font table.
    pub font: String,
}

impl Default for RtfConfig {
    fn default() -> Self {
        RtfConfig {
            font: "Ubuntu".to_string(),
        }
    }
}

impl RtfConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }
}

fn open_escape(kind: FormatKind) -> &'static str {
    match kind {
        FormatKind::Capital => "\\caps ",
        FormatKind::Italic => "\\i ",
        FormatKind::Bold => "\\b ",
        FormatKind::Underline => "\\ul ",
        FormatKind::Script => "{\\fs56 ",
        FormatKind::Subscript => "{\\sub ",
        FormatKind::Superscript => "{\\super ",
    }
}

fn close_escape(kind: FormatKind) -> &'static str {
    match kind {
        FormatKind::Capital => "\\caps0 ",
        FormatKind::Italic => "\\i0 ",
        FormatKind::Bold => "\\b0 ",
        FormatKind::Underline => "\\ul0 ",
        FormatKind::Script | FormatKind::Subscript | FormatKind::Superscript => "}",
    }
}

fn break_escape(kind: BreakKind) -> &'static str {
    match kind {
        BreakKind::Tab => "\\tab ",
        BreakKind::Line => "\\line ",
        // a new paragraph conventionally starts with a tab indent
        BreakKind::Paragraph => "\\par \\tab ",
        BreakKind::Page => "\\page ",
        BreakKind::Section => "\\sbkpage ",
    }
}

/// The fixed literal-escape table for the cp1252 code points the
/// transcription can produce, plus the RTF syntax characters.
fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        let escaped = match c {
            '\\' => "\\\\",
            '{' => "\\{",
            '}' => "\\}",
            '’' => "\\'92",
            '‘' => "\\'91",
            '“' => "\\'93",
            '”' => "\\'94",
            '-' | '‐' => "\\'2d",
            '—' => "\\'97",
            '–' => "\\'96",
            '…' => "\\'85",
            '_' => "\\'5f",
            '«' => "\\'ab",
            '»' => "\\'bb",
            '\'' => "\\'27",
            '"' | '″' => "\\'22",
            '+' => "\\'2b",
            '✕' => "\\'d7",
            '⋅' => "\\'b7",
            '÷' => "\\'f7",
            '>' => "\\'3e",
            '<' => "\\'3c",
            '=' => "\\'3d",
            '¢' => "\\'a2",
            '$' => "\\'24",
            '€' => "\\'80",
            '£' => "\\'a3",
            '%' => "\\'25",
            '°' => "\\'b0",
            '#' => "\\'23",
            '&' => "\\'26",
            '©' => "\\'a9",
            '™' => "\\'99",
            '•' => "\\'95",
            '@' => "\\'40",
            '*' => "\\'2a",
            '/' => "\\'2f",
            '~' => "\\'98",
            '†' => "\\'86",
            '‡' => "\\'87",
            '¶' => "\\'b6",
            '®' => "\\'ae",
            '§' => "\\'a7",
            other => {
                out.push(other);
                continue;
            }
        };
        out.push_str(escaped);
    }
}

pub struct RtfRenderer {
    config: RtfConfig,
}

impl RtfRenderer {
    pub fn new(config: RtfConfig) -> Self {
        RtfRenderer { config }
    }

    /// Serialize the stream and its spans into a complete RTF document.
    pub fn render(&self, stream: &CellStream, spans: &[FormatSpan]) -> String {
        let len = stream.len();
        let mut opens_at: Vec<Vec<usize>> = vec![Vec::new(); len + 1];
        let mut closes_at: Vec<Vec<usize>> = vec![Vec::new(); len + 1];
        for (idx, span) in spans.iter().enumerate() {
            opens_at[span.start.min(len)].push(idx);
            closes_at[span.end.min(len)].push(idx);
        }
        // inner spans close first; outer spans open first
        for list in &mut closes_at {
            list.sort_by(|&a, &b| spans[b].start.cmp(&spans[a].start));
        }
        for list in &mut opens_at {
            list.sort_by(|&a, &b| spans[b].end.cmp(&spans[a].end));
        }

        let mut body = String::new();
        for i in 0..=len {
            for &idx in &closes_at[i] {
                body.push_str(close_escape(spans[idx].kind));
            }
            for &idx in &opens_at[i] {
                body.push_str(open_escape(spans[idx].kind));
            }
            if i == len {
                break;
            }
            match &stream.cells()[i] {
                Cell::Empty => body.push(' '),
                Cell::Text { text, .. } => escape_into(&mut body, text),
                Cell::Note(note) => body.push_str(note),
                Cell::Break(kind) => body.push_str(break_escape(*kind)),
                Cell::Pattern(c) => body.push(*c),
                Cell::Indicator(_) => {}
            }
        }
        // trim the ingest sentinel's space
        if body.ends_with(' ') {
            body.pop();
        }

        format!(
            "{{\\rtf1 \\ansi \\deff0 {{\\fonttbl {{\\f0 {};}}}}\\f0 \\fs24 {}}}",
            self.config.font, body
        )
    }
}
