//! The span resolver.
//!
//! One left-to-right walk removes every capitalization and typeform
//! indicator from the stream and records explicit (start, end, kind) spans
//! over the remaining cells. All six dimensions share the same
//! find-the-terminator logic; what differs per dimension is only the
//! indicator spelling and the word-scope letter rule for capitals.

use crate::span::{FormatKind, FormatSpan, Scope};
use braille_stream::{Cell, CellClass, CellStream};

/// Capital symbol scope folds the next letter to uppercase in place
/// instead of emitting a one-cell span; it is by far the most frequent
/// indicator in running text.
pub const CAPITAL_SYMBOL_NOTE: &str = "[Transcription note: a capitalization indicator was found \
     here, but the following cell was not recognized as a letter.]";

fn passage_note(kind: FormatKind) -> String {
    let name = match kind {
        FormatKind::Capital => "a capitalization",
        FormatKind::Italic => "an italics",
        FormatKind::Bold => "a bold",
        FormatKind::Underline => "an underline",
        FormatKind::Script => "a script",
        FormatKind::Subscript | FormatKind::Superscript => unreachable!("symbol scope only"),
    };
    format!(
        "[Transcription note: {name} passage indicator was located here, but no matching \
         terminator was found after it.]"
    )
}

fn typeform_kind(first: char) -> Option<FormatKind> {
    Some(match first {
        '⠨' => FormatKind::Italic,
        '⠘' => FormatKind::Bold,
        '⠸' => FormatKind::Underline,
        '⠈' => FormatKind::Script,
        _ => return None,
    })
}

struct OpenSpan {
    kind: FormatKind,
    scope: Scope,
    start: usize,
}

#[derive(Default)]
pub struct SpanResolver;

impl SpanResolver {
    pub fn new() -> Self {
        SpanResolver
    }

    /// Remove every indicator from the stream and return the resolved
    /// spans, indexed against the indicator-free stream.
    pub fn resolve(&self, stream: &mut CellStream) -> Vec<FormatSpan> {
        let mut spans: Vec<FormatSpan> = Vec::new();
        let mut open: Vec<OpenSpan> = Vec::new();
        let mut unterminated: Vec<(usize, FormatKind)> = Vec::new();

        let mut i = 0;
        while i < stream.len() {
            if let Cell::Indicator(kind) = &stream.cells()[i] {
                let kind = FormatKind::from(*kind);
                stream.remove_range(i..i + 1);
                if i < stream.len() {
                    spans.push(FormatSpan::new(i, i + 1, kind));
                    i += 1;
                }
                continue;
            }

            if stream.cells()[i].is_pattern('⠠') {
                if self.capital(stream, &mut spans, &mut open, &mut i) {
                    continue;
                }
            }

            if let Some(kind) = stream.pattern_at(i).and_then(typeform_kind) {
                if self.typeform(stream, kind, &mut spans, &mut open, &mut i) {
                    continue;
                }
            }

            self.close_word_scopes_at(stream, i, &mut spans, &mut open);
            i += 1;
        }

        let end = stream.len();
        for o in open.drain(..) {
            spans.push(FormatSpan::new(o.start, end, o.kind));
            if o.scope == Scope::Passage {
                unterminated.push((o.start, o.kind));
            }
        }

        // Unterminated passages: a note lands at the indicator position and
        // the span still covers the rest of the document.
        unterminated.sort_by(|a, b| b.0.cmp(&a.0));
        for (pos, kind) in unterminated {
            stream.insert(pos, Cell::Empty);
            stream.insert(pos, Cell::Note(passage_note(kind)));
            for span in &mut spans {
                if span.start >= pos {
                    span.start += 2;
                }
                if span.end > pos {
                    span.end += 2;
                }
            }
        }

        spans
    }

    /// Handle a `⠠` at `i`. Returns true when the walk should restart at
    /// the (possibly rewritten) index.
    fn capital(
        &self,
        stream: &mut CellStream,
        spans: &mut Vec<FormatSpan>,
        open: &mut Vec<OpenSpan>,
        i: &mut usize,
    ) -> bool {
        if stream.matches_seq(*i, &['⠠', '⠠', '⠠']) {
            stream.remove_range(*i..*i + 3);
            open.push(OpenSpan {
                kind: FormatKind::Capital,
                scope: Scope::Passage,
                start: *i,
            });
            return true;
        }
        if stream.matches_seq(*i, &['⠠', '⠠']) {
            stream.remove_range(*i..*i + 2);
            open.push(OpenSpan {
                kind: FormatKind::Capital,
                scope: Scope::Word,
                start: *i,
            });
            return true;
        }
        if stream.matches_seq(*i, &['⠠', '⠄']) {
            if let Some(pos) = open.iter().rposition(|o| o.kind == FormatKind::Capital) {
                let o = open.remove(pos);
                stream.remove_range(*i..*i + 2);
                spans.push(FormatSpan::new(o.start, *i, o.kind));
                return true;
            }
        }
        // Symbol scope: uppercase the first character of the next letter
        // cell in place.
        stream.remove_range(*i..*i + 1);
        match stream.get(*i).cloned() {
            Some(Cell::Text { text, class })
                if !matches!(class, CellClass::Digit | CellClass::Punctuation) =>
            {
                let mut chars = text.chars();
                let folded = match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                };
                stream.replace(
                    *i..*i + 1,
                    [Cell::Text {
                        text: folded,
                        class,
                    }],
                );
                *i += 1;
            }
            _ => {
                stream.insert(*i, Cell::Empty);
                stream.insert(*i, Cell::Note(CAPITAL_SYMBOL_NOTE.to_string()));
                for span in spans.iter_mut() {
                    if span.start >= *i {
                        span.start += 2;
                    }
                    if span.end > *i {
                        span.end += 2;
                    }
                }
                for o in open.iter_mut() {
                    if o.start >= *i {
                        o.start += 2;
                    }
                }
                *i += 2;
            }
        }
        true
    }

    /// Handle a typeform first cell at `i`. Returns true when an indicator
    /// or terminator was consumed.
    fn typeform(
        &self,
        stream: &mut CellStream,
        kind: FormatKind,
        spans: &mut Vec<FormatSpan>,
        open: &mut Vec<OpenSpan>,
        i: &mut usize,
    ) -> bool {
        let second = stream.pattern_at(*i + 1);
        match second {
            Some('⠶') => {
                stream.remove_range(*i..*i + 2);
                open.push(OpenSpan {
                    kind,
                    scope: Scope::Passage,
                    start: *i,
                });
                true
            }
            Some('⠂') => {
                stream.remove_range(*i..*i + 2);
                open.push(OpenSpan {
                    kind,
                    scope: Scope::Word,
                    start: *i,
                });
                true
            }
            Some('⠆') => {
                stream.remove_range(*i..*i + 2);
                if *i < stream.len() {
                    spans.push(FormatSpan::new(*i, *i + 1, kind));
                    *i += 1;
                }
                true
            }
            Some('⠄') => {
                if let Some(pos) = open.iter().rposition(|o| o.kind == kind) {
                    let o = open.remove(pos);
                    stream.remove_range(*i..*i + 2);
                    spans.push(FormatSpan::new(o.start, *i, o.kind));
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Word scopes end at the first empty cell or break; capital word
    /// scope additionally ends at the first non-letter cell.
    fn close_word_scopes_at(
        &self,
        stream: &CellStream,
        i: usize,
        spans: &mut Vec<FormatSpan>,
        open: &mut Vec<OpenSpan>,
    ) {
        let cell = &stream.cells()[i];
        let hard_boundary = cell.is_empty_cell() || matches!(cell, Cell::Break(_));
        let letter = cell.is_letter_class();
        let mut idx = 0;
        while idx < open.len() {
            let o = &open[idx];
            let closes = o.scope == Scope::Word
                && (hard_boundary || (o.kind == FormatKind::Capital && !letter));
            if closes {
                let o = open.remove(idx);
                spans.push(FormatSpan::new(o.start, i, o.kind));
            } else {
                idx += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braille_stream::CellStream;

    fn pattern(c: char) -> Cell {
        Cell::Pattern(c)
    }

    fn resolve(cells: Vec<Cell>) -> (CellStream, Vec<FormatSpan>) {
        let mut stream = CellStream::from_raw_cells(cells);
        let spans = SpanResolver::new().resolve(&mut stream);
        (stream, spans)
    }

    #[test]
    fn capital_word_ends_at_the_first_non_letter() {
        let (stream, spans) = resolve(vec![
            pattern('⠠'),
            pattern('⠠'),
            Cell::letter("a"),
            Cell::letter("b"),
            Cell::punct(","),
            Cell::letter("c"),
        ]);
        assert_eq!(spans, vec![FormatSpan::new(0, 2, FormatKind::Capital)]);
        assert_eq!(stream.plain_text(), "ab,c");
    }

    #[test]
    fn capital_passage_runs_to_its_terminator() {
        let (stream, spans) = resolve(vec![
            pattern('⠠'),
            pattern('⠠'),
            pattern('⠠'),
            Cell::letter("a"),
            Cell::Empty,
            Cell::letter("b"),
            pattern('⠠'),
            pattern('⠄'),
            Cell::letter("c"),
        ]);
        assert_eq!(spans, vec![FormatSpan::new(0, 3, FormatKind::Capital)]);
        assert_eq!(stream.plain_text(), "a bc");
    }

    #[test]
    fn capital_symbol_folds_in_place() {
        let (stream, spans) = resolve(vec![pattern('⠠'), Cell::letter("a"), Cell::letter("b")]);
        assert!(spans.is_empty());
        assert_eq!(stream.plain_text(), "Ab");
    }

    #[test]
    fn capital_symbol_folds_only_the_first_character_of_a_contraction() {
        let (stream, _) = resolve(vec![pattern('⠠'), Cell::group("ch"), Cell::letter("a")]);
        assert_eq!(stream.plain_text(), "Cha");
    }

    #[test]
    fn capital_symbol_before_a_non_letter_notes_and_preserves() {
        let (stream, _) = resolve(vec![pattern('⠠'), pattern('⠴')]);
        assert!(matches!(stream.get(0), Some(Cell::Note(n)) if n == CAPITAL_SYMBOL_NOTE));
        assert!(stream.get(1).unwrap().is_empty_cell());
        assert_eq!(stream.pattern_at(2), Some('⠴'));
    }

    #[test]
    fn italic_word_ends_at_an_empty_cell() {
        let (stream, spans) = resolve(vec![
            pattern('⠨'),
            pattern('⠂'),
            Cell::letter("a"),
            Cell::letter("b"),
            Cell::Empty,
            Cell::letter("c"),
        ]);
        assert_eq!(spans, vec![FormatSpan::new(0, 2, FormatKind::Italic)]);
        assert_eq!(stream.plain_text(), "ab c");
    }

    #[test]
    fn italic_word_keeps_running_through_punctuation() {
        // unlike capital word scope, typeform word scope only ends at an
        // empty cell or terminator
        let (_, spans) = resolve(vec![
            pattern('⠨'),
            pattern('⠂'),
            Cell::letter("a"),
            Cell::punct(","),
            Cell::letter("b"),
            Cell::Empty,
        ]);
        assert_eq!(spans, vec![FormatSpan::new(0, 3, FormatKind::Italic)]);
    }

    #[test]
    fn bold_passage_with_terminator() {
        let (stream, spans) = resolve(vec![
            pattern('⠘'),
            pattern('⠶'),
            Cell::letter("a"),
            Cell::Empty,
            Cell::letter("b"),
            pattern('⠘'),
            pattern('⠄'),
        ]);
        assert_eq!(spans, vec![FormatSpan::new(0, 3, FormatKind::Bold)]);
        assert_eq!(stream.plain_text(), "a b");
    }

    #[test]
    fn unterminated_passage_notes_and_covers_the_rest() {
        let (stream, spans) = resolve(vec![
            pattern('⠨'),
            pattern('⠶'),
            Cell::letter("a"),
            Cell::letter("b"),
        ]);
        assert!(matches!(stream.get(0), Some(Cell::Note(_))));
        assert!(stream.get(1).unwrap().is_empty_cell());
        assert_eq!(spans, vec![FormatSpan::new(2, 4, FormatKind::Italic)]);
        assert_eq!(stream.plain_text(), " ab");
    }

    #[test]
    fn symbol_scope_covers_exactly_one_cell() {
        let (stream, spans) = resolve(vec![
            pattern('⠸'),
            pattern('⠆'),
            Cell::letter("a"),
            Cell::letter("b"),
        ]);
        assert_eq!(spans, vec![FormatSpan::new(0, 1, FormatKind::Underline)]);
        assert_eq!(stream.plain_text(), "ab");
    }

    #[test]
    fn sub_and_superscript_indicators_scope_one_cell() {
        let (stream, spans) = resolve(vec![
            Cell::letter("x"),
            Cell::Indicator(braille_stream::IndicatorKind::Subscript),
            Cell::digit("2"),
            Cell::Empty,
        ]);
        assert_eq!(spans, vec![FormatSpan::new(1, 2, FormatKind::Subscript)]);
        assert_eq!(stream.plain_text(), "x2 ");
    }

    #[test]
    fn resolved_stream_display() {
        let (stream, _) = resolve(vec![
            pattern('⠠'),
            Cell::letter("a"),
            Cell::Empty,
            Cell::letter("b"),
        ]);
        let display = braille_stream::CellStreamDisplay::new(&stream);
        insta::assert_snapshot!(display.to_string(), @"A  _  b");
    }

    #[test]
    fn dimensions_nest_independently() {
        // bold passage wrapping an italic word
        let (stream, mut spans) = resolve(vec![
            pattern('⠘'),
            pattern('⠶'),
            Cell::letter("a"),
            pattern('⠨'),
            pattern('⠂'),
            Cell::letter("b"),
            Cell::Empty,
            Cell::letter("c"),
            pattern('⠘'),
            pattern('⠄'),
        ]);
        spans.sort_by_key(|s| s.start);
        assert_eq!(
            spans,
            vec![
                FormatSpan::new(0, 4, FormatKind::Bold),
                FormatSpan::new(1, 2, FormatKind::Italic),
            ]
        );
        assert_eq!(stream.plain_text(), "ab c");
    }
}
