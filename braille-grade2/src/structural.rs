//! Structural marker substitution.
//!
//! Runs first: later passes compute lengths and context over the stream
//! and need the break markers to already be stable one-token cells. Each
//! marker sequence also consumes one directly following empty cell, since
//! the markers themselves act as separators in both output formats.

use braille_stream::{BreakKind, Cell, CellStream, Pass};

const MARKERS: [(&[char], BreakKind); 5] = [
    (
        &['⠸', '⠡', '⠎', '⠃', '⠅', '⠏', '⠁', '⠛', '⠑'],
        BreakKind::Section,
    ),
    (&['⠸', '⠡', '⠏', '⠁', '⠛', '⠑'], BreakKind::Page),
    (&['⠸', '⠡', '⠇', '⠔', '⠑'], BreakKind::Line),
    (&['⠸', '⠡', '⠞', '⠁', '⠃'], BreakKind::Tab),
    (&['⠸', '⠡', '⠏', '⠜'], BreakKind::Paragraph),
];

pub struct StructuralMarkers;

impl Pass for StructuralMarkers {
    fn name(&self) -> &'static str {
        "structural-markers"
    }

    fn run(&self, stream: &mut CellStream) {
        let mut matches: Vec<(usize, usize, BreakKind)> = Vec::new();
        let mut i = 0;
        while i < stream.len() {
            let hit = MARKERS
                .iter()
                .find(|(pattern, _)| stream.matches_seq(i, pattern));
            match hit {
                Some(&(pattern, kind)) => {
                    let mut consumed = pattern.len();
                    if stream
                        .get(i + consumed)
                        .map_or(false, Cell::is_empty_cell)
                    {
                        consumed += 1;
                    }
                    matches.push((i, consumed, kind));
                    i += consumed;
                }
                None => i += 1,
            }
        }
        for (start, consumed, kind) in matches.into_iter().rev() {
            stream.replace(start..start + consumed, [Cell::Break(kind)]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> CellStream {
        let mut stream = CellStream::from_text(text).unwrap();
        StructuralMarkers.run(&mut stream);
        stream
    }

    #[test]
    fn substitutes_every_marker_kind() {
        let stream = run("⠁⠸⠡⠞⠁⠃⠀⠃⠸⠡⠇⠔⠑⠀⠉⠸⠡⠏⠜⠀⠙⠸⠡⠏⠁⠛⠑⠀⠑⠸⠡⠎⠃⠅⠏⠁⠛⠑⠀⠋");
        let breaks: Vec<_> = stream
            .cells()
            .iter()
            .filter_map(|c| match c {
                Cell::Break(kind) => Some(*kind),
                _ => None,
            })
            .collect();
        assert_eq!(
            breaks,
            vec![
                BreakKind::Tab,
                BreakKind::Line,
                BreakKind::Paragraph,
                BreakKind::Page,
                BreakKind::Section
            ]
        );
        // 6 letters, 5 break tokens, the ingest sentinel
        assert_eq!(stream.len(), 12);
    }

    #[test]
    fn marker_without_trailing_empty_cell() {
        let stream = run("⠸⠡⠞⠁⠃⠃");
        assert_eq!(stream.get(0), Some(&Cell::Break(BreakKind::Tab)));
        assert_eq!(stream.pattern_at(1), Some('⠃'));
    }

    #[test]
    fn longest_marker_wins() {
        // the section-break spelling embeds the page-break tail
        let stream = run("⠸⠡⠎⠃⠅⠏⠁⠛⠑⠀");
        assert_eq!(stream.get(0), Some(&Cell::Break(BreakKind::Section)));
        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn substitution_is_idempotent() {
        let mut stream = CellStream::from_text("⠁⠸⠡⠏⠜⠀⠃").unwrap();
        StructuralMarkers.run(&mut stream);
        let once = stream.clone();
        StructuralMarkers.run(&mut stream);
        assert_eq!(stream, once);
    }
}
