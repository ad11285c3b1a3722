//! End-to-end tests for the full pass pipeline.
//!
//! Pass-level behavior is tested inline in each module; these tests cover
//! the documented pass order and the cross-pass interactions.

use crate::passes;
use braille_stream::CellStream;

fn transcribe(text: &str) -> String {
    let mut stream = CellStream::from_text(text).unwrap();
    passes::standard().run(&mut stream);
    stream.plain_text()
}

#[test]
fn pass_order_is_the_documented_contract() {
    assert_eq!(
        passes::standard().pass_names(),
        vec![
            "structural-markers",
            "full-cell-collapse",
            "mention-strip",
            "final-letter-groupsigns",
            "grade-1",
            "numeric-passages",
            "short-form-words",
            "be-words",
            "capitalized-was",
            "capitalized-his",
            "apostrophe",
            "symbol-combinations",
            "residual-hyphen",
            "lower-wordsigns",
            "double-letter-groupsigns",
            "dis-period",
            "strong-wordsigns",
            "enough-en",
            "alphabetic-wordsigns",
            "residual-be",
            "sub-super-indicators",
            "single-cell-table",
        ]
    );
}

#[test]
fn literal_letters_round_trip() {
    // no contractions or indicators: letters map one to one, empty cells
    // map to spaces
    assert_eq!(transcribe("⠚⠁⠵⠵⠀⠚⠁⠵⠵"), "jazz jazz ");
}

#[test]
fn adjoined_letters_do_not_trigger_shortforms() {
    // ⠁⠃ alone is about; followed by a letter it is just a-b
    assert_eq!(transcribe("⠁⠃⠉⠀"), "abc  ");
    assert_eq!(transcribe("⠀⠁⠃⠀"), " about  ");
}

#[test]
fn grade1_word_terminates_at_hyphen() {
    assert_eq!(transcribe("⠰⠰⠁⠃⠤"), "ab- ");
}

#[test]
fn capitalized_was_at_document_start() {
    assert_eq!(transcribe("⠠⠴⠀⠮"), "Was the ");
}

#[test]
fn a_full_sentence_of_mixed_contractions() {
    let text = "⠮⠀⠡⠊⠇⠙⠗⠢⠀⠏⠙⠀⠿⠀⠮⠀⠃⠗⠇";
    assert_eq!(transcribe(text), "the children paid for the braille ");
}

#[test]
fn typo_runs_collapse_but_the_for_wordsign_survives() {
    assert_eq!(transcribe("⠿⠿⠿⠀⠿"), " for ");
}

#[test]
fn numbers_and_dis_words() {
    assert_eq!(transcribe("⠼⠁⠃⠀⠲⠞⠁⠝⠉⠑"), "12 distance ");
}

#[test]
fn apostrophe_in_a_word() {
    assert_eq!(transcribe("⠊⠞⠄⠎"), "it’s ");
}

#[test]
fn lower_wordsigns_against_their_punctuation() {
    // standalone ⠦ is his; after a letter it is a question mark
    assert_eq!(transcribe("⠀⠦⠀⠮"), " his the ");
    assert_eq!(transcribe("⠚⠁⠵⠵⠦⠀"), "jazz?  ");
}

#[test]
fn structural_markers_flow_through_the_whole_engine() {
    let mut stream = CellStream::from_text("⠁⠸⠡⠏⠜⠀⠊").unwrap();
    passes::standard().run(&mut stream);
    assert!(stream
        .cells()
        .iter()
        .any(|c| matches!(c, braille_stream::Cell::Break(braille_stream::BreakKind::Paragraph))));
    assert_eq!(stream.plain_text(), "ai ");
}

#[test]
fn a_wordsign_stands_alone_across_a_break_marker() {
    // ⠃ directly after a paragraph break reads as but
    let mut stream = CellStream::from_text("⠚⠁⠵⠵⠸⠡⠏⠜⠀⠃").unwrap();
    passes::standard().run(&mut stream);
    assert_eq!(stream.plain_text(), "jazzbut ");
}

#[test]
fn prime_symbol_after_a_number() {
    // ⠶⠶ is the prime once the were reading is excluded
    assert_eq!(transcribe("⠼⠁⠚⠶⠶"), "10″ ");
}
