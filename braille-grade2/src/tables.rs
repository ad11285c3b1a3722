//! Contraction tables.
//!
//! The reference for the braille spellings is the UEB symbols list
//! (brailleauthority.org); words stood for by more than one cell are kept
//! sorted by decreasing braille length so that longer spellings are never
//! shadowed by their own prefixes (perceiving before perceive).

use braille_stream::CellClass;
use once_cell::sync::Lazy;

/// Short-form whole words. Accepted only when standalone.
pub static SHORTFORM_WORDS: Lazy<Vec<(Vec<char>, &'static str)>> = Lazy::new(|| {
    [
        ("⠏⠻⠉⠧⠛", "perceiving"),
        ("⠽⠗⠧⠎", "yourselves"),
        ("⠮⠍⠧⠎", "themselves"),
        ("⠗⠚⠉⠛", "rejoicing"),
        ("⠗⠉⠧⠛", "receiving"),
        ("⠏⠻⠉⠧", "perceive"),
        ("⠳⠗⠧⠎", "ourselves"),
        ("⠙⠉⠇⠛", "declaring"),
        ("⠙⠉⠧⠛", "deceiving"),
        ("⠒⠉⠧⠛", "conceiving"),
        ("⠁⠋⠺⠎", "afterwards"),
        ("⠽⠗⠋", "yourself"),
        ("⠞⠛⠗", "together"),
        ("⠹⠽⠋", "thyself"),
        ("⠗⠚⠉", "rejoice"),
        ("⠗⠉⠧", "receive"),
        ("⠏⠻⠓", "perhaps"),
        ("⠐⠕⠋", "oneself"),
        ("⠝⠑⠊", "neither"),
        ("⠝⠑⠉", "necessary"),
        ("⠍⠽⠋", "myself"),
        ("⠊⠍⠍", "immediate"),
        ("⠓⠍⠋", "himself"),
        ("⠓⠻⠋", "herself"),
        ("⠛⠗⠞", "great"),
        ("⠙⠉⠇", "declare"),
        ("⠙⠉⠧", "deceive"),
        ("⠒⠉⠧", "conceive"),
        ("⠃⠗⠇", "braille"),
        ("⠁⠇⠺", "always"),
        ("⠁⠇⠞", "altogether"),
        ("⠁⠇⠹", "although"),
        ("⠁⠇⠗", "already"),
        ("⠁⠇⠍", "almost"),
        ("⠁⠛⠌", "against"),
        ("⠁⠋⠝", "afternoon"),
        ("⠁⠋⠺", "afterward"),
        ("⠁⠉⠗", "across"),
        ("⠁⠃⠧", "above"),
        ("⠽⠗", "your"),
        ("⠺⠙", "would"),
        ("⠞⠝", "tonight"),
        ("⠞⠍", "tomorrow"),
        ("⠞⠙", "today"),
        ("⠎⠡", "such"),
        ("⠩⠙", "should"),
        ("⠎⠙", "said"),
        ("⠟⠅", "quick"),
        ("⠏⠙", "paid"),
        ("⠍⠌", "must"),
        ("⠍⠡", "much"),
        ("⠇⠇", "little"),
        ("⠇⠗", "letter"),
        ("⠭⠋", "itself"),
        ("⠭⠎", "its"),
        ("⠓⠍", "him"),
        ("⠛⠙", "good"),
        ("⠋⠗", "friend"),
        ("⠋⠌", "first"),
        ("⠑⠊", "either"),
        ("⠉⠙", "could"),
        ("⠡⠝", "children"),
        ("⠃⠇", "blind"),
        ("⠁⠇", "also"),
        ("⠁⠛", "again"),
        ("⠁⠋", "after"),
        ("⠁⠉", "according"),
        ("⠁⠃", "about"),
    ]
    .into_iter()
    .map(|(cells, word)| (cells.chars().collect(), word))
    .collect()
});

/// The "be-" lower groupsign words plus the lower wordsign were. The first
/// cell of each doubles as a typeform indicator second cell, so these are
/// additionally rejected after a typeform first cell.
pub static BE_WORDS: Lazy<Vec<(Vec<char>, &'static str)>> = Lazy::new(|| {
    [
        ("⠆⠽", "beyond"),
        ("⠆⠞", "between"),
        ("⠆⠎", "beside"),
        ("⠆⠝", "beneath"),
        ("⠆⠇", "below"),
        ("⠆⠓", "behind"),
        ("⠆⠋", "before"),
        ("⠆⠉", "because"),
        ("⠶", "were"),
    ]
    .into_iter()
    .map(|(cells, word)| (cells.chars().collect(), word))
    .collect()
});

/// The flat multi-cell symbol, punctuation and initial-letter contraction
/// table, longest match first. Values containing the empty braille cell
/// expand to empty cells around the text (the angle sign).
pub static COMBINATIONS: Lazy<Vec<(Vec<char>, &'static str, CellClass)>> = Lazy::new(|| {
    use CellClass::{Groupsign, Punctuation, Wordsign};
    [
        ("⠐⠠⠤", "—", Punctuation),
        ("⠲⠲⠲", "…", Punctuation),
        ("⠈⠨⠣", "[", Punctuation),
        ("⠈⠨⠜", "]", Punctuation),
        ("⠈⠠⠹", "†", Punctuation),
        ("⠈⠠⠻", "‡", Punctuation),
        ("⠠⠐⠣", "(", Punctuation),
        ("⠠⠐⠜", ")", Punctuation),
        ("⠠⠨⠣", "[", Punctuation),
        ("⠠⠨⠜", "]", Punctuation),
        ("⠠⠸⠣", "{", Punctuation),
        ("⠠⠸⠜", "}", Punctuation),
        ("⠨⠑", "ance", Groupsign),
        ("⠸⠉", "cannot", Wordsign),
        ("⠐⠡", "character", Wordsign),
        ("⠐⠙", "day", Wordsign),
        ("⠐⠑", "ever", Wordsign),
        ("⠐⠋", "father", Wordsign),
        ("⠸⠓", "had", Wordsign),
        ("⠐⠓", "here", Wordsign),
        ("⠐⠅", "know", Wordsign),
        ("⠐⠇", "lord", Wordsign),
        ("⠸⠍", "many", Wordsign),
        ("⠐⠍", "mother", Wordsign),
        ("⠐⠝", "name", Wordsign),
        ("⠐⠕", "one", Wordsign),
        ("⠨⠙", "ound", Groupsign),
        ("⠨⠞", "ount", Groupsign),
        ("⠐⠳", "ought", Wordsign),
        ("⠐⠏", "part", Wordsign),
        ("⠐⠟", "question", Wordsign),
        ("⠐⠗", "right", Wordsign),
        ("⠐⠎", "some", Wordsign),
        ("⠸⠎", "spirit", Wordsign),
        ("⠸⠮", "their", Wordsign),
        ("⠐⠮", "there", Wordsign),
        ("⠘⠮", "these", Wordsign),
        ("⠘⠹", "those", Wordsign),
        ("⠐⠹", "through", Wordsign),
        ("⠐⠞", "time", Wordsign),
        ("⠐⠥", "under", Wordsign),
        ("⠘⠥", "upon", Wordsign),
        ("⠐⠱", "where", Wordsign),
        ("⠘⠱", "whose", Wordsign),
        ("⠘⠺", "word", Wordsign),
        ("⠐⠺", "work", Wordsign),
        ("⠸⠺", "world", Wordsign),
        ("⠐⠽", "young", Wordsign),
        ("⠐⠖", "+", Punctuation),
        ("⠐⠤", "-", Punctuation),
        ("⠐⠦", "✕", Punctuation),
        ("⠐⠲", "⋅", Punctuation),
        ("⠐⠌", "÷", Punctuation),
        ("⠈⠜", ">", Punctuation),
        ("⠈⠣", "<", Punctuation),
        ("⠐⠶", "=", Punctuation),
        ("⠈⠉", "¢", Punctuation),
        ("⠈⠎", "$", Punctuation),
        ("⠈⠑", "€", Punctuation),
        ("⠈⠇", "£", Punctuation),
        ("⠶⠶", "″", Punctuation),
        ("⠨⠴", "%", Punctuation),
        ("⠘⠚", "°", Punctuation),
        ("⠸⠪", "⠀angle⠀", Wordsign),
        ("⠸⠹", "#", Punctuation),
        ("⠈⠯", "&", Punctuation),
        ("⠘⠉", "©", Punctuation),
        ("⠘⠞", "™", Punctuation),
        ("⠸⠲", "•", Punctuation),
        ("⠈⠁", "@", Punctuation),
        ("⠐⠔", "*", Punctuation),
        ("⠠⠤", "—", Punctuation),
        ("⠸⠌", "/", Punctuation),
        ("⠸⠡", "\\", Punctuation),
        ("⠠⠦", "‘", Punctuation),
        ("⠠⠴", "’", Punctuation),
        ("⠐⠣", "(", Punctuation),
        ("⠐⠜", ")", Punctuation),
        ("⠨⠣", "[", Punctuation),
        ("⠨⠜", "]", Punctuation),
        ("⠸⠣", "{", Punctuation),
        ("⠸⠜", "}", Punctuation),
        ("⠈⠔", "~", Punctuation),
        ("⠐⠂", "\"", Punctuation),
        ("⠘⠦", "“", Punctuation),
        ("⠘⠴", "”", Punctuation),
        ("⠘⠏", "¶", Punctuation),
        ("⠘⠗", "®", Punctuation),
        ("⠘⠎", "§", Punctuation),
        ("⠨⠤", "_", Punctuation),
        ("⠸⠦", "«", Punctuation),
        ("⠸⠴", "»", Punctuation),
    ]
    .into_iter()
    .map(|(cells, text, class)| (cells.chars().collect(), text, class))
    .collect()
});

/// The alphabetic wordsigns. Accepted only when standalone; otherwise the
/// final one-to-one table resolves the cell to its letter.
pub static ALPHABETIC_WORDSIGNS: Lazy<Vec<(char, &'static str)>> = Lazy::new(|| {
    vec![
        ('⠺', "will"),
        ('⠝', "not"),
        ('⠟', "quite"),
        ('⠃', "but"),
        ('⠗', "rather"),
        ('⠽', "you"),
        ('⠉', "can"),
        ('⠓', "have"),
        ('⠍', "more"),
        ('⠅', "knowledge"),
        ('⠎', "so"),
        ('⠞', "that"),
        ('⠏', "people"),
        ('⠚', "just"),
        ('⠇', "like"),
        ('⠥', "us"),
        ('⠙', "do"),
        ('⠵', "as"),
        ('⠋', "from"),
        ('⠭', "it"),
        ('⠑', "every"),
        ('⠧', "very"),
        ('⠛', "go"),
    ]
});

/// Wordsign/groupsign pairs disambiguated by letter flanking.
pub static STRONG_WORDSIGNS: Lazy<Vec<(char, &'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ('⠡', "child", "ch"),
        ('⠩', "shall", "sh"),
        ('⠹', "this", "th"),
        ('⠱', "which", "wh"),
        ('⠳', "out", "ou"),
        ('⠌', "still", "st"),
    ]
});

/// One-cell letter spellings.
pub fn letter_text(c: char) -> Option<&'static str> {
    Some(match c {
        '⠁' => "a",
        '⠃' => "b",
        '⠉' => "c",
        '⠙' => "d",
        '⠑' => "e",
        '⠋' => "f",
        '⠛' => "g",
        '⠓' => "h",
        '⠊' => "i",
        '⠚' => "j",
        '⠅' => "k",
        '⠇' => "l",
        '⠍' => "m",
        '⠝' => "n",
        '⠕' => "o",
        '⠏' => "p",
        '⠟' => "q",
        '⠗' => "r",
        '⠎' => "s",
        '⠞' => "t",
        '⠥' => "u",
        '⠧' => "v",
        '⠺' => "w",
        '⠭' => "x",
        '⠽' => "y",
        '⠵' => "z",
        _ => return None,
    })
}

/// Punctuation spellings inside a Grade-I span. The question-mark cell maps
/// to the opening double quote here; the question-mark reading is only
/// produced by the lower-wordsign disambiguation in Grade II context.
pub fn grade1_punct(c: char) -> Option<&'static str> {
    Some(match c {
        '⠂' => ",",
        '⠲' => ".",
        '⠖' => "!",
        '⠄' => "’",
        '⠤' => "-",
        '⠦' => "“",
        '⠴' => "”",
        '⠒' => ":",
        '⠆' => ";",
        '⠶' => "'",
        _ => return None,
    })
}

/// Final-letter groupsign read of the cells that are ambiguous after a
/// Grade-I symbol indicator.
pub fn grade1_suffix(c: char) -> Option<&'static str> {
    Some(match c {
        '⠑' => "ence",
        '⠛' => "ong",
        '⠇' => "ful",
        '⠝' => "tion",
        '⠞' => "ment",
        '⠽' => "ity",
        _ => return None,
    })
}

/// Digit-letter spellings inside a numeric passage.
pub fn numeral_text(c: char) -> Option<&'static str> {
    Some(match c {
        '⠁' => "1",
        '⠃' => "2",
        '⠉' => "3",
        '⠙' => "4",
        '⠑' => "5",
        '⠋' => "6",
        '⠛' => "7",
        '⠓' => "8",
        '⠊' => "9",
        '⠚' => "0",
        '⠂' => ",",
        '⠲' => ".",
        '⡈' => "/",
        _ => return None,
    })
}

/// The final one-to-one table: letters plus the strong one-cell
/// contractions.
pub fn single_cell(c: char) -> Option<(&'static str, CellClass)> {
    if let Some(letter) = letter_text(c) {
        return Some((letter, CellClass::Letter));
    }
    Some(match c {
        '⠯' => ("and", CellClass::Wordsign),
        '⠿' => ("for", CellClass::Wordsign),
        '⠷' => ("of", CellClass::Wordsign),
        '⠮' => ("the", CellClass::Wordsign),
        '⠾' => ("with", CellClass::Wordsign),
        '⠣' => ("gh", CellClass::Groupsign),
        '⠫' => ("ed", CellClass::Groupsign),
        '⠻' => ("er", CellClass::Groupsign),
        '⠪' => ("ow", CellClass::Groupsign),
        '⠜' => ("ar", CellClass::Groupsign),
        '⠬' => ("ing", CellClass::Groupsign),
        '⠒' => ("con", CellClass::Groupsign),
        _ => return None,
    })
}

/// The transcriber-defined typeform indicators, dropped from the print
/// transcription (the embosser stream keeps them).
pub static TRANSCRIBER_TYPEFORMS: Lazy<Vec<[char; 3]>> = Lazy::new(|| {
    let mut list = Vec::new();
    for first in ['⠈', '⠘', '⠸', '⠐', '⠨'] {
        for last in ['⠂', '⠆', '⠶', '⠠'] {
            list.push([first, '⠼', last]);
        }
    }
    list
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortforms_are_sorted_by_decreasing_length() {
        let lengths: Vec<usize> = SHORTFORM_WORDS.iter().map(|(cells, _)| cells.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn longer_spellings_precede_their_prefixes() {
        let idx = |word: &str| {
            SHORTFORM_WORDS
                .iter()
                .position(|(_, w)| *w == word)
                .unwrap()
        };
        assert!(idx("perceiving") < idx("perceive"));
        assert!(idx("afterwards") < idx("afterward"));
        assert!(idx("after") < idx("according"));
    }

    #[test]
    fn em_dash_precedes_en_dash_in_combinations() {
        let idx = |cells: &[char]| {
            COMBINATIONS
                .iter()
                .position(|(pattern, _, _)| pattern == cells)
                .unwrap()
        };
        assert!(idx(&['⠐', '⠠', '⠤']) < idx(&['⠐', '⠤']));
        assert!(idx(&['⠐', '⠠', '⠤']) < idx(&['⠠', '⠤']));
    }

    #[test]
    fn single_cell_covers_all_letters_and_contractions() {
        for c in crate::charset::LETTERS {
            assert_eq!(single_cell(c).unwrap().1, CellClass::Letter);
        }
        assert_eq!(single_cell('⠮'), Some(("the", CellClass::Wordsign)));
        assert_eq!(single_cell('⠬'), Some(("ing", CellClass::Groupsign)));
        assert_eq!(single_cell('⠴'), None);
    }

    #[test]
    fn transcriber_typeforms_cover_all_variants() {
        assert_eq!(TRANSCRIBER_TYPEFORMS.len(), 20);
        assert!(TRANSCRIBER_TYPEFORMS.contains(&['⠨', '⠼', '⠠']));
    }
}
