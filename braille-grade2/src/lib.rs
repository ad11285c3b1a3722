//! Grade II contraction and disambiguation engine.
//!
//! English Braille contractions are resolved by an ordered sequence of
//! rewrite passes over a [`braille_stream::CellStream`]. Each pass consults
//! only boundary predicates over the stream; later passes assume earlier
//! passes are complete. The order is fixed and documented by
//! [`passes::standard`], and pass order is load-bearing: the ness suffix
//! must precede Grade-I, Was must precede His, the super/subscript merge
//! must precede the residual in cleanup, and so on.
//!
//! The structural prefix ([`passes::structural`]) is shared with the
//! embosser layout backend, which consumes the stream before any letter
//! disambiguation happens.

mod charset;
mod combinations;
mod final_letter;
mod grade1;
mod letters;
mod lower;
mod numeric;
mod quotes;
mod shortform;
mod standalone;
mod structural;
mod tables;
mod typo;
mod wordsign;

pub use charset::{is_letter_pattern, is_letterish};
pub use combinations::{ResidualHyphen, SymbolCombinations};
pub use final_letter::FinalLetterGroupsigns;
pub use grade1::{GradeOne, PASSAGE_NOTE, SYMBOL_NOTE};
pub use letters::{SingleCellTable, SubSuperIndicators};
pub use lower::{BeWords, DisPeriod, DoubleLetterGroupsigns, LowerWordsigns, ResidualBe};
pub use numeric::NumericPassages;
pub use quotes::{Apostrophe, CapitalizedHis, CapitalizedWas};
pub use shortform::ShortFormWords;
pub use standalone::{is_standalone, standalone_after, standalone_before};
pub use structural::StructuralMarkers;
pub use typo::{FullCellCollapse, MentionStrip};
pub use wordsign::{AlphabeticWordsigns, EnoughEn, StrongWordsigns};

/// Pipeline presets in the fixed documented order.
pub mod passes {
    use super::*;
    use braille_stream::Pipeline;

    /// The structural prefix shared by both renderers: break-marker
    /// substitution and typo collapse. The embosser layout consumes the
    /// stream in this state, original cells intact.
    pub fn structural() -> Pipeline {
        Pipeline::new(vec![
            Box::new(StructuralMarkers),
            Box::new(FullCellCollapse),
        ])
    }

    /// The contraction and disambiguation passes, in the fixed order the
    /// print transcription requires.
    pub fn contraction() -> Pipeline {
        Pipeline::new(vec![
            Box::new(MentionStrip),
            Box::new(FinalLetterGroupsigns),
            Box::new(GradeOne),
            Box::new(NumericPassages),
            Box::new(ShortFormWords),
            Box::new(BeWords),
            Box::new(CapitalizedWas),
            Box::new(CapitalizedHis),
            Box::new(Apostrophe),
            Box::new(SymbolCombinations),
            Box::new(ResidualHyphen),
            Box::new(LowerWordsigns),
            Box::new(DoubleLetterGroupsigns),
            Box::new(DisPeriod),
            Box::new(StrongWordsigns),
            Box::new(EnoughEn),
            Box::new(AlphabeticWordsigns),
            Box::new(ResidualBe),
            Box::new(SubSuperIndicators),
            Box::new(SingleCellTable),
        ])
    }

    /// The whole engine: structural prefix, then contraction resolution.
    pub fn standard() -> Pipeline {
        structural().chain(contraction())
    }
}
