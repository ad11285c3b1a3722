//! Document renderers and the end-to-end transcription facade.
//!
//! Two independent backends consume the same engine output: the PEF
//! layout engine reflows the pre-disambiguation marker stream into an
//! embosser-ready XML container, and the RTF renderer serializes the
//! fully disambiguated stream with its formatting spans into printed
//! English. Transcription notes reach the RTF output only; the PEF side
//! keeps the original cells verbatim for the braille reader.

mod pef;
mod rtf;

pub use pef::{LayoutConfig, Page, PefDocument, Section};
pub use rtf::{RtfConfig, RtfRenderer};

use braille_stream::{CellStream, TranscribeError};
use braille_typeform::SpanResolver;

/// Both rendered artifacts for one input document.
#[derive(Debug, Clone)]
pub struct Transcription {
    pub rtf: String,
    pub pef: String,
}

/// Run the whole pipeline on a classifier-boundary cell string: structural
/// passes, the embosser layout split, contraction resolution, span
/// resolution, then both serializations.
pub fn transcribe(
    input: &str,
    layout: &LayoutConfig,
    rtf: &RtfConfig,
) -> Result<Transcription, TranscribeError> {
    let mut stream = CellStream::from_text(input)?;
    log::debug!("transcribing {} cells", stream.len());

    braille_grade2::passes::structural().run(&mut stream);
    let pef = PefDocument::layout(&stream, layout).to_xml();

    braille_grade2::passes::contraction().run(&mut stream);
    let spans = SpanResolver::new().resolve(&mut stream);
    let rtf = RtfRenderer::new(rtf.clone()).render(&stream, &spans);

    Ok(Transcription { rtf, pef })
}
