//! Formatting span resolution.
//!
//! After the Grade II engine has resolved every contraction, the stream
//! still carries capitalization and typeform indicators (passage, word and
//! symbol variants for capital, italic, bold, underline and script, plus
//! the merged super/subscript indicators). [`SpanResolver`] walks the
//! stream once, removes the indicators and emits explicit
//! [`FormatSpan`] records for the print renderer.

mod resolver;
mod span;

pub use resolver::{SpanResolver, CAPITAL_SYMBOL_NOTE};
pub use span::{FormatKind, FormatSpan, Scope};
