//! Core cell-stream model for braille transcription.
//!
//! A scanned braille page arrives from the classifier boundary as an ordered
//! sequence of predicted cell labels. This crate models that sequence as a
//! [`CellStream`] of [`Cell`] tokens and provides the [`Pass`]/[`Pipeline`]
//! abstraction that downstream crates use to rewrite the stream in a fixed,
//! documented order. Domain knowledge (which cell sequences mean what) lives
//! in the plugin crates; this crate only knows about cells, classes, splices
//! and pass ordering.

mod cell;
mod display;
mod error;
mod pass;
mod stream;

pub use cell::{BreakKind, Cell, CellClass, IndicatorKind, EMPTY_CELL};
pub use display::CellStreamDisplay;
pub use error::TranscribeError;
pub use pass::{Pass, Pipeline};
pub use stream::{CellStream, Label};
