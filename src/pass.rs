//! The pass pipeline abstraction.
//!
//! Every rewrite stage of the engine is a named [`Pass`], total over the
//! cell-stream type. A [`Pipeline`] is an ordered list of passes; the order
//! is an explicit, testable contract rather than an implicit ordering in
//! code. Later passes assume earlier passes are complete and must not
//! re-examine already-resolved text as if it were unresolved braille.

use crate::stream::CellStream;

/// One rewrite stage over the whole stream.
pub trait Pass {
    /// Stable name used in logs and pipeline-order tests.
    fn name(&self) -> &'static str;

    /// Rewrite the stream in place. Must be total: no input may panic.
    fn run(&self, stream: &mut CellStream);
}

/// An ordered list of named transformer stages.
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl Pipeline {
    pub fn new(passes: Vec<Box<dyn Pass>>) -> Self {
        Pipeline { passes }
    }

    /// Append another pipeline's passes after this one's.
    pub fn chain(mut self, other: Pipeline) -> Self {
        self.passes.extend(other.passes);
        self
    }

    /// Run every pass in order.
    pub fn run(&self, stream: &mut CellStream) {
        for pass in &self.passes {
            pass.run(stream);
            log::debug!(
                "pass {:?} complete, stream length {}",
                pass.name(),
                stream.len()
            );
        }
    }

    /// The pass names in execution order.
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }
}
