//! Combining mark reordering.
//!
//! MARC-8 writes diacritics *before* the letter they modify; Unicode writes
//! them *after*. The decoder collects the marks that precede a base character
//! with [`CombiningRun::collect`] and emits them once the base character has
//! been written.

use smallvec::SmallVec;

use crate::state::WorkingSetState;

/// Combining marks collected ahead of a base character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombiningRun {
    marks: SmallVec<[char; 4]>,
    end: usize,
}

impl CombiningRun {
    /// Collect consecutive combining marks starting at `cursor`.
    ///
    /// Stops at the first byte that neither G0 nor G1 classifies as
    /// combining, or at the end of input. Each byte is examined once.
    #[must_use]
    pub fn collect(bytes: &[u8], cursor: usize, state: &WorkingSetState) -> Self {
        let mut marks = SmallVec::new();
        let mut end = cursor;
        while let Some(mark) = state.combining_at(bytes, end) {
            marks.push(mark.unicode);
            end += mark.width;
        }
        CombiningRun { marks, end }
    }

    /// The collected marks, in input order.
    #[must_use]
    pub fn marks(&self) -> &[char] {
        &self.marks
    }

    /// Position of the first byte after the run.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Whether no marks were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
