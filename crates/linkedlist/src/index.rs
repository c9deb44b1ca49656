//! Index selectors for reading and writing list positions.
//!
//! An [`Index`] is either a single position or a [`Slice`]. Positions and
//! slices follow the usual sequence-indexing rules: negative values count
//! from the end, slice bounds clamp to the sequence instead of failing, and
//! a negative step walks backwards.

use std::fmt;
use std::ops::RangeFull;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::value::Value;

/// What an index argument may look like.
const INDEX_OR_SLICE: &str = "an integer or a slice";

/// A `start:stop:step` selector. Missing parts take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slice {
    /// First position (inclusive).
    pub start: Option<isize>,
    /// Last position (exclusive).
    pub stop: Option<isize>,
    /// Distance between selected positions; defaults to 1.
    pub step: Option<isize>,
}

/// A position or a slice into a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index {
    /// A single position; negative values count from the end.
    Position(isize),
    /// A range of positions.
    Slice(Slice),
}

impl Slice {
    /// Create a slice from its three optional parts.
    #[must_use]
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// The `[:]` slice, selecting everything.
    #[must_use]
    pub fn full() -> Self {
        Self::default()
    }

    /// The `[::-1]` slice, selecting everything in reverse.
    #[must_use]
    pub fn reversed() -> Self {
        Self::new(None, None, Some(-1))
    }

    /// Resolve this slice against a sequence of `len` elements.
    ///
    /// Returns the selected positions in selection order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroSliceStep`] if the step is zero.
    pub fn positions(&self, len: usize) -> Result<Vec<usize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(Error::ZeroSliceStep);
        }

        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self
            .start
            .map_or(if step < 0 { upper } else { lower }, clamp);
        let stop = self
            .stop
            .map_or(if step < 0 { lower } else { upper }, clamp);

        let mut positions = Vec::new();
        let mut at = start;
        while (step > 0 && at < stop) || (step < 0 && at > stop) {
            // `at` stays within [0, len) inside the loop bounds.
            positions.extend(usize::try_from(at).ok());
            match at.checked_add(step) {
                Some(next) => at = next,
                None => break,
            }
        }
        Ok(positions)
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part = |p: Option<isize>| p.map(|v| v.to_string()).unwrap_or_default();
        write!(f, "{}:{}", part(self.start), part(self.stop))?;
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

impl Index {
    /// Resolve a position against a sequence of `len` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the position is outside the
    /// sequence, counting negative positions from the end.
    pub fn resolve_position(index: isize, len: usize) -> Result<usize> {
        let signed_len = isize::try_from(len).unwrap_or(isize::MAX);
        let resolved = if index < 0 { index + signed_len } else { index };
        usize::try_from(resolved)
            .ok()
            .filter(|&at| at < len)
            .ok_or_else(|| Error::index_out_of_range(index, len))
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(index) => write!(f, "{index}"),
            Self::Slice(slice) => write!(f, "{slice}"),
        }
    }
}

impl From<isize> for Index {
    fn from(index: isize) -> Self {
        Self::Position(index)
    }
}

impl From<i32> for Index {
    fn from(index: i32) -> Self {
        Self::Position(index as isize)
    }
}

impl From<i64> for Index {
    fn from(index: i64) -> Self {
        Self::Position(isize::try_from(index).unwrap_or(if index < 0 {
            isize::MIN
        } else {
            isize::MAX
        }))
    }
}

impl From<usize> for Index {
    fn from(index: usize) -> Self {
        Self::Position(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

impl From<Slice> for Index {
    fn from(slice: Slice) -> Self {
        Self::Slice(slice)
    }
}

impl From<RangeFull> for Index {
    fn from(_: RangeFull) -> Self {
        Self::Slice(Slice::full())
    }
}

/// Only integers are indices; any other value is the wrong index type.
impl TryFrom<Value> for Index {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Int(index) => Ok(Self::from(index)),
            other => Err(Error::invalid_index_type(other, INDEX_OR_SLICE)),
        }
    }
}

/// Parses `"3"`, `"-1"`, `"1:3"`, `":2"`, `"::-1"` and the like.
impl FromStr for Index {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::invalid_index_type(s, INDEX_OR_SLICE);
        let trimmed = s.trim();

        if !trimmed.contains(':') {
            return trimmed.parse().map(Self::Position).map_err(|_| invalid());
        }

        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() > 3 {
            return Err(invalid());
        }
        let mut bounds = [None; 3];
        for (slot, part) in bounds.iter_mut().zip(&parts) {
            let part = part.trim();
            if !part.is_empty() {
                *slot = Some(part.parse::<isize>().map_err(|_| invalid())?);
            }
        }
        let [start, stop, step] = bounds;
        Ok(Self::Slice(Slice::new(start, stop, step)))
    }
}
