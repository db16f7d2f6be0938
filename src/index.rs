use crate::{vector::Vector, Result, VectorError};
use ndarray::Axis;
use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};
use std::str::FromStr;

/// Start/stop/step selection over a vector's components.
///
/// Bounds may be negative, in which case they count from the end, and are
/// clamped to the vector. A negative step walks backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceSpec {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    pub fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Positions selected by this slice in a sequence of `len` elements.
    pub fn indices(&self, len: usize) -> Result<Vec<usize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(VectorError::InvalidArgument("slice step cannot be zero".to_string()));
        }

        let len = len as isize;
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = self.start.map(clamp).unwrap_or(if step < 0 { upper } else { lower });
        let stop = self.stop.map(clamp).unwrap_or(if step < 0 { lower } else { upper });

        let mut selected = Vec::new();
        let mut position = start;
        while (step > 0 && position < stop) || (step < 0 && position > stop) {
            selected.push(position as usize);
            position = match position.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
        Ok(selected)
    }
}

impl From<Range<isize>> for SliceSpec {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceSpec {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceSpec {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

impl From<RangeInclusive<isize>> for SliceSpec {
    fn from(range: RangeInclusive<isize>) -> Self {
        Self::new(Some(*range.start()), inclusive_stop(*range.end()), None)
    }
}

impl From<RangeToInclusive<isize>> for SliceSpec {
    fn from(range: RangeToInclusive<isize>) -> Self {
        Self::new(None, inclusive_stop(range.end), None)
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}

// `..=-1` means "through the last element", which an exclusive stop of 0 would not.
fn inclusive_stop(end: isize) -> Option<isize> {
    if end == -1 {
        None
    } else {
        end.checked_add(1)
    }
}

/// A parsed subscript: a single position or a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Index(isize),
    Slice(SliceSpec),
}

impl FromStr for Key {
    type Err = VectorError;

    /// Accepts `"2"`, `"-1"`, `"1:3"`, `":2"`, `"::-1"` and the like.
    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        if !text.contains(':') {
            return parse_bound(text).map(Key::Index);
        }

        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() > 3 {
            return Err(indices_error(text));
        }

        let optional = |part: &str| -> Result<Option<isize>> {
            let part = part.trim();
            if part.is_empty() {
                Ok(None)
            } else {
                parse_bound(part).map(Some)
            }
        };

        Ok(Key::Slice(SliceSpec::new(
            optional(parts[0])?,
            optional(parts[1])?,
            parts.get(2).copied().map(optional).transpose()?.flatten(),
        )))
    }
}

fn parse_bound(text: &str) -> Result<isize> {
    text.parse::<isize>().map_err(|_| indices_error(text))
}

fn indices_error(key: &str) -> VectorError {
    VectorError::InvalidArgument(format!("'Vector' indices must be integers or slices, not {:?}", key))
}

/// Result of a dynamic subscript.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Component(f64),
    Slice(Vector),
}

impl Vector {
    /// Component at `index`; negative positions count from the end.
    pub fn get(&self, index: isize) -> Result<f64> {
        let arity = self.len();
        let position = if index < 0 { index + arity as isize } else { index };
        if position < 0 || position >= arity as isize {
            return Err(VectorError::IndexOutOfRange { index, arity });
        }
        Ok(self.components[position as usize])
    }

    /// Copies the selected components into a new vector.
    ///
    /// ```
    /// use ndvector::{SliceSpec, Vector};
    ///
    /// let v = Vector::new([1, 2, 3, 4]);
    /// assert_eq!(v.slice(1..3).unwrap(), [2.0, 3.0]);
    /// assert_eq!(v.slice(SliceSpec::from(..).with_step(-1)).unwrap(), [4.0, 3.0, 2.0, 1.0]);
    /// ```
    pub fn slice<S: Into<SliceSpec>>(&self, spec: S) -> Result<Vector> {
        let indices = spec.into().indices(self.len())?;
        Ok(Vector::from(self.components.select(Axis(0), &indices)))
    }

    /// Subscript by key text, e.g. `"-1"` or `"1:3"`.
    pub fn item(&self, key: &str) -> Result<Item> {
        match key.parse::<Key>()? {
            Key::Index(index) => self.get(index).map(Item::Component),
            Key::Slice(spec) => self.slice(spec).map(Item::Slice),
        }
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}
