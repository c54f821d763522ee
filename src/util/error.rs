use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A range where the start lies after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    pub from: usize,
    pub to: usize,
}

impl Display for InvalidRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Range start {} is greater than range end {}!", self.from, self.to)
    }
}

impl Error for InvalidRange {}

/// A value that can't be represented by a collection's declared element range. All bounds are
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueOutOfRange {
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

impl Display for ValueOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value {} is outside of the range {}..={}!", self.value, self.min, self.max)
    }
}

impl Error for ValueOutOfRange {}
