use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, InvalidRange, ValueOutOfRange};

/// An operation that the list doesn't provide, such as `set` on a read-only list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unsupported {
    pub operation: &'static str,
}

impl Unsupported {
    pub const fn new(operation: &'static str) -> Unsupported {
        Unsupported { operation }
    }
}

impl Display for Unsupported {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation `{}` is not supported by this list!", self.operation)
    }
}

impl Error for Unsupported {}

/// A cursor was moved past either end of its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchElement;

impl Display for NoSuchElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No more elements in this direction!")
    }
}

impl Error for NoSuchElement {}

/// A cursor was asked to `set` or `remove` without having returned an element since it was created
/// or last changed the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoLastElement;

impl Display for NoLastElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No element has been returned since the cursor was created or last modified the list!")
    }
}

impl Error for NoLastElement {}

/// A view noticed that its list was structurally modified by something other than itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrentModification {
    pub expected: usize,
    pub actual: usize,
}

impl Display for ConcurrentModification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "List was modified outside of this view (expected modification count {}, found {})!",
            self.expected, self.actual,
        )
    }
}

impl Error for ConcurrentModification {}

/// Every way that a list operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ListError {
    Unsupported(Unsupported),
    IndexOutOfBounds(IndexOutOfBounds),
    InvalidRange(InvalidRange),
    ValueOutOfRange(ValueOutOfRange),
    NoSuchElement(NoSuchElement),
    NoLastElement(NoLastElement),
    ConcurrentModification(ConcurrentModification),
}
