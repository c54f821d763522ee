//! A module containing [`ArrayList`] and its per-type aliases.
//!
//! Every alias is an [`ArrayList`] instantiated for one element type. The unsigned aliases keep
//! their values in narrower signed cells and widen them again on the way out, so an
//! [`ArrayUnsignedShortList`] takes two bytes per element while handing out `i32`s.
//!
//! [`ArrayList`] is also re-exported under the parent module.

mod array_list;

pub use array_list::*;

pub type ArrayBooleanList = ArrayList<bool>;
pub type ArrayByteList = ArrayList<i8>;
/// Values in `0..=255`, stored one byte each.
pub type ArrayUnsignedByteList = ArrayList<i16, i8>;
pub type ArrayShortList = ArrayList<i16>;
/// Values in `0..=65535`, stored two bytes each.
pub type ArrayUnsignedShortList = ArrayList<i32, i16>;
pub type ArrayCharList = ArrayList<char>;
pub type ArrayIntList = ArrayList<i32>;
pub type ArrayLongList = ArrayList<i64>;
pub type ArrayFloatList = ArrayList<f32>;
pub type ArrayDoubleList = ArrayList<f64>;
