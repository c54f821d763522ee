//! Contiguous, array-backed list storage.

pub mod array_list;
pub mod slice_list;

#[doc(inline)]
pub use array_list::{
    ArrayBooleanList, ArrayByteList, ArrayCharList, ArrayDoubleList, ArrayFloatList, ArrayIntList,
    ArrayList, ArrayLongList, ArrayShortList, ArrayUnsignedByteList, ArrayUnsignedShortList,
};
#[doc(inline)]
pub use slice_list::SliceList;
