//! Unboxed, random-access lists of primitive values, and bit-level streams.
//!
//! # Lists
//! The [`collections`] module is built in layers. [`RandomAccessList`](collections::RandomAccessList)
//! is the small contract that a concrete list implements: a length, indexed reads, and optionally
//! indexed writes, insertion and removal. Everything else, from searching and bulk removal through
//! to cursors and sub-list views, is derived from that contract by the
//! [`PrimitiveCollection`](collections::PrimitiveCollection) and
//! [`PrimitiveList`](collections::PrimitiveList) extension traits, so a new list only needs to
//! write the handful of methods it can do better than the defaults.
//!
//! [`ArrayList`](collections::ArrayList) is the contiguous implementation, with an alias for each
//! primitive type (such as [`ArrayIntList`](collections::ArrayIntList)). Values are stored
//! directly, never boxed.
//!
//! # Bits
//! The [`io::bits`] module reads and writes single bits or short runs of bits over any
//! [`Read`](std::io::Read) or [`Write`](std::io::Write), with a configurable bit order and
//! thread-safe wrappers.
//!
//! # Error Handling
//! Every fallible operation returns a [`Result`] with a strongly typed error: an enum for static
//! dispatch over small structs that each implement [`Error`](std::error::Error). Where a signature
//! doesn't allow for errors (such as [`Extend`], [`Iterator`] or `contains`), the implementation
//! panics with the error's message instead, and says so in its documentation.
//!
//! # Features
//! - `lists` (default): the [`collections`] module.
//! - `bits` (default): the [`io`] module, which pulls in `parking_lot` for its mutexes.
//!
//! This crate logs through the [`log`] facade and never installs a logger of its own.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "lists")]
pub mod collections;
#[cfg(feature = "bits")]
pub mod io;

#[cfg_attr(not(feature = "lists"), allow(dead_code, unused_imports))]
pub(crate) mod util;
