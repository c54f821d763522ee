//! Stream types layered over [`std::io`].

pub mod bits;
