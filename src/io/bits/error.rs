use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBit {
    pub bit: u32,
}

impl Display for InvalidBit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Bit value {} is neither 0 nor 1!", self.bit)
    }
}

impl Error for InvalidBit {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBitCount {
    pub count: u32,
    pub max: u32,
}

impl Display for InvalidBitCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Bit count {} is outside of the range 1..={}!", self.count, self.max)
    }
}

impl Error for InvalidBitCount {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfStream;

impl Display for EndOfStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Reached the end of the underlying byte stream!")
    }
}

impl Error for EndOfStream {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamClosed;

impl Display for StreamClosed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Stream has already been closed!")
    }
}

impl Error for StreamClosed {}

/// Every way that a bit stream operation can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum BitStreamError {
    InvalidBit(InvalidBit),
    InvalidBitCount(InvalidBitCount),
    EndOfStream(EndOfStream),
    StreamClosed(StreamClosed),
    Io(io::Error),
}
