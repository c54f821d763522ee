//! Bit-level input and output over byte streams.
//!
//! [`BitOutputStream`] packs individual bits into bytes before writing them to any
//! [`Write`](std::io::Write), and [`BitInputStream`] unpacks bytes from any
//! [`Read`](std::io::Read). The order in which bits fill a byte is configurable through
//! [`BitOrder`], or through [`ByteOrder`] for compatibility with existing data (see the mapping
//! documented there). Multi-bit values are always written and read most significant bit first,
//! whatever the bit order.
//!
//! [`SyncBitOutputStream`] and [`SyncBitInputStream`] wrap the streams in a mutex for use from
//! several threads. The [`BitWrite`] and [`BitRead`] traits cover both flavors.

mod error;
mod input;
mod order;
mod output;
mod sync;

pub use error::*;
pub use input::*;
pub use order::*;
pub use output::*;
pub use sync::*;

/// The widest value that can be written or read in a single call.
pub const BITS_PER_WORD: u32 = u32::BITS;

/// A sink for individual bits.
pub trait BitWrite {
    /// Writes a single bit, which must be `0` or `1`.
    fn write_bit(&mut self, bit: u32) -> Result<(), BitStreamError>;

    /// Writes any partially filled byte and flushes the underlying stream.
    fn flush(&mut self) -> Result<(), BitStreamError>;

    /// Writes the low `count` bits of `value`, most significant first.
    ///
    /// # Errors
    /// Fails with [`InvalidBitCount`] unless `1 <= count <= 32`.
    fn write_bits(&mut self, value: u32, count: u32) -> Result<(), BitStreamError> {
        check_bit_count(count)?;
        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1)?;
        }
        Ok(())
    }
}

/// A source of individual bits.
pub trait BitRead {
    /// Reads a single bit, returned as `0` or `1`.
    fn read_bit(&mut self) -> Result<u32, BitStreamError>;

    /// Reads `count` bits and assembles them most significant first.
    ///
    /// # Errors
    /// Fails with [`InvalidBitCount`] unless `1 <= count <= 32`.
    fn read_bits(&mut self, count: u32) -> Result<u32, BitStreamError> {
        check_bit_count(count)?;
        let mut value = 0;
        for shift in (0..count).rev() {
            value |= self.read_bit()? << shift;
        }
        Ok(value)
    }
}

pub(crate) const fn check_bit_count(count: u32) -> Result<(), InvalidBitCount> {
    if count == 0 || count > BITS_PER_WORD {
        return Err(InvalidBitCount {
            count,
            max: BITS_PER_WORD,
        });
    }
    Ok(())
}
