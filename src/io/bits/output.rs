use std::io::Write;

use super::{BitOrder, BitStreamError, BitWrite, InvalidBit, StreamClosed};

/// Packs bits into bytes and writes each byte to an underlying [`Write`] once it is full.
///
/// Bits fill each byte in the configured [`BitOrder`]. A partially filled byte is only written by
/// [`flush`](BitOutputStream::flush) or [`close`](BitOutputStream::close), padded with zeros.
/// Closing a stream hands back the underlying writer, after which every operation fails with
/// [`StreamClosed`].
///
/// # Examples
/// ```
/// # use primitive_lists::io::bits::{BitOrder, BitOutputStream, BitWrite};
/// let mut out = BitOutputStream::new(Vec::new(), BitOrder::HighFirst);
/// out.write_bits(0b1010, 4)?;
/// let bytes = out.close()?;
/// assert_eq!(bytes, [0b1010_0000]);
/// # Ok::<(), primitive_lists::io::bits::BitStreamError>(())
/// ```
#[derive(Debug)]
pub struct BitOutputStream<W: Write> {
    pub(crate) inner: Option<W>,
    pub(crate) buffer: u8,
    pub(crate) count: u8,
    pub(crate) order: BitOrder,
}

impl<W: Write> BitOutputStream<W> {
    pub fn new(inner: W, order: impl Into<BitOrder>) -> BitOutputStream<W> {
        BitOutputStream {
            inner: Some(inner),
            buffer: 0,
            count: 0,
            order: order.into(),
        }
    }

    pub const fn bit_order(&self) -> BitOrder {
        self.order
    }

    /// Returns the number of bits waiting in the partially filled byte.
    pub const fn pending_bits(&self) -> u8 {
        self.count
    }

    pub const fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns a reference to the underlying writer, or `None` once the stream is closed.
    pub fn get_ref(&self) -> Option<&W> {
        self.inner.as_ref()
    }

    /// Flushes the stream and returns the underlying writer.
    pub fn close(&mut self) -> Result<W, BitStreamError> {
        self.flush()?;
        self.inner.take().ok_or_else(|| StreamClosed.into())
    }

    /// Consumes the stream, returning the underlying writer without flushing. Any pending bits
    /// are discarded.
    pub fn into_inner(self) -> Option<W> {
        if self.count > 0 {
            log::warn!("discarding {} unflushed bits", self.count);
        }
        self.inner
    }

    fn writer(&mut self) -> Result<&mut W, StreamClosed> {
        self.inner.as_mut().ok_or(StreamClosed)
    }

    fn write_buffer(&mut self) -> Result<(), BitStreamError> {
        let byte = self.buffer;
        self.buffer = 0;
        self.count = 0;
        self.writer()?.write_all(&[byte])?;
        Ok(())
    }
}

impl<W: Write> BitWrite for BitOutputStream<W> {
    /// # Errors
    /// Fails with [`StreamClosed`] after [`close`](BitOutputStream::close), with [`InvalidBit`]
    /// if `bit` isn't `0` or `1`, and with [`Io`](BitStreamError::Io) if a completed byte can't be
    /// written.
    fn write_bit(&mut self, bit: u32) -> Result<(), BitStreamError> {
        self.writer()?;
        if bit > 1 {
            return Err(InvalidBit { bit }.into());
        }

        self.buffer |= (bit as u8) << self.order.shift(self.count);
        self.count += 1;
        if self.count == u8::BITS as u8 {
            self.write_buffer()?;
        }
        Ok(())
    }

    /// Writes any pending bits as a final byte padded with zeros, then flushes the underlying
    /// writer.
    fn flush(&mut self) -> Result<(), BitStreamError> {
        self.writer()?;
        if self.count > 0 {
            log::debug!("padding {} pending bits to a full byte", self.count);
            self.write_buffer()?;
        }
        Write::flush(self.writer()?)?;
        Ok(())
    }
}
