use std::io::{ErrorKind, Read};

use super::{BitOrder, BitRead, BitStreamError, EndOfStream, StreamClosed};

/// Reads bytes from an underlying [`Read`] and hands them out one bit at a time.
///
/// Bits are drained from each byte in the configured [`BitOrder`], which must match the order
/// the data was written with. Running out of bytes is reported as [`EndOfStream`]. Closing a
/// stream hands back the underlying reader, after which every read fails with [`StreamClosed`].
///
/// # Examples
/// ```
/// # use primitive_lists::io::bits::{BitInputStream, BitOrder, BitRead};
/// let mut input = BitInputStream::new(&[0b1010_0000][..], BitOrder::HighFirst);
/// assert_eq!(input.read_bits(4)?, 0b1010);
/// assert_eq!(input.read_bits(4)?, 0);
/// assert!(input.read_bit().unwrap_err().is_end_of_stream());
/// # Ok::<(), primitive_lists::io::bits::BitStreamError>(())
/// ```
#[derive(Debug)]
pub struct BitInputStream<R: Read> {
    pub(crate) inner: Option<R>,
    pub(crate) buffer: u8,
    /// Bits of `buffer` still to be read.
    pub(crate) remaining: u8,
    pub(crate) order: BitOrder,
}

impl<R: Read> BitInputStream<R> {
    pub fn new(inner: R, order: impl Into<BitOrder>) -> BitInputStream<R> {
        BitInputStream {
            inner: Some(inner),
            buffer: 0,
            remaining: 0,
            order: order.into(),
        }
    }

    pub const fn bit_order(&self) -> BitOrder {
        self.order
    }

    /// Returns the number of bits left in the current byte.
    pub const fn buffered_bits(&self) -> u8 {
        self.remaining
    }

    pub const fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns a reference to the underlying reader, or `None` once the stream is closed.
    pub fn get_ref(&self) -> Option<&R> {
        self.inner.as_ref()
    }

    /// Closes the stream and returns the underlying reader. Unread bits of the current byte are
    /// discarded.
    ///
    /// # Errors
    /// Fails with [`StreamClosed`] if the stream was already closed.
    pub fn close(&mut self) -> Result<R, BitStreamError> {
        let inner = self.inner.take().ok_or(StreamClosed)?;
        if self.remaining > 0 {
            log::debug!("discarding {} unread bits on close", self.remaining);
        }
        self.buffer = 0;
        self.remaining = 0;
        Ok(inner)
    }

    /// Consumes the stream, returning the underlying reader, or `None` if it was closed. Unread
    /// bits of the current byte are lost.
    pub fn into_inner(self) -> Option<R> {
        self.inner
    }

    fn reader(&mut self) -> Result<&mut R, StreamClosed> {
        self.inner.as_mut().ok_or(StreamClosed)
    }

    fn fill_buffer(&mut self) -> Result<(), BitStreamError> {
        let mut byte = [0_u8];
        match self.reader()?.read_exact(&mut byte) {
            Ok(()) => {},
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
                return Err(EndOfStream.into());
            },
            Err(err) => return Err(err.into()),
        }

        self.buffer = byte[0];
        self.remaining = u8::BITS as u8;
        Ok(())
    }
}

impl<R: Read> BitRead for BitInputStream<R> {
    /// # Errors
    /// Fails with [`StreamClosed`] after [`close`](BitInputStream::close), with [`EndOfStream`]
    /// once the underlying reader is exhausted and with [`Io`](BitStreamError::Io) if it fails.
    fn read_bit(&mut self) -> Result<u32, BitStreamError> {
        self.reader()?;
        if self.remaining == 0 {
            self.fill_buffer()?;
        }

        let position = u8::BITS as u8 - self.remaining;
        self.remaining -= 1;
        Ok(((self.buffer >> self.order.shift(position)) & 1) as u32)
    }
}
