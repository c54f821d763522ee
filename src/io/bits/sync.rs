use std::io::{Read, Write};

use parking_lot::Mutex;

use super::{
    BitInputStream, BitOrder, BitOutputStream, BitRead, BitStreamError, BitWrite,
};

/// A [`BitOutputStream`] that can be shared between threads.
///
/// Each call holds the stream's lock for its whole duration, so the bits of a single
/// [`write_bits`](BitWrite::write_bits) call are never interleaved with another thread's. The
/// order of separate calls from different threads is unspecified.
#[derive(Debug)]
pub struct SyncBitOutputStream<W: Write> {
    pub(crate) inner: Mutex<BitOutputStream<W>>,
}

impl<W: Write> SyncBitOutputStream<W> {
    pub fn new(inner: W, order: impl Into<BitOrder>) -> SyncBitOutputStream<W> {
        SyncBitOutputStream {
            inner: Mutex::new(BitOutputStream::new(inner, order)),
        }
    }

    pub fn bit_order(&self) -> BitOrder {
        self.inner.lock().bit_order()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().is_closed()
    }

    pub fn write_bit(&self, bit: u32) -> Result<(), BitStreamError> {
        self.inner.lock().write_bit(bit)
    }

    pub fn write_bits(&self, value: u32, count: u32) -> Result<(), BitStreamError> {
        self.inner.lock().write_bits(value, count)
    }

    pub fn flush(&self) -> Result<(), BitStreamError> {
        self.inner.lock().flush()
    }

    pub fn close(&self) -> Result<W, BitStreamError> {
        self.inner.lock().close()
    }

    pub fn into_inner(self) -> BitOutputStream<W> {
        self.inner.into_inner()
    }
}

impl<W: Write> BitWrite for &SyncBitOutputStream<W> {
    fn write_bit(&mut self, bit: u32) -> Result<(), BitStreamError> {
        (**self).write_bit(bit)
    }

    fn flush(&mut self) -> Result<(), BitStreamError> {
        (**self).flush()
    }

    fn write_bits(&mut self, value: u32, count: u32) -> Result<(), BitStreamError> {
        (**self).write_bits(value, count)
    }
}

impl<W: Write> BitWrite for SyncBitOutputStream<W> {
    fn write_bit(&mut self, bit: u32) -> Result<(), BitStreamError> {
        self.inner.get_mut().write_bit(bit)
    }

    fn flush(&mut self) -> Result<(), BitStreamError> {
        self.inner.get_mut().flush()
    }

    fn write_bits(&mut self, value: u32, count: u32) -> Result<(), BitStreamError> {
        self.inner.get_mut().write_bits(value, count)
    }
}

/// A [`BitInputStream`] that can be shared between threads, with the same locking guarantees as
/// [`SyncBitOutputStream`].
#[derive(Debug)]
pub struct SyncBitInputStream<R: Read> {
    pub(crate) inner: Mutex<BitInputStream<R>>,
}

impl<R: Read> SyncBitInputStream<R> {
    pub fn new(inner: R, order: impl Into<BitOrder>) -> SyncBitInputStream<R> {
        SyncBitInputStream {
            inner: Mutex::new(BitInputStream::new(inner, order)),
        }
    }

    pub fn bit_order(&self) -> BitOrder {
        self.inner.lock().bit_order()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().is_closed()
    }

    pub fn read_bit(&self) -> Result<u32, BitStreamError> {
        self.inner.lock().read_bit()
    }

    pub fn read_bits(&self, count: u32) -> Result<u32, BitStreamError> {
        self.inner.lock().read_bits(count)
    }

    pub fn close(&self) -> Result<R, BitStreamError> {
        self.inner.lock().close()
    }

    pub fn into_inner(self) -> BitInputStream<R> {
        self.inner.into_inner()
    }
}

impl<R: Read> BitRead for &SyncBitInputStream<R> {
    fn read_bit(&mut self) -> Result<u32, BitStreamError> {
        (**self).read_bit()
    }

    fn read_bits(&mut self, count: u32) -> Result<u32, BitStreamError> {
        (**self).read_bits(count)
    }
}

impl<R: Read> BitRead for SyncBitInputStream<R> {
    fn read_bit(&mut self) -> Result<u32, BitStreamError> {
        self.inner.get_mut().read_bit()
    }

    fn read_bits(&mut self, count: u32) -> Result<u32, BitStreamError> {
        self.inner.get_mut().read_bits(count)
    }
}
