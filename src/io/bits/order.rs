/// The order in which the bits of each byte are filled or drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitOrder {
    /// The first bit occupies `0b1000_0000`.
    HighFirst,
    /// The first bit occupies `0b0000_0001`.
    LowFirst,
}

impl BitOrder {
    /// Returns the shift of the bit at `position` (`0..8`, in stream order) within its byte.
    pub(crate) const fn shift(self, position: u8) -> u8 {
        match self {
            BitOrder::HighFirst => 7 - position,
            BitOrder::LowFirst => position,
        }
    }
}

/// A byte order, used to select a [`BitOrder`] for compatibility with existing bit streams.
///
/// The mapping is fixed and looks inverted: [`ByteOrder::LittleEndian`] selects
/// [`BitOrder::HighFirst`] and [`ByteOrder::BigEndian`] selects [`BitOrder::LowFirst`]. Data
/// written under one name has always been laid out this way, so it stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl From<ByteOrder> for BitOrder {
    fn from(value: ByteOrder) -> Self {
        match value {
            ByteOrder::LittleEndian => BitOrder::HighFirst,
            ByteOrder::BigEndian => BitOrder::LowFirst,
        }
    }
}

impl From<BitOrder> for ByteOrder {
    fn from(value: BitOrder) -> Self {
        match value {
            BitOrder::HighFirst => ByteOrder::LittleEndian,
            BitOrder::LowFirst => ByteOrder::BigEndian,
        }
    }
}
