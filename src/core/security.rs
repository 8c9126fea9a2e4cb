use core::{convert::TryFrom, fmt};

use crate::error::{Error, Result};

/// Security level of a Strobe instance.
///
/// The level fixes the duplex rate and thus the block size for the lifetime of the instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Security {
    /// 128-bit security, Strobe-128/1600
    Bits128,
    /// 256-bit security, Strobe-256/1600
    Bits256,
}

impl Security {
    pub const fn bits(self) -> u16 {
        match self {
            Security::Bits128 => 128,
            Security::Bits256 => 256,
        }
    }

    /// Bytes of state touched per block: `200 - bits / 4`.
    pub const fn duplex_rate(self) -> usize {
        200 - self.bits() as usize / 4
    }

    /// Usable absorption bytes per block. Two bytes of the rate are kept for padding.
    pub const fn block_size(self) -> usize {
        self.duplex_rate() - 2
    }
}

impl TryFrom<u16> for Security {
    type Error = Error;

    fn try_from(bits: u16) -> Result<Self> {
        match bits {
            128 => Ok(Security::Bits128),
            256 => Ok(Security::Bits256),
            other => Err(Error::UnsupportedSecurity(other)),
        }
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
