//! Transfer of a [`Strobe`] across a process boundary.
//!
//! Layout, multi-byte integers in little-endian order:
//!
//! | field          | size    |                                                   |
//! |----------------|---------|---------------------------------------------------|
//! | version        | 1       | [`SERIALIZED_VERSION`]                            |
//! | security       | 2       | security level in bits                            |
//! | initialized    | 1       | 0 or 1                                            |
//! | role           | 1       | 0 initiator, 1 responder, 2 undetermined          |
//! | pos_begin      | 1       | start of the current operation                    |
//! | cur_flags      | 1       | flags of the last started operation               |
//! | pending length | 1       | bytes absorbed into the current block             |
//! | state          | `WIDTH` | permutation state, lanes in little-endian order   |
//!
//! Pending bytes are XORed into the state as they arrive, so the state field already carries
//! them and only their count is stored.

// Rust
use alloc::vec::Vec;
use core::convert::TryFrom;

// 3rd-party
use log::debug;

// Local
use super::{
    duplex::Duplex,
    flags::Flags,
    prp::PRP,
    security::Security,
    strobe::{Role, Strobe},
};
use crate::{
    error::{Error, Result},
    io::{IStream, OStream},
};

/// Version of the serialized layout.
pub const SERIALIZED_VERSION: u8 = 1;

const HEADER_LEN: usize = 8;

impl<F: PRP> Strobe<F> {
    /// Size of the output of [`Strobe::serialize`].
    pub fn serialized_len() -> usize {
        HEADER_LEN + F::WIDTH
    }

    fn header(&self) -> [u8; HEADER_LEN] {
        let duplex = self.duplex();
        let bits = duplex.security().bits().to_le_bytes();
        [
            SERIALIZED_VERSION,
            bits[0],
            bits[1],
            duplex.is_initialized() as u8,
            self.role().code(),
            duplex.pos_begin(),
            self.cur_flags().bits(),
            // pos < block_size <= 166
            duplex.pos() as u8,
        ]
    }

    /// Encode the full state.
    ///
    /// The encoding holds key material, treat it like a key.
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::serialized_len());
        bytes.extend_from_slice(&self.header());
        bytes.extend_from_slice(self.duplex().state());
        bytes
    }

    /// Encode the full state into `buf`, returning the number of bytes written.
    ///
    /// Nothing is written when `buf` is too short.
    pub fn serialize_into(&self, mut buf: &mut [u8]) -> Result<usize> {
        if buf.len() < Self::serialized_len() {
            return Err(Error::StreamAllocationExceededOut(Self::serialized_len(), buf.len()));
        }
        buf.put(&self.header())?;
        buf.put(self.duplex().state())?;
        Ok(Self::serialized_len())
    }

    /// Rebuild an instance from the output of [`Strobe::serialize`].
    pub fn recover(bytes: &[u8]) -> Result<Self>
    where
        F: Default,
    {
        if bytes.len() != Self::serialized_len() {
            return Err(Error::StateLengthMismatch(Self::serialized_len(), bytes.len()));
        }

        let mut stream = bytes;
        let version = stream.get_u8()?;
        if version != SERIALIZED_VERSION {
            return Err(Error::StateVersion(version));
        }
        let security = Security::try_from(stream.get_u16()?).map_err(|_| Error::CorruptState("security level"))?;
        let initialized = match stream.get_u8()? {
            0 => false,
            1 => true,
            _ => return Err(Error::CorruptState("initialized flag")),
        };
        let role = Role::from_code(stream.get_u8()?).ok_or(Error::CorruptState("role"))?;
        let pos_begin = stream.get_u8()?;
        let cur_flags = Flags::from_bits(stream.get_u8()?).ok_or(Error::CorruptState("operation flags"))?;
        let pos = stream.get_u8()? as usize;
        if pos >= security.block_size() {
            return Err(Error::CorruptState("pending length"));
        }
        // An operation that began in the current block began before its end.
        if pos_begin as usize > pos {
            return Err(Error::CorruptState("operation start"));
        }

        let mut s = F::default();
        s.state_mut().copy_from_slice(stream.try_advance(F::WIDTH)?);

        debug!("Recovered {} strobe instance, role {:?}", security, role);
        Ok(Strobe::from_parts(
            Duplex::from_parts(s, security, pos, pos_begin, initialized),
            role,
            cur_flags,
        ))
    }
}
