//! Operation flags.
//!
//! Each Strobe operation is identified by a combination of flags. The flags are absorbed at the
//! start of every operation and they alone decide how the duplex call treats the data, so the
//! table below is the single source of truth for the behavior of every operation.

use core::{fmt, ops, str::FromStr};

use crate::error::{Error, Result};

/// Set of operation flags.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

impl Flags {
    /// Inbound: data is received rather than sent.
    pub const I: Flags = Flags(1 << 0);
    /// Application: data is visible to the application.
    pub const A: Flags = Flags(1 << 1);
    /// Cipher: data is processed with the keystream.
    pub const C: Flags = Flags(1 << 2);
    /// Transport: data is sent or received over the transport.
    pub const T: Flags = Flags(1 << 3);
    /// Meta: framing data, kept distinct from payload data of the same class.
    pub const M: Flags = Flags(1 << 4);
    /// Keytree: reserved, only forces a permutation when an operation begins.
    pub const K: Flags = Flags(1 << 5);

    const LETTERS: [(Flags, char); 6] = [
        (Flags::I, 'I'),
        (Flags::A, 'A'),
        (Flags::C, 'C'),
        (Flags::T, 'T'),
        (Flags::M, 'M'),
        (Flags::K, 'K'),
    ];
    const ALL_BITS: u8 = 0x3f;

    pub const fn empty() -> Self {
        Flags(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Flags from raw bits, `None` if bits above `K` are set.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL_BITS == 0 {
            Some(Flags(bits))
        } else {
            None
        }
    }

    /// All flags of `other` are set.
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// At least one flag of `other` is set.
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    /// Send-side cipher operations encrypt by taking the keystream after absorbing.
    pub fn mask_after(self) -> bool {
        self & (Flags::C | Flags::I | Flags::T) == Flags::C | Flags::T
    }

    /// Every other cipher operation masks its input before absorbing it.
    pub fn mask_before(self) -> bool {
        self.contains(Flags::C) && !self.mask_after()
    }

    /// Operations that only produce output from the state take a length instead of data.
    pub fn requires_length(self) -> bool {
        self & (Flags::I | Flags::T) != Flags::I | Flags::T && self & (Flags::I | Flags::A) != Flags::A
    }

    pub fn output_kind(self) -> OutputKind {
        if self.contains(Flags::I | Flags::A) {
            OutputKind::Application
        } else if self & (Flags::I | Flags::T) == Flags::T {
            OutputKind::Transport
        } else if self & (Flags::I | Flags::A | Flags::T) == Flags::I | Flags::T {
            OutputKind::Verification
        } else {
            OutputKind::Nothing
        }
    }
}

impl ops::BitOr for Flags {
    type Output = Flags;
    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl ops::BitAnd for Flags {
    type Output = Flags;
    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl ops::BitXor for Flags {
    type Output = Flags;
    fn bitxor(self, rhs: Flags) -> Flags {
        Flags(self.0 ^ rhs.0)
    }
}

impl ops::BitXorAssign for Flags {
    fn bitxor_assign(&mut self, rhs: Flags) {
        self.0 ^= rhs.0;
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("-");
        }
        for (flag, letter) in Self::LETTERS.iter() {
            if self.contains(*flag) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flags({})", self)
    }
}

/// What an operation hands back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Received or generated bytes for the application (`recv_CLR`, `recv_ENC`, `PRF`).
    Application,
    /// Bytes for the transport (`send_CLR`, `send_ENC`, `send_MAC`).
    Transport,
    /// Constant-time MAC check (`recv_MAC`).
    Verification,
    /// Nothing (`AD`, `KEY`, `RATCHET`).
    Nothing,
}

/// The Strobe operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Ad,
    Key,
    Prf,
    SendClr,
    RecvClr,
    SendEnc,
    RecvEnc,
    SendMac,
    RecvMac,
    Ratchet,
}

/// Canonical names and flags, indexed by `Operation as usize`.
const TABLE: [(Operation, &str, Flags); 10] = [
    (Operation::Ad, "AD", Flags::A),
    (Operation::Key, "KEY", Flags(Flags::A.0 | Flags::C.0)),
    (Operation::Prf, "PRF", Flags(Flags::I.0 | Flags::A.0 | Flags::C.0)),
    (Operation::SendClr, "send_CLR", Flags(Flags::A.0 | Flags::T.0)),
    (Operation::RecvClr, "recv_CLR", Flags(Flags::I.0 | Flags::A.0 | Flags::T.0)),
    (Operation::SendEnc, "send_ENC", Flags(Flags::A.0 | Flags::C.0 | Flags::T.0)),
    (Operation::RecvEnc, "recv_ENC", Flags(Flags::I.0 | Flags::A.0 | Flags::C.0 | Flags::T.0)),
    (Operation::SendMac, "send_MAC", Flags(Flags::C.0 | Flags::T.0)),
    (Operation::RecvMac, "recv_MAC", Flags(Flags::I.0 | Flags::C.0 | Flags::T.0)),
    (Operation::Ratchet, "RATCHET", Flags::C),
];

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Ad,
        Operation::Key,
        Operation::Prf,
        Operation::SendClr,
        Operation::RecvClr,
        Operation::SendEnc,
        Operation::RecvEnc,
        Operation::SendMac,
        Operation::RecvMac,
        Operation::Ratchet,
    ];

    pub fn flags(self) -> Flags {
        TABLE[self as usize].2
    }

    pub fn name(self) -> &'static str {
        TABLE[self as usize].1
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        TABLE
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(op, _, _)| *op)
            .ok_or_else(|| Error::InvalidOperation(name.into()))
    }
}
