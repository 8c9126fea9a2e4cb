//! # Strobe
//! A framework for symmetric cryptographic protocols built on a single duplex object.
//!
//! A [`Strobe`] instance wraps the Keccak-f\[1600\] permutation in a duplex construction and
//! exposes a small vocabulary of operations (`AD`, `KEY`, `PRF`, `send_CLR`, `recv_CLR`,
//! `send_ENC`, `recv_ENC`, `send_MAC`, `recv_MAC`, `RATCHET`). Every operation is bound into
//! the transcript together with its flags, so hashing, authenticated encryption, key
//! derivation and two-party transport protocols can all be composed from the same object.
//!
//! ```
//! use strobe::{Security, Strobe};
//!
//! let mut alice = Strobe::new(b"example", Security::Bits128);
//! let mut bob = Strobe::new(b"example", Security::Bits128);
//! alice.key(&[7; 32]);
//! bob.key(&[7; 32]);
//!
//! let sealed = alice.send_aead(b"hello", b"header")?;
//! let (opened, valid) = bob.recv_aead(&sealed, b"header")?;
//! assert!(valid);
//! assert_eq!(opened, b"hello");
//! # Ok::<(), strobe::Error>(())
//! ```

#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Errors of the strobe crate
pub mod error;

/// Byte cursors used by state transfer.
mod io;

mod core;

pub use crate::{
    core::{
        aead::MAC_LEN,
        flags::{Flags, Operation, OutputKind},
        prng::StrobeRng,
        prp::{keccak::KeccakF1600, PRP},
        security::Security,
        strobe::{Input, Output, Role, Strobe},
        transfer::SERIALIZED_VERSION,
    },
    error::{Error, ErrorKind, Result},
};
