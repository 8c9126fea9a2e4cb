/// Duplex engine driving the permutation.
pub(crate) mod duplex;

/// Operation flags and the static operation table.
pub(crate) mod flags;

/// Permutation seam.
pub(crate) mod prp;

/// Supported security levels.
pub(crate) mod security;

/// Protocol state machine.
pub(crate) mod strobe;

/// Authenticated encryption composed from primitive operations.
pub(crate) mod aead;

/// Serialization and recovery of full instance state.
pub(crate) mod transfer;

/// Strobe-based pseudo-random number generator.
pub(crate) mod prng;
