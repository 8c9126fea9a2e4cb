//! Duplex construction over a [`PRP`].
//!
//! Input is XORed into the state as soon as it arrives, so the bytes of the pending (not yet
//! permuted) block are the first `pos` bytes of the rate. Padding and the permutation are
//! applied when the block is full or when a permutation is forced.

use core::cmp;

use super::{prp::PRP, security::Security};

/// cSHAKE domain byte appended after the operation-begin marker.
const DOMAIN_PADDING: u8 = 0x04;
/// Final bit of the padded block.
const FINAL_PADDING: u8 = 0x80;

/// How the keystream is combined with the caller's data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mask {
    /// Data is absorbed as is.
    None,
    /// Data is XORed with the keystream, then the result is absorbed.
    Before,
    /// Data is absorbed, then replaced with the resulting state bytes.
    After,
}

fn xor(s: &mut [u8], x: &[u8]) {
    for (si, xi) in s.iter_mut().zip(x.iter()) {
        *si ^= *xi;
    }
}

/// `s` holds the keystream, `y` holds data to unmask; the state ends up holding the masked bytes.
fn unmask_xor_inplace(s: &mut [u8], y: &mut [u8]) {
    for (si, yi) in s.iter_mut().zip(y.iter_mut()) {
        let t = *yi;
        *yi ^= *si;
        *si = t;
    }
}

/// `s` holds the keystream, `x` holds data to mask; both end up holding the masked bytes.
fn mask_xor_inplace(s: &mut [u8], x: &mut [u8]) {
    for (si, xi) in s.iter_mut().zip(x.iter_mut()) {
        *xi ^= *si;
        *si = *xi;
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Duplex<F> {
    /// Permutation together with its state.
    s: F,

    security: Security,

    /// Length of the pending block, i.e. offset in bytes within the rate.
    pos: usize,

    /// Where the current operation began: 0 for the previous block, else `pos + 1`.
    pos_begin: u8,

    /// Cleared only while the domain separation block is absorbed.
    initialized: bool,
}

impl<F: PRP + Default> Duplex<F> {
    /// Zero state, nothing absorbed yet.
    pub(crate) fn new(security: Security) -> Self {
        Self::from_parts(F::default(), security, 0, 0, false)
    }
}

impl<F: PRP> Duplex<F> {
    pub(crate) fn from_parts(s: F, security: Security, pos: usize, pos_begin: u8, initialized: bool) -> Self {
        debug_assert!(pos < security.block_size());
        Self {
            s,
            security,
            pos,
            pos_begin,
            initialized,
        }
    }

    pub(crate) fn security(&self) -> Security {
        self.security
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn pos_begin(&self) -> u8 {
        self.pos_begin
    }

    pub(crate) fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn set_initialized(&mut self) {
        self.initialized = true;
    }

    pub(crate) fn state(&self) -> &[u8] {
        self.s.state()
    }

    /// Mark the start of a new operation at the current position, returning the previous mark.
    pub(crate) fn begin(&mut self) -> u8 {
        let old_begin = self.pos_begin;
        // pos < block_size <= 166, the marker always fits.
        self.pos_begin = (self.pos + 1) as u8;
        old_begin
    }

    /// Process `data` in place one block at a time, permuting whenever a block fills up.
    ///
    /// A full block starting at position 0 is handled in one step; shorter runs top up the
    /// pending block. With `force_permute` a non-empty pending block is closed at the end so
    /// that the next operation starts on a fresh block.
    pub(crate) fn duplex(&mut self, mut data: &mut [u8], mask: Mask, force_permute: bool) {
        let block_size = self.security.block_size();
        while !data.is_empty() {
            let n = cmp::min(block_size - self.pos, data.len());
            let (head, tail) = core::mem::take(&mut data).split_at_mut(n);
            let s = &mut self.s.state_mut()[self.pos..self.pos + n];
            match mask {
                Mask::None => xor(s, head),
                Mask::Before => unmask_xor_inplace(s, head),
                Mask::After => mask_xor_inplace(s, head),
            }
            data = tail;
            self.pos += n;
            if self.pos == block_size {
                self.run_permutation();
            }
        }

        if force_permute && self.pos != 0 {
            self.run_permutation();
        }
    }

    /// Pad the pending block and apply the permutation.
    ///
    /// Before initialization the block is only zero padded, which makes the domain separation
    /// block a valid cSHAKE customization block.
    fn run_permutation(&mut self) {
        if self.initialized {
            let rate = self.security.duplex_rate();
            let state = self.s.state_mut();
            state[self.pos] ^= self.pos_begin;
            state[self.pos + 1] ^= DOMAIN_PADDING;
            state[rate - 1] ^= FINAL_PADDING;
        }
        self.s.transform();
        self.pos = 0;
        self.pos_begin = 0;
    }
}
