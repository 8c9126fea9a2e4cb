//! Authenticated encryption with associated data, composed from `send_ENC`/`recv_ENC`, `AD` and
//! `send_MAC`/`recv_MAC`. No state is kept beyond the [`Strobe`] itself.

use alloc::vec::Vec;

use super::{prp::PRP, strobe::Strobe};
use crate::error::{Error, Result};

/// Length of the authentication tag appended by [`Strobe::send_aead`].
pub const MAC_LEN: usize = 16;

impl<F: PRP> Strobe<F> {
    /// Encrypt `plaintext` and authenticate it together with `ad`.
    ///
    /// Returns the ciphertext followed by a [`MAC_LEN`] bytes tag.
    pub fn send_aead(&mut self, plaintext: &[u8], ad: &[u8]) -> Result<Vec<u8>> {
        let mut sealed = self.send_enc(false, plaintext);
        self.ad(false, ad);
        sealed.extend_from_slice(&self.send_mac(false, MAC_LEN)?);
        Ok(sealed)
    }

    /// Decrypt the output of [`Strobe::send_aead`] and check its tag against `ad`.
    ///
    /// The plaintext is returned together with the outcome of the check and must be discarded
    /// when the check failed.
    pub fn recv_aead(&mut self, ciphertext: &[u8], ad: &[u8]) -> Result<(Vec<u8>, bool)> {
        if ciphertext.len() < MAC_LEN {
            return Err(Error::CiphertextTooShort(MAC_LEN, ciphertext.len()));
        }
        let (body, tag) = ciphertext.split_at(ciphertext.len() - MAC_LEN);
        let plaintext = self.recv_enc(false, body);
        self.ad(false, ad);
        let valid = self.recv_mac(false, tag);
        Ok((plaintext, valid))
    }
}
