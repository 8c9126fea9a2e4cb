//! Strobe-based pseudo-random number generator.
//!
//! Every request is answered by a `PRF` operation. `PRF` overwrites the state bytes it hands
//! out, so earlier outputs cannot be recomputed from a later state.

use rand::{CryptoRng, RngCore};

use super::{
    prp::{keccak::KeccakF1600, PRP},
    security::Security,
    strobe::Strobe,
};

/// Random number generator drawing from a keyed [`Strobe`].
#[derive(Clone)]
pub struct StrobeRng<F = KeccakF1600> {
    strobe: Strobe<F>,
}

impl<F: PRP> StrobeRng<F> {
    /// Draw from `strobe`, which should already hold a secret key.
    pub fn new(strobe: Strobe<F>) -> Self {
        Self { strobe }
    }

    pub fn into_inner(self) -> Strobe<F> {
        self.strobe
    }
}

impl StrobeRng {
    /// Deterministic generator keyed with `seed` and bound to `domain`.
    pub fn from_seed(domain: &[u8], seed: &[u8]) -> Self {
        let mut strobe = Strobe::new(domain, Security::Bits256);
        strobe.key(seed);
        Self::new(strobe)
    }

    #[cfg(feature = "osrng")]
    /// Generator keyed with 32 bytes from the operating system.
    pub fn from_entropy(domain: &[u8]) -> Self {
        let mut seed = [0_u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut seed);
        let rng = Self::from_seed(domain, &seed);
        for byte in seed.iter_mut() {
            *byte = 0;
        }
        rng
    }
}

impl<F: PRP> RngCore for StrobeRng<F> {
    fn next_u32(&mut self) -> u32 {
        let mut v = [0_u8; 4];
        self.fill_bytes(&mut v);
        u32::from_le_bytes(v)
    }

    fn next_u64(&mut self) -> u64 {
        let mut v = [0_u8; 8];
        self.fill_bytes(&mut v);
        u64::from_le_bytes(v)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        // A zero-length PRF would still begin an operation.
        if !dest.is_empty() {
            self.strobe.prf_into(dest);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<F: PRP> CryptoRng for StrobeRng<F> {}
