use zerocopy::IntoBytes;

use super::PRP;

/// A pseudo-random permutation implementing `Keccak-F[1600]`
///
/// The byte view of the state is the little-endian encoding of its 25 lanes, independently of
/// the target's endianness.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeccakF1600 {
    /// Lanes stored in little-endian byte order
    state: [u64; 25],
}

impl KeccakF1600 {
    /// Use `Keccak-F[1600]` sponge function on inner state
    fn permutation(&mut self) {
        for lane in self.state.iter_mut() {
            *lane = u64::from_le(*lane);
        }
        keccak::f1600(&mut self.state);
        for lane in self.state.iter_mut() {
            *lane = lane.to_le();
        }
    }
}

impl PRP for KeccakF1600 {
    const WIDTH: usize = 200; // 1600 / 8

    fn transform(&mut self) {
        self.permutation();
    }

    fn state(&self) -> &[u8] {
        self.state.as_bytes()
    }

    fn state_mut(&mut self) -> &mut [u8] {
        self.state.as_mut_bytes()
    }
}
