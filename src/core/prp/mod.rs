pub(crate) mod keccak;

/// Pseudo-random permutation.
///
/// Strobe only ever calls the forward transform, the permutation is treated as a black box
/// over a fixed-width state.
#[allow(clippy::upper_case_acronyms)]
pub trait PRP {
    /// Size of the full state in bytes.
    const WIDTH: usize;

    /// Transform full state.
    fn transform(&mut self);

    /// Ref for ejecting the state as bytes.
    fn state(&self) -> &[u8];

    /// Mut ref for injecting bytes into the state.
    fn state_mut(&mut self) -> &mut [u8];
}
