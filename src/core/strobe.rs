//! Strobe protocol object.
//!
//! A [`Strobe`] sequences operations over one duplex state. Every operation begins by absorbing
//! the position where the previous operation began and its own flags, so both sides of a
//! protocol only agree on outputs if they agree on the whole sequence of operations.

// Rust
use alloc::vec::Vec;
use core::{convert::TryFrom, fmt};

// 3rd-party
use log::{debug, trace};

// Local
use super::{
    duplex::{Duplex, Mask},
    flags::{Flags, Operation, OutputKind},
    prp::{keccak::KeccakF1600, PRP},
    security::Security,
};
use crate::error::{Error, Result};

/// Protocol identifier absorbed as the cSHAKE customization string of every instance.
const PROTOCOL_ID: &[u8] = b"STROBEv1.0.2";

/// Which side of the transport an instance plays.
///
/// Fixed by the first transport operation: sending first makes an instance the initiator,
/// receiving first makes it the responder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Initiator,
    Responder,
    Undetermined,
}

impl Role {
    pub(crate) fn code(self) -> u8 {
        match self {
            Role::Initiator => 0,
            Role::Responder => 1,
            Role::Undetermined => 2,
        }
    }

    pub(crate) fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Role::Initiator),
            1 => Some(Role::Responder),
            2 => Some(Role::Undetermined),
            _ => None,
        }
    }
}

/// Argument of [`Strobe::operate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input<'a> {
    /// Data to absorb, encrypt, decrypt or verify.
    Data(&'a [u8]),
    /// Number of bytes to produce for `PRF`, `send_MAC` and `RATCHET`.
    Length(usize),
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(data: &'a [u8]) -> Self {
        Input::Data(data)
    }
}

impl<'a> From<usize> for Input<'a> {
    fn from(length: usize) -> Self {
        Input::Length(length)
    }
}

/// Result of [`Strobe::operate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Nothing,
    Bytes(Vec<u8>),
    /// Outcome of a MAC check. A failed check is not an error, callers must test it before
    /// trusting anything received along with the tag.
    Verified(bool),
}

impl Output {
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Output::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn verified(&self) -> Option<bool> {
        match self {
            Output::Verified(valid) => Some(*valid),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Strobe<F = KeccakF1600> {
    duplex: Duplex<F>,

    /// Transport role, set once.
    role: Role,

    /// Flags of the last started operation, checked by streamed calls.
    cur_flags: Flags,
}

impl Strobe {
    /// Create a Keccak-f\[1600\] instance bound to `customization`.
    pub fn new(customization: &[u8], security: Security) -> Self {
        Self::with_prp(customization, security)
    }

    /// Create an instance from a security level given in bits.
    pub fn with_security_bits(customization: &[u8], bits: u16) -> Result<Self> {
        Ok(Self::new(customization, Security::try_from(bits)?))
    }
}

impl<F: PRP + Default> Strobe<F> {
    /// Create an instance over the permutation `F`, bound to `customization`.
    pub fn with_prp(customization: &[u8], security: Security) -> Self {
        let mut duplex = Duplex::new(security);

        // bytepad(left_encode(rate) || encode_string("") || encode_string(PROTOCOL_ID), rate)
        let mut domain = vec![
            1,
            security.duplex_rate() as u8,
            1,
            0,
            1,
            (PROTOCOL_ID.len() * 8) as u8,
        ];
        domain.extend_from_slice(PROTOCOL_ID);
        duplex.duplex(&mut domain, Mask::None, true);
        duplex.set_initialized();

        let mut strobe = Self {
            duplex,
            role: Role::Undetermined,
            cur_flags: Flags::empty(),
        };
        strobe.transact(true, Operation::Ad, customization.to_vec());
        debug!("Created {} strobe instance", security);
        strobe
    }
}

impl<F: PRP> Strobe<F> {
    pub(crate) fn from_parts(duplex: Duplex<F>, role: Role, cur_flags: Flags) -> Self {
        Self {
            duplex,
            role,
            cur_flags,
        }
    }

    pub(crate) fn duplex(&self) -> &Duplex<F> {
        &self.duplex
    }

    pub(crate) fn cur_flags(&self) -> Flags {
        self.cur_flags
    }

    pub fn security(&self) -> Security {
        self.duplex.security()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Run `op` on `input`.
    ///
    /// `meta` marks framing data. With `more` the call continues the operation started by the
    /// previous call instead of beginning a new one; the operation and `meta` must match it.
    pub fn operate(&mut self, meta: bool, op: Operation, input: Input<'_>, more: bool) -> Result<Output> {
        let flags = flags_of(meta, op);
        let mut data = match input {
            Input::Length(n) if flags.requires_length() && n > 0 => vec![0; n],
            _ if flags.requires_length() => return Err(Error::LengthRequired(op)),
            Input::Data(data) => data.to_vec(),
            Input::Length(0) => Vec::new(),
            Input::Length(n) => return Err(Error::UnexpectedLength(op, n)),
        };

        if more {
            if flags.output_kind() == OutputKind::Verification {
                return Err(Error::StreamedVerification);
            }
            if flags != self.cur_flags {
                return Err(Error::StreamMismatch {
                    expected: self.cur_flags,
                    found: flags,
                });
            }
        }

        self.run(flags, &mut data, more);
        Ok(match flags.output_kind() {
            OutputKind::Application | OutputKind::Transport => Output::Bytes(data),
            OutputKind::Verification => Output::Verified(is_all_zero(&data)),
            OutputKind::Nothing => Output::Nothing,
        })
    }

    /// [`Strobe::operate`] with the operation given by its canonical name, e.g. `"send_ENC"`.
    pub fn operate_named(&mut self, meta: bool, name: &str, input: Input<'_>, more: bool) -> Result<Output> {
        self.operate(meta, name.parse()?, input, more)
    }

    /// Absorb additional data.
    pub fn ad(&mut self, meta: bool, data: &[u8]) {
        self.transact(meta, Operation::Ad, data.to_vec());
    }

    /// Absorb a key. Everything that follows depends on it.
    pub fn key(&mut self, key: &[u8]) {
        self.transact(false, Operation::Key, key.to_vec());
    }

    /// Derive `len` pseudo-random bytes from everything absorbed so far.
    pub fn prf(&mut self, len: usize) -> Result<Vec<u8>> {
        if len == 0 {
            return Err(Error::LengthRequired(Operation::Prf));
        }
        Ok(self.transact(false, Operation::Prf, vec![0; len]))
    }

    /// Send cleartext, returning the bytes to put on the wire.
    pub fn send_clr(&mut self, meta: bool, cleartext: &[u8]) -> Vec<u8> {
        self.transact(meta, Operation::SendClr, cleartext.to_vec())
    }

    /// Receive cleartext.
    pub fn recv_clr(&mut self, meta: bool, cleartext: &[u8]) -> Vec<u8> {
        self.transact(meta, Operation::RecvClr, cleartext.to_vec())
    }

    /// Encrypt `plaintext`. Not authenticated on its own, follow it with [`Strobe::send_mac`].
    pub fn send_enc(&mut self, meta: bool, plaintext: &[u8]) -> Vec<u8> {
        self.transact(meta, Operation::SendEnc, plaintext.to_vec())
    }

    /// Decrypt `ciphertext`. Not authenticated on its own, follow it with [`Strobe::recv_mac`].
    pub fn recv_enc(&mut self, meta: bool, ciphertext: &[u8]) -> Vec<u8> {
        self.transact(meta, Operation::RecvEnc, ciphertext.to_vec())
    }

    /// Produce a `len` bytes tag over the transcript.
    pub fn send_mac(&mut self, meta: bool, len: usize) -> Result<Vec<u8>> {
        if len == 0 {
            return Err(Error::LengthRequired(Operation::SendMac));
        }
        Ok(self.transact(meta, Operation::SendMac, vec![0; len]))
    }

    /// Check a tag produced by the peer's [`Strobe::send_mac`], in constant time.
    pub fn recv_mac(&mut self, meta: bool, tag: &[u8]) -> bool {
        let residue = self.transact(meta, Operation::RecvMac, tag.to_vec());
        is_all_zero(&residue)
    }

    /// Overwrite `len` bytes of the state with zeros so that it cannot be rolled back.
    pub fn ratchet(&mut self, len: usize) -> Result<()> {
        if len == 0 {
            return Err(Error::LengthRequired(Operation::Ratchet));
        }
        self.transact(false, Operation::Ratchet, vec![0; len]);
        Ok(())
    }

    /// Fill `out` with `PRF` output.
    pub(crate) fn prf_into(&mut self, out: &mut [u8]) {
        for byte in out.iter_mut() {
            *byte = 0;
        }
        self.run(Operation::Prf.flags(), out, false);
    }

    /// Start a new operation on data whose shape was already checked.
    fn transact(&mut self, meta: bool, op: Operation, mut data: Vec<u8>) -> Vec<u8> {
        self.run(flags_of(meta, op), &mut data, false);
        data
    }

    fn run(&mut self, flags: Flags, data: &mut [u8], more: bool) {
        trace!("Operation {} over {} bytes (more: {})", flags, data.len(), more);
        if !more {
            self.begin_op(flags);
            self.cur_flags = flags;
        }

        let mask = if flags.mask_after() {
            Mask::After
        } else if flags.mask_before() {
            Mask::Before
        } else {
            Mask::None
        };
        self.duplex.duplex(data, mask, false);
    }

    fn begin_op(&mut self, mut flags: Flags) {
        if flags.contains(Flags::T) {
            if self.role == Role::Undetermined {
                self.role = if flags.contains(Flags::I) {
                    Role::Responder
                } else {
                    Role::Initiator
                };
                debug!("Transport role determined: {:?}", self.role);
            }
            // The responder sees the initiator's "send" as its "recv" and vice versa.
            if self.role == Role::Responder {
                flags ^= Flags::I;
            }
        }

        let old_begin = self.duplex.begin();
        let force_permute = flags.intersects(Flags::C | Flags::K);
        self.duplex.duplex(&mut [old_begin, flags.bits()], Mask::None, force_permute);
    }
}

fn flags_of(meta: bool, op: Operation) -> Flags {
    if meta {
        op.flags() | Flags::M
    } else {
        op.flags()
    }
}

/// OR of all bytes compared to zero, without early exit.
fn is_all_zero(bytes: &[u8]) -> bool {
    bytes.iter().fold(0_u8, |acc, b| acc | b) == 0
}

impl<F: PRP> fmt::Debug for Strobe<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strobe")
            .field("security", &self.duplex.security())
            .field("role", &self.role)
            .field("pos", &self.duplex.pos())
            .field("pos_begin", &self.duplex.pos_begin())
            .field("cur_flags", &self.cur_flags)
            .finish()
    }
}
