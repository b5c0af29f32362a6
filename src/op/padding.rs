// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Block cipher padding capability trait.

use crate::CipherError;

/// Contract for a block-cipher padding scheme.
///
/// A padding scheme is a stateless pair of pure functions: [`pad`](Self::pad)
/// produces the bytes appended to the final partial block before the last
/// encrypt call, and [`unpad`](Self::unpad) recovers how many trailing
/// bytes of the final decrypted block to discard.
pub trait BlockCipherPadding {
    /// Returns the scheme identifier, e.g. `"PKCS7"`.
    fn name(&self) -> &'static str;

    /// Produces exactly `len` padding bytes.
    fn pad(&self, len: usize) -> Vec<u8>;

    /// Returns the number of trailing padding bytes in a decrypted final
    /// block. The count never exceeds `block.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidPadding`] when the block's content is
    /// not self-consistent under this scheme and the count cannot be
    /// determined unambiguously.
    fn unpad(&self, block: &[u8]) -> Result<usize, CipherError>;

    /// Declares whether the scheme emits padding for an already
    /// block-aligned message.
    ///
    /// Schemes whose `pad` always emits at least one byte (and therefore a
    /// full extra block on aligned input) keep the default `true`. A
    /// scheme that is a no-op on aligned input returns `false`, and the
    /// encrypt finish path then skips padding when nothing is buffered.
    /// Output-size prediction consults the same flag.
    fn pads_when_aligned(&self) -> bool {
        true
    }
}
