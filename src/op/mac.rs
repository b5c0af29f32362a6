// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Message authentication code capability trait.

use subtle::ConstantTimeEq;

use crate::{CipherError, CipherParameters};

/// Contract for a keyed digest (message authentication code).
///
/// # Lifecycle
///
/// After [`init`](Self::init), a message is absorbed through any number of
/// [`update`](Self::update) calls and closed with [`digest`](Self::digest).
///
/// Producing a digest resets the MAC to its post-init state. This
/// self-reset is a documented part of the contract, not an implementation
/// detail: `digest` marks a logical message boundary, and calling `update`
/// afterwards starts a fresh message under the same key. Callers that
/// abandon a message midway call [`reset`](Self::reset) instead.
pub trait Mac {
    /// Returns the algorithm identifier, e.g. `"HMAC-SHA256"`.
    fn name(&self) -> String;

    /// Returns the digest length in bytes.
    fn mac_size(&self) -> usize;

    /// Keys the MAC.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidParameter`] if `params` is not the
    /// variant this MAC expects.
    fn init(&mut self, params: &CipherParameters) -> Result<(), CipherError>;

    /// Absorbs message bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::NotInitialized`] before [`init`](Self::init).
    fn update(&mut self, input: &[u8]) -> Result<(), CipherError>;

    /// Writes the digest of the absorbed message into `output`, returns
    /// its length, and resets to the post-init state.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::ShortBuffer`] if `output` is shorter than
    /// [`mac_size`](Self::mac_size) (the pending message is kept, so the
    /// call can be retried) and [`CipherError::NotInitialized`] before
    /// [`init`](Self::init).
    fn digest(&mut self, output: &mut [u8]) -> Result<usize, CipherError>;

    /// Discards any absorbed message bytes, restoring the post-init state.
    /// A no-op before the first `init`.
    fn reset(&mut self);

    /// Digests the absorbed message and compares it with `expected` in
    /// constant time.
    ///
    /// Like [`digest`](Self::digest), this closes the message and resets
    /// the MAC. A length mismatch yields `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::NotInitialized`] before [`init`](Self::init).
    fn verify(&mut self, expected: &[u8]) -> Result<bool, CipherError> {
        let mut tag = vec![0u8; self.mac_size()];
        self.digest(&mut tag)?;
        Ok(tag.as_slice().ct_eq(expected).into())
    }
}
