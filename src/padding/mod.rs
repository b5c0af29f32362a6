// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Block cipher padding schemes.
//!
//! Two schemes are provided. [`NullBytePadding`] is the reference scheme:
//! trivially simple, but inherently ambiguous for plaintexts that end in
//! zero bytes. [`Pkcs7Padding`] encodes the pad length into every pad byte
//! and is the scheme to use whenever unambiguous unpadding matters.

use subtle::{Choice, ConstantTimeEq};

use crate::{BlockCipherPadding, CipherError};

/// Null-byte (zero) padding.
///
/// `pad(len)` emits `len` zero bytes; `unpad` counts trailing zero bytes.
///
/// # Ambiguity
///
/// This scheme cannot distinguish genuine trailing `0x00` content bytes
/// from padding: decrypting strips them all. That is an inherent, accepted
/// property of null-byte padding, not a defect. Plaintexts that may end
/// in zero bytes need [`Pkcs7Padding`] or a length-prefixed framing
/// instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullBytePadding;

impl BlockCipherPadding for NullBytePadding {
    fn name(&self) -> &'static str {
        "NullByte"
    }

    fn pad(&self, len: usize) -> Vec<u8> {
        vec![0u8; len]
    }

    /// Counts trailing zero bytes. Never fails; see the type-level note on
    /// ambiguity.
    fn unpad(&self, block: &[u8]) -> Result<usize, CipherError> {
        Ok(block.iter().rev().take_while(|&&b| b == 0).count())
    }
}

/// PKCS#7 padding.
///
/// `pad(len)` emits `len` bytes each holding the value `len`; `unpad`
/// reads the final byte as the pad count and checks that the whole tail
/// agrees. Only block sizes up to 255 bytes are representable.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pkcs7Padding;

impl BlockCipherPadding for Pkcs7Padding {
    fn name(&self) -> &'static str {
        "PKCS7"
    }

    fn pad(&self, len: usize) -> Vec<u8> {
        debug_assert!(len <= u8::MAX as usize);
        vec![len as u8; len]
    }

    /// Validates and returns the pad count from the final block.
    ///
    /// The tail comparison itself runs in constant time; the count-range
    /// checks branch. Callers needing full padding-oracle resistance
    /// should authenticate the ciphertext before decrypting.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidPadding`] if the block is empty, the
    /// count is zero or exceeds the block length, or any pad byte differs
    /// from the count.
    fn unpad(&self, block: &[u8]) -> Result<usize, CipherError> {
        let Some(&last) = block.last() else {
            tracing::error!("PKCS#7 unpad on an empty block");
            return Err(CipherError::InvalidPadding("empty block"));
        };

        let count = last as usize;
        if count == 0 || count > block.len() {
            tracing::error!(
                count,
                block_len = block.len(),
                "PKCS#7 pad count out of range"
            );
            return Err(CipherError::InvalidPadding("pad count out of range"));
        }

        let mut consistent = Choice::from(1u8);
        for b in &block[block.len() - count..] {
            consistent &= b.ct_eq(&last);
        }
        if bool::from(consistent) {
            Ok(count)
        } else {
            tracing::error!(count, "PKCS#7 pad bytes inconsistent");
            Err(CipherError::InvalidPadding("pad bytes inconsistent"))
        }
    }
}
