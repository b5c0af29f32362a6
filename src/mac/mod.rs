// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Keyed message authentication.
//!
//! [`HmacSha256`] implements the [`Mac`] capability over HMAC-SHA-256.
//! It serves as the reference `Mac` implementation and the cross-check
//! that the capability surface works for authentication primitives, not
//! just ciphers.

use hmac::digest::Reset;
use hmac::{Hmac, Mac as _};
use sha2::Sha256;

use crate::{CipherError, CipherParameters, Mac};

/// HMAC over SHA-256, producing 32-byte tags.
///
/// Keys of any length are accepted; per HMAC, keys longer than the hash
/// block are hashed down first. [`digest`](Mac::digest) emits the tag and
/// resets in one step, so back-to-back messages need no explicit
/// [`reset`](Mac::reset) between them.
#[derive(Default)]
pub struct HmacSha256 {
    mac: Option<Hmac<Sha256>>,
}

/// Tag length of [`HmacSha256`] in bytes.
pub const HMAC_SHA256_MAC_SIZE: usize = 32;

impl HmacSha256 {
    /// Creates an unkeyed instance. [`init`](Mac::init) must be called
    /// before any data is fed.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Mac for HmacSha256 {
    fn name(&self) -> String {
        "HMAC-SHA256".to_string()
    }

    fn mac_size(&self) -> usize {
        HMAC_SHA256_MAC_SIZE
    }

    fn init(&mut self, params: &CipherParameters) -> Result<(), CipherError> {
        let CipherParameters::Key(key) = params else {
            tracing::error!("HMAC takes a raw key without an IV");
            return Err(CipherError::InvalidParameter("expected a raw key"));
        };
        self.mac = Some(
            Hmac::<Sha256>::new_from_slice(key.as_bytes())
                .map_err(|_| CipherError::InvalidParameter("HMAC key rejected"))?,
        );
        Ok(())
    }

    fn update(&mut self, input: &[u8]) -> Result<(), CipherError> {
        let mac = self
            .mac
            .as_mut()
            .ok_or(CipherError::NotInitialized("HMAC has no key"))?;
        mac.update(input);
        Ok(())
    }

    fn digest(&mut self, output: &mut [u8]) -> Result<usize, CipherError> {
        let mac = self
            .mac
            .as_mut()
            .ok_or(CipherError::NotInitialized("HMAC has no key"))?;
        // validate before finalizing so a retry still sees the message
        if output.len() < HMAC_SHA256_MAC_SIZE {
            tracing::error!(
                required = HMAC_SHA256_MAC_SIZE,
                available = output.len(),
                "output cannot hold the tag"
            );
            return Err(CipherError::ShortBuffer {
                required: HMAC_SHA256_MAC_SIZE,
                available: output.len(),
            });
        }
        let tag = mac.finalize_reset().into_bytes();
        output[..HMAC_SHA256_MAC_SIZE].copy_from_slice(tag.as_slice());
        Ok(HMAC_SHA256_MAC_SIZE)
    }

    fn reset(&mut self) {
        if let Some(mac) = self.mac.as_mut() {
            Reset::reset(mac);
        }
    }
}
