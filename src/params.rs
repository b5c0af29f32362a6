// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Initialization parameters for ciphers, MACs and PRNGs.
//!
//! Implementations receive an opaque [`CipherParameters`] bag at `init`
//! time and match on the concrete variant they support, failing with
//! [`CipherError::InvalidParameter`](crate::CipherError::InvalidParameter)
//! for anything else. Key bytes are copied out of the caller's buffer at
//! construction and zeroized when the parameter value is dropped.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Direction of a symmetric transform, fixed for the duration of an `init`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherDirection {
    /// Transform plaintext into ciphertext.
    Encrypt,
    /// Transform ciphertext into plaintext.
    Decrypt,
}

impl CipherDirection {
    /// Returns `true` for the encrypt direction.
    pub fn is_encrypt(self) -> bool {
        matches!(self, CipherDirection::Encrypt)
    }
}

/// Raw symmetric key material.
///
/// The bytes are copied from the caller's slice at construction, so the
/// caller is free to reuse or mutate its own buffer afterwards. The copy
/// is zeroized when the value is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyParameter {
    key: Vec<u8>,
}

impl KeyParameter {
    /// Creates a key parameter by copying the given bytes.
    ///
    /// # Arguments
    ///
    /// * `key` - Raw key bytes; copied, not retained by reference
    pub fn from_bytes(key: &[u8]) -> Self {
        Self { key: key.to_vec() }
    }

    /// Returns the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    /// Returns the key length in bytes.
    pub fn len(&self) -> usize {
        self.key.len()
    }

    /// Returns `true` if the key is empty.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

/// Key bytes stay out of debug output.
impl fmt::Debug for KeyParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyParameter")
            .field("len", &self.key.len())
            .finish()
    }
}

/// Opaque parameter bag handed to `init`.
///
/// The set of variants is open-ended (`#[non_exhaustive]`): algorithms
/// that need material beyond a raw key, such as an IV or nonce, are
/// served by adding a variant rather than changing the `init` signature.
/// Implementations match the variant they expect and reject the rest.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum CipherParameters {
    /// A raw symmetric key.
    Key(KeyParameter),
    /// A raw symmetric key plus an initialization vector / nonce.
    KeyWithIv {
        /// The symmetric key.
        key: KeyParameter,
        /// The IV or nonce; not secret, length requirements are
        /// per-algorithm.
        iv: Vec<u8>,
    },
}

impl CipherParameters {
    /// Convenience constructor for [`CipherParameters::Key`], copying the
    /// given bytes.
    pub fn key(key: &[u8]) -> Self {
        CipherParameters::Key(KeyParameter::from_bytes(key))
    }

    /// Convenience constructor for [`CipherParameters::KeyWithIv`], copying
    /// both slices.
    pub fn key_with_iv(key: &[u8], iv: &[u8]) -> Self {
        CipherParameters::KeyWithIv {
            key: KeyParameter::from_bytes(key),
            iv: iv.to_vec(),
        }
    }
}
