// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Stream cipher capability trait.

use crate::{Cipher, CipherError};

/// A [`Cipher`] that can additionally transform one byte at a time.
///
/// Stream ciphers share the whole `init`/`update`/`reset` lifecycle of
/// [`Cipher`]; this trait adds the per-byte entry point. Byte-at-a-time
/// processing and slice processing draw from the same keystream, so the
/// two can be mixed freely within one message.
pub trait StreamCipher: Cipher {
    /// Transforms a single byte and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::NotInitialized`] if called before
    /// [`init`](Cipher::init).
    fn return_byte(&mut self, input: u8) -> Result<u8, CipherError>;
}
