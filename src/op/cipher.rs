// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Core cipher capability traits.

use crate::{CipherDirection, CipherError, CipherParameters};

/// Contract for a keyed symmetric transform over byte buffers.
///
/// # Lifecycle
///
/// 1. [`init`](Self::init) configures key material and direction; it must
///    be called before any data is processed
/// 2. [`update`](Self::update) transforms input into output, possibly over
///    many calls
/// 3. [`reset`](Self::reset) restores the state immediately after the last
///    `init` without re-supplying the key
///
/// `init` may be called again at any time to re-key or change direction.
pub trait Cipher {
    /// Returns the algorithm identifier.
    ///
    /// Mode combinators compose their name as `"ALGO/MODE"` (for example
    /// `"Null/CTR"`). The string is informational; capabilities such as
    /// stream mode are queried through
    /// [`BlockCipher::is_stream_mode`], never parsed out of the name.
    fn name(&self) -> String;

    /// Configures key material and transform direction.
    ///
    /// # Arguments
    ///
    /// * `direction` - Whether subsequent calls encrypt or decrypt
    /// * `params` - The parameter bag; implementations match the concrete
    ///   variant they expect and copy what they retain
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidParameter`] if `params` is not the
    /// expected variant or carries an out-of-range value.
    fn init(
        &mut self,
        direction: CipherDirection,
        params: &CipherParameters,
    ) -> Result<(), CipherError>;

    /// Transforms input bytes into `output` and returns the number of
    /// bytes written.
    ///
    /// A block-aligned cipher processes exactly as many full blocks as fit
    /// in `input`; a trailing partial block is neither consumed nor
    /// reported. A stream-mode cipher (see
    /// [`BlockCipher::is_stream_mode`]) processes every input byte.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::ShortBuffer`] if `output` cannot hold the
    /// bytes this call would produce, and
    /// [`CipherError::NotInitialized`] if called before
    /// [`init`](Self::init). Neither failure changes internal state.
    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CipherError>;

    /// Restores the state immediately after the last [`init`](Self::init),
    /// keeping the key. A no-op before the first `init`.
    fn reset(&mut self);
}

/// A [`Cipher`] operating on fixed-size blocks.
pub trait BlockCipher: Cipher {
    /// Returns the transform granularity in bytes. Always greater than
    /// zero and constant for the lifetime of the instance.
    fn block_size(&self) -> usize;

    /// Declares whether this cipher behaves as a byte-stream transform.
    ///
    /// A stream-mode cipher accepts a partial final block in
    /// [`update`](Cipher::update) and needs no padding; counter mode
    /// qualifies, as would CFB or OFB. Raw block engines and
    /// block-aligned modes keep the default `false`.
    fn is_stream_mode(&self) -> bool {
        false
    }
}
