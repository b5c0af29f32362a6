// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Reference cipher engines.
//!
//! Concrete cipher algorithms are out of scope for this crate, so the only
//! shipped engine is the identity transform. It exists to exercise the
//! [`Cipher`]/[`BlockCipher`] contracts, the managed adapter and the mode
//! combinators without pulling in an algorithm.

use crate::{BlockCipher, Cipher, CipherDirection, CipherError, CipherParameters};

/// A block cipher whose transform is the identity.
///
/// The engine honors the whole [`BlockCipher`] contract, including keying
/// through `init` and full-blocks-only processing, while copying input to
/// output unchanged. Useful for testing pipelines and padding behavior
/// with fully predictable bytes.
pub struct NullBlockCipher {
    block_size: usize,
    initialized: bool,
}

impl NullBlockCipher {
    /// Block size used by [`Default`].
    pub const DEFAULT_BLOCK_SIZE: usize = 16;

    /// Creates an engine with the given block size.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidParameter`] if `block_size` is zero.
    pub fn new(block_size: usize) -> Result<Self, CipherError> {
        if block_size == 0 {
            return Err(CipherError::InvalidParameter("block size must be non-zero"));
        }
        Ok(Self {
            block_size,
            initialized: false,
        })
    }
}

impl Default for NullBlockCipher {
    fn default() -> Self {
        Self {
            block_size: Self::DEFAULT_BLOCK_SIZE,
            initialized: false,
        }
    }
}

impl Cipher for NullBlockCipher {
    fn name(&self) -> String {
        "Null".to_string()
    }

    fn init(
        &mut self,
        _direction: CipherDirection,
        params: &CipherParameters,
    ) -> Result<(), CipherError> {
        match params {
            CipherParameters::Key(_) => {
                self.initialized = true;
                Ok(())
            }
            _ => Err(CipherError::InvalidParameter("expected a raw key")),
        }
    }

    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CipherError> {
        if !self.initialized {
            return Err(CipherError::NotInitialized("Null engine has no key"));
        }

        let run = input.len() - input.len() % self.block_size;
        if output.len() < run {
            return Err(CipherError::ShortBuffer {
                required: run,
                available: output.len(),
            });
        }

        output[..run].copy_from_slice(&input[..run]);
        Ok(run)
    }

    fn reset(&mut self) {}
}

impl BlockCipher for NullBlockCipher {
    fn block_size(&self) -> usize {
        self.block_size
    }
}
