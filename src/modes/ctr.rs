// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Counter (CTR) mode.
//!
//! CTR mode encrypts a big-endian counter block and XORs the result into
//! the data, turning any block cipher into a byte-stream cipher. Both
//! directions apply the same keystream, so the wrapped engine always runs
//! in its encrypt direction regardless of the direction requested at
//! `init`.

use zeroize::Zeroizing;

use crate::{
    BlockCipher, Cipher, CipherDirection, CipherError, CipherParameters, StreamCipher,
};

/// Counter-mode combinator over a raw block cipher.
///
/// Initialization requires [`CipherParameters::KeyWithIv`]; the nonce
/// seeds the counter and must be exactly one block long. The combinator
/// declares [stream mode](BlockCipher::is_stream_mode), so a
/// [`ManagedBlockCipher`](crate::ManagedBlockCipher) wrapping it accepts
/// inputs of any length without padding.
pub struct CtrMode<C: BlockCipher> {
    cipher: C,
    iv: Vec<u8>,
    counter: Vec<u8>,
    keystream: Zeroizing<Vec<u8>>,
    used: usize,
    initialized: bool,
}

impl<C: BlockCipher> CtrMode<C> {
    /// Wraps a raw engine in counter mode.
    pub fn new(cipher: C) -> Self {
        let block = cipher.block_size();
        Self {
            cipher,
            iv: Vec::new(),
            counter: vec![0u8; block],
            keystream: Zeroizing::new(vec![0u8; block]),
            used: block,
            initialized: false,
        }
    }

    /// Consumes the mode and returns the wrapped engine.
    pub fn into_inner(self) -> C {
        self.cipher
    }

    /// Encrypts the current counter block into the keystream buffer and
    /// advances the counter.
    fn refill_keystream(&mut self) -> Result<(), CipherError> {
        let written = self.cipher.update(&self.counter, &mut self.keystream[..])?;
        debug_assert_eq!(written, self.counter.len());

        for byte in self.counter.iter_mut().rev() {
            *byte = byte.wrapping_add(1);
            if *byte != 0 {
                break;
            }
        }
        self.used = 0;
        Ok(())
    }
}

impl<C: BlockCipher> Cipher for CtrMode<C> {
    fn name(&self) -> String {
        format!("{}/CTR", self.cipher.name())
    }

    fn init(
        &mut self,
        _direction: CipherDirection,
        params: &CipherParameters,
    ) -> Result<(), CipherError> {
        let block = self.cipher.block_size();
        match params {
            CipherParameters::KeyWithIv { key, iv } => {
                if iv.len() != block {
                    tracing::error!(
                        iv_len = iv.len(),
                        block_size = block,
                        "CTR nonce must be one block long"
                    );
                    return Err(CipherError::InvalidParameter(
                        "CTR nonce must be one block long",
                    ));
                }
                // keystream generation always runs the engine forward
                self.cipher
                    .init(CipherDirection::Encrypt, &CipherParameters::Key(key.clone()))?;
                self.iv = iv.clone();
                self.counter = iv.clone();
                self.keystream[..].fill(0);
                self.used = block;
                self.initialized = true;
                Ok(())
            }
            _ => Err(CipherError::InvalidParameter("CTR requires a key with nonce")),
        }
    }

    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CipherError> {
        if !self.initialized {
            return Err(CipherError::NotInitialized("CTR mode has no key"));
        }
        if output.len() < input.len() {
            return Err(CipherError::ShortBuffer {
                required: input.len(),
                available: output.len(),
            });
        }

        let block = self.cipher.block_size();
        for (&src, dst) in input.iter().zip(output.iter_mut()) {
            if self.used == block {
                self.refill_keystream()?;
            }
            *dst = src ^ self.keystream[self.used];
            self.used += 1;
        }
        Ok(input.len())
    }

    fn reset(&mut self) {
        self.cipher.reset();
        self.counter.clear();
        self.counter.extend_from_slice(&self.iv);
        self.keystream[..].fill(0);
        self.used = self.cipher.block_size();
    }
}

impl<C: BlockCipher> BlockCipher for CtrMode<C> {
    fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    fn is_stream_mode(&self) -> bool {
        true
    }
}

impl<C: BlockCipher> StreamCipher for CtrMode<C> {
    fn return_byte(&mut self, input: u8) -> Result<u8, CipherError> {
        let mut output = [0u8; 1];
        self.update(&[input], &mut output)?;
        Ok(output[0])
    }
}
