// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Test-only helpers shared across the crate's test modules.

use crate::{BlockCipher, Cipher, CipherDirection, CipherError, CipherParameters};

/// Toy block cipher for exercising adapters: adds the repeating key to
/// each byte on encrypt, subtracts it on decrypt. Invertible, keyed, and
/// alignment-strict like a real engine, with none of the cost.
pub(crate) struct AddBlockCipher {
    key: Vec<u8>,
    block_size: usize,
    encrypt: bool,
    initialized: bool,
}

impl AddBlockCipher {
    pub(crate) fn new(block_size: usize) -> Self {
        Self {
            key: Vec::new(),
            block_size,
            encrypt: false,
            initialized: false,
        }
    }
}

impl Cipher for AddBlockCipher {
    fn name(&self) -> String {
        "Add".to_string()
    }

    fn init(
        &mut self,
        direction: CipherDirection,
        params: &CipherParameters,
    ) -> Result<(), CipherError> {
        let CipherParameters::Key(key) = params else {
            return Err(CipherError::InvalidParameter("expected a raw key"));
        };
        if key.is_empty() {
            return Err(CipherError::InvalidParameter("key must not be empty"));
        }
        self.key = key.as_bytes().to_vec();
        self.encrypt = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CipherError> {
        if !self.initialized {
            return Err(CipherError::NotInitialized("Add engine has no key"));
        }
        let run = input.len() - input.len() % self.block_size;
        if output.len() < run {
            return Err(CipherError::ShortBuffer {
                required: run,
                available: output.len(),
            });
        }
        for i in 0..run {
            let k = self.key[i % self.key.len()];
            output[i] = if self.encrypt {
                input[i].wrapping_add(k)
            } else {
                input[i].wrapping_sub(k)
            };
        }
        Ok(run)
    }

    fn reset(&mut self) {}
}

impl BlockCipher for AddBlockCipher {
    fn block_size(&self) -> usize {
        self.block_size
    }
}

/// Reference transform matching [`AddBlockCipher`], for computing expected
/// values independently of the code under test.
pub(crate) fn add_ref(data: &[u8], key: &[u8], encrypt: bool) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, &b)| {
            let k = key[i % key.len()];
            if encrypt {
                b.wrapping_add(k)
            } else {
                b.wrapping_sub(k)
            }
        })
        .collect()
}
