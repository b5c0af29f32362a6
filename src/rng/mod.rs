// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Pseudo-random generation behind the [`Prng`] capability.
//!
//! Two implementations cover the two common needs: [`OsEntropyPrng`]
//! draws from the operating system pool for production key material, and
//! [`DigestPrng`] is a deterministic hash-counter generator for seeded,
//! reproducible streams in tests and simulations.

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::{CipherError, Prng};

/// Generator backed by the operating system entropy pool.
///
/// The pool is managed entirely by the kernel, so
/// [`add_seed`](Prng::add_seed) is not supported. A read failure aborts
/// the process, per [`OsRng`].
#[derive(Default)]
pub struct OsEntropyPrng;

impl OsEntropyPrng {
    /// Creates a generator over the system pool.
    pub fn new() -> Self {
        Self
    }
}

impl Prng for OsEntropyPrng {
    fn name(&self) -> String {
        "OsEntropy".to_string()
    }

    fn add_seed(&mut self, _seed: &[u8]) -> Result<(), CipherError> {
        Err(CipherError::NotSupported(
            "the operating system entropy pool is not caller-seedable",
        ))
    }

    fn next_bytes(&mut self, output: &mut [u8]) -> Result<(), CipherError> {
        OsRng.fill_bytes(output);
        Ok(())
    }
}

/// Deterministic generator: SHA-256 over a seeded state and a block
/// counter.
///
/// The same seed sequence always yields the same byte stream, which makes
/// it suitable for reproducible tests and simulations. It is **not** a
/// vetted DRBG construction and must not be used to produce production
/// key material; use [`OsEntropyPrng`] for that.
#[derive(Default)]
pub struct DigestPrng {
    state: Option<Zeroizing<[u8; 32]>>,
    counter: u64,
}

impl DigestPrng {
    /// Creates an unseeded generator. [`add_seed`](Prng::add_seed) must be
    /// called before any bytes are drawn.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator already seeded with `seed`.
    pub fn from_seed(seed: &[u8]) -> Self {
        let mut prng = Self::new();
        // add_seed on a fresh instance cannot fail
        let _ = prng.add_seed(seed);
        prng
    }
}

impl Prng for DigestPrng {
    fn name(&self) -> String {
        "SHA256-PRNG".to_string()
    }

    /// Folds `seed` into the generator state.
    ///
    /// Seeding an already-seeded generator chains: the new state hashes
    /// the old state together with the seed, so entropy accumulates
    /// rather than being replaced. The block counter restarts with the
    /// new state.
    fn add_seed(&mut self, seed: &[u8]) -> Result<(), CipherError> {
        let mut hasher = Sha256::new();
        if let Some(state) = &self.state {
            hasher.update(&state[..]);
        }
        hasher.update(seed);

        let mut state = Zeroizing::new([0u8; 32]);
        state.copy_from_slice(hasher.finalize().as_slice());
        self.state = Some(state);
        self.counter = 0;
        Ok(())
    }

    fn next_bytes(&mut self, output: &mut [u8]) -> Result<(), CipherError> {
        let state = self
            .state
            .as_ref()
            .ok_or(CipherError::NotInitialized("generator not seeded"))?;

        for chunk in output.chunks_mut(32) {
            let mut hasher = Sha256::new();
            hasher.update(&state[..]);
            hasher.update(self.counter.to_be_bytes());
            let block = hasher.finalize();
            chunk.copy_from_slice(&block.as_slice()[..chunk.len()]);
            self.counter += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
