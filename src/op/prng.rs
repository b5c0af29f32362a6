// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Pseudo-random number generator capability trait.

use crate::CipherError;

/// Contract for a keystream generator filling caller-supplied buffers.
///
/// Implementations differ in where their entropy comes from: some are
/// seeded deterministically by the caller, others draw from an external
/// source and accept no seed at all. An operation an implementation cannot
/// honor fails with [`CipherError::NotSupported`] rather than being
/// silently ignored.
pub trait Prng {
    /// Returns the generator identifier.
    fn name(&self) -> String;

    /// Mixes seed material into the generator state.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::NotSupported`] for generators whose source
    /// cannot be caller-seeded.
    fn add_seed(&mut self, seed: &[u8]) -> Result<(), CipherError>;

    /// Fills `output` with generated bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::NotInitialized`] if the generator requires
    /// seeding and has not been seeded yet.
    fn next_bytes(&mut self, output: &mut [u8]) -> Result<(), CipherError>;
}
