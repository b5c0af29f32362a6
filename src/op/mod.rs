// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Capability traits for symmetric cryptographic operations.
//!
//! Each trait is a minimal behavioral contract: [`Cipher`] and
//! [`BlockCipher`] for keyed transforms, [`StreamCipher`] for per-byte
//! keystream output, [`Mac`] for keyed digests, [`Prng`] for keystream
//! generators, and [`BlockCipherPadding`] for final-block padding schemes.
//! Concrete implementations live in the sibling modules; the
//! [`ManagedBlockCipher`](crate::ManagedBlockCipher) adapter consumes
//! [`BlockCipher`] and [`BlockCipherPadding`] implementations without
//! knowing anything else about them.

mod cipher;
mod mac;
mod padding;
mod prng;
mod stream;

pub use cipher::*;
pub use mac::*;
pub use padding::*;
pub use prng::*;
pub use stream::*;
