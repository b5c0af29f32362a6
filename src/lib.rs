// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Symmetric-cipher capability framework.
//!
//! This crate provides the abstract contracts for symmetric cryptographic
//! transforms and the streaming machinery that adapts a fixed-block cipher
//! into a chunked encrypt/decrypt pipeline. It includes:
//!
//! - **Capability traits**: [`Cipher`], [`BlockCipher`], [`StreamCipher`],
//!   [`Mac`], [`Prng`] and [`BlockCipherPadding`]
//! - **ManagedBlockCipher**: buffers arbitrary-sized input chunks, feeds
//!   whole blocks to the wrapped cipher, and applies or strips padding on
//!   the final block
//! - **Padding**: null-byte padding and PKCS#7
//! - **Modes**: a counter-mode combinator that turns any block cipher into
//!   a byte-stream cipher
//! - **MAC**: an HMAC-SHA256 implementation of the [`Mac`] contract
//! - **PRNG**: OS-entropy and deterministic SHA-256 generators
//!
//! # Design
//!
//! Concrete cipher algorithms are out of scope: everything operates
//! through the capability traits, and the [`NullBlockCipher`] reference
//! engine exists to exercise the contracts. Key material enters through the
//! extensible [`CipherParameters`] bag and is copied (and zeroized on drop)
//! rather than borrowed.
//!
//! # Thread Safety
//!
//! All stateful objects are single-stream: use one instance per logical
//! message stream and keep calls strictly sequential. Instances are cheap
//! to construct.

mod engines;
mod mac;
mod managed;
mod modes;
mod padding;
mod params;
mod rng;

mod op;

#[cfg(test)]
mod testutil;

pub use engines::*;
pub use mac::*;
pub use managed::*;
pub use modes::*;
pub use op::*;
pub use padding::*;
pub use params::*;
pub use rng::*;
use thiserror::Error;

/// Error type for all cipher, MAC and PRNG operations.
///
/// The framework reports exactly five failure kinds; none are retried or
/// swallowed internally. Every error is returned synchronously from the
/// call that detected it, and the caller decides whether to retry with a
/// larger buffer or different input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The operation requires `init` to have been called first.
    #[error("not initialized: {0}")]
    NotInitialized(&'static str),

    /// The parameter bag handed to `init` is not the concrete variant the
    /// implementation expects, or a parameter value is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// A buffer cannot hold the guaranteed output.
    ///
    /// Raised when a caller-supplied output buffer is smaller than the
    /// operation's predicted output, and for the decrypt finish misuse case
    /// where the buffered final block is shorter than the cipher's block
    /// size. Short-buffer failures detected before any processing leave
    /// state unchanged, so the same logical call can be retried with a
    /// larger buffer.
    #[error("short buffer: {required} bytes required, {available} available")]
    ShortBuffer {
        /// Number of bytes the operation needs.
        required: usize,
        /// Number of bytes actually available.
        available: usize,
    },

    /// Decrypt-side padding could not be unambiguously stripped.
    #[error("invalid padding: {0}")]
    InvalidPadding(&'static str),

    /// The operation is not implemented by this algorithm.
    #[error("not supported: {0}")]
    NotSupported(&'static str),
}
