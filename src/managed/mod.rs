// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Streaming adapter for block ciphers.
//!
//! This module provides [`ManagedBlockCipher`], which adapts a raw
//! fixed-block [`BlockCipher`] into a streaming encrypt/decrypt pipeline:
//! callers feed input in chunks of any size, the adapter buffers partial
//! blocks across calls, and `finish` applies or strips padding on the
//! final block.
//!
//! # Buffering Discipline
//!
//! The adapter holds at most one block. A full buffered block is not
//! drained until either the next `update` call supplies at least one more
//! byte or `finish` is called: lookahead by one block. The point of the
//! lookahead is decryption with padding: the final physical block must
//! reach the cipher-and-unpad logic only on the `finish` path, and the
//! adapter cannot know a block is final until the caller says so.
//!
//! # Output Sizing
//!
//! `update` emits whole blocks only, so its output length is always a
//! multiple of the block size. [`update_output_size`] and
//! [`finish_output_size`] predict exactly how many bytes the next call
//! emits so callers can size buffers up front.
//!
//! [`update_output_size`]: ManagedBlockCipher::update_output_size
//! [`finish_output_size`]: ManagedBlockCipher::finish_output_size

use zeroize::{Zeroize, Zeroizing};

use crate::{
    BlockCipher, BlockCipherPadding, CipherDirection, CipherError, CipherParameters,
};

/// Streaming adapter over a fixed-block cipher with optional padding.
///
/// # States
///
/// - *Idle*: nothing buffered (just constructed, or after `reset`/`finish`)
/// - *Buffering*: a partial block is held
/// - *Full*: exactly one block is held, awaiting more input or `finish`
///
/// # Lifecycle
///
/// One adapter is constructed per (cipher, padding) pairing and reused
/// across messages: `init` keys it, `update` processes chunks, and
/// `finish` flushes the tail and returns the adapter to *Idle*. `init`
/// may be called again at any time to re-key or turn around; note that it
/// does **not** clear the buffer (see [`init`](Self::init)).
///
/// # Stream Mode
///
/// If the wrapped cipher declares
/// [stream mode](BlockCipher::is_stream_mode), the adapter drops the
/// block-alignment requirements: a partial final block passes through the
/// cipher raw on `finish`, in either direction, and padding becomes
/// unnecessary.
pub struct ManagedBlockCipher<C: BlockCipher> {
    cipher: C,
    padding: Option<Box<dyn BlockCipherPadding + Send + Sync>>,
    buf: Vec<u8>,
    index: usize,
    encrypt: bool,
    stream: bool,
}

impl<C: BlockCipher> ManagedBlockCipher<C> {
    /// Wraps a cipher with no padding.
    ///
    /// Without padding, encrypted messages must be block-aligned unless
    /// the cipher is in stream mode.
    pub fn new(cipher: C) -> Self {
        Self::build(cipher, None)
    }

    /// Wraps a cipher with the given padding scheme.
    pub fn with_padding(
        cipher: C,
        padding: impl BlockCipherPadding + Send + Sync + 'static,
    ) -> Self {
        Self::build(cipher, Some(Box::new(padding)))
    }

    fn build(cipher: C, padding: Option<Box<dyn BlockCipherPadding + Send + Sync>>) -> Self {
        let block = cipher.block_size();
        let stream = cipher.is_stream_mode();
        Self {
            cipher,
            padding,
            buf: vec![0u8; block],
            index: 0,
            encrypt: false,
            stream,
        }
    }

    /// Returns the wrapped cipher's name.
    pub fn name(&self) -> String {
        self.cipher.name()
    }

    /// Returns the wrapped cipher's block size in bytes.
    pub fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    /// Returns a reference to the wrapped cipher.
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Returns a mutable reference to the wrapped cipher.
    pub fn cipher_mut(&mut self) -> &mut C {
        &mut self.cipher
    }

    /// Consumes the adapter and returns the wrapped cipher. Buffered bytes
    /// are discarded.
    pub fn into_inner(self) -> C {
        self.cipher
    }

    /// Keys the adapter for a direction.
    ///
    /// Forwards to the wrapped cipher's `init`. The internal block buffer
    /// is **not** cleared: re-keying mid-stream keeps any buffered bytes,
    /// and they are processed under the new key. Callers that intend to
    /// discard a partial message call [`reset`](Self::reset) first.
    /// `finish` already resets, so the common init/update/finish cycle
    /// never observes stale data.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidParameter`] from the wrapped cipher
    /// if `params` is not the variant it expects.
    pub fn init(
        &mut self,
        direction: CipherDirection,
        params: &CipherParameters,
    ) -> Result<(), CipherError> {
        self.encrypt = direction.is_encrypt();
        self.cipher.init(direction, params)
    }

    /// Empties the block buffer (zeroing it) and resets the wrapped cipher
    /// to its post-init state. The key is kept.
    pub fn reset(&mut self) {
        self.buf.as_mut_slice().zeroize();
        self.index = 0;
        self.cipher.reset();
    }

    /// Predicts how many bytes an immediately following
    /// [`update`](Self::update) with `len` input bytes would emit, given
    /// the currently buffered bytes.
    ///
    /// The prediction accounts for the one-block lookahead: when buffered
    /// plus new bytes end exactly on a block boundary, the final block
    /// stays buffered and is not counted.
    pub fn update_output_size(&self, len: usize) -> usize {
        let total = self.index + len;
        if total == 0 {
            return 0;
        }
        let leftover = total % self.cipher.block_size();
        if leftover == 0 {
            total - self.cipher.block_size()
        } else {
            total - leftover
        }
    }

    /// Predicts how many bytes a [`finish`](Self::finish) would emit after
    /// a hypothetical `update` with `len` more input bytes.
    ///
    /// For decryption with padding the prediction is an upper bound, since
    /// the pad count is unknown until the final block is decrypted. A
    /// prediction of `0` for unaligned totals means that `finish` will
    /// fail rather than emit nothing.
    pub fn finish_output_size(&self, len: usize) -> usize {
        let block = self.cipher.block_size();
        let total = self.index + len;
        let leftover = total % block;

        match &self.padding {
            Some(padding) => {
                if leftover == 0 {
                    if self.encrypt && padding.pads_when_aligned() {
                        total + block
                    } else {
                        total
                    }
                } else if self.encrypt {
                    total - leftover + block
                } else if self.stream {
                    total
                } else {
                    0
                }
            }
            None => {
                if leftover == 0 || self.stream {
                    total
                } else {
                    0
                }
            }
        }
    }

    /// Buffers `input`, drains every complete block through the wrapped
    /// cipher into `output`, and returns the bytes written (always a
    /// multiple of the block size).
    ///
    /// An empty `input` is a no-op returning 0. The output requirement is
    /// validated against [`update_output_size`](Self::update_output_size)
    /// before anything is buffered, so a short-buffer failure leaves the
    /// adapter unchanged and the call can be retried with a larger buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::ShortBuffer`] if `output` cannot hold the
    /// blocks this call drains, and propagates
    /// [`CipherError::NotInitialized`] from the wrapped cipher when a
    /// drain happens before [`init`](Self::init). A call that only
    /// buffers does not touch the cipher and therefore cannot raise it.
    pub fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CipherError> {
        if input.is_empty() {
            return Ok(0);
        }

        let required = self.update_output_size(input.len());
        if output.len() < required {
            tracing::error!(
                required,
                available = output.len(),
                "output cannot hold the drained blocks"
            );
            return Err(CipherError::ShortBuffer {
                required,
                available: output.len(),
            });
        }

        let block = self.cipher.block_size();
        let mut written = 0;

        let avail = block - self.index;
        let fill = &input[..input.len().min(avail)];
        self.buf[self.index..self.index + fill.len()].copy_from_slice(fill);
        self.index += fill.len();

        let input = &input[fill.len()..];
        if input.is_empty() {
            // everything fit in the buffer; a full block stays held back
            return Ok(written);
        }

        // buffer is full and more input follows
        written += self.cipher.update(&self.buf, output)?;
        self.index = 0;

        let mut blocks = input.len() / block;
        let tailing = input.len() % block;

        // keep the last block buffered when input ends on a boundary
        if tailing == 0 && blocks > 0 {
            blocks -= 1;
        }

        let bytes = blocks * block;
        if bytes > 0 {
            written += self.cipher.update(&input[..bytes], &mut output[written..])?;
        }

        let keep = &input[bytes..];
        self.buf[..keep.len()].copy_from_slice(keep);
        self.index = keep.len();

        Ok(written)
    }

    /// Flushes the buffered tail, applying or stripping padding, and
    /// returns the adapter to *Idle* for the next message.
    ///
    /// *Encrypting*: a buffered full block is drained first; padding (if
    /// configured) then extends the remaining tail to a full block, which
    /// is drained as well, so an aligned message with padding emits one
    /// extra block. In stream mode an unpadded partial tail passes through
    /// the cipher raw.
    ///
    /// *Decrypting*: outside stream mode the buffer must hold exactly one
    /// full block (the lookahead guarantees it does for well-formed,
    /// complete ciphertext); it is decrypted, padding is stripped, and the
    /// surviving bytes are copied out. `output` must have room for a full
    /// block even though stripping may shrink the result;
    /// [`finish_output_size`](Self::finish_output_size) reports that upper
    /// bound.
    ///
    /// Every outcome except a pre-flight capacity failure (success, misuse,
    /// invalid padding, a wrapped-cipher error) ends with
    /// [`reset`](Self::reset), so the adapter is immediately reusable with
    /// no manual recovery. Capacity failures detected up front leave the
    /// buffered message intact so the same `finish` can be retried.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::ShortBuffer`] when `output` is too small
    /// (state kept), when a non-stream unpadded encryption ends on a
    /// partial block, or when a non-stream decryption ends on a partial
    /// block; the latter two are misuse and reset before raising. Returns
    /// [`CipherError::InvalidPadding`] when the decrypted final block
    /// fails `unpad`; the adapter is reset before the error propagates.
    pub fn finish(&mut self, output: &mut [u8]) -> Result<usize, CipherError> {
        let block = self.cipher.block_size();

        if self.encrypt {
            if self.padding.is_none() && !self.stream && self.index % block != 0 {
                tracing::error!(
                    buffered = self.index,
                    block_size = block,
                    "unpadded message does not end on a block boundary"
                );
                let buffered = self.index;
                self.reset();
                return Err(CipherError::ShortBuffer {
                    required: block,
                    available: buffered,
                });
            }

            let required = self.finish_output_size(0);
            if output.len() < required {
                tracing::error!(
                    required,
                    available = output.len(),
                    "output cannot hold the final blocks"
                );
                return Err(CipherError::ShortBuffer {
                    required,
                    available: output.len(),
                });
            }

            let outcome = self.finish_encrypt(output);
            self.reset();
            outcome
        } else {
            if !self.stream && self.index != block {
                if self.index == 0 && self.padding.is_none() {
                    self.reset();
                    return Ok(0);
                }
                tracing::error!(
                    buffered = self.index,
                    block_size = block,
                    "padded last block not equal to the cipher's block size"
                );
                let buffered = self.index;
                self.reset();
                return Err(CipherError::ShortBuffer {
                    required: block,
                    available: buffered,
                });
            }

            let required = self.index;
            if output.len() < required {
                tracing::error!(
                    required,
                    available = output.len(),
                    "output cannot hold the final block"
                );
                return Err(CipherError::ShortBuffer {
                    required,
                    available: output.len(),
                });
            }

            let outcome = self.finish_decrypt(output);
            self.reset();
            outcome
        }
    }

    fn finish_encrypt(&mut self, output: &mut [u8]) -> Result<usize, CipherError> {
        let block = self.cipher.block_size();
        let mut written = 0;

        // a full lookahead block drains ahead of the padding step
        if self.index == block {
            written += self.cipher.update(&self.buf, output)?;
            self.index = 0;
        }

        if let Some(padding) = &self.padding {
            if self.index > 0 || padding.pads_when_aligned() {
                let pad = padding.pad(block - self.index);
                self.buf[self.index..].copy_from_slice(&pad);
                self.index = block;
            }
        }

        if self.index == block {
            written += self.cipher.update(&self.buf, &mut output[written..])?;
            self.index = 0;
        } else if self.index > 0 {
            // stream mode: the partial tail passes through raw
            written += self
                .cipher
                .update(&self.buf[..self.index], &mut output[written..])?;
            self.index = 0;
        }

        Ok(written)
    }

    fn finish_decrypt(&mut self, output: &mut [u8]) -> Result<usize, CipherError> {
        let mut tail = Zeroizing::new(vec![0u8; self.index]);
        if self.index > 0 {
            let written = self.cipher.update(&self.buf[..self.index], &mut tail[..])?;
            debug_assert_eq!(written, self.index);
        }

        let keep = match &self.padding {
            Some(padding) => {
                let pad = padding.unpad(&tail)?;
                tail.len().saturating_sub(pad)
            }
            None => tail.len(),
        };

        output[..keep].copy_from_slice(&tail[..keep]);
        Ok(keep)
    }
}

#[cfg(test)]
mod tests;
