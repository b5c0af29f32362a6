// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::testutil::AddBlockCipher;
use crate::{
    BlockCipher, Cipher, CipherDirection, CipherError, CipherParameters, CtrMode,
    NullBlockCipher, StreamCipher,
};

fn keyed_ctr(direction: CipherDirection) -> CtrMode<AddBlockCipher> {
    let mut ctr = CtrMode::new(AddBlockCipher::new(8));
    ctr.init(
        direction,
        &CipherParameters::key_with_iv(&[1, 2, 3, 4], &[9u8; 8]),
    )
    .unwrap();
    ctr
}

#[test]
fn test_ctr_keystream_is_encrypted_counter() {
    // the Null engine copies its input, so the keystream is the raw
    // counter sequence and the XOR of zeros exposes it directly
    let mut ctr = CtrMode::new(NullBlockCipher::new(8).unwrap());
    ctr.init(
        CipherDirection::Encrypt,
        &CipherParameters::key_with_iv(b"k", &[0u8; 8]),
    )
    .unwrap();

    let mut output = [0u8; 24];
    let written = ctr.update(&[0u8; 24], &mut output).unwrap();
    assert_eq!(written, 24);

    let mut expected = [0u8; 24];
    expected[15] = 1;
    expected[23] = 2;
    assert_eq!(output, expected);
}

#[test]
fn test_ctr_counter_carry_propagates() {
    let mut ctr = CtrMode::new(NullBlockCipher::new(8).unwrap());
    ctr.init(
        CipherDirection::Encrypt,
        &CipherParameters::key_with_iv(b"k", &[0xff; 8]),
    )
    .unwrap();

    let mut output = [0u8; 16];
    ctr.update(&[0u8; 16], &mut output).unwrap();

    // the all-ones counter wraps to zero on the second block
    assert_eq!(&output[..8], &[0xff; 8]);
    assert_eq!(&output[8..], &[0u8; 8]);
}

#[test]
fn test_ctr_roundtrip_any_length() {
    let plaintext = b"thirteen byte";
    let mut output = [0u8; 13];

    let mut ctr = keyed_ctr(CipherDirection::Encrypt);
    let written = ctr.update(plaintext, &mut output).unwrap();
    assert_eq!(written, plaintext.len());
    assert_ne!(&output, plaintext);

    let mut recovered = [0u8; 13];
    let mut ctr = keyed_ctr(CipherDirection::Decrypt);
    ctr.update(&output, &mut recovered).unwrap();
    assert_eq!(&recovered, plaintext);
}

#[test]
fn test_ctr_reset_restarts_keystream() {
    let mut ctr = keyed_ctr(CipherDirection::Encrypt);

    let mut first = [0u8; 11];
    ctr.update(b"same eleven", &mut first).unwrap();

    ctr.reset();
    let mut second = [0u8; 11];
    ctr.update(b"same eleven", &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_ctr_return_byte_matches_update() {
    let plaintext = b"one byte at a time";

    let mut one_shot = vec![0u8; plaintext.len()];
    keyed_ctr(CipherDirection::Encrypt)
        .update(plaintext, &mut one_shot)
        .unwrap();

    let mut ctr = keyed_ctr(CipherDirection::Encrypt);
    let bytewise: Vec<u8> = plaintext
        .iter()
        .map(|&b| ctr.return_byte(b).unwrap())
        .collect();

    assert_eq!(bytewise, one_shot);
}

#[test]
fn test_ctr_init_validates_params() {
    let mut ctr = CtrMode::new(AddBlockCipher::new(8));
    assert_eq!(
        ctr.init(CipherDirection::Encrypt, &CipherParameters::key(b"key")),
        Err(CipherError::InvalidParameter("CTR requires a key with nonce"))
    );
    assert_eq!(
        ctr.init(
            CipherDirection::Encrypt,
            &CipherParameters::key_with_iv(b"key", &[0u8; 7]),
        ),
        Err(CipherError::InvalidParameter(
            "CTR nonce must be one block long"
        ))
    );
}

#[test]
fn test_ctr_update_requires_init() {
    let mut ctr = CtrMode::new(AddBlockCipher::new(8));
    let mut output = [0u8; 4];
    assert_eq!(
        ctr.update(b"data", &mut output),
        Err(CipherError::NotInitialized("CTR mode has no key"))
    );
}

#[test]
fn test_ctr_rejects_short_output() {
    let mut ctr = keyed_ctr(CipherDirection::Encrypt);
    let mut output = [0u8; 3];
    assert_eq!(
        ctr.update(b"data", &mut output),
        Err(CipherError::ShortBuffer {
            required: 4,
            available: 3
        })
    );
}

#[test]
fn test_ctr_metadata() {
    let ctr = CtrMode::new(NullBlockCipher::new(8).unwrap());
    assert_eq!(ctr.name(), "Null/CTR");
    assert_eq!(ctr.block_size(), 8);
    assert!(ctr.is_stream_mode());
}
