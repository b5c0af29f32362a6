// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{CipherError, DigestPrng, OsEntropyPrng, Prng};

#[test]
fn test_digest_prng_is_deterministic() {
    let mut first = [0u8; 64];
    let mut second = [0u8; 64];

    DigestPrng::from_seed(b"fixed seed")
        .next_bytes(&mut first)
        .unwrap();
    DigestPrng::from_seed(b"fixed seed")
        .next_bytes(&mut second)
        .unwrap();

    assert_eq!(first, second);
    assert_ne!(first, [0u8; 64]);
}

#[test]
fn test_digest_prng_draws_are_contiguous() {
    let mut one_shot = [0u8; 64];
    DigestPrng::from_seed(b"seed")
        .next_bytes(&mut one_shot)
        .unwrap();

    // two block-sized draws continue the same stream
    let mut prng = DigestPrng::from_seed(b"seed");
    let mut halves = [0u8; 64];
    prng.next_bytes(&mut halves[..32]).unwrap();
    prng.next_bytes(&mut halves[32..]).unwrap();

    assert_eq!(one_shot, halves);
}

#[test]
fn test_digest_prng_partial_tail_is_deterministic() {
    let mut long = [0u8; 64];
    DigestPrng::from_seed(b"seed")
        .next_bytes(&mut long)
        .unwrap();

    let mut short = [0u8; 40];
    DigestPrng::from_seed(b"seed")
        .next_bytes(&mut short)
        .unwrap();

    assert_eq!(short, long[..40]);
}

#[test]
fn test_digest_prng_requires_seed() {
    let mut prng = DigestPrng::new();
    let mut output = [0u8; 16];
    assert_eq!(
        prng.next_bytes(&mut output),
        Err(CipherError::NotInitialized("generator not seeded"))
    );
}

#[test]
fn test_digest_prng_seeding_chains() {
    let mut chained = DigestPrng::from_seed(b"first");
    chained.add_seed(b"second").unwrap();

    let mut replayed = DigestPrng::from_seed(b"first");
    replayed.add_seed(b"second").unwrap();

    let mut only_second = DigestPrng::from_seed(b"second");

    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    let mut c = [0u8; 32];
    chained.next_bytes(&mut a).unwrap();
    replayed.next_bytes(&mut b).unwrap();
    only_second.next_bytes(&mut c).unwrap();

    // the old state folds into the new one, so history matters
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_digest_prng_different_seeds_differ() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    DigestPrng::from_seed(b"a").next_bytes(&mut a).unwrap();
    DigestPrng::from_seed(b"b").next_bytes(&mut b).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_digest_prng_empty_draw_is_noop() {
    let mut prng = DigestPrng::from_seed(b"seed");
    prng.next_bytes(&mut []).unwrap();

    let mut after_noop = [0u8; 32];
    prng.next_bytes(&mut after_noop).unwrap();

    let mut fresh = [0u8; 32];
    DigestPrng::from_seed(b"seed")
        .next_bytes(&mut fresh)
        .unwrap();

    assert_eq!(after_noop, fresh);
}

#[test]
fn test_os_entropy_prng_fills_output() {
    let mut prng = OsEntropyPrng::new();
    let mut first = [0u8; 16];
    let mut second = [0u8; 16];
    prng.next_bytes(&mut first).unwrap();
    prng.next_bytes(&mut second).unwrap();

    // two pool reads colliding would mean the pool is broken
    assert_ne!(first, second);
}

#[test]
fn test_os_entropy_prng_rejects_seeding() {
    let mut prng = OsEntropyPrng::new();
    assert_eq!(
        prng.add_seed(b"seed"),
        Err(CipherError::NotSupported(
            "the operating system entropy pool is not caller-seedable"
        ))
    );
}

#[test]
fn test_prng_names() {
    assert_eq!(OsEntropyPrng::new().name(), "OsEntropy");
    assert_eq!(DigestPrng::new().name(), "SHA256-PRNG");
}
