// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.


use crate::testutil::AddBlockCipher;
use crate::{
    BlockCipher, CipherDirection, CipherParameters, CtrMode, ManagedBlockCipher, NullBytePadding,
    Pkcs7Padding,
};

const BLOCK: usize = 8;
const KEY: [u8; 4] = [1, 2, 3, 4];
const NONCE: [u8; 8] = [7u8; 8];

fn pkcs7_adapter(direction: CipherDirection) -> ManagedBlockCipher<AddBlockCipher> {
    let mut managed = ManagedBlockCipher::with_padding(AddBlockCipher::new(BLOCK), Pkcs7Padding);
    managed
        .init(direction, &CipherParameters::key(&KEY))
        .unwrap();
    managed
}

fn nullbyte_adapter(direction: CipherDirection) -> ManagedBlockCipher<AddBlockCipher> {
    let mut managed = ManagedBlockCipher::with_padding(AddBlockCipher::new(BLOCK), NullBytePadding);
    managed
        .init(direction, &CipherParameters::key(&KEY))
        .unwrap();
    managed
}

fn raw_adapter(direction: CipherDirection) -> ManagedBlockCipher<AddBlockCipher> {
    let mut managed = ManagedBlockCipher::new(AddBlockCipher::new(BLOCK));
    managed
        .init(direction, &CipherParameters::key(&KEY))
        .unwrap();
    managed
}

fn ctr_adapter(direction: CipherDirection) -> ManagedBlockCipher<CtrMode<AddBlockCipher>> {
    let mut managed = ManagedBlockCipher::new(CtrMode::new(AddBlockCipher::new(BLOCK)));
    managed
        .init(direction, &CipherParameters::key_with_iv(&KEY, &NONCE))
        .unwrap();
    managed
}

/// Runs a whole message through `update` + `finish`, sizing both outputs
/// with the adapter's own predictions.
fn run_all<C: BlockCipher>(managed: &mut ManagedBlockCipher<C>, data: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; managed.update_output_size(data.len())];
    let written = managed.update(data, &mut out).unwrap();
    assert_eq!(written, out.len());

    // the finish prediction is an upper bound when decrypting with padding
    let mut tail = vec![0u8; managed.finish_output_size(0)];
    let flushed = managed.finish(&mut tail).unwrap();
    tail.truncate(flushed);

    out.extend_from_slice(&tail);
    out
}
