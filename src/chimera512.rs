use byteorder::{BigEndian, ByteOrder};

use crate::compress::{Block, Compressor, State, BLOCK_SIZE, CHIMERA_LOOKUP_TABLE, STATE_SIZE};

/// The size in bytes of the Chimera-512 digest.
pub const DIGEST_SIZE: usize = STATE_SIZE;

/// Byte written right after the message to start the padding.
pub const PAD_MARKER: u8 = 0x80;

/// Size in bytes of the big-endian bit-length field closing the padding.
pub const LENGTH_SIZE: usize = 8;

/// Output is a Chimera-512 digest.
pub type Output = [u8; DIGEST_SIZE];

/// Initial chaining value.
#[rustfmt::skip]
const IV: State = [
    0xc1, 0x93, 0x5f, 0x28, 0x9a, 0xd4, 0x76, 0x20,
    0x72, 0xf3, 0x5b, 0xee, 0x12, 0x93, 0xab, 0xff,
    0x1e, 0x67, 0x2a, 0x49, 0xf0, 0xc8, 0xd6, 0x5c,
    0x34, 0xbe, 0x0a, 0x93, 0x91, 0xaa, 0x3b, 0x6f,
    0x8d, 0x56, 0x09, 0x2a, 0xee, 0x13, 0x7c, 0x67,
    0xbc, 0x98, 0x0f, 0x11, 0x80, 0xcd, 0x35, 0x90,
    0xf1, 0xeb, 0x47, 0x2e, 0x73, 0xaf, 0x90, 0x5f,
    0x27, 0x3c, 0x19, 0x8c, 0x4a, 0x6f, 0xc3, 0x21,
];

/// initial_state returns the chaining value every hash starts from.
pub fn initial_state() -> State {
    IV
}

/// hash returns the Chimera-512 digest of `data`, using the shared lookup table.
pub fn hash(data: &[u8]) -> Output {
    hash_with(&*CHIMERA_LOOKUP_TABLE, data)
}

/// hash_with returns the Chimera-512 digest of `data` computed with compressor `c`.
///
/// Full blocks are compressed as they are. The tail is padded with `0x80`,
/// zeros, and the message length in bits as a big-endian u64 in the last 8
/// bytes; when the tail leaves no room for the length (120 to 127 bytes) the
/// length goes into a second, otherwise empty, block.
///
/// The bit length is kept in 64 bits and wraps for inputs of 2^61 bytes or more.
pub fn hash_with<C: Compressor>(c: &C, data: &[u8]) -> Output {
    let mut state = initial_state();

    let mut blocks = data.chunks_exact(BLOCK_SIZE);
    for block in &mut blocks {
        let block: &Block = block
            .try_into()
            .expect("chunks_exact yields whole blocks");
        c.compress(&mut state, block);
    }

    let tail = blocks.remainder();
    let bitlen = (data.len() as u64) << 3; // number of input bits

    let mut last = [0u8; BLOCK_SIZE];
    last[..tail.len()].copy_from_slice(tail);
    last[tail.len()] = PAD_MARKER;

    if tail.len() + 1 + LENGTH_SIZE <= BLOCK_SIZE {
        BigEndian::write_u64(&mut last[BLOCK_SIZE - LENGTH_SIZE..], bitlen);
        c.compress(&mut state, &last);
    } else {
        c.compress(&mut state, &last);

        let mut length_block = [0u8; BLOCK_SIZE];
        BigEndian::write_u64(&mut length_block[BLOCK_SIZE - LENGTH_SIZE..], bitlen);
        c.compress(&mut state, &length_block);
    }

    state
}

/// to_hex renders a digest as 128 lowercase hex characters.
pub fn to_hex(digest: &Output) -> String {
    hex::encode(digest)
}
