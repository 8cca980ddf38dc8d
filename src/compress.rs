use once_cell::sync::Lazy;

/// Size in bytes of the chaining state (and of the digest).
pub const STATE_SIZE: usize = 64;

/// Size in bytes of a message block absorbed by one compression.
pub const BLOCK_SIZE: usize = 128;

/// Number of mixing rounds applied per compression.
pub const ROUNDS: usize = 10;

/// Size in bytes of a group multiplied by the diffusion matrix.
pub const GROUP_SIZE: usize = 8;

/// Size in bytes of one Feistel half.
pub const HALF_SIZE: usize = STATE_SIZE / 2;

/// State is the 512-bit chaining value mutated by every compression.
pub type State = [u8; STATE_SIZE];

/// Block is one 1024-bit message block.
pub type Block = [u8; BLOCK_SIZE];

/// Low byte of the reduction polynomial x^8+x^4+x^3+x+1.
const REDUCTION: u8 = 0x1b;

/// AES forward S-box.
#[rustfmt::skip]
pub static SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// Coefficients of the Chimera diffusion matrix. The matrix is not MDS and
/// is only used as given; every digest depends on these exact values.
#[rustfmt::skip]
pub static MIX_MATRIX: [[u8; GROUP_SIZE]; GROUP_SIZE] = [
    [0x02, 0x03, 0x01, 0x01, 0x04, 0x07, 0x05, 0x02],
    [0x03, 0x05, 0x07, 0x01, 0x02, 0x06, 0x04, 0x03],
    [0x01, 0x07, 0x05, 0x04, 0x03, 0x02, 0x06, 0x01],
    [0x01, 0x04, 0x03, 0x07, 0x06, 0x05, 0x02, 0x03],
    [0x04, 0x02, 0x06, 0x06, 0x05, 0x01, 0x07, 0x04],
    [0x07, 0x06, 0x02, 0x05, 0x01, 0x03, 0x04, 0x07],
    [0x05, 0x04, 0x01, 0x02, 0x07, 0x04, 0x03, 0x05],
    [0x02, 0x03, 0x01, 0x03, 0x04, 0x07, 0x05, 0x06],
];

/// Lookup table for [`MIX_MATRIX`], built on first use and shared by every hash.
pub static CHIMERA_LOOKUP_TABLE: Lazy<LookupTable> =
    Lazy::new(|| Matrix::chimera().lookup_table());

/// gf_mul multiplies a and b in GF(2^8) modulo x^8+x^4+x^3+x+1.
pub fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 == 1 {
            product ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    product
}

/// sub_bytes replaces every state byte with its S-box image.
pub fn sub_bytes(state: &mut State) {
    state.iter_mut().for_each(|b| *b = SBOX[*b as usize]);
}

/// rotate cyclically shifts the whole state left by `(round + 1) % 16` bytes.
pub fn rotate(state: &mut State, round: usize) {
    state.rotate_left((round + 1) % 16);
}

/// feistel_mix folds `SBOX[right[i]] ^ round` into the left half, then swaps the halves.
pub fn feistel_mix(state: &mut State, round: usize) {
    let (left, right) = state.split_at_mut(HALF_SIZE);
    left.iter_mut()
        .zip(right.iter())
        .for_each(|(l, r)| *l ^= SBOX[*r as usize] ^ round as u8);

    state.rotate_left(HALF_SIZE);
}

/// Matrix is an 8x8 diffusion matrix with coefficients in GF(2^8).
#[derive(Clone)]
pub struct Matrix {
    matrix: [[u8; GROUP_SIZE]; GROUP_SIZE],
}

impl Matrix {
    /// new wraps arbitrary coefficients.
    pub fn new(matrix: [[u8; GROUP_SIZE]; GROUP_SIZE]) -> Self {
        Matrix { matrix }
    }

    /// chimera returns the diffusion matrix used by Chimera-512.
    pub fn chimera() -> Self {
        Matrix::new(MIX_MATRIX)
    }

    /// lookup_table precomputes every product `coefficient * byte` so the
    /// diffusion mix needs no field multiplications.
    pub fn lookup_table(&self) -> LookupTable {
        let mut products = Box::new([[[0u8; 256]; GROUP_SIZE]; GROUP_SIZE]);
        (0..GROUP_SIZE).for_each(|i| {
            (0..GROUP_SIZE).for_each(|j| {
                for b in 0..256 {
                    products[i][j][b] = gf_mul(b as u8, self.matrix[i][j]);
                }
            });
        });

        LookupTable { products }
    }
}

/// LookupTable holds the precomputed products of a matrix for every possible byte.
/// Its dimensions are [8][8][256]u8.
#[derive(Clone)]
pub struct LookupTable {
    products: Box<[[[u8; 256]; GROUP_SIZE]; GROUP_SIZE]>,
}

/// Compressor represents the compression function which absorbs one block into the state.
///
/// Implementations differ only in how they evaluate the diffusion mix; every
/// other step of a round is shared.
pub trait Compressor: Clone {
    /// mix_group replaces an 8-byte group with its product by the diffusion matrix.
    fn mix_group(&self, group: &mut [u8; GROUP_SIZE]);

    /// mix applies [`Compressor::mix_group`] to each of the eight groups of the state.
    fn mix(&self, state: &mut State) {
        state.chunks_exact_mut(GROUP_SIZE).for_each(|chunk| {
            let mut group = [0u8; GROUP_SIZE];
            group.copy_from_slice(chunk);
            self.mix_group(&mut group);
            chunk.copy_from_slice(&group);
        });
    }

    /// compress folds the two halves of `block` into `state` and runs the mixing rounds.
    fn compress(&self, state: &mut State, block: &Block) {
        let (lo, hi) = block.split_at(STATE_SIZE);
        state
            .iter_mut()
            .zip(lo.iter().zip(hi.iter()))
            .for_each(|(s, (a, b))| *s ^= a ^ b);

        for round in 0..ROUNDS {
            sub_bytes(state);
            self.mix(state);
            rotate(state, round);
            feistel_mix(state, round);
        }
    }
}

impl Compressor for Matrix {
    fn mix_group(&self, group: &mut [u8; GROUP_SIZE]) {
        let input = *group;
        (0..GROUP_SIZE).for_each(|i| {
            group[i] = input
                .iter()
                .zip(self.matrix[i].iter())
                .fold(0, |acc, (x, c)| acc ^ gf_mul(*x, *c));
        });
    }
}

impl Compressor for LookupTable {
    fn mix_group(&self, group: &mut [u8; GROUP_SIZE]) {
        let input = *group;
        (0..GROUP_SIZE).for_each(|i| {
            let row = &self.products[i];
            group[i] = input
                .iter()
                .enumerate()
                .fold(0, |acc, (j, x)| acc ^ row[j][*x as usize]);
        });
    }
}
