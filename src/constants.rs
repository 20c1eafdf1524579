//! Fixed tables and parameters of the Ascon permutation and its AEAD modes.

/// The 5-bit substitution box, indexed with lane 0 as the most significant bit.
pub const SBOX: [u8; 32] = [
    4, 11, 31, 20, 26, 21, 9, 2, 27, 5, 8, 18, 29, 3, 6, 28, 30, 19, 7, 14, 0, 13, 17, 24, 16, 12,
    1, 25, 22, 10, 15, 23,
];

/// Round constants. An `a`-round permutation uses the slice `12 - a..12`.
pub const ROUND_CONSTANTS: [u8; 16] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b, 0x3c, 0x2d, 0x1e, 0x0f,
];

/// Right-rotation amounts of the linear diffusion layer, per lane.
pub const DIFFUSION_ROTATIONS: [[u32; 2]; 5] = [[19, 28], [61, 39], [1, 6], [10, 17], [7, 41]];

/// Rounds of the initialization and finalization permutation.
pub const PA_ROUNDS: usize = 12;

/// Intermediate rounds for Ascon-128.
pub const ASCON_128_PB_ROUNDS: usize = 6;

/// Intermediate rounds for Ascon-128a.
pub const ASCON_128A_PB_ROUNDS: usize = 8;

/// Initialization vector for Ascon-128 (k = 128, r = 64, a = 12, b = 6).
pub const ASCON_128_IV: u64 = 0x8040_0c06_0000_0000;

/// Initialization vector for Ascon-128a (k = 128, r = 128, a = 12, b = 8).
pub const ASCON_128A_IV: u64 = 0x8080_0c08_0000_0000;

/// Domain separation bit XORed into lane 4 once associated data is absorbed.
pub(crate) const DOMAIN_SEPARATOR: u64 = 0x01;
