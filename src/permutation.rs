//! The Ascon permutation over a 320-bit state of five 64-bit lanes.

use crate::constants::{DIFFUSION_ROTATIONS, PA_ROUNDS, ROUND_CONSTANTS};
use crate::error::{Error, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Permutation state: five 64-bit lanes.
///
/// Lanes are wiped when the state is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct State {
    lanes: [u64; 5],
}

impl State {
    /// Create a state from five lanes.
    #[inline]
    pub const fn new(lanes: [u64; 5]) -> Self {
        Self { lanes }
    }

    /// Copy of the current lanes.
    #[inline]
    pub fn lanes(&self) -> [u64; 5] {
        self.lanes
    }

    #[inline]
    pub(crate) fn lane(&self, i: usize) -> u64 {
        self.lanes[i]
    }

    #[inline]
    pub(crate) fn set_lane(&mut self, i: usize, value: u64) {
        self.lanes[i] = value;
    }

    #[inline]
    pub(crate) fn xor_lane(&mut self, i: usize, value: u64) {
        self.lanes[i] ^= value;
    }

    /// XOR the constant of round `round` of a `rounds`-round permutation into lane 2.
    pub fn add_constant(&mut self, round: usize, rounds: usize) -> Result<()> {
        check_rounds(rounds)?;
        if round >= rounds {
            return Err(Error::InvalidRoundIndex);
        }
        self.add_round_constant(ROUND_CONSTANTS[PA_ROUNDS - rounds + round]);
        Ok(())
    }

    #[inline(always)]
    fn add_round_constant(&mut self, rc: u8) {
        self.lanes[2] ^= u64::from(rc);
    }

    /// Apply the 5-bit S-box to all 64 bit-slices of the state.
    ///
    /// Bitwise form of the table lookup in [`SBOX`](crate::constants::SBOX),
    /// with lane 0 holding the most significant bit of each slice. Branch-free.
    #[inline(always)]
    pub fn substitute(&mut self) {
        let [mut x0, mut x1, mut x2, mut x3, mut x4] = self.lanes;

        x0 ^= x4;
        x4 ^= x3;
        x2 ^= x1;

        let t0 = !x0 & x1;
        let t1 = !x1 & x2;
        let t2 = !x2 & x3;
        let t3 = !x3 & x4;
        let t4 = !x4 & x0;

        x0 ^= t1;
        x1 ^= t2;
        x2 ^= t3;
        x3 ^= t4;
        x4 ^= t0;

        x1 ^= x0;
        x0 ^= x4;
        x3 ^= x2;
        x2 = !x2;

        self.lanes = [x0, x1, x2, x3, x4];
    }

    /// Linear diffusion layer: each lane absorbs two right-rotations of itself.
    #[inline(always)]
    pub fn diffuse(&mut self) {
        for (lane, [r0, r1]) in self.lanes.iter_mut().zip(DIFFUSION_ROTATIONS) {
            let x = *lane;
            *lane = x ^ x.rotate_right(r0) ^ x.rotate_right(r1);
        }
    }

    /// Apply the `rounds`-round permutation.
    ///
    /// Fewer rounds use the trailing constants of the 12-round schedule.
    pub fn permute(&mut self, rounds: usize) -> Result<()> {
        check_rounds(rounds)?;
        for &rc in &ROUND_CONSTANTS[PA_ROUNDS - rounds..PA_ROUNDS] {
            self.round(rc);
        }
        Ok(())
    }

    #[inline(always)]
    fn round(&mut self, rc: u8) {
        self.add_round_constant(rc);
        self.substitute();
        self.diffuse();
    }
}

impl TryFrom<&[u64]> for State {
    type Error = Error;

    fn try_from(lanes: &[u64]) -> Result<Self> {
        let lanes: [u64; 5] = lanes.try_into().map_err(|_| Error::InvalidStateLength)?;
        Ok(Self::new(lanes))
    }
}

#[inline]
fn check_rounds(rounds: usize) -> Result<()> {
    match rounds {
        6 | 8 | 12 => Ok(()),
        _ => Err(Error::InvalidRoundCount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SBOX;

    /// Slice-by-slice S-box through the lookup table.
    fn substitute_by_table(lanes: [u64; 5]) -> [u64; 5] {
        let mut out = [0u64; 5];
        for j in (0..64).rev() {
            let mut index = 0usize;
            for lane in &lanes {
                index = (index << 1) | ((lane >> j) & 1) as usize;
            }
            let s = SBOX[index] as u64;
            for (k, lane) in out.iter_mut().enumerate() {
                *lane |= ((s >> (4 - k)) & 1) << j;
            }
        }
        out
    }

    fn next(seed: &mut u64) -> u64 {
        *seed ^= *seed << 13;
        *seed ^= *seed >> 7;
        *seed ^= *seed << 17;
        *seed
    }

    #[test]
    fn test_substitute_matches_table() {
        let mut seed = 0x9e37_79b9_7f4a_7c15u64;
        for _ in 0..256 {
            let lanes = [
                next(&mut seed),
                next(&mut seed),
                next(&mut seed),
                next(&mut seed),
                next(&mut seed),
            ];
            let mut state = State::new(lanes);
            state.substitute();
            assert_eq!(state.lanes(), substitute_by_table(lanes));
        }
    }

    #[test]
    fn test_substitute_single_slice() {
        // Slice 0 holds index 1 (0b00001 -> 11 = 0b01011); all others hold 0 -> 4.
        let mut state = State::new([0, 0, 0, 0, 1]);
        state.substitute();
        assert_eq!(state.lanes(), [0, 1, !1, 1, 1]);
    }

    #[test]
    fn test_diffuse() {
        let mut state = State::new([1; 5]);
        state.diffuse();
        assert_eq!(
            state.lanes(),
            [
                0x0000_2010_0000_0001,
                0x0000_0000_0200_0009,
                0x8400_0000_0000_0001,
                0x0040_8000_0000_0001,
                0x0200_0000_0080_0001,
            ]
        );
    }

    #[test]
    fn test_add_constant_indexing() {
        for (rounds, first) in [(12usize, 0usize), (8, 4), (6, 6)] {
            for round in 0..rounds {
                let mut state = State::new([0; 5]);
                state.add_constant(round, rounds).unwrap();
                assert_eq!(state.lane(2), ROUND_CONSTANTS[first + round] as u64);
                assert_eq!(state.lanes()[..2], [0, 0]);
                assert_eq!(state.lanes()[3..], [0, 0]);
            }
        }

        let mut state = State::new([0; 5]);
        state.add_constant(0, 6).unwrap();
        assert_eq!(state.lane(2), 0x96);
    }

    #[test]
    fn test_add_constant_rejects_out_of_range() {
        let mut state = State::new([0; 5]);
        assert_eq!(state.add_constant(6, 6), Err(Error::InvalidRoundIndex));
        assert_eq!(state.add_constant(12, 12), Err(Error::InvalidRoundIndex));
        assert_eq!(state.add_constant(0, 16), Err(Error::InvalidRoundCount));
        assert_eq!(state.add_constant(0, 0), Err(Error::InvalidRoundCount));
        assert_eq!(state.lanes(), [0; 5]);
    }

    #[test]
    fn test_permute_matches_rounds() {
        let lanes = [1, 2, 3, 4, 5];
        for rounds in [6usize, 8, 12] {
            let mut expected = State::new(lanes);
            for round in 0..rounds {
                expected.add_constant(round, rounds).unwrap();
                expected.substitute();
                expected.diffuse();
            }
            let mut state = State::new(lanes);
            state.permute(rounds).unwrap();
            assert_eq!(state.lanes(), expected.lanes());
        }
    }

    #[test]
    fn test_permute_zero_state() {
        let mut state = State::new([0; 5]);
        state.permute(12).unwrap();
        assert_eq!(
            state.lanes(),
            [
                0x78ea_7ae5_cfeb_b108,
                0x9b9b_fb85_13b5_60f7,
                0x6937_f83e_03d1_1a50,
                0x3fe5_3f36_f2c1_178c,
                0x045d_648e_4def_12c9,
            ]
        );

        let mut state = State::new([0; 5]);
        state.permute(6).unwrap();
        assert_eq!(state.lane(0), 0x160c_84f2_0faa_d4f1);

        let mut state = State::new([0; 5]);
        state.permute(8).unwrap();
        assert_eq!(state.lane(0), 0x1418_f8af_721a_a830);
    }

    #[test]
    fn test_permute_rejects_round_count() {
        let mut state = State::new([7; 5]);
        assert_eq!(state.permute(10), Err(Error::InvalidRoundCount));
        assert_eq!(state.lanes(), [7; 5]);
    }

    #[test]
    fn test_state_from_slice() {
        let state = State::try_from(&[1u64, 2, 3, 4, 5][..]).unwrap();
        assert_eq!(state.lanes(), [1, 2, 3, 4, 5]);
        assert!(matches!(
            State::try_from(&[1u64, 2, 3, 4][..]),
            Err(Error::InvalidStateLength)
        ));
        assert!(matches!(
            State::try_from(&[0u64; 6][..]),
            Err(Error::InvalidStateLength)
        ));
    }
}
