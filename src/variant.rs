//! Parameter sets for the two AEAD variants.

use crate::constants::{ASCON_128A_IV, ASCON_128A_PB_ROUNDS, ASCON_128_IV, ASCON_128_PB_ROUNDS};
use crate::error::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Ascon AEAD variant.
///
/// Both variants share the 12-round initialization and finalization
/// permutation; they differ in rate and in the intermediate round count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// One-lane rate, 6 intermediate rounds.
    Ascon128,
    /// Two-lane rate, 8 intermediate rounds.
    Ascon128a,
}

impl Variant {
    /// Standardized initialization vector word.
    #[inline]
    pub const fn iv(self) -> u64 {
        match self {
            Variant::Ascon128 => ASCON_128_IV,
            Variant::Ascon128a => ASCON_128A_IV,
        }
    }

    /// Number of lanes absorbed or squeezed per block.
    #[inline]
    pub const fn rate(self) -> usize {
        match self {
            Variant::Ascon128 => 1,
            Variant::Ascon128a => 2,
        }
    }

    /// Rounds of the permutation applied between blocks.
    #[inline]
    pub const fn intermediate_rounds(self) -> usize {
        match self {
            Variant::Ascon128 => ASCON_128_PB_ROUNDS,
            Variant::Ascon128a => ASCON_128A_PB_ROUNDS,
        }
    }

    /// Canonical lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Ascon128 => "ascon128",
            Variant::Ascon128a => "ascon128a",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("ascon128") || s.eq_ignore_ascii_case("ascon-128") {
            Ok(Variant::Ascon128)
        } else if s.eq_ignore_ascii_case("ascon128a") || s.eq_ignore_ascii_case("ascon-128a") {
            Ok(Variant::Ascon128a)
        } else {
            Err(Error::UnknownVariant)
        }
    }
}
