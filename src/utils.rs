//! Lane rotation and input validation helpers.

use crate::error::{Error, Result};
use crate::variant::Variant;
use core::str::FromStr;

/// Direction of a circular lane rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Bits move towards the most significant end.
    Left,
    /// Bits move towards the least significant end.
    Right,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(Error::InvalidDirection),
        }
    }
}

/// Circularly rotate a 64-bit lane by `positions` bits.
///
/// Rotating by zero returns the lane unchanged. Amounts of 64 or more are
/// rejected instead of being reduced modulo the lane width.
#[inline]
pub fn rotate(value: u64, positions: u32, direction: Direction) -> Result<u64> {
    if positions >= u64::BITS {
        return Err(Error::InvalidRotation);
    }
    Ok(match direction {
        Direction::Left => value.rotate_left(positions),
        Direction::Right => value.rotate_right(positions),
    })
}

/// Validate lane counts for encryption under `variant`.
///
/// Associated data may be empty but must fill whole rate blocks; the
/// plaintext must hold at least one whole rate block.
pub fn validate_params(variant: Variant, ad_len: usize, plaintext_len: usize) -> Result<()> {
    let rate = variant.rate();

    if plaintext_len == 0 {
        return Err(reject(variant, Error::EmptyPlaintext));
    }

    if ad_len % rate != 0 {
        return Err(reject(variant, Error::UnalignedAssociatedData));
    }

    if plaintext_len % rate != 0 {
        return Err(reject(variant, Error::UnalignedPlaintext));
    }

    Ok(())
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn reject(variant: Variant, err: Error) -> Error {
    #[cfg(feature = "tracing")]
    tracing::debug!(%variant, error = %err, "rejected encryption input");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_example() {
        let x = 0x0123_4567_89ab_cdef;
        let r = rotate(x, 19, Direction::Right).unwrap();
        assert_eq!(r, x.rotate_right(19));
        assert_eq!(rotate(r, 19, Direction::Left).unwrap(), x);

        assert_eq!(rotate(1, 1, Direction::Right).unwrap(), 1 << 63);
        assert_eq!(rotate(1 << 63, 1, Direction::Left).unwrap(), 1);
    }

    #[test]
    fn test_rotate_round_trip() {
        let samples = [
            0u64,
            u64::MAX,
            0x0123_4567_89ab_cdef,
            0x8000_0000_0000_0001,
            0xdead_beef_cafe_babe,
        ];
        for &x in &samples {
            for n in 1..64 {
                let right = rotate(x, n, Direction::Right).unwrap();
                assert_eq!(rotate(right, n, Direction::Left).unwrap(), x);
                let left = rotate(x, n, Direction::Left).unwrap();
                assert_eq!(rotate(left, n, Direction::Right).unwrap(), x);
            }
        }
    }

    #[test]
    fn test_rotate_bounds() {
        assert_eq!(rotate(0xabcd, 0, Direction::Right), Ok(0xabcd));
        assert_eq!(rotate(0xabcd, 64, Direction::Left), Err(Error::InvalidRotation));
        assert_eq!(rotate(0xabcd, 100, Direction::Right), Err(Error::InvalidRotation));
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("left".parse(), Ok(Direction::Left));
        assert_eq!("right".parse(), Ok(Direction::Right));
        assert_eq!("up".parse::<Direction>(), Err(Error::InvalidDirection));
    }

    #[test]
    fn test_validate_params() {
        assert!(validate_params(Variant::Ascon128, 0, 1).is_ok());
        assert!(validate_params(Variant::Ascon128, 5, 5).is_ok());
        assert!(validate_params(Variant::Ascon128a, 0, 2).is_ok());
        assert!(validate_params(Variant::Ascon128a, 12, 12).is_ok());

        assert_eq!(
            validate_params(Variant::Ascon128, 3, 0),
            Err(Error::EmptyPlaintext)
        );
        assert_eq!(
            validate_params(Variant::Ascon128a, 0, 0),
            Err(Error::EmptyPlaintext)
        );

        // Odd lengths cannot fill the two-lane rate.
        assert_eq!(
            validate_params(Variant::Ascon128a, 5, 4),
            Err(Error::UnalignedAssociatedData)
        );
        assert_eq!(
            validate_params(Variant::Ascon128a, 4, 1),
            Err(Error::UnalignedPlaintext)
        );
        assert_eq!(
            validate_params(Variant::Ascon128a, 4, 5),
            Err(Error::UnalignedPlaintext)
        );
    }
}
