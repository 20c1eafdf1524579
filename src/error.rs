//! Error types for Ascon operations.

use core::fmt;

/// Result type alias for Ascon operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during Ascon operations.
///
/// Every variant describes malformed caller input; the computation itself has
/// no external resource that could fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Rotation direction is neither left nor right.
    InvalidDirection,

    /// Rotation amount is outside 0..64.
    InvalidRotation,

    /// Permutation round count is not 6, 8 or 12.
    InvalidRoundCount,

    /// Round index is not below the permutation round count.
    InvalidRoundIndex,

    /// State was built from a slice that does not hold exactly 5 lanes.
    InvalidStateLength,

    /// Variant name is not recognised.
    UnknownVariant,

    /// Plaintext holds no lanes.
    EmptyPlaintext,

    /// Associated data is not a whole number of rate blocks.
    UnalignedAssociatedData,

    /// Plaintext is not a whole number of rate blocks.
    UnalignedPlaintext,
}

impl Error {
    /// Returns `true` if the error reports a violated input precondition.
    ///
    /// This holds for every variant today.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::InvalidDirection
            | Error::InvalidRotation
            | Error::InvalidRoundCount
            | Error::InvalidRoundIndex
            | Error::InvalidStateLength
            | Error::UnknownVariant
            | Error::EmptyPlaintext
            | Error::UnalignedAssociatedData
            | Error::UnalignedPlaintext => true,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDirection => write!(f, "invalid rotation direction (must be left or right)"),
            Error::InvalidRotation => write!(f, "invalid rotation amount (must be below 64)"),
            Error::InvalidRoundCount => write!(f, "invalid round count (must be 6, 8 or 12)"),
            Error::InvalidRoundIndex => {
                write!(f, "invalid round index (must be below the round count)")
            }
            Error::InvalidStateLength => write!(f, "invalid state length (must be 5 lanes)"),
            Error::UnknownVariant => write!(f, "unknown variant (expected ascon128 or ascon128a)"),
            Error::EmptyPlaintext => write!(f, "plaintext must hold at least one rate block"),
            Error::UnalignedAssociatedData => {
                write!(f, "associated data is not a multiple of the rate")
            }
            Error::UnalignedPlaintext => write!(f, "plaintext is not a multiple of the rate"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
