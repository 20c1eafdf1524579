//! # Ascon-128 / Ascon-128a over 64-bit lanes
//!
//! This crate implements the Ascon authenticated encryption modes on top of
//! the 320-bit Ascon permutation: a key and nonce initialize a five-lane
//! state, associated data is absorbed, plaintext is encrypted in a duplex
//! construction, and finalization produces a 128-bit tag.
//!
//! ## Lanes, not bytes
//!
//! All inputs are sequences of 64-bit lanes. Converting byte strings into
//! lanes, padding the final partial block and truncating the final
//! ciphertext block are left to the caller. With big-endian lanes and the
//! standard `0x80` padding byte, the results match the published Ascon
//! known-answer tests.
//!
//! - **Ascon-128**: rate of one lane, 6 intermediate rounds.
//! - **Ascon-128a**: rate of two lanes, 8 intermediate rounds. Associated
//!   data and plaintext must hold an even number of lanes.
//! - **No-std Compatible**: only `alloc` is needed for the ciphertext.
//!
//! Only encryption and tag generation are provided.
//!
//! ## Usage
//!
//! ```rust
//! use ascon_duplex::{encrypt, Variant};
//!
//! let key = [0x0001020304050607, 0x08090a0b0c0d0e0f];
//! let nonce = [0x1011121314151617, 0x18191a1b1c1d1e1f];
//! let ad = [0x6865616465728000]; // "header", padded
//! let plaintext = [0x7365637265748000]; // "secret", padded
//!
//! let (ciphertext, tag) = encrypt(Variant::Ascon128, &key, &nonce, &ad, &plaintext)?;
//! assert_eq!(ciphertext.len(), plaintext.len());
//! # let _ = tag;
//! # Ok::<(), ascon_duplex::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod constants;
mod core;
mod error;
mod permutation;
mod utils;
mod variant;


pub use crate::core::{Absorbed, Encrypted, Initialized};
pub use error::{Error, Result};
pub use permutation::State;
pub use utils::{rotate, Direction};
pub use variant::Variant;

use alloc::vec::Vec;

/// A 64-bit word of the permutation state.
pub type Lane = u64;

/// 128-bit key as two lanes, upper half first.
pub type Key = [Lane; 2];

/// 128-bit nonce as two lanes, upper half first.
pub type Nonce = [Lane; 2];

/// 128-bit authentication tag as two lanes.
pub type Tag = [Lane; 2];

/// Encrypts plaintext lanes with associated data using the standardized IV
/// of `variant`.
///
/// # Arguments
///
/// * `variant` - Ascon-128 or Ascon-128a
/// * `key` - 128-bit key
/// * `nonce` - 128-bit nonce (must be unique for each encryption with the same key)
/// * `ad` - Associated data lanes (authenticated, not encrypted), possibly empty
/// * `plaintext` - Plaintext lanes, at least one rate block
///
/// # Returns
///
/// A tuple of (ciphertext, tag), the ciphertext holding as many lanes as the
/// plaintext.
///
/// # Errors
///
/// * [`Error::EmptyPlaintext`] if `plaintext` is empty
/// * [`Error::UnalignedAssociatedData`] / [`Error::UnalignedPlaintext`] if a
///   sequence does not fill whole Ascon-128a blocks
///
/// # Security
///
/// - The nonce MUST NOT be reused with the same key
/// - The key MUST be randomly chosen from a uniform distribution
pub fn encrypt(
    variant: Variant,
    key: &Key,
    nonce: &Nonce,
    ad: &[Lane],
    plaintext: &[Lane],
) -> Result<(Vec<Lane>, Tag)> {
    encrypt_with_iv(variant, variant.iv(), key, nonce, ad, plaintext)
}

/// Encrypts plaintext lanes with associated data under an explicit IV word.
///
/// Identical to [`encrypt`] except that the first state lane is `iv` instead
/// of the variant's standardized value. Outputs are only interoperable with
/// other Ascon implementations when `iv == variant.iv()`.
///
/// # Example
///
/// ```rust
/// use ascon_duplex::{encrypt, encrypt_with_iv, Variant};
///
/// let key = [0x1, 0x2];
/// let nonce = [0x3, 0x4];
/// let lanes = [0, 1, 2, 3];
///
/// let standard = encrypt(Variant::Ascon128a, &key, &nonce, &lanes, &lanes)?;
/// let explicit = encrypt_with_iv(Variant::Ascon128a, Variant::Ascon128a.iv(), &key, &nonce, &lanes, &lanes)?;
/// assert_eq!(standard, explicit);
/// # Ok::<(), ascon_duplex::Error>(())
/// ```
pub fn encrypt_with_iv(
    variant: Variant,
    iv: Lane,
    key: &Key,
    nonce: &Nonce,
    ad: &[Lane],
    plaintext: &[Lane],
) -> Result<(Vec<Lane>, Tag)> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "ascon_encrypt",
        %variant,
        ad_lanes = ad.len(),
        plaintext_lanes = plaintext.len()
    )
    .entered();

    crate::core::encrypt(variant, iv, key, nonce, ad, plaintext)
}
