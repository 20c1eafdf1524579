//! Core Ascon AEAD state lifecycle.
//!
//! A message is processed by a one-way pipeline over a single [`State`]:
//! [`Initialized`] absorbs associated data into [`Absorbed`], which encrypts
//! the plaintext into [`Encrypted`], which finalizes into the tag. Each step
//! consumes the previous stage, so a stage can neither be repeated nor
//! revisited.

use crate::constants::{ASCON_128A_PB_ROUNDS, ASCON_128_PB_ROUNDS, DOMAIN_SEPARATOR, PA_ROUNDS};
use crate::error::{Error, Result};
use crate::permutation::State;
use crate::utils;
use crate::variant::Variant;
use crate::{Key, Nonce, Tag};
use alloc::vec::Vec;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Build the working state from IV, key and nonce.
pub(crate) fn initialize(iv: u64, key: &Key, nonce: &Nonce) -> Result<State> {
    let mut state = State::new([iv, key[0], key[1], nonce[0], nonce[1]]);
    state.permute(PA_ROUNDS)?;
    state.xor_lane(3, key[0]);
    state.xor_lane(4, key[1]);
    Ok(state)
}

/// Absorb associated data one lane per block (Ascon-128).
pub(crate) fn absorb_rate1(state: &mut State, ad: &[u64]) -> Result<()> {
    for &lane in ad {
        state.xor_lane(0, lane);
        state.permute(ASCON_128_PB_ROUNDS)?;
    }
    state.xor_lane(4, DOMAIN_SEPARATOR);
    Ok(())
}

/// Absorb associated data two lanes per block (Ascon-128a).
pub(crate) fn absorb_rate2(state: &mut State, ad: &[u64]) -> Result<()> {
    if ad.len() % 2 != 0 {
        return Err(Error::UnalignedAssociatedData);
    }
    for block in ad.chunks_exact(2) {
        state.xor_lane(0, block[0]);
        state.xor_lane(1, block[1]);
        state.permute(ASCON_128A_PB_ROUNDS)?;
    }
    state.xor_lane(4, DOMAIN_SEPARATOR);
    Ok(())
}

/// Duplex-encrypt one lane per block (Ascon-128).
///
/// The ciphertext lane replaces the rate lane before the next permutation.
pub(crate) fn encrypt_rate1(state: &mut State, plaintext: &[u64]) -> Result<Vec<u64>> {
    if plaintext.is_empty() {
        return Err(Error::EmptyPlaintext);
    }

    let mut ciphertext = Vec::with_capacity(plaintext.len());
    for (i, &p) in plaintext.iter().enumerate() {
        if i > 0 {
            state.permute(ASCON_128_PB_ROUNDS)?;
        }
        let c = p ^ state.lane(0);
        state.set_lane(0, c);
        ciphertext.push(c);
    }
    Ok(ciphertext)
}

/// Duplex-encrypt two lanes per block (Ascon-128a).
pub(crate) fn encrypt_rate2(state: &mut State, plaintext: &[u64]) -> Result<Vec<u64>> {
    if plaintext.is_empty() {
        return Err(Error::EmptyPlaintext);
    }
    if plaintext.len() % 2 != 0 {
        return Err(Error::UnalignedPlaintext);
    }

    let mut ciphertext = Vec::with_capacity(plaintext.len());
    for (i, block) in plaintext.chunks_exact(2).enumerate() {
        if i > 0 {
            state.permute(ASCON_128A_PB_ROUNDS)?;
        }
        let c0 = block[0] ^ state.lane(0);
        let c1 = block[1] ^ state.lane(1);
        state.set_lane(0, c0);
        state.set_lane(1, c1);
        ciphertext.push(c0);
        ciphertext.push(c1);
    }
    Ok(ciphertext)
}

/// Finalize with the key injected right after the one-lane rate.
pub(crate) fn finalize_rate1(state: &mut State, key: &Key) -> Result<Tag> {
    state.xor_lane(1, key[0]);
    state.xor_lane(2, key[1]);
    squeeze_tag(state, key)
}

/// Finalize with the key injected right after the two-lane rate.
pub(crate) fn finalize_rate2(state: &mut State, key: &Key) -> Result<Tag> {
    state.xor_lane(2, key[0]);
    state.xor_lane(3, key[1]);
    squeeze_tag(state, key)
}

#[inline]
fn squeeze_tag(state: &mut State, key: &Key) -> Result<Tag> {
    state.permute(PA_ROUNDS)?;
    Ok([state.lane(3) ^ key[0], state.lane(4) ^ key[1]])
}

/// State and key carried between pipeline stages.
#[derive(Zeroize, ZeroizeOnDrop)]
struct Duplex {
    state: State,
    key: Key,
    #[zeroize(skip)]
    variant: Variant,
}

/// Freshly initialized state, ready to absorb associated data.
pub struct Initialized {
    duplex: Duplex,
}

impl Initialized {
    /// Initialize with the variant's standardized IV.
    ///
    /// The nonce must never be reused with the same key.
    pub fn new(variant: Variant, key: &Key, nonce: &Nonce) -> Result<Self> {
        Self::with_iv(variant, variant.iv(), key, nonce)
    }

    /// Initialize with a caller-supplied IV word.
    pub fn with_iv(variant: Variant, iv: u64, key: &Key, nonce: &Nonce) -> Result<Self> {
        Ok(Self {
            duplex: Duplex {
                state: initialize(iv, key, nonce)?,
                key: *key,
                variant,
            },
        })
    }

    /// Variant this pipeline runs.
    pub fn variant(&self) -> Variant {
        self.duplex.variant
    }

    /// Current permutation state.
    pub fn state(&self) -> &State {
        &self.duplex.state
    }

    /// Absorb the associated data, which may be empty.
    pub fn absorb(self, ad: &[u64]) -> Result<Absorbed> {
        let mut duplex = self.duplex;
        match duplex.variant {
            Variant::Ascon128 => absorb_rate1(&mut duplex.state, ad)?,
            Variant::Ascon128a => absorb_rate2(&mut duplex.state, ad)?,
        }
        Ok(Absorbed { duplex })
    }
}

/// State after associated data absorption, ready to encrypt.
pub struct Absorbed {
    duplex: Duplex,
}

impl Absorbed {
    /// Current permutation state.
    pub fn state(&self) -> &State {
        &self.duplex.state
    }

    /// Encrypt the plaintext, returning the ciphertext and the stage that
    /// produces the tag.
    pub fn encrypt(self, plaintext: &[u64]) -> Result<(Vec<u64>, Encrypted)> {
        let mut duplex = self.duplex;
        let ciphertext = match duplex.variant {
            Variant::Ascon128 => encrypt_rate1(&mut duplex.state, plaintext)?,
            Variant::Ascon128a => encrypt_rate2(&mut duplex.state, plaintext)?,
        };
        Ok((ciphertext, Encrypted { duplex }))
    }
}

/// State after encryption, ready to produce the tag.
pub struct Encrypted {
    duplex: Duplex,
}

impl Encrypted {
    /// Current permutation state.
    pub fn state(&self) -> &State {
        &self.duplex.state
    }

    /// Produce the authentication tag. The state is wiped afterwards.
    pub fn finalize(self) -> Result<Tag> {
        let mut duplex = self.duplex;
        match duplex.variant {
            Variant::Ascon128 => finalize_rate1(&mut duplex.state, &duplex.key),
            Variant::Ascon128a => finalize_rate2(&mut duplex.state, &duplex.key),
        }
    }
}

/// Encrypt plaintext lanes and authenticate them with the associated data.
pub fn encrypt(
    variant: Variant,
    iv: u64,
    key: &Key,
    nonce: &Nonce,
    ad: &[u64],
    plaintext: &[u64],
) -> Result<(Vec<u64>, Tag)> {
    // Validate input parameters
    utils::validate_params(variant, ad.len(), plaintext.len())?;

    let absorbed = Initialized::with_iv(variant, iv, key, nonce)?.absorb(ad)?;
    let (ciphertext, encrypted) = absorbed.encrypt(plaintext)?;
    let tag = encrypted.finalize()?;

    Ok((ciphertext, tag))
}
