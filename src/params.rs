//! Parameter triple `(r, b, h)` selecting one member of the CubeHash family.

use core::fmt;

use crate::error::ParamError;

/// Largest block size in bytes (the rate can never exceed the 128-byte state).
pub const MAX_BLOCK_BYTES: usize = 128;
/// Largest digest size in bits (half of the 1024-bit state).
pub const MAX_DIGEST_BITS: usize = 512;

/// Validated CubeHash parameters.
///
/// * `rounds`      (r): rounds applied after every absorbed block, r >= 1
/// * `block_bytes` (b): bytes absorbed per block, 1..=128
/// * `digest_bits` (h): output size, a multiple of 8 in 8..=512
///
/// The fields are private, so a `Params` value is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params {
    rounds: u32,
    block_bytes: usize,
    digest_bits: usize,
}

impl Params {
    /// CubeHash10+1/1+10-256.
    pub const CUBEHASH_1_1_256: Params = Params::preset(1, 1, 256);
    /// CubeHash80+8/1+80-256, the original SHA-3 round-one submission.
    pub const CUBEHASH_8_1_256: Params = Params::preset(8, 1, 256);
    /// CubeHash80+8/1+80-512.
    pub const CUBEHASH_8_1_512: Params = Params::preset(8, 1, 512);
    /// CubeHash160+16/32+160-256, the round-two tweak.
    pub const CUBEHASH_16_32_256: Params = Params::preset(16, 32, 256);
    /// CubeHash160+16/32+160-512.
    pub const CUBEHASH_16_32_512: Params = Params::preset(16, 32, 512);

    const fn preset(rounds: u32, block_bytes: usize, digest_bits: usize) -> Self {
        Self {
            rounds,
            block_bytes,
            digest_bits,
        }
    }

    /// Validates `(r, b, h)`. Invalid values are rejected, never clamped.
    pub fn new(rounds: u32, block_bytes: usize, digest_bits: usize) -> Result<Self, ParamError> {
        if rounds < 1 {
            tracing::debug!(rounds, "rejecting CubeHash parameters");
            return Err(ParamError::Rounds(rounds));
        }
        if !(1..=MAX_BLOCK_BYTES).contains(&block_bytes) {
            tracing::debug!(block_bytes, "rejecting CubeHash parameters");
            return Err(ParamError::BlockSize(block_bytes));
        }
        if digest_bits == 0 || digest_bits % 8 != 0 || digest_bits > MAX_DIGEST_BITS {
            tracing::debug!(digest_bits, "rejecting CubeHash parameters");
            return Err(ParamError::DigestSize(digest_bits));
        }
        Ok(Self::preset(rounds, block_bytes, digest_bits))
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn block_bytes(&self) -> usize {
        self.block_bytes
    }

    pub fn digest_bits(&self) -> usize {
        self.digest_bits
    }

    /// Output size in bytes, `h / 8`.
    pub fn digest_bytes(&self) -> usize {
        self.digest_bits / 8
    }

    /// Rounds spent on IV derivation and again on finalization, `10 * r`.
    pub fn setup_rounds(&self) -> u64 {
        10 * u64::from(self.rounds)
    }
}

impl fmt::Display for Params {
    /// Canonical family name, `CubeHash{i}+{r}/{b}+{f}-{h}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ten_r = self.setup_rounds();
        write!(
            f,
            "CubeHash{}+{}/{}+{}-{}",
            ten_r, self.rounds, self.block_bytes, ten_r, self.digest_bits
        )
    }
}
