use thiserror::Error;

/// Rejection of a CubeHash parameter triple, raised before any hashing starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("rounds per block must be at least 1, got {0}")]
    Rounds(u32),
    #[error("block size must be in 1..=128 bytes, got {0}")]
    BlockSize(usize),
    #[error("digest size must be a multiple of 8 in 8..=512 bits, got {0}")]
    DigestSize(usize),
}
