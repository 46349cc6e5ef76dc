//! CubeHash
//! ========
//! The parameterised **CubeHash i+r/b+f-h** hash family: a 1024-bit state,
//! `r` rounds per `b`-byte block, `h`-bit output, with `i = f = 10r` rounds of
//! IV derivation and finalization.
//!
//! ## Construction
//! * State    : 32 × 32-bit words (1024 bits)
//! * Round    : add → rotate 7 → swap → xor → swap → add → rotate 11 → swap → xor → swap
//! * IV       : words `[h/8, b, r, 0, …]`, then `10r` rounds
//! * Absorb   : `0x80` terminator, zero fill to `b`, each block XORed from word 0
//!   as little-endian words, then `r` rounds
//! * Finalize : `state[31] ^= 1`, then `10r` rounds
//! * Output   : first `h/8` bytes of the state, words little-endian
//!
//! ```
//! assert_eq!(
//!     cubehash::hash256(8, 1, b"Hello").unwrap(),
//!     "692638db57760867326f851bd2376533f37b640bd47a0ddc607a9456b692f70f"
//! );
//! ```
//!
//! Every call owns its own state from IV to digest; concurrent calls share
//! nothing. With the `parallel` feature, [`hash_batch`] spreads independent
//! messages over the Rayon pool.
//!
//! ---
//! **Security NOTE:** the padding and parameter handling follow the published
//! test vectors bit for bit; do not treat this crate as a MAC or KDF.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub mod digest;
pub mod error;
pub mod params;
pub mod sponge;
pub mod state;

pub use crate::digest::Digest;
pub use crate::error::ParamError;
pub use crate::params::Params;
pub use crate::sponge::{absorb, absorb_block, finalize, pad, Hasher};
pub use crate::state::{State, STATE_WORDS};

// ---------------------------------------------------------------------------
// Public hashing API
// ---------------------------------------------------------------------------

/// IV for `(r, b, h)`, exposed for checking against published tables.
pub fn iv(rounds: u32, block_bytes: usize, digest_bits: usize) -> Result<State, ParamError> {
    let params = Params::new(rounds, block_bytes, digest_bits)?;
    Ok(State::initial(&params))
}

/// Computes the CubeHash digest of `message` under validated `params`.
///
/// Runs IV → pad → absorb → finalize → truncate, moving one state through
/// every stage.
pub fn digest(params: Params, message: &[u8]) -> Digest {
    let span = tracing::trace_span!(
        "cubehash",
        rounds = params.rounds(),
        block_bytes = params.block_bytes(),
        digest_bits = params.digest_bits(),
        len = message.len()
    );
    let _enter = span.enter();

    let state = State::initial(&params);
    let padded = pad(message, &params);
    let state = absorb(state, &padded, &params);
    let state = finalize(state, &params);
    Digest::from_state(state, &params)
}

/// CubeHash of `message` as lowercase hex, `h/4` characters long.
pub fn hash(
    rounds: u32,
    block_bytes: usize,
    digest_bits: usize,
    message: &[u8],
) -> Result<String, ParamError> {
    let params = Params::new(rounds, block_bytes, digest_bits)?;
    Ok(digest(params, message).to_hex())
}

/// [`hash`] with `h = 256`; 64 hex characters.
pub fn hash256(rounds: u32, block_bytes: usize, message: &[u8]) -> Result<String, ParamError> {
    hash(rounds, block_bytes, 256, message)
}

/// [`hash`] with `h = 512`; 128 hex characters.
pub fn hash512(rounds: u32, block_bytes: usize, message: &[u8]) -> Result<String, ParamError> {
    hash(rounds, block_bytes, 512, message)
}

/// Hash many independent messages in **parallel** using Rayon (feature `parallel`).
///
/// Output order follows input order.
#[cfg(feature = "parallel")]
pub fn hash_batch(params: Params, messages: &[&[u8]]) -> Vec<Digest> {
    tracing::debug!(batch = messages.len(), %params, "hashing batch");
    messages.par_iter().map(|m| digest(params, m)).collect()
}
