//! The 1024-bit CubeHash state and its round permutation.
//!
//! The state is 32 words of 32 bits. A round treats it as two halves,
//! `x[0..16]` (low) and `x[16..32]` (high), and runs:
//!
//! 1. `high[i] += low[i]`
//! 2. swap `low[i]` with `low[i ^ 8]`, rotate each by 7
//! 3. `low[i] ^= high[i]`
//! 4. swap `high[i]` with `high[i ^ 2]`
//! 5. `high[i] += low[i]`
//! 6. swap `low[i]` with `low[i ^ 4]`, rotate each by 11
//! 7. `low[i] ^= high[i]`
//! 8. swap `high[i]` with `high[i ^ 1]`
//!
//! All arithmetic is on `u32` with explicit wraparound; signed views exist only
//! for comparing against published IV tables.

use crate::params::Params;

/// Number of 32-bit words in the state.
pub const STATE_WORDS: usize = 32;
const HALF: usize = STATE_WORDS / 2;

/// IV derivation and finalization both apply this many `r`-round groups.
pub(crate) const SETUP_GROUPS: usize = 10;

// ---------------------------------------------------------------------------
// One round – hot path
// ---------------------------------------------------------------------------

#[inline(always)]
fn round(x: &mut [u32; STATE_WORDS]) {
    let (low, high) = x.split_at_mut(HALF);
    let mut y = [0u32; HALF];

    // -- 1. add low into high, stash low permuted by i ^ 8 ------------------
    for i in 0..HALF {
        high[i] = high[i].wrapping_add(low[i]);
        y[i ^ 8] = low[i];
    }
    // -- 2. rotate by 7, xor high into low -----------------------------------
    for i in 0..HALF {
        low[i] = y[i].rotate_left(7) ^ high[i];
    }
    // -- 3. permute high by i ^ 2 --------------------------------------------
    for i in 0..HALF {
        y[i ^ 2] = high[i];
    }
    // -- 4. add low into permuted high ---------------------------------------
    for i in 0..HALF {
        high[i] = y[i].wrapping_add(low[i]);
    }
    // -- 5. permute low by i ^ 4 ---------------------------------------------
    for i in 0..HALF {
        y[i ^ 4] = low[i];
    }
    // -- 6. rotate by 11, xor high into low ----------------------------------
    for i in 0..HALF {
        low[i] = y[i].rotate_left(11) ^ high[i];
    }
    // -- 7. swap adjacent high words -----------------------------------------
    for i in (0..HALF).step_by(2) {
        high.swap(i, i + 1);
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// The 32-word CubeHash state.
///
/// A `State` is owned by exactly one computation and moved from stage to
/// stage (IV, absorb, finalize, encode); it is never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State([u32; STATE_WORDS]);

impl State {
    pub fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Derives the IV for `params`: seed `h/8`, `b`, `r` into words 0..3,
    /// zero the rest, then apply `10 * r` rounds.
    pub fn initial(params: &Params) -> Self {
        let mut words = [0u32; STATE_WORDS];
        // b <= 128 and h/8 <= 64 always fit in a word
        words[0] = params.digest_bytes() as u32;
        words[1] = params.block_bytes() as u32;
        words[2] = params.rounds();
        let mut state = Self(words);
        for _ in 0..SETUP_GROUPS {
            state.permute(params.rounds());
        }
        state
    }

    /// Applies `rounds` rounds and hands the state back for chaining.
    pub fn transform(mut self, rounds: u32) -> Self {
        self.permute(rounds);
        self
    }

    /// In-place form of [`State::transform`].
    pub(crate) fn permute(&mut self, rounds: u32) {
        for _ in 0..rounds {
            round(&mut self.0);
        }
    }

    pub fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    pub fn into_words(self) -> [u32; STATE_WORDS] {
        self.0
    }

    /// Two's-complement reading of every word.
    pub fn to_signed(&self) -> [i32; STATE_WORDS] {
        self.0.map(|w| w as i32)
    }

    #[inline(always)]
    pub(crate) fn xor_word(&mut self, index: usize, value: u32) {
        self.0[index] ^= value;
    }
}
