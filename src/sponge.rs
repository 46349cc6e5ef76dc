//! Padding, absorption and finalization around the round permutation.
//!
//! A message is extended with a `0x80` terminator and zero-filled up to a
//! multiple of `b`. Every `b`-byte block is read as little-endian words,
//! XORed into the state from word 0 and followed by `r` rounds. Finalization
//! flips the low bit of word 31 and applies `10 * r` rounds.

use crate::digest::Digest;
use crate::params::{Params, MAX_BLOCK_BYTES};
use crate::state::{State, SETUP_GROUPS, STATE_WORDS};

/// Terminator byte appended to every message.
const PAD_MARKER: u8 = 0x80;
/// Word carrying the end-of-input bit.
const FINAL_WORD: usize = STATE_WORDS - 1;

// ---------------------------------------------------------------------------
// Padding
// ---------------------------------------------------------------------------

/// Appends `0x80` and then zeros up to the next multiple of `b`.
///
/// A message that is already aligned pushes the terminator into a fresh block,
/// so the result is always longer than `message`. No zero block is added when
/// message plus terminator is already aligned.
pub fn pad(message: &[u8], params: &Params) -> Vec<u8> {
    let b = params.block_bytes();
    let unpadded = message.len() + 1;
    let padded_len = unpadded + (b - unpadded % b) % b;

    let mut padded = Vec::with_capacity(padded_len);
    padded.extend_from_slice(message);
    padded.push(PAD_MARKER);
    padded.resize(padded_len, 0);
    debug_assert!(padded.len() % b == 0);
    padded
}

// ---------------------------------------------------------------------------
// Absorb / finalize
// ---------------------------------------------------------------------------

/// XORs one block into the state, starting at word 0, then applies `r` rounds.
///
/// The block is split into 4-byte little-endian words; a trailing chunk of
/// fewer than 4 bytes fills only the low-order bytes of its word.
#[inline(always)]
pub fn absorb_block(state: &mut State, block: &[u8], rounds: u32) {
    debug_assert!(block.len() <= MAX_BLOCK_BYTES);
    for (n, chunk) in block.chunks(4).enumerate() {
        let word = chunk
            .iter()
            .rev()
            .fold(0u32, |acc, &byte| (acc << 8) | u32::from(byte));
        state.xor_word(n, word);
    }
    state.permute(rounds);
}

/// Absorbs an already padded message block by block.
pub fn absorb(mut state: State, padded: &[u8], params: &Params) -> State {
    debug_assert!(padded.len() % params.block_bytes() == 0);
    for block in padded.chunks_exact(params.block_bytes()) {
        absorb_block(&mut state, block, params.rounds());
    }
    state
}

/// Sets the end-of-input bit and applies the closing `10 * r` rounds.
pub fn finalize(mut state: State, params: &Params) -> State {
    state.xor_word(FINAL_WORD, 1);
    for _ in 0..SETUP_GROUPS {
        state.permute(params.rounds());
    }
    state
}

// ---------------------------------------------------------------------------
// Incremental hashing
// ---------------------------------------------------------------------------

/// Incremental CubeHash computation.
///
/// Full blocks are absorbed as soon as they are complete; only the tail is
/// buffered. The digest equals the one-shot digest for any split of the input.
///
/// ```
/// use cubehash::{Hasher, Params};
///
/// let mut hasher = Hasher::new(Params::CUBEHASH_16_32_256);
/// hasher.update(b"Hel");
/// hasher.update(b"lo");
/// assert_eq!(
///     hasher.finalize().to_hex(),
///     "e712139e3b892f2f5fe52d0f30d78a0cb16b51b217da0e4acb103dd0856f2db0"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Hasher {
    params: Params,
    state: State,
    buffer: [u8; MAX_BLOCK_BYTES],
    buffer_len: usize,
}

impl Hasher {
    pub fn new(params: Params) -> Self {
        Self {
            state: State::initial(&params),
            params,
            buffer: [0; MAX_BLOCK_BYTES],
            buffer_len: 0,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        let b = self.params.block_bytes();
        let rounds = self.params.rounds();
        let mut input = data.as_ref();

        // top up a partially filled block first
        if self.buffer_len > 0 {
            let take = (b - self.buffer_len).min(input.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&input[..take]);
            self.buffer_len += take;
            input = &input[take..];
            if self.buffer_len < b {
                return;
            }
            absorb_block(&mut self.state, &self.buffer[..b], rounds);
            self.buffer_len = 0;
        }

        let mut blocks = input.chunks_exact(b);
        for block in &mut blocks {
            absorb_block(&mut self.state, block, rounds);
        }
        let tail = blocks.remainder();
        self.buffer[..tail.len()].copy_from_slice(tail);
        self.buffer_len = tail.len();
    }

    pub fn chain_update(mut self, data: impl AsRef<[u8]>) -> Self {
        self.update(data);
        self
    }

    pub fn finalize(mut self) -> Digest {
        let b = self.params.block_bytes();
        self.buffer[self.buffer_len] = PAD_MARKER;
        self.buffer[self.buffer_len + 1..b].fill(0);
        absorb_block(&mut self.state, &self.buffer[..b], self.params.rounds());

        let state = finalize(self.state, &self.params);
        Digest::from_state(state, &self.params)
    }
}
