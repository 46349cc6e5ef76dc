//! Digest extraction: the first `h/8` bytes of the state, each word
//! serialised little-endian, words in ascending index order.

use core::fmt;

use crate::params::Params;
use crate::state::State;

/// Final CubeHash output of `h/8` bytes. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(Vec<u8>);

impl Digest {
    /// Reads the digest out of a finalized state, consuming it.
    pub(crate) fn from_state(state: State, params: &Params) -> Self {
        let bytes = state
            .into_words()
            .iter()
            .flat_map(|w| w.to_le_bytes())
            .take(params.digest_bytes())
            .collect();
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> usize {
        self.0.len() * 8
    }

    /// Lowercase hex, `h/4` characters.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
