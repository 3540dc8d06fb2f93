// crates/xf2bf-core/src/token.rs

use std::fmt;

/// A maximal run of non-whitespace bytes read from the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Token(Vec<u8>);

impl Token {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Lossy: input is expected to be ASCII but nothing enforces it.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}
