// crates/xf2bf-core/src/convert.rs

use crate::error::ConvertError;

/// Parse a classified token as base 16 and keep the low 8 bits.
///
/// An optional `0x`/`0X` prefix is consumed. Tokens that passed
/// [`crate::classify::is_single_hex_byte`] always fit; the error path only
/// fires for callers that skip classification.
pub fn token_to_byte(token: &[u8]) -> Result<u8, ConvertError> {
    let digits = match token {
        [b'0', b'x' | b'X', rest @ ..] => rest,
        _ => token,
    };
    let s = std::str::from_utf8(digits).map_err(|_| ConvertError::Invalid)?;
    // `from_str_radix` tolerates a leading sign; hex digits only here.
    if s.starts_with(['+', '-']) {
        return Err(ConvertError::Invalid);
    }
    let v = u64::from_str_radix(s, 16)?;
    Ok(v as u8)
}
