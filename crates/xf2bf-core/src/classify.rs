// crates/xf2bf-core/src/classify.rs

/// True for `0xHH` (lowercase `x`) and bare `HH`, where `H` is a hex digit.
///
/// The two-byte branch tests both bytes for hex digits and knows nothing
/// about prefixes; that digit test is what turns away a lone `"0x"`.
pub fn is_single_hex_byte(token: &[u8]) -> bool {
    match token {
        [b'0', b'x', hi, lo] => hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit(),
        [hi, lo] => hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit(),
        _ => false,
    }
}
