use crate::error::LookupError;

/// Parse a hex string (with or without `0x` prefix) into a decimal value.
pub fn hex_to_dec(value: &str) -> Result<u64, LookupError> {
    let value = value.trim();
    let digits = match value.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => &value[2..],
        _ => value,
    };
    // from_str_radix tolerates a leading sign, which is not valid hex here
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(LookupError::InvalidHex);
    }
    u64::from_str_radix(digits, 16).map_err(|_| LookupError::InvalidHex)
}
