use crate::error::{Error, Result};

/// Interprets two bytes as ASCII digits and combines them as a two digit
/// decimal number, `b'1', b'0'` becomes `10`.
pub fn combined_char_based_value(high: u8, low: u8) -> Result<u8> {
    if !high.is_ascii_digit() || !low.is_ascii_digit() {
        return Err(Error::out_of_range(format!(
            "bytes {:02x} {:02x} are not both ASCII digits",
            high, low
        )));
    }
    Ok((high - b'0') * 10 + (low - b'0'))
}

/// Removes trailing `\0` characters. Leading and embedded nulls are kept.
pub fn trim_trailing_null_bytes(s: &str) -> &str {
    s.trim_end_matches('\0')
}

/// Converts a 16-bit value that was read from disk in big-endian order into
/// host order. Applying it twice gives back the original value.
pub fn to_host_order_16(value: u16) -> u16 {
    u16::from_be(value)
}

pub fn to_hex<T: Into<u16>>(val: T) -> String {
    format!("{:01$x}", val.into(), 2)
}
