// Text <-> character code conversion
// Codes are UTF-16 code units, one per string element

use num_traits::ToPrimitive;

use super::bigint::RsaBigInt;
use super::error::CodecError;

/// Convert a message into its UTF-16 code units, in order
pub fn text_to_codes(message: &str) -> Vec<RsaBigInt> {
    message.encode_utf16().map(RsaBigInt::from).collect()
}

fn code_units(codes: &[RsaBigInt]) -> Result<Vec<u16>, CodecError> {
    codes
        .iter()
        .enumerate()
        .map(|(position, code)| {
            code.to_u16().ok_or_else(|| CodecError::CodeOutOfRange {
                position,
                code: code.clone(),
            })
        })
        .collect()
}

/// Rebuild text from UTF-16 code units
///
/// Exact inverse of [`text_to_codes`].
pub fn codes_to_text(codes: &[RsaBigInt]) -> Result<String, CodecError> {
    let units = code_units(codes)?;
    String::from_utf16(&units).map_err(|_| CodecError::InvalidUtf16)
}

/// Rebuild text, replacing anything undecodable with U+FFFD
pub fn codes_to_text_lossy(codes: &[RsaBigInt]) -> String {
    let units: Vec<u16> = codes
        .iter()
        .map(|code| code.to_u16().unwrap_or(0xFFFD))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Display form of a single code for narration: `'H'` or `U+D83D`
pub fn describe_code(code: &RsaBigInt) -> String {
    match code.to_u32().and_then(char::from_u32) {
        Some(c) if !c.is_control() => format!("'{}'", c),
        Some(c) => format!("U+{:04X}", c as u32),
        None => match code.to_u32() {
            Some(unit) => format!("U+{:04X}", unit),
            None => format!("#{}", code),
        },
    }
}
