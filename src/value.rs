//! Conversion of command line tokens into raw bytes.
//!
//! A token is either a single ASCII character, which becomes its code point,
//! or `0x` followed by exactly two hex digits.

use log::debug;

use crate::{config::PatchLength, error::{PatchError, TokenError}};

pub const HEX_PREFIX: &str = "0x";

pub fn decode_token(token: &str) -> Result<u8, TokenError> {
    if let Some(digits) = token.strip_prefix(HEX_PREFIX) {
        // from_str_radix alone would accept a leading '+'.
        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TokenError::InvalidHex(token.to_string()));
        }
        return u8::from_str_radix(digits, 16)
            .map_err(|_| TokenError::InvalidHex(token.to_string()));
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(TokenError::InvalidAscii(token.to_string())),
    }
}

/// Decodes one byte per token, in order. Nothing is returned unless every
/// token is valid and there are exactly `length` of them.
pub fn decode_tokens<S: AsRef<str>>(tokens: &[S], length: PatchLength) -> Result<Vec<u8>, PatchError> {
    if tokens.len() != length.get() {
        return Err(PatchError::WrongCount {
            expected: length.get(),
            got: tokens.len(),
        });
    }
    tokens.iter()
        .enumerate()
        .map(|(idx, token)| {
            let token = token.as_ref();
            let byte = decode_token(token)
                .map_err(|source| PatchError::InvalidValue { position: idx + 1, source })?;
            debug!("value {}: {token:?} -> {byte:#04x}", idx + 1);
            Ok(byte)
        })
        .collect()
}
