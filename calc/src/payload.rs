// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.


//! Decoding of message payloads into text.

use crate::error::Result;

/// Decodes a base64 message payload into text.
///
/// # Arguments
/// * `data` - The base64 payload of the message, if any.
/// * `default` - The text to use when the message carries no payload.
///
/// # Returns
/// The decoded text. A payload that is absent or empty resolves to `default`.
/// Invalid UTF-8 sequences are replaced with `U+FFFD`.
///
/// # Errors
/// Returns [`crate::error::CalcError::Base64`] if the payload is not valid
/// base64.
pub fn decode_payload(data: Option<&str>, default: &str) -> Result<String> {
    match data {
        Some(data) if !data.is_empty() => {
            let bytes = base64::decode(data)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => Ok(default.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn absent_payload_uses_default() -> Result<()> {
        assert_eq!("World", decode_payload(None, "World")?);
        assert_eq!("World", decode_payload(Some(""), "World")?);
        Ok(())
    }

    #[test]
    fn decode_text() -> Result<()> {
        assert_eq!("Alice", decode_payload(Some("QWxpY2U="), "World")?);
        assert_eq!(
            r#"{"name":"Bob"}"#,
            decode_payload(Some("eyJuYW1lIjoiQm9iIn0="), "World")?
        );
        Ok(())
    }

    #[test]
    fn invalid_utf8_is_replaced() -> Result<()> {
        let data = base64::encode([0x48u8, 0x69, 0xff]);
        assert_eq!("Hi\u{fffd}", decode_payload(Some(&data), "World")?);
        Ok(())
    }

    #[test]
    fn malformed_base64() {
        let err = decode_payload(Some("not base64!"), "World").unwrap_err();
        assert!(matches!(err, CalcError::Base64(_)));
    }
}
