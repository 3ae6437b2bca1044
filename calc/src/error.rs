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


//! Calc error types

use std::error;
use std::fmt::{Display, Formatter};
use std::result;

/// Result type for operations that could result in an [CalcError]
pub type Result<T> = result::Result<T, CalcError>;

/// Calc error
#[derive(Debug)]
pub enum CalcError {
    /// Error returned when Base64 decoding of a message payload fails.
    Base64(base64::DecodeError),
    /// Error returned when serde_json failed to serialize or deserialize data.
    SerdeJson(serde_json::Error),
    /// Error returned when the embedded configuration cannot be parsed.
    Ini(ini::ParseError),
    /// Error returned when a required setting is missing or empty.
    Config(String),
    /// Error returned when the operands of a calculation are invalid.
    /// Examples include blank operands and operands that are not integers.
    InvalidInput(String),
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerdeJson(e)
    }
}

impl From<base64::DecodeError> for CalcError {
    fn from(e: base64::DecodeError) -> Self {
        CalcError::Base64(e)
    }
}

impl From<ini::ParseError> for CalcError {
    fn from(e: ini::ParseError) -> Self {
        CalcError::Ini(e)
    }
}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            CalcError::Base64(ref desc) => write!(f, "Base64 error: {}", desc),
            CalcError::SerdeJson(ref desc) => write!(f, "serde_json error: {:?}", desc),
            CalcError::Ini(ref desc) => write!(f, "Config parse error: {}", desc),
            CalcError::Config(ref desc) => write!(f, "Config error: {}", desc),
            CalcError::InvalidInput(ref desc) => write!(f, "Invalid input: {}", desc),
        }
    }
}

impl error::Error for CalcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_source() {
        let err: CalcError = base64::decode("***").unwrap_err().into();
        assert!(matches!(err, CalcError::Base64(_)));
        assert!(err.to_string().starts_with("Base64 error: "));

        let err: CalcError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("serde_json error: "));

        let err = CalcError::InvalidInput("Number 1 or number 2 is blank".to_owned());
        assert_eq!(
            err.to_string(),
            "Invalid input: Number 1 or number 2 is blank"
        );
    }
}
