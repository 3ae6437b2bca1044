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


//! Reports the calculation results published to the result topic.

use super::{Sink, Subscriber};
use crate::error::Result;
use crate::message::InboundMessage;
use crate::payload::decode_payload;
use serde_json::Value;

/// The payload assumed when the message carries none.
pub const DEFAULT_PAYLOAD: &str = r#"{"name":"World"}"#;

/// Logged in place of a `name` the payload doesn't have.
pub const UNDEFINED: &str = "undefined";

/// Logs the JSON payload of every message, then greets its `name`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalcResultHandler;

impl Subscriber for CalcResultHandler {
    const NAME: &'static str = "calc-result";

    fn handle<S: Sink>(&self, message: &InboundMessage, sink: &mut S) -> Result<()> {
        let input = decode_payload(message.data.as_deref(), DEFAULT_PAYLOAD)?;
        sink.emit(format!("Input is, {}", input));

        let result: Value = serde_json::from_str(&input)?;
        sink.emit(format!("Hello, {}", display_name(&result)));
        Ok(())
    }
}

/// Renders the `name` of a parsed result. Strings are written without quotes,
/// other values as JSON.
fn display_name(result: &Value) -> String {
    match result.get("name") {
        Some(Value::String(name)) => name.to_owned(),
        Some(name) => name.to_string(),
        None => UNDEFINED.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    fn handle(message: &InboundMessage) -> (Result<()>, Vec<String>) {
        let mut lines = vec![];
        let res = CalcResultHandler.handle(message, &mut lines);
        (res, lines)
    }

    #[test]
    fn default_payload() -> Result<()> {
        let (res, lines) = handle(&InboundMessage::empty());
        res?;
        assert_eq!(vec![r#"Input is, {"name":"World"}"#, "Hello, World"], lines);
        Ok(())
    }

    #[test]
    fn named_payload() -> Result<()> {
        let (res, lines) = handle(&InboundMessage::from_bytes(r#"{"name":"Bob"}"#));
        res?;
        assert_eq!(vec![r#"Input is, {"name":"Bob"}"#, "Hello, Bob"], lines);
        Ok(())
    }

    #[test]
    fn invalid_json_stops_after_input() {
        let (res, lines) = handle(&InboundMessage::from_bytes("{name: Bob"));
        assert!(matches!(res, Err(CalcError::SerdeJson(_))));
        assert_eq!(vec!["Input is, {name: Bob"], lines);
    }

    #[test]
    fn malformed_base64_logs_nothing() {
        let (res, lines) = handle(&InboundMessage::from_base64("@@@"));
        assert!(matches!(res, Err(CalcError::Base64(_))));
        assert!(lines.is_empty());
    }

    #[test]
    fn missing_name_is_undefined() -> Result<()> {
        let (res, lines) = handle(&InboundMessage::from_bytes(r#"{"sum":3}"#));
        res?;
        assert_eq!(vec![r#"Input is, {"sum":3}"#, "Hello, undefined"], lines);

        // A bare sum, as published by the calculator, has no name either.
        let (res, lines) = handle(&InboundMessage::from_bytes("3"));
        res?;
        assert_eq!(vec!["Input is, 3", "Hello, undefined"], lines);
        Ok(())
    }

    #[test]
    fn non_string_name() -> Result<()> {
        let (res, lines) = handle(&InboundMessage::from_bytes(r#"{"name":42}"#));
        res?;
        assert_eq!("Hello, 42", lines[1]);
        Ok(())
    }
}
