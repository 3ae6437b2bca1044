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


//! This module contains the [`InboundMessage`] delivered by the Pub/Sub
//! service and the [`FunctionEvent`] that wraps it when a cloud function is
//! triggered from a topic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A Pub/Sub message.
///
/// Only [`InboundMessage::data`] is consumed by the handlers; the remaining
/// metadata is accepted so that events from the service deserialize as is.
#[derive(Default, Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessage {
    /// The base64-encoded payload. It may be absent or null.
    #[serde(default)]
    pub data:         Option<String>,
    /// Optional attributes attached by the publisher.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes:   HashMap<String, String>,
    /// The identifier assigned by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id:   Option<String>,
    /// The RFC 3339 time at which the service received the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_time: Option<String>,
}

impl InboundMessage {
    /// Returns a message without payload.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a message whose payload is the base64 encoding of `bytes`.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            data: Some(base64::encode(bytes)),
            ..Default::default()
        }
    }

    /// Returns a message whose payload is the given base64 text.
    pub fn from_base64(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            ..Default::default()
        }
    }
}

/// The event passed to a cloud function subscribed to a topic.
///
/// Background functions receive the message under `data`, push
/// subscriptions under `message`; both are accepted.
#[derive(Default, Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FunctionEvent {
    /// The message that triggered the invocation.
    #[serde(alias = "message")]
    pub data:         InboundMessage,
    /// The subscription that delivered a pushed message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

impl From<InboundMessage> for FunctionEvent {
    fn from(data: InboundMessage) -> Self {
        Self {
            data,
            subscription: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use serde_json::json;

    #[test]
    fn background_event() -> Result<()> {
        let event: FunctionEvent = serde_json::from_value(json!({
            "data": {
                "data": "QWxpY2U=",
                "attributes": { "origin": "calc" },
                "messageId": "2070443601311540",
                "publishTime": "2021-02-26T19:13:55.749Z"
            }
        }))?;

        assert_eq!(Some("QWxpY2U="), event.data.data.as_deref());
        assert_eq!("calc", event.data.attributes["origin"]);
        assert_eq!(Some("2070443601311540"), event.data.message_id.as_deref());
        assert!(event.subscription.is_none());
        Ok(())
    }

    #[test]
    fn push_event() -> Result<()> {
        let event: FunctionEvent = serde_json::from_value(json!({
            "message": { "data": "Qm9i" },
            "subscription": "projects/calculator-test-182623/subscriptions/calc"
        }))?;

        assert_eq!(InboundMessage::from_base64("Qm9i"), event.data);
        assert!(event.subscription.is_some());
        Ok(())
    }

    #[test]
    fn absent_and_null_data() -> Result<()> {
        let event: FunctionEvent = serde_json::from_value(json!({ "data": {} }))?;
        assert_eq!(None, event.data.data);

        let event: FunctionEvent = serde_json::from_value(json!({ "data": { "data": null } }))?;
        assert_eq!(InboundMessage::empty(), event.data);
        Ok(())
    }

    #[test]
    fn serialize_skips_absent_metadata() -> Result<()> {
        let message = InboundMessage::from_bytes("Alice");
        assert_eq!(json!({ "data": "QWxpY2U=" }), serde_json::to_value(&message)?);
        Ok(())
    }
}
