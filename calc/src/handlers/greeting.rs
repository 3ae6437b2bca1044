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


//! Greets whoever the message payload names.

use super::{Sink, Subscriber};
use crate::error::Result;
use crate::message::InboundMessage;
use crate::payload::decode_payload;

/// The name greeted when the message carries no payload.
pub const DEFAULT_NAME: &str = "World";

/// Logs `Hello, <payload>` for every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreetingHandler;

impl Subscriber for GreetingHandler {
    const NAME: &'static str = "subscribe";

    fn handle<S: Sink>(&self, message: &InboundMessage, sink: &mut S) -> Result<()> {
        let name = decode_payload(message.data.as_deref(), DEFAULT_NAME)?;
        sink.emit(format!("Hello, {}", name));
        Ok(())
    }
}
