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


//! The subscribers of the calculator topics.
//!
//! Each subscriber handles one message per invocation. Returning `Ok(())`
//! signals the completion of the invocation; an error terminates it.

pub mod calc_result;
pub mod greeting;

pub use calc_result::CalcResultHandler;
pub use greeting::GreetingHandler;

use crate::error::Result;
use crate::message::InboundMessage;

/// Destination of the lines a subscriber logs.
pub trait Sink {
    /// Emits one line.
    fn emit(&mut self, line: String);
}

/// Forwards lines to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl Sink for LogSink {
    fn emit(&mut self, line: String) {
        log::info!("{}", line);
    }
}

/// Captures lines in memory.
impl Sink for Vec<String> {
    fn emit(&mut self, line: String) {
        self.push(line);
    }
}

/// A cloud function triggered by messages on a topic.
pub trait Subscriber {
    /// The name of the subscriber, reported in the function response.
    const NAME: &'static str;

    /// Handles one message.
    ///
    /// # Arguments
    /// * `message` - The message that triggered the invocation.
    /// * `sink` - Where the lines are logged.
    fn handle<S: Sink>(&self, message: &InboundMessage, sink: &mut S) -> Result<()>;
}
