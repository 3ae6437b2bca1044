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


//! Calc CLI invokes the subscribers locally, on a message given on the
//! command line.

use anyhow::Result;
use calc::prelude::*;
use clap::{Arg, ArgMatches, Command};

pub fn command<S: Subscriber>(subscriber: &S, matches: &ArgMatches) -> Result<()> {
    let message = message(matches);
    log::debug!("invoking {} with {:?}", S::NAME, message);
    subscriber.handle(&message, &mut LogSink)?;
    Ok(())
}

pub fn command_args<S: Subscriber>(about: &'static str) -> Command<'static> {
    Command::new(S::NAME)
        .about(about)
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("BASE64")
                .help("Sets the base64 payload of the message")
                .takes_value(true),
        )
        .arg(
            Arg::new("text")
                .short('t')
                .long("text")
                .value_name("TEXT")
                .help("Sets the payload of the message as plain text")
                .conflicts_with("data")
                .takes_value(true),
        )
}

/// Builds the message to deliver. Without payload the subscriber falls back
/// to its default.
fn message(matches: &ArgMatches) -> InboundMessage {
    if let Some(data) = matches.get_one::<String>("data") {
        InboundMessage::from_base64(data.as_str())
    } else if let Some(text) = matches.get_one::<String>("text") {
        InboundMessage::from_bytes(text)
    } else {
        InboundMessage::empty()
    }
}
