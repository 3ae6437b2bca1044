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


mod args;
mod invoke;
mod publish;

use anyhow::Result;
use calc::prelude::*;
use clap::{crate_version, Command};

fn cli() -> Command<'static> {
    Command::new("calc-cli")
        .version(crate_version!())
        .about("Command Line Controller for the calculator subscribers")
        .author("UMD Database Group")
        .args(args::get_logging_args())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(invoke::command_args::<GreetingHandler>(
            "Greets the name carried by a message",
        ))
        .subcommand(invoke::command_args::<CalcResultHandler>(
            "Reports the calculation result carried by a message",
        ))
        .subcommand(publish::command_args())
}

pub fn main() -> Result<()> {
    let matches = cli().get_matches();
    let (name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| anyhow::anyhow!("no subcommand given"))?;

    args::get_logging(&matches, sub_matches)?.init();

    if name == GreetingHandler::NAME {
        invoke::command(&GreetingHandler, sub_matches)
    } else if name == CalcResultHandler::NAME {
        invoke::command(&CalcResultHandler, sub_matches)
    } else {
        publish::command(sub_matches)
    }
}
