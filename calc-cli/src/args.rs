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


use anyhow::Result;
use calc::configs::CALC_LOG_LEVEL;
use clap::{Arg, ArgAction, ArgMatches};
use std::io::Write;

pub fn get_logging_args() -> Vec<Arg<'static>> {
    [
        Arg::new("log-level")
            .short('L')
            .long("log-level")
            .possible_values(["error", "warn", "info", "debug", "trace", "off"])
            .help("Log level [default: info]")
            .global(true)
            .takes_value(true),
        Arg::new("trace")
            .long("trace")
            .help("Log ultra-verbose (trace level) information")
            .global(true)
            .action(ArgAction::SetTrue),
        Arg::new("silent")
            .long("silent")
            .help("Suppress all output")
            .global(true)
            .action(ArgAction::SetTrue),
    ]
    .to_vec()
}

fn flag(global_matches: &ArgMatches, matches: &ArgMatches, id: &str) -> bool {
    [global_matches, matches]
        .iter()
        .any(|m| m.get_one::<bool>(id).copied().unwrap_or(false))
}

pub fn get_log_level(global_matches: &ArgMatches, matches: &ArgMatches) -> log::LevelFilter {
    if flag(global_matches, matches, "trace") {
        log::LevelFilter::Trace
    } else if flag(global_matches, matches, "silent") {
        log::LevelFilter::Off
    } else {
        match matches
            .get_one::<String>("log-level")
            .or_else(|| global_matches.get_one::<String>("log-level"))
            .map(String::as_str)
            .unwrap_or(CALC_LOG_LEVEL.as_str())
        {
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Info,
        }
    }
}

pub fn get_logging(
    global_matches: &ArgMatches,
    matches: &ArgMatches,
) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();

    let level = get_log_level(global_matches, matches);
    builder.filter(None, level);

    if level == log::LevelFilter::Trace {
        builder.format_timestamp_secs();
    } else {
        builder.format(|f, record| {
            writeln!(
                f,
                "[{}] {}",
                record.level().to_string().to_lowercase(),
                record.args()
            )
        });
    }

    Ok(builder)
}
