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


//! Calc CLI adds two numbers and prints the request that publishes the sum to
//! the result topic.

use anyhow::Result;
use calc::prelude::*;
use clap::{Arg, ArgMatches, Command};

pub fn command(matches: &ArgMatches) -> Result<()> {
    let (topic, request) = publish_request(matches)?;
    println!("{}", topic);
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

pub fn command_args() -> Command<'static> {
    Command::new("add")
        .about("Adds two numbers and builds the request publishing the sum")
        .allow_negative_numbers(true)
        .arg(
            Arg::new("number1")
                .help("The first operand")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("number2")
                .help("The second operand")
                .required(true)
                .allow_hyphen_values(true)
                .index(2),
        )
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .value_name("PROJECT_NAME")
                .help("Overrides the project of the result topic")
                .takes_value(true),
        )
        .arg(
            Arg::new("topic")
                .long("topic")
                .value_name("RESULT_TOPIC")
                .help("Overrides the result topic")
                .takes_value(true),
        )
}

fn publish_request(matches: &ArgMatches) -> Result<(String, PublishRequest)> {
    let mut conf = PubsubConfig::from_env();
    if let Some(project) = matches.get_one::<String>("project") {
        conf.project_name = project.to_owned();
    }
    if let Some(topic) = matches.get_one::<String>("topic") {
        conf.result_topic = topic.to_owned();
    }
    let topic = conf.topic_id()?;

    let arg = |id: &str| matches.get_one::<String>(id).map(String::as_str).unwrap_or("");
    let sum = add(arg("number1"), arg("number2"))?;
    log::info!("Result is {}", sum);

    Ok((topic, PublishRequest::sum(sum)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_and_publish() -> Result<()> {
        let matches = command_args().get_matches_from([
            "add", "40", "2", "--project", "demo", "--topic", "sums",
        ]);
        let (topic, request) = publish_request(&matches)?;
        assert_eq!("projects/demo/topics/sums", topic);
        assert_eq!(
            json!({ "messages": [{ "data": "NDI=" }] }),
            serde_json::to_value(&request)?
        );
        Ok(())
    }

    #[test]
    fn negative_operands() -> Result<()> {
        let matches =
            command_args().get_matches_from(["add", "-1", "-2", "-p", "demo", "--topic", "sums"]);
        let (_, request) = publish_request(&matches)?;
        assert_eq!(PublishRequest::sum(-3), request);
        Ok(())
    }

    #[test]
    fn not_a_number() {
        let matches =
            command_args().get_matches_from(["add", "1", "x", "-p", "demo", "--topic", "sums"]);
        let err = publish_request(&matches).unwrap_err();
        assert!(err.to_string().contains("Error occurred converting to number: x"));
    }
}
