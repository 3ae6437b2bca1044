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


//! Configuration settings that affect all crates in current system.

use ini::Ini;
use lazy_static::lazy_static;

lazy_static! {
    /// Global settings.
    pub static ref CALC_CONF: Ini = Ini::load_from_str(include_str!("./config.toml"))
        .expect("the embedded config.toml must be valid INI");

    /// Default log level of the cloud functions and the command line.
    pub static ref CALC_LOG_LEVEL: String = CALC_CONF
        .get_from(Some("log"), "level")
        .unwrap_or("info")
        .to_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;

    #[test]
    fn setting_shows() -> Result<()> {
        let conf = Ini::load_from_str(include_str!("./config.toml"))?;

        for (sec, prop) in &conf {
            println!("Section: {:?}", sec);
            for (key, value) in prop.iter() {
                println!("{:?}:{:?}", key, value);
            }
        }

        assert_eq!(
            Some("calculator-test-182623"),
            conf.get_from(Some("pubsub"), "project_name")
        );
        assert_eq!(Some("calcfinished"), conf.get_from(Some("pubsub"), "result_topic"));
        assert_eq!("info", CALC_LOG_LEVEL.as_str());

        Ok(())
    }
}
