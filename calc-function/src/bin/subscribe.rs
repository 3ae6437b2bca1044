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


//! The cloud function that greets the name carried by every message.

use calc::prelude::*;
use calc_function::{init_logger, run};

#[tokio::main]
async fn main() -> std::result::Result<(), lambda_runtime::Error> {
    init_logger();
    run(GreetingHandler).await?;
    Ok(())
}
