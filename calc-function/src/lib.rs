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


#![warn(missing_docs, clippy::needless_borrow)]

//! `calc-function` runs the calc subscribers as cloud functions. Every binary
//! of this crate serves one subscriber; the function runtime delivers one
//! [`FunctionEvent`] per invocation.

use calc::prelude::*;
use lambda_runtime::{service_fn, LambdaEvent};
use log::debug;
use serde_json::{json, Value};

/// Initializes the logger of the function. `RUST_LOG` takes precedence over
/// the level in the configuration file.
pub fn init_logger() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(CALC_LOG_LEVEL.as_str()),
    )
    .init();
}

/// Handles one invocation of `subscriber`.
///
/// # Returns
/// The function response, once the message has been handled. An error fails
/// the invocation.
pub async fn handler<S: Subscriber>(subscriber: &S, event: FunctionEvent) -> Result<Value> {
    let message = event.data;
    debug!(
        "{} triggered by message {}",
        S::NAME,
        message.message_id.as_deref().unwrap_or("-")
    );

    subscriber.handle(&message, &mut LogSink)?;
    Ok(json!({ "handler": S::NAME, "status": "done" }))
}

/// Serves `subscriber` until the function runtime shuts down.
pub async fn run<S>(subscriber: S) -> std::result::Result<(), lambda_runtime::Error>
where
    S: Subscriber + Copy + Send + Sync + 'static,
{
    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<FunctionEvent>| async move {
            handler(&subscriber, event.payload).await
        },
    ))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn subscribe() -> Result<()> {
        let event: FunctionEvent = serde_json::from_value(json!({
            "data": { "data": "QWxpY2U=", "messageId": "1" }
        }))?;
        let res = handler(&GreetingHandler, event).await?;
        assert_eq!(json!({ "handler": "subscribe", "status": "done" }), res);
        Ok(())
    }

    #[tokio::test]
    async fn calc_result() -> Result<()> {
        let event = FunctionEvent::from(InboundMessage::empty());
        let res = handler(&CalcResultHandler, event).await?;
        assert_eq!("calc-result", res["handler"]);
        Ok(())
    }

    #[tokio::test]
    async fn calc_result_fails_on_invalid_json() {
        let event = FunctionEvent::from(InboundMessage::from_bytes("not json"));
        let res = handler(&CalcResultHandler, event).await;
        assert!(matches!(res, Err(CalcError::SerdeJson(_))));
    }
}
