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


//! The publishing side of the calculator: it adds two numbers and publishes
//! the sum to the result topic, whose subscriber is
//! [`crate::handlers::CalcResultHandler`].
//!
//! Only the request is built here; sending it to the Pub/Sub service is left
//! to the caller.

use crate::error::{CalcError, Result};
use crate::message::InboundMessage;
use serde::{Deserialize, Serialize};

/// Adds two numbers given as text.
///
/// # Errors
/// Returns [`CalcError::InvalidInput`] if either operand is blank or is not
/// an integer.
pub fn add(number1: &str, number2: &str) -> Result<i64> {
    let (s1, s2) = (number1.trim(), number2.trim());
    if s1.is_empty() || s2.is_empty() {
        return Err(CalcError::InvalidInput(format!(
            "Number 1 or number 2 is blank: number1 - {:?}, number 2 - {:?}",
            number1, number2
        )));
    }

    let parse = |s: &str| {
        s.parse::<i64>().map_err(|_| {
            CalcError::InvalidInput(format!("Error occurred converting to number: {}", s))
        })
    };
    let (n1, n2) = (parse(s1)?, parse(s2)?);

    n1.checked_add(n2).ok_or_else(|| {
        CalcError::InvalidInput(format!("The sum of {} and {} overflows", n1, n2))
    })
}

/// Returns the fully qualified name of a resource in a project, e.g.
/// `projects/<project>/topics/<name>`.
pub fn fqrn(resource: &str, project: &str, name: &str) -> String {
    format!("projects/{}/{}/{}", project, resource, name)
}

/// Returns the fully qualified name of a topic.
pub fn full_topic_name(project: &str, topic: &str) -> String {
    fqrn("topics", project, topic)
}

/// The body of a publish call to a topic.
#[derive(Default, Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PublishRequest {
    /// The messages to publish.
    pub messages: Vec<InboundMessage>,
}

impl PublishRequest {
    /// Returns a request publishing one message whose payload is `text`.
    pub fn single(text: &str) -> Self {
        Self {
            messages: vec![InboundMessage::from_bytes(text)],
        }
    }

    /// Returns a request publishing the sum of a calculation.
    pub fn sum(sum: i64) -> Self {
        Self::single(&sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{GreetingHandler, Subscriber};
    use serde_json::json;

    #[test]
    fn add_numbers() -> Result<()> {
        assert_eq!(3, add("1", "2")?);
        assert_eq!(-5, add(" -7", "2 ")?);
        Ok(())
    }

    #[test]
    fn add_blank() {
        let err = add("", "2").unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput(_)));
        assert!(err.to_string().contains("Number 1 or number 2 is blank"));

        assert!(add("1", "  ").is_err());
    }

    #[test]
    fn add_not_a_number() {
        let err = add("1", "two").unwrap_err();
        assert_eq!(
            "Invalid input: Error occurred converting to number: two",
            err.to_string()
        );
        assert!(add(&i64::MAX.to_string(), "1").is_err());
    }

    #[test]
    fn topic_name() {
        assert_eq!(
            "projects/calculator-test-182623/topics/calcfinished",
            full_topic_name("calculator-test-182623", "calcfinished")
        );
        assert_eq!(
            "projects/p/subscriptions/s",
            fqrn("subscriptions", "p", "s")
        );
    }

    #[test]
    fn publish_request() -> Result<()> {
        let request = PublishRequest::sum(add("40", "2")?);
        assert_eq!(
            json!({ "messages": [{ "data": "NDI=" }] }),
            serde_json::to_value(&request)?
        );

        let mut lines: Vec<String> = vec![];
        GreetingHandler.handle(&request.messages[0], &mut lines)?;
        assert_eq!(vec!["Hello, 42"], lines);
        Ok(())
    }
}
