use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InvalidInputError, Result};

/// Name of the only field read from an incoming event
pub const INPUT_FIELD: &str = "input";

/// Validated form of an invocation payload
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GreetingEvent {
    pub input: String,
}

impl GreetingEvent {
    /// Checks presence and type of `input` in one step.
    ///
    /// A payload that is not a JSON object has no keys, so it reports the
    /// field as missing. Any non-string value is an invalid value.
    pub fn from_event(event: &Value) -> Result<Self> {
        let input = event
            .as_object()
            .and_then(|fields| fields.get(INPUT_FIELD))
            .ok_or(InvalidInputError::MissingField)?;

        match input {
            Value::String(input) => Ok(GreetingEvent {
                input: input.clone(),
            }),
            _ => Err(InvalidInputError::InvalidValue),
        }
    }
}
