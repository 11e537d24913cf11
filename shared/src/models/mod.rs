use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InvalidInputError;

pub mod events;

/// Reply returned for every recognized greeting
pub const REPLY: &str = "World";

/// Recognized values of the `input` field
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting {
    Hello,
    Hi,
}

impl Greeting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Greeting::Hello => "Hello",
            Greeting::Hi => "Hi",
        }
    }

    pub fn reply(&self) -> &'static str {
        REPLY
    }
}

// Exact, case-sensitive match
impl FromStr for Greeting {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hello" => Ok(Greeting::Hello),
            "Hi" => Ok(Greeting::Hi),
            _ => Err(InvalidInputError::InvalidValue),
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
