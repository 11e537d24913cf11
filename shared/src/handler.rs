use serde_json::Value;

use crate::error::Result;
use crate::models::events::GreetingEvent;
use crate::models::Greeting;

/// Maps an invocation payload to its reply.
///
/// Pure function of `event["input"]`: the event is only read and no state is
/// kept between calls. Logging belongs to the caller.
pub fn handle(event: &Value) -> Result<&'static str> {
    let event = GreetingEvent::from_event(event)?;
    let greeting: Greeting = event.input.parse()?;
    Ok(greeting.reply())
}
