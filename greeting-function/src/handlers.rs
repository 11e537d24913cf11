use greeting_shared::handler::handle;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, error, info};

// Lambda handler function - public for testing
pub async fn handler(event: LambdaEvent<Value>) -> Result<String, Error> {
    let (payload, context) = event.into_parts();

    info!("Starting function, request_id={}", context.request_id);
    info!("Received event: {}", payload);

    match handle(&payload) {
        Ok(reply) => {
            debug!("Responding with {:?}", reply);
            Ok(reply.to_string())
        }
        Err(err) => {
            // Logged once here, then handed to the runtime as-is
            error!("Error processing event: {}", err);
            Err(err.into())
        }
    }
}
