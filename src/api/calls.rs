use crate::api::{call_api_client, ApiClient, ApiError};
use crate::models::{CallRequest, CallResponse};

/// Ask the call endpoint to place an outbound Retell call.
pub async fn start_call(request: &CallRequest) -> Result<CallResponse, ApiError> {
    create_call(call_api_client(), request).await
}

pub async fn create_call(client: &ApiClient, request: &CallRequest) -> Result<CallResponse, ApiError> {
    tracing::info!(
        "Requesting call {} -> {} via {}",
        request.from_number,
        request.dynamic_variables.to_number,
        client.base_url()
    );
    client.post("/api/retell/call", request).await
}
