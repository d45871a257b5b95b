use crate::api::{api_client, ApiClient, ApiError};
use crate::models::AgentRecord;

pub async fn get_all_agents() -> Result<Vec<AgentRecord>, ApiError> {
    fetch_agents(api_client()).await
}

pub async fn fetch_agents(client: &ApiClient) -> Result<Vec<AgentRecord>, ApiError> {
    client.get("/api/agents").await
}
