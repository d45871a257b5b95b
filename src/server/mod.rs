//! Server-side code for the Agent Command Center
//!
//! This module contains all backend functionality:
//! - Agent roster endpoint for the dashboard
//! - Call relay to the Retell AI voice API
//! - Configuration from the environment

pub mod config;
pub mod retell;
pub mod roster;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::models::{AgentRecord, CallResponse, ErrorBody};
use serde::Deserialize;

pub use config::ServerConfig;

const INVALID_BODY: &str = "No se recibió un cuerpo JSON válido.";
const INCOMPLETE_PARAMS: &str = "Parámetros incompletos.";
const INCOMPLETE_PARAMS_DETAILS: &str =
    "Faltan 'from_number', 'agent_id', o 'to_number' (en dynamic_variables).";
const RELAY_FAILED: &str = "No se pudo procesar la llamada con Retell AI.";

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Vec<AgentRecord>>,
    pub agent_fetch_delay: Duration,
    /// `None` when no Retell API key is configured
    pub retell: Option<retell::RetellClient>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        let retell = match &config.retell_api_key {
            Some(key) => Some(retell::RetellClient::new(key.clone(), &config.retell_base_url)),
            None => {
                tracing::warn!("RETELL_API_KEY not set, call relay will reject requests");
                None
            }
        };

        Self {
            roster: Arc::new(roster::mock_agents()),
            agent_fetch_delay: config.agent_fetch_delay,
            retell,
        }
    }
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    match origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => cors.allow_origin(origin),
        Some(Err(e)) => {
            tracing::warn!("Invalid CORS_ORIGIN ({}), allowing any origin", e);
            cors.allow_origin(Any)
        }
        None => cors.allow_origin(Any),
    }
}

/// Create the Axum router with all API routes
pub fn create_router(state: AppState, cors_origin: Option<&str>) -> Router {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))

        // Dashboard data
        .route("/api/agents", get(get_agents))

        // Call relay
        .route("/api/retell/call", post(create_call))

        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

// Health check
async fn health_check() -> &'static str {
    "OK"
}

// ============== Agent Routes ==============

async fn get_agents(State(state): State<Arc<AppState>>) -> Json<Vec<AgentRecord>> {
    // Simulated network latency so the loading state is visible
    if !state.agent_fetch_delay.is_zero() {
        tokio::time::sleep(state.agent_fetch_delay).await;
    }
    Json(state.roster.as_ref().clone())
}

// ============== Call Relay ==============

#[derive(Debug, Deserialize)]
struct RelayCallRequest {
    from_number: Option<String>,
    agent_id: Option<String>,
    #[serde(default)]
    retell_llm_dynamic_variables: serde_json::Map<String, serde_json::Value>,
}

type RelayError = (StatusCode, Json<ErrorBody>);

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

async fn create_call(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RelayCallRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CallResponse>), RelayError> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Rejected call request body: {}", e);
        (StatusCode::BAD_REQUEST, Json(ErrorBody::new(INVALID_BODY)))
    })?;

    let variables = &req.retell_llm_dynamic_variables;
    let to_number = non_empty(variables.get("to_number").and_then(|v| v.as_str()));

    let (Some(from_number), Some(agent_id), Some(to_number)) = (
        non_empty(req.from_number.as_deref()),
        non_empty(req.agent_id.as_deref()),
        to_number,
    ) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::with_details(INCOMPLETE_PARAMS, INCOMPLETE_PARAMS_DETAILS)),
        ));
    };

    let Some(retell) = state.retell.as_ref() else {
        tracing::error!("Call relay invoked without RETELL_API_KEY");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::with_details(RELAY_FAILED, "RETELL_API_KEY no está definida.")),
        ));
    };

    tracing::info!("[Retell API] Placing call with agent {}", agent_id);
    tracing::info!("[Retell API] Dynamic variables: {:?}", variables);

    let request = retell::CreatePhoneCallRequest {
        from_number,
        to_number,
        override_agent_id: agent_id,
        retell_llm_dynamic_variables: variables,
    };

    match retell.create_phone_call(&request).await {
        Ok(response) => {
            tracing::info!("[Retell API] Call created: {}", response.call_id);
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(e) => {
            tracing::error!("[Retell API] Call creation failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::with_details(RELAY_FAILED, e.to_string())),
            ))
        }
    }
}

/// Run the HTTP server until it stops
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config);
    let app = create_router(state, config.cors_origin.as_deref());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("Server running on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(retell_base_url: Option<&str>) -> ServerConfig {
        ServerConfig {
            retell_api_key: retell_base_url.map(|_| "key_test".to_string()),
            retell_base_url: retell_base_url.unwrap_or(retell::DEFAULT_BASE_URL).to_string(),
            agent_fetch_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    fn test_router(retell_base_url: Option<&str>) -> Router {
        create_router(AppState::from_config(&test_config(retell_base_url)), None)
    }

    fn call_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/retell/call")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const VALID_CALL: &str = r#"{
        "from_number": "+525593372460",
        "agent_id": "agent_be6e732a54198e22eb2b2713ed",
        "retell_llm_dynamic_variables": {
            "to_number": "+5215512345678",
            "firstname": "Lucía",
            "current_tim": "lunes, 2025-03-03 10:00:00",
            "week": "Semana1",
            "current_bimester": "Bimestre 01",
            "fecha_inicio": "",
            "risk_level": "Alto riesgo académico"
        }
    }"#;

    #[tokio::test]
    async fn test_health_check() {
        let response = test_router(None)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_get_agents_returns_roster_in_order() {
        let response = test_router(None)
            .oneshot(Request::builder().uri("/api/agents").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let agents: Vec<AgentRecord> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(agents, roster::mock_agents());
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let response = test_router(None).oneshot(call_request("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], INVALID_BODY);
    }

    #[tokio::test]
    async fn test_missing_to_number_is_bad_request() {
        let body = r#"{ "from_number": "+525593372460", "agent_id": "agent_x",
                        "retell_llm_dynamic_variables": { "to_number": "" } }"#;
        let response = test_router(None).oneshot(call_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], INCOMPLETE_PARAMS);
        assert_eq!(body["details"], INCOMPLETE_PARAMS_DETAILS);
    }

    #[tokio::test]
    async fn test_missing_from_number_is_bad_request() {
        let body = r#"{ "agent_id": "agent_x", "retell_llm_dynamic_variables": { "to_number": "+5215512345678" } }"#;
        let response = test_router(None).oneshot(call_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_relay_without_api_key_fails() {
        let response = test_router(None).oneshot(call_request(VALID_CALL)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], RELAY_FAILED);
        assert!(body["details"].as_str().unwrap().contains("RETELL_API_KEY"));
    }

    #[tokio::test]
    async fn test_relay_forwards_to_retell() {
        let retell = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/create-phone-call"))
            .and(body_partial_json(serde_json::json!({
                "from_number": "+525593372460",
                "to_number": "+5215512345678",
                "override_agent_id": "agent_be6e732a54198e22eb2b2713ed",
                "retell_llm_dynamic_variables": { "firstname": "Lucía", "week": "Semana1" }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "call_id": "call_789",
                "call_status": "registered"
            })))
            .expect(1)
            .mount(&retell)
            .await;

        let response = test_router(Some(&retell.uri()))
            .oneshot(call_request(VALID_CALL))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["call_id"], "call_789");
        assert_eq!(body["call_status"], "registered");
    }

    #[tokio::test]
    async fn test_relay_reports_retell_failure() {
        let retell = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/create-phone-call"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid from_number"))
            .mount(&retell)
            .await;

        let response = test_router(Some(&retell.uri()))
            .oneshot(call_request(VALID_CALL))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["error"], RELAY_FAILED);
        assert!(body["details"].as_str().unwrap().contains("Invalid from_number"));
    }

    #[tokio::test]
    async fn test_cors_preflight_allowed() {
        let router = create_router(
            AppState::from_config(&test_config(None)),
            Some("http://localhost:3000"),
        );
        let response = router
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/retell/call")
                    .header("Origin", "http://localhost:3000")
                    .header("Access-Control-Request-Method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_client_and_relay_end_to_end() {
        use crate::api::{calls::create_call, ApiClient, ApiError};
        use crate::models::{CallRequest, DynamicVariables};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, test_router(None)).await;
        });

        let request = CallRequest {
            from_number: "+525593372460".to_string(),
            agent_id: "agent_x".to_string(),
            dynamic_variables: DynamicVariables {
                to_number: String::new(),
                first_name: String::new(),
                current_time: String::new(),
                week: Default::default(),
                bimester: Default::default(),
                start_date: String::new(),
                risk_level: Default::default(),
            },
        };

        let client = ApiClient::new(&format!("http://{}", addr));
        let err = create_call(&client, &request).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected { status: 400, message: INCOMPLETE_PARAMS_DETAILS.to_string() }
        );
    }
}
