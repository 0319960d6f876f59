//! Address Service Routes
//!
//! One endpoint behind the mandatory credential gate. A rejected
//! request never reaches the generator.

use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use diak::{auth::require_basic_auth, AddressPayload, CredentialGate};

use crate::generator;

/// Assemble the service router with the given gate.
pub fn app(gate: CredentialGate) -> Router {
    Router::new()
        .route(
            "/api/address",
            get(get_address)
                .layer(middleware::from_fn_with_state(gate, require_basic_auth)),
        )
        .fallback(not_found)
}

/// Return one freshly generated address
async fn get_address() -> Json<AddressPayload> {
    let payload = generator::random_address();
    tracing::info!(address_id = %payload.id, "Generated random address");
    Json(payload)
}

/// Fallback for unmatched routes
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" })))
}
