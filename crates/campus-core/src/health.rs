use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness probe. The portal is ready as soon as
/// it is serving; record-store reachability surfaces per request as 503.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
