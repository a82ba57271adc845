use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use origin_policy_rs::{Exchange, RequestDecision};

use super::AppState;

/// Runs the request hook before routing and the response hook on whatever
/// response comes back, keeping the exchange alive across the handler.
pub async fn origin_policy_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let policy = state.policy.clone();
    let mut exchange = Exchange::from_request(&request);

    let mut response = match policy.evaluate_request(&mut exchange) {
        RequestDecision::Forbidden(result) | RequestDecision::Preflight(result) => {
            result.into_response::<Body>()
        }
        RequestDecision::Passthrough | RequestDecision::Allowed => next.run(request).await,
    };

    policy.decorate_response(&exchange, &mut response);
    response
}
