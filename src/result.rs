use crate::header_builder::attach_cors_headers;
use crate::headers::{HeaderSink, Headers};
use http::{Response, StatusCode};

/// A response produced by the request hook that ends the exchange before
/// routing. The body is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortCircuit {
    pub status: StatusCode,
    pub headers: Headers,
}

impl ShortCircuit {
    pub(crate) fn forbidden() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            headers: Headers::new(),
        }
    }

    pub(crate) fn preflight(origin: &str) -> Self {
        let mut headers = Headers::with_capacity(4);
        attach_cors_headers(&mut headers, origin);
        Self {
            status: StatusCode::OK,
            headers,
        }
    }

    /// Converts the short-circuit into an `http` response with an empty body.
    pub fn into_response<B: Default>(self) -> Response<B> {
        let mut response = Response::new(B::default());
        *response.status_mut() = self.status;
        for (name, value) in &self.headers {
            response.set_header(name, value);
        }
        response
    }
}

/// Outcome of the request hook for one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestDecision {
    /// Not a cross-origin exchange the policy cares about; nothing was changed.
    Passthrough,
    /// Origin host is not on the allow-list; respond with 403 and stop.
    Forbidden(ShortCircuit),
    /// Allowed preflight; respond with 200 and the CORS headers and stop.
    Preflight(ShortCircuit),
    /// Allowed cross-origin request; routing continues and the response hook
    /// will add the CORS headers.
    Allowed,
}

impl RequestDecision {
    pub fn short_circuit(&self) -> Option<&ShortCircuit> {
        match self {
            RequestDecision::Forbidden(result) | RequestDecision::Preflight(result) => Some(result),
            RequestDecision::Passthrough | RequestDecision::Allowed => None,
        }
    }

    pub fn into_short_circuit(self) -> Option<ShortCircuit> {
        match self {
            RequestDecision::Forbidden(result) | RequestDecision::Preflight(result) => Some(result),
            RequestDecision::Passthrough | RequestDecision::Allowed => None,
        }
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
