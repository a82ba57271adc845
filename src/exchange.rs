use crate::constants::header;
use crate::context::RequestContext;
use http::HeaderMap;

/// Position of an exchange in the server's dispatch tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExchangeKind {
    /// The outermost request received from the client.
    #[default]
    TopLevel,
    /// A request the server dispatched internally while handling another one.
    Nested,
}

/// Marker a host inserts into [`http::Extensions`] to flag an internally
/// dispatched sub-request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedExchange;

/// Per-exchange state shared by the request and response hooks.
///
/// An `Exchange` lives exactly as long as one request/response cycle. The
/// request hook records its decision in the `cors_allowed` flag and the
/// response hook reads it back, so the host must hand the same value to both.
#[derive(Debug, Clone)]
pub struct Exchange {
    kind: ExchangeKind,
    method: String,
    origin: Option<String>,
    host: Option<String>,
    cors_allowed: bool,
}

impl Exchange {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            kind: ExchangeKind::TopLevel,
            method: method.into(),
            origin: None,
            host: None,
            cors_allowed: false,
        }
    }

    /// Snapshots the method, `Origin` and `Host` headers of an `http` request.
    ///
    /// A request carrying [`NestedExchange`] in its extensions is treated as
    /// nested. Header bytes that are not valid UTF-8 are decoded lossily, so a
    /// present header is never reported as absent.
    pub fn from_request<B>(request: &http::Request<B>) -> Self {
        let headers = request.headers();
        let kind = if request.extensions().get::<NestedExchange>().is_some() {
            ExchangeKind::Nested
        } else {
            ExchangeKind::TopLevel
        };

        Self {
            kind,
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            host: header_value(headers, header::HOST),
            cors_allowed: false,
        }
    }

    pub fn with_kind(mut self, kind: ExchangeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the `Origin` value the hooks will see.
    ///
    /// The value is echoed into `Access-Control-Allow-Origin` once allowed, so
    /// it must be a valid HTTP header value: no CR, LF or other control bytes.
    /// [`http::HeaderMap`] sinks skip a value that breaks this rule.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn kind(&self) -> ExchangeKind {
        self.kind
    }

    pub fn is_top_level(&self) -> bool {
        self.kind == ExchangeKind::TopLevel
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn is_cors_allowed(&self) -> bool {
        self.cors_allowed
    }

    pub fn set_cors_allowed(&mut self, allowed: bool) {
        self.cors_allowed = allowed;
    }

    pub fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            host: self.host.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;
