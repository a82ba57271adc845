use crate::allow_list::AllowList;
use crate::constants::method;
use crate::context::RequestContext;
use crate::exchange::Exchange;
use crate::header_builder::attach_cors_headers;
use crate::headers::HeaderSink;
use crate::origin::extract_host;
use crate::result::{RequestDecision, ShortCircuit};
use crate::util::equals_or_both_blank;
use tracing::{debug, trace};

/// Allow-list based CORS filter with a request hook and a response hook.
///
/// The host registers [`OriginPolicy::evaluate_request`] to run before routing
/// and [`OriginPolicy::decorate_response`] to run once a response exists, and
/// passes the same [`Exchange`] to both. The policy keeps no per-request
/// state, so one instance can be shared by every worker.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allow_list: AllowList,
}

impl OriginPolicy {
    pub fn new(allow_list: AllowList) -> Self {
        Self { allow_list }
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// Decides what to do with a request without touching any exchange state.
    pub fn check(&self, request: &RequestContext<'_>) -> RequestDecision {
        let Some(origin) = request.origin else {
            trace!("no Origin header, passing through");
            return RequestDecision::Passthrough;
        };

        let origin_host = extract_host(origin);
        // The origin side is lower-cased, the Host header is compared as sent.
        if equals_or_both_blank(origin_host.as_deref(), request.host) {
            debug!(origin, host = request.host, "origin matches Host, passing through");
            return RequestDecision::Passthrough;
        }

        let allowed = origin_host
            .as_deref()
            .is_some_and(|host| self.allow_list.contains(host));
        if !allowed {
            debug!(origin, host = request.host, "origin host not allowed, rejecting");
            return RequestDecision::Forbidden(ShortCircuit::forbidden());
        }

        if request.method.eq_ignore_ascii_case(method::OPTIONS) {
            debug!(origin, "answering CORS preflight");
            return RequestDecision::Preflight(ShortCircuit::preflight(origin));
        }

        debug!(origin, method = request.method, "cross-origin request allowed");
        RequestDecision::Allowed
    }

    /// Request hook. Must run before routing.
    ///
    /// Nested exchanges are ignored. An [`RequestDecision::Allowed`] outcome
    /// marks the exchange so [`decorate_response`](Self::decorate_response)
    /// adds the CORS headers later; the two short-circuit outcomes carry the
    /// response the host must send instead of dispatching to a handler.
    pub fn evaluate_request(&self, exchange: &mut Exchange) -> RequestDecision {
        if !exchange.is_top_level() {
            trace!("nested exchange, skipping origin check");
            return RequestDecision::Passthrough;
        }

        let decision = self.check(&exchange.context());
        if decision == RequestDecision::Allowed {
            exchange.set_cors_allowed(true);
        }
        decision
    }

    /// Response hook. Must run after the response for `exchange` is final,
    /// whether a handler or the request hook produced it.
    pub fn decorate_response<S>(&self, exchange: &Exchange, response: &mut S)
    where
        S: HeaderSink + ?Sized,
    {
        if !exchange.is_top_level() || !exchange.is_cors_allowed() {
            trace!("exchange not marked for CORS, leaving response untouched");
            return;
        }

        let origin = exchange.origin().unwrap_or_default();
        attach_cors_headers(response, origin);
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
