#![allow(dead_code)]

use origin_policy_rs::constants::method;
use origin_policy_rs::{AllowList, Exchange, ExchangeKind, OriginPolicy, RequestDecision};

pub const DEFAULT_HOSTS: [&str; 2] = ["example.com", "test.com"];

#[derive(Default)]
pub struct PolicyBuilder {
    hosts: Option<Vec<String>>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hosts = Some(hosts.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> OriginPolicy {
        let hosts = self
            .hosts
            .unwrap_or_else(|| DEFAULT_HOSTS.iter().map(|host| host.to_string()).collect());
        OriginPolicy::new(AllowList::new(hosts).expect("valid allow-list"))
    }
}

pub struct ExchangeBuilder {
    method: String,
    origin: Option<String>,
    host: Option<String>,
    kind: ExchangeKind,
}

impl ExchangeBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            origin: None,
            host: None,
            kind: ExchangeKind::TopLevel,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn nested(mut self) -> Self {
        self.kind = ExchangeKind::Nested;
        self
    }

    pub fn build(self) -> Exchange {
        let ExchangeBuilder {
            method,
            origin,
            host,
            kind,
        } = self;
        let mut exchange = Exchange::new(method).with_kind(kind);
        if let Some(origin) = origin {
            exchange = exchange.with_origin(origin);
        }
        if let Some(host) = host {
            exchange = exchange.with_host(host);
        }
        exchange
    }

    pub fn evaluate(self, policy: &OriginPolicy) -> (RequestDecision, Exchange) {
        let mut exchange = self.build();
        let decision = policy.evaluate_request(&mut exchange);
        (decision, exchange)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn simple_request() -> ExchangeBuilder {
    ExchangeBuilder::new(method::GET)
}

pub fn preflight_request() -> ExchangeBuilder {
    ExchangeBuilder::new(method::OPTIONS)
}
