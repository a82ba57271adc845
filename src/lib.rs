//! Allow-list based CORS origin filter.
//!
//! [`OriginPolicy`] exposes two hooks a host server wires around its router:
//! [`OriginPolicy::evaluate_request`] before routing and
//! [`OriginPolicy::decorate_response`] after the response is produced. The
//! hooks share one [`Exchange`] per request to carry the decision between them.

mod allow_list;
pub mod config;
pub mod constants;
mod context;
mod exchange;
mod header_builder;
mod headers;
mod origin;
mod policy;
mod result;
mod util;

pub use allow_list::{AllowList, ValidationError};
pub use config::ConfigError;
pub use context::RequestContext;
pub use exchange::{Exchange, ExchangeKind, NestedExchange};
pub use header_builder::attach_cors_headers;
pub use headers::{HeaderSink, Headers};
pub use origin::extract_host;
pub use policy::OriginPolicy;
pub use result::{RequestDecision, ShortCircuit};
