use crate::constants::{header, value};
use crate::headers::HeaderSink;

/// Writes the four CORS response headers for `origin` into `sink`.
///
/// `origin` is echoed verbatim. Every header is overwritten, so applying the
/// headers twice leaves the same values behind.
pub fn attach_cors_headers<S>(sink: &mut S, origin: &str)
where
    S: HeaderSink + ?Sized,
{
    sink.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    sink.set_header(header::ACCESS_CONTROL_ALLOW_METHODS, value::ALLOW_METHODS);
    sink.set_header(header::ACCESS_CONTROL_ALLOW_HEADERS, value::ALLOW_HEADERS);
    sink.set_header(header::ACCESS_CONTROL_MAX_AGE, value::MAX_AGE);
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
